//! Cover letter resolve step: template + letter data → [`Page`].

use tracing::debug;

use crate::models::cover_letter::{CoverLetterData, SenderInfo};
use crate::models::customization::{Customization, FontFamily};
use crate::models::DocumentKind;
use crate::render::format::{format_date, non_empty, paragraphs};
use crate::render::page::{
    Align, Background, Block, Body, Contact, Icon, Identity, Page, Section, SectionKind, Theme,
};
use crate::render::style;
use crate::templates::{LetterPreset, Preset, Template, CUSTOM_TEMPLATE_ID};

pub fn resolve(template: Template<LetterPreset>, letter: &CoverLetterData) -> Page {
    let page = match template {
        Template::Fixed(LetterPreset::Professional) => professional(letter),
        Template::Fixed(LetterPreset::Modern) => modern(letter),
        Template::Fixed(LetterPreset::Creative) => creative(letter),
        Template::Custom => {
            let defaults = Customization::default();
            custom(letter, letter.customization.as_ref().unwrap_or(&defaults))
        }
    };
    debug!(template = page.template, "resolved cover letter page");
    page
}

fn professional(letter: &CoverLetterData) -> Page {
    Page {
        kind: DocumentKind::CoverLetter,
        template: LetterPreset::Professional.id(),
        title: title(&letter.personal_info),
        theme: Theme {
            font_family: FontFamily::Merriweather.css_stack(),
            text_color: "#1f2937".to_string(),
            background_color: "#ffffff".to_string(),
            heading_color: "#1f2937".to_string(),
            accent_color: "#1f2937".to_string(),
            border_radius: 0,
            section_gap: "1.25rem",
            heading_rule: false,
        },
        header: Some(identity(
            &letter.personal_info,
            Background::Solid {
                color: "#1f2937".to_string(),
            },
            false,
        )),
        body: Body::Single {
            sections: letter_sections(letter),
        },
    }
}

fn modern(letter: &CoverLetterData) -> Page {
    Page {
        kind: DocumentKind::CoverLetter,
        template: LetterPreset::Modern.id(),
        title: title(&letter.personal_info),
        theme: Theme {
            font_family: FontFamily::Inter.css_stack(),
            text_color: "#111827".to_string(),
            background_color: "#ffffff".to_string(),
            heading_color: "#0f766e".to_string(),
            accent_color: "#14b8a6".to_string(),
            border_radius: 6,
            section_gap: "1.5rem",
            heading_rule: false,
        },
        header: Some(identity(
            &letter.personal_info,
            Background::Gradient {
                from: "#0f766e".to_string(),
                to: "#14b8a6".to_string(),
            },
            true,
        )),
        body: Body::Single {
            sections: letter_sections(letter),
        },
    }
}

fn creative(letter: &CoverLetterData) -> Page {
    Page {
        kind: DocumentKind::CoverLetter,
        template: LetterPreset::Creative.id(),
        title: title(&letter.personal_info),
        theme: Theme {
            font_family: FontFamily::Lato.css_stack(),
            text_color: "#1f2937".to_string(),
            background_color: "#ffffff".to_string(),
            heading_color: "#be185d".to_string(),
            accent_color: "#f472b6".to_string(),
            border_radius: 12,
            section_gap: "1.5rem",
            heading_rule: false,
        },
        header: None,
        body: Body::Sidebar {
            identity: identity(
                &letter.personal_info,
                Background::Solid {
                    color: "#be185d".to_string(),
                },
                true,
            ),
            sidebar: Vec::new(),
            main: letter_sections(letter),
        },
    }
}

fn custom(letter: &CoverLetterData, custom: &Customization) -> Page {
    Page {
        kind: DocumentKind::CoverLetter,
        template: CUSTOM_TEMPLATE_ID,
        title: title(&letter.personal_info),
        theme: Theme {
            font_family: custom.font_family.css_stack(),
            text_color: custom.text_color.clone(),
            background_color: custom.background_color.clone(),
            heading_color: custom.header_color.clone(),
            accent_color: custom.accent_color.clone(),
            border_radius: custom.border_radius,
            section_gap: style::section_gap(custom.section_spacing),
            heading_rule: false,
        },
        header: Some(identity(
            &letter.personal_info,
            style::header_background(custom.header_style, &custom.header_color, &custom.accent_color),
            custom.show_icons,
        )),
        body: Body::Single {
            sections: letter_sections(letter),
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Content builders
// ────────────────────────────────────────────────────────────────────────────

fn title(sender: &SenderInfo) -> String {
    match non_empty(&sender.full_name) {
        Some(name) => format!("{name} - Cover Letter"),
        None => "Cover Letter".to_string(),
    }
}

fn identity(sender: &SenderInfo, background: Background, icons: bool) -> Identity {
    let contacts = [
        (Icon::Email, &sender.email),
        (Icon::Phone, &sender.phone),
        (Icon::Location, &sender.address),
        (Icon::Linkedin, &sender.linkedin),
    ]
    .into_iter()
    .filter_map(|(icon, value)| {
        non_empty(value).map(|text| Contact {
            icon: icons.then_some(icon),
            text,
        })
    })
    .collect();

    Identity {
        background,
        text_color: "#ffffff".to_string(),
        align: Align::Left,
        logo: None,
        name: non_empty(&sender.full_name),
        headline: None,
        contacts,
    }
}

/// Recipient, date, subject, letter body and signature, in reading order.
fn letter_sections(letter: &CoverLetterData) -> Vec<Section> {
    let recipient = &letter.recipient_info;
    let content = &letter.content;

    let recipient_lines: Vec<String> = [&recipient.name, &recipient.title, &recipient.company]
        .into_iter()
        .filter_map(|value| non_empty(value))
        .chain(recipient.address.lines().filter_map(non_empty))
        .collect();
    let recipient_blocks = if recipient_lines.is_empty() {
        Vec::new()
    } else {
        vec![Block::Lines {
            lines: recipient_lines,
        }]
    };

    let date_blocks = format_date(&content.date)
        .map(|text| Block::Paragraph { text })
        .into_iter()
        .collect();

    let subject_blocks = non_empty(&content.position)
        .map(|value| Block::Field {
            label: "Re:".to_string(),
            value,
        })
        .into_iter()
        .collect();

    let letter_blocks = non_empty(&content.greeting)
        .into_iter()
        .chain(paragraphs(&content.introduction))
        .chain(paragraphs(&content.body))
        .chain(paragraphs(&content.closing))
        .map(|text| Block::Paragraph { text })
        .collect();

    let signature_lines: Vec<String> = [&content.sign_off, &letter.personal_info.full_name]
        .into_iter()
        .filter_map(|value| non_empty(value))
        .collect();
    let signature_blocks = if signature_lines.is_empty() {
        Vec::new()
    } else {
        vec![Block::Lines {
            lines: signature_lines,
        }]
    };

    [
        Section::build(SectionKind::Recipient, None, None, recipient_blocks),
        Section::build(SectionKind::Date, None, None, date_blocks),
        Section::build(SectionKind::Subject, None, None, subject_blocks),
        Section::build(SectionKind::Letter, None, None, letter_blocks),
        Section::build(SectionKind::Signature, None, None, signature_blocks),
    ]
    .into_iter()
    .flatten()
    .collect()
}
