//! CV resolve step: template + CV data → [`Page`].

use tracing::debug;

use crate::models::customization::{CvCustomization, CvLayout, FontFamily, SkillBarStyle};
use crate::models::cv::{CvData, PersonalInfo};
use crate::models::DocumentKind;
use crate::render::format::{date_range, non_empty};
use crate::render::page::{
    Align, Background, Block, Body, Contact, EntryBlock, Icon, Identity, Page, Section, SectionKind,
    SkillBlock, Theme,
};
use crate::render::style;
use crate::templates::{CvPreset, Preset, Template};

/// Per-template choices that the content builders need.
struct Scheme {
    icons: bool,
    show_skill_bars: bool,
    skill_bar_style: SkillBarStyle,
    skill_color: String,
}

pub fn resolve(template: Template<CvPreset>, cv: &CvData) -> Page {
    let page = match template {
        Template::Fixed(CvPreset::Modern) => modern(cv),
        Template::Fixed(CvPreset::Classic) => classic(cv),
        Template::Fixed(CvPreset::Creative) => creative(cv),
        Template::Custom => custom(cv, &cv.customization),
    };
    debug!(template = page.template, "resolved cv page");
    page
}

// ────────────────────────────────────────────────────────────────────────────
// Fixed templates
// ────────────────────────────────────────────────────────────────────────────

fn modern(cv: &CvData) -> Page {
    let scheme = Scheme {
        icons: true,
        show_skill_bars: true,
        skill_bar_style: SkillBarStyle::Bars,
        skill_color: "#3b82f6".to_string(),
    };
    let header = identity(
        &cv.personal_info,
        Background::Gradient {
            from: "#1e40af".to_string(),
            to: "#3b82f6".to_string(),
        },
        "#ffffff",
        Align::Left,
        scheme.icons,
    );
    Page {
        kind: DocumentKind::Cv,
        template: CvPreset::Modern.id(),
        title: title(&cv.personal_info),
        theme: Theme {
            font_family: FontFamily::Inter.css_stack(),
            text_color: "#1f2937".to_string(),
            background_color: "#ffffff".to_string(),
            heading_color: "#1e40af".to_string(),
            accent_color: "#3b82f6".to_string(),
            border_radius: 4,
            section_gap: "1.5rem",
            heading_rule: true,
        },
        header: Some(header),
        body: Body::Single {
            sections: single_column(cv, &scheme),
        },
    }
}

fn classic(cv: &CvData) -> Page {
    let scheme = Scheme {
        icons: false,
        show_skill_bars: false,
        skill_bar_style: SkillBarStyle::Bars,
        skill_color: "#111827".to_string(),
    };
    let header = identity(
        &cv.personal_info,
        Background::None,
        "#111827",
        Align::Center,
        scheme.icons,
    );
    Page {
        kind: DocumentKind::Cv,
        template: CvPreset::Classic.id(),
        title: title(&cv.personal_info),
        theme: Theme {
            font_family: FontFamily::Georgia.css_stack(),
            text_color: "#111827".to_string(),
            background_color: "#ffffff".to_string(),
            heading_color: "#111827".to_string(),
            accent_color: "#111827".to_string(),
            border_radius: 0,
            section_gap: "1.25rem",
            heading_rule: true,
        },
        header: Some(header),
        body: Body::Single {
            sections: single_column(cv, &scheme),
        },
    }
}

fn creative(cv: &CvData) -> Page {
    let scheme = Scheme {
        icons: true,
        show_skill_bars: true,
        skill_bar_style: SkillBarStyle::Dots,
        skill_color: "#ffffff".to_string(),
    };
    let sidebar_identity = identity(
        &cv.personal_info,
        Background::Solid {
            color: "#6d28d9".to_string(),
        },
        "#ffffff",
        Align::Left,
        scheme.icons,
    );
    Page {
        kind: DocumentKind::Cv,
        template: CvPreset::Creative.id(),
        title: title(&cv.personal_info),
        theme: Theme {
            font_family: FontFamily::Montserrat.css_stack(),
            text_color: "#1f2937".to_string(),
            background_color: "#faf5ff".to_string(),
            heading_color: "#6d28d9".to_string(),
            accent_color: "#a78bfa".to_string(),
            border_radius: 10,
            section_gap: "1.5rem",
            heading_rule: false,
        },
        header: None,
        body: Body::Sidebar {
            identity: sidebar_identity,
            sidebar: skills_section(cv, &scheme).into_iter().collect(),
            main: [
                summary_section(&cv.personal_info, scheme.icons),
                experience_section(cv, scheme.icons),
                education_section(cv, scheme.icons),
            ]
            .into_iter()
            .flatten()
            .collect(),
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Custom template
// ────────────────────────────────────────────────────────────────────────────

fn custom(cv: &CvData, custom: &CvCustomization) -> Page {
    let base = &custom.base;
    let scheme = Scheme {
        icons: base.show_icons,
        show_skill_bars: custom.show_skill_bars,
        skill_bar_style: custom.skill_bar_style,
        skill_color: base.accent_color.clone(),
    };
    let identity = identity(
        &cv.personal_info,
        style::header_background(base.header_style, &base.header_color, &base.accent_color),
        "#ffffff",
        Align::Left,
        scheme.icons,
    );
    let theme = Theme {
        font_family: base.font_family.css_stack(),
        text_color: base.text_color.clone(),
        background_color: base.background_color.clone(),
        heading_color: base.header_color.clone(),
        accent_color: base.accent_color.clone(),
        border_radius: base.border_radius,
        section_gap: style::section_gap(base.section_spacing),
        heading_rule: true,
    };

    let (header, body) = match custom.layout {
        CvLayout::Traditional => (
            Some(identity),
            Body::Single {
                sections: single_column(cv, &scheme),
            },
        ),
        CvLayout::Sidebar => (
            None,
            Body::Sidebar {
                identity,
                sidebar: skills_section(cv, &scheme).into_iter().collect(),
                main: [
                    summary_section(&cv.personal_info, scheme.icons),
                    experience_section(cv, scheme.icons),
                    education_section(cv, scheme.icons),
                ]
                .into_iter()
                .flatten()
                .collect(),
            },
        ),
        CvLayout::Modern => (
            Some(identity),
            Body::Split {
                left: [
                    experience_section(cv, scheme.icons),
                    education_section(cv, scheme.icons),
                ]
                .into_iter()
                .flatten()
                .collect(),
                right: [
                    summary_section(&cv.personal_info, scheme.icons),
                    skills_section(cv, &scheme),
                ]
                .into_iter()
                .flatten()
                .collect(),
            },
        ),
    };

    Page {
        kind: DocumentKind::Cv,
        template: crate::templates::CUSTOM_TEMPLATE_ID,
        title: title(&cv.personal_info),
        theme,
        header,
        body,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Content builders
// ────────────────────────────────────────────────────────────────────────────

fn title(info: &PersonalInfo) -> String {
    match non_empty(&info.full_name) {
        Some(name) => format!("{name} - CV"),
        None => "Curriculum Vitae".to_string(),
    }
}

fn icon_if(show: bool, icon: Icon) -> Option<Icon> {
    show.then_some(icon)
}

fn contacts(info: &PersonalInfo, icons: bool) -> Vec<Contact> {
    [
        (Icon::Email, &info.email),
        (Icon::Phone, &info.phone),
        (Icon::Location, &info.address),
        (Icon::Linkedin, &info.linkedin),
        (Icon::Github, &info.github),
        (Icon::Website, &info.website),
    ]
    .into_iter()
    .filter_map(|(icon, value)| {
        non_empty(value).map(|text| Contact {
            icon: icon_if(icons, icon),
            text,
        })
    })
    .collect()
}

fn identity(
    info: &PersonalInfo,
    background: Background,
    text_color: &str,
    align: Align,
    icons: bool,
) -> Identity {
    Identity {
        background,
        text_color: text_color.to_string(),
        align,
        logo: None,
        name: non_empty(&info.full_name),
        headline: non_empty(&info.title),
        contacts: contacts(info, icons),
    }
}

fn single_column(cv: &CvData, scheme: &Scheme) -> Vec<Section> {
    [
        summary_section(&cv.personal_info, scheme.icons),
        experience_section(cv, scheme.icons),
        education_section(cv, scheme.icons),
        skills_section(cv, scheme),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn summary_section(info: &PersonalInfo, icons: bool) -> Option<Section> {
    let blocks = non_empty(&info.summary)
        .map(|text| Block::Paragraph { text })
        .into_iter()
        .collect();
    Section::build(
        SectionKind::Summary,
        Some("Profile"),
        icon_if(icons, Icon::Profile),
        blocks,
    )
}

fn experience_section(cv: &CvData, icons: bool) -> Option<Section> {
    let blocks = cv
        .experience
        .iter()
        .map(|exp| {
            Block::Entry(EntryBlock {
                title: exp.position.trim().to_string(),
                subtitle: non_empty(&exp.company),
                dates: date_range(&exp.start_date, &exp.end_date, exp.current),
                location: non_empty(&exp.location),
                details: non_empty(&exp.description),
            })
        })
        .collect();
    Section::build(
        SectionKind::Experience,
        Some("Experience"),
        icon_if(icons, Icon::Briefcase),
        blocks,
    )
}

fn education_section(cv: &CvData, icons: bool) -> Option<Section> {
    let blocks = cv
        .education
        .iter()
        .map(|edu| {
            let title = match (non_empty(&edu.degree), non_empty(&edu.field)) {
                (Some(degree), Some(field)) => format!("{degree} in {field}"),
                (Some(only), None) | (None, Some(only)) => only,
                (None, None) => String::new(),
            };
            Block::Entry(EntryBlock {
                title,
                subtitle: non_empty(&edu.institution),
                dates: date_range(&edu.start_date, &edu.end_date, false),
                location: None,
                details: edu
                    .gpa
                    .as_deref()
                    .and_then(non_empty)
                    .map(|gpa| format!("GPA: {gpa}")),
            })
        })
        .collect();
    Section::build(
        SectionKind::Education,
        Some("Education"),
        icon_if(icons, Icon::Graduation),
        blocks,
    )
}

fn skills_section(cv: &CvData, scheme: &Scheme) -> Option<Section> {
    let blocks = cv
        .skills
        .iter()
        .map(|skill| {
            Block::Skill(SkillBlock {
                name: skill.name.trim().to_string(),
                level: skill.level.label().to_string(),
                meter: style::skill_meter(
                    scheme.show_skill_bars,
                    scheme.skill_bar_style,
                    skill.level.percentage(),
                ),
                color: scheme.skill_color.clone(),
            })
        })
        .collect();
    Section::build(
        SectionKind::Skills,
        Some("Skills"),
        icon_if(scheme.icons, Icon::Star),
        blocks,
    )
}
