//! Job proposal resolve step: template + proposal data → [`Page`].

use tracing::debug;

use crate::models::customization::{FontFamily, LogoPosition, ProposalCustomization};
use crate::models::job_proposal::{JobProposalData, ProposalInfo};
use crate::models::DocumentKind;
use crate::render::format::{format_date, non_empty, paragraphs};
use crate::render::page::{
    Align, Background, Block, Body, Contact, EntryBlock, Icon, Identity, Logo, MilestoneBlock, Page,
    Section, SectionKind, Theme,
};
use crate::render::style;
use crate::templates::{Preset, ProposalPreset, Template, CUSTOM_TEMPLATE_ID};

pub fn resolve(template: Template<ProposalPreset>, proposal: &JobProposalData) -> Page {
    let page = match template {
        Template::Fixed(ProposalPreset::Professional) => professional(proposal),
        Template::Fixed(ProposalPreset::Modern) => modern(proposal),
        Template::Custom => custom(proposal, &proposal.customization),
    };
    debug!(template = page.template, "resolved job proposal page");
    page
}

fn professional(proposal: &JobProposalData) -> Page {
    Page {
        kind: DocumentKind::JobProposal,
        template: ProposalPreset::Professional.id(),
        title: title(&proposal.basic_info),
        theme: Theme {
            font_family: FontFamily::OpenSans.css_stack(),
            text_color: "#1f2937".to_string(),
            background_color: "#ffffff".to_string(),
            heading_color: "#1e3a8a".to_string(),
            accent_color: "#1e3a8a".to_string(),
            border_radius: 4,
            section_gap: "1.5rem",
            heading_rule: true,
        },
        header: Some(identity(
            &proposal.basic_info,
            Background::Solid {
                color: "#1e3a8a".to_string(),
            },
            Align::Left,
            Align::Left,
            false,
        )),
        body: Body::Single {
            sections: sections(proposal, false),
        },
    }
}

fn modern(proposal: &JobProposalData) -> Page {
    Page {
        kind: DocumentKind::JobProposal,
        template: ProposalPreset::Modern.id(),
        title: title(&proposal.basic_info),
        theme: Theme {
            font_family: FontFamily::Inter.css_stack(),
            text_color: "#111827".to_string(),
            background_color: "#ffffff".to_string(),
            heading_color: "#4338ca".to_string(),
            accent_color: "#818cf8".to_string(),
            border_radius: 8,
            section_gap: "1.75rem",
            heading_rule: true,
        },
        header: Some(identity(
            &proposal.basic_info,
            Background::Gradient {
                from: "#4338ca".to_string(),
                to: "#818cf8".to_string(),
            },
            Align::Center,
            Align::Center,
            true,
        )),
        body: Body::Single {
            sections: sections(proposal, true),
        },
    }
}

fn custom(proposal: &JobProposalData, custom: &ProposalCustomization) -> Page {
    let base = &custom.base;
    let logo_align = match custom.logo_position {
        LogoPosition::Left => Align::Left,
        LogoPosition::Center => Align::Center,
        LogoPosition::Right => Align::Right,
    };
    Page {
        kind: DocumentKind::JobProposal,
        template: CUSTOM_TEMPLATE_ID,
        title: title(&proposal.basic_info),
        theme: Theme {
            font_family: base.font_family.css_stack(),
            text_color: base.text_color.clone(),
            background_color: base.background_color.clone(),
            heading_color: base.header_color.clone(),
            accent_color: base.accent_color.clone(),
            border_radius: base.border_radius,
            section_gap: style::section_gap(base.section_spacing),
            heading_rule: true,
        },
        header: Some(identity(
            &proposal.basic_info,
            style::header_background(base.header_style, &base.header_color, &base.accent_color),
            Align::Left,
            logo_align,
            base.show_icons,
        )),
        body: Body::Single {
            sections: sections(proposal, base.show_icons),
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Content builders
// ────────────────────────────────────────────────────────────────────────────

fn title(info: &ProposalInfo) -> String {
    match non_empty(&info.project_title) {
        Some(project) => format!("{project} - Proposal"),
        None => "Job Proposal".to_string(),
    }
}

fn identity(
    info: &ProposalInfo,
    background: Background,
    align: Align,
    logo_align: Align,
    icons: bool,
) -> Identity {
    let contacts = [
        (Icon::Email, &info.email),
        (Icon::Phone, &info.phone),
        (Icon::Website, &info.website),
        (Icon::Location, &info.address),
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
        align,
        logo: non_empty(&info.company_logo).map(|src| Logo {
            src,
            align: logo_align,
        }),
        name: non_empty(&info.company_name),
        headline: non_empty(&info.contact_name),
        contacts,
    }
}

fn field(label: &str, value: Option<String>) -> Option<Block> {
    value.map(|value| Block::Field {
        label: label.to_string(),
        value,
    })
}

fn sections(proposal: &JobProposalData, icons: bool) -> Vec<Section> {
    let info = &proposal.basic_info;
    let icon = |icon: Icon| icons.then_some(icon);

    let client = match (non_empty(&info.client_name), non_empty(&info.client_company)) {
        (Some(name), Some(company)) => Some(format!("{name}, {company}")),
        (Some(only), None) | (None, Some(only)) => Some(only),
        (None, None) => None,
    };
    let overview = [
        field("Project", non_empty(&info.project_title)),
        field("Client", client),
        field("Date", format_date(&info.date)),
        field("Valid until", format_date(&info.valid_until)),
    ]
    .into_iter()
    .flatten()
    .collect();

    let introduction = paragraphs(&info.introduction)
        .into_iter()
        .map(|text| Block::Paragraph { text })
        .collect();

    let deliverables = proposal
        .deliverables
        .iter()
        .map(|d| {
            Block::Entry(EntryBlock {
                title: d.title.trim().to_string(),
                subtitle: None,
                dates: None,
                location: None,
                details: non_empty(&d.description),
            })
        })
        .collect();

    let milestones = proposal
        .milestones
        .iter()
        .map(|m| {
            Block::Milestone(MilestoneBlock {
                title: m.title.trim().to_string(),
                description: non_empty(&m.description),
                deadline: format_date(&m.deadline).map(|date| format!("Due {date}")),
                payment: non_empty(&m.payment),
            })
        })
        .collect();

    let budget = field("Total", non_empty(&proposal.total_budget))
        .into_iter()
        .collect();

    let terms = paragraphs(&proposal.terms)
        .into_iter()
        .map(|text| Block::Paragraph { text })
        .collect();

    [
        Section::build(SectionKind::Overview, Some("Project Overview"), icon(Icon::Document), overview),
        Section::build(SectionKind::Introduction, Some("Introduction"), icon(Icon::Profile), introduction),
        Section::build(SectionKind::Deliverables, Some("Deliverables"), icon(Icon::Check), deliverables),
        Section::build(SectionKind::Milestones, Some("Milestones"), icon(Icon::Flag), milestones),
        Section::build(SectionKind::Budget, Some("Investment"), icon(Icon::Money), budget),
        Section::build(SectionKind::Terms, Some("Terms & Conditions"), icon(Icon::Calendar), terms),
    ]
    .into_iter()
    .flatten()
    .collect()
}
