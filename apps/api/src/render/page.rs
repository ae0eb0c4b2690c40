//! Resolved visual parameters of one rendered document.
//!
//! A [`Page`] is what the per-document resolve step produces from a template
//! and a document: every section presence decision, every text value and every
//! color already settled. The preview and print materialisers only translate
//! it, so both outputs carry the same content and style decisions.

use serde::Serialize;

use crate::models::DocumentKind;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub kind: DocumentKind,
    pub template: &'static str,
    /// Used as the print document's `<title>`.
    pub title: String,
    pub theme: Theme,
    /// Full-width header. `None` when identity lives in a sidebar.
    pub header: Option<Identity>,
    pub body: Body,
}

/// Page-wide typography, colors and rhythm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    pub font_family: &'static str,
    pub text_color: String,
    pub background_color: String,
    pub heading_color: String,
    pub accent_color: String,
    pub border_radius: u8,
    /// CSS length between consecutive sections.
    pub section_gap: &'static str,
    /// Draw an accent-colored rule under section headings.
    pub heading_rule: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Background {
    None,
    Solid { color: String },
    Gradient { from: String, to: String },
    /// Base fill with a dotted tint on top.
    Pattern { color: String },
}

/// Name, headline, contacts and optional logo: a header or a sidebar top.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identity {
    pub background: Background,
    pub text_color: String,
    pub align: Align,
    pub logo: Option<Logo>,
    pub name: Option<String>,
    pub headline: Option<String>,
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Logo {
    pub src: String,
    pub align: Align,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub icon: Option<Icon>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Body {
    Single {
        sections: Vec<Section>,
    },
    /// Colored sidebar holding the identity block plus `sidebar` sections.
    Sidebar {
        identity: Identity,
        sidebar: Vec<Section>,
        main: Vec<Section>,
    },
    Split {
        left: Vec<Section>,
        right: Vec<Section>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
    Recipient,
    Date,
    Subject,
    Letter,
    Signature,
    Overview,
    Introduction,
    Deliverables,
    Milestones,
    Budget,
    Terms,
}

impl SectionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Summary => "summary",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Recipient => "recipient",
            SectionKind::Date => "date",
            SectionKind::Subject => "subject",
            SectionKind::Letter => "letter",
            SectionKind::Signature => "signature",
            SectionKind::Overview => "overview",
            SectionKind::Introduction => "introduction",
            SectionKind::Deliverables => "deliverables",
            SectionKind::Milestones => "milestones",
            SectionKind::Budget => "budget",
            SectionKind::Terms => "terms",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub heading: Option<String>,
    pub icon: Option<Icon>,
    pub blocks: Vec<Block>,
}

impl Section {
    /// Builds a section, or `None` when there is nothing to show in it.
    pub fn build(
        kind: SectionKind,
        heading: Option<&str>,
        icon: Option<Icon>,
        blocks: Vec<Block>,
    ) -> Option<Section> {
        if blocks.is_empty() {
            return None;
        }
        Some(Section {
            kind,
            heading: heading.map(str::to_string),
            icon,
            blocks,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph { text: String },
    /// Short stacked lines, e.g. an address block.
    Lines { lines: Vec<String> },
    Field { label: String, value: String },
    Entry(EntryBlock),
    Skill(SkillBlock),
    Milestone(MilestoneBlock),
}

/// One experience, education or deliverable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryBlock {
    pub title: String,
    pub subtitle: Option<String>,
    pub dates: Option<String>,
    pub location: Option<String>,
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillBlock {
    pub name: String,
    pub level: String,
    pub meter: SkillMeter,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SkillMeter {
    /// Name and level only, no graphic.
    Label,
    Bar { percent: u8 },
    Circles { filled: u8, total: u8 },
    Dots { filled: u8, total: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MilestoneBlock {
    pub title: String,
    pub description: Option<String>,
    pub deadline: Option<String>,
    pub payment: Option<String>,
}

/// Decorative glyphs shown when icons are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Email,
    Phone,
    Location,
    Linkedin,
    Github,
    Website,
    Profile,
    Briefcase,
    Graduation,
    Star,
    Calendar,
    Document,
    Check,
    Flag,
    Money,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Email => "✉",
            Icon::Phone => "☎",
            Icon::Location => "⌂",
            Icon::Linkedin => "in",
            Icon::Github => "⌥",
            Icon::Website => "⌘",
            Icon::Profile => "☺",
            Icon::Briefcase => "▣",
            Icon::Graduation => "✎",
            Icon::Star => "★",
            Icon::Calendar => "◷",
            Icon::Document => "▤",
            Icon::Check => "✓",
            Icon::Flag => "⚑",
            Icon::Money => "¤",
        }
    }
}
