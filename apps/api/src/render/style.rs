//! Style resolution shared by both materialisers.
//!
//! Everything that turns a customization option or a resolved [`Page`] value
//! into CSS goes through here, so preview and print agree on every color,
//! gradient and gap.
//!
//! [`Page`]: crate::render::page::Page

use crate::models::customization::{HeaderStyle, SectionSpacing, SkillBarStyle};
use crate::render::page::{Align, Background, SkillMeter, Theme};

/// A CSS declaration list, in emission order.
pub type Declarations = Vec<(&'static str, String)>;

const PATTERN_TINT: &str = "rgba(255, 255, 255, 0.18)";

/// Header background for the custom template.
pub fn header_background(style: HeaderStyle, header_color: &str, accent_color: &str) -> Background {
    match style {
        HeaderStyle::Solid => Background::Solid {
            color: header_color.to_string(),
        },
        HeaderStyle::Gradient => Background::Gradient {
            from: header_color.to_string(),
            to: accent_color.to_string(),
        },
        HeaderStyle::Pattern => Background::Pattern {
            color: header_color.to_string(),
        },
    }
}

pub fn section_gap(spacing: SectionSpacing) -> &'static str {
    match spacing {
        SectionSpacing::Compact => "0.75rem",
        SectionSpacing::Normal => "1.5rem",
        SectionSpacing::Spacious => "2.25rem",
    }
}

pub const CIRCLE_COUNT: u8 = 5;
pub const DOT_COUNT: u8 = 4;

/// Graphical encoding of a skill percentage.
///
/// Circles fill `floor(p / 20)` of 5, dots fill `floor(p / 25)` of 4. With
/// bars disabled the style is ignored and only the label is shown.
pub fn skill_meter(show_bars: bool, style: SkillBarStyle, percentage: u8) -> SkillMeter {
    if !show_bars {
        return SkillMeter::Label;
    }
    match style {
        SkillBarStyle::Bars => SkillMeter::Bar {
            percent: percentage.min(100),
        },
        SkillBarStyle::Circles => SkillMeter::Circles {
            filled: (percentage / 20).min(CIRCLE_COUNT),
            total: CIRCLE_COUNT,
        },
        SkillBarStyle::Dots => SkillMeter::Dots {
            filled: (percentage / 25).min(DOT_COUNT),
            total: DOT_COUNT,
        },
    }
}

pub fn background_declarations(background: &Background) -> Declarations {
    match background {
        Background::None => vec![],
        Background::Solid { color } => vec![("background-color", color.clone())],
        Background::Gradient { from, to } => vec![
            ("background-color", from.clone()),
            ("background-image", format!("linear-gradient(135deg, {from}, {to})")),
        ],
        Background::Pattern { color } => vec![
            ("background-color", color.clone()),
            (
                "background-image",
                format!("radial-gradient({PATTERN_TINT} 1.5px, transparent 1.5px)"),
            ),
            ("background-size", "14px 14px".to_string()),
        ],
    }
}

pub fn align_value(align: Align) -> &'static str {
    match align {
        Align::Left => "left",
        Align::Center => "center",
        Align::Right => "right",
    }
}

/// Declarations for the outermost document container.
pub fn page_declarations(theme: &Theme) -> Declarations {
    vec![
        ("font-family", theme.font_family.to_string()),
        ("color", theme.text_color.clone()),
        ("background-color", theme.background_color.clone()),
    ]
}

pub fn heading_declarations(theme: &Theme) -> Declarations {
    let mut decls = vec![("color", theme.heading_color.clone())];
    if theme.heading_rule {
        decls.push(("border-bottom", format!("2px solid {}", theme.accent_color)));
    }
    decls
}

/// Theme for sections drawn on a colored sidebar. Headings and their rules
/// take the sidebar's text color instead of the page heading color.
pub fn sidebar_theme(theme: &Theme, text_color: &str) -> Theme {
    Theme {
        heading_color: text_color.to_string(),
        accent_color: text_color.to_string(),
        ..theme.clone()
    }
}

pub fn section_declarations(theme: &Theme) -> Declarations {
    vec![("margin-bottom", theme.section_gap.to_string())]
}

pub fn radius(theme: &Theme) -> String {
    format!("{}px", theme.border_radius)
}

/// Layout rules keyed on the structural class names both materialisers emit.
pub const STYLESHEET: &str = "\
.folio-document { box-sizing: border-box; width: 210mm; min-height: 297mm; margin: 0 auto; line-height: 1.5; font-size: 10.5pt; overflow: hidden; }
.folio-document * { box-sizing: border-box; }
.folio-identity { padding: 2rem 2.5rem; }
.folio-name { margin: 0; font-size: 2em; font-weight: 700; }
.folio-headline { margin: 0.25rem 0 0; font-size: 1.1em; opacity: 0.9; }
.folio-contacts { list-style: none; margin: 0.75rem 0 0; padding: 0; display: flex; flex-wrap: wrap; gap: 0.35rem 1.25rem; font-size: 0.9em; }
.folio-identity .folio-contacts { justify-content: inherit; }
.folio-logo img { max-height: 64px; max-width: 200px; }
.folio-icon { display: inline-block; margin-right: 0.4rem; }
.folio-body, .folio-main, .folio-column { padding: 2rem 2.5rem; }
.folio-columns { display: flex; align-items: stretch; }
.folio-sidebar { width: 34%; padding-bottom: 2rem; }
.folio-sidebar .folio-identity { padding: 2rem 1.5rem 1rem; }
.folio-sidebar .folio-section { padding: 0 1.5rem; }
.folio-main { width: 66%; }
.folio-split .folio-column { width: 50%; }
.folio-heading { margin: 0 0 0.6rem; font-size: 1.15em; text-transform: uppercase; letter-spacing: 0.04em; padding-bottom: 0.2rem; }
.folio-paragraph { margin: 0 0 0.6rem; white-space: pre-line; }
.folio-lines div { margin: 0; }
.folio-field { margin-bottom: 0.25rem; }
.folio-field-label { font-weight: 600; margin-right: 0.35rem; }
.folio-entry, .folio-milestone { margin-bottom: 0.9rem; }
.folio-entry-head, .folio-milestone-head, .folio-skill-head { display: flex; justify-content: space-between; gap: 1rem; }
.folio-entry-title, .folio-milestone-title { margin: 0; font-size: 1em; font-weight: 600; }
.folio-entry-dates, .folio-milestone-deadline, .folio-entry-location { font-size: 0.9em; opacity: 0.75; white-space: nowrap; }
.folio-entry-subtitle { font-style: italic; }
.folio-entry-details { margin: 0.3rem 0 0; white-space: pre-line; }
.folio-skill { margin-bottom: 0.6rem; }
.folio-skill-level { font-size: 0.85em; opacity: 0.75; }
.folio-skill-track { height: 6px; margin-top: 0.25rem; background-color: rgba(0, 0, 0, 0.12); overflow: hidden; }
.folio-skill-fill { height: 100%; }
.folio-skill-marks { display: flex; gap: 0.3rem; margin-top: 0.25rem; }
.folio-skill-mark { display: inline-block; width: 10px; height: 10px; border: 1px solid currentColor; }
.folio-skill-mark.circle { border-radius: 50%; }
.folio-skill-mark.dot { width: 8px; height: 8px; border-radius: 50%; }
";

/// Bar fill for a [`SkillMeter::Bar`].
pub fn skill_fill_declarations(percent: u8, color: &str) -> Declarations {
    vec![
        ("width", format!("{percent}%")),
        ("background-color", color.to_string()),
    ]
}

/// One circle or dot mark; filled marks take the skill color.
pub fn skill_mark_declarations(filled: bool, color: &str) -> Declarations {
    if filled {
        vec![
            ("background-color", color.to_string()),
            ("border-color", color.to_string()),
        ]
    } else {
        vec![("background-color", "transparent".to_string())]
    }
}

/// Declarations for a header or sidebar identity block.
pub fn identity_declarations(background: &Background, text_color: &str, align: Align) -> Declarations {
    let mut decls = background_declarations(background);
    decls.push(("color", text_color.to_string()));
    decls.push(("text-align", align_value(align).to_string()));
    decls.push((
        "justify-content",
        match align {
            Align::Left => "flex-start",
            Align::Center => "center",
            Align::Right => "flex-end",
        }
        .to_string(),
    ));
    decls
}

/// Serialises declarations into an inline `style` attribute value.
pub fn inline(decls: &[(&'static str, String)]) -> String {
    decls
        .iter()
        .map(|(prop, value)| format!("{prop}: {value}"))
        .collect::<Vec<_>>()
        .join("; ")
}
