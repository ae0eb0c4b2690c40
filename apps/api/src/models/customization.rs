//! Customization record consulted only by the "custom" template.
//!
//! Fixed templates never read any of these values. The common fields live in
//! [`Customization`]; CV and job proposal documents extend it with their own
//! options through `#[serde(flatten)]`.

use serde::{Deserialize, Deserializer, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Enumerated options
// ────────────────────────────────────────────────────────────────────────────

/// Typefaces offered in the customization panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    #[default]
    Inter,
    Roboto,
    OpenSans,
    Lato,
    Montserrat,
    Merriweather,
    PlayfairDisplay,
    Georgia,
}

impl FontFamily {
    /// CSS `font-family` value, with fallbacks.
    pub fn css_stack(self) -> &'static str {
        match self {
            FontFamily::Inter => "'Inter', 'Helvetica Neue', Arial, sans-serif",
            FontFamily::Roboto => "'Roboto', 'Helvetica Neue', Arial, sans-serif",
            FontFamily::OpenSans => "'Open Sans', 'Helvetica Neue', Arial, sans-serif",
            FontFamily::Lato => "'Lato', 'Helvetica Neue', Arial, sans-serif",
            FontFamily::Montserrat => "'Montserrat', 'Helvetica Neue', Arial, sans-serif",
            FontFamily::Merriweather => "'Merriweather', Georgia, serif",
            FontFamily::PlayfairDisplay => "'Playfair Display', Georgia, serif",
            FontFamily::Georgia => "Georgia, 'Times New Roman', serif",
        }
    }
}

/// How the header background is painted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderStyle {
    #[default]
    Solid,
    Gradient,
    Pattern,
}

/// Vertical gap class applied between sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionSpacing {
    Compact,
    #[default]
    Normal,
    Spacious,
}

/// Graphical encoding of skill proficiency (CV only).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillBarStyle {
    #[default]
    Bars,
    Circles,
    Dots,
}

/// Macro page structure of the custom CV template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CvLayout {
    /// Single column under a full-width header.
    #[default]
    Traditional,
    /// Colored sidebar with identity and skills, main area with experience and education.
    Sidebar,
    /// Full-width header over two balanced columns.
    Modern,
}

/// Horizontal alignment of the job proposal logo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoPosition {
    #[default]
    Left,
    Center,
    Right,
}

// ────────────────────────────────────────────────────────────────────────────
// Records
// ────────────────────────────────────────────────────────────────────────────

pub const MAX_BORDER_RADIUS: u8 = 20;

/// Options shared by every document type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customization {
    pub header_color: String,
    pub accent_color: String,
    pub text_color: String,
    pub background_color: String,
    pub font_family: FontFamily,
    pub header_style: HeaderStyle,
    pub section_spacing: SectionSpacing,
    /// Corner radius in px, clamped to 0–20.
    #[serde(deserialize_with = "clamped_radius")]
    pub border_radius: u8,
    pub show_icons: bool,
}

impl Default for Customization {
    fn default() -> Self {
        Self {
            header_color: "#2563eb".to_string(),
            accent_color: "#3b82f6".to_string(),
            text_color: "#1f2937".to_string(),
            background_color: "#ffffff".to_string(),
            font_family: FontFamily::Inter,
            header_style: HeaderStyle::Solid,
            section_spacing: SectionSpacing::Normal,
            border_radius: 8,
            show_icons: true,
        }
    }
}

/// CV customization: the shared record plus skill display and layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CvCustomization {
    #[serde(flatten)]
    pub base: Customization,
    pub show_skill_bars: bool,
    pub skill_bar_style: SkillBarStyle,
    pub layout: CvLayout,
}

impl Default for CvCustomization {
    fn default() -> Self {
        Self {
            base: Customization::default(),
            show_skill_bars: true,
            skill_bar_style: SkillBarStyle::Bars,
            layout: CvLayout::Traditional,
        }
    }
}

/// Job proposal customization: the shared record plus logo alignment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProposalCustomization {
    #[serde(flatten)]
    pub base: Customization,
    pub logo_position: LogoPosition,
}

fn clamped_radius<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(raw.clamp(0, i64::from(MAX_BORDER_RADIUS)) as u8)
}
