//! Template Selection Registry.
//!
//! Every document kind has a handful of fixed presets plus the single
//! configurable "custom" template. Renderers parse ids through [`Template`],
//! so the registry and the renderers recognise exactly the same set.

use serde::Serialize;

use crate::models::DocumentKind;

pub const CUSTOM_TEMPLATE_ID: &str = "custom";

/// A fixed, non-configurable visual scheme for one document kind.
pub trait Preset: Copy + Sized + 'static {
    const ALL: &'static [Self];
    /// Description of the custom template for this document kind.
    const CUSTOM_DESCRIPTION: &'static str;

    fn id(self) -> &'static str;
    fn display_name(self) -> &'static str;
    fn description(self) -> &'static str;
}

/// A parsed template id: one of the fixed presets, or the custom template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template<P> {
    Fixed(P),
    Custom,
}

impl<P: Preset> Template<P> {
    /// Parses a template id. Unknown ids yield `None`.
    pub fn parse(id: &str) -> Option<Self> {
        if id == CUSTOM_TEMPLATE_ID {
            return Some(Template::Custom);
        }
        P::ALL.iter().copied().find(|p| p.id() == id).map(Template::Fixed)
    }
}

/// One row of the registry as exposed to the editing surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub id: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
}

fn list<P: Preset>() -> Vec<TemplateInfo> {
    P::ALL
        .iter()
        .map(|p| TemplateInfo {
            id: p.id(),
            display_name: p.display_name(),
            description: p.description(),
        })
        .chain(std::iter::once(TemplateInfo {
            id: CUSTOM_TEMPLATE_ID,
            display_name: "Custom",
            description: P::CUSTOM_DESCRIPTION,
        }))
        .collect()
}

/// The ordered template list for a document kind.
pub fn registry(kind: DocumentKind) -> Vec<TemplateInfo> {
    match kind {
        DocumentKind::Cv => list::<CvPreset>(),
        DocumentKind::CoverLetter => list::<LetterPreset>(),
        DocumentKind::JobProposal => list::<ProposalPreset>(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Presets
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CvPreset {
    Modern,
    Classic,
    Creative,
}

impl Preset for CvPreset {
    const ALL: &'static [Self] = &[CvPreset::Modern, CvPreset::Classic, CvPreset::Creative];
    const CUSTOM_DESCRIPTION: &'static str =
        "Choose colors, typeface, layout, header style and skill display";

    fn id(self) -> &'static str {
        match self {
            CvPreset::Modern => "modern",
            CvPreset::Classic => "classic",
            CvPreset::Creative => "creative",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            CvPreset::Modern => "Modern",
            CvPreset::Classic => "Classic",
            CvPreset::Creative => "Creative",
        }
    }

    fn description(self) -> &'static str {
        match self {
            CvPreset::Modern => "Blue gradient header with skill bars",
            CvPreset::Classic => "Serif typography, centered header, timeless black and white",
            CvPreset::Creative => "Purple sidebar with profile and skills beside your history",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterPreset {
    Professional,
    Modern,
    Creative,
}

impl Preset for LetterPreset {
    const ALL: &'static [Self] = &[
        LetterPreset::Professional,
        LetterPreset::Modern,
        LetterPreset::Creative,
    ];
    const CUSTOM_DESCRIPTION: &'static str = "Choose colors, typeface, header style and spacing";

    fn id(self) -> &'static str {
        match self {
            LetterPreset::Professional => "professional",
            LetterPreset::Modern => "modern",
            LetterPreset::Creative => "creative",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            LetterPreset::Professional => "Professional",
            LetterPreset::Modern => "Modern",
            LetterPreset::Creative => "Creative",
        }
    }

    fn description(self) -> &'static str {
        match self {
            LetterPreset::Professional => "Dark slate letterhead, conservative layout",
            LetterPreset::Modern => "Teal gradient letterhead with contact icons",
            LetterPreset::Creative => "Sender details in a colored sidebar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalPreset {
    Professional,
    Modern,
}

impl Preset for ProposalPreset {
    const ALL: &'static [Self] = &[ProposalPreset::Professional, ProposalPreset::Modern];
    const CUSTOM_DESCRIPTION: &'static str =
        "Choose colors, typeface, header style, spacing and logo position";

    fn id(self) -> &'static str {
        match self {
            ProposalPreset::Professional => "professional",
            ProposalPreset::Modern => "modern",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            ProposalPreset::Professional => "Professional",
            ProposalPreset::Modern => "Modern",
        }
    }

    fn description(self) -> &'static str {
        match self {
            ProposalPreset::Professional => "Navy letterhead with the logo on the left",
            ProposalPreset::Modern => "Indigo gradient header with a centered logo",
        }
    }
}
