//! Template rendering engine.
//!
//! Rendering is split in two steps. A per-document *resolve* step reads the
//! template id and the document and produces a [`Page`]: all content, section
//! presence and style decisions. Two *materialise* steps then turn that page
//! into either a preview tree ([`preview`]) or a standalone print document
//! ([`print`]). Unknown template ids render nothing.

pub mod cover_letter;
pub mod cv;
pub mod escape;
pub mod format;
pub mod job_proposal;
pub mod page;
pub mod preview;
pub mod print;
pub mod style;

#[cfg(test)]
mod tests;

use tracing::debug;

use crate::models::Document;
use crate::templates::{CvPreset, LetterPreset, ProposalPreset, Template};

pub use page::Page;
pub use preview::Node;
pub use print::PrintOptions;

/// Resolves the visual parameters for `document` under `template_id`.
pub fn resolve(document: &Document, template_id: &str) -> Option<Page> {
    let page = match document {
        Document::Cv(data) => Template::<CvPreset>::parse(template_id).map(|t| cv::resolve(t, data)),
        Document::CoverLetter(data) => {
            Template::<LetterPreset>::parse(template_id).map(|t| cover_letter::resolve(t, data))
        }
        Document::JobProposal(data) => {
            Template::<ProposalPreset>::parse(template_id).map(|t| job_proposal::resolve(t, data))
        }
    };
    if page.is_none() {
        debug!(
            kind = document.kind().as_str(),
            template_id, "unknown template id, rendering nothing"
        );
    }
    page
}

/// On-screen preview tree, or `None` for an unknown template id.
pub fn render_preview(document: &Document, template_id: &str) -> Option<Node> {
    resolve(document, template_id).map(|page| preview::materialize(&page))
}

/// Standalone print document, or `None` for an unknown template id.
pub fn render_print(document: &Document, template_id: &str, options: &PrintOptions) -> Option<String> {
    resolve(document, template_id).map(|page| print::materialize(&page, options))
}
