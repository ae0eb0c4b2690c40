//! Document schema for CVs, cover letters and job proposals.
//!
//! Pure data plus defaults. Renderers only ever read these values.

pub mod cover_letter;
pub mod customization;
pub mod cv;
pub mod entry;
pub mod job_proposal;
pub mod skill;

use chrono::Local;
use serde::{Deserialize, Serialize};

pub use cover_letter::CoverLetterData;
pub use cv::CvData;
pub use job_proposal::JobProposalData;

/// The three document types the generator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    Cv,
    CoverLetter,
    JobProposal,
}

impl DocumentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::Cv => "cv",
            DocumentKind::CoverLetter => "cover-letter",
            DocumentKind::JobProposal => "job-proposal",
        }
    }
}

/// A document of any kind, tagged with `kind` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Document {
    Cv(CvData),
    CoverLetter(CoverLetterData),
    JobProposal(JobProposalData),
}

impl Document {
    /// A blank document. Date fields default to today.
    pub fn new(kind: DocumentKind) -> Self {
        let today = today();
        match kind {
            DocumentKind::Cv => Document::Cv(CvData::default()),
            DocumentKind::CoverLetter => Document::CoverLetter(CoverLetterData::new_dated(&today)),
            DocumentKind::JobProposal => Document::JobProposal(JobProposalData::new_dated(&today)),
        }
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::Cv(_) => DocumentKind::Cv,
            Document::CoverLetter(_) => DocumentKind::CoverLetter,
            Document::JobProposal(_) => DocumentKind::JobProposal,
        }
    }
}

/// Today's local date as `YYYY-MM-DD`, the format date inputs produce.
pub fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
