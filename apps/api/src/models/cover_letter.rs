use serde::{Deserialize, Serialize};

use crate::models::customization::Customization;

/// The sender block of a cover letter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SenderInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipientInfo {
    pub name: String,
    pub title: String,
    pub company: String,
    pub address: String,
}

/// Letter body. `body` may hold several paragraphs separated by blank lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LetterContent {
    pub date: String,
    /// Position applied for; rendered as the subject line.
    pub position: String,
    pub greeting: String,
    pub introduction: String,
    pub body: String,
    pub closing: String,
    pub sign_off: String,
}

/// A complete cover letter document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverLetterData {
    pub personal_info: SenderInfo,
    pub recipient_info: RecipientInfo,
    pub content: LetterContent,
    /// Only read by the custom template; absent means default options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customization: Option<Customization>,
}

impl CoverLetterData {
    /// A blank letter dated today with a conventional sign-off.
    pub fn new_dated(today: &str) -> Self {
        Self {
            content: LetterContent {
                date: today.to_string(),
                sign_off: "Sincerely".to_string(),
                ..LetterContent::default()
            },
            ..Self::default()
        }
    }
}
