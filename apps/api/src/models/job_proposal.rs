use serde::{Deserialize, Serialize};

use crate::models::customization::ProposalCustomization;
use crate::models::entry::impl_entry;

/// Issuer, client and project identification of a proposal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProposalInfo {
    pub company_name: String,
    /// Logo image URL or data URI. Empty means no logo.
    pub company_logo: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: String,
    pub client_name: String,
    pub client_company: String,
    pub project_title: String,
    pub date: String,
    pub valid_until: String,
    pub introduction: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Deliverable {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// A payment milestone. `payment` is free text; no arithmetic is done on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub description: String,
    pub deadline: String,
    pub payment: String,
}

/// A complete job proposal document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobProposalData {
    pub basic_info: ProposalInfo,
    pub deliverables: Vec<Deliverable>,
    pub milestones: Vec<Milestone>,
    pub total_budget: String,
    pub terms: String,
    pub customization: ProposalCustomization,
}

impl JobProposalData {
    /// A blank proposal dated today.
    pub fn new_dated(today: &str) -> Self {
        Self {
            basic_info: ProposalInfo {
                date: today.to_string(),
                ..ProposalInfo::default()
            },
            ..Self::default()
        }
    }
}

impl_entry!(Deliverable, Milestone);
