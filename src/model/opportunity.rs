use std::fmt;

use serde::{Deserialize, Serialize};

/// A public volunteering engagement listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub location: String,
    /// ISO date (`YYYY-MM-DD`).
    pub date: String,
    pub spots: u32,
    pub featured: bool,
    pub category: String,
}

/// Lifecycle state of a published opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityStatus {
    Open,
    Closed,
    Filled,
}

impl fmt::Display for OpportunityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpportunityStatus::Open => write!(f, "open"),
            OpportunityStatus::Closed => write!(f, "closed"),
            OpportunityStatus::Filled => write!(f, "filled"),
        }
    }
}

/// Full detail variant shown on the opportunity page.
///
/// Extends the listing with everything an applicant needs before signing
/// up: long description, requirements, skills, time commitment, contact
/// info, status and the application deadline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityDetail {
    #[serde(flatten)]
    pub listing: Opportunity,
    pub long_description: String,
    pub requirements: Vec<String>,
    pub skills: Vec<String>,
    pub time_commitment: String,
    pub contact_person: String,
    pub contact_email: String,
    pub address: String,
    pub status: OpportunityStatus,
    /// ISO date (`YYYY-MM-DD`).
    pub application_deadline: String,
}
