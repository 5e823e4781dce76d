use std::fmt;

use serde::{Deserialize, Serialize};

/// Review state of a volunteer application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplicationStatus::Pending => write!(f, "pending"),
            ApplicationStatus::Approved => write!(f, "approved"),
            ApplicationStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A volunteer's application to a specific opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerApplication {
    pub id: String,
    pub volunteer_id: String,
    pub volunteer_name: String,
    pub volunteer_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volunteer_phone: Option<String>,
    pub opportunity_id: String,
    pub opportunity_title: String,
    pub status: ApplicationStatus,
    /// ISO 8601 timestamp.
    pub applied_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Dashboard counters plus the recent application feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSummary {
    pub pending_volunteers: u32,
    pub active_volunteers: u32,
    pub pending_opportunities: u32,
    pub active_opportunities: u32,
    pub completed_opportunities: u32,
    pub total_volunteer_hours: u32,
    pub recent_applications: Vec<VolunteerApplication>,
}
