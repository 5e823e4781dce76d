//! Domain records for the volunteer-coordination platform.
//!
//! All entities are plain value types held in memory for the lifetime of a
//! store call. Identity is the `id` field only; no cross-entity referential
//! integrity is enforced.

mod application;
mod opportunity;
mod user;

pub use application::{AdminSummary, ApplicationStatus, VolunteerApplication};
pub use opportunity::{Opportunity, OpportunityDetail, OpportunityStatus};
pub use user::{
    Account, ActionResponse, ManagedUser, UserAction, UserDocuments, UserRole, UserStatus,
};
