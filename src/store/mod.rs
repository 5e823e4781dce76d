//! Data access seam between the front end and the (mock) backend.
//!
//! [`Backend`] is the contract a real database-backed service must
//! satisfy. The shipped implementation is [`MemoryStore`], which serves
//! seeded fixture data; the web client it replaces faked the same calls
//! with timers, which modelled nothing and are gone.

pub mod memory;
pub mod state;

pub use memory::MemoryStore;
pub use state::{ClientState, Session, StateStore};

use anyhow::Result;

use crate::{
    model::{
        ActionResponse, AdminSummary, ManagedUser, Opportunity, OpportunityDetail, UserAction,
    },
    query::{QueryParams, QueryResult},
};

/// The query/action surface of the volunteer platform.
///
/// Every call returns owned values; callers never observe shared
/// mutation between calls.
pub trait Backend {
    /// List opportunities matching the query parameters.
    fn opportunities(&self, params: &QueryParams) -> Result<QueryResult<Opportunity>>;

    /// Full detail for one opportunity, or `None` for an unknown id.
    fn opportunity(&self, id: &str) -> Result<Option<OpportunityDetail>>;

    /// List managed users matching the query parameters.
    fn users(&self, params: &QueryParams) -> Result<QueryResult<ManagedUser>>;

    fn user(&self, id: &str) -> Result<Option<ManagedUser>>;

    /// Apply a moderation action to a user. Unknown ids yield a failed
    /// [`ActionResponse`], not an `Err`.
    fn apply_user_action(&self, id: &str, action: UserAction) -> Result<ActionResponse>;

    /// Dashboard counters and the recent application feed.
    fn summary(&self) -> Result<AdminSummary>;
}
