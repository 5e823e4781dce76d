//! Back-office workflows: session-gated moderation and the dashboard.
//!
//! The original platform never enforced these actions server-side; here
//! the service layer gates them on the stored session's role. The session
//! itself is still an unverified stub, so this is a policy gate, not
//! authentication.

use anyhow::Result;

use crate::{
    model::{ActionResponse, UserAction, UserRole},
    store::{Backend, Session},
};

/// Why a back-office call was refused before reaching the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    /// No stored session.
    SignedOut,
    /// Session exists but lacks the admin role.
    NotAdmin,
    /// Promotion requires the super_admin role.
    SuperAdminRequired,
}

/// Outcome of a moderation request.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Denied(Denial),
    Applied(ActionResponse),
}

/// Gate for read-only back-office views (user listings, dashboard).
pub fn ensure_admin(session: Option<&Session>) -> Result<(), Denial> {
    match session {
        None => Err(Denial::SignedOut),
        Some(session) if !session.is_admin && !session.role().is_admin() => {
            Err(Denial::NotAdmin)
        }
        Some(_) => Ok(()),
    }
}

/// Gate for a specific moderation action.
pub fn authorize(session: Option<&Session>, action: UserAction) -> Result<(), Denial> {
    ensure_admin(session)?;
    if action == UserAction::Promote
        && session.map(Session::role) != Some(UserRole::SuperAdmin)
    {
        return Err(Denial::SuperAdminRequired);
    }
    Ok(())
}

/// Apply a moderation action on behalf of the stored session.
pub fn moderate(
    backend: &dyn Backend,
    session: Option<&Session>,
    user_id: &str,
    action: UserAction,
) -> Result<ActionOutcome> {
    if let Err(denial) = authorize(session, action) {
        return Ok(ActionOutcome::Denied(denial));
    }
    let response = backend.apply_user_action(user_id, action)?;
    Ok(ActionOutcome::Applied(response))
}
