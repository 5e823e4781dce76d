//! Command handlers, one module per command group.

pub mod init;
pub mod lang;
pub mod opportunities;
pub mod session;
pub mod summary;
pub mod users;

use colored::Colorize;

use super::{context::AppContext, exit_status::ExitStatus};
use crate::report::FAILURE_MARK;

/// Surface a backend failure the way the web client did: a generic
/// localized message. The retry policy is running the command again.
pub(crate) fn backend_failure(ctx: &AppContext, err: anyhow::Error) -> ExitStatus {
    eprintln!("{} {}", FAILURE_MARK.red(), ctx.t("common.error"));
    eprintln!("  {}", err.to_string().dimmed());
    ExitStatus::Failure
}
