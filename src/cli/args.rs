//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all
//! tatawu commands. It uses clap's derive API for declarative argument
//! parsing.
//!
//! ## Commands
//!
//! - `opportunities`: Browse and inspect volunteer opportunities
//! - `users`: Admin back-office for managed users
//! - `summary`: Admin dashboard counters and recent applications
//! - `lang`: Show or switch the interface language
//! - `login` / `logout` / `whoami`: The mock session stub
//! - `init`: Initialize the tatawu configuration file

use std::{fmt, path::PathBuf};

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::{
    i18n::Language,
    model::{UserRole, UserStatus},
    query::SortOrder,
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Locales directory (overrides config file)
    #[arg(long, env = "TATAWU_LOCALES_ROOT")]
    pub locales_root: Option<PathBuf>,

    /// State directory for the durable client state (overrides config file)
    #[arg(long, env = "TATAWU_STATE_DIR")]
    pub state_dir: Option<PathBuf>,

    /// Interface language for this invocation only (does not persist)
    #[arg(long, value_enum)]
    pub lang: Option<Language>,
}

/// Output format for data commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse volunteer opportunities
    #[command(subcommand)]
    Opportunities(OpportunitiesCommand),
    /// Manage platform users (requires an admin session)
    #[command(subcommand)]
    Users(UsersCommand),
    /// Show the admin dashboard summary (requires an admin session)
    Summary(SummaryCommand),
    /// Show or switch the interface language
    Lang(LangCommand),
    /// Sign in with a mock account
    Login(LoginCommand),
    /// Sign out and clear the stored session
    Logout(LogoutCommand),
    /// Show the signed-in account
    Whoami(WhoamiCommand),
    /// Initialize tatawu configuration file
    Init,
}

#[derive(Debug, Subcommand)]
pub enum OpportunitiesCommand {
    /// List opportunities with filters, sorting and pagination
    List(OpportunityListArgs),
    /// Show one opportunity in full
    Show(ShowArgs),
}

#[derive(Debug, Args)]
pub struct OpportunityListArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Case-insensitive substring match in title and description
    #[arg(long)]
    pub search: Option<String>,

    /// Exact category match
    #[arg(long)]
    pub category: Option<String>,

    /// Exact location match
    #[arg(long)]
    pub location: Option<String>,

    /// Inclusive lower date bound (YYYY-MM-DD)
    #[arg(long)]
    pub date_from: Option<String>,

    /// Inclusive upper date bound (YYYY-MM-DD)
    #[arg(long)]
    pub date_to: Option<String>,

    /// Field to sort by (e.g. date, title, location)
    #[arg(long)]
    pub sort_by: Option<String>,

    #[arg(long, value_enum, default_value_t)]
    pub sort_order: SortOrder,

    /// 1-indexed page number
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Records per page (defaults to the configured page size)
    #[arg(long)]
    pub page_size: Option<u32>,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Record id
    pub id: String,

    #[command(flatten)]
    pub common: CommonArgs,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// List managed users with filters, sorting and pagination
    List(UserListArgs),
    /// Show one managed user in full
    Show(ShowArgs),
    /// Approve a pending volunteer
    Admit(UserActionArgs),
    /// Deactivate an account
    Revoke(UserActionArgs),
    /// Grant the admin role (requires a super admin session)
    Promote(UserActionArgs),
    /// Block an account
    Block(UserActionArgs),
    /// Delete an account
    Delete(UserActionArgs),
}

#[derive(Debug, Args)]
pub struct UserListArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Case-insensitive substring match in name, email and phone
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by account status
    #[arg(long, value_enum)]
    pub status: Option<UserStatus>,

    /// Filter by platform role
    #[arg(long, value_enum)]
    pub role: Option<UserRole>,

    /// Field to sort by (e.g. name, email, joinedAt)
    #[arg(long)]
    pub sort_by: Option<String>,

    #[arg(long, value_enum, default_value_t)]
    pub sort_order: SortOrder,

    /// 1-indexed page number
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Records per page (defaults to the configured page size)
    #[arg(long)]
    pub page_size: Option<u32>,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct UserActionArgs {
    /// User id
    pub id: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct SummaryCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct LangCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub action: Option<LangAction>,
}

#[derive(Debug, Subcommand)]
pub enum LangAction {
    /// Switch the interface language (persists across invocations)
    Set {
        #[arg(value_enum)]
        language: Language,
    },
}

#[derive(Debug, Args)]
pub struct LoginCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Role of the mock account
    #[arg(long, value_enum, default_value_t = UserRole::User)]
    pub role: UserRole,

    /// Display name of the mock account
    #[arg(long)]
    pub name: Option<String>,

    /// Email of the mock account
    #[arg(long)]
    pub email: Option<String>,
}

#[derive(Debug, Args)]
pub struct LogoutCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct WhoamiCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}
