//! Main entry point for the tatawu CLI.
//!
//! Dispatches to the appropriate command handler based on the parsed
//! arguments.

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{init, lang, opportunities, session, summary, users},
    exit_status::ExitStatus,
};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(Arguments {
        command: Some(command),
    }) = args.with_command_or_help()
    else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Command::Opportunities(cmd) => opportunities::run(cmd),
        Command::Users(cmd) => users::run(cmd),
        Command::Summary(cmd) => summary::run(cmd),
        Command::Lang(cmd) => lang::run(cmd),
        Command::Login(cmd) => session::login(cmd),
        Command::Logout(cmd) => session::logout(cmd),
        Command::Whoami(cmd) => session::whoami(cmd),
        Command::Init => init::run(),
    }
}
