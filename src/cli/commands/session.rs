use anyhow::Result;
use colored::Colorize;

use crate::{
    cli::{
        args::{LoginCommand, LogoutCommand, WhoamiCommand},
        context::AppContext,
        exit_status::ExitStatus,
    },
    model::Account,
    report::SUCCESS_MARK,
    store::Session,
};

pub fn login(cmd: LoginCommand) -> Result<ExitStatus> {
    let ctx = AppContext::new(&cmd.common)?;
    let role = cmd.role;
    let name = cmd.name.unwrap_or_else(|| {
        if role.is_admin() {
            "Admin User".to_string()
        } else {
            "Volunteer User".to_string()
        }
    });
    let email = cmd.email.unwrap_or_else(|| {
        if role.is_admin() {
            "admin@haramainvolunteers.org".to_string()
        } else {
            "volunteer@example.com".to_string()
        }
    });

    let session = Session::new(Account {
        id: "123456".to_string(),
        name,
        email,
        role,
    });
    ctx.state.set_session(Some(session.clone()))?;

    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        ctx.t_with(
            "auth.signedIn",
            &[
                ("name", &session.account.name),
                ("role", &ctx.t(&format!("users.role.{}", role))),
            ],
        )
    );
    Ok(ExitStatus::Success)
}

pub fn logout(cmd: LogoutCommand) -> Result<ExitStatus> {
    let ctx = AppContext::new(&cmd.common)?;
    ctx.state.set_session(None)?;
    println!("{}", ctx.t("auth.signedOut"));
    Ok(ExitStatus::Success)
}

pub fn whoami(cmd: WhoamiCommand) -> Result<ExitStatus> {
    let ctx = AppContext::new(&cmd.common)?;
    match ctx.session() {
        Some(session) => {
            println!(
                "{}",
                ctx.t_with(
                    "auth.signedIn",
                    &[
                        ("name", &session.account.name),
                        ("role", &ctx.t(&format!("users.role.{}", session.role()))),
                    ],
                )
            );
            Ok(ExitStatus::Success)
        }
        None => {
            println!("{}", ctx.t("auth.notSignedIn"));
            Ok(ExitStatus::Failure)
        }
    }
}
