use anyhow::Result;

use super::backend_failure;
use crate::{
    admin::{self, ActionOutcome},
    cli::{
        args::{OutputFormat, ShowArgs, UserActionArgs, UserListArgs, UsersCommand},
        context::AppContext,
        exit_status::ExitStatus,
    },
    model::UserAction,
    query::QueryParams,
    report,
};

pub fn run(cmd: UsersCommand) -> Result<ExitStatus> {
    match cmd {
        UsersCommand::List(args) => list(args),
        UsersCommand::Show(args) => show(args),
        UsersCommand::Admit(args) => action(args, UserAction::Admit),
        UsersCommand::Revoke(args) => action(args, UserAction::Revoke),
        UsersCommand::Promote(args) => action(args, UserAction::Promote),
        UsersCommand::Block(args) => action(args, UserAction::Block),
        UsersCommand::Delete(args) => action(args, UserAction::Delete),
    }
}

fn list(args: UserListArgs) -> Result<ExitStatus> {
    let ctx = AppContext::new(&args.common)?;
    if let Err(denial) = admin::ensure_admin(ctx.session().as_ref()) {
        println!("{}", report::denial_line(&ctx.translator, denial));
        return Ok(ExitStatus::Failure);
    }

    let params = QueryParams {
        search: args.search,
        status: args.status.map(|status| status.to_string()),
        role: args.role.map(|role| role.to_string()),
        sort_by: args.sort_by,
        sort_order: args.sort_order,
        page: Some(args.page),
        page_size: Some(args.page_size.unwrap_or(ctx.config.page_size)),
        ..QueryParams::default()
    };

    let result = match ctx.backend().users(&params) {
        Ok(result) => result,
        Err(err) => return Ok(backend_failure(&ctx, err)),
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Table => {
            print!("{}", report::user_table(&ctx.translator, &result));
            if !result.items.is_empty() {
                println!();
                println!(
                    "{}",
                    report::page_footer(&ctx.translator, params.page(), &result)
                );
            }
        }
    }
    Ok(ExitStatus::Success)
}

fn show(args: ShowArgs) -> Result<ExitStatus> {
    let ctx = AppContext::new(&args.common)?;
    if let Err(denial) = admin::ensure_admin(ctx.session().as_ref()) {
        println!("{}", report::denial_line(&ctx.translator, denial));
        return Ok(ExitStatus::Failure);
    }

    let user = match ctx.backend().user(&args.id) {
        Ok(user) => user,
        Err(err) => return Ok(backend_failure(&ctx, err)),
    };
    let Some(user) = user else {
        println!("{}", ctx.t_with("users.notFound", &[("id", &args.id)]));
        return Ok(ExitStatus::Failure);
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&user)?),
        OutputFormat::Table => print!("{}", report::user_detail(&ctx.translator, &user)),
    }
    Ok(ExitStatus::Success)
}

fn action(args: UserActionArgs, action: UserAction) -> Result<ExitStatus> {
    let ctx = AppContext::new(&args.common)?;
    let outcome = match admin::moderate(ctx.backend(), ctx.session().as_ref(), &args.id, action) {
        Ok(outcome) => outcome,
        Err(err) => return Ok(backend_failure(&ctx, err)),
    };

    match outcome {
        ActionOutcome::Denied(denial) => {
            println!("{}", report::denial_line(&ctx.translator, denial));
            Ok(ExitStatus::Failure)
        }
        ActionOutcome::Applied(response) => {
            println!("{}", report::action_line(&ctx.translator, action, &response));
            if let Some(user) = &response.user {
                println!();
                print!("{}", report::user_detail(&ctx.translator, user));
            }
            Ok(if response.success {
                ExitStatus::Success
            } else {
                ExitStatus::Failure
            })
        }
    }
}
