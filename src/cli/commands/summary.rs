use anyhow::Result;

use super::backend_failure;
use crate::{
    admin,
    cli::{
        args::{OutputFormat, SummaryCommand},
        context::AppContext,
        exit_status::ExitStatus,
    },
    report,
};

pub fn run(cmd: SummaryCommand) -> Result<ExitStatus> {
    let ctx = AppContext::new(&cmd.common)?;
    if let Err(denial) = admin::ensure_admin(ctx.session().as_ref()) {
        println!("{}", report::denial_line(&ctx.translator, denial));
        return Ok(ExitStatus::Failure);
    }

    let summary = match ctx.backend().summary() {
        Ok(summary) => summary,
        Err(err) => return Ok(backend_failure(&ctx, err)),
    };

    match cmd.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Table => print!("{}", report::summary_view(&ctx.translator, &summary)),
    }
    Ok(ExitStatus::Success)
}
