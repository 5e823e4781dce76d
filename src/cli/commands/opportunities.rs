use anyhow::Result;

use super::backend_failure;
use crate::{
    cli::{
        args::{OpportunitiesCommand, OpportunityListArgs, OutputFormat, ShowArgs},
        context::AppContext,
        exit_status::ExitStatus,
    },
    query::QueryParams,
    report,
};

pub fn run(cmd: OpportunitiesCommand) -> Result<ExitStatus> {
    match cmd {
        OpportunitiesCommand::List(args) => list(args),
        OpportunitiesCommand::Show(args) => show(args),
    }
}

fn list(args: OpportunityListArgs) -> Result<ExitStatus> {
    let ctx = AppContext::new(&args.common)?;
    let params = QueryParams {
        search: args.search,
        category: args.category,
        location: args.location,
        date_from: args.date_from,
        date_to: args.date_to,
        sort_by: args.sort_by,
        sort_order: args.sort_order,
        page: Some(args.page),
        page_size: Some(args.page_size.unwrap_or(ctx.config.page_size)),
        ..QueryParams::default()
    };

    let result = match ctx.backend().opportunities(&params) {
        Ok(result) => result,
        Err(err) => return Ok(backend_failure(&ctx, err)),
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Table => {
            print!("{}", report::opportunity_table(&ctx.translator, &result));
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
    let detail = match ctx.backend().opportunity(&args.id) {
        Ok(detail) => detail,
        Err(err) => return Ok(backend_failure(&ctx, err)),
    };
    let Some(detail) = detail else {
        println!(
            "{}",
            ctx.t_with("opportunities.notFound", &[("id", &args.id)])
        );
        return Ok(ExitStatus::Failure);
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&detail)?),
        OutputFormat::Table => {
            print!("{}", report::opportunity_detail(&ctx.translator, &detail));
        }
    }
    Ok(ExitStatus::Success)
}
