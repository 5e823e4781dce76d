use anyhow::Result;

use crate::{
    cli::{
        args::{CommonArgs, LangAction, LangCommand},
        context::AppContext,
        exit_status::ExitStatus,
    },
    i18n::Language,
};

pub fn run(cmd: LangCommand) -> Result<ExitStatus> {
    match cmd.action {
        None => show(cmd.common),
        Some(LangAction::Set { language }) => set(cmd.common, language),
    }
}

fn show(common: CommonArgs) -> Result<ExitStatus> {
    let ctx = AppContext::new(&common)?;
    println!(
        "{}",
        ctx.t_with(
            "lang.current",
            &[
                ("language", &ctx.language()),
                ("direction", &ctx.translator.direction()),
            ],
        )
    );
    Ok(ExitStatus::Success)
}

fn set(common: CommonArgs, language: Language) -> Result<ExitStatus> {
    let mut ctx = AppContext::new(&common)?;
    // Persist first: the switch must be durable before anything is
    // printed in the new language.
    ctx.state.set_language(language)?;
    ctx.translator.set_language(language);
    println!(
        "{}",
        ctx.t_with(
            "lang.switched",
            &[
                ("language", &language),
                ("direction", &language.direction()),
            ],
        )
    );
    Ok(ExitStatus::Success)
}
