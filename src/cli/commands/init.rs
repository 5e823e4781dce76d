use std::{fs, path::Path};

use anyhow::Result;
use colored::Colorize;

use crate::{
    cli::exit_status::ExitStatus,
    config::{CONFIG_FILE_NAME, default_config_json},
    i18n::{Language, Translator, builtin_dictionaries},
    report::SUCCESS_MARK,
};

pub fn run() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;

    // No config existed, so the confirmation speaks the default language.
    let translator = Translator::new(Language::default(), builtin_dictionaries()?);
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        translator.resolve_with("init.created", &[("file", &CONFIG_FILE_NAME)])
    );
    Ok(ExitStatus::Success)
}
