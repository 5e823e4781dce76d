use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::i18n::Language;

pub const CONFIG_FILE_NAME: &str = ".tatawurc.json";

/// Tool configuration, loaded from `.tatawurc.json`.
///
/// Every field has a default so an empty or absent file is valid. The
/// OAuth/session values come from the environment, never from the file;
/// they are read for parity with the deployed platform but no core logic
/// consumes them.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding `<lang>.json` locale files.
    #[serde(default = "default_locales_root")]
    pub locales_root: String,
    /// Language used when no preference has been stored yet.
    #[serde(default)]
    pub default_language: Language,
    /// Directory for durable client state (language preference, session).
    #[serde(default = "default_state_dir")]
    pub state_dir: String,
    /// Page size applied to listings when no flag is given.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    #[serde(skip)]
    pub oauth_client_id: Option<String>,
    #[serde(skip)]
    pub oauth_client_secret: Option<String>,
    #[serde(skip)]
    pub session_secret: Option<String>,
}

fn default_locales_root() -> String {
    "./locales".to_string()
}

fn default_state_dir() -> String {
    ".tatawu".to_string()
}

fn default_page_size() -> u32 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_root: default_locales_root(),
            default_language: Language::default(),
            state_dir: default_state_dir(),
            page_size: default_page_size(),
            oauth_client_id: None,
            oauth_client_secret: None,
            session_secret: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.page_size > 0, "'pageSize' must be at least 1");
        ensure!(
            !self.locales_root.trim().is_empty(),
            "'localesRoot' must not be empty"
        );
        ensure!(
            !self.state_dir.trim().is_empty(),
            "'stateDir' must not be empty"
        );
        Ok(())
    }

    fn read_env(&mut self) {
        self.oauth_client_id = env::var("TATAWU_OAUTH_CLIENT_ID").ok();
        self.oauth_client_secret = env::var("TATAWU_OAUTH_CLIENT_SECRET").ok();
        self.session_secret = env::var("TATAWU_SESSION_SECRET").ok();
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Walk up from `start_dir` looking for the config file; stop at the
/// repository root (`.git`).
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    let mut result = match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            ConfigLoadResult {
                config,
                from_file: true,
            }
        }
        None => ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        },
    };
    result.config.read_env();
    Ok(result)
}
