//! Shared context assembled once per command invocation.

use std::{env, fmt, path::PathBuf};

use anyhow::{Context as _, Result};

use crate::{
    config::{Config, ConfigLoadResult, load_config},
    i18n::{Language, Translator, builtin_dictionaries},
    store::{Backend, MemoryStore, Session, StateStore},
};

use super::args::CommonArgs;

/// Everything a command handler needs: configuration, the durable client
/// state, the translator in the effective language, and the backend.
pub struct AppContext {
    pub config: Config,
    pub state: StateStore,
    pub translator: Translator,
    store: MemoryStore,
}

impl AppContext {
    /// Resolve configuration, state and language, then load dictionaries.
    ///
    /// Language precedence: `--lang` flag (this invocation only), then the
    /// stored preference, then the configured default. Locale files on
    /// disk win over the compiled-in dictionaries.
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to resolve working directory")?;
        let ConfigLoadResult { config, .. } = load_config(&cwd)?;

        let state_dir = common
            .state_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.state_dir));
        let state = StateStore::new(&state_dir);

        let language = common
            .lang
            .unwrap_or_else(|| state.language(config.default_language));

        let locales_root = common
            .locales_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.locales_root));
        let translator = if locales_root.is_dir() {
            Translator::load(&locales_root, language)?
        } else {
            Translator::new(language, builtin_dictionaries()?)
        };

        Ok(Self {
            config,
            state,
            translator,
            store: MemoryStore::new(),
        })
    }

    pub fn backend(&self) -> &dyn Backend {
        &self.store
    }

    pub fn session(&self) -> Option<Session> {
        self.state.session()
    }

    pub fn language(&self) -> Language {
        self.translator.language()
    }

    /// Resolve a translation key.
    pub fn t(&self, key: &str) -> String {
        self.translator.resolve(key)
    }

    /// Resolve a translation key with `{name}` parameters.
    pub fn t_with(&self, key: &str, params: &[(&str, &dyn fmt::Display)]) -> String {
        self.translator.resolve_with(key, params)
    }
}
