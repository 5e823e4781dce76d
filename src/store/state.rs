//! Durable client-side state: language preference and the mock session.
//!
//! One JSON document under the state directory stands in for the web
//! client's local storage. The store has an explicit load/save lifecycle
//! and is injected into the CLI context; there is no ambient global.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    i18n::Language,
    model::{Account, UserRole},
};

pub const STATE_FILE_NAME: &str = "state.json";

/// The signed-in stub session: a user record plus an admin flag, with no
/// server-verified token behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub account: Account,
    pub is_admin: bool,
}

impl Session {
    pub fn new(account: Account) -> Self {
        let is_admin = account.role.is_admin();
        Self { account, is_admin }
    }

    pub fn role(&self) -> UserRole {
        self.account.role
    }
}

/// Everything persisted between invocations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientState {
    /// Stored language code; invalid values fall back to the default at
    /// read time rather than failing.
    pub language: Option<String>,
    pub session: Option<Session>,
}

/// File-backed store for [`ClientState`].
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join(STATE_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored state. A missing or unreadable file yields the
    /// default state, mirroring how the web client treated an empty or
    /// corrupt local storage entry.
    pub fn load(&self) -> ClientState {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return ClientState::default();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    pub fn save(&self, state: &ClientState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create state directory: {:?}", parent))?;
        }
        let content =
            serde_json::to_string_pretty(state).context("Failed to serialize client state")?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write state file: {:?}", self.path))?;
        Ok(())
    }

    /// Stored language preference, or `fallback` when absent or invalid.
    pub fn language(&self, fallback: Language) -> Language {
        self.load()
            .language
            .as_deref()
            .and_then(Language::from_code)
            .unwrap_or(fallback)
    }

    /// Persist a language switch. Synchronous: the preference is durable
    /// before this returns.
    pub fn set_language(&self, language: Language) -> Result<()> {
        let mut state = self.load();
        state.language = Some(language.code().to_string());
        self.save(&state)
    }

    pub fn session(&self) -> Option<Session> {
        self.load().session
    }

    pub fn set_session(&self, session: Option<Session>) -> Result<()> {
        let mut state = self.load();
        state.session = session;
        self.save(&state)
    }
}
