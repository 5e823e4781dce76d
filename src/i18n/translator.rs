//! Key resolution with parameter interpolation and language fallback.

use std::{collections::HashMap, fmt, path::Path, sync::LazyLock};

use anyhow::{Result, bail};
use regex::{Captures, Regex};

use super::{Dictionary, FALLBACK_LANGUAGE, Language, discover_locale_files};

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").unwrap());

/// Outcome of looking up a dotted key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Present in the active language.
    Found(String),
    /// Absent in the active language, present in the fallback language.
    Fallback(String),
    /// Absent in both; callers receive the raw key.
    Missing,
}

impl Resolution {
    /// Collapse to the string handed to callers, per the resolver contract:
    /// a missing key degrades to the key itself, never an error.
    pub fn into_text(self, key: &str) -> String {
        match self {
            Resolution::Found(text) | Resolution::Fallback(text) => text,
            Resolution::Missing => key.to_string(),
        }
    }
}

/// Resolves translation keys against the loaded locale dictionaries.
///
/// The active language is an explicit field, not ambient state; the CLI
/// context owns the translator and persists language switches separately.
#[derive(Debug, Clone)]
pub struct Translator {
    active: Language,
    dictionaries: HashMap<Language, Dictionary>,
}

impl Translator {
    pub fn new(active: Language, dictionaries: impl IntoIterator<Item = Dictionary>) -> Self {
        Self {
            active,
            dictionaries: dictionaries
                .into_iter()
                .map(|d| (d.language(), d))
                .collect(),
        }
    }

    /// Load every discovered locale file under `locales_root`.
    pub fn load(locales_root: &Path, active: Language) -> Result<Self> {
        let files = discover_locale_files(locales_root);
        if files.is_empty() {
            bail!("No locale files found in {:?}", locales_root);
        }
        let mut dictionaries = Vec::with_capacity(files.len());
        for (language, path) in files {
            dictionaries.push(Dictionary::load(&path, language)?);
        }
        Ok(Self::new(active, dictionaries))
    }

    pub fn language(&self) -> Language {
        self.active
    }

    pub fn direction(&self) -> super::Direction {
        self.active.direction()
    }

    /// Switch the active language. Synchronous; every subsequent
    /// resolution uses the new dictionary.
    pub fn set_language(&mut self, language: Language) {
        self.active = language;
    }

    /// Typed lookup: active language first, then the fallback language.
    pub fn lookup(&self, key: &str) -> Resolution {
        if let Some(text) = self.dictionary(self.active).and_then(|d| d.get(key)) {
            return Resolution::Found(text.to_string());
        }
        if self.active != FALLBACK_LANGUAGE
            && let Some(text) = self.dictionary(FALLBACK_LANGUAGE).and_then(|d| d.get(key))
        {
            return Resolution::Fallback(text.to_string());
        }
        Resolution::Missing
    }

    /// Resolve a key to display text. Never fails: missing keys come back
    /// unchanged.
    pub fn resolve(&self, key: &str) -> String {
        self.lookup(key).into_text(key)
    }

    /// Resolve a key and substitute `{name}` placeholders.
    ///
    /// Every occurrence of a supplied parameter is replaced with its
    /// stringified value; placeholders without a matching parameter are
    /// left as-is.
    pub fn resolve_with(&self, key: &str, params: &[(&str, &dyn fmt::Display)]) -> String {
        interpolate(&self.resolve(key), params)
    }

    fn dictionary(&self, language: Language) -> Option<&Dictionary> {
        self.dictionaries.get(&language)
    }
}

fn interpolate(template: &str, params: &[(&str, &dyn fmt::Display)]) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures| {
            match params.iter().find(|(name, _)| *name == &caps[1]) {
                Some((_, value)) => value.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
