//! Locale dictionaries and the translation resolver.
//!
//! One JSON document per supported language lives in the locales root
//! (`<root>/<lang>.json`), structured as nested objects of string values.
//! Dictionaries are loaded wholesale on language switch; resolution walks
//! dotted keys with parameter interpolation and English fallback.

pub mod dictionary;
pub mod translator;

pub use dictionary::Dictionary;
pub use translator::{Resolution, Translator};

use std::{
    fmt,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

/// A supported interface language.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Arabic, the platform default.
    #[default]
    Ar,
    En,
}

/// Language every failed lookup falls back to.
pub const FALLBACK_LANGUAGE: Language = Language::En;

impl Language {
    /// Two-letter language code used in locale file names.
    pub fn code(self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    /// Parse a stored language code; unknown values yield `None`.
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "ar" => Some(Language::Ar),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Text direction mirrored onto rendered output.
    pub fn direction(self) -> Direction {
        match self {
            Language::Ar => Direction::Rtl,
            Language::En => Direction::Ltr,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Text direction of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Rtl,
    Ltr,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Rtl => write!(f, "rtl"),
            Direction::Ltr => write!(f, "ltr"),
        }
    }
}

/// Dictionaries compiled into the binary, used when no locales directory
/// is present on disk.
pub fn builtin_dictionaries() -> anyhow::Result<Vec<Dictionary>> {
    use anyhow::Context;

    let ar: serde_json::Value = serde_json::from_str(include_str!("../../locales/ar.json"))
        .context("Failed to parse built-in Arabic dictionary")?;
    let en: serde_json::Value = serde_json::from_str(include_str!("../../locales/en.json"))
        .context("Failed to parse built-in English dictionary")?;
    Ok(vec![
        Dictionary::from_value(Language::Ar, &ar),
        Dictionary::from_value(Language::En, &en),
    ])
}

/// Discover locale files in the locales root.
///
/// Only top-level `<lang>.json` files whose stem is a supported language
/// code are returned; anything else in the directory is ignored.
pub fn discover_locale_files(root: &Path) -> Vec<(Language, PathBuf)> {
    let mut found = Vec::new();
    for entry in WalkDir::new(root)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if path.extension().is_none_or(|ext| ext != "json") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if let Some(language) = Language::from_code(stem) {
            found.push((language, path.to_path_buf()));
        }
    }
    found.sort_by_key(|(language, _)| language.code());
    found
}
