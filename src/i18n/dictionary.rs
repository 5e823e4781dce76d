//! Loading and flattening of locale dictionaries.

use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result};
use serde_json::Value;

use super::Language;

/// All string entries of one locale, flattened to dotted keys.
///
/// `{"home": {"title": "Welcome"}}` becomes the entry
/// `home.title -> Welcome`. Non-string leaves produce no entry, so a key
/// that resolves to an object or array counts as missing for lookups.
#[derive(Debug, Clone)]
pub struct Dictionary {
    language: Language,
    entries: HashMap<String, String>,
}

impl Dictionary {
    /// Build a dictionary from an already-parsed JSON document.
    pub fn from_value(language: Language, value: &Value) -> Self {
        let mut entries = HashMap::new();
        flatten(value, String::new(), &mut entries);
        Self { language, entries }
    }

    /// Load `<lang>.json` from disk.
    pub fn load(path: &Path, language: Language) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read locale file: {:?}", path))?;
        let value: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse locale file: {:?}", path))?;
        Ok(Self::from_value(language, &value))
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Get the string stored under a dotted key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn flatten(value: &Value, prefix: String, entries: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(val, new_prefix, entries);
            }
        }
        Value::String(s) => {
            if !prefix.is_empty() {
                entries.insert(prefix, s.clone());
            }
        }
        // Arrays, numbers, booleans and nulls are not translation entries.
        _ => {}
    }
}
