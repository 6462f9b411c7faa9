//! Locale lookup for message templates.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A translation table keyed by the literal English template text.
///
/// Rendering resolves every template through the installed locale; a missing
/// entry falls back to the literal text, so an empty locale renders English
/// and a partial locale degrades gracefully. A missing translation is never
/// an error.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Locale {
    entries: HashMap<String, String>,
}

impl Locale {
    /// Creates an empty locale that resolves every template to itself.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a locale from `(template, translation)` pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Adds or replaces the translation for a template.
    pub fn insert(&mut self, template: impl Into<String>, translation: impl Into<String>) {
        self.entries.insert(template.into(), translation.into());
    }

    /// Resolves a template to its translation, or to the template itself if
    /// no translation is installed.
    pub fn resolve<'a>(&'a self, template: &'a str) -> &'a str {
        self.entries
            .get(template)
            .map(String::as_str)
            .unwrap_or(template)
    }
}
