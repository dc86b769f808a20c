// ABOUTME: Text lookup against the embedded JSON translation catalogs
// ABOUTME: Falls back from the active language to English and then to the text id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::language::Language;
use catfood_core::errors::{AppError, AppResult};
use std::collections::HashMap;
use tracing::trace;

/// Flat id -> text map of one language
pub type Catalog = HashMap<String, String>;

/// Raw catalog source embedded in the binary
#[must_use]
pub const fn catalog_source(language: Language) -> &'static str {
    match language {
        Language::En => include_str!("../../locales/en/translation.json"),
        Language::De => include_str!("../../locales/de/translation.json"),
        Language::Es => include_str!("../../locales/es/translation.json"),
        Language::Fr => include_str!("../../locales/fr/translation.json"),
        Language::It => include_str!("../../locales/it/translation.json"),
        Language::Jp => include_str!("../../locales/jp/translation.json"),
        Language::Pt => include_str!("../../locales/pt/translation.json"),
        Language::Zh => include_str!("../../locales/zh/translation.json"),
    }
}

/// Parse the embedded catalog of `language`
///
/// # Errors
///
/// Returns a serialization error if the catalog is not a flat JSON object of strings
pub fn load_catalog(language: Language) -> AppResult<Catalog> {
    serde_json::from_str(catalog_source(language)).map_err(|e| {
        AppError::serialization(format!("Invalid translation catalog '{language}'"))
            .with_source(e)
    })
}

/// Text lookup for one active language
#[derive(Debug, Clone)]
pub struct Translator {
    language: Language,
    catalog: Catalog,
    fallback: Catalog,
}

impl Translator {
    /// Create a translator for `language` with English as fallback
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded catalog cannot be parsed
    pub fn new(language: Language) -> AppResult<Self> {
        let fallback = load_catalog(Language::En)?;
        let catalog = if language == Language::En {
            Catalog::new()
        } else {
            load_catalog(language)?
        };
        Ok(Self {
            language,
            catalog,
            fallback,
        })
    }

    /// Active language
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Localized text if the active catalog has it
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<&str> {
        self.catalog.get(id).map(String::as_str)
    }

    /// Text for `id`: the active language, then English, then the id itself
    #[must_use]
    pub fn t<'a>(&'a self, id: &'a str) -> &'a str {
        if let Some(text) = self.lookup(id).or_else(|| self.fallback.get(id).map(String::as_str)) {
            return text;
        }
        trace!(id, language = %self.language, "Missing translation");
        id
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_every_catalog_parses() {
        for language in Language::ALL {
            let catalog = load_catalog(language).unwrap();
            assert!(!catalog.is_empty(), "{language} catalog is empty");
        }
    }

    #[test]
    fn test_english_uses_fallback_catalog() {
        let translator = Translator::new(Language::En).unwrap();
        assert_eq!(translator.lookup("Active"), None);
        assert_eq!(translator.t("Active"), "Active");
    }
}
