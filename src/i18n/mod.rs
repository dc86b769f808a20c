// ABOUTME: Localization of form labels, options, and result captions
// ABOUTME: Language detection order is explicit flag, stored choice, system locale, English
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Supported languages and code parsing
pub mod language;
/// Catalog-backed text lookup
pub mod translator;

pub use language::Language;
pub use translator::Translator;

use crate::storage::KeyValueStore;
use catfood_core::constants::store_keys;
use catfood_core::errors::AppResult;
use std::env;
use tracing::{debug, warn};

/// Text ids looked up by the form
pub mod text_ids {
    /// Page title
    pub const TITLE: &str = "Cat Food Calculator";
    /// First recommendation line
    pub const RECOMMENDATION_1: &str = "recommendation1";
    /// Second recommendation line
    pub const RECOMMENDATION_2: &str = "recommendation2";
    /// Ratio slider label
    pub const WET_DRY_RATIO: &str = "Wet/Dry Ratio";
    /// Dry food result caption
    pub const DRY_FOOD: &str = "Dry Food";
    /// Wet food result caption
    pub const WET_FOOD: &str = "Wet Food";

    /// Every id a catalog is expected to define
    pub const ALL: [&str; 19] = [
        TITLE,
        RECOMMENDATION_1,
        RECOMMENDATION_2,
        "Active",
        "Normal",
        "Kitten",
        "Pregnant",
        "Lactating",
        "Indoor",
        "Weight loss",
        "Weight gain",
        "Age (months)",
        "Age (years)",
        "Cat Weight (kg)",
        "Wet Food Calories (per 100g)",
        "Dry Food Calories (per 100g)",
        WET_DRY_RATIO,
        DRY_FOOD,
        WET_FOOD,
    ];
}

/// Pick the display language
///
/// The first candidate that names a supported language wins: the explicit
/// flag, then the stored choice, then the system locale. English otherwise.
#[must_use]
pub fn resolve_language(
    explicit: Option<&str>,
    stored: Option<&str>,
    system: Option<&str>,
) -> Language {
    let candidates = [("explicit", explicit), ("stored", stored), ("system", system)];
    for (source, code) in candidates {
        let Some(code) = code else { continue };
        if let Some(language) = Language::from_code(code) {
            debug!(source, code, language = %language, "Resolved display language");
            return language;
        }
        if source == "explicit" {
            warn!(code, "Requested language is not supported, ignoring it");
        } else {
            debug!(source, code, "Ignoring unsupported language code");
        }
    }
    Language::default()
}

/// System locale from `LC_ALL`, `LC_MESSAGES`, or `LANG`, first non-empty wins
#[must_use]
pub fn system_locale() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.trim().is_empty())
}

/// Resolve the language against the store and remember the choice
///
/// # Errors
///
/// Returns an error if the chosen language cannot be written back
pub fn detect_and_remember<S: KeyValueStore + ?Sized>(
    store: &mut S,
    explicit: Option<&str>,
) -> AppResult<Language> {
    let stored = match store.get(store_keys::LANGUAGE) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "Failed to read stored language");
            None
        }
    };
    let language = resolve_language(explicit, stored.as_deref(), system_locale().as_deref());

    if stored.as_deref() != Some(language.code()) {
        store.set(store_keys::LANGUAGE, language.code())?;
    }
    Ok(language)
}
