// ABOUTME: Integration tests for localized text lookup and language detection
// ABOUTME: Validates catalog completeness, fallbacks, lenient codes, and stored choice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use catfood_calculator::i18n::translator::load_catalog;
use catfood_calculator::i18n::{
    detect_and_remember, resolve_language, text_ids, Language, Translator,
};
use catfood_calculator::storage::{KeyValueStore, MemoryStore};
use catfood_core::constants::store_keys;
use catfood_core::models::{CatType, FormField};
use serial_test::serial;
use std::env;

mod common;

const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

fn clear_locale_env() {
    for name in LOCALE_VARS {
        env::remove_var(name);
    }
}

// ============================================================================
// CATALOGS
// ============================================================================

#[test]
fn test_every_catalog_defines_every_text_id() {
    for language in Language::ALL {
        let catalog = load_catalog(language).unwrap();
        for id in text_ids::ALL {
            assert!(
                catalog.get(id).is_some_and(|text| !text.is_empty()),
                "{language} is missing '{id}'"
            );
        }
    }
}

#[test]
fn test_every_form_label_has_a_text_id() {
    for option in CatType::OPTIONS {
        let id = option.label_id().unwrap();
        assert!(text_ids::ALL.contains(&id), "{id}");
    }
    for kitten in [false, true] {
        for field in FormField::ALL {
            if let Some(id) = field.label_id(kitten) {
                assert!(text_ids::ALL.contains(&id), "{id}");
            }
        }
    }
}

#[test]
fn test_translation_lookup() {
    let german = Translator::new(Language::De).unwrap();
    assert_eq!(german.language(), Language::De);
    assert_eq!(german.t("Kitten"), "Kätzchen");
    assert_eq!(german.t(text_ids::DRY_FOOD), "Trockenfutter");

    let english = Translator::new(Language::En).unwrap();
    assert_eq!(english.t("Wet/Dry Ratio"), "Wet/Dry Ratio");
}

#[test]
fn test_unknown_id_falls_back_to_id() {
    let french = Translator::new(Language::Fr).unwrap();
    assert_eq!(french.t("Hairball Index"), "Hairball Index");
    assert_eq!(french.lookup("Hairball Index"), None);
}

// ============================================================================
// LANGUAGE RESOLUTION
// ============================================================================

#[test]
fn test_resolution_order() {
    assert_eq!(
        resolve_language(Some("it"), Some("de"), Some("fr_FR.UTF-8")),
        Language::It
    );
    assert_eq!(
        resolve_language(None, Some("de"), Some("fr_FR.UTF-8")),
        Language::De
    );
    assert_eq!(
        resolve_language(None, None, Some("fr_FR.UTF-8")),
        Language::Fr
    );
    assert_eq!(resolve_language(None, None, None), Language::En);
}

#[test]
fn test_unsupported_candidates_are_skipped() {
    assert_eq!(
        resolve_language(Some("klingon"), Some("ko"), Some("ja_JP.UTF-8")),
        Language::Jp
    );
    assert_eq!(resolve_language(None, None, Some("C")), Language::En);
}

#[test]
#[serial]
fn test_detected_language_is_remembered() {
    clear_locale_env();
    env::set_var("LANG", "pt_BR.UTF-8");

    let mut store = MemoryStore::new();
    assert_eq!(detect_and_remember(&mut store, None).unwrap(), Language::Pt);
    assert_eq!(
        store.get(store_keys::LANGUAGE).unwrap().as_deref(),
        Some("pt")
    );

    // The stored choice now wins over the system locale
    env::set_var("LANG", "zh_CN.UTF-8");
    assert_eq!(detect_and_remember(&mut store, None).unwrap(), Language::Pt);

    clear_locale_env();
}

#[test]
#[serial]
fn test_explicit_language_replaces_stored_choice() {
    clear_locale_env();
    let mut store = MemoryStore::with_entries([(store_keys::LANGUAGE, "de")]);

    assert_eq!(
        detect_and_remember(&mut store, Some("es-MX")).unwrap(),
        Language::Es
    );
    assert_eq!(
        store.get(store_keys::LANGUAGE).unwrap().as_deref(),
        Some("es")
    );
}

#[test]
#[serial]
fn test_no_locale_defaults_to_english() {
    clear_locale_env();
    let mut store = MemoryStore::new();
    assert_eq!(detect_and_remember(&mut store, None).unwrap(), Language::En);
    assert_eq!(
        store.get(store_keys::LANGUAGE).unwrap().as_deref(),
        Some("en")
    );
}
