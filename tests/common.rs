// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, reference profiles, and temporary store helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::expect_used
)]
//! Shared test utilities for `catfood_calculator`

use catfood_calculator::storage::JsonFileStore;
use catfood_core::models::{CatProfile, CatType};
use std::path::PathBuf;
use std::sync::Once;
use tempfile::TempDir;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        // Another test binary helper may already have installed a subscriber
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// The form's initial values: normal cat, 5 years, 4 kg, 60/370 kcal, 33% wet
pub fn reference_profile() -> CatProfile {
    CatProfile::default()
}

/// Reference profile with a different cat type
pub fn profile_with_type(key: &str) -> CatProfile {
    reference_profile().with_cat_type(CatType::from_key(key))
}

/// Temporary directory holding a store file path that does not exist yet
pub fn temp_store_path() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("store.json");
    (dir, path)
}

/// Open a JSON file store in a fresh temporary directory
pub fn temp_json_store() -> (TempDir, JsonFileStore) {
    init_test_logging();
    let (dir, path) = temp_store_path();
    let store = JsonFileStore::open(path).expect("open store");
    (dir, store)
}
