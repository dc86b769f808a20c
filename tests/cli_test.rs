// ABOUTME: End-to-end tests for the catfood-cli binary
// ABOUTME: Runs the built binary against a temporary store and checks its output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serde_json::Value;
use std::path::Path;
use std::process::{Command, Output};

mod common;

use common::temp_store_path;

fn run_cli(store: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_catfood-cli"))
        .arg("--store")
        .arg(store)
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("CATFOOD_LANG")
        .env_remove("CATFOOD_STORE_PATH")
        .output()
        .expect("run catfood-cli")
}

fn run_json(store: &Path, args: &[&str]) -> Value {
    let mut full = vec!["--json", "--lang", "en"];
    full.extend_from_slice(args);
    let output = run_cli(store, &full);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_show_prints_default_plan() {
    let (_dir, store) = temp_store_path();
    let view = run_json(&store, &["show"]);
    assert_eq!(view["plan"]["wetFoodGrams"], 109);
    assert_eq!(view["plan"]["dryFoodGrams"], 36);
    assert_eq!(view["language"], "en");
}

#[test]
fn test_set_persists_between_runs() {
    let (_dir, store) = temp_store_path();
    let view = run_json(&store, &["set", "cat-type", "kitten"]);
    assert_eq!(view["profile"]["age"], "6");

    let view = run_json(&store, &["show"]);
    assert_eq!(view["profile"]["catType"], "kitten");
    assert_eq!(view["plan"]["wetFoodGrams"], 218);
}

#[test]
fn test_calc_does_not_persist() {
    let (_dir, store) = temp_store_path();
    let view = run_json(&store, &["calc", "--weight", "5"]);
    assert_eq!(view["plan"]["wetFoodGrams"], 129);

    let view = run_json(&store, &["show"]);
    assert_eq!(view["profile"]["weight"], "4");
}

#[test]
fn test_unknown_field_fails() {
    let (_dir, store) = temp_store_path();
    let output = run_cli(&store, &["set", "colour", "tabby"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown field"));
}

#[test]
fn test_rejected_ratio_exits_with_input_status() {
    let (_dir, store) = temp_store_path();
    let output = run_cli(&store, &["set", "wet-dry-ratio", "lots"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Wet/dry ratio"));

    let output = run_cli(&store, &["calc", "--ratio", "lots"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_invalid_configuration_exits_with_config_status() {
    let (_dir, store) = temp_store_path();
    let output = Command::new(env!("CARGO_BIN_EXE_catfood-cli"))
        .arg("--store")
        .arg(&store)
        .arg("show")
        .env("CATFOOD_FACTOR_ACTIVE", "lively")
        .output()
        .expect("run catfood-cli");
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_text_output_is_localized() {
    let (_dir, store) = temp_store_path();
    let output = run_cli(&store, &["--lang", "de", "show"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Trockenfutter: 36 g"));
    assert!(stdout.contains("33% / 67%"));
}

#[test]
fn test_unsupported_language_flag_is_reported() {
    let (_dir, store) = temp_store_path();
    let output = run_cli(&store, &["--lang", "xx", "show"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Requested language is not supported"), "stderr: {stderr}");
}
