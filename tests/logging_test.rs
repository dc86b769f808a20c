// ABOUTME: Unit tests for logging functionality
// ABOUTME: Validates logging configuration defaults and environment variable handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use catfood_calculator::config::{Environment, LogLevel};
use catfood_calculator::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

fn clear_env() {
    for name in ["RUST_LOG", "LOG_FORMAT", "ENVIRONMENT", "LOG_INCLUDE_LOCATION"] {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    env::set_var("RUST_LOG", "catfood_calculator=trace");
    env::set_var("LOG_FORMAT", "pretty");
    env::set_var("ENVIRONMENT", "production");

    let config = LoggingConfig::from_env();

    assert_eq!(config.directives.as_deref(), Some("catfood_calculator=trace"));
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.environment, Environment::Production);
    assert!(config.include_location);

    clear_env();
}

#[test]
#[serial]
fn test_production_defaults_to_json() {
    clear_env();
    env::set_var("ENVIRONMENT", "prod");
    assert_eq!(LoggingConfig::from_env().format, LogFormat::Json);
    clear_env();
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, LogLevel::Warn);
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.service_name, "catfood-calculator");
    assert!(config.directives.is_none());
    assert!(!config.include_location);
}

#[test]
fn test_verbosity_raises_level() {
    let config = LoggingConfig::default().with_verbosity(2);
    assert_eq!(config.level, LogLevel::Debug);

    let unchanged = LoggingConfig::default().with_verbosity(0);
    assert_eq!(unchanged.level, LogLevel::Warn);
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("pretty"), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Compact);
}

#[test]
fn test_filter_targets_calculator_crates() {
    let filter = LoggingConfig::default().with_verbosity(1).env_filter();
    let rendered = filter.to_string().to_lowercase();
    assert!(rendered.contains("catfood_calculator=info"));
    assert!(rendered.contains("catfood_intelligence=info"));
}
