// ABOUTME: Configuration module for the calculator application settings
// ABOUTME: Exposes environment-driven settings for storage, language, and deployment mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: application configuration from environment variables
//! - **Portions**: calculator multipliers live in
//!   [`catfood_intelligence::PortionConfig`] and are loaded alongside

/// Environment-based application configuration
pub mod environment;

pub use environment::{AppConfig, Environment, LogLevel, StoreBackend, StoreConfig};
