// ABOUTME: Environment configuration for storage location, language, and deployment mode
// ABOUTME: Parses CATFOOD_* variables into typed settings with fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use anyhow::{Context, Result};
use catfood_core::constants::service_names;
use catfood_intelligence::PortionConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming the store file (or `:memory:`)
pub const STORE_PATH_ENV: &str = "CATFOOD_STORE_PATH";
/// Environment variable forcing the display language
pub const LANGUAGE_ENV: &str = "CATFOOD_LANG";
/// Environment variable selecting the deployment mode
pub const ENVIRONMENT_ENV: &str = "ENVIRONMENT";
/// Store path value selecting the in-memory backend
pub const MEMORY_STORE_PATH: &str = ":memory:";

const STORE_FILE_NAME: &str = "store.json";
const FALLBACK_STORE_PATH: &str = "./catfood-store.json";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    #[default]
    Warn,
    /// Informational messages
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "info" => Self::Info,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Warn,
        }
    }

    /// Level selected by a repeated `-v` flag count
    #[must_use]
    pub const fn from_verbosity(count: u8) -> Self {
        match count {
            0 => Self::Warn,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Where the form fields are persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "path", rename_all = "snake_case")]
pub enum StoreBackend {
    /// Process-local map, lost on exit
    Memory,
    /// JSON document on disk
    JsonFile(PathBuf),
}

impl StoreBackend {
    /// Parse a store path, `:memory:` selects the in-memory backend
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value == MEMORY_STORE_PATH {
            Self::Memory
        } else {
            Self::JsonFile(PathBuf::from(value))
        }
    }

    /// File path, if the backend is file based
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Memory => None,
            Self::JsonFile(path) => Some(path),
        }
    }
}

impl Default for StoreBackend {
    fn default() -> Self {
        Self::JsonFile(default_store_path())
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "{MEMORY_STORE_PATH}"),
            Self::JsonFile(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Selected backend
    pub backend: StoreBackend,
}

impl StoreConfig {
    /// Configuration for an explicit backend
    #[must_use]
    pub const fn new(backend: StoreBackend) -> Self {
        Self { backend }
    }

    /// Read `CATFOOD_STORE_PATH`, defaulting to the per-user data directory
    #[must_use]
    pub fn from_env() -> Self {
        env::var(STORE_PATH_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(Self::default, |value| Self::new(StoreBackend::parse(&value)))
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Persistence settings
    pub store: StoreConfig,
    /// Forced display language code, if any
    pub language: Option<String>,
    /// Deployment environment
    pub environment: Environment,
    /// Calculator multipliers
    pub portions: PortionConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a `CATFOOD_*` calculator override is not a number
    /// or the resulting multipliers are out of range.
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment variables");

        let portions =
            PortionConfig::load().context("Invalid calculator configuration in environment")?;

        let config = Self {
            store: StoreConfig::from_env(),
            language: env::var(LANGUAGE_ENV)
                .ok()
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty()),
            environment: Environment::from_str_or_default(
                &env::var(ENVIRONMENT_ENV).unwrap_or_default(),
            ),
            portions,
        };

        info!(
            service = service_names::CATFOOD_CALCULATOR,
            store = %config.store.backend,
            environment = %config.environment,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Replace the store backend (command-line override)
    #[must_use]
    pub fn with_store(mut self, backend: StoreBackend) -> Self {
        self.store = StoreConfig::new(backend);
        self
    }

    /// Replace the forced language (command-line override)
    #[must_use]
    pub fn with_language(mut self, language: Option<String>) -> Self {
        if language.is_some() {
            self.language = language;
        }
        self
    }
}

/// Default store file: `<data dir>/catfood-calculator/store.json`
#[must_use]
pub fn default_store_path() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(FALLBACK_STORE_PATH),
        |dir| dir.join(service_names::CATFOOD_CALCULATOR).join(STORE_FILE_NAME),
    )
}
