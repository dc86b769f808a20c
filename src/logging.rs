// ABOUTME: Logging configuration and structured logging setup for the calculator
// ABOUTME: Builds a tracing subscriber with env filtering and json, pretty, or compact output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration
//!
//! Log output always goes to stderr so that command output on stdout stays
//! machine readable (for example with `--json`).

use crate::config::{Environment, LogLevel};
use anyhow::Result;
use catfood_core::constants::service_names;
use serde_json::json;
use std::env;
use std::fmt;
use std::io;
use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self as tracing_fmt, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Crate targets that receive the configured level
const APP_TARGETS: [&str; 3] = [
    "catfood_calculator",
    "catfood_intelligence",
    "catfood_core",
];

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for the calculator crates
    pub level: LogLevel,
    /// Raw `RUST_LOG` directives, taking precedence over `level` when set
    pub directives: Option<String>,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Deployment environment
    pub environment: Environment,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// `JSON` lines for log collectors
    Json,
    /// Multi-line human readable output
    Pretty,
    /// Single-line output
    #[default]
    Compact,
}

impl LogFormat {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Pretty => write!(f, "pretty"),
            Self::Compact => write!(f, "compact"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            directives: None,
            format: LogFormat::default(),
            include_location: false,
            service_name: service_names::CATFOOD_CALCULATOR.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: Environment::default(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let directives = env::var("RUST_LOG")
            .ok()
            .filter(|value| !value.trim().is_empty());
        let format = LogFormat::from_str_or_default(&env::var("LOG_FORMAT").unwrap_or_default());
        let environment =
            Environment::from_str_or_default(&env::var("ENVIRONMENT").unwrap_or_default());

        // Production log collectors want structured output
        let format = if environment.is_production() && env::var("LOG_FORMAT").is_err() {
            LogFormat::Json
        } else {
            format
        };

        Self {
            level: LogLevel::default(),
            directives,
            format,
            include_location: environment.is_production()
                || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            environment,
            ..Self::default()
        }
    }

    /// Raise the level from a repeated `-v` flag; `0` leaves it unchanged
    #[must_use]
    pub const fn with_verbosity(mut self, count: u8) -> Self {
        if count > 0 {
            self.level = LogLevel::from_verbosity(count);
        }
        self
    }

    /// Build the filter: `RUST_LOG` if set, otherwise `warn` globally with the
    /// configured level for the calculator crates
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        if let Some(directives) = &self.directives {
            return EnvFilter::new(directives);
        }

        APP_TARGETS.iter().fold(EnvFilter::new("warn"), |filter, target| {
            filter.add_directive(
                format!("{target}={}", self.level)
                    .parse()
                    .unwrap_or_else(|_| self.level.to_tracing_level().into()),
            )
        })
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => {
                let json_layer = tracing_fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE)
                    .json();

                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = tracing_fmt::layer()
                    .pretty()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr);

                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = tracing_fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_target(false)
                    .with_writer(io::stderr);

                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = %self.format,
            "Cat food calculator starting"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment.to_string(),
            },
            "logging": {
                "level": self.level.to_string(),
                "directives": self.directives,
                "format": self.format.to_string(),
                "location": self.include_location,
            }
        });
        debug!("Logging configured: {}", config_summary);
    }
}
