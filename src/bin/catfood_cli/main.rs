// ABOUTME: Cat food calculator CLI - edit the stored cat profile and print daily portions
// ABOUTME: Parses arguments, sets up logging, storage, and language, then runs one command
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Show the stored form and today's portions
//! catfood-cli show
//!
//! # Edit a field (persisted), then print the new portions
//! catfood-cli set weight 5.2
//! catfood-cli set cat-type kitten
//!
//! # One-off calculation without touching the stored form
//! catfood-cli calc --weight 3 --ratio 50 --breakdown
//!
//! # German labels, JSON output, in-memory store
//! catfood-cli --lang de --json --store :memory: show
//! ```
//!
//! Exit status: 0 on success, 2 for rejected input, 3 for invalid
//! configuration, 1 for anything else.

mod commands;
mod helpers;

use anyhow::{Context, Result};
use catfood_calculator::config::{AppConfig, StoreBackend};
use catfood_calculator::i18n::{self, Translator};
use catfood_calculator::logging::LoggingConfig;
use catfood_calculator::storage::Store;
use catfood_core::errors::AppError;
use catfood_intelligence::PortionCalculator;
use clap::{ArgAction, Parser, Subcommand};
use commands::{calc::CalcOverrides, CommandContext};
use std::process::ExitCode;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "catfood-cli",
    version,
    about = "Cat food portion calculator",
    long_about = "Estimates daily wet and dry food portions for a cat. The form is stored between runs."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Store file path, or `:memory:` for a throwaway store
    #[arg(long, global = true)]
    store: Option<String>,

    /// Display language (en, de, es, fr, it, jp, pt, zh)
    #[arg(long, global = true)]
    lang: Option<String>,

    /// Print machine readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show the stored form and its portions
    Show,

    /// Set one form field and print the new portions
    Set {
        /// Field: cat-type, age, weight, wet-food-calories, dry-food-calories, wet-dry-ratio
        field: String,

        /// New value, as typed into the form
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Compute portions for the stored form with overrides, without saving
    Calc {
        /// Cat type option value (see `options`)
        #[arg(long)]
        cat_type: Option<String>,

        /// Age (months for kittens, years otherwise)
        #[arg(long, allow_hyphen_values = true)]
        age: Option<String>,

        /// Weight in kg
        #[arg(long, allow_hyphen_values = true)]
        weight: Option<String>,

        /// Wet food kcal per 100 g
        #[arg(long, allow_hyphen_values = true)]
        wet: Option<String>,

        /// Dry food kcal per 100 g
        #[arg(long, allow_hyphen_values = true)]
        dry: Option<String>,

        /// Percent of calories from wet food (0-100)
        #[arg(long, allow_hyphen_values = true)]
        ratio: Option<String>,

        /// Also print unrounded energy and masses
        #[arg(long)]
        breakdown: bool,
    },

    /// Restore the default form
    Reset,

    /// List cat type options
    Options,

    /// List supported languages
    Languages,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(exit_status(&e))
        }
    }
}

/// Exit status for a failed command, taken from the first `AppError` in the chain
fn exit_status(error: &anyhow::Error) -> u8 {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<AppError>())
        .and_then(|app_error| u8::try_from(app_error.code.exit_code()).ok())
        .unwrap_or(1)
}

fn run(cli: Cli) -> Result<()> {
    LoggingConfig::from_env()
        .with_verbosity(cli.verbose)
        .init()
        .context("Failed to initialize logging")?;

    let mut config = AppConfig::from_env()
        .map_err(|e| AppError::config(format!("{e:#}")))?
        .with_language(cli.lang);
    if let Some(path) = cli.store.as_deref() {
        config = config.with_store(StoreBackend::parse(path));
    }

    let mut store = Store::new(&config.store)
        .with_context(|| format!("Failed to open store {}", config.store.backend))?;
    let language = i18n::detect_and_remember(&mut store, config.language.as_deref())?;
    let translator = Translator::new(language)?;
    info!(language = %language, backend = store.backend_name(), "CLI ready");

    let ctx = CommandContext {
        store,
        translator,
        calculator: PortionCalculator::new(config.portions),
        json: cli.json,
    };

    match cli.command {
        Command::Show => commands::form::show(ctx),
        Command::Set { field, value } => commands::form::set(ctx, &field, &value),
        Command::Calc {
            cat_type,
            age,
            weight,
            wet,
            dry,
            ratio,
            breakdown,
        } => commands::calc::run(
            &ctx,
            &CalcOverrides {
                cat_type,
                age,
                weight,
                wet_food_calories: wet,
                dry_food_calories: dry,
                wet_dry_ratio: ratio,
            },
            breakdown,
        ),
        Command::Reset => commands::form::reset(ctx),
        Command::Options => commands::catalog::options(&ctx),
        Command::Languages => commands::catalog::languages(&ctx),
    }
}
