// ABOUTME: Main library entry point for the cat food portion calculator
// ABOUTME: Wires configuration, logging, persistence, localization, and the form session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Cat Food Calculator
//!
//! Estimates daily wet and dry food portions for a cat from its type, age,
//! weight, the calorie density of each food, and the wet/dry split.
//!
//! ## Architecture
//!
//! - **`catfood-core`**: shared models (`CatProfile`, `FoodPlan`), errors, constants
//! - **`catfood-intelligence`**: the pure portion calculator and its configuration
//! - **storage**: key-value persistence of the form fields (`ProfileStore`)
//! - **i18n**: text lookup for the eight shipped languages
//! - **session**: form state that persists every edit and recomputes the plan
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use catfood_calculator::session::CalculatorSession;
//! use catfood_calculator::storage::memory::MemoryStore;
//! use catfood_intelligence::PortionCalculator;
//!
//! # fn main() -> catfood_core::errors::AppResult<()> {
//! let mut session = CalculatorSession::open(MemoryStore::new(), PortionCalculator::from_global());
//! let plan = session.set_weight("5")?;
//! println!("Daily portions: {plan}");
//! # Ok(())
//! # }
//! ```

/// Environment-based configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Key-value persistence of the calculator form
pub mod storage;

/// Localized text lookup
pub mod i18n;

/// Form state with recompute-on-edit
pub mod session;

pub use catfood_core::errors::{AppError, AppResult, ErrorCode};
pub use catfood_core::models::{CatProfile, CatType, FoodPlan, FormField};
pub use catfood_intelligence::{PortionBreakdown, PortionCalculator, PortionConfig};
