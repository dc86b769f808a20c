// ABOUTME: Feline energy requirement algorithms and daily portion calculation
// ABOUTME: Pure calculator crate; persistence and localization live in the main crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Catfood Intelligence
//!
//! Computes the recommended daily wet and dry food mass for a cat from its
//! profile. Every function in this crate is pure: the same profile and
//! configuration always give the same plan, and no input makes it fail.

/// Portion calculation configuration (factors, env overrides, validation)
pub mod config;

/// Lenient numeric parsing of form text
pub mod parsing;

/// Feline energy constants with references
pub mod physiological_constants;

/// Maintenance energy, condition factors, and portion computation
pub mod portion_calculator;

pub use config::{ConfigError, PortionConfig};
pub use portion_calculator::{PortionBreakdown, PortionCalculator};
