// ABOUTME: Core types and constants for the cat food portion calculator
// ABOUTME: Foundation crate with error handling, cat profile models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Catfood Core
//!
//! Foundation crate providing shared types and constants for the cat food
//! portion calculator. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Persisted store keys, form defaults, and supported languages
//! - **models**: `CatType`, `CatProfile`, `FoodPlan` and the form field identifiers

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (cat profile, food plan, form fields)
pub mod models;
