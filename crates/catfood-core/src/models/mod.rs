// ABOUTME: Core data models for the cat food portion calculator
// ABOUTME: Re-exports cat profile, food plan, and form field definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod cat;
mod form;
mod plan;

pub use cat::{CatProfile, CatType};
pub use form::FormField;
pub use plan::FoodPlan;
