// ABOUTME: Daily wet/dry food portion calculation from a cat profile
// ABOUTME: Resting energy, cat type multipliers, calorie split, and gram conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Portion Calculator Module
//!
//! Converts a cat profile into grams of wet and dry food per day:
//!
//! 1. Maintenance energy from the resting energy requirement,
//!    `70 x weight_kg^0.75` kcal/day.
//! 2. One multiplier chosen by cat type (age-banded for kittens).
//! 3. A secondary adult age adjustment (empty band with default bounds).
//! 4. Split of the energy by the wet/dry ratio.
//! 5. Conversion of each share to grams using the food's kcal per 100 g.
//! 6. Rounding to whole grams.
//!
//! The calculation is total: missing or unparsable weight or calorie data gives
//! an empty [`FoodPlan`], an unparsable age counts as 5, and an unknown cat type
//! gets no multiplier.
//!
//! # Reference
//!
//! National Research Council (2006). Nutrient Requirements of Dogs and Cats.
//! <https://doi.org/10.17226/10668>

use crate::config::{ConditionFactorsConfig, MaintenanceEnergyConfig, PortionConfig};
use crate::parsing::{is_blank, parse_leading_decimal, parse_leading_integer};
use catfood_core::constants::defaults;
use catfood_core::models::{CatProfile, CatType, FoodPlan};
use serde::{Deserialize, Serialize};

/// Label keys the weight loss/gain multipliers are matched against
const WEIGHT_LOSS_LABEL: &str = "Weight loss";
const WEIGHT_GAIN_LABEL: &str = "Weight gain";

/// Full-precision intermediates of a portion calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortionBreakdown {
    /// Maintenance energy after all multipliers (kcal/day)
    pub maintenance_kcal: f64,
    /// Combined multiplier applied to the resting energy
    pub condition_factor: f64,
    /// Energy supplied by wet food (kcal/day)
    pub wet_kcal: f64,
    /// Energy supplied by dry food (kcal/day)
    pub dry_kcal: f64,
    /// Wet food mass before rounding (g)
    pub wet_food_grams_exact: f64,
    /// Dry food mass before rounding (g)
    pub dry_food_grams_exact: f64,
}

impl PortionBreakdown {
    /// Round to the displayed plan; non-finite masses become empty fields
    #[must_use]
    pub fn to_plan(&self) -> FoodPlan {
        FoodPlan {
            wet_food_grams: round_grams(self.wet_food_grams_exact),
            dry_food_grams: round_grams(self.dry_food_grams_exact),
        }
    }
}

/// Portion calculator bound to a configuration
#[derive(Debug, Clone, Default)]
pub struct PortionCalculator {
    config: PortionConfig,
}

impl PortionCalculator {
    /// Create a calculator with the given configuration
    #[must_use]
    pub const fn new(config: PortionConfig) -> Self {
        Self { config }
    }

    /// Create a calculator from the process-wide configuration
    #[must_use]
    pub fn from_global() -> Self {
        Self::new(PortionConfig::global().clone())
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &PortionConfig {
        &self.config
    }

    /// Compute the daily plan for a profile
    #[must_use]
    pub fn compute(&self, profile: &CatProfile) -> FoodPlan {
        compute(profile, &self.config)
    }

    /// Compute the full-precision breakdown for a profile
    #[must_use]
    pub fn compute_breakdown(&self, profile: &CatProfile) -> Option<PortionBreakdown> {
        compute_breakdown(profile, &self.config)
    }
}

/// Compute the daily plan for a profile
///
/// Returns [`FoodPlan::empty`] when weight, wet food calories, or dry food
/// calories is missing or not a number.
#[must_use]
pub fn compute(profile: &CatProfile, config: &PortionConfig) -> FoodPlan {
    compute_breakdown(profile, config)
        .as_ref()
        .map_or_else(FoodPlan::empty, PortionBreakdown::to_plan)
}

/// Compute the full-precision breakdown, `None` when required data is missing
#[must_use]
pub fn compute_breakdown(profile: &CatProfile, config: &PortionConfig) -> Option<PortionBreakdown> {
    let weight_kg = required_decimal(&profile.weight)?;
    let wet_density = required_decimal(&profile.wet_food_calories)?;
    let dry_density = required_decimal(&profile.dry_food_calories)?;
    let age = effective_age(&profile.age);

    let type_factor = condition_factor(&profile.cat_type, age, config).unwrap_or(1.0);
    let age_factor = age_adjustment_factor(&profile.cat_type, age, config);

    // Applied in sequence: resting energy, then type factor, then age factor
    let maintenance_kcal =
        calculate_resting_energy(weight_kg, &config.energy) * type_factor * age_factor;

    let (wet_kcal, dry_kcal) = split_calories(maintenance_kcal, profile.wet_dry_ratio);

    Some(PortionBreakdown {
        maintenance_kcal,
        condition_factor: type_factor * age_factor,
        wet_kcal,
        dry_kcal,
        wet_food_grams_exact: grams_for_calories(wet_kcal, wet_density),
        dry_food_grams_exact: grams_for_calories(dry_kcal, dry_density),
    })
}

/// Resting energy requirement: `coefficient x weight_kg^exponent` (kcal/day)
///
/// Negative weights yield NaN, which surfaces as an empty plan field.
#[must_use]
pub fn calculate_resting_energy(weight_kg: f64, config: &MaintenanceEnergyConfig) -> f64 {
    config.rer_coefficient * weight_kg.powf(config.rer_exponent)
}

/// Multiplier selected by cat type, `None` when the type has no multiplier
///
/// `normal`, unknown keys, and (unless
/// [`PortionConfig::weight_management_applies_to_options`] is set) the
/// `weight-loss`/`weight-gain` options get no multiplier. The weight factors
/// are matched on the `"Weight loss"`/`"Weight gain"` labels.
#[must_use]
pub fn condition_factor(cat_type: &CatType, age: i64, config: &PortionConfig) -> Option<f64> {
    let factors: &ConditionFactorsConfig = &config.conditions;
    let for_options = config.weight_management_applies_to_options;

    match cat_type {
        CatType::Active => Some(factors.active),
        CatType::Indoor => Some(factors.indoor),
        CatType::Kitten => Some(config.kitten.factor_for_age(age)),
        CatType::Pregnant => Some(factors.pregnant),
        CatType::Lactating => Some(factors.lactating),
        CatType::WeightLoss if for_options => Some(factors.weight_loss),
        CatType::WeightGain if for_options => Some(factors.weight_gain),
        CatType::Other(key) if key == WEIGHT_LOSS_LABEL => Some(factors.weight_loss),
        CatType::Other(key) if key == WEIGHT_GAIN_LABEL => Some(factors.weight_gain),
        CatType::Normal | CatType::WeightLoss | CatType::WeightGain | CatType::Other(_) => None,
    }
}

/// Secondary adult age adjustment for normal, active, and indoor cats
#[must_use]
pub fn age_adjustment_factor(cat_type: &CatType, age: i64, config: &PortionConfig) -> f64 {
    let eligible = matches!(
        cat_type,
        CatType::Normal | CatType::Active | CatType::Indoor
    );
    if eligible && config.age_adjustment.applies_to(age) {
        config.age_adjustment.factor
    } else {
        1.0
    }
}

/// Split maintenance energy into (wet, dry) kcal by the wet percentage
#[must_use]
pub fn split_calories(maintenance_kcal: f64, wet_percent: u8) -> (f64, f64) {
    let ratio = f64::from(wet_percent) / 100.0;
    (maintenance_kcal * ratio, maintenance_kcal * (1.0 - ratio))
}

/// Grams of food that supply `kcal` at `kcal_per_100g`
#[must_use]
pub fn grams_for_calories(kcal: f64, kcal_per_100g: f64) -> f64 {
    kcal / (kcal_per_100g / 100.0)
}

/// Age used by the calculator: leading integer of the text, or the fallback
/// when the text is empty, not a number, or zero
#[must_use]
pub fn effective_age(age_text: &str) -> i64 {
    match parse_leading_integer(age_text) {
        Some(age) if age != 0 => age,
        _ => defaults::FALLBACK_AGE,
    }
}

fn required_decimal(text: &str) -> Option<f64> {
    if is_blank(text) {
        return None;
    }
    parse_leading_decimal(text)
}

/// Round half away from zero; non-finite masses have no displayable value
fn round_grams(grams: f64) -> Option<i64> {
    grams.is_finite().then(|| grams.round() as i64)
}
