// ABOUTME: Feline energy requirement constants with literature references
// ABOUTME: Resting energy formula coefficients and life-stage multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physiological constants for feline energy requirements
//!
//! References:
//! - National Research Council (2006). Nutrient Requirements of Dogs and Cats.
//!   National Academies Press. <https://doi.org/10.17226/10668>
//! - WSAVA Global Nutrition Committee (2011). Nutritional Assessment Guidelines.
//!   *Journal of Feline Medicine and Surgery*, 13(7), 516-525.

/// Resting energy requirement (RER), allometric form
///
/// RER (kcal/day) = 70 x `weight_kg`^0.75
pub mod resting_energy {
    /// RER coefficient (kcal per metabolic kg)
    pub const COEFFICIENT: f64 = 70.0;

    /// Metabolic body weight exponent
    pub const EXPONENT: f64 = 0.75;
}

/// Life-stage and condition multipliers applied to RER
pub mod condition_factors {
    /// Active adult
    pub const ACTIVE: f64 = 1.2;
    /// Indoor, less active adult
    pub const INDOOR: f64 = 0.8;
    /// Gestation
    pub const PREGNANT: f64 = 1.25;
    /// Lactation
    pub const LACTATING: f64 = 2.5;
    /// Weight loss plan
    pub const WEIGHT_LOSS: f64 = 0.8;
    /// Weight gain plan
    pub const WEIGHT_GAIN: f64 = 1.8;
}

/// Kitten growth multipliers, banded by age in months
pub mod kitten {
    /// Upper bound (inclusive) of the youngest band, months
    pub const YOUNG_MAX_MONTHS: i64 = 4;
    /// Multiplier for kittens up to 4 months
    pub const YOUNG_FACTOR: f64 = 2.5;
    /// Upper bound (inclusive) of the junior band, months
    pub const JUNIOR_MAX_MONTHS: i64 = 12;
    /// Multiplier for kittens from 5 to 12 months
    pub const JUNIOR_FACTOR: f64 = 2.0;
    /// Multiplier past 12 months, as the kitten approaches adulthood
    pub const ADOLESCENT_FACTOR: f64 = 1.5;
}

/// Secondary adult age adjustment
///
/// The band is "younger than 7 and older than 12 years", which is empty, so the
/// adjustment never applies with these bounds.
pub mod adult_age {
    /// Exclusive upper age bound, years
    pub const YOUNGER_THAN_YEARS: i64 = 7;
    /// Exclusive lower age bound, years
    pub const OLDER_THAN_YEARS: i64 = 12;
    /// Multiplier inside the band
    pub const FACTOR: f64 = 0.8;
}
