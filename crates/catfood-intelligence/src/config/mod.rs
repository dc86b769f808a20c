// ABOUTME: Portion calculator configuration with defaults, env overrides, and validation
// ABOUTME: Provides the process-wide PortionConfig used by the CLI and form session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Portion Calculator Configuration
//!
//! Defaults reproduce the established calculator behavior exactly, including
//! the two branches that never fire with the shipped option values (see
//! [`PortionConfig::weight_management_applies_to_options`] and
//! [`AgeAdjustmentConfig`]).

pub mod error;

pub use error::ConfigError;

use crate::physiological_constants::{adult_age, condition_factors, kitten, resting_energy};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static PORTION_CONFIG: OnceLock<PortionConfig> = OnceLock::new();

/// Complete portion calculator configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortionConfig {
    /// Resting energy formula
    pub energy: MaintenanceEnergyConfig,
    /// Per cat type multipliers
    pub conditions: ConditionFactorsConfig,
    /// Kitten age bands
    pub kitten: KittenFactorsConfig,
    /// Secondary adult age adjustment
    pub age_adjustment: AgeAdjustmentConfig,
    /// Apply the weight loss/gain factors to the selectable `weight-loss` and
    /// `weight-gain` options.
    ///
    /// Off by default: the factors are keyed on the labels `"Weight loss"` and
    /// `"Weight gain"`, so the options currently compute like `normal`. Turning
    /// this on changes results and needs product sign-off.
    pub weight_management_applies_to_options: bool,
}

/// Resting energy requirement formula: `coefficient x weight_kg^exponent`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceEnergyConfig {
    /// kcal per metabolic kilogram (70)
    pub rer_coefficient: f64,
    /// Metabolic weight exponent (0.75)
    pub rer_exponent: f64,
}

/// Multipliers selected by cat type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionFactorsConfig {
    /// Active adult: 1.2
    pub active: f64,
    /// Indoor adult: 0.8
    pub indoor: f64,
    /// Pregnant: 1.25
    pub pregnant: f64,
    /// Lactating: 2.5
    pub lactating: f64,
    /// Weight loss: 0.8
    pub weight_loss: f64,
    /// Weight gain: 1.8
    pub weight_gain: f64,
}

/// Kitten multipliers by age band (months)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KittenFactorsConfig {
    /// Inclusive upper bound of the young band (4)
    pub young_max_months: i64,
    /// Young band multiplier (2.5)
    pub young: f64,
    /// Inclusive upper bound of the junior band (12)
    pub junior_max_months: i64,
    /// Junior band multiplier (2.0)
    pub junior: f64,
    /// Multiplier above the junior band (1.5)
    pub adolescent: f64,
}

/// Secondary age adjustment for normal, active, and indoor cats
///
/// Applies `factor` when `age < younger_than_years && age > older_than_years`.
/// The default bounds (7 and 12) make the band empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeAdjustmentConfig {
    /// Exclusive upper bound (7)
    pub younger_than_years: i64,
    /// Exclusive lower bound (12)
    pub older_than_years: i64,
    /// Multiplier inside the band (0.8)
    pub factor: f64,
}

impl Default for MaintenanceEnergyConfig {
    fn default() -> Self {
        Self {
            rer_coefficient: resting_energy::COEFFICIENT,
            rer_exponent: resting_energy::EXPONENT,
        }
    }
}

impl Default for ConditionFactorsConfig {
    fn default() -> Self {
        Self {
            active: condition_factors::ACTIVE,
            indoor: condition_factors::INDOOR,
            pregnant: condition_factors::PREGNANT,
            lactating: condition_factors::LACTATING,
            weight_loss: condition_factors::WEIGHT_LOSS,
            weight_gain: condition_factors::WEIGHT_GAIN,
        }
    }
}

impl Default for KittenFactorsConfig {
    fn default() -> Self {
        Self {
            young_max_months: kitten::YOUNG_MAX_MONTHS,
            young: kitten::YOUNG_FACTOR,
            junior_max_months: kitten::JUNIOR_MAX_MONTHS,
            junior: kitten::JUNIOR_FACTOR,
            adolescent: kitten::ADOLESCENT_FACTOR,
        }
    }
}

impl Default for AgeAdjustmentConfig {
    fn default() -> Self {
        Self {
            younger_than_years: adult_age::YOUNGER_THAN_YEARS,
            older_than_years: adult_age::OLDER_THAN_YEARS,
            factor: adult_age::FACTOR,
        }
    }
}

impl KittenFactorsConfig {
    /// Multiplier for a kitten of the given age in months
    #[must_use]
    pub fn factor_for_age(&self, age_months: i64) -> f64 {
        if age_months <= self.young_max_months {
            self.young
        } else if age_months <= self.junior_max_months {
            self.junior
        } else {
            self.adolescent
        }
    }
}

impl AgeAdjustmentConfig {
    /// Whether `age` falls inside the adjustment band
    #[must_use]
    pub const fn applies_to(&self, age: i64) -> bool {
        age < self.younger_than_years && age > self.older_than_years
    }
}

impl PortionConfig {
    /// Get the global configuration instance
    ///
    /// Loaded once from the environment; falls back to defaults (with a
    /// warning) when an override is malformed or fails validation.
    pub fn global() -> &'static Self {
        PORTION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load portion config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate coefficients, factors, and band ordering
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for non-positive or oversized factors and
    /// `ConfigError::InvalidRange` when kitten bands are out of order
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.energy.rer_coefficient) {
            return Err(ConfigError::ValueOutOfRange(
                "RER coefficient must be positive",
            ));
        }
        if !(self.energy.rer_exponent > 0.0 && self.energy.rer_exponent <= 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "RER exponent must be in (0, 1]",
            ));
        }

        let c = &self.conditions;
        let factors = [
            c.active,
            c.indoor,
            c.pregnant,
            c.lactating,
            c.weight_loss,
            c.weight_gain,
            self.kitten.young,
            self.kitten.junior,
            self.kitten.adolescent,
            self.age_adjustment.factor,
        ];
        if factors.iter().any(|&f| !is_positive(f) || f > MAX_FACTOR) {
            return Err(ConfigError::ValueOutOfRange(
                "Condition factors must be between 0 and 5",
            ));
        }

        if self.kitten.young_max_months < 0
            || self.kitten.young_max_months >= self.kitten.junior_max_months
        {
            return Err(ConfigError::InvalidRange(
                "Kitten age bands must be ascending and non-negative",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("CATFOOD_RER_COEFFICIENT", &mut self.energy.rer_coefficient)?;
        Self::apply_env_var("CATFOOD_RER_EXPONENT", &mut self.energy.rer_exponent)?;

        Self::apply_env_var("CATFOOD_FACTOR_ACTIVE", &mut self.conditions.active)?;
        Self::apply_env_var("CATFOOD_FACTOR_INDOOR", &mut self.conditions.indoor)?;
        Self::apply_env_var("CATFOOD_FACTOR_PREGNANT", &mut self.conditions.pregnant)?;
        Self::apply_env_var("CATFOOD_FACTOR_LACTATING", &mut self.conditions.lactating)?;
        Self::apply_env_var(
            "CATFOOD_FACTOR_WEIGHT_LOSS",
            &mut self.conditions.weight_loss,
        )?;
        Self::apply_env_var(
            "CATFOOD_FACTOR_WEIGHT_GAIN",
            &mut self.conditions.weight_gain,
        )?;

        Self::apply_env_var(
            "CATFOOD_WEIGHT_MANAGEMENT_FOR_OPTIONS",
            &mut self.weight_management_applies_to_options,
        )?;

        Ok(self)
    }
}

/// Upper bound for any multiplier
const MAX_FACTOR: f64 = 5.0;

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]

    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config_is_valid() {
        PortionConfig::default().validate().unwrap();
    }

    #[test]
    fn test_default_age_band_is_empty() {
        let band = AgeAdjustmentConfig::default();
        assert!((-100..=100).all(|age| !band.applies_to(age)));
    }

    #[test]
    fn test_kitten_bands() {
        let kitten = KittenFactorsConfig::default();
        assert!((kitten.factor_for_age(0) - 2.5).abs() < f64::EPSILON);
        assert!((kitten.factor_for_age(4) - 2.5).abs() < f64::EPSILON);
        assert!((kitten.factor_for_age(5) - 2.0).abs() < f64::EPSILON);
        assert!((kitten.factor_for_age(12) - 2.0).abs() < f64::EPSILON);
        assert!((kitten.factor_for_age(13) - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validate_rejects_zero_factor() {
        let mut config = PortionConfig::default();
        config.conditions.lactating = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_validate_rejects_unordered_kitten_bands() {
        let mut config = PortionConfig::default();
        config.kitten.young_max_months = 12;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_validate_rejects_exponent_above_one() {
        let mut config = PortionConfig::default();
        config.energy.rer_exponent = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_env_overrides_apply() {
        env::set_var("CATFOOD_FACTOR_ACTIVE", "1.4");
        env::set_var("CATFOOD_WEIGHT_MANAGEMENT_FOR_OPTIONS", "true");

        let config = PortionConfig::load().unwrap();

        env::remove_var("CATFOOD_FACTOR_ACTIVE");
        env::remove_var("CATFOOD_WEIGHT_MANAGEMENT_FOR_OPTIONS");

        assert!((config.conditions.active - 1.4).abs() < f64::EPSILON);
        assert!(config.weight_management_applies_to_options);
    }

    #[test]
    #[serial]
    fn test_malformed_env_override_is_rejected() {
        env::set_var("CATFOOD_RER_COEFFICIENT", "seventy");
        let result = PortionConfig::load();
        env::remove_var("CATFOOD_RER_COEFFICIENT");

        match result {
            Err(ConfigError::Parse(message)) => {
                assert!(message.contains("CATFOOD_RER_COEFFICIENT"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
