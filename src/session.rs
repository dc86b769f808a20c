// ABOUTME: Calculator form state that persists each edit and recomputes the plan
// ABOUTME: Generic over the profile store so tests can run against an in-memory backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calculator session
//!
//! Every mutator persists the edited key first and only then updates the form
//! and recomputes the plan. A failed write leaves the session exactly as it
//! was. The plan returned by a mutator (and by [`CalculatorSession::plan`]
//! afterwards) always reflects the current form.

use crate::storage::ProfileStore;
use catfood_core::constants::{defaults, ratio};
use catfood_core::errors::{AppError, AppResult};
use catfood_core::models::{CatProfile, CatType, FoodPlan, FormField};
use catfood_intelligence::parsing::parse_ratio_percent;
use catfood_intelligence::{PortionBreakdown, PortionCalculator};
use tracing::debug;

/// Form state bound to a store and a calculator
#[derive(Debug)]
pub struct CalculatorSession<S: ProfileStore> {
    store: S,
    calculator: PortionCalculator,
    profile: CatProfile,
    plan: FoodPlan,
}

impl<S: ProfileStore> CalculatorSession<S> {
    /// Load the stored profile and compute its plan
    #[must_use]
    pub fn open(store: S, calculator: PortionCalculator) -> Self {
        let profile = store.load();
        let plan = calculator.compute(&profile);
        debug!(%plan, "Opened calculator session");
        Self {
            store,
            calculator,
            profile,
            plan,
        }
    }

    /// Current form values
    #[must_use]
    pub const fn profile(&self) -> &CatProfile {
        &self.profile
    }

    /// Plan for the current form values
    #[must_use]
    pub const fn plan(&self) -> FoodPlan {
        self.plan
    }

    /// Full-precision breakdown for the current form values
    #[must_use]
    pub fn breakdown(&self) -> Option<PortionBreakdown> {
        self.calculator.compute_breakdown(&self.profile)
    }

    /// Calculator in use
    #[must_use]
    pub const fn calculator(&self) -> &PortionCalculator {
        &self.calculator
    }

    /// Underlying store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Select a cat type; selecting `kitten` also sets the age to 6 months
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written
    pub fn set_cat_type(&mut self, key: &str) -> AppResult<FoodPlan> {
        let cat_type = CatType::from_key(key);
        if cat_type.is_kitten() {
            self.store.save_fields(&[
                (FormField::CatType, key),
                (FormField::Age, defaults::KITTEN_AGE),
            ])?;
            self.profile.age = defaults::KITTEN_AGE.to_owned();
        } else {
            self.store.save_field(FormField::CatType, key)?;
        }
        self.profile.cat_type = cat_type;
        self.recompute();
        Ok(self.plan)
    }

    /// Set the age text
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written
    pub fn set_age(&mut self, age: &str) -> AppResult<FoodPlan> {
        self.commit(FormField::Age, age, |profile| profile.age = age.to_owned())
    }

    /// Set the weight text (kg)
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written
    pub fn set_weight(&mut self, weight: &str) -> AppResult<FoodPlan> {
        self.commit(FormField::Weight, weight, |profile| {
            profile.weight = weight.to_owned();
        })
    }

    /// Set the wet food density text (kcal per 100 g)
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written
    pub fn set_wet_food_calories(&mut self, calories: &str) -> AppResult<FoodPlan> {
        self.commit(FormField::WetFoodCalories, calories, |profile| {
            profile.wet_food_calories = calories.to_owned();
        })
    }

    /// Set the dry food density text (kcal per 100 g)
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written
    pub fn set_dry_food_calories(&mut self, calories: &str) -> AppResult<FoodPlan> {
        self.commit(FormField::DryFoodCalories, calories, |profile| {
            profile.dry_food_calories = calories.to_owned();
        })
    }

    /// Set the wet/dry ratio from text, clamped to 0..=100
    ///
    /// # Errors
    ///
    /// Returns an invalid input error if the text is not a number, leaving the
    /// form unchanged, or a storage error if the store cannot be written
    pub fn set_wet_dry_ratio(&mut self, percent: &str) -> AppResult<FoodPlan> {
        let value = parse_ratio_percent(percent).ok_or_else(|| {
            AppError::invalid_input(format!(
                "Wet/dry ratio must be a whole number between {} and {}, got '{percent}'",
                ratio::MIN_PERCENT,
                ratio::MAX_PERCENT
            ))
        })?;
        self.commit(FormField::WetDryRatio, &value.to_string(), |profile| {
            profile.wet_dry_ratio = value;
        })
    }

    /// Set any field by its identifier
    ///
    /// # Errors
    ///
    /// Returns the error of the field's setter
    pub fn set_field(&mut self, field: FormField, value: &str) -> AppResult<FoodPlan> {
        match field {
            FormField::CatType => self.set_cat_type(value),
            FormField::Age => self.set_age(value),
            FormField::Weight => self.set_weight(value),
            FormField::WetFoodCalories => self.set_wet_food_calories(value),
            FormField::DryFoodCalories => self.set_dry_food_calories(value),
            FormField::WetDryRatio => self.set_wet_dry_ratio(value),
        }
    }

    /// Restore every field to its default and persist the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written
    pub fn reset(&mut self) -> AppResult<FoodPlan> {
        let fresh = CatProfile::default();
        self.store.save(&fresh)?;
        self.profile = fresh;
        self.recompute();
        debug!("Reset calculator form to defaults");
        Ok(self.plan)
    }

    fn commit(
        &mut self,
        field: FormField,
        stored: &str,
        apply: impl FnOnce(&mut CatProfile),
    ) -> AppResult<FoodPlan> {
        self.store.save_field(field, stored)?;
        apply(&mut self.profile);
        self.recompute();
        Ok(self.plan)
    }

    fn recompute(&mut self) {
        self.plan = self.calculator.compute(&self.profile);
        debug!(cat_type = %self.profile.cat_type, plan = %self.plan, "Recomputed plan");
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore};
    use catfood_core::constants::store_keys;

    fn session() -> CalculatorSession<MemoryStore> {
        CalculatorSession::open(MemoryStore::new(), PortionCalculator::default())
    }

    #[test]
    fn test_open_on_empty_store_uses_defaults() {
        let session = session();
        assert_eq!(session.profile(), &CatProfile::default());
        assert_eq!(session.plan().wet_food_grams, Some(109));
    }

    #[test]
    fn test_kitten_selection_sets_and_stores_age() {
        let mut session = session();
        session.set_cat_type("kitten").unwrap();
        assert_eq!(session.profile().age, "6");
        assert_eq!(
            session.store().get(store_keys::AGE).unwrap().as_deref(),
            Some("6")
        );
    }

    #[test]
    fn test_bad_ratio_leaves_form_unchanged() {
        let mut session = session();
        let err = session.set_wet_dry_ratio("lots").unwrap_err();
        assert_eq!(err.code, catfood_core::errors::ErrorCode::InvalidInput);
        assert_eq!(session.profile().wet_dry_ratio, 33);
        assert_eq!(session.store().get(store_keys::WET_DRY_RATIO).unwrap(), None);
    }
}
