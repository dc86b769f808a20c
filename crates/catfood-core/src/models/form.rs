// ABOUTME: Identifiers for the editable calculator form fields
// ABOUTME: Maps each field to its persisted store key, CLI name, and label text id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::store_keys;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Editable field of the calculator form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormField {
    /// Cat type option
    CatType,
    /// Age (months for kittens, years otherwise)
    Age,
    /// Body weight in kilograms
    Weight,
    /// Wet food kcal per 100 g
    WetFoodCalories,
    /// Dry food kcal per 100 g
    DryFoodCalories,
    /// Percent of calories from wet food
    WetDryRatio,
}

impl FormField {
    /// All fields, in form order
    pub const ALL: [Self; 6] = [
        Self::CatType,
        Self::Age,
        Self::Weight,
        Self::WetFoodCalories,
        Self::DryFoodCalories,
        Self::WetDryRatio,
    ];

    /// Key the field is persisted under
    #[must_use]
    pub const fn store_key(self) -> &'static str {
        match self {
            Self::CatType => store_keys::CAT_TYPE,
            Self::Age => store_keys::AGE,
            Self::Weight => store_keys::WEIGHT,
            Self::WetFoodCalories => store_keys::WET_FOOD_CALORIES,
            Self::DryFoodCalories => store_keys::DRY_FOOD_CALORIES,
            Self::WetDryRatio => store_keys::WET_DRY_RATIO,
        }
    }

    /// Kebab-case name used on the command line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CatType => "cat-type",
            Self::Age => "age",
            Self::Weight => "weight",
            Self::WetFoodCalories => "wet-food-calories",
            Self::DryFoodCalories => "dry-food-calories",
            Self::WetDryRatio => "wet-dry-ratio",
        }
    }

    /// Parse a field from its CLI name or its store key
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == name || field.store_key() == name)
    }

    /// Text id of the field label; the age label depends on whether the cat is a kitten.
    /// The cat type radio group has no label of its own.
    #[must_use]
    pub const fn label_id(self, kitten: bool) -> Option<&'static str> {
        match self {
            Self::CatType => None,
            Self::Age if kitten => Some("Age (months)"),
            Self::Age => Some("Age (years)"),
            Self::Weight => Some("Cat Weight (kg)"),
            Self::WetFoodCalories => Some("Wet Food Calories (per 100g)"),
            Self::DryFoodCalories => Some("Dry Food Calories (per 100g)"),
            Self::WetDryRatio => Some("Wet/Dry Ratio"),
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
