// ABOUTME: Cat type options and the raw cat profile entered in the calculator form
// ABOUTME: CatType keeps unrecognized keys verbatim so the calculator can stay total
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::form::FormField;
use crate::constants::defaults;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cat type selected in the form
///
/// Serialized as its option value (`"weight-loss"`, `"kitten"`, ...). Any other
/// key is kept verbatim in [`CatType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CatType {
    /// Active cat (outdoor, playful)
    Active,
    /// Normal adult cat
    Normal,
    /// Kitten, age measured in months
    Kitten,
    /// Pregnant queen
    Pregnant,
    /// Lactating queen
    Lactating,
    /// Indoor, less active cat
    Indoor,
    /// Cat on a weight loss plan
    WeightLoss,
    /// Cat on a weight gain plan
    WeightGain,
    /// Key outside the option list, kept as entered
    Other(String),
}

impl CatType {
    /// Selectable options, in the order the form lists them
    pub const OPTIONS: [Self; 8] = [
        Self::Active,
        Self::Normal,
        Self::Kitten,
        Self::Pregnant,
        Self::Lactating,
        Self::Indoor,
        Self::WeightLoss,
        Self::WeightGain,
    ];

    /// Parse an option value; matching is exact, as option values are compared verbatim
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "active" => Self::Active,
            "normal" => Self::Normal,
            "kitten" => Self::Kitten,
            "pregnant" => Self::Pregnant,
            "lactating" => Self::Lactating,
            "indoor" => Self::Indoor,
            "weight-loss" => Self::WeightLoss,
            "weight-gain" => Self::WeightGain,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Option value persisted in the store
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Normal => "normal",
            Self::Kitten => "kitten",
            Self::Pregnant => "pregnant",
            Self::Lactating => "lactating",
            Self::Indoor => "indoor",
            Self::WeightLoss => "weight-loss",
            Self::WeightGain => "weight-gain",
            Self::Other(key) => key,
        }
    }

    /// Text id of the option label, `None` for keys outside the option list
    #[must_use]
    pub const fn label_id(&self) -> Option<&'static str> {
        match self {
            Self::Active => Some("Active"),
            Self::Normal => Some("Normal"),
            Self::Kitten => Some("Kitten"),
            Self::Pregnant => Some("Pregnant"),
            Self::Lactating => Some("Lactating"),
            Self::Indoor => Some("Indoor"),
            Self::WeightLoss => Some("Weight loss"),
            Self::WeightGain => Some("Weight gain"),
            Self::Other(_) => None,
        }
    }

    /// Whether age is entered in months rather than years
    #[must_use]
    pub const fn is_kitten(&self) -> bool {
        matches!(self, Self::Kitten)
    }
}

impl Default for CatType {
    fn default() -> Self {
        Self::from_key(defaults::CAT_TYPE)
    }
}

impl From<String> for CatType {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

impl From<CatType> for String {
    fn from(cat_type: CatType) -> Self {
        match cat_type {
            CatType::Other(key) => key,
            option => option.as_str().to_owned(),
        }
    }
}

impl fmt::Display for CatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cat attributes and food data as entered in the form
///
/// Numeric fields keep the text the user typed; the calculator parses them
/// leniently so that any input produces a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatProfile {
    /// Selected cat type
    pub cat_type: CatType,
    /// Age text, months for kittens and years otherwise
    pub age: String,
    /// Body weight text in kilograms
    pub weight: String,
    /// Wet food energy density text (kcal per 100 g)
    pub wet_food_calories: String,
    /// Dry food energy density text (kcal per 100 g)
    pub dry_food_calories: String,
    /// Percent of daily calories supplied by wet food (0-100)
    pub wet_dry_ratio: u8,
}

impl Default for CatProfile {
    fn default() -> Self {
        Self {
            cat_type: CatType::default(),
            age: defaults::AGE.to_owned(),
            weight: defaults::WEIGHT.to_owned(),
            wet_food_calories: defaults::WET_FOOD_CALORIES.to_owned(),
            dry_food_calories: defaults::DRY_FOOD_CALORIES.to_owned(),
            wet_dry_ratio: defaults::WET_DRY_RATIO,
        }
    }
}

impl CatProfile {
    /// Replace the cat type
    #[must_use]
    pub fn with_cat_type(mut self, cat_type: CatType) -> Self {
        self.cat_type = cat_type;
        self
    }

    /// Replace the age text
    #[must_use]
    pub fn with_age(mut self, age: impl Into<String>) -> Self {
        self.age = age.into();
        self
    }

    /// Replace the weight text
    #[must_use]
    pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = weight.into();
        self
    }

    /// Replace the wet food density text
    #[must_use]
    pub fn with_wet_food_calories(mut self, calories: impl Into<String>) -> Self {
        self.wet_food_calories = calories.into();
        self
    }

    /// Replace the dry food density text
    #[must_use]
    pub fn with_dry_food_calories(mut self, calories: impl Into<String>) -> Self {
        self.dry_food_calories = calories.into();
        self
    }

    /// Replace the wet/dry ratio; values above 100 are clamped
    #[must_use]
    pub fn with_wet_dry_ratio(mut self, percent: u8) -> Self {
        self.wet_dry_ratio = percent.min(crate::constants::ratio::MAX_PERCENT);
        self
    }

    /// Percent of daily calories supplied by dry food
    #[must_use]
    pub const fn dry_ratio(&self) -> u8 {
        crate::constants::ratio::MAX_PERCENT.saturating_sub(self.wet_dry_ratio)
    }

    /// Text of a single field as it is persisted
    #[must_use]
    pub fn field_text(&self, field: FormField) -> String {
        match field {
            FormField::CatType => self.cat_type.as_str().to_owned(),
            FormField::Age => self.age.clone(),
            FormField::Weight => self.weight.clone(),
            FormField::WetFoodCalories => self.wet_food_calories.clone(),
            FormField::DryFoodCalories => self.dry_food_calories.clone(),
            FormField::WetDryRatio => self.wet_dry_ratio.to_string(),
        }
    }

    /// Text id of the age label, which depends on the cat type
    #[must_use]
    pub const fn age_label_id(&self) -> &'static str {
        if self.cat_type.is_kitten() {
            "Age (months)"
        } else {
            "Age (years)"
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_option_keys_round_trip() {
        for option in CatType::OPTIONS {
            assert_eq!(CatType::from_key(option.as_str()), option);
            assert!(option.label_id().is_some());
        }
    }

    #[test]
    fn test_label_strings_are_not_option_values() {
        let label = CatType::from_key("Weight loss");
        assert_eq!(label, CatType::Other("Weight loss".to_owned()));
        assert!(label.label_id().is_none());
    }

    #[test]
    fn test_profile_serializes_with_store_field_names() {
        let profile = CatProfile::default().with_cat_type(CatType::WeightGain);
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(json["catType"], "weight-gain");
        assert_eq!(json["wetFoodCalories"], "60");
        assert_eq!(json["wetDryRatio"], 33);

        let back: CatProfile = serde_json::from_value(json).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn test_ratio_is_clamped_and_complemented() {
        let profile = CatProfile::default().with_wet_dry_ratio(140);
        assert_eq!(profile.wet_dry_ratio, 100);
        assert_eq!(profile.dry_ratio(), 0);
    }

    #[test]
    fn test_age_label_follows_cat_type() {
        let kitten = CatProfile::default().with_cat_type(CatType::Kitten);
        assert_eq!(kitten.age_label_id(), "Age (months)");
        assert_eq!(CatProfile::default().age_label_id(), "Age (years)");
    }

    #[test]
    fn test_field_text_matches_stored_form() {
        let profile = CatProfile::default().with_cat_type(CatType::from_key("Weight loss"));
        assert_eq!(profile.field_text(FormField::CatType), "Weight loss");
        assert_eq!(profile.field_text(FormField::Weight), "4");
        assert_eq!(profile.field_text(FormField::WetDryRatio), "33");
    }
}
