// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Persisted store keys, form defaults, and localization constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Keys under which the form fields are persisted in the key-value store
pub mod store_keys {
    /// Selected cat type option value
    pub const CAT_TYPE: &str = "catType";
    /// Age text (months for kittens, years otherwise)
    pub const AGE: &str = "age";
    /// Body weight text in kilograms
    pub const WEIGHT: &str = "weight";
    /// Wet food energy density text (kcal per 100 g)
    pub const WET_FOOD_CALORIES: &str = "wetFoodCalories";
    /// Dry food energy density text (kcal per 100 g)
    pub const DRY_FOOD_CALORIES: &str = "dryFoodCalories";
    /// Wet/dry ratio text (percent of calories from wet food)
    pub const WET_DRY_RATIO: &str = "wetDryRatio";
    /// Detected or chosen UI language
    pub const LANGUAGE: &str = "i18nextLng";

    /// All profile keys, in form order
    pub const PROFILE_KEYS: [&str; 6] = [
        CAT_TYPE,
        AGE,
        WEIGHT,
        WET_FOOD_CALORIES,
        DRY_FOOD_CALORIES,
        WET_DRY_RATIO,
    ];
}

/// Values used when a field has never been stored
pub mod defaults {
    /// Default cat type option value
    pub const CAT_TYPE: &str = "normal";
    /// Default age text
    pub const AGE: &str = "5";
    /// Default weight text (kg)
    pub const WEIGHT: &str = "4";
    /// Default wet food energy density text (kcal/100 g)
    pub const WET_FOOD_CALORIES: &str = "60";
    /// Default dry food energy density text (kcal/100 g)
    pub const DRY_FOOD_CALORIES: &str = "370";
    /// Default wet/dry ratio (percent)
    pub const WET_DRY_RATIO: u8 = 33;
    /// Age used by the calculator when the age text is empty, zero, or not a number
    pub const FALLBACK_AGE: i64 = 5;
    /// Age text filled in when the kitten option is selected (months)
    pub const KITTEN_AGE: &str = "6";
}

/// Bounds for the wet/dry ratio slider
pub mod ratio {
    /// Lowest ratio (all dry food)
    pub const MIN_PERCENT: u8 = 0;
    /// Highest ratio (all wet food)
    pub const MAX_PERCENT: u8 = 100;
}

/// Localization constants
pub mod locales {
    /// Language used when no other language resolves
    pub const FALLBACK_LANGUAGE: &str = "en";
    /// Supported language codes, in catalog order
    pub const SUPPORTED_LANGUAGES: [&str; 8] = ["en", "de", "es", "fr", "it", "jp", "pt", "zh"];
}

/// Service identification for logs
pub mod service_names {
    /// Name used in structured logs and the CLI banner
    pub const CATFOOD_CALCULATOR: &str = "catfood-calculator";
}
