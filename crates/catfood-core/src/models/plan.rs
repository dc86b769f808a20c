// ABOUTME: Daily food plan produced by the portion calculator
// ABOUTME: Whole-gram wet and dry amounts, with None as the empty placeholder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Recommended daily wet and dry food, in whole grams
///
/// A field is `None` when the inputs do not allow a value (missing weight or
/// calorie data, zero density).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodPlan {
    /// Wet food per day (g)
    pub wet_food_grams: Option<i64>,
    /// Dry food per day (g)
    pub dry_food_grams: Option<i64>,
}

impl FoodPlan {
    /// Placeholder plan with both fields empty
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            wet_food_grams: None,
            dry_food_grams: None,
        }
    }

    /// Whether neither field carries a value
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.wet_food_grams.is_none() && self.dry_food_grams.is_none()
    }
}

fn fmt_grams(f: &mut fmt::Formatter<'_>, grams: Option<i64>) -> fmt::Result {
    match grams {
        Some(value) => write!(f, "{value} g"),
        None => f.write_str("- g"),
    }
}

impl fmt::Display for FoodPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("wet ")?;
        fmt_grams(f, self.wet_food_grams)?;
        f.write_str(", dry ")?;
        fmt_grams(f, self.dry_food_grams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_plan_display() {
        let plan = FoodPlan::empty();
        assert!(plan.is_empty());
        assert_eq!(plan.to_string(), "wet - g, dry - g");
    }

    #[test]
    fn test_plan_display() {
        let plan = FoodPlan {
            wet_food_grams: Some(109),
            dry_food_grams: Some(36),
        };
        assert!(!plan.is_empty());
        assert_eq!(plan.to_string(), "wet 109 g, dry 36 g");
    }
}
