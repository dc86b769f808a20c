// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: One-off portion calculation for catfood-cli
// ABOUTME: Applies command-line overrides to the stored form without saving them

use super::CommandContext;
use crate::helpers::display;
use anyhow::Result;
use catfood_calculator::storage::ProfileStore;
use catfood_core::errors::AppError;
use catfood_core::models::{CatProfile, CatType};
use catfood_intelligence::parsing::parse_ratio_percent;

/// Field overrides given on the command line
#[derive(Debug, Default)]
pub struct CalcOverrides {
    pub cat_type: Option<String>,
    pub age: Option<String>,
    pub weight: Option<String>,
    pub wet_food_calories: Option<String>,
    pub dry_food_calories: Option<String>,
    pub wet_dry_ratio: Option<String>,
}

impl CalcOverrides {
    fn apply(&self, mut profile: CatProfile) -> Result<CatProfile> {
        if let Some(key) = &self.cat_type {
            profile = profile.with_cat_type(CatType::from_key(key));
        }
        if let Some(age) = &self.age {
            profile = profile.with_age(age.as_str());
        }
        if let Some(weight) = &self.weight {
            profile = profile.with_weight(weight.as_str());
        }
        if let Some(calories) = &self.wet_food_calories {
            profile = profile.with_wet_food_calories(calories.as_str());
        }
        if let Some(calories) = &self.dry_food_calories {
            profile = profile.with_dry_food_calories(calories.as_str());
        }
        if let Some(ratio) = &self.wet_dry_ratio {
            let percent = parse_ratio_percent(ratio).ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Wet/dry ratio must be a whole number, got '{ratio}'"
                ))
            })?;
            profile = profile.with_wet_dry_ratio(percent);
        }
        Ok(profile)
    }
}

/// Compute the plan for the stored form with overrides applied
pub fn run(ctx: &CommandContext, overrides: &CalcOverrides, breakdown: bool) -> Result<()> {
    let profile = overrides.apply(ctx.store.load())?;
    let plan = ctx.calculator.compute(&profile);

    if breakdown {
        let detail = ctx.calculator.compute_breakdown(&profile);
        display::print_breakdown(&ctx.translator, &profile, plan, detail.as_ref(), ctx.json)
    } else {
        display::print_form(&ctx.translator, &profile, plan, ctx.json)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let overrides = CalcOverrides {
            weight: Some("5".into()),
            wet_dry_ratio: Some("150".into()),
            ..CalcOverrides::default()
        };
        let profile = overrides.apply(CatProfile::default()).unwrap();
        assert_eq!(profile.weight, "5");
        assert_eq!(profile.wet_dry_ratio, 100);
        assert_eq!(profile.age, "5");
    }

    #[test]
    fn test_unparsable_ratio_is_rejected() {
        let overrides = CalcOverrides {
            wet_dry_ratio: Some("most".into()),
            ..CalcOverrides::default()
        };
        assert!(overrides.apply(CatProfile::default()).is_err());
    }
}
