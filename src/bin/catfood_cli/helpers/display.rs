// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for catfood-cli
// ABOUTME: Renders the localized form, plans, and listings as text or JSON

use anyhow::Result;
use catfood_calculator::i18n::{text_ids, Language, Translator};
use catfood_core::models::{CatProfile, CatType, FoodPlan, FormField};
use catfood_intelligence::PortionBreakdown;
use serde::Serialize;

const RULE_WIDTH: usize = 50;

#[derive(Serialize)]
struct FormView<'a> {
    language: Language,
    profile: &'a CatProfile,
    plan: FoodPlan,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<&'a PortionBreakdown>,
}

#[derive(Serialize)]
struct OptionView<'a> {
    value: &'a str,
    label: &'a str,
    selected: bool,
}

#[derive(Serialize)]
struct LanguageView {
    code: &'static str,
    name: &'static str,
    active: bool,
}

/// `"109 g"`, or `"- g"` when the plan has no value
pub fn format_grams(grams: Option<i64>) -> String {
    grams.map_or_else(|| "- g".to_owned(), |g| format!("{g} g"))
}

/// `"33% / 67%"` (wet / dry)
pub fn format_ratio(profile: &CatProfile) -> String {
    format!("{}% / {}%", profile.wet_dry_ratio, profile.dry_ratio())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_plan(t: &Translator, plan: FoodPlan) {
    println!(
        "   {}: {}",
        t.t(text_ids::DRY_FOOD),
        format_grams(plan.dry_food_grams)
    );
    println!(
        "   {}: {}",
        t.t(text_ids::WET_FOOD),
        format_grams(plan.wet_food_grams)
    );
}

fn print_fields(t: &Translator, profile: &CatProfile) {
    let kitten = profile.cat_type.is_kitten();
    let selected = profile
        .cat_type
        .label_id()
        .map_or_else(|| profile.cat_type.as_str(), |id| t.t(id));
    println!("   [{selected}]");

    for field in FormField::ALL {
        let Some(label_id) = field.label_id(kitten) else {
            continue;
        };
        let value = match field {
            FormField::WetDryRatio => format_ratio(profile),
            other => profile.field_text(other),
        };
        println!("   {}: {value}", t.t(label_id));
    }
}

/// Print the localized form followed by its plan
pub fn print_form(t: &Translator, profile: &CatProfile, plan: FoodPlan, json: bool) -> Result<()> {
    if json {
        return print_json(&FormView {
            language: t.language(),
            profile,
            plan,
            breakdown: None,
        });
    }

    println!("\n{}", t.t(text_ids::TITLE));
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{}", t.t(text_ids::RECOMMENDATION_1));
    println!("{}", t.t(text_ids::RECOMMENDATION_2));
    println!("{}", "-".repeat(RULE_WIDTH));
    print_fields(t, profile);
    println!("{}", "-".repeat(RULE_WIDTH));
    print_plan(t, plan);
    Ok(())
}

/// Print the plan together with the unrounded intermediates
pub fn print_breakdown(
    t: &Translator,
    profile: &CatProfile,
    plan: FoodPlan,
    breakdown: Option<&PortionBreakdown>,
    json: bool,
) -> Result<()> {
    if json {
        return print_json(&FormView {
            language: t.language(),
            profile,
            plan,
            breakdown,
        });
    }

    print_form(t, profile, plan, false)?;
    println!("{}", "-".repeat(RULE_WIDTH));
    match breakdown {
        Some(b) => {
            println!("   Energy: {:.1} kcal/day (x{:.2})", b.maintenance_kcal, b.condition_factor);
            println!(
                "   {}: {:.1} kcal, {:.2} g",
                t.t(text_ids::WET_FOOD),
                b.wet_kcal,
                b.wet_food_grams_exact
            );
            println!(
                "   {}: {:.1} kcal, {:.2} g",
                t.t(text_ids::DRY_FOOD),
                b.dry_kcal,
                b.dry_food_grams_exact
            );
        }
        None => println!("   Weight and both calorie densities are needed for a breakdown"),
    }
    Ok(())
}

/// Print the cat type options, marking the stored selection
pub fn print_options(t: &Translator, current: &CatType, json: bool) -> Result<()> {
    let all = CatType::OPTIONS;
    let options: Vec<OptionView<'_>> = all
        .iter()
        .map(|option| OptionView {
            value: option.as_str(),
            label: option.label_id().map_or_else(|| option.as_str(), |id| t.t(id)),
            selected: option == current,
        })
        .collect();

    if json {
        return print_json(&options);
    }

    for option in &options {
        let marker = if option.selected { "*" } else { " " };
        println!(" {marker} {:<12} {}", option.value, option.label);
    }
    Ok(())
}

/// Print the supported languages, marking the active one
pub fn print_languages(active: Language, json: bool) -> Result<()> {
    let languages: Vec<LanguageView> = Language::ALL
        .iter()
        .map(|&language| LanguageView {
            code: language.code(),
            name: language.native_name(),
            active: language == active,
        })
        .collect();

    if json {
        return print_json(&languages);
    }

    for language in &languages {
        let marker = if language.active { "*" } else { " " };
        println!(" {marker} {:<4} {}", language.code, language.name);
    }
    Ok(())
}
