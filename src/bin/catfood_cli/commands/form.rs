// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Stored form commands for catfood-cli
// ABOUTME: Show, edit, and reset the persisted cat profile

use super::CommandContext;
use crate::helpers::display;
use anyhow::Result;
use catfood_calculator::session::CalculatorSession;
use catfood_core::errors::AppError;
use catfood_core::models::FormField;
use tracing::info;

/// Print the stored form and its plan
pub fn show(ctx: CommandContext) -> Result<()> {
    let session = CalculatorSession::open(ctx.store, ctx.calculator);
    display::print_form(&ctx.translator, session.profile(), session.plan(), ctx.json)
}

/// Persist one field, then print the plan
pub fn set(ctx: CommandContext, field_name: &str, value: &str) -> Result<()> {
    let field = FormField::from_name(field_name).ok_or_else(|| {
        let names: Vec<&str> = FormField::ALL.iter().map(|f| f.name()).collect();
        AppError::invalid_input(format!(
            "Unknown field '{field_name}', expected one of: {}",
            names.join(", ")
        ))
    })?;

    let mut session = CalculatorSession::open(ctx.store, ctx.calculator);
    let plan = session.set_field(field, value)?;
    info!(field = %field, value, "Updated form field");

    display::print_form(&ctx.translator, session.profile(), plan, ctx.json)
}

/// Restore and persist the default form
pub fn reset(ctx: CommandContext) -> Result<()> {
    let mut session = CalculatorSession::open(ctx.store, ctx.calculator);
    let plan = session.reset()?;
    info!("Form reset to defaults");

    display::print_form(&ctx.translator, session.profile(), plan, ctx.json)
}
