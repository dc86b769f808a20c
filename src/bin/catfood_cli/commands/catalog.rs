// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Listing commands for catfood-cli
// ABOUTME: Prints cat type options and supported languages

use super::CommandContext;
use crate::helpers::display;
use anyhow::Result;
use catfood_calculator::storage::ProfileStore;

/// List cat type options with localized labels
pub fn options(ctx: &CommandContext) -> Result<()> {
    let current = ctx.store.load().cat_type;
    display::print_options(&ctx.translator, &current, ctx.json)
}

/// List supported languages
pub fn languages(ctx: &CommandContext) -> Result<()> {
    display::print_languages(ctx.translator.language(), ctx.json)
}
