// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Command modules for catfood-cli
// ABOUTME: Form editing, one-off calculation, and option/language listings

pub mod calc;
pub mod catalog;
pub mod form;

use catfood_calculator::i18n::Translator;
use catfood_calculator::storage::Store;
use catfood_intelligence::PortionCalculator;

/// Everything a command needs, built once in `main`
pub struct CommandContext {
    pub store: Store,
    pub translator: Translator,
    pub calculator: PortionCalculator,
    pub json: bool,
}
