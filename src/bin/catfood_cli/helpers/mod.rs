// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Helper modules for catfood-cli
// ABOUTME: Output formatting shared by all commands

pub mod display;
