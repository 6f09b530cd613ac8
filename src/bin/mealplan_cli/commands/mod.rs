// ABOUTME: Re-exports command modules for mealplan-cli
// ABOUTME: Provides access to the rank and inspect commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

pub mod inspect;
pub mod rank;
