// ABOUTME: Helper modules for mealplan-cli
// ABOUTME: Output formatting shared by the commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

pub mod display;
