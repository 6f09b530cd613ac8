// ABOUTME: Main library entry point for the mealplan recommendation toolkit
// ABOUTME: Re-exports the core models and ranking engine with logging and collaborator stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

#![deny(unsafe_code)]

//! # Mealplan
//!
//! Ranks candidate recipes for a meal slot of a meal plan. Rankings respect
//! dietary restrictions and allergies, adapt to recent history and carry a
//! confidence value plus the reasons behind each pick.
//!
//! ## Architecture
//!
//! - **`mealplan-core`**: recipes, preferences, history and output models,
//!   unified error handling
//! - **`mealplan-intelligence`**: the ranking pipeline and its configuration
//! - **this crate**: logging setup, JSON-backed collaborator stores and the
//!   `mealplan-cli` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use mealplan::catalog::{JsonRecipeCatalog, RecipeCatalog};
//! use mealplan::mealplan_core::errors::AppResult;
//! use mealplan::mealplan_core::models::{MealType, UserPreferences};
//! use mealplan::mealplan_intelligence::rank;
//!
//! fn main() -> AppResult<()> {
//!     let catalog = JsonRecipeCatalog::from_path("demos/recipes.json")?;
//!     let prefs = UserPreferences::default().with_restriction("vegetarian");
//!     let date = chrono::NaiveDate::from_ymd_opt(2025, 6, 11).unwrap_or_default();
//!     for pick in rank(catalog.recipes(), &[], &prefs, date, MealType::Dinner, 5)? {
//!         println!("{} {:.1}", pick.recipe.name, pick.score);
//!     }
//!     Ok(())
//! }
//! ```

/// JSON-backed recipe catalog, history and preference stores
pub mod catalog;

/// Logging configuration and structured ranking events
pub mod logging;

pub use mealplan_core;
pub use mealplan_intelligence;
