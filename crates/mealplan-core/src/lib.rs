// ABOUTME: Core types for the mealplan recommendation workspace
// ABOUTME: Foundation crate with domain models, record validation and unified error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

#![deny(unsafe_code)]

//! # Mealplan Core
//!
//! Foundation crate providing the shared types of the mealplan workspace. The
//! ranking engine, the collaborator stores and the CLI all speak these types,
//! so this crate is kept small and changes rarely.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Recipes, ingredients, user preferences, meal-plan history,
//!   behavior signals and the scored output of a ranking request

/// Unified error handling system with standard error codes
pub mod errors;

/// Core data models (Recipe, UserPreferences, `MealPlanEntry`, `ScoredCandidate`)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
