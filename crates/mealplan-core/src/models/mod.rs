// ABOUTME: Domain models for recipes, preferences, history and ranking output
// ABOUTME: Re-exports the model types used across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

/// Optional like/view signals per recipe
pub mod behavior;
/// Meal-plan history entries
pub mod meal_plan;
/// User dietary rules and cooking settings
pub mod preferences;
/// Recipe catalog records
pub mod recipe;
/// Ranked output of the engine
pub mod recommendation;

pub use behavior::BehaviorProfile;
pub use meal_plan::{MealPlanEntry, PlannedMeals};
pub use preferences::{CookingTime, SkillLevel, UserPreferences};
pub use recipe::{Ingredient, MealType, NutritionSummary, Recipe, RecipeValidationError};
pub use recommendation::{ScoredCandidate, SignalKind};
