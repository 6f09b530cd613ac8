// ABOUTME: Benchmark fixtures for generating recipe catalogs and meal-plan history
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

//! Benchmark fixtures for generating recipe catalogs and history.
//!
//! Provides deterministic data generation for reproducible performance measurements.

use chrono::{Duration, NaiveDate};
use mealplan::mealplan_core::models::{MealPlanEntry, MealType, NutritionSummary, Recipe};

/// Predefined catalog sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum CatalogSize {
    /// Below the parallel scoring threshold
    Small,
    /// Typical household catalog
    Medium,
    /// Large shared catalog
    Large,
}

impl CatalogSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 32,
            Self::Medium => 256,
            Self::Large => 2048,
        }
    }
}

const INGREDIENT_POOL: &[&str] = &[
    "pasta", "tomato", "basil", "rice", "soy sauce", "ginger", "tortilla", "beans", "cumin",
    "chickpeas", "olive oil", "lemon", "chicken", "tofu", "spinach", "oats", "yogurt", "berries",
    "eggs", "cheese", "bread", "avocado", "peanut butter", "quinoa", "salmon", "broccoli",
];

const NAME_POOL: &[&str] = &[
    "Skillet", "Bowl", "Salad", "Stir Fry", "Tacos", "Curry", "Bake", "Soup", "Wrap", "Pasta",
];

const fn meal_type(index: usize) -> MealType {
    match index % 4 {
        0 => MealType::Breakfast,
        1 => MealType::Lunch,
        2 => MealType::Dinner,
        _ => MealType::Snack,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn generate_recipe(index: usize, category: MealType) -> Recipe {
    let ingredients: Vec<&str> = (0..3 + index % 6)
        .map(|offset| INGREDIENT_POOL[(index * 7 + offset * 5) % INGREDIENT_POOL.len()])
        .collect();
    let steps = (0..2 + index % 9)
        .map(|step| format!("Step {step}"))
        .collect();

    Recipe::new(
        format!("bench_recipe_{index}"),
        format!("{} {index}", NAME_POOL[index % NAME_POOL.len()]),
        category,
        1 + (index % 6) as u32,
    )
    .with_times(((index * 13) % 40) as u32, ((index * 17) % 70) as u32)
    .with_ingredient_names(&ingredients)
    .with_instructions(steps)
    .with_nutrition(NutritionSummary::new(
        250.0 + ((index * 37) % 500) as f64,
        5.0 + ((index * 3) % 40) as f64,
        20.0 + ((index * 11) % 60) as f64,
        5.0 + ((index * 5) % 30) as f64,
    ))
}

/// Generate a catalog spread across all meal types
#[must_use]
pub fn generate_catalog(size: CatalogSize) -> Vec<Recipe> {
    (0..size.count())
        .map(|i| generate_recipe(i, meal_type(i)))
        .collect()
}

/// Generate a catalog of a single meal type
#[must_use]
pub fn generate_slot_catalog(count: usize, category: MealType) -> Vec<Recipe> {
    (0..count).map(|i| generate_recipe(i, category)).collect()
}

/// Generate `days` of planned dinners ending the day before `target`
#[must_use]
pub fn generate_history(catalog: &[Recipe], target: NaiveDate, days: i64) -> Vec<MealPlanEntry> {
    (1..=days)
        .filter_map(|offset| {
            let index = usize::try_from(offset).ok()? % catalog.len().max(1);
            let recipe = catalog.get(index)?.clone();
            Some(MealPlanEntry::new(target - Duration::days(offset)).with_meal(MealType::Dinner, recipe))
        })
        .collect()
}
