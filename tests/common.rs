// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet test logging, recipe builders and a mixed sample catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `mealplan`
//!
//! Common fixtures reduce duplication across integration tests.

use std::env;
use std::sync::Once;

use chrono::{Duration, NaiveDate};
use mealplan::mealplan_core::models::{MealType, NutritionSummary, Recipe};
use mealplan::mealplan_intelligence::{MealRecommendationEngine, RecommendationConfig};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// A Wednesday in June
pub fn target_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 11).unwrap()
}

/// Date `days` before the target date
pub fn days_before(days: i64) -> NaiveDate {
    target_date() - Duration::days(days)
}

/// Engine over default configuration, independent of the environment
pub fn engine() -> MealRecommendationEngine {
    init_test_logging();
    MealRecommendationEngine::with_config(RecommendationConfig::default()).unwrap()
}

/// Recipe with a name, ingredients and total time split evenly
pub fn recipe(
    id: &str,
    name: &str,
    category: MealType,
    ingredients: &[&str],
    minutes: u32,
) -> Recipe {
    Recipe::new(id, name, category, 2)
        .with_times(minutes / 2, minutes - minutes / 2)
        .with_ingredient_names(ingredients)
        .with_instructions(vec!["Prepare".to_owned(), "Serve".to_owned()])
}

/// Dinner catalog spanning several cuisines and dietary profiles
pub fn dinner_catalog() -> Vec<Recipe> {
    vec![
        recipe("d1", "Spaghetti Pomodoro", MealType::Dinner, &["spaghetti", "tomato", "basil", "olive oil"], 30),
        recipe("d2", "Penne Arrabbiata", MealType::Dinner, &["penne pasta", "tomato", "chili", "garlic"], 25),
        recipe("d3", "Mushroom Risotto", MealType::Dinner, &["arborio rice", "mushroom", "parmesan", "butter"], 45),
        recipe("d4", "Veggie Stir Fry", MealType::Dinner, &["tofu", "soy sauce", "ginger", "broccoli", "rice"], 20),
        recipe("d5", "Bean Tacos", MealType::Dinner, &["tortilla", "black beans", "salsa", "avocado"], 20),
        recipe("d6", "Chicken Curry", MealType::Dinner, &["chicken", "curry paste", "coconut milk", "rice"], 40),
        recipe("d7", "Chickpea Shawarma Bowl", MealType::Dinner, &["chickpeas", "tahini", "cucumber", "lemon"], 30),
        recipe("d8", "Peanut Noodles", MealType::Dinner, &["noodles", "peanut butter", "soy sauce", "scallion"], 15),
        recipe("d9", "Baked Salmon", MealType::Dinner, &["salmon", "lemon", "dill", "potatoes"], 35)
            .with_nutrition(NutritionSummary::new(420.0, 34.0, 20.0, 18.0)),
        recipe("d10", "Lasagna", MealType::Dinner, &["lasagna pasta", "ricotta", "tomato", "beef"], 90),
    ]
}

/// Catalog with every meal type represented
pub fn mixed_catalog() -> Vec<Recipe> {
    let mut catalog = dinner_catalog();
    catalog.extend([
        recipe("b1", "Avocado Toast", MealType::Breakfast, &["avocado", "bread", "lemon"], 7),
        recipe("b2", "Scrambled Eggs", MealType::Breakfast, &["eggs", "butter", "cream"], 10),
        recipe("b3", "Overnight Oats", MealType::Breakfast, &["oats", "almond milk", "berries"], 5),
        recipe("l1", "Greek Salad", MealType::Lunch, &["cucumber", "tomato", "feta", "olives"], 15),
        recipe("l2", "Lentil Soup", MealType::Lunch, &["lentils", "carrot", "onion", "cumin"], 40),
        recipe("s1", "Apple Slices", MealType::Snack, &["apple", "cinnamon"], 5),
    ]);
    catalog
}
