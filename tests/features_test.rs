// ABOUTME: Integration tests for recipe feature extraction
// ABOUTME: Cuisine inference priority, complexity classes, quick flags, health, seasons and similarity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use common::recipe;
use mealplan::mealplan_core::models::{MealType, NutritionSummary, Recipe};
use mealplan::mealplan_intelligence::features::{
    classify_complexity, cosine_similarity, extract, health_indicator, infer_cuisine, is_quick,
    seasonal_fraction, FEATURE_DIMENSIONS,
};
use mealplan::mealplan_intelligence::{Complexity, Cuisine, Season};

fn sized(ingredients: usize, steps: usize, minutes: u32) -> Recipe {
    let names: Vec<String> = (0..ingredients).map(|i| format!("item {i}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    Recipe::new("s", "Plain", MealType::Dinner, 2)
        .with_times(0, minutes)
        .with_ingredient_names(&refs)
        .with_instructions((0..steps).map(|i| format!("step {i}")).collect())
}

// ============================================================================
// Cuisine inference
// ============================================================================

#[test]
fn test_first_matching_cuisine_wins() {
    let r = recipe("a", "Ginger Pasta", MealType::Dinner, &["pasta", "ginger"], 20);
    assert_eq!(infer_cuisine(&r), Cuisine::Italian);

    // curry is checked before thai
    let r = recipe("b", "Thai Green Curry", MealType::Dinner, &["coconut milk"], 30);
    assert_eq!(infer_cuisine(&r), Cuisine::Indian);

    let r = recipe("c", "Green Soup", MealType::Lunch, &["lemongrass", "coconut milk"], 30);
    assert_eq!(infer_cuisine(&r), Cuisine::Thai);
}

#[test]
fn test_cuisine_from_description_and_fallback() {
    let r = Recipe::new("a", "Onion Soup", MealType::Lunch, 2)
        .with_description("A French bistro classic");
    assert_eq!(infer_cuisine(&r), Cuisine::French);

    let r = recipe("b", "Grilled Cheese", MealType::Lunch, &["bread", "cheddar"], 10);
    assert_eq!(infer_cuisine(&r), Cuisine::American);
}

// ============================================================================
// Complexity and quick flag
// ============================================================================

#[test]
fn test_complexity_boundaries() {
    assert_eq!(classify_complexity(&sized(5, 4, 30)), Complexity::Simple);
    assert_eq!(classify_complexity(&sized(6, 4, 30)), Complexity::Moderate);
    assert_eq!(classify_complexity(&sized(5, 4, 31)), Complexity::Moderate);
    assert_eq!(classify_complexity(&sized(10, 8, 60)), Complexity::Moderate);
    assert_eq!(classify_complexity(&sized(11, 2, 20)), Complexity::Complex);
    assert_eq!(classify_complexity(&sized(3, 9, 20)), Complexity::Complex);
    assert_eq!(classify_complexity(&sized(3, 2, 61)), Complexity::Complex);
}

#[test]
fn test_quick_threshold_depends_on_meal_type() {
    assert!(is_quick(&recipe("a", "Toast", MealType::Breakfast, &["bread"], 20)));
    assert!(!is_quick(&recipe("b", "Hash", MealType::Breakfast, &["potato"], 21)));
    assert!(is_quick(&recipe("c", "Wrap", MealType::Lunch, &["tortilla"], 30)));
    assert!(!is_quick(&recipe("d", "Dip", MealType::Snack, &["beans"], 16)));
}

// ============================================================================
// Health and seasonality
// ============================================================================

#[test]
fn test_health_indicator() {
    let plain = recipe("a", "Bowl", MealType::Lunch, &["rice"], 10);
    assert!((health_indicator(&plain) - 0.5).abs() < 1e-9);

    let lean = plain
        .clone()
        .with_nutrition(NutritionSummary::new(350.0, 25.0, 30.0, 10.0));
    assert!((health_indicator(&lean) - 1.0).abs() < 1e-9);

    let light = plain
        .clone()
        .with_nutrition(NutritionSummary::new(350.0, 10.0, 30.0, 20.0));
    assert!((health_indicator(&light) - 0.7).abs() < 1e-9);

    let heavy = plain.with_nutrition(NutritionSummary::new(900.0, 10.0, 90.0, 40.0));
    assert!((health_indicator(&heavy) - 0.5).abs() < 1e-9);
}

#[test]
fn test_season_from_date() {
    let season = |m, d| Season::from_date(NaiveDate::from_ymd_opt(2025, m, d).unwrap());
    assert_eq!(season(2, 28), Season::Winter);
    assert_eq!(season(3, 1), Season::Spring);
    assert_eq!(season(6, 11), Season::Summer);
    assert_eq!(season(9, 30), Season::Fall);
    assert_eq!(season(12, 25), Season::Winter);
}

#[test]
fn test_seasonal_fraction() {
    let r = recipe("a", "Salad", MealType::Lunch, &["tomato", "corn", "salt", "basil"], 10);
    assert!((seasonal_fraction(&r, Season::Summer) - 0.5).abs() < 1e-9);
    assert!(seasonal_fraction(&r, Season::Winter).abs() < f64::EPSILON);

    let empty = Recipe::new("b", "Water", MealType::Snack, 1);
    assert!(seasonal_fraction(&empty, Season::Summer).abs() < f64::EPSILON);
}

// ============================================================================
// Feature vectors
// ============================================================================

#[test]
fn test_vector_layout_and_similarity() {
    let a = extract(&recipe("a", "Pasta Bake", MealType::Dinner, &["pasta", "cheese"], 25));
    let b = extract(&recipe("b", "Pasta Salad", MealType::Dinner, &["pasta", "olives"], 25));
    let c = extract(&recipe("c", "Bean Tacos", MealType::Dinner, &["tortilla", "beans"], 25));

    assert_eq!(a.vector.as_slice().len(), FEATURE_DIMENSIONS);
    assert!((a.vector.similarity(&b.vector) - 1.0).abs() < 1e-9);

    let cross = a.vector.similarity(&c.vector);
    assert!(cross > 0.0 && cross < 1.0);
}

#[test]
fn test_cosine_of_zero_vector_is_zero() {
    let zero = [0.0; 4];
    let other = [1.0, 0.0, 2.0, 0.0];
    assert!(cosine_similarity(&zero, &other).abs() < f64::EPSILON);
    assert!((cosine_similarity(&other, &other) - 1.0).abs() < 1e-9);
}
