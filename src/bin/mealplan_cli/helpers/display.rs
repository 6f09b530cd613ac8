// ABOUTME: Output formatting helpers for mealplan-cli
// ABOUTME: Provides consistent display functions for ranked recipes and recipe features
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

use anyhow::Result;
use chrono::NaiveDate;
use mealplan::mealplan_core::models::{MealType, Recipe, ScoredCandidate};
use mealplan::mealplan_intelligence::RecipeFeatures;

/// Display ranked recommendations as a numbered list
pub fn display_rankings(meal: MealType, date: NaiveDate, ranked: &[ScoredCandidate]) {
    println!("\n{meal} recommendations for {date}");
    println!("{}", "=".repeat(60));

    if ranked.is_empty() {
        println!("No suitable recipes found.");
        return;
    }

    for (position, pick) in ranked.iter().enumerate() {
        println!(
            "{:>2}. {} [{}]  score {:.1}  confidence {:.0}%  via {}",
            position + 1,
            pick.recipe.name,
            pick.recipe.id,
            pick.score,
            pick.confidence * 100.0,
            pick.signal
        );
        for reason in &pick.reasons {
            println!("      - {reason}");
        }
    }
}

/// Display ranked recommendations as pretty JSON
pub fn display_json(ranked: &[ScoredCandidate]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(ranked)?);
    Ok(())
}

/// Display the derived features of one recipe
pub fn display_features(recipe: &Recipe, features: &RecipeFeatures, seasonal: f64) {
    println!(
        "{:<12} {:<32} {:<9} cuisine={:<13} complexity={:<8} quick={:<5} health={:.2} seasonal={:.2} time={}m",
        recipe.id,
        recipe.name,
        recipe.category.as_str(),
        features.cuisine.as_str(),
        features.complexity.as_str(),
        features.quick,
        features.health,
        seasonal,
        recipe.total_time_mins()
    );
}
