// ABOUTME: Inspect command for mealplan-cli
// ABOUTME: Prints cuisine, complexity, quick flag, health and seasonal fraction per recipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

use std::path::Path;

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use mealplan::catalog::{JsonRecipeCatalog, RecipeCatalog};
use mealplan::mealplan_intelligence::features::{extract, seasonal_fraction};
use mealplan::mealplan_intelligence::Season;

use crate::helpers::display::display_features;

/// Print derived features for every recipe in a catalog
pub fn run(recipes: &Path, date: Option<NaiveDate>) -> Result<()> {
    let catalog = JsonRecipeCatalog::from_path(recipes)?;
    let season = Season::from_date(date.unwrap_or_else(|| Utc::now().date_naive()));

    println!("{} recipes, {season} season", catalog.len());
    for recipe in catalog.recipes() {
        let features = extract(recipe);
        display_features(recipe, &features, seasonal_fraction(recipe, season));
    }
    for error in catalog.invalid_records() {
        println!("skipped by ranking: {error}");
    }
    Ok(())
}
