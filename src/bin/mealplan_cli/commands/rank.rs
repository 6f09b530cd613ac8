// ABOUTME: Rank command for mealplan-cli
// ABOUTME: Loads the JSON stores, builds the engine from env config and prints the ranked list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use chrono::NaiveDate;
use mealplan::catalog::{
    load_behavior, JsonMealPlanHistory, JsonPreferenceStore, JsonRecipeCatalog, MealPlanHistory,
    PreferenceStore, RecipeCatalog,
};
use mealplan::logging::RecommendationLogger;
use mealplan::mealplan_core::models::{BehaviorProfile, MealType};
use mealplan::mealplan_intelligence::{
    EnsembleMode, MealRecommendationEngine, RankingRequest, RecommendationConfig,
};
use tracing::info;

use crate::helpers::display::{display_json, display_rankings};
use crate::OutputFormat;

/// Arguments of the rank command
pub struct RankArgs {
    pub recipes: PathBuf,
    pub history: Option<PathBuf>,
    pub preferences: Option<PathBuf>,
    pub behavior: Option<PathBuf>,
    pub date: NaiveDate,
    pub meal: MealType,
    pub limit: Option<usize>,
    pub two_signal: bool,
    pub format: OutputFormat,
}

/// Rank the catalog for one slot and print the result
pub fn run(args: &RankArgs) -> Result<()> {
    let catalog = JsonRecipeCatalog::from_path(&args.recipes)?;
    let history = match &args.history {
        Some(path) => JsonMealPlanHistory::from_path(path)?,
        None => JsonMealPlanHistory::default(),
    };
    let preferences = match &args.preferences {
        Some(path) => JsonPreferenceStore::from_path(path)?,
        None => JsonPreferenceStore::default(),
    };
    let behavior: Option<BehaviorProfile> =
        args.behavior.as_ref().map(load_behavior).transpose()?;

    let mut config = RecommendationConfig::load()?;
    if args.two_signal {
        config.ensemble.mode = EnsembleMode::TwoSignal;
    }
    let engine = MealRecommendationEngine::with_config(config)?;
    info!(mode = ?engine.config().ensemble.mode, "Engine ready");

    let mut request = RankingRequest::new(
        catalog.recipes(),
        history.entries(),
        preferences.preferences(),
        args.date,
        args.meal,
    );
    if let Some(limit) = args.limit {
        request = request.with_limit(limit);
    }
    if let Some(behavior) = &behavior {
        request = request.with_behavior(behavior);
    }

    let started = Instant::now();
    let ranked = engine.rank(&request);
    RecommendationLogger::log_ranking(
        args.meal,
        args.date,
        catalog.len(),
        ranked.len(),
        started.elapsed(),
    );

    match args.format {
        OutputFormat::Text => display_rankings(args.meal, args.date, &ranked),
        OutputFormat::Json => display_json(&ranked)?,
    }
    Ok(())
}
