// ABOUTME: Meal recommendation intelligence for the mealplan workspace
// ABOUTME: Compliance screening, feature extraction, signal scorers, ensemble and diversity re-ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

#![deny(unsafe_code)]

//! # Mealplan Intelligence
//!
//! Ranks candidate recipes for one meal slot of one date. Each request passes
//! through compliance screening, feature extraction, four independent
//! signal scorers, a weighted ensemble with an incremental diversity term,
//! a per-cuisine re-ranker and a finalizer that attaches confidence and
//! human-readable reasons.
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use mealplan_core::models::{MealType, Recipe, UserPreferences};
//! use mealplan_intelligence::{MealRecommendationEngine, RankingRequest};
//!
//! let recipes = vec![Recipe::new("oats", "Overnight Oats", MealType::Breakfast, 2)];
//! let prefs = UserPreferences::default().with_restriction("vegan");
//! let date = NaiveDate::from_ymd_opt(2025, 6, 11).unwrap_or_default();
//! let request = RankingRequest::new(&recipes, &[], &prefs, date, MealType::Breakfast);
//! if let Ok(engine) = MealRecommendationEngine::new() {
//!     let ranked = engine.rank(&request);
//! }
//! ```

/// Dietary restriction and allergy screening
pub mod compliance;
/// Confidence values and reason selection
pub mod confidence;
/// Engine configuration with environment overrides
pub mod config;
/// Keyword tables and scoring points
pub mod constants;
/// Per-cuisine re-ranking
pub mod diversity;
/// Ranking pipeline facade
pub mod engine;
/// Weighted signal combination
pub mod ensemble;
/// Recipe feature extraction
pub mod features;
/// Meal-plan history projection
pub mod history;
/// Independent signal scorers
pub mod scorers;

pub use compliance::{filter, Allergy, ComplianceReport, ComplianceRules, DietaryRestriction};
pub use config::{ConfigError, RecommendationConfig};
pub use engine::{rank, MealRecommendationEngine, MealSlot, RankingRequest, SlotRanking};
pub use ensemble::{EnsembleMode, EnsembleWeights};
pub use features::{Complexity, Cuisine, FeatureVector, RecipeFeatures, Season};
pub use history::HistoryProjection;
pub use scorers::{AttributePopularity, PopularityProxy, SignalScore, SignalScores};
