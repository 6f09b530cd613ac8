// ABOUTME: Read-only collaborator stores feeding the ranking engine
// ABOUTME: Recipe catalog, meal-plan history and preference traits with JSON file implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

//! Collaborator stores
//!
//! The engine never reads files itself; callers load the catalog, history
//! and preferences through these traits and pass borrowed slices in. The
//! JSON loaders parse each array element on its own, so one malformed record
//! is skipped with a warning instead of failing the whole file.

use std::fs;
use std::path::Path;

use mealplan_core::errors::{AppError, AppResult};
use mealplan_core::models::{BehaviorProfile, MealPlanEntry, Recipe, UserPreferences};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::logging::RecommendationLogger;

/// Source of candidate recipes
pub trait RecipeCatalog {
    /// All recipes in the catalog
    fn recipes(&self) -> &[Recipe];
}

/// Source of past and planned meals
pub trait MealPlanHistory {
    /// History entries in stored order
    fn entries(&self) -> &[MealPlanEntry];
}

/// Source of a user's stated preferences
pub trait PreferenceStore {
    /// The user's preferences
    fn preferences(&self) -> &UserPreferences;
}

/// Records parsed from a JSON array, with the count of skipped elements
#[derive(Debug)]
struct ParsedRecords<T> {
    records: Vec<T>,
    skipped: usize,
}

fn read_file(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!("failed to read {}", path.display()))
            .with_resource_id(path.display().to_string())
            .with_source(e)
    })
}

/// Parse a JSON array element by element, dropping elements that do not deserialize
fn parse_records<T: DeserializeOwned>(kind: &str, json: &str) -> AppResult<ParsedRecords<T>> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(elements) = value else {
        return Err(AppError::invalid_input(format!(
            "{kind} file must contain a JSON array"
        )));
    };

    let mut records = Vec::with_capacity(elements.len());
    let mut skipped = 0;
    for (position, element) in elements.into_iter().enumerate() {
        match serde_json::from_value::<T>(element) {
            Ok(record) => records.push(record),
            Err(e) => {
                skipped += 1;
                warn!(kind, position, error = %e, "Skipping malformed record");
            }
        }
    }
    Ok(ParsedRecords { records, skipped })
}

/// Recipe catalog backed by a JSON array of recipes
#[derive(Debug, Clone, Default)]
pub struct JsonRecipeCatalog {
    recipes: Vec<Recipe>,
}

impl JsonRecipeCatalog {
    /// Catalog over recipes already in memory
    #[must_use]
    pub const fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Parse a catalog from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON array
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let parsed = parse_records("recipe", json)?;
        Ok(Self::new(parsed.records))
    }

    /// Load a catalog file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a JSON array
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let parsed = parse_records::<Recipe>("recipe", &read_file(path)?)?;
        RecommendationLogger::log_store_load(
            "recipes",
            &path.display().to_string(),
            parsed.records.len(),
            parsed.skipped,
        );
        Ok(Self::new(parsed.records))
    }

    /// Number of loaded recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Records the engine will skip, each as an error tagged with its recipe id
    #[must_use]
    pub fn invalid_records(&self) -> Vec<AppError> {
        self.recipes
            .iter()
            .filter_map(|recipe| {
                recipe
                    .validate()
                    .err()
                    .map(|e| AppError::from(e).with_resource_id(recipe.id.clone()))
            })
            .collect()
    }

    /// True when the catalog holds no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl RecipeCatalog for JsonRecipeCatalog {
    fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }
}

/// Meal-plan history backed by a JSON array of entries
#[derive(Debug, Clone, Default)]
pub struct JsonMealPlanHistory {
    entries: Vec<MealPlanEntry>,
}

impl JsonMealPlanHistory {
    /// History over entries already in memory
    #[must_use]
    pub const fn new(entries: Vec<MealPlanEntry>) -> Self {
        Self { entries }
    }

    /// Parse history from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON array
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let parsed = parse_records("meal plan", json)?;
        Ok(Self::new(parsed.records))
    }

    /// Load a history file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a JSON array
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let parsed = parse_records::<MealPlanEntry>("meal plan", &read_file(path)?)?;
        RecommendationLogger::log_store_load(
            "history",
            &path.display().to_string(),
            parsed.records.len(),
            parsed.skipped,
        );
        Ok(Self::new(parsed.records))
    }
}

impl MealPlanHistory for JsonMealPlanHistory {
    fn entries(&self) -> &[MealPlanEntry] {
        &self.entries
    }
}

/// Preferences backed by a JSON object
#[derive(Debug, Clone, Default)]
pub struct JsonPreferenceStore {
    preferences: UserPreferences,
}

impl JsonPreferenceStore {
    /// Store over preferences already in memory
    #[must_use]
    pub const fn new(preferences: UserPreferences) -> Self {
        Self { preferences }
    }

    /// Load a preferences file
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let preferences: UserPreferences = serde_json::from_str(&read_file(path)?)
            .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))?;
        Ok(Self::new(preferences))
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }
}

/// Load likes and views from a JSON object
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn load_behavior(path: impl AsRef<Path>) -> AppResult<BehaviorProfile> {
    let path = path.as_ref();
    serde_json::from_str(&read_file(path)?)
        .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))
}
