// ABOUTME: Recipe data models supplied read-only by the recipe catalog
// ABOUTME: Defines Recipe, Ingredient, MealType, NutritionSummary and record validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::errors::{AppError, ErrorCode};

/// Meal slot a recipe is intended for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Small meal between the main slots
    Snack,
}

impl MealType {
    /// All meal types in slot order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Lowercase label used in reasons and on the wire
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" => Ok(Self::Snack),
            other => Err(AppError::invalid_input(format!(
                "unknown meal type '{other}' (expected breakfast, lunch, dinner or snack)"
            ))),
        }
    }
}

/// Per-serving nutrition summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionSummary {
    /// Calories per serving
    pub calories: f64,
    /// Protein in grams per serving
    pub protein_g: f64,
    /// Carbohydrates in grams per serving
    pub carbs_g: f64,
    /// Fat in grams per serving
    pub fat_g: f64,
}

impl NutritionSummary {
    /// Create a nutrition summary
    #[must_use]
    pub const fn new(calories: f64, protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        Self {
            calories,
            protein_g,
            carbs_g,
            fat_g,
        }
    }

    fn values(&self) -> [(&'static str, f64); 4] {
        [
            ("calories", self.calories),
            ("protein_g", self.protein_g),
            ("carbs_g", self.carbs_g),
            ("fat_g", self.fat_g),
        ]
    }
}

/// Single ingredient line of a recipe
///
/// Only the name takes part in ranking (keyword matching); amount, unit and
/// category are carried for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Human-readable ingredient name, matched case-insensitively
    pub name: String,
    /// Amount in `unit`
    #[serde(default)]
    pub amount: f64,
    /// Free-text unit ("cups", "slices", "pinch")
    #[serde(default)]
    pub unit: String,
    /// Grocery category tag ("produce", "dairy")
    #[serde(default)]
    pub category: String,
}

impl Ingredient {
    /// Create an ingredient
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        unit: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            unit: unit.into(),
            category: category.into(),
        }
    }

    /// Create an ingredient with only a name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, 1.0, "", "")
    }
}

/// Reasons a catalog record cannot be ranked
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecipeValidationError {
    /// Recipe has no identifier
    #[error("recipe id is empty")]
    EmptyId,
    /// Recipe has no name
    #[error("recipe name is empty")]
    EmptyName,
    /// Servings must be a positive integer
    #[error("servings must be positive")]
    ZeroServings,
    /// An ingredient amount is negative or not a number
    #[error("ingredient '{name}' has invalid amount {amount}")]
    InvalidIngredientAmount {
        /// Ingredient name
        name: String,
        /// Offending amount
        amount: f64,
    },
    /// A nutrition value is negative or not a number
    #[error("nutrition field {field} has invalid value {value}")]
    InvalidNutrition {
        /// Nutrition field name
        field: &'static str,
        /// Offending value
        value: f64,
    },
}

impl RecipeValidationError {
    /// Error code reported when the record is surfaced as an [`AppError`]
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyId | Self::EmptyName => ErrorCode::MissingRequiredField,
            Self::ZeroServings
            | Self::InvalidIngredientAmount { .. }
            | Self::InvalidNutrition { .. } => ErrorCode::ValueOutOfRange,
        }
    }
}

impl From<RecipeValidationError> for AppError {
    fn from(error: RecipeValidationError) -> Self {
        Self::new(error.code(), error.to_string()).with_source(error)
    }
}

/// A complete recipe record owned by the recipe catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Catalog identifier
    pub id: String,
    /// Recipe name
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Meal slot this recipe belongs to
    pub category: MealType,
    /// Preparation time in minutes
    #[serde(default)]
    pub prep_time_mins: u32,
    /// Cooking time in minutes
    #[serde(default)]
    pub cook_time_mins: u32,
    /// Number of servings this recipe makes
    pub servings: u32,
    /// Ordered ingredient list
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Ordered instruction steps
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Per-serving nutrition, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionSummary>,
    /// Image reference (URL or path)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// When the recipe entered the catalog, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Recipe {
    /// Create a new recipe with basic information
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: MealType,
        servings: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category,
            prep_time_mins: 0,
            cook_time_mins: 0,
            servings,
            ingredients: Vec::new(),
            instructions: Vec::new(),
            nutrition: None,
            image: None,
            created_at: None,
        }
    }

    /// Add a description
    #[must_use]
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Set preparation and cooking times
    #[must_use]
    pub const fn with_times(mut self, prep_mins: u32, cook_mins: u32) -> Self {
        self.prep_time_mins = prep_mins;
        self.cook_time_mins = cook_mins;
        self
    }

    /// Add an ingredient
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Add ingredients by name only
    #[must_use]
    pub fn with_ingredient_names(mut self, names: &[&str]) -> Self {
        self.ingredients
            .extend(names.iter().map(|name| Ingredient::named(*name)));
        self
    }

    /// Add multiple instruction steps
    #[must_use]
    pub fn with_instructions(mut self, steps: Vec<String>) -> Self {
        self.instructions.extend(steps);
        self
    }

    /// Set nutrition summary
    #[must_use]
    pub const fn with_nutrition(mut self, nutrition: NutritionSummary) -> Self {
        self.nutrition = Some(nutrition);
        self
    }

    /// Set image reference
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set catalog creation timestamp
    #[must_use]
    pub const fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Get total time (prep + cook)
    #[must_use]
    pub const fn total_time_mins(&self) -> u32 {
        self.prep_time_mins.saturating_add(self.cook_time_mins)
    }

    /// Lowercased ingredient names in recipe order
    #[must_use]
    pub fn ingredient_names_lower(&self) -> Vec<String> {
        self.ingredients
            .iter()
            .map(|ingredient| ingredient.name.to_lowercase())
            .collect()
    }

    /// Lowercased "name description" text
    #[must_use]
    pub fn title_text_lower(&self) -> String {
        format!("{} {}", self.name, self.description).to_lowercase()
    }

    /// Days between catalog entry and `on`, if the creation date is known
    ///
    /// Negative ages (records dated after `on`) are reported as zero.
    #[must_use]
    pub fn age_days(&self, on: NaiveDate) -> Option<i64> {
        self.created_at
            .map(|created| (on - created.date_naive()).num_days().max(0))
    }

    /// Check the fields the engine relies on
    ///
    /// # Errors
    ///
    /// Returns the first [`RecipeValidationError`] found.
    pub fn validate(&self) -> Result<(), RecipeValidationError> {
        if self.id.trim().is_empty() {
            return Err(RecipeValidationError::EmptyId);
        }
        if self.name.trim().is_empty() {
            return Err(RecipeValidationError::EmptyName);
        }
        if self.servings == 0 {
            return Err(RecipeValidationError::ZeroServings);
        }
        if let Some(bad) = self
            .ingredients
            .iter()
            .find(|i| !i.amount.is_finite() || i.amount < 0.0)
        {
            return Err(RecipeValidationError::InvalidIngredientAmount {
                name: bad.name.clone(),
                amount: bad.amount,
            });
        }
        if let Some(nutrition) = &self.nutrition {
            if let Some((field, value)) = nutrition
                .values()
                .into_iter()
                .find(|(_, v)| !v.is_finite() || *v < 0.0)
            {
                return Err(RecipeValidationError::InvalidNutrition { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_total_time() {
        let recipe = Recipe::new("1", "Toast", MealType::Breakfast, 1).with_times(5, 2);
        assert_eq!(recipe.total_time_mins(), 7);
    }

    #[test]
    fn test_validate_rejects_zero_servings() {
        let recipe = Recipe::new("1", "Toast", MealType::Breakfast, 0);
        assert_eq!(recipe.validate(), Err(RecipeValidationError::ZeroServings));
    }

    #[test]
    fn test_validate_rejects_negative_nutrition() {
        let recipe = Recipe::new("1", "Toast", MealType::Breakfast, 2)
            .with_nutrition(NutritionSummary::new(200.0, -1.0, 20.0, 5.0));
        assert!(matches!(
            recipe.validate(),
            Err(RecipeValidationError::InvalidNutrition {
                field: "protein_g",
                ..
            })
        ));
    }

    #[test]
    fn test_validation_error_codes() {
        let unnamed = Recipe::new("1", " ", MealType::Lunch, 2);
        let error = AppError::from(unnamed.validate().unwrap_err());
        assert_eq!(error.code, ErrorCode::MissingRequiredField);

        let empty = Recipe::new("1", "Toast", MealType::Breakfast, 0);
        let error = AppError::from(empty.validate().unwrap_err());
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert!(error.message.contains("servings"));
    }

    #[test]
    fn test_validate_accepts_empty_ingredient_list() {
        let recipe = Recipe::new("1", "Mystery", MealType::Snack, 1);
        assert!(recipe.validate().is_ok());
    }

    #[test]
    fn test_meal_type_parsing() {
        assert_eq!("Breakfast".parse::<MealType>().unwrap(), MealType::Breakfast);
        assert_eq!(" snack ".parse::<MealType>().unwrap(), MealType::Snack);
        assert!("brunch".parse::<MealType>().is_err());
    }

    #[test]
    fn test_age_days() {
        let created = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let recipe = Recipe::new("1", "Soup", MealType::Lunch, 2).with_created_at(created);
        let on = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        assert_eq!(recipe.age_days(on), Some(4));
        let before = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        assert_eq!(recipe.age_days(before), Some(0));
    }
}
