// ABOUTME: Recipe feature extraction for similarity and categorical tagging
// ABOUTME: Infers cuisine, complexity, season fit and health, builds fixed-order feature vectors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

//! Feature extractor
//!
//! Every function here is a deterministic function of the recipe (and, for
//! seasons, of a calendar date). Feature vectors have a fixed layout:
//!
//! | Index  | Meaning                                   |
//! |--------|-------------------------------------------|
//! | 0..8   | cuisine one-hot, in [`Cuisine::ALL`] order |
//! | 8..11  | complexity one-hot (simple, moderate, complex) |
//! | 11     | quick flag for the recipe's meal type     |
//! | 12     | health indicator in [0, 1]                |

#![allow(clippy::cast_precision_loss)] // Safe: ingredient counts are small

use chrono::{Datelike, NaiveDate};
use mealplan_core::models::{MealType, Recipe, SkillLevel};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::compliance::contains_any;
use crate::constants::{
    complexity_thresholds, cuisine_keywords, health, quick_thresholds, seasonal_keywords,
};

/// Number of entries in a [`FeatureVector`]
pub const FEATURE_DIMENSIONS: usize = 13;

/// Cuisine inferred from recipe text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Cuisine {
    /// Italian
    Italian,
    /// Mexican
    Mexican,
    /// Asian
    Asian,
    /// Indian
    Indian,
    /// Mediterranean
    Mediterranean,
    /// French
    French,
    /// Thai
    Thai,
    /// Fallback when no keyword matches
    American,
}

impl Cuisine {
    /// All cuisines in inference priority order
    pub const ALL: [Self; 8] = [
        Self::Italian,
        Self::Mexican,
        Self::Asian,
        Self::Indian,
        Self::Mediterranean,
        Self::French,
        Self::Thai,
        Self::American,
    ];

    /// Keywords that identify this cuisine (none for the fallback)
    #[must_use]
    pub const fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Italian => cuisine_keywords::ITALIAN,
            Self::Mexican => cuisine_keywords::MEXICAN,
            Self::Asian => cuisine_keywords::ASIAN,
            Self::Indian => cuisine_keywords::INDIAN,
            Self::Mediterranean => cuisine_keywords::MEDITERRANEAN,
            Self::French => cuisine_keywords::FRENCH,
            Self::Thai => cuisine_keywords::THAI,
            Self::American => &[],
        }
    }

    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Italian => "Italian",
            Self::Mexican => "Mexican",
            Self::Asian => "Asian",
            Self::Indian => "Indian",
            Self::Mediterranean => "Mediterranean",
            Self::French => "French",
            Self::Thai => "Thai",
            Self::American => "American",
        }
    }

    const fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effort class of a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    /// Few ingredients, few steps, short time
    Simple,
    /// Medium on every axis
    Moderate,
    /// Anything larger
    Complex,
}

impl Complexity {
    /// Whether a cook of `skill` should be offered this recipe
    #[must_use]
    pub const fn suits(&self, skill: SkillLevel) -> bool {
        match skill {
            SkillLevel::Beginner => matches!(self, Self::Simple),
            SkillLevel::Intermediate => !matches!(self, Self::Complex),
            SkillLevel::Advanced => true,
        }
    }

    /// Lowercase label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Moderate => "moderate",
            Self::Complex => "complex",
        }
    }

    const fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Northern-hemisphere calendar season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    /// March to May
    Spring,
    /// June to August
    Summer,
    /// September to November
    Fall,
    /// December to February
    Winter,
}

impl Season {
    /// Season containing a date
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        match date.month() {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Fall,
            _ => Self::Winter,
        }
    }

    /// Produce keywords in season
    #[must_use]
    pub const fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Spring => seasonal_keywords::SPRING,
            Self::Summer => seasonal_keywords::SUMMER,
            Self::Fall => seasonal_keywords::FALL,
            Self::Winter => seasonal_keywords::WINTER,
        }
    }

    /// Lowercase label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Fall => "fall",
            Self::Winter => "winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed-order numeric encoding of a recipe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; FEATURE_DIMENSIONS]);

impl FeatureVector {
    /// Raw values
    #[must_use]
    pub const fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Cosine similarity with another vector
    #[must_use]
    pub fn similarity(&self, other: &Self) -> f64 {
        cosine_similarity(&self.0, &other.0)
    }
}

/// Cosine similarity of two equal-length vectors, 0.0 when either has zero magnitude
#[must_use]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Derived features of one recipe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecipeFeatures {
    /// Inferred cuisine
    pub cuisine: Cuisine,
    /// Effort class
    pub complexity: Complexity,
    /// Total time within the quick threshold of its meal type
    pub quick: bool,
    /// Health indicator in [0, 1]
    pub health: f64,
    /// Encoded vector
    pub vector: FeatureVector,
}

/// Extract every feature of a recipe
#[must_use]
pub fn extract(recipe: &Recipe) -> RecipeFeatures {
    let cuisine = infer_cuisine(recipe);
    let complexity = classify_complexity(recipe);
    let quick = is_quick(recipe);
    let health = health_indicator(recipe);

    let mut values = [0.0; FEATURE_DIMENSIONS];
    values[cuisine.ordinal()] = 1.0;
    values[Cuisine::ALL.len() + complexity.ordinal()] = 1.0;
    values[11] = if quick { 1.0 } else { 0.0 };
    values[12] = health;

    RecipeFeatures {
        cuisine,
        complexity,
        quick,
        health,
        vector: FeatureVector(values),
    }
}

/// Infer cuisine from name, description and ingredient text; first match wins
#[must_use]
pub fn infer_cuisine(recipe: &Recipe) -> Cuisine {
    let mut text = recipe.title_text_lower();
    for name in recipe.ingredient_names_lower() {
        text.push(' ');
        text.push_str(&name);
    }

    Cuisine::ALL
        .into_iter()
        .find(|cuisine| cuisine.keywords().iter().any(|kw| text.contains(kw)))
        .unwrap_or(Cuisine::American)
}

/// Classify effort from ingredient count, step count and total time
#[must_use]
pub fn classify_complexity(recipe: &Recipe) -> Complexity {
    use complexity_thresholds::{
        MODERATE_MAX_INGREDIENTS, MODERATE_MAX_MINUTES, MODERATE_MAX_STEPS,
        SIMPLE_MAX_INGREDIENTS, SIMPLE_MAX_MINUTES, SIMPLE_MAX_STEPS,
    };

    let ingredients = recipe.ingredients.len();
    let steps = recipe.instructions.len();
    let minutes = recipe.total_time_mins();

    if ingredients <= SIMPLE_MAX_INGREDIENTS
        && steps <= SIMPLE_MAX_STEPS
        && minutes <= SIMPLE_MAX_MINUTES
    {
        Complexity::Simple
    } else if ingredients <= MODERATE_MAX_INGREDIENTS
        && steps <= MODERATE_MAX_STEPS
        && minutes <= MODERATE_MAX_MINUTES
    {
        Complexity::Moderate
    } else {
        Complexity::Complex
    }
}

/// Quick-flag ceiling for a meal type
#[must_use]
pub const fn quick_threshold(meal_type: MealType) -> u32 {
    match meal_type {
        MealType::Breakfast => quick_thresholds::BREAKFAST_MINUTES,
        MealType::Lunch => quick_thresholds::LUNCH_MINUTES,
        MealType::Dinner => quick_thresholds::DINNER_MINUTES,
        MealType::Snack => quick_thresholds::SNACK_MINUTES,
    }
}

/// Whether total time is within the quick ceiling of the recipe's meal type
#[must_use]
pub const fn is_quick(recipe: &Recipe) -> bool {
    recipe.total_time_mins() <= quick_threshold(recipe.category)
}

/// Health indicator: low calories, high protein and low fat each contribute
#[must_use]
pub fn health_indicator(recipe: &Recipe) -> f64 {
    let Some(nutrition) = recipe.nutrition else {
        return health::NEUTRAL;
    };

    let mut score = health::BASE;
    if nutrition.calories < health::LOW_CALORIE_MAX {
        score += health::LOW_CALORIE_BONUS;
    }
    if nutrition.protein_g > health::HIGH_PROTEIN_MIN {
        score += health::HIGH_PROTEIN_BONUS;
    }
    if nutrition.fat_g < health::LOW_FAT_MAX {
        score += health::LOW_FAT_BONUS;
    }
    score.min(1.0)
}

/// Fraction of ingredients that match the season's produce list
#[must_use]
pub fn seasonal_fraction(recipe: &Recipe, season: Season) -> f64 {
    let names = recipe.ingredient_names_lower();
    if names.is_empty() {
        return 0.0;
    }
    let matching = names
        .iter()
        .filter(|name| contains_any(&[name.as_str()], season.keywords()))
        .count();
    matching as f64 / names.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealplan_core::models::NutritionSummary;

    fn recipe(name: &str, ingredients: &[&str]) -> Recipe {
        Recipe::new("r", name, MealType::Dinner, 2).with_ingredient_names(ingredients)
    }

    #[test]
    fn test_cuisine_priority_order() {
        // pasta (Italian) outranks ginger (Asian)
        let r = recipe("Ginger Noodles", &["pasta", "ginger"]);
        assert_eq!(infer_cuisine(&r), Cuisine::Italian);
        let r = recipe("Green Curry", &["coconut milk", "curry paste"]);
        assert_eq!(infer_cuisine(&r), Cuisine::Indian);
        assert_eq!(infer_cuisine(&recipe("Burger", &["beef"])), Cuisine::American);
    }

    #[test]
    fn test_complexity_thresholds() {
        let simple = recipe("A", &["a", "b"]).with_times(10, 20);
        assert_eq!(classify_complexity(&simple), Complexity::Simple);

        let moderate = recipe("B", &["a", "b"]).with_times(20, 20);
        assert_eq!(classify_complexity(&moderate), Complexity::Moderate);

        let many_steps = recipe("C", &["a"])
            .with_instructions((0..9).map(|i| format!("step {i}")).collect());
        assert_eq!(classify_complexity(&many_steps), Complexity::Complex);
    }

    #[test]
    fn test_skill_suitability() {
        assert!(Complexity::Simple.suits(SkillLevel::Beginner));
        assert!(!Complexity::Moderate.suits(SkillLevel::Beginner));
        assert!(Complexity::Moderate.suits(SkillLevel::Intermediate));
        assert!(!Complexity::Complex.suits(SkillLevel::Intermediate));
        assert!(Complexity::Complex.suits(SkillLevel::Advanced));
    }

    #[test]
    fn test_health_indicator() {
        assert!((health_indicator(&recipe("A", &[])) - 0.5).abs() < f64::EPSILON);
        let lean = recipe("B", &[]).with_nutrition(NutritionSummary::new(350.0, 30.0, 20.0, 10.0));
        assert!((health_indicator(&lean) - 1.0).abs() < 1e-9);
        let rich = recipe("C", &[]).with_nutrition(NutritionSummary::new(900.0, 10.0, 80.0, 40.0));
        assert!((health_indicator(&rich) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_seasons_by_month() {
        let d = |m| NaiveDate::from_ymd_opt(2025, m, 10).unwrap();
        assert_eq!(Season::from_date(d(4)), Season::Spring);
        assert_eq!(Season::from_date(d(7)), Season::Summer);
        assert_eq!(Season::from_date(d(10)), Season::Fall);
        assert_eq!(Season::from_date(d(1)), Season::Winter);
        assert_eq!(Season::from_date(d(12)), Season::Winter);
    }

    #[test]
    fn test_seasonal_fraction() {
        let r = recipe("Salad", &["Tomato", "Cucumber", "feta", "olive oil"]);
        assert!((seasonal_fraction(&r, Season::Summer) - 0.5).abs() < 1e-9);
        assert!(seasonal_fraction(&recipe("Empty", &[]), Season::Summer).abs() < f64::EPSILON);
    }

    #[test]
    fn test_vector_layout_and_similarity() {
        let a = extract(&recipe("Pasta", &["pasta"]).with_times(5, 10));
        let b = extract(&recipe("Parmesan Pasta", &["pasta", "parmesan"]).with_times(5, 10));
        let c = extract(&recipe("Tacos", &["taco shells"]).with_times(30, 40));

        assert_eq!(a.vector.as_slice().len(), FEATURE_DIMENSIONS);
        assert!((a.vector.as_slice()[0] - 1.0).abs() < f64::EPSILON);
        assert!((a.vector.similarity(&b.vector) - 1.0).abs() < 1e-9);
        assert!(a.vector.similarity(&c.vector) < 0.5);
    }

    #[test]
    fn test_cosine_similarity_zero_vector() {
        assert!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]).abs() < f64::EPSILON);
    }
}
