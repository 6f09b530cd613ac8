// ABOUTME: Collaborative-Proxy scorer deriving popularity from observable recipe attributes
// ABOUTME: Injectable PopularityProxy trait with the default AttributePopularity heuristic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

//! Collaborative-Proxy signal
//!
//! There is no cross-user data in scope. This signal stands in for
//! collaborative filtering with a deterministic heuristic over attributes a
//! recipe carries (image, nutrition data, total time, pantry ingredients).
//! Its reasons describe the recipe, never other users.

use mealplan_core::models::Recipe;

use super::SignalScore;
use crate::compliance::contains_any;
use crate::constants::{popularity as points, COMMON_INGREDIENTS};

/// Source of the Collaborative-Proxy signal
///
/// Implementations must be deterministic and depend on the recipe alone.
pub trait PopularityProxy: Send + Sync {
    /// Popularity estimate for a recipe on the 0-100 scale
    fn score(&self, recipe: &Recipe) -> SignalScore;
}

/// Default proxy: image, nutrition and quick-prep bonuses plus pantry ingredients
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributePopularity;

impl AttributePopularity {
    /// Attribute bonus before the common-ingredient term, capped
    #[must_use]
    pub fn attribute_bonus(recipe: &Recipe) -> f64 {
        let mut bonus = 0.0;
        if recipe.image.is_some() {
            bonus += points::IMAGE_BONUS;
        }
        if recipe.nutrition.is_some() {
            bonus += points::NUTRITION_BONUS;
        }
        if recipe.total_time_mins() <= points::QUICK_MINUTES {
            bonus += points::QUICK_BONUS;
        }
        f64::min(bonus, points::ATTRIBUTE_CAP)
    }

    /// Whether any ingredient is a common pantry item
    #[must_use]
    pub fn uses_common_ingredients(recipe: &Recipe) -> bool {
        contains_any(&recipe.ingredient_names_lower(), COMMON_INGREDIENTS)
    }
}

impl PopularityProxy for AttributePopularity {
    fn score(&self, recipe: &Recipe) -> SignalScore {
        let mut reasons = Vec::new();
        let bonus = Self::attribute_bonus(recipe);

        if bonus > points::STRONG_PROFILE_MIN {
            reasons.push("Well-documented and quick, a typical crowd-pleaser profile".to_owned());
        } else if bonus > points::FAMILIAR_PROFILE_MIN {
            reasons.push("Has the traits of commonly chosen recipes".to_owned());
        }

        let mut score = points::BASE + bonus;
        if Self::uses_common_ingredients(recipe) {
            score += points::COMMON_INGREDIENT_BONUS;
            reasons.push("Uses common, easy-to-find ingredients".to_owned());
        }

        SignalScore::new(score, reasons)
    }
}
