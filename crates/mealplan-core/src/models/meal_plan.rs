// ABOUTME: Meal-plan history models supplied read-only by the history store
// ABOUTME: Defines MealPlanEntry with up to one planned recipe per meal slot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::recipe::{MealType, Recipe};

/// Recipes scheduled for each slot of a single day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannedMeals {
    /// Breakfast slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<Recipe>,
    /// Lunch slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch: Option<Recipe>,
    /// Dinner slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dinner: Option<Recipe>,
    /// Snack slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snack: Option<Recipe>,
}

/// One day of a meal plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanEntry {
    /// Calendar date of the plan
    pub date: NaiveDate,
    /// Recipes scheduled on that date
    #[serde(default)]
    pub meals: PlannedMeals,
}

impl MealPlanEntry {
    /// Create an empty plan for a date
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            meals: PlannedMeals::default(),
        }
    }

    /// Schedule a recipe in a slot, replacing whatever was there
    #[must_use]
    pub fn with_meal(mut self, slot: MealType, recipe: Recipe) -> Self {
        *self.slot_mut(slot) = Some(recipe);
        self
    }

    /// Recipe scheduled in a slot
    #[must_use]
    pub const fn meal(&self, slot: MealType) -> Option<&Recipe> {
        match slot {
            MealType::Breakfast => self.meals.breakfast.as_ref(),
            MealType::Lunch => self.meals.lunch.as_ref(),
            MealType::Dinner => self.meals.dinner.as_ref(),
            MealType::Snack => self.meals.snack.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: MealType) -> &mut Option<Recipe> {
        match slot {
            MealType::Breakfast => &mut self.meals.breakfast,
            MealType::Lunch => &mut self.meals.lunch,
            MealType::Dinner => &mut self.meals.dinner,
            MealType::Snack => &mut self.meals.snack,
        }
    }

    /// Scheduled recipes in slot order (breakfast, lunch, dinner, snack)
    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        MealType::ALL.into_iter().filter_map(|slot| self.meal(slot))
    }
}
