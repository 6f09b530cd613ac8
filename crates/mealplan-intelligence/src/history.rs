// ABOUTME: Request-scoped projections of meal-plan history relative to a target date
// ABOUTME: Recent-window and same-week recipe sets, cuisine frequencies and last-seen dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

use chrono::{Datelike, Days, NaiveDate};
use mealplan_core::models::MealPlanEntry;
use std::collections::{HashMap, HashSet};

use crate::features::{infer_cuisine, Cuisine};

/// History facts the scorers need, computed once per request
#[derive(Debug, Clone, Default)]
pub struct HistoryProjection {
    target_date: Option<NaiveDate>,
    recent_ids: HashSet<String>,
    same_week_ids: HashSet<String>,
    all_ids: HashSet<String>,
    cuisine_counts: HashMap<Cuisine, usize>,
    last_cuisine_date: HashMap<Cuisine, NaiveDate>,
    planned_meals: usize,
}

impl HistoryProjection {
    /// Project history around `target_date`
    ///
    /// "Recent" covers entries dated in `[target - window_days, target]`.
    /// "Same week" covers the Sunday-to-Saturday week containing the target.
    /// Cuisine counts span the whole history; last-seen dates only consider
    /// entries on or before the target.
    #[must_use]
    pub fn new(history: &[MealPlanEntry], target_date: NaiveDate, window_days: u32) -> Self {
        let window_start = target_date
            .checked_sub_days(Days::new(u64::from(window_days)))
            .unwrap_or(NaiveDate::MIN);
        let week_start = target_date
            .checked_sub_days(Days::new(u64::from(
                target_date.weekday().num_days_from_sunday(),
            )))
            .unwrap_or(NaiveDate::MIN);
        let week_end = week_start
            .checked_add_days(Days::new(6))
            .unwrap_or(NaiveDate::MAX);

        let mut projection = Self {
            target_date: Some(target_date),
            ..Self::default()
        };

        for entry in history {
            let is_recent = entry.date >= window_start && entry.date <= target_date;
            let is_same_week = entry.date >= week_start && entry.date <= week_end;

            for recipe in entry.recipes() {
                projection.planned_meals += 1;
                projection.all_ids.insert(recipe.id.clone());
                if is_recent {
                    projection.recent_ids.insert(recipe.id.clone());
                }
                if is_same_week {
                    projection.same_week_ids.insert(recipe.id.clone());
                }

                let cuisine = infer_cuisine(recipe);
                *projection.cuisine_counts.entry(cuisine).or_insert(0) += 1;
                if entry.date <= target_date {
                    projection
                        .last_cuisine_date
                        .entry(cuisine)
                        .and_modify(|last| *last = (*last).max(entry.date))
                        .or_insert(entry.date);
                }
            }
        }

        projection
    }

    /// No meal has ever been planned
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.planned_meals == 0
    }

    /// Recipe planned inside the recent window
    #[must_use]
    pub fn is_recent(&self, recipe_id: &str) -> bool {
        self.recent_ids.contains(recipe_id)
    }

    /// Recipe planned in the target's calendar week
    #[must_use]
    pub fn in_same_week(&self, recipe_id: &str) -> bool {
        self.same_week_ids.contains(recipe_id)
    }

    /// Recipe planned at any date
    #[must_use]
    pub fn contains_recipe(&self, recipe_id: &str) -> bool {
        self.all_ids.contains(recipe_id)
    }

    /// Planned meals of a cuisine across the whole history
    #[must_use]
    pub fn cuisine_count(&self, cuisine: Cuisine) -> usize {
        self.cuisine_counts.get(&cuisine).copied().unwrap_or(0)
    }

    /// Days from the last same-cuisine meal (on or before the target) to the target
    #[must_use]
    pub fn days_since_cuisine(&self, cuisine: Cuisine) -> Option<i64> {
        let target = self.target_date?;
        self.last_cuisine_date
            .get(&cuisine)
            .map(|last| (target - *last).num_days())
    }

    /// Total planned meals
    #[must_use]
    pub const fn planned_meals(&self) -> usize {
        self.planned_meals
    }
}
