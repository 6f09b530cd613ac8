// ABOUTME: Contextual scorer for meal-time fit, seasonal produce and day-of-week patterns
// ABOUTME: Blends time, season, day and meal-slot staple sub-scores into one signal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

use chrono::{Datelike, NaiveDate, Weekday};
use mealplan_core::models::{MealType, Recipe};

use super::{ScoringContext, SignalScore, MAX_SCORE};
use crate::compliance::contains_any;
use crate::constants::{contextual_scoring as blend, meal_staples};
use crate::features::{seasonal_fraction, Season};

/// Score a recipe against the time, season and day it is planned for
#[must_use]
pub fn score(recipe: &Recipe, ctx: &ScoringContext<'_>) -> SignalScore {
    let total = recipe.total_time_mins();
    let meal = ctx.meal_type;
    let season = Season::from_date(ctx.target_date);
    let mut reasons = Vec::new();

    let time_fit = time_appropriateness(meal, total);
    if time_fit >= 1.0 {
        reasons.push(match meal {
            MealType::Breakfast => "Quick breakfast option to start your day right".to_owned(),
            _ => format!("Comfortable prep time for {meal}"),
        });
    }

    let fraction = seasonal_fraction(recipe, season);
    let season_fit = (fraction * blend::SEASON_FRACTION_SCALE).min(1.0);
    if fraction > 0.0 {
        reasons.push(format!("Features fresh {season} ingredients"));
    }

    let weekend = is_weekend(ctx.target_date);
    let day_fit = day_of_week_fit(weekend, total);
    if day_fit >= blend::DAY_FIT {
        reasons.push(if weekend {
            "Worth the extra time on a weekend".to_owned()
        } else {
            "Easy enough for a weeknight".to_owned()
        });
    }

    let staple = is_staple_fit(recipe, meal);
    if staple {
        reasons.push(format!("Well-balanced nutrition for {meal}"));
    }

    let blended = blend::BASE
        + blend::TIME_WEIGHT * time_fit
        + blend::SEASON_WEIGHT * season_fit
        + blend::DAY_WEIGHT * day_fit
        + blend::STAPLE_WEIGHT * if staple { 1.0 } else { 0.0 };

    SignalScore::new(blended * MAX_SCORE, reasons)
}

/// How well total time suits the meal slot, in [0, 1]
#[must_use]
pub fn time_appropriateness(meal: MealType, total_mins: u32) -> f64 {
    match meal {
        MealType::Breakfast if total_mins <= blend::BREAKFAST_IDEAL_MINUTES => 1.0,
        MealType::Breakfast if total_mins <= blend::BREAKFAST_OK_MINUTES => 0.5,
        MealType::Breakfast => 0.2,
        MealType::Lunch if total_mins <= blend::LUNCH_IDEAL_MINUTES => 1.0,
        MealType::Lunch if total_mins <= blend::LUNCH_OK_MINUTES => 0.7,
        MealType::Lunch => 0.4,
        MealType::Dinner if total_mins <= blend::DINNER_IDEAL_MINUTES => 1.0,
        MealType::Dinner => 0.6,
        MealType::Snack if total_mins <= blend::SNACK_IDEAL_MINUTES => 1.0,
        MealType::Snack => 0.3,
    }
}

/// Saturday or Sunday
#[must_use]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Weekends favour long recipes, weekdays favour short ones
#[must_use]
pub fn day_of_week_fit(weekend: bool, total_mins: u32) -> f64 {
    match (weekend, total_mins) {
        (true, t) if t > blend::WEEKEND_LONG_MINUTES => blend::DAY_FIT,
        (true, _) => blend::WEEKEND_MISS,
        (false, t) if t <= blend::WEEKDAY_SHORT_MINUTES => blend::DAY_FIT,
        (false, _) => blend::WEEKDAY_MISS,
    }
}

/// Whether the recipe uses a typical staple of its slot (snacks: short total time)
#[must_use]
pub fn is_staple_fit(recipe: &Recipe, meal: MealType) -> bool {
    let names = recipe.ingredient_names_lower();
    match meal {
        MealType::Breakfast => contains_any(&names, meal_staples::BREAKFAST),
        MealType::Lunch => contains_any(&names, meal_staples::LUNCH),
        MealType::Dinner => contains_any(&names, meal_staples::DINNER),
        MealType::Snack => recipe.total_time_mins() <= meal_staples::SNACK_MAX_MINUTES,
    }
}
