// ABOUTME: Behavioral-History scorer rewarding cuisine variety and spacing in the meal plan
// ABOUTME: Folds in known per-recipe affinity and same-week repetition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

use mealplan_core::models::Recipe;

use super::{ScoringContext, SignalScore};
use crate::constants::behavioral_scoring as points;
use crate::features::RecipeFeatures;

/// Score a recipe against what the user has already planned
///
/// Returns the neutral baseline with no reasons when there is no history and
/// no known affinity for the recipe.
#[must_use]
pub fn score(recipe: &Recipe, features: &RecipeFeatures, ctx: &ScoringContext<'_>) -> SignalScore {
    let history = ctx.history;
    let affinity = ctx.behavior.and_then(|b| b.affinity(&recipe.id));

    if history.is_empty() && affinity.is_none() {
        return SignalScore::bare(points::NEUTRAL);
    }

    let mut score = points::NEUTRAL;
    let mut reasons = Vec::new();
    let cuisine = features.cuisine;

    if !history.is_empty() {
        match history.cuisine_count(cuisine) {
            0 => {
                score += points::UNSEEN_CUISINE_BONUS;
                reasons.push(format!("Adds {cuisine} variety to your meal plan"));
            }
            n if n <= points::RARE_CUISINE_MAX => score += points::RARE_CUISINE_BONUS,
            _ => score -= points::FREQUENT_CUISINE_PENALTY,
        }

        match history.days_since_cuisine(cuisine) {
            Some(days) if days >= points::LONG_GAP_DAYS => {
                score += points::LONG_GAP_BONUS;
                reasons.push(format!("Your last {cuisine} meal was over a week ago"));
            }
            Some(days) if days < points::SHORT_GAP_DAYS => {
                score -= points::SHORT_GAP_PENALTY;
            }
            _ => {}
        }

        if history.in_same_week(&recipe.id) {
            score -= points::WEEK_REPEAT_PENALTY;
        } else {
            score += points::WEEK_VARIETY_BONUS;
        }
    }

    if let Some(affinity) = affinity {
        score += affinity * points::AFFINITY_SCALE;
        if affinity >= points::AFFINITY_REASON_MIN {
            reasons.push("You've enjoyed this recipe before".to_owned());
        }
    }

    SignalScore::new(score, reasons)
}
