// ABOUTME: Content-Affinity scorer matching recipe attributes to stated preferences
// ABOUTME: Dietary and allergy compliance, time band, skill, servings, cuisine, freshness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

use mealplan_core::models::{CookingTime, Recipe};

use super::{ScoringContext, SignalScore};
use crate::compliance::{ComplianceReport, DietaryRestriction};
use crate::constants::{content_scoring as points, health};
use crate::features::RecipeFeatures;

/// Score how well a recipe matches the user's stated preferences
///
/// An allergen match zeroes the score and ends scoring with a warning reason.
/// The engine removes such recipes before scoring, so this only shows up when
/// the scorer is used on its own.
#[must_use]
pub fn score(
    recipe: &Recipe,
    features: &RecipeFeatures,
    report: &ComplianceReport,
    ctx: &ScoringContext<'_>,
) -> SignalScore {
    let prefs = ctx.preferences;
    let mut score = points::BASE;
    let mut reasons = Vec::new();

    if report.is_dietary_compliant() {
        score += points::DIETARY_MATCH_BONUS;
        if !prefs.dietary_restrictions.is_empty() {
            reasons.push(format!(
                "Matches your {} preferences",
                prefs.dietary_restrictions.join(", ")
            ));
        }
    } else {
        score -= points::DIETARY_VIOLATION_PENALTY;
        let violated: Vec<&str> = report
            .dietary_violations
            .iter()
            .map(DietaryRestriction::as_str)
            .collect();
        reasons.push(format!(
            "Contains ingredients outside your {} diet",
            violated.join(", ")
        ));
    }

    if !report.is_allergy_safe() {
        reasons.push("Warning: contains allergens you want to avoid".to_owned());
        return SignalScore::new(0.0, reasons);
    }
    score += points::ALLERGY_SAFE_BONUS;

    let total = recipe.total_time_mins();
    if prefs.cooking_time.matches(total) {
        match prefs.cooking_time {
            CookingTime::Quick => {
                score += points::QUICK_TIME_BONUS;
                reasons.push("Quick to prepare - perfect for busy days".to_owned());
            }
            CookingTime::Medium => {
                score += points::OTHER_TIME_BONUS;
                reasons.push("Moderate cooking time fits your schedule".to_owned());
            }
            CookingTime::Long => {
                score += points::OTHER_TIME_BONUS;
                reasons.push("Perfect for when you have time to cook".to_owned());
            }
        }
    }

    if features.complexity.suits(prefs.skill_level) {
        score += points::SKILL_BONUS;
        reasons.push(format!(
            "Great match for {} cooking skills",
            prefs.skill_level
        ));
    }

    if recipe.servings.abs_diff(prefs.serving_size) <= points::SERVING_TOLERANCE {
        score += points::SERVING_BONUS;
        reasons.push("Perfect serving size for your household".to_owned());
    }

    if prefs.prefers_cuisine(features.cuisine.as_str()) {
        score += points::CUISINE_BONUS;
        reasons.push(format!(
            "Features your favorite {} cuisine",
            features.cuisine
        ));
    }

    if ctx.history.is_recent(&recipe.id) {
        score -= points::RECENT_PENALTY;
        reasons.push("You had this recently".to_owned());
    } else {
        score += points::FRESH_BONUS;
        reasons.push("Fresh choice - you haven't had this recently".to_owned());
    }

    if features.health > health::REASON_THRESHOLD {
        reasons.push("Aligns with your health goals".to_owned());
    }

    SignalScore::new(score, reasons)
}
