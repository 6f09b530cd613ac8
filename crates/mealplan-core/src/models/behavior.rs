// ABOUTME: Optional per-user behavior signals known outside the meal-plan history
// ABOUTME: Carries per-recipe affinity (likes) and view counts used by scoring and confidence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Directly-known interactions of one user with catalog recipes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BehaviorProfile {
    /// Recipe id to affinity in [0, 1]
    #[serde(default)]
    pub recipe_likes: HashMap<String, f64>,
    /// Recipe id to number of times the user opened it
    #[serde(default)]
    pub recipe_views: HashMap<String, u32>,
}

impl BehaviorProfile {
    /// Record an affinity for a recipe, clamped to [0, 1]
    #[must_use]
    pub fn with_like(mut self, recipe_id: impl Into<String>, affinity: f64) -> Self {
        self.recipe_likes
            .insert(recipe_id.into(), clamp_affinity(affinity));
        self
    }

    /// Record a view count for a recipe
    #[must_use]
    pub fn with_views(mut self, recipe_id: impl Into<String>, views: u32) -> Self {
        self.recipe_views.insert(recipe_id.into(), views);
        self
    }

    /// Known affinity for a recipe, clamped to [0, 1]
    #[must_use]
    pub fn affinity(&self, recipe_id: &str) -> Option<f64> {
        self.recipe_likes.get(recipe_id).copied().map(clamp_affinity)
    }

    /// Whether any like or view exists for a recipe
    #[must_use]
    pub fn has_signal(&self, recipe_id: &str) -> bool {
        self.recipe_likes.contains_key(recipe_id)
            || self.recipe_views.get(recipe_id).is_some_and(|v| *v > 0)
    }
}

fn clamp_affinity(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affinity_is_clamped() {
        let profile = BehaviorProfile::default()
            .with_like("a", 3.0)
            .with_like("b", f64::NAN);
        assert_eq!(profile.affinity("a"), Some(1.0));
        assert_eq!(profile.affinity("b"), Some(0.0));
        assert_eq!(profile.affinity("c"), None);
    }

    #[test]
    fn test_zero_views_is_not_a_signal() {
        let profile = BehaviorProfile::default().with_views("a", 0).with_views("b", 2);
        assert!(!profile.has_signal("a"));
        assert!(profile.has_signal("b"));
    }
}
