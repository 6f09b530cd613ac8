// ABOUTME: User preference models supplied fresh per request by the preference store
// ABOUTME: Defines UserPreferences with cooking-time band, skill level and dietary labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cooking-time band the user is willing to spend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CookingTime {
    /// 30 minutes or less in total
    #[default]
    Quick,
    /// Over 30 and up to 60 minutes
    Medium,
    /// Over 60 minutes
    Long,
}

impl CookingTime {
    /// Whether a total prep+cook time falls inside this band
    #[must_use]
    pub const fn matches(&self, total_mins: u32) -> bool {
        match self {
            Self::Quick => total_mins <= 30,
            Self::Medium => total_mins > 30 && total_mins <= 60,
            Self::Long => total_mins > 60,
        }
    }
}

/// Cooking skill level for recipe complexity filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    /// Simple recipes, basic techniques
    Beginner,
    /// Moderate complexity, some techniques required
    #[default]
    Intermediate,
    /// Complex recipes, advanced techniques
    Advanced,
}

impl SkillLevel {
    /// Lowercase label used in reasons
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dietary rules, allergies and cooking settings of one user
///
/// Restriction, allergy and cuisine entries are free-text labels as stored by
/// the preference store ("Vegan", "gluten-free", "Peanuts", "Italian"). The
/// engine interprets them case-insensitively and never mutates this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Active dietary-restriction labels
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    /// Active allergy labels
    #[serde(default)]
    pub allergies: Vec<String>,
    /// Preferred cuisine labels
    #[serde(default)]
    pub cuisine_preferences: Vec<String>,
    /// Preferred cooking-time band
    #[serde(default)]
    pub cooking_time: CookingTime,
    /// Cooking skill level
    #[serde(default)]
    pub skill_level: SkillLevel,
    /// Target number of servings
    #[serde(default = "default_serving_size")]
    pub serving_size: u32,
}

const fn default_serving_size() -> u32 {
    2
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            dietary_restrictions: Vec::new(),
            allergies: Vec::new(),
            cuisine_preferences: Vec::new(),
            cooking_time: CookingTime::default(),
            skill_level: SkillLevel::default(),
            serving_size: default_serving_size(),
        }
    }
}

impl UserPreferences {
    /// Add a dietary restriction label
    #[must_use]
    pub fn with_restriction(mut self, label: impl Into<String>) -> Self {
        self.dietary_restrictions.push(label.into());
        self
    }

    /// Add an allergy label
    #[must_use]
    pub fn with_allergy(mut self, label: impl Into<String>) -> Self {
        self.allergies.push(label.into());
        self
    }

    /// Add a preferred cuisine label
    #[must_use]
    pub fn with_cuisine(mut self, label: impl Into<String>) -> Self {
        self.cuisine_preferences.push(label.into());
        self
    }

    /// Set the cooking-time band
    #[must_use]
    pub const fn with_cooking_time(mut self, cooking_time: CookingTime) -> Self {
        self.cooking_time = cooking_time;
        self
    }

    /// Set the skill level
    #[must_use]
    pub const fn with_skill_level(mut self, skill_level: SkillLevel) -> Self {
        self.skill_level = skill_level;
        self
    }

    /// Set the target serving size
    #[must_use]
    pub const fn with_serving_size(mut self, serving_size: u32) -> Self {
        self.serving_size = serving_size;
        self
    }

    /// Whether a cuisine label is among the preferred cuisines
    #[must_use]
    pub fn prefers_cuisine(&self, cuisine: &str) -> bool {
        self.cuisine_preferences
            .iter()
            .any(|c| c.trim().eq_ignore_ascii_case(cuisine))
    }
}
