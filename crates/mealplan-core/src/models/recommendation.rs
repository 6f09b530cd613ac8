// ABOUTME: Output models of a ranking request
// ABOUTME: Defines ScoredCandidate and the SignalKind attribution tag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

use serde::{Deserialize, Serialize};
use std::fmt;

use super::recipe::Recipe;

/// Independent scoring signal that contributed to a ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    /// Recipe attributes against the user's stated preferences
    ContentAffinity,
    /// Cuisine variety and recency against the meal-plan history
    BehavioralHistory,
    /// Attribute-based popularity proxy (no cross-user data)
    CollaborativeProxy,
    /// Time of day, season and day of week
    Contextual,
}

impl SignalKind {
    /// Signals in evaluation order
    pub const ALL: [Self; 4] = [
        Self::ContentAffinity,
        Self::BehavioralHistory,
        Self::CollaborativeProxy,
        Self::Contextual,
    ];

    /// Short label for display
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ContentAffinity => "content",
            Self::BehavioralHistory => "behavioral",
            Self::CollaborativeProxy => "collaborative",
            Self::Contextual => "contextual",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ranked recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    /// The recommended recipe
    pub recipe: Recipe,
    /// Final ensemble score on a 0-100 scale
    pub score: f64,
    /// Confidence in [0, 1]
    pub confidence: f64,
    /// Up to three human-readable justifications
    pub reasons: Vec<String>,
    /// Signal with the largest weighted contribution
    pub signal: SignalKind,
}
