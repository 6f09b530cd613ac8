// ABOUTME: Independent signal scorers producing bounded scores with human-readable reasons
// ABOUTME: Shared score types and the per-request scoring context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

//! Signal scorers
//!
//! Each scorer is a pure function of one recipe and the request context and
//! returns a [`SignalScore`] on the 0-100 scale. No scorer reads another
//! candidate or another scorer's output.

/// History-variety, recency and affinity signal
pub mod behavioral;
/// Attribute popularity proxy
pub mod collaborative;
/// Preference-matching signal
pub mod content;
/// Meal time, season and day-of-week signal
pub mod contextual;

use chrono::NaiveDate;
use mealplan_core::models::{BehaviorProfile, MealType, SignalKind, UserPreferences};
use serde::{Deserialize, Serialize};

use crate::compliance::ComplianceRules;
use crate::history::HistoryProjection;

pub use collaborative::{AttributePopularity, PopularityProxy};

/// Upper bound of every signal score
pub const MAX_SCORE: f64 = 100.0;

/// Score and reasons emitted by one scorer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalScore {
    /// Score in [0, 100]
    pub score: f64,
    /// Reasons in the order the scorer found them
    pub reasons: Vec<String>,
}

impl SignalScore {
    /// Build a score, clamping into [0, 100]
    #[must_use]
    pub fn new(score: f64, reasons: Vec<String>) -> Self {
        let score = if score.is_finite() {
            score.clamp(0.0, MAX_SCORE)
        } else {
            0.0
        };
        Self { score, reasons }
    }

    /// Score without reasons
    #[must_use]
    pub fn bare(score: f64) -> Self {
        Self::new(score, Vec::new())
    }
}

/// All four signals of one candidate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalScores {
    /// Content-Affinity
    pub content: SignalScore,
    /// Behavioral-History
    pub behavioral: SignalScore,
    /// Collaborative-Proxy
    pub collaborative: SignalScore,
    /// Contextual
    pub contextual: SignalScore,
}

impl SignalScores {
    /// Signal by kind
    #[must_use]
    pub const fn get(&self, kind: SignalKind) -> &SignalScore {
        match kind {
            SignalKind::ContentAffinity => &self.content,
            SignalKind::BehavioralHistory => &self.behavioral,
            SignalKind::CollaborativeProxy => &self.collaborative,
            SignalKind::Contextual => &self.contextual,
        }
    }

    /// Signals in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = (SignalKind, &SignalScore)> {
        SignalKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

/// Everything a scorer may read besides the recipe itself
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    /// User preferences
    pub preferences: &'a UserPreferences,
    /// Parsed compliance rules of `preferences`
    pub rules: &'a ComplianceRules,
    /// History projection around the target date
    pub history: &'a HistoryProjection,
    /// Optional likes and views
    pub behavior: Option<&'a BehaviorProfile>,
    /// Date the meal is planned for
    pub target_date: NaiveDate,
    /// Slot being planned
    pub meal_type: MealType,
}
