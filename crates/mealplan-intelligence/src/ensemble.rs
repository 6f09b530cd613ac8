// ABOUTME: Ensemble combiner blending signal scores with fixed weights and an incremental diversity term
// ABOUTME: Full five-term mode and the simplified content/collaborative two-signal mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

//! Ensemble combiner
//!
//! `final = Σ weight_i × score_i` with every score on the 0-100 scale.
//!
//! The diversity term is path dependent. Candidates are visited in descending
//! order of their diversity-free score; the first visited gets the maximum
//! diversity and each later one gets the complement of its highest
//! feature-vector similarity to the candidates visited before it. This pass
//! is sequential by construction.
//!
//! "Already accepted" means visited earlier in this walk. Combining runs
//! before the per-cuisine cap, so a candidate that [`crate::diversity::rerank`]
//! later drops still lowers the diversity of everything visited after it.

use mealplan_core::models::{Recipe, SignalKind};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::compliance::ComplianceReport;
use crate::config::ConfigError;
use crate::features::{FeatureVector, RecipeFeatures};
use crate::scorers::{SignalScores, MAX_SCORE};

/// Tolerance when checking that weights sum to one
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Which combiner configuration to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnsembleMode {
    /// Content, behavioral, collaborative, contextual and diversity
    #[default]
    Full,
    /// Content and collaborative only
    TwoSignal,
}

impl FromStr for EnsembleMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "full" => Ok(Self::Full),
            "two_signal" | "simple" | "simplified" => Ok(Self::TwoSignal),
            other => Err(ConfigError::Parse(format!("unknown ensemble mode '{other}'"))),
        }
    }
}

/// Linear weights of the ensemble
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnsembleWeights {
    /// Content-Affinity
    pub content: f64,
    /// Behavioral-History
    pub behavioral: f64,
    /// Collaborative-Proxy
    pub collaborative: f64,
    /// Contextual
    pub contextual: f64,
    /// Diversity term
    pub diversity: f64,
}

impl Default for EnsembleWeights {
    fn default() -> Self {
        Self::FULL
    }
}

impl EnsembleWeights {
    /// Five-term weights
    pub const FULL: Self = Self {
        content: 0.35,
        behavioral: 0.20,
        collaborative: 0.25,
        contextual: 0.15,
        diversity: 0.05,
    };

    /// Two-signal weights
    pub const TWO_SIGNAL: Self = Self {
        content: 0.60,
        behavioral: 0.0,
        collaborative: 0.40,
        contextual: 0.0,
        diversity: 0.0,
    };

    /// Weights of a mode
    #[must_use]
    pub const fn for_mode(mode: EnsembleMode) -> Self {
        match mode {
            EnsembleMode::Full => Self::FULL,
            EnsembleMode::TwoSignal => Self::TWO_SIGNAL,
        }
    }

    const fn all(&self) -> [f64; 5] {
        [
            self.content,
            self.behavioral,
            self.collaborative,
            self.contextual,
            self.diversity,
        ]
    }

    /// Check that weights are finite, non-negative and sum to 1.0
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWeights`] on violation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = self.all();
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::InvalidWeights(
                "ensemble weights must be finite and non-negative",
            ));
        }
        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(
                "ensemble weights must sum to 1.0",
            ));
        }
        Ok(())
    }

    /// Weight of one signal
    #[must_use]
    pub const fn weight(&self, kind: SignalKind) -> f64 {
        match kind {
            SignalKind::ContentAffinity => self.content,
            SignalKind::BehavioralHistory => self.behavioral,
            SignalKind::CollaborativeProxy => self.collaborative,
            SignalKind::Contextual => self.contextual,
        }
    }

    /// Weighted contribution of each signal, in evaluation order
    #[must_use]
    pub fn contributions(&self, scores: &SignalScores) -> [(SignalKind, f64); 4] {
        SignalKind::ALL.map(|kind| (kind, self.weight(kind) * scores.get(kind).score))
    }

    /// Weighted sum of the four signals, without diversity
    #[must_use]
    pub fn base_score(&self, scores: &SignalScores) -> f64 {
        self.contributions(scores).iter().map(|(_, c)| c).sum()
    }

    /// Final score from the four signals and a diversity value, all on 0-100
    #[must_use]
    pub fn combine(&self, scores: &SignalScores, diversity: f64) -> f64 {
        self.base_score(scores) + self.diversity * diversity
    }

    /// Signal with the largest weighted contribution; ties go to the earlier signal
    #[must_use]
    pub fn dominant_signal(&self, scores: &SignalScores) -> SignalKind {
        let mut best = (SignalKind::ContentAffinity, f64::NEG_INFINITY);
        for (kind, contribution) in self.contributions(scores) {
            if contribution > best.1 {
                best = (kind, contribution);
            }
        }
        best.0
    }
}

/// Diversity of a candidate against previously visited vectors, on 0-100
#[must_use]
pub fn diversity_score(candidate: &FeatureVector, visited: &[FeatureVector]) -> f64 {
    let max_similarity = visited
        .iter()
        .map(|other| candidate.similarity(other))
        .reduce(f64::max);
    match max_similarity {
        None => MAX_SCORE,
        Some(similarity) => (1.0 - similarity.clamp(0.0, 1.0)) * MAX_SCORE,
    }
}

/// A scored candidate moving through combination and re-ranking
#[derive(Debug, Clone)]
pub struct CombinedCandidate<'a> {
    /// Position among the screened candidates
    pub index: usize,
    /// The recipe
    pub recipe: &'a Recipe,
    /// Extracted features
    pub features: RecipeFeatures,
    /// Compliance report from screening
    pub report: ComplianceReport,
    /// The four signal scores
    pub scores: SignalScores,
    /// Weighted score without diversity
    pub base_score: f64,
    /// Diversity value assigned during combination
    pub diversity: f64,
    /// Final ensemble score
    pub final_score: f64,
}

impl<'a> CombinedCandidate<'a> {
    /// Wrap a scored recipe, computing its diversity-free score
    #[must_use]
    pub fn new(
        index: usize,
        recipe: &'a Recipe,
        features: RecipeFeatures,
        report: ComplianceReport,
        scores: SignalScores,
        weights: &EnsembleWeights,
    ) -> Self {
        let base_score = weights.base_score(&scores);
        Self {
            index,
            recipe,
            features,
            report,
            scores,
            base_score,
            diversity: 0.0,
            final_score: base_score,
        }
    }
}

/// Order by descending base score, then by input position
fn by_base_score(a: &CombinedCandidate<'_>, b: &CombinedCandidate<'_>) -> Ordering {
    b.base_score
        .total_cmp(&a.base_score)
        .then_with(|| a.index.cmp(&b.index))
}

/// Assign diversity terms along base-score order and compute final scores
///
/// Returns candidates in visiting order (descending base score).
#[must_use]
pub fn combine_all<'a>(
    mut candidates: Vec<CombinedCandidate<'a>>,
    weights: &EnsembleWeights,
) -> Vec<CombinedCandidate<'a>> {
    candidates.sort_by(by_base_score);

    let mut visited: Vec<FeatureVector> = Vec::with_capacity(candidates.len());
    for candidate in &mut candidates {
        let vector = candidate.features.vector;
        candidate.diversity = diversity_score(&vector, &visited);
        candidate.final_score = weights.combine(&candidate.scores, candidate.diversity);
        visited.push(vector);
    }
    candidates
}
