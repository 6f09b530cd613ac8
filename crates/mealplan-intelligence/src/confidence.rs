// ABOUTME: Confidence values and justification selection for ranked recipes
// ABOUTME: History boost, new-recipe damping and top-signal reason truncation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

use crate::config::ConfidenceConfig;
use crate::ensemble::EnsembleWeights;
use crate::scorers::{SignalScore, SignalScores, MAX_SCORE};

/// Signal score at or above which a signal counts as contributing
pub const CONTRIBUTING_SCORE: f64 = 50.0;

/// Confidence in [0, 1] for a final score on the 0-100 scale
///
/// `age_days` is `None` when the recipe's catalog age is unknown; such
/// recipes are never treated as new.
#[must_use]
pub fn confidence(
    final_score: f64,
    has_history_signal: bool,
    age_days: Option<i64>,
    config: &ConfidenceConfig,
) -> f64 {
    let mut value = (final_score / MAX_SCORE).clamp(0.0, 1.0);
    if has_history_signal {
        value = (value + config.history_boost).min(1.0);
    }
    if age_days.is_some_and(|age| age < config.new_recipe_age_days) {
        value *= config.new_recipe_damping;
    }
    value.clamp(0.0, 1.0)
}

/// Reasons from the contributing signals, in scorer order, truncated
///
/// Contributing signals carry a non-zero weight and score at least
/// [`CONTRIBUTING_SCORE`]. When none qualifies the signal with the largest
/// weighted contribution is used alone.
#[must_use]
pub fn select_reasons(
    scores: &SignalScores,
    weights: &EnsembleWeights,
    max_reasons: usize,
) -> Vec<String> {
    let mut sources: Vec<&SignalScore> = scores
        .iter()
        .filter(|(kind, signal)| {
            weights.weight(*kind) > 0.0 && signal.score >= CONTRIBUTING_SCORE
        })
        .map(|(_, signal)| signal)
        .collect();

    if sources.is_empty() {
        sources.push(scores.get(weights.dominant_signal(scores)));
    }

    sources
        .into_iter()
        .flat_map(|signal| signal.reasons.iter())
        .take(max_reasons)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal(score: f64, reasons: &[&str]) -> SignalScore {
        SignalScore::new(score, reasons.iter().map(|r| (*r).to_owned()).collect())
    }

    #[test]
    fn test_confidence_history_boost_caps_at_one() {
        let config = ConfidenceConfig::default();
        assert!((confidence(95.0, true, None, &config) - 1.0).abs() < f64::EPSILON);
        assert!((confidence(50.0, true, None, &config) - 0.6).abs() < 1e-9);
        assert!((confidence(50.0, false, None, &config) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_new_recipe_damping() {
        let config = ConfidenceConfig::default();
        assert!((confidence(50.0, false, Some(3), &config) - 0.4).abs() < 1e-9);
        assert!((confidence(50.0, false, Some(7), &config) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_reasons_follow_scorer_order_and_truncate() {
        let scores = SignalScores {
            content: signal(80.0, &["c1", "c2"]),
            behavioral: signal(40.0, &["b1"]),
            collaborative: signal(60.0, &["k1"]),
            contextual: signal(70.0, &["x1", "x2"]),
        };
        let reasons = select_reasons(&scores, &EnsembleWeights::FULL, 3);
        assert_eq!(reasons, vec!["c1", "c2", "k1"]);
    }

    #[test]
    fn test_reasons_skip_zero_weight_signals() {
        let scores = SignalScores {
            content: signal(30.0, &["c1"]),
            behavioral: signal(90.0, &["b1"]),
            collaborative: signal(60.0, &["k1"]),
            contextual: signal(90.0, &["x1"]),
        };
        let reasons = select_reasons(&scores, &EnsembleWeights::TWO_SIGNAL, 3);
        assert_eq!(reasons, vec!["k1"]);
    }

    #[test]
    fn test_reasons_fall_back_to_dominant_signal() {
        let scores = SignalScores {
            content: signal(40.0, &["c1"]),
            behavioral: signal(10.0, &["b1"]),
            collaborative: signal(20.0, &["k1"]),
            contextual: signal(10.0, &["x1"]),
        };
        let reasons = select_reasons(&scores, &EnsembleWeights::FULL, 3);
        assert_eq!(reasons, vec!["c1"]);
    }
}
