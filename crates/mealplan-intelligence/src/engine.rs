// ABOUTME: Meal recommendation engine facade orchestrating the ranking pipeline
// ABOUTME: Filter, featurize, score, combine, diversify and finalize with a configurable popularity proxy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

//! Recommendation engine
//!
//! A request runs one pipeline, strictly in order:
//! filtered → featurized → scored → combined → diversified → finalized.
//! The engine holds configuration only; every request works on borrowed,
//! unmodified inputs and returns freshly built [`ScoredCandidate`]s.
//!
//! Per-candidate feature extraction and scoring may run on the rayon pool
//! once the candidate count reaches the configured threshold. Combination and
//! re-ranking always run sequentially.

use chrono::NaiveDate;
use mealplan_core::models::{
    BehaviorProfile, MealPlanEntry, MealType, Recipe, ScoredCandidate, UserPreferences,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::compliance::{screen, ComplianceRules, ScreenedCandidate};
use crate::confidence::{confidence, select_reasons};
use crate::config::{ConfigError, RecommendationConfig};
use crate::diversity::rerank;
use crate::ensemble::{combine_all, CombinedCandidate, EnsembleWeights};
use crate::features::extract;
use crate::history::HistoryProjection;
use crate::scorers::{
    behavioral, content, contextual, AttributePopularity, PopularityProxy, ScoringContext,
    SignalScores,
};

/// Inputs of one ranking request
#[derive(Debug, Clone, Copy)]
pub struct RankingRequest<'a> {
    /// Candidate recipes (any meal type; others are excluded)
    pub candidates: &'a [Recipe],
    /// Meal-plan history
    pub history: &'a [MealPlanEntry],
    /// User preferences
    pub preferences: &'a UserPreferences,
    /// Optional likes and views
    pub behavior: Option<&'a BehaviorProfile>,
    /// Date being planned
    pub target_date: NaiveDate,
    /// Slot being planned
    pub meal_type: MealType,
    /// Maximum result length; the configured default when `None`
    pub limit: Option<usize>,
}

impl<'a> RankingRequest<'a> {
    /// Create a request without behavior data, using the default limit
    #[must_use]
    pub const fn new(
        candidates: &'a [Recipe],
        history: &'a [MealPlanEntry],
        preferences: &'a UserPreferences,
        target_date: NaiveDate,
        meal_type: MealType,
    ) -> Self {
        Self {
            candidates,
            history,
            preferences,
            behavior: None,
            target_date,
            meal_type,
            limit: None,
        }
    }

    /// Attach likes and views
    #[must_use]
    pub const fn with_behavior(mut self, behavior: &'a BehaviorProfile) -> Self {
        self.behavior = Some(behavior);
        self
    }

    /// Set the maximum result length
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// A date and meal slot to rank for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MealSlot {
    /// Date being planned
    pub date: NaiveDate,
    /// Slot being planned
    pub meal_type: MealType,
}

/// Ranking of one slot in a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotRanking {
    /// The slot
    pub slot: MealSlot,
    /// Its ranked recommendations
    pub recommendations: Vec<ScoredCandidate>,
}

/// Meal recommendation engine with a configurable popularity proxy
pub struct MealRecommendationEngine<P: PopularityProxy = AttributePopularity> {
    proxy: P,
    config: RecommendationConfig,
    weights: EnsembleWeights,
}

impl MealRecommendationEngine {
    /// Create an engine with the attribute proxy and the environment configuration
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or the weights are invalid
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_proxy(AttributePopularity)
    }

    /// Create an engine with the attribute proxy and a custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn with_config(config: RecommendationConfig) -> Result<Self, ConfigError> {
        Self::with_proxy_and_config(AttributePopularity, config)
    }
}

impl<P: PopularityProxy> MealRecommendationEngine<P> {
    /// Create an engine with a custom proxy and the environment configuration
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or the weights are invalid
    pub fn with_proxy(proxy: P) -> Result<Self, ConfigError> {
        Self::with_proxy_and_config(proxy, RecommendationConfig::load()?)
    }

    /// Create an engine with a custom proxy and configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn with_proxy_and_config(
        proxy: P,
        config: RecommendationConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let weights = config.ensemble.effective_weights();
        Ok(Self {
            proxy,
            config,
            weights,
        })
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &RecommendationConfig {
        &self.config
    }

    /// Weights used by the combiner
    #[must_use]
    pub const fn weights(&self) -> &EnsembleWeights {
        &self.weights
    }

    /// Rank candidates for one slot
    ///
    /// Returns an empty list when no valid candidate matches the meal type,
    /// when every candidate contains an allergen, or when the limit is zero.
    #[must_use]
    pub fn rank(&self, request: &RankingRequest<'_>) -> Vec<ScoredCandidate> {
        let limit = request.limit.unwrap_or(self.config.limits.default_limit);
        if limit == 0 {
            return Vec::new();
        }

        // filtered
        let eligible = eligible_candidates(request.candidates, request.meal_type);
        if eligible.is_empty() {
            debug!(
                meal_type = %request.meal_type,
                "No valid candidates for meal type"
            );
            return Vec::new();
        }

        let rules = ComplianceRules::from_preferences(request.preferences);
        let screening = screen(&eligible, &rules);
        if screening.dietary_relaxed {
            warn!(
                candidates = screening.candidates.len(),
                "No candidate satisfies every dietary restriction; ranking violators with penalty"
            );
        }
        debug!(
            eligible = eligible.len(),
            allergy_excluded = screening.allergy_excluded,
            dietary_excluded = screening.dietary_excluded,
            "Compliance screening complete"
        );
        if screening.candidates.is_empty() {
            return Vec::new();
        }

        // featurized + scored
        let history = HistoryProjection::new(
            request.history,
            request.target_date,
            self.config.history.recent_window_days,
        );
        let ctx = ScoringContext {
            preferences: request.preferences,
            rules: &rules,
            history: &history,
            behavior: request.behavior,
            target_date: request.target_date,
            meal_type: request.meal_type,
        };
        let scored = self.score_candidates(&screening.candidates, &ctx);

        // combined + diversified
        let combined = combine_all(scored, &self.weights);
        let accepted = rerank(combined, self.config.diversity.max_per_cuisine, limit);

        // finalized
        let results: Vec<ScoredCandidate> = accepted
            .iter()
            .map(|candidate| self.finalize(candidate, &ctx))
            .collect();

        info!(
            meal_type = %request.meal_type,
            target_date = %request.target_date,
            candidates = request.candidates.len(),
            results = results.len(),
            "Ranked meal recommendations"
        );
        results
    }

    /// Rank several slots over the same inputs, in parallel across slots
    ///
    /// `template` supplies candidates, history, preferences, behavior and
    /// limit; its date and meal type are replaced per slot. Output follows
    /// slot order.
    #[must_use]
    pub fn rank_slots(
        &self,
        template: &RankingRequest<'_>,
        slots: &[MealSlot],
    ) -> Vec<SlotRanking> {
        slots
            .par_iter()
            .map(|slot| {
                let request = RankingRequest {
                    target_date: slot.date,
                    meal_type: slot.meal_type,
                    ..*template
                };
                SlotRanking {
                    slot: *slot,
                    recommendations: self.rank(&request),
                }
            })
            .collect()
    }

    fn score_candidates<'a>(
        &self,
        candidates: &[ScreenedCandidate<'a>],
        ctx: &ScoringContext<'_>,
    ) -> Vec<CombinedCandidate<'a>> {
        if candidates.len() >= self.config.parallelism.parallel_threshold {
            debug!(count = candidates.len(), "Scoring candidates in parallel");
            candidates
                .par_iter()
                .map(|candidate| self.score_one(candidate, ctx))
                .collect()
        } else {
            candidates
                .iter()
                .map(|candidate| self.score_one(candidate, ctx))
                .collect()
        }
    }

    fn score_one<'a>(
        &self,
        candidate: &ScreenedCandidate<'a>,
        ctx: &ScoringContext<'_>,
    ) -> CombinedCandidate<'a> {
        let recipe = candidate.recipe;
        let features = extract(recipe);
        let scores = SignalScores {
            content: content::score(recipe, &features, &candidate.report, ctx),
            behavioral: behavioral::score(recipe, &features, ctx),
            collaborative: self.proxy.score(recipe),
            contextual: contextual::score(recipe, ctx),
        };
        CombinedCandidate::new(
            candidate.index,
            recipe,
            features,
            candidate.report.clone(),
            scores,
            &self.weights,
        )
    }

    fn finalize(
        &self,
        candidate: &CombinedCandidate<'_>,
        ctx: &ScoringContext<'_>,
    ) -> ScoredCandidate {
        let recipe = candidate.recipe;
        let has_history = ctx.history.contains_recipe(&recipe.id)
            || ctx.behavior.is_some_and(|b| b.has_signal(&recipe.id));

        ScoredCandidate {
            recipe: recipe.clone(),
            score: candidate.final_score,
            confidence: confidence(
                candidate.final_score,
                has_history,
                recipe.age_days(ctx.target_date),
                &self.config.confidence,
            ),
            reasons: select_reasons(
                &candidate.scores,
                &self.weights,
                self.config.limits.max_reasons,
            ),
            signal: self.weights.dominant_signal(&candidate.scores),
        }
    }
}

/// Candidates of the requested meal type that pass record validation
fn eligible_candidates(candidates: &[Recipe], meal_type: MealType) -> Vec<&Recipe> {
    candidates
        .iter()
        .filter(|recipe| recipe.category == meal_type)
        .filter(|recipe| match recipe.validate() {
            Ok(()) => true,
            Err(e) => {
                warn!(recipe_id = %recipe.id, error = %e, "Skipping invalid recipe");
                false
            }
        })
        .collect()
}

/// Rank candidates with the default engine
///
/// Convenience entry point over [`MealRecommendationEngine::rank`] using the
/// attribute proxy and the environment configuration.
///
/// # Errors
///
/// Returns an error if the environment configuration is invalid
pub fn rank(
    candidates: &[Recipe],
    history: &[MealPlanEntry],
    preferences: &UserPreferences,
    target_date: NaiveDate,
    meal_type: MealType,
    limit: usize,
) -> Result<Vec<ScoredCandidate>, ConfigError> {
    let request = RankingRequest::new(candidates, history, preferences, target_date, meal_type)
        .with_limit(limit);
    Ok(MealRecommendationEngine::new()?.rank(&request))
}
