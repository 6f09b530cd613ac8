// ABOUTME: Meal recommendation engine configuration with env overrides and validation
// ABOUTME: Ensemble mode and weights, history window, cuisine cap, limits, confidence and parallelism
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

//! Recommendation Engine Configuration
//!
//! Defaults reproduce the documented heuristics. Every field can be
//! overridden with a `MEALPLAN_*` environment variable. [`RecommendationConfig::load`]
//! validates the result and returns the violation instead of substituting defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::warn;

use super::error::ConfigError;
use crate::ensemble::{EnsembleMode, EnsembleWeights};

/// Recommendation Engine Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Signal combination
    pub ensemble: EnsembleConfig,
    /// History projection
    pub history: HistoryConfig,
    /// Per-cuisine cap
    pub diversity: DiversityConfig,
    /// Output sizes
    pub limits: RecommendationLimits,
    /// Confidence adjustments
    pub confidence: ConfidenceConfig,
    /// Parallel scoring
    pub parallelism: ParallelismConfig,
}

/// Ensemble mode and full-mode weights
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EnsembleConfig {
    /// Selected combiner mode
    pub mode: EnsembleMode,
    /// Weights used in [`EnsembleMode::Full`]
    pub weights: EnsembleWeights,
}

impl EnsembleConfig {
    /// Weights for the selected mode
    #[must_use]
    pub const fn effective_weights(&self) -> EnsembleWeights {
        match self.mode {
            EnsembleMode::Full => self.weights,
            EnsembleMode::TwoSignal => EnsembleWeights::TWO_SIGNAL,
        }
    }
}

/// History projection settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Trailing days counted as "recent"
    pub recent_window_days: u32,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            recent_window_days: 7,
        }
    }
}

/// Cuisine diversity settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiversityConfig {
    /// Maximum accepted recipes sharing one inferred cuisine
    pub max_per_cuisine: usize,
}

impl Default for DiversityConfig {
    fn default() -> Self {
        Self { max_per_cuisine: 2 }
    }
}

/// Limits on recommendation output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationLimits {
    /// Result length when the request does not set one
    pub default_limit: usize,
    /// Reasons kept per recommendation
    pub max_reasons: usize,
}

impl Default for RecommendationLimits {
    fn default() -> Self {
        Self {
            default_limit: 6,
            max_reasons: 3,
        }
    }
}

/// Confidence adjustments
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceConfig {
    /// Added when the user has any history with the recipe
    pub history_boost: f64,
    /// Multiplier for recipes younger than `new_recipe_age_days`
    pub new_recipe_damping: f64,
    /// Age in days below which a recipe counts as new
    pub new_recipe_age_days: i64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            history_boost: 0.1,
            new_recipe_damping: 0.8,
            new_recipe_age_days: 7,
        }
    }
}

/// Parallel scoring settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParallelismConfig {
    /// Candidate count at which per-candidate scoring moves to the rayon pool
    pub parallel_threshold: usize,
}

impl Default for ParallelismConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 64,
        }
    }
}

impl RecommendationConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or the result fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let loaded = Self::default()
            .apply_env_overrides()
            .and_then(|config| config.validate().map(|()| config));
        if let Err(e) = &loaded {
            warn!(error = %e, "Rejected recommendation config overrides");
        }
        loaded
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ensemble.weights.validate()?;

        if self.history.recent_window_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "recent_window_days must be at least 1",
            ));
        }
        if self.diversity.max_per_cuisine == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_per_cuisine must be at least 1",
            ));
        }
        if self.limits.max_reasons == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_reasons must be at least 1",
            ));
        }

        let c = &self.confidence;
        if !(0.0..=1.0).contains(&c.history_boost) {
            return Err(ConfigError::InvalidRange(
                "history_boost must be within [0, 1]",
            ));
        }
        if !(c.new_recipe_damping > 0.0 && c.new_recipe_damping <= 1.0) {
            return Err(ConfigError::InvalidRange(
                "new_recipe_damping must be within (0, 1]",
            ));
        }
        if c.new_recipe_age_days < 0 {
            return Err(ConfigError::ValueOutOfRange(
                "new_recipe_age_days must not be negative",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("MEALPLAN_ENSEMBLE_MODE", &mut self.ensemble.mode)?;

        let weights = &mut self.ensemble.weights;
        Self::apply_env_var("MEALPLAN_WEIGHT_CONTENT", &mut weights.content)?;
        Self::apply_env_var("MEALPLAN_WEIGHT_BEHAVIORAL", &mut weights.behavioral)?;
        Self::apply_env_var("MEALPLAN_WEIGHT_COLLABORATIVE", &mut weights.collaborative)?;
        Self::apply_env_var("MEALPLAN_WEIGHT_CONTEXTUAL", &mut weights.contextual)?;
        Self::apply_env_var("MEALPLAN_WEIGHT_DIVERSITY", &mut weights.diversity)?;

        Self::apply_env_var(
            "MEALPLAN_RECENT_WINDOW_DAYS",
            &mut self.history.recent_window_days,
        )?;
        Self::apply_env_var(
            "MEALPLAN_MAX_PER_CUISINE",
            &mut self.diversity.max_per_cuisine,
        )?;
        Self::apply_env_var("MEALPLAN_RESULT_LIMIT", &mut self.limits.default_limit)?;
        Self::apply_env_var("MEALPLAN_MAX_REASONS", &mut self.limits.max_reasons)?;

        Self::apply_env_var(
            "MEALPLAN_CONFIDENCE_HISTORY_BOOST",
            &mut self.confidence.history_boost,
        )?;
        Self::apply_env_var(
            "MEALPLAN_CONFIDENCE_NEW_DAMPING",
            &mut self.confidence.new_recipe_damping,
        )?;
        Self::apply_env_var(
            "MEALPLAN_NEW_RECIPE_AGE_DAYS",
            &mut self.confidence.new_recipe_age_days,
        )?;

        Self::apply_env_var(
            "MEALPLAN_PARALLEL_THRESHOLD",
            &mut self.parallelism.parallel_threshold,
        )?;

        Ok(self)
    }
}
