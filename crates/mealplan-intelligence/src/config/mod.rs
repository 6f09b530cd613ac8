// ABOUTME: Configuration module for mealplan-intelligence crate
// ABOUTME: Re-exports recommendation engine configuration and error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

/// Configuration error types
pub mod error;
/// Recommendation engine configuration
pub mod recommendation;

pub use error::ConfigError;
pub use recommendation::{
    ConfidenceConfig, DiversityConfig, EnsembleConfig, HistoryConfig, ParallelismConfig,
    RecommendationConfig, RecommendationLimits,
};
