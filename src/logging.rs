// ABOUTME: Logging configuration and structured logging setup for the mealplan tools
// ABOUTME: Configures log levels, formatters and the stderr writer, plus ranking event helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

//! Logging configuration with structured output
//!
//! Library crates only emit `tracing` events. Binaries pick a format and
//! install the subscriber once at startup. Output goes to stderr so ranked
//! results on stdout stay machine-readable.

use std::env;
use std::io;
use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use mealplan_core::models::MealType;
use serde_json::json;
use tracing::{debug, info, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name reported in startup events
pub const SERVICE_NAME: &str = "mealplan";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` lines
    Json,
    /// Multi-line human format
    Pretty,
    /// Single-line human format
    Compact,
}

impl LogFormat {
    /// Parse a format name, defaulting to compact
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Compact,
            include_location: false,
            include_thread: false,
            service_name: SERVICE_NAME.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
        let format = env::var("LOG_FORMAT")
            .map_or(LogFormat::Compact, |name| LogFormat::from_name(&name));

        Self {
            level,
            format,
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: env::var("LOG_INCLUDE_THREAD").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| SERVICE_NAME.into()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_owned()),
        }
    }

    /// Override the level, keeping everything else
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    fn env_filter(&self) -> EnvFilter {
        let base = env::var("RUST_LOG").map_or_else(
            |_| EnvFilter::new(&self.level),
            |directive| EnvFilter::new(&directive),
        );
        ["mealplan", "mealplan_core", "mealplan_intelligence"]
            .into_iter()
            .fold(base, |filter, target| {
                filter.add_directive(
                    format!("{target}={}", self.level)
                        .parse()
                        .unwrap_or_else(|_| Level::INFO.into()),
                )
            })
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => {
                let layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .json();
                registry.with(layer).try_init()?;
            }
            LogFormat::Pretty => {
                let layer = fmt::layer()
                    .pretty()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr);
                registry.with(layer).try_init()?;
            }
            LogFormat::Compact => {
                let layer = fmt::layer()
                    .compact()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(false)
                    .with_writer(io::stderr);
                registry.with(layer).try_init()?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        let summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "location": self.include_location,
                "thread": self.include_thread,
            }
        });
        debug!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            "Logging initialized: {summary}"
        );
    }
}

/// Initialize logging with default configuration
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_default() -> Result<()> {
    LoggingConfig::default().init()
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Structured events for ranking requests
pub struct RecommendationLogger;

impl RecommendationLogger {
    /// Log one completed ranking request
    pub fn log_ranking(
        meal_type: MealType,
        target_date: NaiveDate,
        candidates: usize,
        results: usize,
        elapsed: Duration,
    ) {
        info!(
            ranking.meal_type = %meal_type,
            ranking.target_date = %target_date,
            ranking.candidates = candidates,
            ranking.results = results,
            ranking.duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            "Ranking request"
        );
    }

    /// Log a collaborator store load
    pub fn log_store_load(store: &str, path: &str, loaded: usize, skipped: usize) {
        info!(
            store.name = %store,
            store.path = %path,
            store.loaded = loaded,
            store.skipped = skipped,
            "Store loaded"
        );
    }
}
