// ABOUTME: Mealplan CLI - rank catalog recipes for a meal slot from JSON files
// ABOUTME: Provides the rank and inspect subcommands over the recommendation engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors
//!
//! Usage:
//! ```bash
//! # Rank dinner recipes for a date
//! mealplan-cli rank --recipes demos/recipes.json --date 2025-06-11 --meal dinner
//!
//! # Include history and preferences, print JSON
//! mealplan-cli rank --recipes demos/recipes.json --history demos/history.json \
//!     --preferences demos/preferences.json --date 2025-06-11 --meal breakfast --format json
//!
//! # Use the simplified two-signal ensemble
//! mealplan-cli rank --recipes demos/recipes.json --date 2025-06-11 --meal lunch --two-signal
//!
//! # Show the features the engine derives for each recipe
//! mealplan-cli inspect --recipes demos/recipes.json
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use mealplan::logging::LoggingConfig;
use mealplan::mealplan_core::models::MealType;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "mealplan-cli",
    about = "Meal plan recommendation CLI",
    long_about = "Rank recipes from a JSON catalog for one meal slot, honoring dietary restrictions, allergies and recent history."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Output format for ranked results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Rank recipes for one date and meal slot
    Rank {
        /// Recipe catalog (JSON array)
        #[arg(long)]
        recipes: PathBuf,

        /// Meal-plan history (JSON array)
        #[arg(long)]
        history: Option<PathBuf>,

        /// User preferences (JSON object)
        #[arg(long)]
        preferences: Option<PathBuf>,

        /// Recipe likes and views (JSON object)
        #[arg(long)]
        behavior: Option<PathBuf>,

        /// Date being planned (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,

        /// Meal slot (breakfast, lunch, dinner, snack)
        #[arg(long)]
        meal: MealType,

        /// Maximum number of recommendations
        #[arg(long)]
        limit: Option<usize>,

        /// Use the content and collaborative signals only
        #[arg(long)]
        two_signal: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show derived features for every recipe in a catalog
    Inspect {
        /// Recipe catalog (JSON array)
        #[arg(long)]
        recipes: PathBuf,

        /// Date used for the seasonal fraction (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    LoggingConfig::from_env().with_level(level).init()?;
    debug!("Mealplan CLI");

    match cli.command {
        Command::Rank {
            recipes,
            history,
            preferences,
            behavior,
            date,
            meal,
            limit,
            two_signal,
            format,
        } => commands::rank::run(&commands::rank::RankArgs {
            recipes,
            history,
            preferences,
            behavior,
            date,
            meal,
            limit,
            two_signal,
            format,
        }),
        Command::Inspect { recipes, date } => commands::inspect::run(&recipes, date),
    }
}
