// ABOUTME: Integration tests for the ranking pipeline's observable guarantees
// ABOUTME: Allergy exclusion, meal-type filtering, determinism, cuisine cap, ordering and bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::HashMap;

use chrono::{Duration, TimeZone, Utc};
use common::{days_before, dinner_catalog, engine, mixed_catalog, recipe, target_date};
use mealplan::mealplan_core::models::{
    BehaviorProfile, MealPlanEntry, MealType, Recipe, ScoredCandidate, SignalKind,
    UserPreferences,
};
use mealplan::mealplan_intelligence::features::extract;
use mealplan::mealplan_intelligence::{
    rank, EnsembleMode, MealRecommendationEngine, MealSlot, RankingRequest, RecommendationConfig,
};

fn rank_dinner(prefs: &UserPreferences, history: &[MealPlanEntry], limit: usize) -> Vec<ScoredCandidate> {
    let catalog = dinner_catalog();
    let request = RankingRequest::new(&catalog, history, prefs, target_date(), MealType::Dinner)
        .with_limit(limit);
    engine().rank(&request)
}

fn ids(results: &[ScoredCandidate]) -> Vec<&str> {
    results.iter().map(|c| c.recipe.id.as_str()).collect()
}

// ============================================================================
// Compliance
// ============================================================================

#[test]
fn test_allergen_recipes_never_returned() {
    let prefs = UserPreferences::default().with_allergy("peanuts");
    for limit in [1, 3, 10, 50] {
        let results = rank_dinner(&prefs, &[], limit);
        assert!(!ids(&results).contains(&"d8"), "limit {limit}");
    }
}

#[test]
fn test_every_candidate_allergic_yields_empty() {
    let catalog = vec![
        recipe("p1", "Satay", MealType::Dinner, &["peanut sauce", "chicken"], 30),
        recipe("p2", "Peanut Noodles", MealType::Dinner, &["noodles", "peanut butter"], 15),
    ];
    let prefs = UserPreferences::default().with_allergy("Peanuts");
    let request = RankingRequest::new(&catalog, &[], &prefs, target_date(), MealType::Dinner);
    assert!(engine().rank(&request).is_empty());
}

#[test]
fn test_vegan_breakfast_excludes_eggs() {
    let catalog = mixed_catalog();
    let prefs = UserPreferences::default().with_restriction("Vegan");
    let request =
        RankingRequest::new(&catalog, &[], &prefs, target_date(), MealType::Breakfast);

    let results = engine().rank(&request);

    assert!(ids(&results).contains(&"b1"));
    assert!(!ids(&results).contains(&"b2"));
    let toast = results.iter().find(|c| c.recipe.id == "b1").unwrap();
    assert_eq!(toast.reasons[0], "Matches your Vegan preferences");
}

#[test]
fn test_vegetarian_dinner_excludes_meat() {
    let prefs = UserPreferences::default().with_restriction("vegetarian");
    let results = rank_dinner(&prefs, &[], 10);
    let returned = ids(&results);
    for meat in ["d6", "d10"] {
        assert!(!returned.contains(&meat), "{meat} should be excluded");
    }
}

#[test]
fn test_dietary_fallback_keeps_violators_when_nothing_complies() {
    let catalog = vec![
        recipe("m1", "Beef Stew", MealType::Dinner, &["beef", "carrot"], 60),
        recipe("m2", "Roast Chicken", MealType::Dinner, &["chicken", "potato"], 70),
    ];
    let prefs = UserPreferences::default().with_restriction("vegetarian");
    let request = RankingRequest::new(&catalog, &[], &prefs, target_date(), MealType::Dinner);

    let results = engine().rank(&request);

    assert_eq!(results.len(), 2);
    assert!(results
        .iter()
        .all(|c| c.reasons.iter().any(|r| r.contains("outside your vegetarian diet"))));
}

// ============================================================================
// Filtering and validation
// ============================================================================

#[test]
fn test_only_requested_meal_type_returned() {
    let catalog = mixed_catalog();
    let prefs = UserPreferences::default();
    for meal in MealType::ALL {
        let request = RankingRequest::new(&catalog, &[], &prefs, target_date(), meal)
            .with_limit(20);
        let results = engine().rank(&request);
        assert!(!results.is_empty());
        assert!(results.iter().all(|c| c.recipe.category == meal));
    }
}

#[test]
fn test_invalid_records_are_skipped() {
    let mut catalog = dinner_catalog();
    catalog.push(Recipe::new("bad", "No Servings", MealType::Dinner, 0));
    catalog.push(Recipe::new("", "No Id", MealType::Dinner, 2));
    let prefs = UserPreferences::default();
    let request = RankingRequest::new(&catalog, &[], &prefs, target_date(), MealType::Dinner)
        .with_limit(20);

    let results = engine().rank(&request);

    assert!(!results.is_empty());
    assert!(results.iter().all(|c| !c.recipe.id.is_empty() && c.recipe.id != "bad"));
}

#[test]
fn test_recipe_without_ingredients_still_ranks() {
    let catalog = vec![Recipe::new("e", "Chef's Surprise", MealType::Dinner, 2)];
    let prefs = UserPreferences::default().with_restriction("vegan");
    let request = RankingRequest::new(&catalog, &[], &prefs, target_date(), MealType::Dinner);

    let results = engine().rank(&request);

    assert_eq!(results.len(), 1);
    assert!(results[0].score.is_finite());
    assert!((0.0..=100.0).contains(&results[0].score));
}

#[test]
fn test_empty_inputs() {
    let prefs = UserPreferences::default();
    let request = RankingRequest::new(&[], &[], &prefs, target_date(), MealType::Lunch);
    assert!(engine().rank(&request).is_empty());
    assert!(rank_dinner(&prefs, &[], 0).is_empty());
}

// ============================================================================
// Ordering, bounds and diversity
// ============================================================================

#[test]
fn test_length_and_ordering() {
    let prefs = UserPreferences::default().with_cuisine("Italian");
    for limit in 1..=12 {
        let results = rank_dinner(&prefs, &[], limit);
        assert!(results.len() <= limit);
        assert!(results.len() <= dinner_catalog().len());
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    }
}

#[test]
fn test_default_limit_applies() {
    let catalog = dinner_catalog();
    let prefs = UserPreferences::default();
    let request = RankingRequest::new(&catalog, &[], &prefs, target_date(), MealType::Dinner);
    assert!(engine().rank(&request).len() <= RecommendationConfig::default().limits.default_limit);
}

#[test]
fn test_cuisine_cap_respected() {
    let prefs = UserPreferences::default().with_cuisine("Italian");
    let results = rank_dinner(&prefs, &[], 10);

    let mut per_cuisine = HashMap::new();
    for candidate in &results {
        *per_cuisine.entry(extract(&candidate.recipe).cuisine).or_insert(0) += 1;
    }
    assert!(per_cuisine.values().all(|&count| count <= 2));
}

#[test]
fn test_scores_confidence_and_reasons_bounded() {
    let history = vec![MealPlanEntry::new(days_before(1))
        .with_meal(MealType::Dinner, dinner_catalog()[3].clone())];
    let results = rank_dinner(&UserPreferences::default(), &history, 10);
    for candidate in &results {
        assert!((0.0..=100.0).contains(&candidate.score));
        assert!((0.0..=1.0).contains(&candidate.confidence));
        assert!(candidate.reasons.len() <= 3);
    }
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_identical_inputs_identical_outputs() {
    let prefs = UserPreferences::default()
        .with_restriction("vegetarian")
        .with_cuisine("Asian");
    let history = vec![
        MealPlanEntry::new(days_before(2)).with_meal(MealType::Dinner, dinner_catalog()[0].clone()),
        MealPlanEntry::new(days_before(9)).with_meal(MealType::Dinner, dinner_catalog()[4].clone()),
    ];
    let first = rank_dinner(&prefs, &history, 6);
    let second = rank_dinner(&prefs, &history, 6);
    assert_eq!(first, second);
}

#[test]
fn test_parallel_scoring_matches_sequential() {
    let catalog = dinner_catalog();
    let prefs = UserPreferences::default().with_cuisine("Mexican");
    let request = RankingRequest::new(&catalog, &[], &prefs, target_date(), MealType::Dinner)
        .with_limit(10);

    let mut parallel = RecommendationConfig::default();
    parallel.parallelism.parallel_threshold = 1;
    let mut sequential = RecommendationConfig::default();
    sequential.parallelism.parallel_threshold = usize::MAX;

    let a = MealRecommendationEngine::with_config(parallel).unwrap().rank(&request);
    let b = MealRecommendationEngine::with_config(sequential).unwrap().rank(&request);
    assert_eq!(a, b);
}

// ============================================================================
// History, behavior and confidence
// ============================================================================

#[test]
fn test_recent_meal_lowers_score() {
    let stir_fry = dinner_catalog()[3].clone();
    let catalog = vec![stir_fry.clone()];
    let prefs = UserPreferences::default();
    let history = vec![MealPlanEntry::new(days_before(1)).with_meal(MealType::Dinner, stir_fry)];

    let fresh = engine().rank(&RankingRequest::new(
        &catalog,
        &[],
        &prefs,
        target_date(),
        MealType::Dinner,
    ));
    let repeated = engine().rank(&RankingRequest::new(
        &catalog,
        &history,
        &prefs,
        target_date(),
        MealType::Dinner,
    ));

    assert!(repeated[0].score < fresh[0].score);
}

#[test]
fn test_new_recipe_confidence_is_damped() {
    let base = dinner_catalog()[3].clone();
    let created = |days: i64| {
        let date = target_date() - Duration::days(days);
        Utc.from_utc_datetime(&date.and_hms_opt(12, 0, 0).unwrap())
    };
    let new_recipe = vec![base.clone().with_created_at(created(2))];
    let old_recipe = vec![base.with_created_at(created(60))];
    let prefs = UserPreferences::default();

    let new_rank = engine().rank(&RankingRequest::new(
        &new_recipe,
        &[],
        &prefs,
        target_date(),
        MealType::Dinner,
    ));
    let old_rank = engine().rank(&RankingRequest::new(
        &old_recipe,
        &[],
        &prefs,
        target_date(),
        MealType::Dinner,
    ));

    assert!((new_rank[0].score - old_rank[0].score).abs() < 1e-9);
    assert!((new_rank[0].confidence - old_rank[0].confidence * 0.8).abs() < 1e-9);
}

#[test]
fn test_liked_recipe_gains_score_and_confidence() {
    let catalog = vec![dinner_catalog()[6].clone()];
    let prefs = UserPreferences::default();
    let behavior = BehaviorProfile::default().with_like("d7", 1.0);

    let plain = engine().rank(&RankingRequest::new(
        &catalog,
        &[],
        &prefs,
        target_date(),
        MealType::Dinner,
    ));
    let liked = engine().rank(
        &RankingRequest::new(&catalog, &[], &prefs, target_date(), MealType::Dinner)
            .with_behavior(&behavior),
    );

    assert!(liked[0].score > plain[0].score);
    assert!(liked[0].confidence > plain[0].confidence);
}

// ============================================================================
// Modes and entry points
// ============================================================================

#[test]
fn test_two_signal_mode_attributes_only_active_signals() {
    let mut config = RecommendationConfig::default();
    config.ensemble.mode = EnsembleMode::TwoSignal;
    let engine = MealRecommendationEngine::with_config(config).unwrap();
    let catalog = dinner_catalog();
    let prefs = UserPreferences::default();
    let request = RankingRequest::new(&catalog, &[], &prefs, target_date(), MealType::Dinner)
        .with_limit(10);

    let results = engine.rank(&request);

    assert!(!results.is_empty());
    assert!(results.iter().all(|c| matches!(
        c.signal,
        SignalKind::ContentAffinity | SignalKind::CollaborativeProxy
    )));
}

#[test]
fn test_free_rank_function() {
    let catalog = mixed_catalog();
    let prefs = UserPreferences::default();
    let results = rank(&catalog, &[], &prefs, target_date(), MealType::Lunch, 5).unwrap();
    assert!(!results.is_empty());
    assert!(results.len() <= 2);
}

#[test]
fn test_rank_slots_covers_a_week() {
    let catalog = mixed_catalog();
    let prefs = UserPreferences::default();
    let template = RankingRequest::new(&catalog, &[], &prefs, target_date(), MealType::Dinner)
        .with_limit(3);
    let slots: Vec<MealSlot> = (0..7)
        .map(|day| MealSlot {
            date: target_date() + Duration::days(day),
            meal_type: MealType::Dinner,
        })
        .collect();

    let rankings = engine().rank_slots(&template, &slots);

    assert_eq!(rankings.len(), 7);
    for (ranking, slot) in rankings.iter().zip(&slots) {
        assert_eq!(ranking.slot, *slot);
        assert_eq!(ranking.recommendations.len(), 3);
    }
}
