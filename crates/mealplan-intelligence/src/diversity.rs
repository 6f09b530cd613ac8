// ABOUTME: Diversity re-ranker capping same-cuisine recipes in the final list
// ABOUTME: Walks candidates by descending final score and drops those over the cuisine cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

use std::collections::HashMap;

use crate::ensemble::CombinedCandidate;
use crate::features::Cuisine;

/// Per-cuisine cap and length limit over combined candidates
///
/// Candidates are visited in descending final score (stable, so earlier
/// visiting order breaks ties). A candidate whose cuisine already has
/// `max_per_cuisine` accepted entries is dropped, not moved. The output holds
/// at most `limit` entries and stays sorted by final score.
#[must_use]
pub fn rerank(
    mut candidates: Vec<CombinedCandidate<'_>>,
    max_per_cuisine: usize,
    limit: usize,
) -> Vec<CombinedCandidate<'_>> {
    candidates.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));

    let mut per_cuisine: HashMap<Cuisine, usize> = HashMap::new();
    let mut accepted = Vec::with_capacity(limit.min(candidates.len()));

    for candidate in candidates {
        if accepted.len() >= limit {
            break;
        }
        let count = per_cuisine.entry(candidate.features.cuisine).or_insert(0);
        if *count < max_per_cuisine {
            *count += 1;
            accepted.push(candidate);
        }
    }
    accepted
}
