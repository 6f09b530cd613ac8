// ABOUTME: Dietary-restriction and allergy compliance checks for recipes
// ABOUTME: Keyword substring matching with AND semantics across active labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

//! Compliance filter
//!
//! Allergy violations are fatal: a recipe containing an allergen keyword in
//! any ingredient name never reaches scoring. Dietary violations are checked
//! against ingredient names plus the recipe name and description and are
//! treated as a severe penalty rather than a hard exclusion when no candidate
//! satisfies every restriction (see [`screen`]).

use mealplan_core::models::{Recipe, UserPreferences};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::constants::{allergy_keywords, dietary_keywords};

/// Dietary restriction with a known keyword list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryRestriction {
    /// No meat or fish
    Vegetarian,
    /// No animal products
    Vegan,
    /// No wheat or gluten
    GlutenFree,
    /// No dairy
    DairyFree,
    /// No high-carbohydrate staples
    Keto,
}

impl DietaryRestriction {
    /// Interpret a free-text label, ignoring case, spaces and underscores
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "vegetarian" => Some(Self::Vegetarian),
            "vegan" => Some(Self::Vegan),
            "gluten-free" | "glutenfree" => Some(Self::GlutenFree),
            "dairy-free" | "dairyfree" => Some(Self::DairyFree),
            "keto" | "ketogenic" => Some(Self::Keto),
            _ => None,
        }
    }

    /// Keywords that violate this restriction
    #[must_use]
    pub const fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Vegetarian => dietary_keywords::VEGETARIAN,
            Self::Vegan => dietary_keywords::VEGAN,
            Self::GlutenFree => dietary_keywords::GLUTEN_FREE,
            Self::DairyFree => dietary_keywords::DAIRY_FREE,
            Self::Keto => dietary_keywords::KETO,
        }
    }

    /// Canonical label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::GlutenFree => "gluten-free",
            Self::DairyFree => "dairy-free",
            Self::Keto => "keto",
        }
    }
}

impl fmt::Display for DietaryRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Allergy with a known keyword list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Allergy {
    /// Tree nuts
    Nuts,
    /// Peanuts
    Peanuts,
    /// Shellfish
    Shellfish,
    /// Fish
    Fish,
    /// Eggs
    Eggs,
    /// Dairy
    Dairy,
    /// Soy
    Soy,
    /// Wheat and gluten
    Wheat,
}

impl Allergy {
    /// Interpret a free-text label, ignoring case and accepting common variants
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "nuts" | "nut" | "tree-nuts" | "tree-nut" => Some(Self::Nuts),
            "peanuts" | "peanut" => Some(Self::Peanuts),
            "shellfish" => Some(Self::Shellfish),
            "fish" => Some(Self::Fish),
            "eggs" | "egg" => Some(Self::Eggs),
            "dairy" | "milk" | "lactose" => Some(Self::Dairy),
            "soy" | "soya" => Some(Self::Soy),
            "wheat" | "gluten" | "wheat/gluten" => Some(Self::Wheat),
            _ => None,
        }
    }

    /// Keywords that trigger this allergy
    #[must_use]
    pub const fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Nuts => allergy_keywords::NUTS,
            Self::Peanuts => allergy_keywords::PEANUTS,
            Self::Shellfish => allergy_keywords::SHELLFISH,
            Self::Fish => allergy_keywords::FISH,
            Self::Eggs => allergy_keywords::EGGS,
            Self::Dairy => allergy_keywords::DAIRY,
            Self::Soy => allergy_keywords::SOY,
            Self::Wheat => allergy_keywords::WHEAT,
        }
    }
}

fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase().replace(['_', ' '], "-")
}

/// Whether any haystack contains any keyword
pub(crate) fn contains_any<S: AsRef<str>>(haystacks: &[S], keywords: &[&str]) -> bool {
    haystacks
        .iter()
        .any(|text| keywords.iter().any(|kw| text.as_ref().contains(kw)))
}

/// Restrictions and allergies recognised from a preference set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplianceRules {
    /// Recognised dietary restrictions, in label order
    pub restrictions: Vec<DietaryRestriction>,
    /// Recognised allergies, in label order
    pub allergies: Vec<Allergy>,
}

impl ComplianceRules {
    /// Interpret label lists; unknown labels carry no keywords and are ignored
    #[must_use]
    pub fn from_labels<S: AsRef<str>>(restrictions: &[S], allergies: &[S]) -> Self {
        let mut rules = Self::default();
        for label in restrictions {
            match DietaryRestriction::from_label(label.as_ref()) {
                Some(r) if !rules.restrictions.contains(&r) => rules.restrictions.push(r),
                Some(_) => {}
                None => debug!(label = label.as_ref(), "Ignoring unknown dietary restriction"),
            }
        }
        for label in allergies {
            match Allergy::from_label(label.as_ref()) {
                Some(a) if !rules.allergies.contains(&a) => rules.allergies.push(a),
                Some(_) => {}
                None => debug!(label = label.as_ref(), "Ignoring unknown allergy"),
            }
        }
        rules
    }

    /// Rules of a preference set
    #[must_use]
    pub fn from_preferences(preferences: &UserPreferences) -> Self {
        Self::from_labels(&preferences.dietary_restrictions, &preferences.allergies)
    }

    /// Whether no rule is active
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.restrictions.is_empty() && self.allergies.is_empty()
    }

    /// Evaluate one recipe
    #[must_use]
    pub fn check(&self, recipe: &Recipe) -> ComplianceReport {
        if self.is_empty() {
            return ComplianceReport::default();
        }

        let ingredients = recipe.ingredient_names_lower();
        let title = recipe.title_text_lower();

        let dietary_violations = self
            .restrictions
            .iter()
            .copied()
            .filter(|r| {
                contains_any(&ingredients, r.keywords())
                    || r.keywords().iter().any(|kw| title.contains(kw))
            })
            .collect();

        let allergy_violations = self
            .allergies
            .iter()
            .copied()
            .filter(|a| contains_any(&ingredients, a.keywords()))
            .collect();

        ComplianceReport {
            dietary_violations,
            allergy_violations,
        }
    }
}

/// Outcome of checking a recipe against compliance rules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplianceReport {
    /// Restrictions the recipe violates
    pub dietary_violations: Vec<DietaryRestriction>,
    /// Allergies the recipe triggers
    pub allergy_violations: Vec<Allergy>,
}

impl ComplianceReport {
    /// No allergen found
    #[must_use]
    pub fn is_allergy_safe(&self) -> bool {
        self.allergy_violations.is_empty()
    }

    /// Every dietary restriction satisfied
    #[must_use]
    pub fn is_dietary_compliant(&self) -> bool {
        self.dietary_violations.is_empty()
    }

    /// Both checks pass
    #[must_use]
    pub fn is_compliant(&self) -> bool {
        self.is_allergy_safe() && self.is_dietary_compliant()
    }
}

/// Strict filter: keep recipes that satisfy every restriction and allergy
///
/// No restrictions and no allergies keeps everything.
#[must_use]
pub fn filter<'a, S: AsRef<str>>(
    recipes: &'a [Recipe],
    restrictions: &[S],
    allergies: &[S],
) -> Vec<&'a Recipe> {
    let rules = ComplianceRules::from_labels(restrictions, allergies);
    recipes
        .iter()
        .filter(|recipe| rules.check(recipe).is_compliant())
        .collect()
}

/// A candidate that passed screening with its compliance report
#[derive(Debug, Clone)]
pub struct ScreenedCandidate<'a> {
    /// Position in the screened input
    pub index: usize,
    /// The recipe
    pub recipe: &'a Recipe,
    /// Its compliance report (dietary violations only when relaxed)
    pub report: ComplianceReport,
}

/// Result of screening a candidate batch
#[derive(Debug, Clone, Default)]
pub struct Screening<'a> {
    /// Candidates that may be scored, in input order
    pub candidates: Vec<ScreenedCandidate<'a>>,
    /// Recipes dropped for allergens
    pub allergy_excluded: usize,
    /// Recipes dropped for dietary violations
    pub dietary_excluded: usize,
    /// True when no allergy-safe recipe met every restriction and violators were kept
    pub dietary_relaxed: bool,
}

/// Screen candidates for scoring
///
/// Allergy violators are always removed. Dietary violators are removed when at
/// least one allergy-safe candidate satisfies every restriction; otherwise they
/// are kept so that Content-Affinity can rank them with its heavy penalty.
#[must_use]
pub fn screen<'a>(recipes: &[&'a Recipe], rules: &ComplianceRules) -> Screening<'a> {
    let mut screening = Screening::default();
    let mut safe: Vec<ScreenedCandidate<'a>> = Vec::with_capacity(recipes.len());

    for (index, &recipe) in recipes.iter().enumerate() {
        let report = rules.check(recipe);
        if report.is_allergy_safe() {
            safe.push(ScreenedCandidate {
                index,
                recipe,
                report,
            });
        } else {
            screening.allergy_excluded += 1;
        }
    }

    let any_dietary_compliant = safe.iter().any(|c| c.report.is_dietary_compliant());
    if any_dietary_compliant {
        let before = safe.len();
        safe.retain(|c| c.report.is_dietary_compliant());
        screening.dietary_excluded = before - safe.len();
    } else {
        screening.dietary_relaxed = !safe.is_empty() && !rules.restrictions.is_empty();
    }

    screening.candidates = safe;
    screening
}
