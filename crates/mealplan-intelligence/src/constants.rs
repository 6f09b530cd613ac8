// ABOUTME: Keyword tables and scoring constants for recipe ranking heuristics
// ABOUTME: Dietary, allergy, cuisine, seasonal and staple keyword lists plus signal bonuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The mealplan Authors

//! Keyword tables and scoring constants
//!
//! All keyword matching is lowercase substring matching. The lists are
//! deliberately short; over- and under-matching ("eggplant" contains "egg")
//! is a known approximation of the heuristics.

/// Ingredient and title keywords excluded by each dietary restriction
pub mod dietary_keywords {
    /// Meat and fish keywords excluded by a vegetarian diet
    pub const VEGETARIAN: &[&str] = &["chicken", "beef", "pork", "fish", "meat", "bacon", "ham"];

    /// Animal-product keywords excluded by a vegan diet
    pub const VEGAN: &[&str] = &[
        "chicken", "beef", "pork", "fish", "meat", "bacon", "ham", "cheese", "milk", "butter",
        "egg", "yogurt", "cream",
    ];

    /// Gluten keywords excluded by a gluten-free diet
    pub const GLUTEN_FREE: &[&str] = &["wheat", "flour", "bread", "pasta", "gluten"];

    /// Dairy keywords excluded by a dairy-free diet
    pub const DAIRY_FREE: &[&str] = &["milk", "cheese", "butter", "cream", "yogurt"];

    /// High-carbohydrate keywords excluded by a keto diet
    pub const KETO: &[&str] = &["rice", "pasta", "bread", "potato", "sugar", "flour"];
}

/// Ingredient keywords that trigger each allergy
pub mod allergy_keywords {
    /// Tree nuts
    pub const NUTS: &[&str] = &[
        "almond",
        "walnut",
        "pecan",
        "cashew",
        "pistachio",
        "hazelnut",
        "macadamia",
    ];
    /// Peanuts
    pub const PEANUTS: &[&str] = &["peanut"];
    /// Shellfish
    pub const SHELLFISH: &[&str] = &[
        "shrimp", "crab", "lobster", "scallop", "clam", "mussel", "oyster",
    ];
    /// Fish
    pub const FISH: &[&str] = &["salmon", "tuna", "cod", "fish", "anchovy"];
    /// Eggs
    pub const EGGS: &[&str] = &["egg"];
    /// Dairy
    pub const DAIRY: &[&str] = &["milk", "cheese", "butter", "cream", "yogurt"];
    /// Soy
    pub const SOY: &[&str] = &["soy", "tofu", "tempeh", "miso"];
    /// Wheat and gluten
    pub const WHEAT: &[&str] = &["wheat", "flour", "bread", "pasta", "gluten"];
}

/// Cuisine inference keywords, searched in priority order
pub mod cuisine_keywords {
    /// Italian
    pub const ITALIAN: &[&str] = &["pasta", "italian", "parmesan"];
    /// Mexican
    pub const MEXICAN: &[&str] = &["taco", "mexican", "salsa"];
    /// Asian
    pub const ASIAN: &[&str] = &["soy sauce", "asian", "ginger"];
    /// Indian
    pub const INDIAN: &[&str] = &["curry", "indian", "turmeric"];
    /// Mediterranean
    pub const MEDITERRANEAN: &[&str] = &["olive oil", "mediterranean", "feta"];
    /// French
    pub const FRENCH: &[&str] = &["french", "baguette", "brie"];
    /// Thai
    pub const THAI: &[&str] = &["thai", "coconut milk", "lemongrass"];
}

/// Complexity classification thresholds (inclusive upper bounds)
pub mod complexity_thresholds {
    /// Maximum ingredient count of a simple recipe
    pub const SIMPLE_MAX_INGREDIENTS: usize = 5;
    /// Maximum instruction count of a simple recipe
    pub const SIMPLE_MAX_STEPS: usize = 4;
    /// Maximum total minutes of a simple recipe
    pub const SIMPLE_MAX_MINUTES: u32 = 30;
    /// Maximum ingredient count of a moderate recipe
    pub const MODERATE_MAX_INGREDIENTS: usize = 10;
    /// Maximum instruction count of a moderate recipe
    pub const MODERATE_MAX_STEPS: usize = 8;
    /// Maximum total minutes of a moderate recipe
    pub const MODERATE_MAX_MINUTES: u32 = 60;
}

/// Total-time ceilings for the "quick" feature flag per meal type
pub mod quick_thresholds {
    /// Breakfast
    pub const BREAKFAST_MINUTES: u32 = 20;
    /// Lunch
    pub const LUNCH_MINUTES: u32 = 30;
    /// Dinner
    pub const DINNER_MINUTES: u32 = 30;
    /// Snack
    pub const SNACK_MINUTES: u32 = 15;
}

/// Nutrition-derived health indicator
pub mod health {
    /// Starting value when nutrition is present
    pub const BASE: f64 = 0.5;
    /// Value used when nutrition is absent
    pub const NEUTRAL: f64 = 0.5;
    /// Calories strictly below this earn `LOW_CALORIE_BONUS`
    pub const LOW_CALORIE_MAX: f64 = 400.0;
    /// Bonus for low calories
    pub const LOW_CALORIE_BONUS: f64 = 0.2;
    /// Protein grams strictly above this earn `HIGH_PROTEIN_BONUS`
    pub const HIGH_PROTEIN_MIN: f64 = 20.0;
    /// Bonus for high protein
    pub const HIGH_PROTEIN_BONUS: f64 = 0.2;
    /// Fat grams strictly below this earn `LOW_FAT_BONUS`
    pub const LOW_FAT_MAX: f64 = 15.0;
    /// Bonus for low fat
    pub const LOW_FAT_BONUS: f64 = 0.1;
    /// Indicator above which a health reason is emitted
    pub const REASON_THRESHOLD: f64 = 0.7;
}

/// Seasonal produce keywords
pub mod seasonal_keywords {
    /// March to May
    pub const SPRING: &[&str] = &[
        "asparagus",
        "peas",
        "artichoke",
        "strawberry",
        "spinach",
        "lettuce",
    ];
    /// June to August
    pub const SUMMER: &[&str] = &[
        "tomato",
        "corn",
        "zucchini",
        "berries",
        "peach",
        "cucumber",
        "bell pepper",
    ];
    /// September to November
    pub const FALL: &[&str] = &[
        "pumpkin",
        "squash",
        "apple",
        "sweet potato",
        "brussels sprouts",
        "cranberry",
    ];
    /// December to February
    pub const WINTER: &[&str] = &[
        "root vegetables",
        "cabbage",
        "citrus",
        "pomegranate",
        "kale",
        "winter squash",
    ];
}

/// Ingredients that make a recipe a typical fit for its meal slot
pub mod meal_staples {
    /// Breakfast staples
    pub const BREAKFAST: &[&str] = &["egg", "oats", "yogurt", "fruit", "milk", "cereal"];
    /// Lunch staples
    pub const LUNCH: &[&str] = &["salad", "sandwich", "soup", "protein", "vegetables"];
    /// Dinner staples
    pub const DINNER: &[&str] = &["protein", "vegetables", "starch", "rice", "pasta"];
    /// A snack is a staple fit when its total time is at most this
    pub const SNACK_MAX_MINUTES: u32 = 15;
}

/// Widely available pantry ingredients
pub const COMMON_INGREDIENTS: &[&str] = &[
    "onion",
    "garlic",
    "tomato",
    "chicken",
    "rice",
    "pasta",
    "cheese",
    "olive oil",
    "salt",
    "pepper",
    "egg",
    "milk",
    "flour",
    "butter",
];

/// Content-Affinity score adjustments (0-100 scale)
pub mod content_scoring {
    /// Starting score
    pub const BASE: f64 = 50.0;
    /// All dietary restrictions satisfied
    pub const DIETARY_MATCH_BONUS: f64 = 20.0;
    /// Any dietary restriction violated
    pub const DIETARY_VIOLATION_PENALTY: f64 = 30.0;
    /// No allergen present
    pub const ALLERGY_SAFE_BONUS: f64 = 15.0;
    /// Quick band matched
    pub const QUICK_TIME_BONUS: f64 = 15.0;
    /// Medium or long band matched
    pub const OTHER_TIME_BONUS: f64 = 10.0;
    /// Complexity suits the skill level
    pub const SKILL_BONUS: f64 = 10.0;
    /// Servings within `SERVING_TOLERANCE` of the target
    pub const SERVING_BONUS: f64 = 5.0;
    /// Allowed serving-size difference
    pub const SERVING_TOLERANCE: u32 = 1;
    /// Inferred cuisine is preferred
    pub const CUISINE_BONUS: f64 = 15.0;
    /// Not eaten inside the recent window
    pub const FRESH_BONUS: f64 = 10.0;
    /// Eaten inside the recent window
    pub const RECENT_PENALTY: f64 = 15.0;
}

/// Behavioral-History score adjustments (0-100 scale)
pub mod behavioral_scoring {
    /// Score when there is nothing to learn from
    pub const NEUTRAL: f64 = 50.0;
    /// Cuisine never planned before
    pub const UNSEEN_CUISINE_BONUS: f64 = 15.0;
    /// Cuisine planned at most `RARE_CUISINE_MAX` times
    pub const RARE_CUISINE_BONUS: f64 = 5.0;
    /// Upper bound of a rare cuisine count
    pub const RARE_CUISINE_MAX: usize = 2;
    /// Cuisine planned more often than `RARE_CUISINE_MAX`
    pub const FREQUENT_CUISINE_PENALTY: f64 = 10.0;
    /// At least this many days since the last same-cuisine meal earns a bonus
    pub const LONG_GAP_DAYS: i64 = 7;
    /// Bonus for a long gap
    pub const LONG_GAP_BONUS: f64 = 10.0;
    /// Fewer than this many days since the last same-cuisine meal is penalized
    pub const SHORT_GAP_DAYS: i64 = 3;
    /// Penalty for a short gap
    pub const SHORT_GAP_PENALTY: f64 = 15.0;
    /// Multiplier applied to a known affinity in [0, 1]
    pub const AFFINITY_SCALE: f64 = 20.0;
    /// Affinity at or above this emits a reason
    pub const AFFINITY_REASON_MIN: f64 = 0.5;
    /// Not planned in the target week
    pub const WEEK_VARIETY_BONUS: f64 = 5.0;
    /// Already planned in the target week
    pub const WEEK_REPEAT_PENALTY: f64 = 10.0;
}

/// Attribute popularity proxy (0-100 scale)
pub mod popularity {
    /// Starting score
    pub const BASE: f64 = 50.0;
    /// Recipe carries an image
    pub const IMAGE_BONUS: f64 = 10.0;
    /// Recipe carries nutrition data
    pub const NUTRITION_BONUS: f64 = 5.0;
    /// Total time at most `QUICK_MINUTES`
    pub const QUICK_BONUS: f64 = 10.0;
    /// Quick threshold for the proxy
    pub const QUICK_MINUTES: u32 = 30;
    /// Cap on the image, nutrition and quick bonuses together
    pub const ATTRIBUTE_CAP: f64 = 20.0;
    /// Uses at least one common ingredient
    pub const COMMON_INGREDIENT_BONUS: f64 = 5.0;
    /// Attribute bonus above this reads as a strong profile
    pub const STRONG_PROFILE_MIN: f64 = 15.0;
    /// Attribute bonus above this reads as a familiar profile
    pub const FAMILIAR_PROFILE_MIN: f64 = 5.0;
}

/// Contextual score blend
pub mod contextual_scoring {
    /// Constant floor of the blend
    pub const BASE: f64 = 0.15;
    /// Weight of meal-time appropriateness
    pub const TIME_WEIGHT: f64 = 0.3;
    /// Weight of seasonal ingredient overlap
    pub const SEASON_WEIGHT: f64 = 0.25;
    /// Seasonal fraction multiplier before capping at 1
    pub const SEASON_FRACTION_SCALE: f64 = 2.0;
    /// Weight of the day-of-week pattern
    pub const DAY_WEIGHT: f64 = 0.2;
    /// Weight of the meal-slot staple check
    pub const STAPLE_WEIGHT: f64 = 0.1;

    /// Breakfast at most this many minutes is fully appropriate
    pub const BREAKFAST_IDEAL_MINUTES: u32 = 20;
    /// Breakfast at most this many minutes is acceptable
    pub const BREAKFAST_OK_MINUTES: u32 = 40;
    /// Lunch at most this many minutes is fully appropriate
    pub const LUNCH_IDEAL_MINUTES: u32 = 30;
    /// Lunch at most this many minutes is acceptable
    pub const LUNCH_OK_MINUTES: u32 = 60;
    /// Dinner at most this many minutes is fully appropriate
    pub const DINNER_IDEAL_MINUTES: u32 = 90;
    /// Snack at most this many minutes is fully appropriate
    pub const SNACK_IDEAL_MINUTES: u32 = 15;

    /// Weekend recipes longer than this fit the weekend pattern
    pub const WEEKEND_LONG_MINUTES: u32 = 60;
    /// Weekday recipes at most this long fit the weekday pattern
    pub const WEEKDAY_SHORT_MINUTES: u32 = 30;
    /// Day score when the pattern fits
    pub const DAY_FIT: f64 = 0.8;
    /// Weekend day score when the pattern does not fit
    pub const WEEKEND_MISS: f64 = 0.6;
    /// Weekday day score when the pattern does not fit
    pub const WEEKDAY_MISS: f64 = 0.4;
}
