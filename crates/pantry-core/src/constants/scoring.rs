// ABOUTME: Weights used by the pantry prioritizer and the suggestion scorer
// ABOUTME: Bonuses, thresholds, staple ingredients, and result limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Pantry prioritization

/// Starting priority of every pantry item
pub const BASE_PRIORITY: i32 = 10;

/// Bonus for items expiring within `EXPIRING_SOON_DAYS` when expiring items are prioritized
pub const EXPIRING_SOON_BONUS: i32 = 40;

/// Bonus for items expiring within `EXPIRING_WEEK_DAYS`
pub const EXPIRING_WEEK_BONUS: i32 = 20;

/// Bonus for items held in quantity above `ABUNDANT_QUANTITY`
pub const ABUNDANT_BONUS: i32 = 15;

/// Bonus for protein items
pub const PROTEIN_BONUS: i32 = 25;

/// Bonus for items bought within `RECENT_PURCHASE_DAYS`
pub const RECENT_PURCHASE_BONUS: i32 = 10;

/// Bonus for items used fewer than `UNDERUSED_FREQUENCY` times
pub const UNDERUSED_BONUS: i32 = 10;

/// Days until expiry at or below which an item counts as expiring
pub const EXPIRING_SOON_DAYS: i64 = 3;

/// Days until expiry at or below which an item earns the weekly bonus
pub const EXPIRING_WEEK_DAYS: i64 = 7;

/// Quantity above which an item counts as abundant
pub const ABUNDANT_QUANTITY: f64 = 2.0;

/// Days since purchase at or below which an item counts as fresh
pub const RECENT_PURCHASE_DAYS: i64 = 2;

/// Usage count below which an item counts as under-used
pub const UNDERUSED_FREQUENCY: u32 = 2;

// Suggestion scoring

/// Points per pantry ingredient a recipe uses
pub const MATCH_POINTS: i32 = 10;

/// Extra points per matched ingredient that is expiring
pub const EXPIRING_MATCH_BONUS: i32 = 20;

/// Penalty per missing ingredient beyond the allowed threshold
pub const MISSING_PENALTY: i32 = 15;

/// Minimum pantry ingredients a suggestion must use to be kept
pub const MIN_MATCHING_INGREDIENTS: usize = 2;

/// Missing ingredients tolerated before the penalty applies
pub const MAX_MISSING_INGREDIENTS: usize = 2;

/// Hard ceiling on suggestions returned per request
pub const MAX_SUGGESTIONS: usize = 4;

/// Ingredients assumed to be in every kitchen
pub const COMMON_STAPLES: &[&str] = &[
    "salt", "pepper", "oil", "water", "flour", "butter", "garlic", "onion",
];

/// Produce whose name ends in a staple word but is not a staple
pub const NON_STAPLE_PHRASES: &[&str] = &[
    "bell pepper",
    "sweet pepper",
    "chili pepper",
    "chilli pepper",
    "jalapeno pepper",
    "green pepper",
    "red pepper",
    "yellow pepper",
    "spring onion",
    "green onion",
];
