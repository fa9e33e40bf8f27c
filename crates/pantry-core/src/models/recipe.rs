// ABOUTME: Recipe candidate and scored suggestion models for pantry-driven cooking
// ABOUTME: Defines the candidate produced by generation and the suggestion returned to callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ingredient requirement of a recipe, as distinct from a pantry item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateIngredient {
    /// Ingredient name ("chicken thighs")
    pub name: String,
    /// Free-text amount ("200g", "2 cups")
    pub amount: String,
}

impl CandidateIngredient {
    /// Create an ingredient requirement
    #[must_use]
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
        }
    }
}

/// Rough per-serving nutrition, as estimated by the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionEstimate {
    /// Calories per serving
    pub calories: u32,
    /// Protein in grams per serving
    pub protein_g: u32,
    /// Carbohydrates in grams per serving
    pub carbs_g: u32,
    /// Fat in grams per serving
    pub fat_g: u32,
}

impl NutritionEstimate {
    /// Create an estimate
    #[must_use]
    pub const fn new(calories: u32, protein_g: u32, carbs_g: u32, fat_g: u32) -> Self {
        Self {
            calories,
            protein_g,
            carbs_g,
            fat_g,
        }
    }
}

/// An unscored recipe produced by the provider or the fallback synthesizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeCandidate {
    /// Recipe name
    pub name: String,
    /// Cuisine label ("Italian", "Asian")
    pub cuisine: String,
    /// Cook time as reported ("25 min")
    pub cook_time: String,
    /// Difficulty as reported ("easy")
    pub difficulty: String,
    /// Number of servings
    pub servings: u32,
    /// Ingredient requirements
    pub ingredients: Vec<CandidateIngredient>,
    /// Ordered instruction steps
    pub instructions: Vec<String>,
    /// Optional nutrition estimate
    pub nutrition: Option<NutritionEstimate>,
    /// Generator-reported confidence in [0, 1]
    pub confidence: f64,
}

/// Where a suggestion came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionSource {
    /// Parsed from the generative provider's output
    Ai,
    /// Synthesized from pantry templates
    Fallback,
    /// Fixed pantry-agnostic recipes
    Static,
}

impl SuggestionSource {
    /// Stable label for logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ai => "ai",
            Self::Fallback => "fallback",
            Self::Static => "static",
        }
    }
}

/// A scored candidate ready for presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickRecipeSuggestion {
    /// Identifier assigned at scoring time
    pub id: Uuid,
    /// The underlying recipe
    #[serde(flatten)]
    pub recipe: RecipeCandidate,
    /// Pantry items this recipe uses
    pub matching_ingredients: Vec<String>,
    /// Non-staple ingredients the user would need to buy
    pub missing_ingredients: Vec<String>,
    /// Ranking score, higher is better
    pub priority_score: i32,
    /// Share of non-staple ingredients already on hand (0-100)
    pub match_percentage: u8,
    /// Which path produced the recipe
    pub source: SuggestionSource,
}

/// User-visible notice attached to a response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SuggestionNotice {
    /// Fewer usable pantry items than a well-stocked request needs
    InsufficientPantry {
        /// Usable items found
        available: usize,
        /// Items required
        required: usize,
    },
    /// The inventory could not be read; generic suggestions were returned
    InventoryUnavailable {
        /// Failure description
        reason: String,
    },
}

impl SuggestionNotice {
    /// Message suitable for display
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::InsufficientPantry {
                available,
                required,
            } => format!(
                "Only {available} usable pantry item(s) found; add at least {required} for better suggestions"
            ),
            Self::InventoryUnavailable { reason } => {
                format!("Your pantry could not be loaded ({reason}); showing general ideas instead")
            }
        }
    }
}

/// Complete result of a suggestion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionResponse {
    /// Ranked suggestions, best first
    pub suggestions: Vec<QuickRecipeSuggestion>,
    /// Path that produced the list
    pub source: SuggestionSource,
    /// Served from the cache
    pub from_cache: bool,
    /// Optional user-visible notice
    pub notice: Option<SuggestionNotice>,
}
