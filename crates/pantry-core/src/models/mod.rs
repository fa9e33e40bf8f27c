// ABOUTME: Core data models for pantry inventory, suggestion requests, and recipes
// ABOUTME: Re-exports the value types shared by the algorithm and application crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Per-user suggestion usage statistics
pub mod analytics;
/// Pantry inventory items and their prioritized form
pub mod pantry;
/// Recipe candidates and scored suggestions
pub mod recipe;
/// Suggestion request parameters and dietary restrictions
pub mod request;

pub use analytics::UserAnalytics;
pub use pantry::{IngredientCategory, PantryItem, PrioritizedItem};
pub use recipe::{
    CandidateIngredient, NutritionEstimate, QuickRecipeSuggestion, RecipeCandidate,
    SuggestionNotice, SuggestionResponse, SuggestionSource,
};
pub use request::{DietaryRestriction, DifficultyFilter, SuggestionRequest};
