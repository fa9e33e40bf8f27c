// ABOUTME: Recipe candidate pipeline: provider output parsing, pantry matching, fallbacks
// ABOUTME: Turns raw generation output into ranked, pantry-aware quick suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipes Module
//!
//! Candidates flow through three stages:
//!
//! 1. [`parser`] extracts [`RecipeCandidate`](pantry_core::models::RecipeCandidate)
//!    values from whatever the generative provider returned, repairing
//!    common JSON mistakes along the way.
//! 2. [`matching`] compares each candidate's ingredients with the pantry,
//!    filters out recipes that need too much shopping, and ranks the rest.
//! 3. [`fallback`] builds template recipes from the highest-priority items
//!    when generation fails, and a static last-resort set when even that
//!    produces nothing.

/// Deterministic template recipes and the static last-resort set
pub mod fallback;
/// Ingredient matching and suggestion scoring
pub mod matching;
/// Tolerant extraction of recipe candidates from provider output
pub mod parser;

pub use fallback::{static_suggestions, synthesize_candidates};
pub use matching::{find_pantry_match, is_staple, score_candidates, MatchingRules};
pub use parser::{parse_recipe_candidates, parse_recipe_text, ParseError, ProviderOutput};
