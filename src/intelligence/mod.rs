// ABOUTME: Prompt building and generation orchestration around the text provider
// ABOUTME: Re-exports the pure recipe algorithms so callers have one import path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! The pure algorithms (prioritization, parsing, matching, fallback recipes)
//! live in the `pantry-intelligence` crate. This module adds the parts that
//! need the provider seam: the prompt and the orchestrator that owns the
//! single provider call of a request.

pub use pantry_intelligence::*;

/// Deterministic prompt rendering
pub mod prompt_builder;
/// Provider call with one-shot fallback
pub mod recipe_generation;

pub use prompt_builder::build_suggestion_prompt;
pub use recipe_generation::{generate_candidates, GenerationOutcome};
