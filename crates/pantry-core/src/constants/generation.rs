// ABOUTME: Constants for prompt construction and the generation fallback path
// ABOUTME: Pantry size thresholds, fallback item caps, and provider defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Pantry items needed before a request counts as well-stocked
pub const MIN_PANTRY_ITEMS: usize = 3;

/// Highest-priority items handed to the fallback synthesizer
pub const FALLBACK_ITEM_LIMIT: usize = 8;

/// Pantry ingredients the prompt asks each recipe to use
pub const PROMPT_MIN_PANTRY_INGREDIENTS: usize = 3;

/// Non-staple ingredients the prompt allows beyond the pantry
pub const PROMPT_MAX_EXTRA_INGREDIENTS: usize = 2;

/// Default timeout wrapped around a provider call (seconds)
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 30;

/// Default sampling temperature for recipe generation
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default completion budget for recipe generation
pub const DEFAULT_MAX_TOKENS: u32 = 2_000;

/// Default cook-time ceiling for a quick suggestion (minutes)
pub const DEFAULT_MAX_COOK_TIME_MINUTES: u32 = 30;

/// Confidence assigned to candidates that omit one
pub const DEFAULT_CANDIDATE_CONFIDENCE: f64 = 0.7;
