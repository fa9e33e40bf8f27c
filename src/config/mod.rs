// ABOUTME: Configuration module for the suggestion engine
// ABOUTME: Environment-only settings for cache, scoring, generation, and the LLM provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration is read from environment variables only. Every setting has
//! a default, and a malformed value falls back to that default with a
//! warning instead of failing startup.

/// Engine tuning: cache, scoring, and generation settings
pub mod engine;
/// Generative provider selection
pub mod llm;

pub use engine::{CacheSettings, EngineConfig, GenerationSettings, ScoringSettings};
pub use llm::LlmProviderType;

use std::env;
use std::str::FromStr;

use tracing::warn;

/// Read and parse an environment variable, falling back to `default`
pub(crate) fn env_parse_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(variable = key, value = %raw, "Ignoring malformed configuration value");
            default
        }),
        Err(_) => default,
    }
}
