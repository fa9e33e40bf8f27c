// ABOUTME: Engine settings for cache lifetime, suggestion scoring, and generation limits
// ABOUTME: Each settings group loads from PANTRY_* environment variables with defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Duration;

use pantry_core::constants::{cache, generation, scoring};
use pantry_intelligence::recipes::MatchingRules;
use serde::{Deserialize, Serialize};

use super::env_parse_or;
use super::llm::LlmProviderType;

/// Suggestion cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSettings {
    /// Entry lifetime in seconds (default: 24 hours)
    pub ttl_secs: u64,
    /// Key bucket width in seconds (default: 24 hours)
    pub window_secs: u64,
    /// Maximum stored entries before LRU eviction
    pub max_entries: usize,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_secs: cache::TTL_SUGGESTIONS_SECS,
            window_secs: cache::KEY_WINDOW_SECS,
            max_entries: cache::DEFAULT_CACHE_MAX_ENTRIES,
        }
    }
}

impl CacheSettings {
    /// Load cache settings from environment
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            ttl_secs: env_parse_or("PANTRY_CACHE_TTL_SECS", defaults.ttl_secs),
            window_secs: env_parse_or("PANTRY_CACHE_WINDOW_SECS", defaults.window_secs).max(1),
            max_entries: env_parse_or("PANTRY_CACHE_MAX_ENTRIES", defaults.max_entries),
        }
    }

    /// Entry lifetime
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

/// Suggestion scoring thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringSettings {
    /// Minimum pantry ingredients a suggestion must use
    pub min_matching_ingredients: usize,
    /// Missing ingredients tolerated before penalties apply
    pub max_missing_ingredients: usize,
    /// Hard cap on returned suggestions
    pub max_results: usize,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            min_matching_ingredients: scoring::MIN_MATCHING_INGREDIENTS,
            max_missing_ingredients: scoring::MAX_MISSING_INGREDIENTS,
            max_results: scoring::MAX_SUGGESTIONS,
        }
    }
}

impl ScoringSettings {
    /// Load scoring settings from environment
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            min_matching_ingredients: env_parse_or(
                "PANTRY_MIN_MATCHING_INGREDIENTS",
                defaults.min_matching_ingredients,
            ),
            max_missing_ingredients: env_parse_or(
                "PANTRY_MAX_MISSING_INGREDIENTS",
                defaults.max_missing_ingredients,
            ),
            max_results: env_parse_or("PANTRY_MAX_RESULTS", defaults.max_results),
        }
    }

    /// Matching rules for a request asking for `requested` suggestions
    #[must_use]
    pub fn rules_for(&self, requested: usize) -> MatchingRules {
        MatchingRules {
            min_matching: self.min_matching_ingredients,
            max_missing: self.max_missing_ingredients,
            limit: requested.min(self.max_results),
        }
    }
}

/// Generation and fallback settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Host-side timeout for one provider call
    pub timeout_secs: u64,
    /// Top-priority items handed to the fallback synthesizer
    pub fallback_item_limit: usize,
    /// Usable items below which the provider is skipped
    pub min_pantry_items: usize,
    /// Sampling temperature sent to the provider
    pub temperature: f32,
    /// Token budget for one reply
    pub max_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            timeout_secs: generation::DEFAULT_GENERATION_TIMEOUT_SECS,
            fallback_item_limit: generation::FALLBACK_ITEM_LIMIT,
            min_pantry_items: generation::MIN_PANTRY_ITEMS,
            temperature: generation::DEFAULT_TEMPERATURE,
            max_tokens: generation::DEFAULT_MAX_TOKENS,
        }
    }
}

impl GenerationSettings {
    /// Load generation settings from environment
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            timeout_secs: env_parse_or("PANTRY_GENERATION_TIMEOUT_SECS", defaults.timeout_secs),
            fallback_item_limit: env_parse_or(
                "PANTRY_FALLBACK_ITEM_LIMIT",
                defaults.fallback_item_limit,
            ),
            min_pantry_items: env_parse_or("PANTRY_MIN_PANTRY_ITEMS", defaults.min_pantry_items),
            temperature: env_parse_or("PANTRY_LLM_TEMPERATURE", defaults.temperature),
            max_tokens: env_parse_or("PANTRY_LLM_MAX_TOKENS", defaults.max_tokens),
        }
    }

    /// Provider call timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Cache settings
    pub cache: CacheSettings,
    /// Scoring thresholds
    pub scoring: ScoringSettings,
    /// Generation limits
    pub generation: GenerationSettings,
    /// Which provider to construct
    pub provider: LlmProviderType,
}

impl EngineConfig {
    /// Load every settings group from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            cache: CacheSettings::from_env(),
            scoring: ScoringSettings::from_env(),
            generation: GenerationSettings::from_env(),
            provider: LlmProviderType::from_env(),
        }
    }
}
