// ABOUTME: Suggestion cache keyed by request shape and a wall-clock time window
// ABOUTME: Keys roll over once per window so stale lists expire without a sweeper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// In-memory LRU store
pub mod memory;

pub use memory::SuggestionCache;

use std::fmt;

use chrono::{DateTime, Utc};
use pantry_core::constants::cache::CACHE_KEY_PREFIX;
use pantry_core::models::{DifficultyFilter, SuggestionRequest};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Cache key for one request shape within one time window
///
/// Two requests share a key when every parameter that changes the result
/// matches and they fall in the same window. `force_refresh` and
/// `prioritize_expiring` are not part of the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SuggestionCacheKey {
    /// Requesting user
    pub user_id: Uuid,
    /// Requested suggestion count
    pub max_suggestions: usize,
    /// Cook-time ceiling in minutes
    pub max_cook_time_minutes: u32,
    /// Difficulty filter
    pub difficulty: DifficultyFilter,
    /// Normalized, sorted dietary tags
    pub dietary_tags: Vec<String>,
    /// `floor(epoch_secs / window_secs)`
    pub window: i64,
}

impl SuggestionCacheKey {
    /// Derive the key for a request at `now`
    #[must_use]
    pub fn for_request(request: &SuggestionRequest, now: DateTime<Utc>, window_secs: u64) -> Self {
        Self {
            user_id: request.user_id,
            max_suggestions: request.max_suggestions,
            max_cook_time_minutes: request.max_cook_time_minutes,
            difficulty: request.difficulty,
            dietary_tags: request.normalized_dietary_tags(),
            window: time_window(now, window_secs),
        }
    }
}

/// Window index containing `now`, for windows of `window_secs` seconds
#[must_use]
pub fn time_window(now: DateTime<Utc>, window_secs: u64) -> i64 {
    let width = i64::try_from(window_secs.max(1)).unwrap_or(i64::MAX);
    now.timestamp().div_euclid(width)
}

impl fmt::Display for SuggestionCacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{CACHE_KEY_PREFIX}:{}:{}:{}:{}:{}:{}",
            self.user_id,
            self.max_suggestions,
            self.max_cook_time_minutes,
            self.difficulty.as_str(),
            self.dietary_tags.join(","),
            self.window
        )
    }
}

/// Cache occupancy snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Live entries
    pub size: usize,
    /// Maximum entries before LRU eviction
    pub capacity: usize,
    /// Entry lifetime in seconds
    pub ttl_secs: u64,
}
