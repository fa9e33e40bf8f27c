// ABOUTME: Cache-related constants for suggestion TTL, key windows, and capacity
// ABOUTME: Defaults for the time-bucketed in-memory suggestion cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Suggestion cache TTL (24 hours)
pub const TTL_SUGGESTIONS_SECS: u64 = 86_400;

/// Length of the time window folded into every cache key (24 hours)
pub const KEY_WINDOW_SECS: u64 = 86_400;

/// Default maximum cache entries for the in-memory cache
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 1_000;

/// Cache key prefix for namespacing
pub const CACHE_KEY_PREFIX: &str = "suggestions";
