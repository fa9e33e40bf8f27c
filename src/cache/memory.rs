// ABOUTME: In-memory suggestion cache with LRU eviction and clock-driven TTL checks
// ABOUTME: Entries hold serialized JSON and the time they were written
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::num::NonZeroUsize;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use lru::LruCache;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;

use super::{CacheStats, SuggestionCacheKey};
use crate::config::CacheSettings;
use crate::errors::AppResult;

/// Stored value with its write time
#[derive(Debug, Clone)]
struct CacheEntry {
    data: Vec<u8>,
    created_at: DateTime<Utc>,
}

impl CacheEntry {
    fn is_live(&self, now: DateTime<Utc>, ttl_secs: u64) -> bool {
        now.signed_duration_since(self.created_at).num_seconds() < ttl_secs as i64
    }
}

/// In-memory cache with LRU eviction
///
/// Time never comes from the system here: every call takes `now` from the
/// caller's clock. Cloning shares the underlying store.
#[derive(Clone)]
pub struct SuggestionCache {
    store: Arc<RwLock<LruCache<String, CacheEntry>>>,
    capacity: NonZeroUsize,
    ttl_secs: u64,
}

impl SuggestionCache {
    /// Capacity used when the configured maximum is zero
    const DEFAULT_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1000) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Create an empty cache
    #[must_use]
    pub fn new(settings: &CacheSettings) -> Self {
        let capacity =
            NonZeroUsize::new(settings.max_entries).unwrap_or(Self::DEFAULT_CACHE_CAPACITY);
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
            capacity,
            ttl_secs: settings.ttl_secs,
        }
    }

    /// Store a value, replacing any entry under the same key
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized
    pub async fn set<T: Serialize + Sync>(
        &self,
        key: &SuggestionCacheKey,
        value: &T,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        let entry = CacheEntry {
            data: serde_json::to_vec(value)?,
            created_at: now,
        };
        self.store.write().await.push(key.to_string(), entry);
        Ok(())
    }

    /// Read a live value
    ///
    /// An entry older than the TTL is removed and reported as a miss.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored bytes do not decode as `T`
    pub async fn get<T: DeserializeOwned>(
        &self,
        key: &SuggestionCacheKey,
        now: DateTime<Utc>,
    ) -> AppResult<Option<T>> {
        let key = key.to_string();
        // LruCache::get updates recency, so it needs the write lock
        let mut store = self.store.write().await;

        let Some(entry) = store.get(&key) else {
            return Ok(None);
        };
        if !entry.is_live(now, self.ttl_secs) {
            store.pop(&key);
            drop(store);
            debug!(cache.key = %key, "Dropped expired cache entry");
            return Ok(None);
        }

        let value = serde_json::from_slice(&entry.data)?;
        drop(store);
        Ok(Some(value))
    }

    /// Remove one entry
    pub async fn invalidate(&self, key: &SuggestionCacheKey) {
        self.store.write().await.pop(&key.to_string());
    }

    /// Remove every entry
    pub async fn clear(&self) {
        self.store.write().await.clear();
    }

    /// Remove entries older than the TTL, returning how many were dropped
    pub async fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let mut store = self.store.write().await;

        let expired: Vec<String> = store
            .iter()
            .filter(|(_, entry)| !entry.is_live(now, self.ttl_secs))
            .map(|(key, _)| key.clone())
            .collect();
        for key in &expired {
            store.pop(key);
        }
        drop(store);

        if !expired.is_empty() {
            debug!("Purged {} expired cache entries", expired.len());
        }
        expired.len()
    }

    /// Current occupancy
    pub async fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.store.read().await.len(),
            capacity: self.capacity.get(),
            ttl_secs: self.ttl_secs,
        }
    }
}
