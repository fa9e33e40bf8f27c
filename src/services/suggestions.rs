// ABOUTME: Suggestion engine turning a pantry snapshot into ranked quick recipes
// ABOUTME: Chooses between cache, provider, template, and static paths for each request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use pantry_core::models::{
    PrioritizedItem, QuickRecipeSuggestion, SuggestionNotice, SuggestionRequest,
    SuggestionResponse, SuggestionSource, UserAnalytics,
};
use pantry_intelligence::recipes::{score_candidates, static_suggestions};
use pantry_intelligence::prioritize_pantry;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::analytics::AnalyticsTracker;
use crate::cache::{CacheStats, SuggestionCache, SuggestionCacheKey};
use crate::clock::Clock;
use crate::config::EngineConfig;
use crate::intelligence::{generate_candidates, GenerationOutcome};
use crate::inventory::InventoryReader;
use crate::llm::LlmProvider;
use crate::logging::SuggestionLogger;

/// Entry points for quick recipe suggestions
///
/// # Request flow
///
/// 1. Unless `force_refresh` is set, a live cache entry for the request's
///    key is returned as-is.
/// 2. The pantry is loaded. If that fails, the static suggestion set is
///    returned with an [`SuggestionNotice::InventoryUnavailable`] notice.
/// 3. Items are prioritized. With fewer usable items than the configured
///    minimum, the provider is skipped and template recipes are built from
///    what there is, with an [`SuggestionNotice::InsufficientPantry`] notice.
/// 4. Otherwise the provider is asked once; any failure becomes template
///    recipes inside the orchestrator.
/// 5. Candidates are scored against the pantry. Provider recipes that do not
///    fit the pantry fall through to templates, and templates that do not
///    fit fall through to the static set.
/// 6. Provider and template results are cached and counted in analytics.
pub struct SuggestionEngine {
    inventory: Arc<dyn InventoryReader>,
    provider: Arc<dyn LlmProvider>,
    clock: Arc<dyn Clock>,
    config: EngineConfig,
    cache: SuggestionCache,
    analytics: AnalyticsTracker,
}

impl SuggestionEngine {
    /// Create an engine with empty cache and analytics stores
    #[must_use]
    pub fn new(
        inventory: Arc<dyn InventoryReader>,
        provider: Arc<dyn LlmProvider>,
        clock: Arc<dyn Clock>,
        config: EngineConfig,
    ) -> Self {
        let cache = SuggestionCache::new(&config.cache);
        Self {
            inventory,
            provider,
            clock,
            config,
            cache,
            analytics: AnalyticsTracker::new(),
        }
    }

    /// Engine configuration
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generation provider in use
    #[must_use]
    pub fn provider(&self) -> &dyn LlmProvider {
        self.provider.as_ref()
    }

    /// Ranked quick recipes for a request
    ///
    /// Never fails: every error path degrades to template or static
    /// suggestions, with a notice when the user should know why.
    pub async fn get_quick_suggestions(&self, request: &SuggestionRequest) -> SuggestionResponse {
        let started = Instant::now();
        let now = self.clock.now();
        let key = SuggestionCacheKey::for_request(request, now, self.config.cache.window_secs);

        if request.force_refresh {
            debug!(user.id = %request.user_id, "Forced refresh, skipping cache read");
        } else if let Some(cached) = self.read_cache(&key, now).await {
            SuggestionLogger::log_cache_hit(request.user_id, cached.suggestions.len());
            return SuggestionResponse {
                from_cache: true,
                ..cached
            };
        }

        let items = match self.inventory.get_all_ingredients().await {
            Ok(items) => items,
            Err(e) => {
                SuggestionLogger::log_inventory_unavailable(request.user_id, &e.to_string());
                let notice = SuggestionNotice::InventoryUnavailable {
                    reason: e.to_string(),
                };
                return self.static_response(request, Some(notice), now, started);
            }
        };

        let pantry = prioritize_pantry(&items, request.prioritize_expiring, self.clock.today());
        let count = request.effective_limit();
        let generation = &self.config.generation;

        let (outcome, notice) = if pantry.len() < generation.min_pantry_items {
            debug!(
                user.id = %request.user_id,
                available = pantry.len(),
                required = generation.min_pantry_items,
                "Pantry too small for generation, using template recipes"
            );
            let notice = SuggestionNotice::InsufficientPantry {
                available: pantry.len(),
                required: generation.min_pantry_items,
            };
            (
                GenerationOutcome::fallback(&pantry, count, generation.fallback_item_limit),
                Some(notice),
            )
        } else {
            let outcome =
                generate_candidates(self.provider.as_ref(), &pantry, request, generation).await;
            (outcome, None)
        };

        let Some((source, suggestions)) = self.rank(outcome, &pantry, count) else {
            return self.static_response(request, notice, now, started);
        };

        let response = SuggestionResponse {
            suggestions,
            source,
            from_cache: false,
            notice,
        };
        if let Err(e) = self.cache.set(&key, &response, now).await {
            warn!(cache.key = %key, error = %e, "Failed to cache suggestions");
        }
        self.finish(request, &response, now, started);
        response
    }

    /// Record that the user acted on a suggestion
    ///
    /// Usage from a user with no generation history is ignored.
    pub fn track_suggestion_used(&self, user_id: Uuid, suggestion: &QuickRecipeSuggestion) {
        if self.analytics.record_used(user_id, suggestion) {
            SuggestionLogger::log_suggestion_used(
                user_id,
                &suggestion.recipe.name,
                suggestion.match_percentage,
            );
        }
    }

    /// Analytics record for a user, if any suggestions were generated
    #[must_use]
    pub fn user_analytics(&self, user_id: Uuid) -> Option<UserAnalytics> {
        self.analytics.get(user_id)
    }

    /// Used over generated as a whole percentage
    #[must_use]
    pub fn success_rate(&self, user_id: Uuid) -> u8 {
        self.analytics.success_rate(user_id)
    }

    /// Drop every cached suggestion list
    pub async fn clear_cache(&self) {
        self.cache.clear().await;
        debug!("Suggestion cache cleared");
    }

    /// Cache occupancy after dropping expired entries
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.purge_expired(self.clock.now()).await;
        self.cache.stats().await
    }

    async fn read_cache(
        &self,
        key: &SuggestionCacheKey,
        now: DateTime<Utc>,
    ) -> Option<SuggestionResponse> {
        match self.cache.get::<SuggestionResponse>(key, now).await {
            Ok(cached) => cached,
            Err(e) => {
                warn!(cache.key = %key, error = %e, "Unreadable cache entry, regenerating");
                self.cache.invalidate(key).await;
                None
            }
        }
    }

    /// Score candidates, stepping down to templates when provider recipes miss
    fn rank(
        &self,
        outcome: GenerationOutcome,
        pantry: &[PrioritizedItem],
        count: usize,
    ) -> Option<(SuggestionSource, Vec<QuickRecipeSuggestion>)> {
        let rules = self.config.scoring.rules_for(count);
        let suggestions = score_candidates(outcome.candidates, pantry, &rules, outcome.source);
        if !suggestions.is_empty() {
            return Some((outcome.source, suggestions));
        }
        if outcome.source != SuggestionSource::Ai {
            return None;
        }

        debug!("No provider recipe fits the pantry, using template recipes");
        let fallback =
            GenerationOutcome::fallback(pantry, count, self.config.generation.fallback_item_limit);
        let suggestions = score_candidates(fallback.candidates, pantry, &rules, fallback.source);
        (!suggestions.is_empty()).then_some((fallback.source, suggestions))
    }

    /// Static suggestion set, counted in analytics but never cached
    fn static_response(
        &self,
        request: &SuggestionRequest,
        notice: Option<SuggestionNotice>,
        now: DateTime<Utc>,
        started: Instant,
    ) -> SuggestionResponse {
        let response = SuggestionResponse {
            suggestions: static_suggestions(request.effective_limit()),
            source: SuggestionSource::Static,
            from_cache: false,
            notice,
        };
        self.finish(request, &response, now, started);
        response
    }

    fn finish(
        &self,
        request: &SuggestionRequest,
        response: &SuggestionResponse,
        now: DateTime<Utc>,
        started: Instant,
    ) {
        self.analytics
            .record_generated(request.user_id, &response.suggestions, now);
        SuggestionLogger::log_generated(
            request.user_id,
            response.source,
            response.suggestions.len(),
            started.elapsed().as_millis() as u64,
        );
    }
}
