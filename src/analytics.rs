// ABOUTME: Per-user analytics tracker for generated and used suggestions
// ABOUTME: Sharded concurrent map so overlapping requests update counters safely
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use pantry_core::models::{QuickRecipeSuggestion, UserAnalytics};
use tracing::debug;
use uuid::Uuid;

/// Running suggestion statistics keyed by user
///
/// Uses `DashMap` entry locking so a read-modify-write of one user's record
/// never interleaves with another update of the same user. Cloning shares
/// the store.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsTracker {
    records: Arc<DashMap<Uuid, UserAnalytics>>,
}

impl AnalyticsTracker {
    /// Create an empty tracker
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a freshly generated batch
    ///
    /// Adds the batch size to the generated total, folds the batch's match
    /// percentages into the running average, remembers new cuisines, and
    /// stamps `last_used`. An empty batch is ignored.
    pub fn record_generated(
        &self,
        user_id: Uuid,
        suggestions: &[QuickRecipeSuggestion],
        now: DateTime<Utc>,
    ) {
        if suggestions.is_empty() {
            return;
        }

        let mut record = self.records.entry(user_id).or_default();
        let previous = record.total_suggestions_generated as f64;
        let batch = suggestions.len() as f64;
        let batch_sum: f64 = suggestions
            .iter()
            .map(|suggestion| f64::from(suggestion.match_percentage))
            .sum();

        record.average_match_percentage =
            record.average_match_percentage.mul_add(previous, batch_sum) / (previous + batch);
        record.total_suggestions_generated += suggestions.len() as u64;
        for suggestion in suggestions {
            record.remember_cuisine(&suggestion.recipe.cuisine);
        }
        record.last_used = Some(now);

        debug!(
            user.id = %user_id,
            generated = record.total_suggestions_generated,
            "Recorded generated suggestions"
        );
    }

    /// Count one suggestion the user acted on
    ///
    /// Returns `false` and changes nothing when the user has no generation
    /// history.
    pub fn record_used(&self, user_id: Uuid, suggestion: &QuickRecipeSuggestion) -> bool {
        let Some(mut record) = self.records.get_mut(&user_id) else {
            debug!(user.id = %user_id, "Ignoring usage for user without generation history");
            return false;
        };
        record.total_suggestions_used += 1;
        debug!(
            user.id = %user_id,
            recipe.name = %suggestion.recipe.name,
            used = record.total_suggestions_used,
            "Recorded suggestion use"
        );
        true
    }

    /// Snapshot of a user's record
    #[must_use]
    pub fn get(&self, user_id: Uuid) -> Option<UserAnalytics> {
        self.records.get(&user_id).map(|record| record.value().clone())
    }

    /// Used over generated as a whole percentage, 0 for unknown users
    #[must_use]
    pub fn success_rate(&self, user_id: Uuid) -> u8 {
        self.records
            .get(&user_id)
            .map_or(0, |record| record.success_rate())
    }

    /// Number of users with a record
    #[must_use]
    pub fn tracked_users(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pantry_core::models::{RecipeCandidate, SuggestionSource};

    use super::*;

    fn suggestion(cuisine: &str, match_percentage: u8) -> QuickRecipeSuggestion {
        QuickRecipeSuggestion {
            id: Uuid::new_v4(),
            recipe: RecipeCandidate {
                name: format!("{cuisine} dish"),
                cuisine: cuisine.to_owned(),
                cook_time: "20 min".to_owned(),
                difficulty: "easy".to_owned(),
                servings: 2,
                ingredients: Vec::new(),
                instructions: Vec::new(),
                nutrition: None,
                confidence: 0.7,
            },
            matching_ingredients: Vec::new(),
            missing_ingredients: Vec::new(),
            priority_score: 20,
            match_percentage,
            source: SuggestionSource::Ai,
        }
    }

    #[test]
    fn test_running_average_spans_batches() {
        let tracker = AnalyticsTracker::new();
        let user = Uuid::new_v4();
        let now = Utc::now();

        tracker.record_generated(user, &[suggestion("Thai", 100), suggestion("Thai", 50)], now);
        tracker.record_generated(user, &[suggestion("Italian", 90)], now);

        let record = tracker.get(user).unwrap();
        assert_eq!(record.total_suggestions_generated, 3);
        assert!((record.average_match_percentage - 80.0).abs() < 1e-9);
        assert_eq!(record.favorite_cuisines, vec!["Thai", "Italian"]);
        assert_eq!(record.last_used, Some(now));
    }

    #[test]
    fn test_usage_requires_history() {
        let tracker = AnalyticsTracker::new();
        let user = Uuid::new_v4();

        assert!(!tracker.record_used(user, &suggestion("Thai", 80)));
        assert!(tracker.get(user).is_none());
        assert_eq!(tracker.success_rate(user), 0);
    }

    #[test]
    fn test_success_rate_counts_usage() {
        let tracker = AnalyticsTracker::new();
        let user = Uuid::new_v4();
        let batch = [suggestion("Thai", 80), suggestion("Greek", 60)];
        tracker.record_generated(user, &batch, Utc::now());

        assert!(tracker.record_used(user, &batch[0]));
        assert_eq!(tracker.success_rate(user), 50);
    }
}
