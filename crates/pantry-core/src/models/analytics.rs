// ABOUTME: Per-user suggestion analytics with running totals and cuisine history
// ABOUTME: Tracks generated and used counts, match quality, and last activity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of cuisines remembered per user
pub const MAX_TRACKED_CUISINES: usize = 5;

/// Running totals for one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserAnalytics {
    /// Suggestions shown to the user
    pub total_suggestions_generated: u64,
    /// Suggestions the user cooked or saved
    pub total_suggestions_used: u64,
    /// First cuisines seen, in order of appearance
    pub favorite_cuisines: Vec<String>,
    /// Mean match percentage across every generated suggestion
    pub average_match_percentage: f64,
    /// Last time suggestions were generated
    pub last_used: Option<DateTime<Utc>>,
}

impl UserAnalytics {
    /// Used over generated as a whole percentage, bounded at 100
    #[must_use]
    pub fn success_rate(&self) -> u8 {
        if self.total_suggestions_generated == 0 {
            return 0;
        }
        let rate = self.total_suggestions_used.saturating_mul(100) / self.total_suggestions_generated;
        rate.min(100) as u8
    }

    /// Remember a cuisine unless already known or the list is full
    pub fn remember_cuisine(&mut self, cuisine: &str) {
        let cuisine = cuisine.trim();
        if cuisine.is_empty() || self.favorite_cuisines.len() >= MAX_TRACKED_CUISINES {
            return;
        }
        if self
            .favorite_cuisines
            .iter()
            .any(|known| known.eq_ignore_ascii_case(cuisine))
        {
            return;
        }
        self.favorite_cuisines.push(cuisine.to_owned());
    }
}
