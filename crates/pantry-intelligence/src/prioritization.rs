// ABOUTME: Pantry prioritizer ranking inventory items by freshness, urgency, and abundance
// ABOUTME: Pure scoring pass that produces PrioritizedItem values sorted by priority
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use pantry_core::constants::scoring::{
    ABUNDANT_BONUS, ABUNDANT_QUANTITY, BASE_PRIORITY, EXPIRING_SOON_BONUS, EXPIRING_SOON_DAYS,
    EXPIRING_WEEK_BONUS, EXPIRING_WEEK_DAYS, PROTEIN_BONUS, RECENT_PURCHASE_BONUS,
    RECENT_PURCHASE_DAYS, UNDERUSED_BONUS, UNDERUSED_FREQUENCY,
};
use pantry_core::models::{IngredientCategory, PantryItem, PrioritizedItem};

/// Rank pantry items, most urgent first
///
/// Items without a usable name are dropped. The sort is stable, so items
/// with equal priority keep their inventory order.
///
/// # Scoring
///
/// | Condition | Bonus |
/// |-----------|-------|
/// | expires within 3 days and `prioritize_expiring` | +40 |
/// | otherwise expires within 7 days | +20 |
/// | quantity above 2 | +15 |
/// | protein | +25 |
/// | bought within 2 days | +10 |
/// | used fewer than 2 times | +10 |
#[must_use]
pub fn prioritize_pantry(
    items: &[PantryItem],
    prioritize_expiring: bool,
    today: NaiveDate,
) -> Vec<PrioritizedItem> {
    let mut prioritized: Vec<PrioritizedItem> = items
        .iter()
        .filter(|item| item.is_usable())
        .map(|item| prioritize_item(item, prioritize_expiring, today))
        .collect();

    prioritized.sort_by(|a, b| b.priority.cmp(&a.priority));
    prioritized
}

/// Number of items the prioritizer would keep
#[must_use]
pub fn count_usable(items: &[PantryItem]) -> usize {
    items.iter().filter(|item| item.is_usable()).count()
}

fn prioritize_item(item: &PantryItem, prioritize_expiring: bool, today: NaiveDate) -> PrioritizedItem {
    let days_until_expiry = item
        .expiry_date
        .map(|expiry| expiry.signed_duration_since(today).num_days());
    let is_expiring = days_until_expiry.is_some_and(|days| days <= EXPIRING_SOON_DAYS);
    let is_abundant = item
        .quantity_value()
        .is_some_and(|quantity| quantity > ABUNDANT_QUANTITY);

    let mut priority = BASE_PRIORITY;

    if is_expiring && prioritize_expiring {
        priority += EXPIRING_SOON_BONUS;
    } else if days_until_expiry.is_some_and(|days| days <= EXPIRING_WEEK_DAYS) {
        priority += EXPIRING_WEEK_BONUS;
    }

    if is_abundant {
        priority += ABUNDANT_BONUS;
    }

    if item.category == IngredientCategory::Protein {
        priority += PROTEIN_BONUS;
    }

    let recently_bought = item.purchase_date.is_some_and(|purchased| {
        let age = today.signed_duration_since(purchased).num_days();
        (0..=RECENT_PURCHASE_DAYS).contains(&age)
    });
    if recently_bought {
        priority += RECENT_PURCHASE_BONUS;
    }

    if item.usage_frequency.unwrap_or(0) < UNDERUSED_FREQUENCY {
        priority += UNDERUSED_BONUS;
    }

    PrioritizedItem {
        item: item.clone(),
        priority,
        days_until_expiry,
        is_expiring,
        is_abundant,
    }
}
