// ABOUTME: Suggestion scorer matching recipe ingredients against the prioritized pantry
// ABOUTME: Filters candidates by match and missing counts, then ranks them by priority score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;

use pantry_core::constants::scoring::{
    COMMON_STAPLES, EXPIRING_MATCH_BONUS, MATCH_POINTS, MAX_MISSING_INGREDIENTS, MAX_SUGGESTIONS,
    MIN_MATCHING_INGREDIENTS, MISSING_PENALTY, NON_STAPLE_PHRASES,
};
use pantry_core::models::{PrioritizedItem, QuickRecipeSuggestion, RecipeCandidate, SuggestionSource};
use tracing::debug;
use uuid::Uuid;

/// Thresholds applied when scoring candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingRules {
    /// Candidates with fewer pantry matches are dropped
    pub min_matching: usize,
    /// Missing ingredients beyond this count are penalized
    pub max_missing: usize,
    /// Maximum suggestions returned
    pub limit: usize,
}

impl Default for MatchingRules {
    fn default() -> Self {
        Self {
            min_matching: MIN_MATCHING_INGREDIENTS,
            max_missing: MAX_MISSING_INGREDIENTS,
            limit: MAX_SUGGESTIONS,
        }
    }
}

impl MatchingRules {
    /// Same thresholds with a different result limit
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Limit clamped to `1..=MAX_SUGGESTIONS`
    #[must_use]
    pub fn effective_limit(&self) -> usize {
        self.limit.clamp(1, MAX_SUGGESTIONS)
    }
}

/// Whether an ingredient is a common staple assumed to be on hand
///
/// Staples match whole words, singular or plural: "olive oil" and "onions"
/// are staples, "boiled egg" and "watermelon" are not. Produce such as
/// "bell pepper" is never a staple.
#[must_use]
pub fn is_staple(ingredient: &str) -> bool {
    let lowered = ingredient.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphabetic())
        .filter(|word| !word.is_empty())
        .map(|word| word.strip_suffix('s').unwrap_or(word))
        .collect();
    let phrase = format!(" {} ", words.join(" "));

    if NON_STAPLE_PHRASES
        .iter()
        .any(|produce| phrase.contains(&format!(" {produce} ")))
    {
        return false;
    }
    words.iter().any(|word| COMMON_STAPLES.contains(word))
}

/// Pantry item matching an ingredient name
///
/// Matching is case-insensitive containment in either direction, so
/// "chicken" matches "Chicken breast" and "cherry tomatoes" matches "Tomato"
/// only when one name contains the other.
#[must_use]
pub fn find_pantry_match<'a>(
    ingredient: &str,
    pantry: &'a [PrioritizedItem],
) -> Option<&'a PrioritizedItem> {
    let ingredient = ingredient.trim().to_lowercase();
    if ingredient.is_empty() {
        return None;
    }
    pantry.iter().find(|item| {
        let name = item.name().trim().to_lowercase();
        !name.is_empty() && (name.contains(&ingredient) || ingredient.contains(&name))
    })
}

/// Score candidates against the pantry and keep the best
///
/// A candidate survives when at least `min_matching` of its ingredients are
/// in the pantry. Its score is 10 per match, plus 20 per match that is
/// expiring soon, minus 15 per missing ingredient beyond `max_missing`.
/// Survivors are sorted by score (stable) and truncated to the limit.
#[must_use]
pub fn score_candidates(
    candidates: Vec<RecipeCandidate>,
    pantry: &[PrioritizedItem],
    rules: &MatchingRules,
    source: SuggestionSource,
) -> Vec<QuickRecipeSuggestion> {
    let total = candidates.len();
    let mut scored: Vec<QuickRecipeSuggestion> = candidates
        .into_iter()
        .filter_map(|candidate| score_candidate(candidate, pantry, rules, source))
        .collect();

    scored.sort_by(|a, b| b.priority_score.cmp(&a.priority_score));
    scored.truncate(rules.effective_limit());

    debug!(
        candidates = total,
        kept = scored.len(),
        source = source.as_str(),
        "Scored recipe candidates"
    );
    scored
}

fn score_candidate(
    recipe: RecipeCandidate,
    pantry: &[PrioritizedItem],
    rules: &MatchingRules,
    source: SuggestionSource,
) -> Option<QuickRecipeSuggestion> {
    let mut matching: Vec<String> = Vec::new();
    let mut missing: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut expiring_matches = 0usize;

    for ingredient in &recipe.ingredients {
        let name = ingredient.name.trim();
        if name.is_empty() {
            continue;
        }
        match find_pantry_match(name, pantry) {
            Some(item) => {
                if seen.insert(item.name().to_lowercase()) {
                    if item.is_expiring {
                        expiring_matches += 1;
                    }
                    matching.push(item.name().to_owned());
                }
            }
            None if !is_staple(name) => missing.push(name.to_owned()),
            None => {}
        }
    }

    if matching.len() < rules.min_matching {
        return None;
    }

    let excess_missing = missing.len().saturating_sub(rules.max_missing);
    let priority_score = points(matching.len(), MATCH_POINTS)
        .saturating_add(points(expiring_matches, EXPIRING_MATCH_BONUS))
        .saturating_sub(points(excess_missing, MISSING_PENALTY));

    let considered = matching.len() + missing.len();
    let match_percentage = if considered == 0 {
        0
    } else {
        ((matching.len() as f64 / considered as f64) * 100.0).round() as u8
    };

    Some(QuickRecipeSuggestion {
        id: Uuid::new_v4(),
        recipe,
        matching_ingredients: matching,
        missing_ingredients: missing,
        priority_score,
        match_percentage,
        source,
    })
}

fn points(count: usize, weight: i32) -> i32 {
    i32::try_from(count).map_or(i32::MAX, |count| count.saturating_mul(weight))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_core::models::{CandidateIngredient, IngredientCategory, PantryItem};

    fn pantry_item(name: &str, expiring: bool) -> PrioritizedItem {
        PrioritizedItem {
            item: PantryItem::new(name, IngredientCategory::Other),
            priority: 10,
            days_until_expiry: expiring.then_some(1),
            is_expiring: expiring,
            is_abundant: false,
        }
    }

    fn candidate(name: &str, ingredients: &[&str]) -> RecipeCandidate {
        RecipeCandidate {
            name: name.to_owned(),
            cuisine: "International".to_owned(),
            cook_time: "20 min".to_owned(),
            difficulty: "easy".to_owned(),
            servings: 2,
            ingredients: ingredients
                .iter()
                .map(|i| CandidateIngredient::new(*i, "1"))
                .collect(),
            instructions: vec!["Cook".to_owned()],
            nutrition: None,
            confidence: 0.8,
        }
    }

    fn pantry() -> Vec<PrioritizedItem> {
        vec![
            pantry_item("Chicken breast", true),
            pantry_item("Rice", false),
            pantry_item("Tomato", false),
        ]
    }

    #[test]
    fn test_bidirectional_containment() {
        let pantry = pantry();
        let name = |ingredient: &str| find_pantry_match(ingredient, &pantry).map(|i| i.name().to_owned());
        assert_eq!(name("chicken").as_deref(), Some("Chicken breast"));
        assert_eq!(name("Brown rice").as_deref(), Some("Rice"));
        assert!(find_pantry_match("tofu", &pantry).is_none());
        assert!(find_pantry_match("  ", &pantry).is_none());
    }

    #[test]
    fn test_staples_are_neither_matching_nor_missing() {
        let scored = score_candidates(
            vec![candidate("Rice Bowl", &["rice", "tomato", "olive oil", "sea salt"])],
            &pantry(),
            &MatchingRules::default(),
            SuggestionSource::Ai,
        );
        assert_eq!(scored[0].matching_ingredients, vec!["Rice", "Tomato"]);
        assert!(scored[0].missing_ingredients.is_empty());
        assert_eq!(scored[0].match_percentage, 100);
        assert_eq!(scored[0].priority_score, 20);
    }

    #[test]
    fn test_staples_match_whole_words() {
        for staple in ["salt", "Olive Oil", "garlic", "black pepper", "onions", "2 tbsp butter"] {
            assert!(is_staple(staple), "{staple}");
        }
        for produce in ["watermelon", "watercress", "bell pepper", "Red Bell Peppers", "boiled egg", "buttermilk"] {
            assert!(!is_staple(produce), "{produce}");
        }
    }

    #[test]
    fn test_produce_named_like_staples_counts_as_missing() {
        let scored = score_candidates(
            vec![candidate("Fruit Rice", &["rice", "tomato", "watermelon", "bell pepper", "salt"])],
            &pantry(),
            &MatchingRules::default(),
            SuggestionSource::Ai,
        );
        assert_eq!(scored[0].missing_ingredients, vec!["watermelon", "bell pepper"]);
    }

    #[test]
    fn test_expiring_bonus_and_missing_penalty() {
        let scored = score_candidates(
            vec![candidate(
                "Chicken Curry",
                &["chicken", "rice", "coconut milk", "curry paste", "lime", "cilantro"],
            )],
            &pantry(),
            &MatchingRules::default(),
            SuggestionSource::Ai,
        );
        let suggestion = &scored[0];
        // 2 matches, 1 expiring, 4 missing (2 over the allowance)
        assert_eq!(suggestion.priority_score, 20 + 20 - 30);
        assert_eq!(suggestion.missing_ingredients.len(), 4);
        assert_eq!(suggestion.match_percentage, 33);
    }

    #[test]
    fn test_candidates_below_minimum_are_dropped() {
        let scored = score_candidates(
            vec![candidate("Tofu Salad", &["tofu", "tomato", "lettuce"])],
            &pantry(),
            &MatchingRules::default(),
            SuggestionSource::Ai,
        );
        assert!(scored.is_empty());
    }

    #[test]
    fn test_duplicate_pantry_matches_count_once() {
        let scored = score_candidates(
            vec![candidate("Double Rice", &["rice", "brown rice", "tomato"])],
            &pantry(),
            &MatchingRules::default(),
            SuggestionSource::Fallback,
        );
        assert_eq!(scored[0].matching_ingredients, vec!["Rice", "Tomato"]);
        assert_eq!(scored[0].source, SuggestionSource::Fallback);
    }

    #[test]
    fn test_sorted_and_limited() {
        let candidates = vec![
            candidate("Plain", &["rice", "tomato"]),
            candidate("Best", &["chicken", "rice", "tomato"]),
            candidate("Also Plain", &["tomato", "rice"]),
        ];
        let rules = MatchingRules::default().with_limit(2);
        let scored = score_candidates(candidates, &pantry(), &rules, SuggestionSource::Ai);
        let names: Vec<&str> = scored.iter().map(|s| s.recipe.name.as_str()).collect();
        assert_eq!(names, vec!["Best", "Plain"]);
        assert_ne!(scored[0].id, scored[1].id);
    }

    #[test]
    fn test_effective_limit_is_clamped() {
        assert_eq!(MatchingRules::default().with_limit(0).effective_limit(), 1);
        assert_eq!(MatchingRules::default().with_limit(10).effective_limit(), MAX_SUGGESTIONS);
    }
}
