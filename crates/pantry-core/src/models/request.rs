// ABOUTME: Suggestion request parameters with difficulty and dietary filters
// ABOUTME: Immutable value object built once per call with builder-style setters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::generation::DEFAULT_MAX_COOK_TIME_MINUTES;
use crate::constants::scoring::MAX_SUGGESTIONS;

/// Difficulty filter applied to generated recipes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyFilter {
    /// Only simple techniques
    Easy,
    /// Moderate complexity allowed
    Medium,
    /// No preference
    #[default]
    #[serde(alias = "any")]
    Either,
}

impl DifficultyFilter {
    /// Stable label used in cache keys and prompts
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Either => "either",
        }
    }

    /// Phrase used in the generation prompt
    #[must_use]
    pub const fn prompt_phrase(&self) -> &'static str {
        match self {
            Self::Easy => "easy (basic techniques only)",
            Self::Medium => "medium (some technique required)",
            Self::Either => "easy or medium",
        }
    }
}

/// Dietary restriction for filtering recipes
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DietaryRestriction {
    /// No animal products
    Vegan,
    /// No meat or fish
    Vegetarian,
    /// No meat other than fish and seafood
    Pescatarian,
    /// No gluten-containing ingredients
    GlutenFree,
    /// No dairy products
    DairyFree,
    /// No nuts
    NutFree,
    /// Ketogenic / low carbohydrate
    Keto,
    /// Halal ingredients only
    Halal,
    /// Custom restriction with description
    Custom(String),
}

impl DietaryRestriction {
    /// Parse a short preference tag ("vegan", "gluten-free", "low carb")
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let normalized = tag.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "vegan" | "plant_based" => Self::Vegan,
            "vegetarian" | "veggie" => Self::Vegetarian,
            "pescatarian" | "pescetarian" => Self::Pescatarian,
            "gluten_free" | "glutenfree" | "celiac" => Self::GlutenFree,
            "dairy_free" | "dairyfree" | "lactose_free" => Self::DairyFree,
            "nut_free" | "nutfree" => Self::NutFree,
            "keto" | "ketogenic" | "low_carb" | "lowcarb" => Self::Keto,
            "halal" => Self::Halal,
            _ => Self::Custom(tag.trim().to_owned()),
        }
    }

    /// Explicit negative constraint for the generation prompt
    #[must_use]
    pub fn prompt_constraint(&self) -> String {
        match self {
            Self::Vegan => "No animal products (no meat, fish, dairy, eggs, or honey)".to_owned(),
            Self::Vegetarian => "No meat, poultry, or fish".to_owned(),
            Self::Pescatarian => "No meat or poultry (fish and seafood are fine)".to_owned(),
            Self::GlutenFree => "No gluten (no wheat, barley, rye, or regular pasta)".to_owned(),
            Self::DairyFree => "No dairy products (no milk, cheese, butter, or cream)".to_owned(),
            Self::NutFree => "No nuts or nut-derived ingredients".to_owned(),
            Self::Keto => "Low carbohydrate (no rice, pasta, bread, potatoes, or sugar)".to_owned(),
            Self::Halal => "Halal ingredients only (no pork or alcohol)".to_owned(),
            Self::Custom(description) => format!("Respect dietary preference: {description}"),
        }
    }
}

/// Parameters of a single suggestion request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    /// Requesting user
    pub user_id: Uuid,
    /// Upper bound on returned suggestions
    pub max_suggestions: usize,
    /// Cook-time ceiling in minutes
    pub max_cook_time_minutes: u32,
    /// Difficulty filter
    pub difficulty: DifficultyFilter,
    /// Boost items close to expiry
    pub prioritize_expiring: bool,
    /// Short dietary tags ("vegan", "gluten-free")
    pub dietary_preferences: Vec<String>,
    /// Skip the cache read path
    pub force_refresh: bool,
}

impl SuggestionRequest {
    /// Create a request with default parameters for a user
    #[must_use]
    pub const fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            max_suggestions: MAX_SUGGESTIONS,
            max_cook_time_minutes: DEFAULT_MAX_COOK_TIME_MINUTES,
            difficulty: DifficultyFilter::Either,
            prioritize_expiring: true,
            dietary_preferences: Vec::new(),
            force_refresh: false,
        }
    }

    /// Set the maximum number of suggestions
    #[must_use]
    pub const fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = max;
        self
    }

    /// Set the cook-time ceiling
    #[must_use]
    pub const fn with_max_cook_time(mut self, minutes: u32) -> Self {
        self.max_cook_time_minutes = minutes;
        self
    }

    /// Set the difficulty filter
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: DifficultyFilter) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Enable or disable the expiring-item boost
    #[must_use]
    pub const fn with_prioritize_expiring(mut self, enabled: bool) -> Self {
        self.prioritize_expiring = enabled;
        self
    }

    /// Add a dietary tag
    #[must_use]
    pub fn with_dietary_preference(mut self, tag: impl Into<String>) -> Self {
        self.dietary_preferences.push(tag.into());
        self
    }

    /// Bypass the cache read path
    #[must_use]
    pub const fn with_force_refresh(mut self, force: bool) -> Self {
        self.force_refresh = force;
        self
    }

    /// Number of suggestions actually returned: at least one, at most the hard ceiling
    #[must_use]
    pub fn effective_limit(&self) -> usize {
        self.max_suggestions.clamp(1, MAX_SUGGESTIONS)
    }

    /// Dietary tags lower-cased, trimmed, sorted, and deduplicated
    #[must_use]
    pub fn normalized_dietary_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .dietary_preferences
            .iter()
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }

    /// Dietary restrictions parsed from the normalized tags
    #[must_use]
    pub fn dietary_restrictions(&self) -> Vec<DietaryRestriction> {
        let mut restrictions: Vec<DietaryRestriction> = self
            .normalized_dietary_tags()
            .iter()
            .map(|tag| DietaryRestriction::from_tag(tag))
            .collect();
        restrictions.sort();
        restrictions.dedup();
        restrictions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dietary_tags_map_to_constraints() {
        assert_eq!(DietaryRestriction::from_tag("Gluten-Free"), DietaryRestriction::GlutenFree);
        assert_eq!(DietaryRestriction::from_tag("low carb"), DietaryRestriction::Keto);
        assert!(DietaryRestriction::Vegan
            .prompt_constraint()
            .starts_with("No animal products"));
        assert_eq!(
            DietaryRestriction::from_tag("paleo").prompt_constraint(),
            "Respect dietary preference: paleo"
        );
    }

    #[test]
    fn test_effective_limit_is_clamped() {
        let user = Uuid::new_v4();
        assert_eq!(SuggestionRequest::new(user).with_max_suggestions(0).effective_limit(), 1);
        assert_eq!(SuggestionRequest::new(user).with_max_suggestions(2).effective_limit(), 2);
        assert_eq!(SuggestionRequest::new(user).with_max_suggestions(10).effective_limit(), 4);
    }

    #[test]
    fn test_normalized_tags_sorted_and_deduplicated() {
        let request = SuggestionRequest::new(Uuid::new_v4())
            .with_dietary_preference("Vegan")
            .with_dietary_preference(" gluten-free ")
            .with_dietary_preference("vegan");
        assert_eq!(request.normalized_dietary_tags(), vec!["gluten-free", "vegan"]);
        assert_eq!(request.dietary_restrictions().len(), 2);
    }
}
