// ABOUTME: Fallback synthesizer building template recipes from top-priority pantry items
// ABOUTME: Also provides the static last-resort suggestion set used when nothing else works
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Deterministic recipes for when generation is unavailable.
//!
//! Four templates (stir-fry, protein bowl, vegetable soup, pasta) each ask
//! for ingredients by category. A slot is filled with the highest-priority
//! unused item of a preferred category, then of any category, then with a
//! generic ingredient word, so a sparse pantry never leaves a hole.

use pantry_core::models::{
    CandidateIngredient, IngredientCategory, NutritionEstimate, PrioritizedItem,
    QuickRecipeSuggestion, RecipeCandidate, SuggestionSource,
};
use uuid::Uuid;

/// Ingredient slot a template needs filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Protein,
    Vegetable,
    Grain,
    Pasta,
}

impl Slot {
    const fn preferences(self) -> &'static [IngredientCategory] {
        match self {
            Self::Protein => &[IngredientCategory::Protein, IngredientCategory::Dairy],
            Self::Vegetable => &[IngredientCategory::Vegetables, IngredientCategory::Fruits],
            Self::Grain | Self::Pasta => &[IngredientCategory::Grains],
        }
    }

    const fn generic(self) -> &'static str {
        match self {
            Self::Protein => "eggs",
            Self::Vegetable => "mixed vegetables",
            Self::Grain => "rice",
            Self::Pasta => "pasta",
        }
    }

    /// Pasta slots only accept pasta-like grains
    fn accepts(self, item: &PrioritizedItem) -> bool {
        match self {
            Self::Pasta => {
                let name = item.name().to_lowercase();
                PASTA_WORDS.iter().any(|word| name.contains(word))
            }
            _ => true,
        }
    }

    const fn falls_back_to_any(self) -> bool {
        !matches!(self, Self::Pasta)
    }
}

const PASTA_WORDS: &[&str] = &[
    "pasta", "spaghetti", "penne", "fusilli", "linguine", "macaroni", "noodle", "rigatoni",
];

/// Categories never used to fill a slot on their own
const SEASONING_CATEGORIES: &[IngredientCategory] = &[
    IngredientCategory::Spices,
    IngredientCategory::Herbs,
    IngredientCategory::Oils,
];

/// Per-template ingredient picker tracking which items are already used
///
/// In round `n` a slot takes the `n`-th eligible item (wrapping), so cycled
/// templates lead with different ingredients.
struct Picker<'a> {
    items: &'a [PrioritizedItem],
    used: Vec<bool>,
    round: usize,
}

impl<'a> Picker<'a> {
    fn new(items: &'a [PrioritizedItem], round: usize) -> Self {
        Self {
            items,
            used: vec![false; items.len()],
            round,
        }
    }

    /// Name for a slot, preferring pantry items in priority order
    fn pick(&mut self, slot: Slot) -> String {
        let preferred = slot.preferences().iter().find_map(|category| {
            self.position(|item| item.category() == *category && slot.accepts(item))
        });
        let chosen = preferred.or_else(|| {
            if slot.falls_back_to_any() {
                self.position(|item| !SEASONING_CATEGORIES.contains(&item.category()))
            } else {
                None
            }
        });

        match chosen {
            Some(index) => {
                self.used[index] = true;
                self.items[index].name().to_owned()
            }
            None => slot.generic().to_owned(),
        }
    }

    fn position(&self, predicate: impl Fn(&PrioritizedItem) -> bool) -> Option<usize> {
        let eligible: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(index, item)| !self.used[*index] && predicate(item))
            .map(|(index, _)| index)
            .collect();
        if eligible.is_empty() {
            None
        } else {
            Some(eligible[self.round % eligible.len()])
        }
    }
}

type Template = fn(&mut Picker<'_>) -> RecipeCandidate;

const TEMPLATES: [Template; 4] = [stir_fry, protein_bowl, vegetable_soup, pasta];

/// Build `count` template recipes from prioritized items
///
/// `items` should already be sorted by priority and capped. Templates are
/// applied in order; beyond four, the cycle repeats and each slot moves on
/// to the next eligible item.
#[must_use]
pub fn synthesize_candidates(items: &[PrioritizedItem], count: usize) -> Vec<RecipeCandidate> {
    (0..count)
        .map(|n| {
            let mut picker = Picker::new(items, n / TEMPLATES.len());
            TEMPLATES[n % TEMPLATES.len()](&mut picker)
        })
        .collect()
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn ingredients(list: &[(&str, &str)]) -> Vec<CandidateIngredient> {
    list.iter()
        .map(|(name, amount)| CandidateIngredient::new(*name, *amount))
        .collect()
}

fn stir_fry(picker: &mut Picker<'_>) -> RecipeCandidate {
    let protein = picker.pick(Slot::Protein);
    let vegetable = picker.pick(Slot::Vegetable);
    let grain = picker.pick(Slot::Grain);

    RecipeCandidate {
        name: format!("{} & {} Stir-Fry", title_case(&protein), title_case(&vegetable)),
        cuisine: "Asian".to_owned(),
        cook_time: "20 min".to_owned(),
        difficulty: "easy".to_owned(),
        servings: 2,
        ingredients: ingredients(&[
            (protein.as_str(), "250 g, bite-sized pieces"),
            (vegetable.as_str(), "2 cups, sliced"),
            (grain.as_str(), "1 cup"),
            ("soy sauce", "2 tbsp"),
            ("garlic", "2 cloves"),
            ("oil", "1 tbsp"),
        ]),
        instructions: vec![
            format!("Cook the {grain} according to package directions."),
            format!("Heat oil in a wok and sear the {protein} until cooked through."),
            format!("Add garlic and the {vegetable}; stir-fry for 3 to 4 minutes."),
            "Toss with soy sauce and serve hot.".to_owned(),
        ],
        nutrition: Some(NutritionEstimate::new(450, 30, 45, 14)),
        confidence: 0.80,
    }
}

fn protein_bowl(picker: &mut Picker<'_>) -> RecipeCandidate {
    let protein = picker.pick(Slot::Protein);
    let grain = picker.pick(Slot::Grain);
    let vegetable = picker.pick(Slot::Vegetable);

    RecipeCandidate {
        name: format!("{} Power Bowl", title_case(&protein)),
        cuisine: "Fusion".to_owned(),
        cook_time: "25 min".to_owned(),
        difficulty: "easy".to_owned(),
        servings: 2,
        ingredients: ingredients(&[
            (protein.as_str(), "200 g"),
            (grain.as_str(), "1 cup, cooked"),
            (vegetable.as_str(), "1 cup, chopped"),
            ("olive oil", "1 tbsp"),
            ("lemon", "1/2"),
            ("salt and pepper", "to taste"),
        ]),
        instructions: vec![
            format!("Prepare the {grain} and divide between two bowls."),
            format!("Season and cook the {protein} in olive oil."),
            format!("Roast or saute the {vegetable} until tender."),
            "Top the bowls, squeeze over lemon, and season.".to_owned(),
        ],
        nutrition: Some(NutritionEstimate::new(520, 35, 50, 16)),
        confidence: 0.75,
    }
}

fn vegetable_soup(picker: &mut Picker<'_>) -> RecipeCandidate {
    let vegetable = picker.pick(Slot::Vegetable);
    let second = picker.pick(Slot::Vegetable);
    let body = picker.pick(Slot::Grain);

    RecipeCandidate {
        name: format!("Hearty {} Soup", title_case(&vegetable)),
        cuisine: "Comfort".to_owned(),
        cook_time: "30 min".to_owned(),
        difficulty: "easy".to_owned(),
        servings: 4,
        ingredients: ingredients(&[
            (vegetable.as_str(), "3 cups, chopped"),
            (second.as_str(), "1 cup, diced"),
            (body.as_str(), "1/2 cup"),
            ("onion", "1"),
            ("garlic", "2 cloves"),
            ("vegetable broth", "4 cups"),
        ]),
        instructions: vec![
            "Saute onion and garlic in a large pot until soft.".to_owned(),
            format!("Add the {vegetable} and {second}; cook for 5 minutes."),
            format!("Pour in broth, add the {body}, and simmer for 20 minutes."),
            "Season to taste and serve.".to_owned(),
        ],
        nutrition: Some(NutritionEstimate::new(220, 8, 35, 5)),
        confidence: 0.70,
    }
}

fn pasta(picker: &mut Picker<'_>) -> RecipeCandidate {
    let noodles = picker.pick(Slot::Pasta);
    let vegetable = picker.pick(Slot::Vegetable);
    let protein = picker.pick(Slot::Protein);

    RecipeCandidate {
        name: format!("{} {} with {}", title_case(&vegetable), title_case(&noodles), title_case(&protein)),
        cuisine: "Italian".to_owned(),
        cook_time: "25 min".to_owned(),
        difficulty: "easy".to_owned(),
        servings: 2,
        ingredients: ingredients(&[
            (noodles.as_str(), "200 g"),
            (vegetable.as_str(), "1 1/2 cups"),
            (protein.as_str(), "150 g"),
            ("garlic", "2 cloves"),
            ("olive oil", "2 tbsp"),
            ("parmesan", "1/4 cup, grated"),
        ]),
        instructions: vec![
            format!("Boil the {noodles} in salted water until al dente."),
            format!("Cook garlic in olive oil, then add the {protein}."),
            format!("Stir in the {vegetable} and cook until just tender."),
            "Toss with the drained pasta and finish with parmesan.".to_owned(),
        ],
        nutrition: Some(NutritionEstimate::new(580, 28, 70, 18)),
        confidence: 0.65,
    }
}

struct StaticRecipe {
    name: &'static str,
    cuisine: &'static str,
    cook_time: &'static str,
    ingredients: &'static [(&'static str, &'static str)],
    instructions: &'static [&'static str],
    nutrition: NutritionEstimate,
    matching: &'static [&'static str],
    missing: &'static [&'static str],
    priority_score: i32,
}

const STATIC_RECIPES: [StaticRecipe; 3] = [
    StaticRecipe {
        name: "Simple Garlic Pasta",
        cuisine: "Italian",
        cook_time: "15 min",
        ingredients: &[
            ("pasta", "200 g"),
            ("garlic", "4 cloves"),
            ("olive oil", "3 tbsp"),
            ("parmesan", "1/4 cup"),
        ],
        instructions: &[
            "Cook the pasta until al dente.",
            "Gently fry sliced garlic in olive oil until golden.",
            "Toss the pasta with the garlic oil and top with parmesan.",
        ],
        nutrition: NutritionEstimate::new(520, 16, 72, 18),
        matching: &["pasta", "garlic", "olive oil"],
        missing: &["parmesan"],
        priority_score: 30,
    },
    StaticRecipe {
        name: "Classic Scrambled Eggs",
        cuisine: "American",
        cook_time: "10 min",
        ingredients: &[
            ("eggs", "4"),
            ("butter", "1 tbsp"),
            ("milk", "2 tbsp"),
            ("chives", "1 tbsp, chopped"),
        ],
        instructions: &[
            "Whisk the eggs with milk and a pinch of salt.",
            "Melt butter over low heat and add the eggs.",
            "Stir gently until softly set, then sprinkle with chives.",
        ],
        nutrition: NutritionEstimate::new(320, 22, 3, 24),
        matching: &["eggs", "butter", "milk"],
        missing: &["chives"],
        priority_score: 25,
    },
    StaticRecipe {
        name: "Pantry Fried Rice",
        cuisine: "Asian",
        cook_time: "20 min",
        ingredients: &[
            ("rice", "2 cups, cooked"),
            ("eggs", "2"),
            ("soy sauce", "2 tbsp"),
            ("frozen peas", "1/2 cup"),
            ("oil", "1 tbsp"),
        ],
        instructions: &[
            "Heat oil in a large pan and scramble the eggs; set aside.",
            "Fry the rice until lightly crisp.",
            "Add peas, soy sauce and the eggs; toss until hot.",
        ],
        nutrition: NutritionEstimate::new(480, 15, 68, 14),
        matching: &["rice", "eggs", "soy sauce"],
        missing: &["frozen peas"],
        priority_score: 20,
    },
];

const STATIC_CONFIDENCE: f64 = 0.6;

/// Generic suggestions that need no pantry at all
///
/// Returns at least one suggestion for any `limit`.
#[must_use]
pub fn static_suggestions(limit: usize) -> Vec<QuickRecipeSuggestion> {
    STATIC_RECIPES
        .iter()
        .take(limit.max(1))
        .map(|recipe| {
            let considered = recipe.matching.len() + recipe.missing.len();
            QuickRecipeSuggestion {
                id: Uuid::new_v4(),
                recipe: RecipeCandidate {
                    name: recipe.name.to_owned(),
                    cuisine: recipe.cuisine.to_owned(),
                    cook_time: recipe.cook_time.to_owned(),
                    difficulty: "easy".to_owned(),
                    servings: 2,
                    ingredients: ingredients(recipe.ingredients),
                    instructions: recipe.instructions.iter().map(|s| (*s).to_owned()).collect(),
                    nutrition: Some(recipe.nutrition),
                    confidence: STATIC_CONFIDENCE,
                },
                matching_ingredients: recipe.matching.iter().map(|s| (*s).to_owned()).collect(),
                missing_ingredients: recipe.missing.iter().map(|s| (*s).to_owned()).collect(),
                priority_score: recipe.priority_score,
                match_percentage: ((recipe.matching.len() * 100) / considered.max(1)) as u8,
                source: SuggestionSource::Static,
            }
        })
        .collect()
}
