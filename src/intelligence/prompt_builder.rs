// ABOUTME: Builds the recipe generation prompt from the prioritized pantry and request
// ABOUTME: Output is a pure function of its inputs so identical requests give identical prompts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pantry_core::constants::generation::{
    PROMPT_MAX_EXTRA_INGREDIENTS, PROMPT_MIN_PANTRY_INGREDIENTS,
};
use pantry_core::constants::scoring::COMMON_STAPLES;
use pantry_core::models::{DietaryRestriction, PrioritizedItem, SuggestionRequest};

const ROLE_LINE: &str =
    "You are a practical home cook helping someone use what is already in their kitchen.";

const OUTPUT_SCHEMA: &str = r#"Respond with ONLY a JSON array, no prose and no code fences:
[
  {
    "name": "Recipe name",
    "cuisine": "Italian",
    "cookTime": "20 min",
    "difficulty": "easy",
    "servings": 2,
    "ingredients": [{"name": "ingredient", "amount": "1 cup"}],
    "instructions": ["Step one", "Step two"],
    "nutrition": {"calories": 450, "protein": 25, "carbs": 40, "fat": 15},
    "confidence": 0.8
  }
]"#;

/// Render the user prompt for one suggestion request
///
/// Sections appear in a fixed order: expiring items, abundant items, the
/// full inventory, requirements, dietary constraints, and the output schema.
/// Empty sections are omitted.
#[must_use]
pub fn build_suggestion_prompt(pantry: &[PrioritizedItem], request: &SuggestionRequest) -> String {
    let mut sections: Vec<String> = vec![ROLE_LINE.to_owned()];

    let expiring: Vec<String> = pantry
        .iter()
        .filter(|item| item.is_expiring)
        .map(describe_expiring)
        .collect();
    if !expiring.is_empty() {
        sections.push(bulleted("EXPIRING SOON (use these first):", &expiring));
    }

    let abundant: Vec<String> = pantry
        .iter()
        .filter(|item| item.is_abundant)
        .map(|item| item.name().to_owned())
        .collect();
    if !abundant.is_empty() {
        sections.push(bulleted("ABUNDANT (plenty on hand):", &abundant));
    }

    let available: Vec<String> = pantry.iter().map(describe_available).collect();
    sections.push(bulleted("AVAILABLE INGREDIENTS:", &available));

    sections.push(requirements(request));

    let dietary: Vec<String> = request
        .dietary_restrictions()
        .iter()
        .map(DietaryRestriction::prompt_constraint)
        .collect();
    if !dietary.is_empty() {
        sections.push(bulleted("DIETARY RESTRICTIONS (strict):", &dietary));
    }

    sections.push(OUTPUT_SCHEMA.to_owned());
    sections.join("\n\n")
}

fn bulleted(heading: &str, lines: &[String]) -> String {
    let mut block = heading.to_owned();
    for line in lines {
        block.push_str("\n- ");
        block.push_str(line);
    }
    block
}

fn describe_expiring(item: &PrioritizedItem) -> String {
    match item.days_until_expiry {
        Some(days) if days < 0 => format!("{} (past its date)", item.name()),
        Some(0) => format!("{} (expires today)", item.name()),
        Some(1) => format!("{} (expires in 1 day)", item.name()),
        Some(days) => format!("{} (expires in {days} days)", item.name()),
        None => item.name().to_owned(),
    }
}

fn describe_available(item: &PrioritizedItem) -> String {
    let quantity = item.item.display_quantity();
    if quantity.is_empty() {
        item.name().to_owned()
    } else {
        format!("{} ({quantity})", item.name())
    }
}

fn requirements(request: &SuggestionRequest) -> String {
    let count = request.effective_limit();
    let plural = if count == 1 { "recipe" } else { "recipes" };
    let lines = vec![
        format!("Suggest exactly {count} {plural}."),
        format!("Each recipe must use at least {PROMPT_MIN_PANTRY_INGREDIENTS} ingredients from the available list."),
        format!(
            "Each recipe may add at most {PROMPT_MAX_EXTRA_INGREDIENTS} ingredients that are not in the pantry, not counting staples."
        ),
        format!("Staples you may assume: {}.", COMMON_STAPLES.join(", ")),
        format!(
            "Total cooking time must not exceed {} minutes.",
            request.max_cook_time_minutes
        ),
        format!("Difficulty: {}.", request.difficulty.prompt_phrase()),
    ];
    bulleted("REQUIREMENTS:", &lines)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;
    use pantry_core::models::{DifficultyFilter, IngredientCategory, PantryItem};
    use pantry_intelligence::prioritize_pantry;
    use uuid::Uuid;

    use super::*;

    fn pantry() -> Vec<PrioritizedItem> {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let items = vec![
            PantryItem::new("Tomato", IngredientCategory::Vegetables)
                .with_quantity("4", "pieces")
                .with_expiry(NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()),
            PantryItem::new("Rice", IngredientCategory::Grains).with_quantity("2", "kg"),
            PantryItem::new("Milk", IngredientCategory::Dairy)
                .with_expiry(NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()),
        ];
        prioritize_pantry(&items, true, today)
    }

    #[test]
    fn test_prompt_lists_expiring_and_abundant_items() {
        let request = SuggestionRequest::new(Uuid::nil());
        let prompt = build_suggestion_prompt(&pantry(), &request);

        assert!(prompt.contains("- Tomato (expires in 2 days)"));
        assert!(prompt.contains("- Milk (past its date)"));
        assert!(prompt.contains("ABUNDANT (plenty on hand):\n- Tomato"));
        assert!(prompt.contains("- Rice (2 kg)"));
    }

    #[test]
    fn test_prompt_carries_requirements() {
        let request = SuggestionRequest::new(Uuid::nil())
            .with_max_suggestions(2)
            .with_max_cook_time(20)
            .with_difficulty(DifficultyFilter::Easy);
        let prompt = build_suggestion_prompt(&pantry(), &request);

        assert!(prompt.contains("Suggest exactly 2 recipes."));
        assert!(prompt.contains("at least 3 ingredients"));
        assert!(prompt.contains("at most 2 ingredients"));
        assert!(prompt.contains("must not exceed 20 minutes"));
        assert!(prompt.contains("Difficulty: easy (basic techniques only)."));
        assert!(!prompt.contains("DIETARY"));
    }

    #[test]
    fn test_dietary_order_does_not_change_prompt() {
        let first = SuggestionRequest::new(Uuid::nil())
            .with_dietary_preference("vegan")
            .with_dietary_preference("gluten-free");
        let second = SuggestionRequest::new(Uuid::nil())
            .with_dietary_preference("Gluten Free")
            .with_dietary_preference("VEGAN");

        let a = build_suggestion_prompt(&pantry(), &first);
        let b = build_suggestion_prompt(&pantry(), &second);
        assert_eq!(a, b);
        assert!(a.contains("No animal products"));
    }
}
