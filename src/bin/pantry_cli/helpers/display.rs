// ABOUTME: Output formatting helpers for pantry-chef
// ABOUTME: Renders suggestion responses and parsed candidates for the terminal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pantry_chef::models::{QuickRecipeSuggestion, RecipeCandidate, SuggestionResponse};

/// Print a suggestion response
pub fn display_response(response: &SuggestionResponse) {
    println!(
        "\n{} suggestion(s) from {}{}",
        response.suggestions.len(),
        response.source.as_str(),
        if response.from_cache { " (cached)" } else { "" }
    );
    if let Some(notice) = &response.notice {
        println!("Note: {}", notice.message());
    }
    println!("{}", "=".repeat(72));

    for (index, suggestion) in response.suggestions.iter().enumerate() {
        display_suggestion(index + 1, suggestion);
    }
}

fn display_suggestion(position: usize, suggestion: &QuickRecipeSuggestion) {
    let recipe = &suggestion.recipe;
    println!("{position}. {}", recipe.name);
    println!(
        "   {} | {} | {} | serves {}",
        recipe.cuisine, recipe.cook_time, recipe.difficulty, recipe.servings
    );
    println!(
        "   Match: {}% (score {})",
        suggestion.match_percentage, suggestion.priority_score
    );
    println!("   Uses: {}", suggestion.matching_ingredients.join(", "));
    if !suggestion.missing_ingredients.is_empty() {
        println!("   Needs: {}", suggestion.missing_ingredients.join(", "));
    }
    for (step, instruction) in recipe.instructions.iter().enumerate() {
        println!("     {}. {instruction}", step + 1);
    }
    println!();
}

/// Print parsed recipe candidates
pub fn display_candidates(candidates: &[RecipeCandidate]) {
    println!("\n{} candidate(s) parsed", candidates.len());
    println!("{}", "=".repeat(72));
    for candidate in candidates {
        println!(
            "- {} ({}, {}, confidence {:.2})",
            candidate.name, candidate.cuisine, candidate.cook_time, candidate.confidence
        );
        for ingredient in &candidate.ingredients {
            if ingredient.amount.is_empty() {
                println!("    * {}", ingredient.name);
            } else {
                println!("    * {} - {}", ingredient.name, ingredient.amount);
            }
        }
    }
}
