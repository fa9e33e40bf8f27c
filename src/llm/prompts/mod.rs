// ABOUTME: System prompts for recipe generation loaded at compile time
// ABOUTME: Keeps the long-form model instructions in markdown next to the code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # System Prompts
//!
//! Prompts are loaded at compile time from markdown files for easy maintenance.

/// Instructions sent as the system message, or ahead of the user prompt for
/// providers without a system role
pub const RECIPE_SUGGESTION_SYSTEM_PROMPT: &str = include_str!("recipe_suggestion_system.md");

/// Get the recipe suggestion system prompt
#[must_use]
pub const fn get_recipe_system_prompt() -> &'static str {
    RECIPE_SUGGESTION_SYSTEM_PROMPT
}
