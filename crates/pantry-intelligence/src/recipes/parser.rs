// ABOUTME: Response parser extracting recipe candidates from unreliable generator output
// ABOUTME: Layered extraction strategies with progressive JSON repair and field tolerance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Generative providers rarely return clean JSON. Replies arrive wrapped in
//! prose or markdown fences, with trailing commas, single quotes, unquoted
//! keys, or field names that drift between `name` and `title`. This module
//! tries progressively looser extraction strategies and stops at the first
//! one that yields at least one valid candidate.

use std::sync::LazyLock;

use pantry_core::constants::generation::DEFAULT_CANDIDATE_CONFIDENCE;
use pantry_core::errors::{AppError, ErrorCode};
use pantry_core::models::{CandidateIngredient, NutritionEstimate, RecipeCandidate};
use regex::{Captures, Regex};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

/// Name given to candidates that arrive without one
pub const UNNAMED_RECIPE: &str = "Pantry Recipe";

const DEFAULT_CUISINE: &str = "International";
const DEFAULT_DIFFICULTY: &str = "easy";
const DEFAULT_COOK_TIME: &str = "unknown";
const DEFAULT_SERVINGS: u32 = 2;
const MAX_QUOTE_REPAIR_PASSES: usize = 16;

const NAME_KEYS: &[&str] = &["name", "title", "recipe_name", "recipeName"];
const COOK_TIME_KEYS: &[&str] = &[
    "cook_time",
    "cookTime",
    "time",
    "total_time",
    "totalTime",
    "cooking_time",
    "cookingTime",
];
const INGREDIENT_KEYS: &[&str] = &["ingredients", "ingredient_list", "ingredientList"];
const INSTRUCTION_KEYS: &[&str] = &["instructions", "steps", "method", "directions"];
const NUTRITION_KEYS: &[&str] = &["nutrition", "nutrition_estimate", "nutritionEstimate"];
const LIST_KEYS: &[&str] = &["recipes", "suggestions"];

static TRAILING_COMMA: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r",(\s*[\]}])").ok());

static SINGLE_QUOTED: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r#"([\[{,:]\s*)'((?:[^'\\]|\\.)*)'(\s*[,:}\]])"#).ok()
});

static UNQUOTED_KEY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"([{,]\s*)([A-Za-z_][A-Za-z0-9_]*)(\s*:)").ok());

static STEP_NUMBERING: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(?:step\s*)?\d+\s*[.):-]\s*").ok());

static LEADING_NUMBER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+(?:\.\d+)?)").ok());

/// Raw output from a generative provider
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderOutput {
    /// Free-form text, possibly containing JSON
    Text(String),
    /// Output the provider already decoded as JSON
    Json(Value),
}

/// Why no candidates could be extracted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The provider returned nothing usable
    #[error("provider returned an empty response")]
    EmptyResponse,
    /// Every strategy ran without producing a valid candidate
    #[error("no recipe candidates found after {attempted} extraction strategies")]
    NoCandidates {
        /// Strategies attempted
        attempted: usize,
    },
}

impl From<ParseError> for AppError {
    fn from(error: ParseError) -> Self {
        Self::new(ErrorCode::InvalidFormat, error.to_string())
    }
}

/// Extract recipe candidates from provider output
///
/// # Errors
///
/// Returns [`ParseError`] when the output is empty or no strategy yields a
/// valid candidate.
pub fn parse_recipe_candidates(output: &ProviderOutput) -> Result<Vec<RecipeCandidate>, ParseError> {
    match output {
        ProviderOutput::Text(text) => parse_recipe_text(text),
        ProviderOutput::Json(Value::String(text)) => parse_recipe_text(text),
        ProviderOutput::Json(Value::Null) => Err(ParseError::EmptyResponse),
        ProviderOutput::Json(value) => {
            let candidates = candidates_from_value(value);
            if candidates.is_empty() {
                Err(ParseError::NoCandidates { attempted: 1 })
            } else {
                Ok(candidates)
            }
        }
    }
}

/// Extract recipe candidates from free-form text
///
/// Strategies, in order:
/// 1. the first balanced `[...]` array not nested inside an object
/// 2. every top-level balanced `{...}` object
/// 3. the span from the first opening bracket to the last closing one
///
/// # Errors
///
/// Returns [`ParseError`] when the text is blank or no strategy yields a
/// valid candidate.
pub fn parse_recipe_text(text: &str) -> Result<Vec<RecipeCandidate>, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::EmptyResponse);
    }

    let strategies: [(&str, fn(&str) -> Vec<Value>); 3] = [
        ("first_array", first_array_strategy),
        ("object_scan", object_scan_strategy),
        ("outer_span", outer_span_strategy),
    ];

    for (label, strategy) in &strategies {
        let candidates: Vec<RecipeCandidate> = strategy(text)
            .iter()
            .flat_map(candidates_from_value)
            .collect();
        if !candidates.is_empty() {
            debug!(strategy = label, count = candidates.len(), "Parsed recipe candidates");
            return Ok(candidates);
        }
        debug!(strategy = label, "Extraction strategy produced no candidates");
    }

    Err(ParseError::NoCandidates {
        attempted: strategies.len(),
    })
}

fn first_array_strategy(text: &str) -> Vec<Value> {
    top_level_array_start(text)
        .and_then(|start| balanced_span(text, start))
        .and_then(repair_json)
        .into_iter()
        .collect()
}

fn object_scan_strategy(text: &str) -> Vec<Value> {
    let mut values = Vec::new();
    let mut cursor = 0;
    while let Some(offset) = text[cursor..].find('{') {
        let start = cursor + offset;
        match balanced_span(text, start) {
            Some(span) => {
                if let Some(value) = repair_json(span) {
                    values.push(value);
                }
                cursor = start + span.len();
            }
            None => break,
        }
    }
    values
}

fn outer_span_strategy(text: &str) -> Vec<Value> {
    let start = text.find(['[', '{']);
    let end = text.rfind([']', '}']);
    match (start, end) {
        (Some(start), Some(end)) if end > start => {
            repair_json(&text[start..=end]).into_iter().collect()
        }
        _ => Vec::new(),
    }
}

/// Slice from an opening bracket at `start` to its matching close
///
/// Brackets inside double-quoted strings are ignored.
/// Offset of the first `[` that is not nested inside an object
///
/// A reply holding one recipe object, or several loose ones, has its first
/// `[` inside an `ingredients` list; that array is not a recipe list.
fn top_level_array_start(text: &str) -> Option<usize> {
    let mut object_depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => object_depth += 1,
            '}' => object_depth = object_depth.saturating_sub(1),
            '[' if object_depth == 0 => return Some(offset),
            _ => {}
        }
    }
    None
}

fn balanced_span(text: &str, start: usize) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '[' | '{' => depth += 1,
            ']' | '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Decode a JSON fragment, repairing common generator mistakes
///
/// Repairs escalate: strict decode, then code fences, smart quotes, trailing
/// commas and single-quoted strings, then unquoted keys.
#[must_use]
pub fn repair_json(fragment: &str) -> Option<Value> {
    let fragment = fragment.trim();
    if let Ok(value) = serde_json::from_str(fragment) {
        return Some(value);
    }

    let cleaned = fix_single_quotes(&strip_trailing_commas(&normalize_quotes(
        strip_code_fences(fragment),
    )));
    if let Ok(value) = serde_json::from_str(&cleaned) {
        return Some(value);
    }

    let keyed = quote_bare_keys(&cleaned);
    serde_json::from_str(&keyed).ok()
}

fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let body = rest.split_once('\n').map_or(rest, |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

fn normalize_quotes(text: &str) -> String {
    text.replace(['\u{201c}', '\u{201d}'], "\"")
}

fn strip_trailing_commas(text: &str) -> String {
    match TRAILING_COMMA.as_ref() {
        Some(pattern) => pattern.replace_all(text, "$1").into_owned(),
        None => text.to_owned(),
    }
}

fn fix_single_quotes(text: &str) -> String {
    let Some(pattern) = SINGLE_QUOTED.as_ref() else {
        return text.to_owned();
    };

    // Adjacent matches share a delimiter, so repeat until nothing changes
    let mut current = text.to_owned();
    for _ in 0..MAX_QUOTE_REPAIR_PASSES {
        let next = pattern
            .replace_all(&current, |caps: &Captures<'_>| {
                let inner = caps[2].replace("\\'", "'").replace('"', "\\\"");
                format!("{}\"{inner}\"{}", &caps[1], &caps[3])
            })
            .into_owned();
        if next == current {
            break;
        }
        current = next;
    }
    current
}

fn quote_bare_keys(text: &str) -> String {
    match UNQUOTED_KEY.as_ref() {
        Some(pattern) => pattern.replace_all(text, "$1\"$2\"$3").into_owned(),
        None => text.to_owned(),
    }
}

/// Convert a decoded JSON value into candidates
///
/// Accepts an array of recipe objects, an object wrapping such an array
/// under `recipes` or `suggestions`, or a single recipe object.
#[must_use]
pub fn candidates_from_value(value: &Value) -> Vec<RecipeCandidate> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_object)
            .filter_map(candidate_from_object)
            .collect(),
        Value::Object(map) => {
            if let Some(list) = LIST_KEYS.iter().find_map(|key| map.get(*key)) {
                if list.is_array() {
                    return candidates_from_value(list);
                }
            }
            candidate_from_object(map).into_iter().collect()
        }
        _ => Vec::new(),
    }
}

fn candidate_from_object(map: &Map<String, Value>) -> Option<RecipeCandidate> {
    let name = first_text(map, NAME_KEYS);
    let ingredients = INGREDIENT_KEYS
        .iter()
        .find_map(|key| map.get(*key))
        .map(parse_ingredients)
        .unwrap_or_default();
    let instructions = INSTRUCTION_KEYS
        .iter()
        .find_map(|key| map.get(*key))
        .map(parse_instructions)
        .unwrap_or_default();

    if name.is_none() && ingredients.is_empty() && instructions.is_empty() {
        return None;
    }

    Some(RecipeCandidate {
        name: name.unwrap_or_else(|| UNNAMED_RECIPE.to_owned()),
        cuisine: first_text(map, &["cuisine", "cuisine_type", "cuisineType"])
            .unwrap_or_else(|| DEFAULT_CUISINE.to_owned()),
        cook_time: parse_cook_time(map),
        difficulty: first_text(map, &["difficulty", "skill_level"])
            .map_or_else(|| DEFAULT_DIFFICULTY.to_owned(), |d| d.to_lowercase()),
        servings: map
            .get("servings")
            .and_then(leading_number)
            .and_then(|n| to_u32(n).filter(|s| *s > 0))
            .unwrap_or(DEFAULT_SERVINGS),
        ingredients,
        instructions,
        nutrition: NUTRITION_KEYS
            .iter()
            .find_map(|key| map.get(*key))
            .and_then(parse_nutrition),
        confidence: map
            .get("confidence")
            .and_then(leading_number)
            .map_or(DEFAULT_CANDIDATE_CONFIDENCE, normalize_confidence),
    })
}

fn first_text(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| map.get(*key))
        .find_map(value_text)
}

fn value_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_owned(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

fn parse_cook_time(map: &Map<String, Value>) -> String {
    COOK_TIME_KEYS
        .iter()
        .filter_map(|key| map.get(*key))
        .find_map(|value| match value {
            Value::Number(n) => Some(format!("{n} min")),
            other => value_text(other),
        })
        .unwrap_or_else(|| DEFAULT_COOK_TIME.to_owned())
}

fn parse_ingredients(value: &Value) -> Vec<CandidateIngredient> {
    let Some(items) = value.as_array() else {
        return value_text(value)
            .map(|text| {
                text.split([',', '\n'])
                    .filter_map(|part| {
                        let part = part.trim();
                        (!part.is_empty()).then(|| CandidateIngredient::new(part, ""))
                    })
                    .collect()
            })
            .unwrap_or_default();
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::Object(fields) => {
                let name = first_text(fields, &["name", "item", "ingredient"])?;
                let amount = first_text(fields, &["amount", "quantity", "qty"]).unwrap_or_default();
                let amount = match first_text(fields, &["unit"]) {
                    Some(unit) if !amount.is_empty() => format!("{amount} {unit}"),
                    _ => amount,
                };
                Some(CandidateIngredient::new(name, amount))
            }
            other => value_text(other).map(|name| CandidateIngredient::new(name, "")),
        })
        .collect()
}

fn parse_instructions(value: &Value) -> Vec<String> {
    let steps: Vec<String> = match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::Object(fields) => first_text(fields, &["step", "text", "instruction"]),
                other => value_text(other),
            })
            .collect(),
        Value::String(text) => text.lines().map(str::to_owned).collect(),
        _ => Vec::new(),
    };

    steps
        .iter()
        .map(|step| strip_step_number(step))
        .filter(|step| !step.is_empty())
        .collect()
}

fn strip_step_number(step: &str) -> String {
    let trimmed = step.trim();
    STEP_NUMBERING
        .as_ref()
        .map_or_else(|| trimmed.to_owned(), |p| p.replace(trimmed, "").trim().to_owned())
}

fn parse_nutrition(value: &Value) -> Option<NutritionEstimate> {
    let fields = value.as_object()?;
    let read = |keys: &[&str]| {
        keys.iter()
            .filter_map(|key| fields.get(*key))
            .find_map(leading_number)
            .and_then(to_u32)
    };

    let calories = read(&["calories", "kcal", "energy"]);
    let protein = read(&["protein_g", "protein"]);
    let carbs = read(&["carbs_g", "carbs", "carbohydrates"]);
    let fat = read(&["fat_g", "fat"]);

    if calories.is_none() && protein.is_none() && carbs.is_none() && fat.is_none() {
        return None;
    }
    Some(NutritionEstimate::new(
        calories.unwrap_or(0),
        protein.unwrap_or(0),
        carbs.unwrap_or(0),
        fat.unwrap_or(0),
    ))
}

/// Numeric value of a number or the leading number in a string like "25g"
fn leading_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => LEADING_NUMBER
            .as_ref()?
            .captures(s)
            .and_then(|caps| caps[1].parse().ok()),
        _ => None,
    }
}

fn to_u32(value: f64) -> Option<u32> {
    if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
        return None;
    }
    Some(value.round() as u32)
}

/// Clamp to [0, 1], reading values above 1 as percentages
fn normalize_confidence(value: f64) -> f64 {
    if !value.is_finite() {
        return DEFAULT_CANDIDATE_CONFIDENCE;
    }
    let value = if value > 1.0 && value <= 100.0 {
        value / 100.0
    } else {
        value
    };
    value.clamp(0.0, 1.0)
}
