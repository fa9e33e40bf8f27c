// ABOUTME: Integration tests for the recipe generation orchestrator and provider seam
// ABOUTME: Verifies single-call behavior, timeout handling, and structured provider output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::time::Instant;

use common::{fixed_today, small_pantry, Script, ScriptedProvider, MESSY_REPLY};
use pantry_chef::config::{GenerationSettings, LlmProviderType};
use pantry_chef::intelligence::recipes::ProviderOutput;
use pantry_chef::intelligence::{generate_candidates, prioritize_pantry};
use pantry_chef::llm::prompts::get_recipe_system_prompt;
use pantry_chef::llm::{create_provider, ChatResponse, LlmProvider, MessageRole, OfflineProvider};
use pantry_chef::models::{PrioritizedItem, SuggestionRequest, SuggestionSource};
use serde_json::json;
use uuid::Uuid;

fn prioritized() -> Vec<PrioritizedItem> {
    prioritize_pantry(&small_pantry(), true, fixed_today())
}

fn short_timeout() -> GenerationSettings {
    GenerationSettings {
        timeout_secs: 1,
        ..GenerationSettings::default()
    }
}

#[tokio::test]
async fn test_parsed_reply_is_ai_sourced() {
    common::init_test_logging();
    let provider = ScriptedProvider::replying(MESSY_REPLY);
    let request = SuggestionRequest::new(Uuid::new_v4());

    let outcome = generate_candidates(&provider, &prioritized(), &request, &short_timeout()).await;

    assert_eq!(outcome.source, SuggestionSource::Ai);
    let names: Vec<&str> = outcome
        .candidates
        .iter()
        .map(|candidate| candidate.name.as_str())
        .collect();
    assert_eq!(names, vec!["Tomato Chicken Rice", "Chicken Fried Rice"]);
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_single_object_reply_keeps_its_ingredients() {
    common::init_test_logging();
    let provider = ScriptedProvider::replying(
        r#"Sure! {"name": "Tomato Chicken Rice", "cook_time": "30 min",
        "ingredients": [{"name": "Tomato", "amount": "2"}, {"name": "Chicken"}, {"name": "Rice"}],
        "instructions": ["Cook everything together"]}"#,
    );
    let request = SuggestionRequest::new(Uuid::new_v4());

    let outcome = generate_candidates(&provider, &prioritized(), &request, &short_timeout()).await;

    assert_eq!(outcome.source, SuggestionSource::Ai);
    assert_eq!(outcome.candidates.len(), 1);
    assert_eq!(outcome.candidates[0].name, "Tomato Chicken Rice");
    assert_eq!(outcome.candidates[0].ingredients.len(), 3);
}

#[tokio::test]
async fn test_prompt_carries_request_constraints() {
    common::init_test_logging();
    let provider = ScriptedProvider::replying(MESSY_REPLY);
    let request = SuggestionRequest::new(Uuid::new_v4())
        .with_max_suggestions(3)
        .with_max_cook_time(20)
        .with_dietary_preference("vegetarian");

    generate_candidates(&provider, &prioritized(), &request, &short_timeout()).await;

    let prompt = provider.last_prompt().unwrap();
    assert!(prompt.contains("Suggest exactly 3 recipes."));
    assert!(prompt.contains("must not exceed 20 minutes"));
    assert!(prompt.contains("DIETARY RESTRICTIONS (strict):"));
    assert!(prompt.contains("Tomato"));
}

#[tokio::test]
async fn test_system_prompt_sent_as_separate_message() {
    common::init_test_logging();
    let provider = ScriptedProvider::replying(MESSY_REPLY);
    let request = SuggestionRequest::new(Uuid::new_v4());

    generate_candidates(&provider, &prioritized(), &request, &short_timeout()).await;

    let roles: Vec<MessageRole> = provider
        .last_messages()
        .iter()
        .map(|message| message.role)
        .collect();
    assert_eq!(roles, vec![MessageRole::System, MessageRole::User]);
}

#[tokio::test]
async fn test_provider_without_system_role_gets_one_message() {
    common::init_test_logging();
    let provider = ScriptedProvider::replying(MESSY_REPLY).without_system_messages();
    let request = SuggestionRequest::new(Uuid::new_v4()).with_max_suggestions(2);

    let outcome = generate_candidates(&provider, &prioritized(), &request, &short_timeout()).await;

    assert_eq!(outcome.source, SuggestionSource::Ai);
    let messages = provider.last_messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, MessageRole::User);
    assert!(messages[0].content.starts_with(get_recipe_system_prompt()));
    assert!(messages[0].content.contains("Suggest exactly 2 recipes."));
}

#[tokio::test]
async fn test_structured_output_skips_text_parsing() {
    common::init_test_logging();
    let reply = json!({"recipes": [
        {"name": "Chicken Rice Bowl", "ingredients": ["Chicken", "Rice"], "cook_time": "20 min"}
    ]});
    let provider = ScriptedProvider::new(Script::Structured(reply));
    let request = SuggestionRequest::new(Uuid::new_v4());

    let outcome = generate_candidates(&provider, &prioritized(), &request, &short_timeout()).await;

    assert_eq!(outcome.source, SuggestionSource::Ai);
    assert_eq!(outcome.candidates.len(), 1);
    assert_eq!(outcome.candidates[0].cook_time, "20 min");
}

#[tokio::test]
async fn test_provider_failure_is_not_retried() {
    common::init_test_logging();
    let provider = ScriptedProvider::failing();
    let request = SuggestionRequest::new(Uuid::new_v4()).with_max_suggestions(3);

    let outcome = generate_candidates(&provider, &prioritized(), &request, &short_timeout()).await;

    assert_eq!(outcome.source, SuggestionSource::Fallback);
    assert_eq!(outcome.candidates.len(), 3);
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_hanging_provider_is_cut_off() {
    common::init_test_logging();
    let provider = ScriptedProvider::new(Script::Hang);
    let request = SuggestionRequest::new(Uuid::new_v4()).with_max_suggestions(2);

    let started = Instant::now();
    let outcome = generate_candidates(&provider, &prioritized(), &request, &short_timeout()).await;

    assert!(started.elapsed().as_secs() < 5);
    assert_eq!(outcome.source, SuggestionSource::Fallback);
    assert_eq!(outcome.candidates.len(), 2);
}

#[tokio::test]
async fn test_fallback_candidates_use_pantry_items() {
    common::init_test_logging();
    let provider = ScriptedProvider::replying("No recipes today, sorry.");
    let request = SuggestionRequest::new(Uuid::new_v4()).with_max_suggestions(1);

    let outcome = generate_candidates(&provider, &prioritized(), &request, &short_timeout()).await;

    assert_eq!(outcome.source, SuggestionSource::Fallback);
    let ingredients: Vec<&str> = outcome.candidates[0]
        .ingredients
        .iter()
        .map(|ingredient| ingredient.name.as_str())
        .collect();
    assert!(ingredients.contains(&"Chicken"));
}

#[tokio::test]
async fn test_offline_provider_reports_unhealthy() {
    let provider = OfflineProvider::new();

    assert_eq!(provider.name(), "offline");
    assert!(!provider.health_check().await.unwrap());
    assert!(provider.capabilities().is_empty());
}

#[tokio::test]
async fn test_create_offline_provider() {
    let provider = create_provider(LlmProviderType::Offline).unwrap();
    assert_eq!(provider.name(), "offline");
}

#[test]
fn test_response_prefers_structured_output() {
    let structured = ChatResponse {
        content: "ignored".to_owned(),
        ..ChatResponse::structured(json!([]))
    };
    assert!(matches!(structured.into_output(), ProviderOutput::Json(_)));

    let text = ChatResponse::text("[]");
    assert!(matches!(text.into_output(), ProviderOutput::Text(body) if body == "[]"));
}
