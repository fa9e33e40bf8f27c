// ABOUTME: Unit tests for environment-driven engine configuration
// ABOUTME: Validates PANTRY_* overrides, malformed-value fallback, and provider selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use pantry_chef::config::{
    CacheSettings, EngineConfig, GenerationSettings, LlmProviderType, ScoringSettings,
};
use pantry_chef::llm::OpenAiCompatibleConfig;
use pantry_chef::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

const ENGINE_VARS: &[&str] = &[
    "PANTRY_CACHE_TTL_SECS",
    "PANTRY_CACHE_WINDOW_SECS",
    "PANTRY_CACHE_MAX_ENTRIES",
    "PANTRY_MIN_MATCHING_INGREDIENTS",
    "PANTRY_MAX_MISSING_INGREDIENTS",
    "PANTRY_MAX_RESULTS",
    "PANTRY_GENERATION_TIMEOUT_SECS",
    "PANTRY_FALLBACK_ITEM_LIMIT",
    "PANTRY_MIN_PANTRY_ITEMS",
    "PANTRY_LLM_TEMPERATURE",
    "PANTRY_LLM_MAX_TOKENS",
    "PANTRY_LLM_PROVIDER",
];

fn clear_engine_vars() {
    for var in ENGINE_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_provider_type_parsing() {
    assert_eq!(
        LlmProviderType::from_str_or_default("local"),
        LlmProviderType::Local
    );
    assert_eq!(
        LlmProviderType::from_str_or_default("Ollama"),
        LlmProviderType::Local
    );
    assert_eq!(
        LlmProviderType::from_str_or_default(" vllm "),
        LlmProviderType::Local
    );
    assert_eq!(
        LlmProviderType::from_str_or_default("OFFLINE"),
        LlmProviderType::Offline
    );
    assert_eq!(
        LlmProviderType::from_str_or_default("none"),
        LlmProviderType::Offline
    );
    assert_eq!(
        LlmProviderType::from_str_or_default("gemini"),
        LlmProviderType::Local
    ); // Default fallback
}

#[test]
fn test_provider_type_display() {
    assert_eq!(LlmProviderType::Local.to_string(), "local");
    assert_eq!(LlmProviderType::Offline.to_string(), "offline");
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_engine_vars();

    let config = EngineConfig::from_env();
    assert_eq!(config.cache.ttl_secs, 86_400);
    assert_eq!(config.cache.window_secs, 86_400);
    assert_eq!(config.cache.max_entries, 1_000);
    assert_eq!(config.scoring.min_matching_ingredients, 2);
    assert_eq!(config.scoring.max_missing_ingredients, 2);
    assert_eq!(config.scoring.max_results, 4);
    assert_eq!(config.generation.timeout_secs, 30);
    assert_eq!(config.generation.min_pantry_items, 3);
    assert_eq!(config.generation.fallback_item_limit, 8);
    assert_eq!(config.provider, LlmProviderType::Local);
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_engine_vars();
    env::set_var("PANTRY_CACHE_TTL_SECS", "600");
    env::set_var("PANTRY_CACHE_WINDOW_SECS", "3600");
    env::set_var("PANTRY_MIN_MATCHING_INGREDIENTS", "3");
    env::set_var("PANTRY_GENERATION_TIMEOUT_SECS", " 5 ");
    env::set_var("PANTRY_LLM_TEMPERATURE", "0.2");
    env::set_var("PANTRY_LLM_PROVIDER", "offline");

    let config = EngineConfig::from_env();
    assert_eq!(config.cache.ttl_secs, 600);
    assert_eq!(config.cache.window_secs, 3600);
    assert_eq!(config.scoring.min_matching_ingredients, 3);
    assert_eq!(config.generation.timeout_secs, 5);
    assert!((config.generation.temperature - 0.2).abs() < f32::EPSILON);
    assert_eq!(config.provider, LlmProviderType::Offline);

    clear_engine_vars();
}

#[test]
#[serial]
fn test_malformed_values_fall_back_to_defaults() {
    clear_engine_vars();
    env::set_var("PANTRY_CACHE_MAX_ENTRIES", "lots");
    env::set_var("PANTRY_MAX_RESULTS", "-1");
    env::set_var("PANTRY_LLM_MAX_TOKENS", "");

    assert_eq!(CacheSettings::from_env().max_entries, 1_000);
    assert_eq!(ScoringSettings::from_env().max_results, 4);
    assert_eq!(GenerationSettings::from_env().max_tokens, 2_000);

    clear_engine_vars();
}

#[test]
#[serial]
fn test_zero_window_is_raised_to_one_second() {
    clear_engine_vars();
    env::set_var("PANTRY_CACHE_WINDOW_SECS", "0");

    assert_eq!(CacheSettings::from_env().window_secs, 1);

    clear_engine_vars();
}

#[test]
fn test_scoring_rules_cap_requested_count() {
    let scoring = ScoringSettings::default();

    assert_eq!(scoring.rules_for(2).limit, 2);
    assert_eq!(scoring.rules_for(10).limit, 4);
    assert_eq!(scoring.rules_for(3).min_matching, 2);
}

#[test]
#[serial]
fn test_local_llm_config_detects_server_kind() {
    env::set_var("LOCAL_LLM_BASE_URL", "http://localhost:8000/v1");
    env::set_var("LOCAL_LLM_MODEL", "mistral-7b");
    env::set_var("LOCAL_LLM_API_KEY", "");

    let config = OpenAiCompatibleConfig::from_env();
    assert_eq!(config.provider_name, "vllm");
    assert_eq!(config.default_model, "mistral-7b");
    assert!(config.api_key.is_none());

    env::remove_var("LOCAL_LLM_BASE_URL");
    env::remove_var("LOCAL_LLM_MODEL");
    env::remove_var("LOCAL_LLM_API_KEY");

    let config = OpenAiCompatibleConfig::from_env();
    assert_eq!(config.provider_name, "ollama");
    assert_eq!(config.base_url, "http://localhost:11434/v1");
}

#[test]
#[serial]
fn test_local_llm_system_role_can_be_disabled() {
    env::remove_var("LOCAL_LLM_SYSTEM_MESSAGES");
    assert!(OpenAiCompatibleConfig::from_env()
        .capabilities
        .supports_system_messages());

    env::set_var("LOCAL_LLM_SYSTEM_MESSAGES", " False ");
    assert!(!OpenAiCompatibleConfig::from_env()
        .capabilities
        .supports_system_messages());

    env::set_var("LOCAL_LLM_SYSTEM_MESSAGES", "true");
    assert!(OpenAiCompatibleConfig::from_env()
        .capabilities
        .supports_system_messages());

    env::remove_var("LOCAL_LLM_SYSTEM_MESSAGES");
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");

    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(config.include_thread);

    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");

    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.environment, "development");
}
