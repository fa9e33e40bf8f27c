// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides a scripted provider, a manual clock, pantry fixtures, and engine builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `pantry_chef`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, NaiveDate, TimeZone, Utc};
use pantry_chef::clock::Clock;
use pantry_chef::config::EngineConfig;
use pantry_chef::errors::AppError;
use pantry_chef::inventory::InMemoryInventory;
use pantry_chef::llm::{ChatMessage, ChatRequest, ChatResponse, LlmCapabilities, LlmProvider};
use pantry_chef::models::{IngredientCategory, PantryItem};
use pantry_chef::services::SuggestionEngine;
use tokio::time::sleep;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Clock
// ============================================================================

/// Clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Noon on 2025-03-10 UTC
    pub fn fixed() -> Self {
        Self::new(Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap())
    }

    pub fn advance(&self, by: ChronoDuration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// The date `ManualClock::fixed()` reports
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

// ============================================================================
// Provider
// ============================================================================

/// What the scripted provider does on each call
#[derive(Debug, Clone)]
pub enum Script {
    /// Reply with this text
    Reply(String),
    /// Reply with already-decoded JSON
    Structured(serde_json::Value),
    /// Fail with an unavailable error
    Fail,
    /// Sleep longer than any test timeout
    Hang,
}

/// Provider returning a fixed script and counting calls
#[derive(Debug)]
pub struct ScriptedProvider {
    script: Script,
    capabilities: LlmCapabilities,
    calls: AtomicUsize,
    last_messages: Mutex<Vec<ChatMessage>>,
}

impl ScriptedProvider {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            capabilities: LlmCapabilities::SYSTEM_MESSAGES,
            calls: AtomicUsize::new(0),
            last_messages: Mutex::new(Vec::new()),
        }
    }

    /// Report no system-role support
    pub fn without_system_messages(mut self) -> Self {
        self.capabilities = LlmCapabilities::empty();
        self
    }

    pub fn replying(text: &str) -> Self {
        Self::new(Script::Reply(text.to_owned()))
    }

    pub fn failing() -> Self {
        Self::new(Script::Fail)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Content of the last message of the last call
    pub fn last_prompt(&self) -> Option<String> {
        self.last_messages
            .lock()
            .unwrap()
            .last()
            .map(|message| message.content.clone())
    }

    /// Messages of the last call
    pub fn last_messages(&self) -> Vec<ChatMessage> {
        self.last_messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn display_name(&self) -> &'static str {
        "Scripted Test Provider"
    }

    fn capabilities(&self) -> LlmCapabilities {
        self.capabilities
    }

    fn default_model(&self) -> &str {
        "scripted-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.last_messages.lock().unwrap().clone_from(&request.messages);

        match &self.script {
            Script::Reply(text) => Ok(ChatResponse::text(text.clone())),
            Script::Structured(value) => Ok(ChatResponse::structured(value.clone())),
            Script::Fail => Err(AppError::external_unavailable(
                "scripted",
                "scripted provider failure",
            )),
            Script::Hang => {
                sleep(Duration::from_secs(3600)).await;
                Ok(ChatResponse::text("[]"))
            }
        }
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(!matches!(self.script, Script::Fail))
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// Tomato expiring in 2 days, abundant chicken, rice
pub fn small_pantry() -> Vec<PantryItem> {
    let today = fixed_today();
    vec![
        PantryItem::new("Tomato", IngredientCategory::Vegetables)
            .with_quantity("3", "pieces")
            .with_expiry(today + ChronoDuration::days(2))
            .with_usage_frequency(5),
        PantryItem::new("Chicken", IngredientCategory::Protein)
            .with_quantity("5", "breasts")
            .with_usage_frequency(5),
        PantryItem::new("Rice", IngredientCategory::Grains)
            .with_quantity("1", "kg")
            .with_usage_frequency(5),
    ]
}

/// Provider reply using the small pantry, with JSON defects
pub const MESSY_REPLY: &str = r#"Here are two ideas for you:
[
  {'name': 'Tomato Chicken Rice', cookTime: 25, 'cuisine': 'Spanish',
   'ingredients': ['Chicken', 'Tomato', 'Rice', 'salt'],
   'instructions': ['Brown the chicken', 'Add tomato and rice', 'Simmer'],},
  {"name": "Chicken Fried Rice", "cook_time": "15 min", "cuisine": "Chinese",
   "ingredients": [{"name": "Rice", "amount": "2 cups"}, {"name": "Chicken"}, {"name": "peas"}],
   "instructions": "1. Fry the chicken 2. Add rice and peas",},
]
Let me know if you want more!"#;

/// Default configuration with a short provider timeout
pub fn test_config() -> EngineConfig {
    let mut config = EngineConfig::default();
    config.generation.timeout_secs = 1;
    config
}

/// Engine over an in-memory pantry with a manual clock
pub fn build_engine(
    pantry: Vec<PantryItem>,
    provider: Arc<ScriptedProvider>,
    clock: Arc<ManualClock>,
) -> SuggestionEngine {
    init_test_logging();
    SuggestionEngine::new(
        Arc::new(InMemoryInventory::new(pantry)),
        provider,
        clock,
        test_config(),
    )
}
