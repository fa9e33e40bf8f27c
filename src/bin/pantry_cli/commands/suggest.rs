// ABOUTME: Suggest command for pantry-chef
// ABOUTME: Builds the engine from environment settings and prints ranked suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::PathBuf;
use std::sync::Arc;

use pantry_chef::clock::{Clock, SystemClock};
use pantry_chef::config::{EngineConfig, LlmProviderType};
use pantry_chef::errors::AppResult;
use pantry_chef::inventory::{InMemoryInventory, InventoryReader, JsonFileInventory};
use pantry_chef::llm::create_provider;
use pantry_chef::models::{DifficultyFilter, SuggestionRequest};
use pantry_chef::services::SuggestionEngine;
use tracing::{info, warn};
use uuid::Uuid;

use crate::helpers::display::display_response;

type Result<T> = AppResult<T>;

/// Flags of the suggest command
pub struct SuggestOptions {
    pub pantry: Option<PathBuf>,
    pub max: usize,
    pub cook_time: u32,
    pub difficulty: DifficultyFilter,
    pub diets: Vec<String>,
    pub prioritize_expiring: bool,
    pub provider: Option<String>,
    pub check_provider: bool,
    pub json: bool,
}

/// Generate and print suggestions
pub async fn run(options: SuggestOptions) -> Result<()> {
    let mut config = EngineConfig::from_env();
    if let Some(kind) = options.provider.as_deref() {
        config.provider = LlmProviderType::from_str_or_default(kind);
    }

    let clock = Arc::new(SystemClock);
    let inventory: Arc<dyn InventoryReader> = match options.pantry {
        Some(path) => {
            info!("Reading pantry from {}", path.display());
            Arc::new(JsonFileInventory::new(path))
        }
        None => {
            info!("Using the demo pantry");
            Arc::new(InMemoryInventory::demo(clock.today()))
        }
    };

    let provider = create_provider(config.provider)?;
    if options.check_provider {
        match provider.health_check().await {
            Ok(true) => info!("Provider {} is reachable", provider.display_name()),
            Ok(false) => warn!(
                "Provider {} is not reachable, template recipes will be used",
                provider.display_name()
            ),
            Err(e) => warn!("Provider {} health check failed: {e}", provider.display_name()),
        }
    }

    let engine = SuggestionEngine::new(inventory, provider, clock, config);

    let mut request = SuggestionRequest::new(Uuid::new_v4())
        .with_max_suggestions(options.max)
        .with_max_cook_time(options.cook_time)
        .with_difficulty(options.difficulty)
        .with_prioritize_expiring(options.prioritize_expiring);
    for diet in options.diets {
        request = request.with_dietary_preference(diet);
    }

    let response = engine.get_quick_suggestions(&request).await;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        display_response(&response);
    }
    Ok(())
}
