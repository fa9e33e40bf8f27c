// ABOUTME: Parse command for pantry-chef
// ABOUTME: Runs the tolerant recipe parser over a saved model reply
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use pantry_chef::errors::{AppError, AppResult};
use pantry_chef::intelligence::recipes::{parse_recipe_candidates, ProviderOutput};
use tokio::fs;
use tracing::info;

use crate::helpers::display::display_candidates;

type Result<T> = AppResult<T>;

/// Parse a file of raw provider output and print the candidates
pub async fn run(file: &Path, json: bool) -> Result<()> {
    let raw = fs::read_to_string(file)
        .await
        .map_err(|e| AppError::from(e).with_resource_id(file.display().to_string()))?;
    info!("Parsing {} bytes from {}", raw.len(), file.display());

    let candidates = parse_recipe_candidates(&ProviderOutput::Text(raw))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&candidates)?);
    } else {
        display_candidates(&candidates);
    }
    Ok(())
}
