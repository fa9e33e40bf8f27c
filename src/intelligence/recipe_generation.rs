// ABOUTME: Generation orchestrator calling the text provider and degrading to template recipes
// ABOUTME: Provider errors, timeouts, and unparsable replies all end in the fallback synthesizer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Generation
//!
//! One request produces exactly one provider call. Whatever goes wrong with
//! that call is logged once as a warning and replaced by deterministic
//! template recipes built from the highest-priority pantry items. The
//! caller only ever sees candidates, never a provider error.

use pantry_core::models::{PrioritizedItem, RecipeCandidate, SuggestionRequest, SuggestionSource};
use pantry_intelligence::recipes::{parse_recipe_candidates, synthesize_candidates};
use tokio::time::timeout;
use tracing::debug;

use super::prompt_builder::build_suggestion_prompt;
use crate::config::GenerationSettings;
use crate::errors::AppError;
use crate::llm::prompts::get_recipe_system_prompt;
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};
use crate::logging::SuggestionLogger;

/// Candidates produced for one request and the path that produced them
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutcome {
    /// Unscored recipe candidates, never empty when the pantry is not
    pub candidates: Vec<RecipeCandidate>,
    /// `Ai` when the provider reply parsed, `Fallback` otherwise
    pub source: SuggestionSource,
}

impl GenerationOutcome {
    /// Template recipes built from the top pantry items
    #[must_use]
    pub fn fallback(pantry: &[PrioritizedItem], count: usize, item_limit: usize) -> Self {
        let top = &pantry[..pantry.len().min(item_limit)];
        Self {
            candidates: synthesize_candidates(top, count),
            source: SuggestionSource::Fallback,
        }
    }
}

/// Ask the provider for recipe candidates, falling back on any failure
///
/// The provider call is bounded by `settings.timeout()`. A timeout, a
/// provider error, and a reply that yields no candidates are handled the
/// same way: one warning, then [`GenerationOutcome::fallback`]. There is no
/// retry.
pub async fn generate_candidates(
    provider: &dyn LlmProvider,
    pantry: &[PrioritizedItem],
    request: &SuggestionRequest,
    settings: &GenerationSettings,
) -> GenerationOutcome {
    let count = request.effective_limit();
    match request_candidates(provider, pantry, request, settings).await {
        Ok(candidates) => {
            debug!(
                llm.provider = provider.name(),
                candidates = candidates.len(),
                "Provider reply parsed"
            );
            GenerationOutcome {
                candidates,
                source: SuggestionSource::Ai,
            }
        }
        Err(e) => {
            SuggestionLogger::log_provider_fallback(provider.name(), &e.to_string());
            GenerationOutcome::fallback(pantry, count, settings.fallback_item_limit)
        }
    }
}

async fn request_candidates(
    provider: &dyn LlmProvider,
    pantry: &[PrioritizedItem],
    request: &SuggestionRequest,
    settings: &GenerationSettings,
) -> Result<Vec<RecipeCandidate>, AppError> {
    let chat = ChatRequest::new(prompt_messages(provider, pantry, request))
        .with_temperature(settings.temperature)
        .with_max_tokens(settings.max_tokens);

    let response = timeout(settings.timeout(), provider.complete(&chat))
        .await
        .map_err(|_| AppError::timeout(provider.name(), settings.timeout_secs))??;

    Ok(parse_recipe_candidates(&response.into_output())?)
}

/// System and user messages, merged into one user message when the
/// provider has no system role
fn prompt_messages(
    provider: &dyn LlmProvider,
    pantry: &[PrioritizedItem],
    request: &SuggestionRequest,
) -> Vec<ChatMessage> {
    let system = get_recipe_system_prompt();
    let prompt = build_suggestion_prompt(pantry, request);
    if provider.capabilities().supports_system_messages() {
        vec![ChatMessage::system(system), ChatMessage::user(prompt)]
    } else {
        vec![ChatMessage::user(format!("{system}\n\n{prompt}"))]
    }
}
