// ABOUTME: Offline provider that never generates, forcing template recipes
// ABOUTME: Used when no model endpoint is configured or generation is disabled
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;

use super::{ChatRequest, ChatResponse, LlmCapabilities, LlmProvider};
use crate::errors::AppError;

/// Provider with no backend
///
/// Every completion fails with `ExternalServiceUnavailable`, which the
/// engine treats like any other provider failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineProvider;

impl OfflineProvider {
    /// Create the offline provider
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LlmProvider for OfflineProvider {
    fn name(&self) -> &'static str {
        "offline"
    }

    fn display_name(&self) -> &'static str {
        "Offline (templates only)"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::empty()
    }

    fn default_model(&self) -> &str {
        "none"
    }

    async fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, AppError> {
        Err(AppError::external_unavailable(
            "offline",
            "Recipe generation is disabled",
        ))
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(false)
    }
}
