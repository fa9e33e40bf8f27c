// ABOUTME: Generative provider selection from the PANTRY_LLM_PROVIDER variable
// ABOUTME: Chooses between a local OpenAI-compatible endpoint and offline mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable selecting the provider
pub const LLM_PROVIDER_ENV: &str = "PANTRY_LLM_PROVIDER";

/// Provider backing recipe generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProviderType {
    /// OpenAI-compatible endpoint (Ollama, vLLM, `LocalAI`)
    #[default]
    Local,
    /// No provider; every request uses template recipes
    Offline,
}

impl LlmProviderType {
    /// Parse a provider name, accepting common aliases
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "local" | "ollama" | "vllm" | "localai" | "openai" => Self::Local,
            "offline" | "none" | "disabled" => Self::Offline,
            other => {
                warn!(provider = other, "Unknown LLM provider, using local");
                Self::Local
            }
        }
    }

    /// Read the provider type from `PANTRY_LLM_PROVIDER`
    #[must_use]
    pub fn from_env() -> Self {
        env::var(LLM_PROVIDER_ENV).map_or_else(|_| Self::default(), |v| Self::from_str_or_default(&v))
    }

    /// Lowercase name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Offline => "offline",
        }
    }
}

impl fmt::Display for LlmProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
