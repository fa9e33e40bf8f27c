// ABOUTME: OpenAI-compatible chat completion provider for local and hosted endpoints
// ABOUTME: Works with Ollama, vLLM, LocalAI, and any server exposing /chat/completions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # `OpenAI`-Compatible Provider
//!
//! ## Configuration
//!
//! - `LOCAL_LLM_BASE_URL`: Base URL (default: <http://localhost:11434/v1> for Ollama)
//! - `LOCAL_LLM_MODEL`: Model to use (default: `qwen2.5:7b-instruct`)
//! - `LOCAL_LLM_API_KEY`: API key (optional, empty for local servers)
//! - `LOCAL_LLM_SYSTEM_MESSAGES`: `false` for chat templates without a system
//!   role; the system prompt is then sent inside the user message

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

use super::{ChatMessage, ChatRequest, ChatResponse, LlmCapabilities, LlmProvider, TokenUsage};
use crate::errors::{AppError, ErrorCode};

/// Environment variable for local LLM base URL
const LOCAL_LLM_BASE_URL_ENV: &str = "LOCAL_LLM_BASE_URL";

/// Environment variable for local LLM model
const LOCAL_LLM_MODEL_ENV: &str = "LOCAL_LLM_MODEL";

/// Environment variable for local LLM API key (optional)
const LOCAL_LLM_API_KEY_ENV: &str = "LOCAL_LLM_API_KEY";

/// Environment variable disabling the system role
const LOCAL_LLM_SYSTEM_MESSAGES_ENV: &str = "LOCAL_LLM_SYSTEM_MESSAGES";

/// Default base URL (Ollama)
const DEFAULT_BASE_URL: &str = "http://localhost:11434/v1";

/// Default model for local inference
const DEFAULT_MODEL: &str = "qwen2.5:7b-instruct";

/// Connection timeout for local servers
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Request timeout; the engine applies its own shorter deadline on top
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Service label used in error messages
const SERVICE: &str = "LocalLLM";

// ============================================================================
// API Request/Response Types (OpenAI-compatible format)
// ============================================================================

#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    stream: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

impl From<&ChatMessage> for OpenAiMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role.as_str().to_owned(),
            content: msg.content.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    #[serde(default)]
    usage: Option<OpenAiUsage>,
    #[serde(default)]
    model: String,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    #[serde(rename = "prompt_tokens")]
    prompt: u32,
    #[serde(rename = "completion_tokens")]
    completion: u32,
    #[serde(rename = "total_tokens")]
    total: u32,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

// ============================================================================
// Provider Configuration
// ============================================================================

/// Configuration for the `OpenAI`-compatible provider
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleConfig {
    /// Base URL for the API (e.g., <http://localhost:11434/v1>)
    pub base_url: String,
    /// API key (optional for local servers)
    pub api_key: Option<String>,
    /// Default model to use
    pub default_model: String,
    /// Provider name for logging
    pub provider_name: String,
    /// Capabilities of this provider
    pub capabilities: LlmCapabilities,
}

impl OpenAiCompatibleConfig {
    /// Read configuration from `LOCAL_LLM_*` variables
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            env::var(LOCAL_LLM_BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        let default_model =
            env::var(LOCAL_LLM_MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_owned());
        let api_key = env::var(LOCAL_LLM_API_KEY_ENV)
            .ok()
            .filter(|k| !k.is_empty());

        let provider_name = if base_url.contains(":11434") {
            "ollama"
        } else if base_url.contains(":8000") {
            "vllm"
        } else if base_url.contains(":8080") {
            "localai"
        } else {
            "local"
        };

        let system_disabled = env::var(LOCAL_LLM_SYSTEM_MESSAGES_ENV).is_ok_and(|value| {
            matches!(value.trim().to_lowercase().as_str(), "false" | "0" | "no" | "off")
        });
        let capabilities = if system_disabled {
            LlmCapabilities::empty()
        } else {
            LlmCapabilities::SYSTEM_MESSAGES
        };

        Self {
            base_url,
            api_key,
            default_model,
            provider_name: provider_name.to_owned(),
            capabilities,
        }
    }
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Generic `OpenAI`-compatible LLM provider
pub struct OpenAiCompatibleProvider {
    client: Client,
    config: OpenAiCompatibleConfig,
}

impl OpenAiCompatibleProvider {
    /// Create a new provider with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: OpenAiCompatibleConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Create a provider from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn from_env() -> Result<Self, AppError> {
        let config = OpenAiCompatibleConfig::from_env();
        info!(
            provider = %config.provider_name,
            base_url = %config.base_url,
            model = %config.default_model,
            system_messages = config.capabilities.supports_system_messages(),
            "Initializing OpenAI-compatible provider"
        );
        Self::new(config)
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &OpenAiCompatibleConfig {
        &self.config
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'))
    }

    fn add_auth_header(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(ref api_key) = self.config.api_key {
            request.header("Authorization", format!("Bearer {api_key}"))
        } else {
            request
        }
    }

    fn connection_error(&self, e: &reqwest::Error) -> AppError {
        error!(provider = %self.config.provider_name, error = %e, "Request to LLM endpoint failed");
        if e.is_timeout() {
            AppError::timeout(SERVICE, REQUEST_TIMEOUT_SECS)
        } else if e.is_connect() {
            AppError::external_unavailable(
                SERVICE,
                format!("Cannot connect to {}. Is the server running?", self.config.base_url),
            )
        } else {
            AppError::external_service(SERVICE, format!("Failed to connect: {e}"))
        }
    }

    /// Map a non-success HTTP status and body to an error
    fn parse_error_response(status: StatusCode, body: &str) -> AppError {
        if let Ok(error_response) = serde_json::from_str::<OpenAiErrorResponse>(body) {
            let message = error_response.error.message;
            return match status.as_u16() {
                401 | 403 => AppError::new(
                    ErrorCode::ExternalAuthFailed,
                    format!("API authentication failed: {message}"),
                ),
                429 => AppError::new(
                    ErrorCode::ExternalRateLimited,
                    format!("LLM rate limit reached: {message}"),
                ),
                400 => AppError::invalid_input(format!("API validation error: {message}")),
                404 => AppError::not_found(format!("Model or endpoint ({message})")),
                503 => AppError::external_unavailable(
                    SERVICE,
                    format!("Service unavailable: {message}"),
                ),
                _ => {
                    let error_type = error_response
                        .error
                        .error_type
                        .unwrap_or_else(|| "unknown".to_owned());
                    AppError::external_service(SERVICE, format!("{error_type} - {message}"))
                }
            };
        }

        match status.as_u16() {
            502..=504 => AppError::external_unavailable(
                SERVICE,
                "Local LLM server is not responding",
            ),
            _ => AppError::external_service(
                SERVICE,
                format!(
                    "API error ({status}): {}",
                    body.chars().take(200).collect::<String>()
                ),
            ),
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &'static str {
        match self.config.provider_name.as_str() {
            "ollama" => "ollama",
            "vllm" => "vllm",
            "localai" => "localai",
            _ => "local",
        }
    }

    fn display_name(&self) -> &'static str {
        match self.config.provider_name.as_str() {
            "ollama" => "Ollama (Local)",
            "vllm" => "vLLM (Local)",
            "localai" => "LocalAI",
            _ => "Local LLM",
        }
    }

    fn capabilities(&self) -> LlmCapabilities {
        self.config.capabilities
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }

    #[instrument(skip(self, request), fields(model = %request.model.as_deref().unwrap_or(&self.config.default_model)))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let model = request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model);

        let openai_request = OpenAiRequest {
            model: model.to_owned(),
            messages: request.messages.iter().map(OpenAiMessage::from).collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            stream: false,
        };
        debug!(
            provider = %self.config.provider_name,
            messages = openai_request.messages.len(),
            "Sending chat completion request"
        );

        let http_request = self
            .client
            .post(self.api_url("chat/completions"))
            .header("Content-Type", "application/json")
            .json(&openai_request);

        let response = self
            .add_auth_header(http_request)
            .send()
            .await
            .map_err(|e| self.connection_error(&e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::external_service(SERVICE, format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            return Err(Self::parse_error_response(status, &body));
        }

        let openai_response: OpenAiResponse = serde_json::from_str(&body).map_err(|e| {
            AppError::external_service(SERVICE, format!("Failed to parse response: {e}"))
        })?;

        let choice = openai_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::external_service(SERVICE, "API returned no choices"))?;

        let content = choice.message.content.unwrap_or_default();
        debug!(
            provider = %self.config.provider_name,
            chars = content.len(),
            finish_reason = ?choice.finish_reason,
            "Received chat completion"
        );

        Ok(ChatResponse {
            content,
            structured: None,
            model: openai_response.model,
            usage: openai_response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt,
                completion_tokens: u.completion,
                total_tokens: u.total,
            }),
            finish_reason: choice.finish_reason,
        })
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<bool, AppError> {
        let response = self
            .add_auth_header(self.client.get(self.api_url("models")))
            .send()
            .await
            .map_err(|e| self.connection_error(&e))?;

        let healthy = response.status().is_success();
        if !healthy {
            warn!(
                provider = %self.config.provider_name,
                status = %response.status(),
                "LLM health check failed"
            );
        }
        Ok(healthy)
    }
}
