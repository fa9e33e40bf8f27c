// ABOUTME: Logging configuration and structured logging setup for the suggestion engine
// ABOUTME: Configures log levels, output formats, and per-outcome suggestion events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging with `tracing`

use std::env;
use std::io;

use serde_json::json;
use tracing::{info, warn, Level};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::SuggestionSource;

/// Default service name reported at startup
pub const SERVICE_NAME: &str = "pantry-chef";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for terminals
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            service_name: SERVICE_NAME.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let is_production = environment == "production";

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| SERVICE_NAME.into()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
        }
    }

    /// Same configuration at a different level
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Same configuration with a different format
    #[must_use]
    pub const fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    fn env_filter(&self) -> EnvFilter {
        let base = env::var("RUST_LOG").map_or_else(|_| EnvFilter::new(&self.level), EnvFilter::new);
        [
            ("hyper=warn", Level::WARN),
            ("reqwest=warn", Level::WARN),
            ("h2=warn", Level::WARN),
        ]
        .into_iter()
        .fold(base, |filter, (directive, fallback)| {
            filter.add_directive(directive.parse().unwrap_or_else(|_| fallback.into()))
        })
    }

    /// Initialize the global tracing subscriber
    ///
    /// Logs go to stderr so command output on stdout stays machine-readable.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> AppResult<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        let result = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_target(true)
                        .with_writer(io::stderr)
                        .with_span_events(FmtSpan::NONE)
                        .json(),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init(),
        };

        result.map_err(|e| AppError::config(format!("Failed to initialize logging: {e}")))?;
        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        let summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "location": self.include_location,
                "thread": self.include_thread
            }
        });
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            "Logging initialized: {summary}"
        );
    }
}

/// Initialize logging with default configuration
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_default() -> AppResult<()> {
    LoggingConfig::default().init()
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> AppResult<()> {
    LoggingConfig::from_env().init()
}

/// Structured events for suggestion engine outcomes
pub struct SuggestionLogger;

impl SuggestionLogger {
    /// Suggestions produced and about to be returned
    pub fn log_generated(user_id: Uuid, source: SuggestionSource, count: usize, duration_ms: u64) {
        info!(
            user.id = %user_id,
            suggestions.source = source.as_str(),
            suggestions.count = count,
            duration_ms = duration_ms,
            "Suggestions generated"
        );
    }

    /// Provider failed; template recipes will be used
    pub fn log_provider_fallback(provider: &str, reason: &str) {
        warn!(
            llm.provider = provider,
            fallback.reason = reason,
            "Recipe generation failed, using fallback recipes"
        );
    }

    /// Served from the cache
    pub fn log_cache_hit(user_id: Uuid, count: usize) {
        info!(
            user.id = %user_id,
            cache.hit = true,
            suggestions.count = count,
            "Suggestions served from cache"
        );
    }

    /// User picked a suggestion
    pub fn log_suggestion_used(user_id: Uuid, recipe: &str, match_percentage: u8) {
        info!(
            user.id = %user_id,
            recipe.name = recipe,
            recipe.match_percentage = match_percentage,
            "Suggestion used"
        );
    }

    /// Pantry could not be read
    pub fn log_inventory_unavailable(user_id: Uuid, reason: &str) {
        warn!(
            user.id = %user_id,
            inventory.error = reason,
            "Pantry inventory unavailable, returning static suggestions"
        );
    }
}
