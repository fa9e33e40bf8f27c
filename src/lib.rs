// ABOUTME: Main library entry point for the pantry-driven recipe suggestion engine
// ABOUTME: Wires inventory, generative provider, cache, and analytics around pure algorithms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pantry Chef
//!
//! Suggests quick recipes from what is already in the pantry, favoring
//! ingredients that are about to expire. A generative text provider writes
//! candidate recipes; the engine parses its unreliable output, checks every
//! ingredient against the pantry, and ranks the result. When the provider
//! is down, slow, or incoherent, deterministic template recipes take over,
//! so a request always gets an answer.
//!
//! ## Architecture
//!
//! - **`pantry_core`**: error type, constants, data model
//! - **`pantry_intelligence`**: prioritization, parsing, matching, fallback (pure)
//! - **This crate**: collaborator seams ([`inventory`], [`llm`], [`clock`]),
//!   prompt building and orchestration ([`intelligence`]), [`cache`],
//!   [`analytics`], and the [`services::SuggestionEngine`] entry points
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pantry_chef::clock::SystemClock;
//! use pantry_chef::config::EngineConfig;
//! use pantry_chef::inventory::InMemoryInventory;
//! use pantry_chef::llm::OfflineProvider;
//! use pantry_chef::models::SuggestionRequest;
//! use pantry_chef::services::SuggestionEngine;
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() {
//!     let clock = Arc::new(SystemClock);
//!     let engine = SuggestionEngine::new(
//!         Arc::new(InMemoryInventory::demo(chrono::Utc::now().date_naive())),
//!         Arc::new(OfflineProvider::new()),
//!         clock,
//!         EngineConfig::default(),
//!     );
//!     let response = engine
//!         .get_quick_suggestions(&SuggestionRequest::new(Uuid::new_v4()))
//!         .await;
//!     println!("{} suggestions", response.suggestions.len());
//! }
//! ```

/// Per-user suggestion analytics
pub mod analytics;
/// Time-windowed suggestion cache
pub mod cache;
/// Injectable wall clock
pub mod clock;
/// Environment-driven configuration
pub mod config;
/// Unified error handling
pub mod errors;
/// Prompt building and generation orchestration
pub mod intelligence;
/// Pantry inventory sources
pub mod inventory;
/// Generative text provider abstraction
pub mod llm;
/// Structured logging setup
pub mod logging;
/// Suggestion engine entry points
pub mod services;

/// Data model shared with the core crate
pub mod models {
    pub use pantry_core::models::*;
}
