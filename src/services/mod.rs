// ABOUTME: Service layer exposing the suggestion engine entry points
// ABOUTME: Owns cache and analytics stores around injected collaborators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Service layer
//!
//! The engine is constructed once per process and shared by reference. It
//! holds no global state: inventory, provider, and clock are injected, and
//! the cache and analytics stores belong to the engine instance.

/// Quick recipe suggestions, usage feedback, analytics, and cache administration
pub mod suggestions;

pub use suggestions::SuggestionEngine;
