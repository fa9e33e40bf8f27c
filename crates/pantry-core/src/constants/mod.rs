// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for caching, scoring, and recipe generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain. Configuration structs in the application
//! crate use these as defaults when no environment override is present.

/// Cache-related constants (TTL, window, capacity)
pub mod cache;
/// Recipe generation limits and fallback tuning
pub mod generation;
/// Pantry prioritization and suggestion scoring weights
pub mod scoring;
