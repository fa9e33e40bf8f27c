// ABOUTME: Core types and constants for the pantry recipe suggestion engine
// ABOUTME: Foundation crate with error handling, data model, and scoring constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pantry Core
//!
//! Foundation crate providing shared types and constants for the pantry
//! suggestion engine. It carries no I/O so the algorithm crate and the
//! application crate can both depend on it without pulling in a runtime.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Scoring bonuses, cache windows, and generation limits
//! - **models**: Pantry items, suggestion requests, recipe candidates, analytics

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (pantry items, recipes, requests, analytics)
pub mod models;
