// ABOUTME: Recipe suggestion algorithms for pantry-driven cooking
// ABOUTME: Prioritizes inventory, parses provider output, scores and synthesizes recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pantry Intelligence
//!
//! Every function in this crate is deterministic and free of I/O: given the
//! same pantry snapshot and the same date, it produces the same output. The
//! application crate wires these pieces around the external collaborators
//! (inventory store, generative provider, clock).
//!
//! - [`prioritization`]: rank pantry items by urgency
//! - [`recipes::parser`]: extract candidates from free-form provider output
//! - [`recipes::matching`]: score candidates against the pantry
//! - [`recipes::fallback`]: template and static recipes when generation fails

/// Pantry item urgency scoring
pub mod prioritization;
/// Recipe candidate parsing, matching, and fallback synthesis
pub mod recipes;

pub use prioritization::{count_usable, prioritize_pantry};
