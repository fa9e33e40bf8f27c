// ABOUTME: Unified error handling re-exported from the core crate
// ABOUTME: Exposes AppError, ErrorCode, and AppResult under the application namespace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The error type lives in `pantry_core` so the algorithm crate can convert
//! its local errors (such as the parser's `ParseError`) into it. This module
//! re-exports it so application code only ever imports `crate::errors`.

pub use pantry_core::errors::{AppError, AppResult, ErrorCode, ErrorContext};
