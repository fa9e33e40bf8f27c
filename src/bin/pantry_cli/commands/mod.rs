// ABOUTME: Re-exports command modules for pantry-chef
// ABOUTME: Provides the suggest and parse commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod parse;
pub mod suggest;
