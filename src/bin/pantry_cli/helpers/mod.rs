// ABOUTME: Helper modules for pantry-chef
// ABOUTME: Terminal output formatting for suggestions and parsed candidates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
