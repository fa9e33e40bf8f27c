// ABOUTME: Pantry Chef CLI - quick recipe suggestions from a pantry file or the demo pantry
// ABOUTME: Also runs the tolerant recipe parser over saved provider output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Suggestions from the built-in demo pantry
//! pantry-chef suggest
//!
//! # Suggestions from a pantry file, vegan, at most 2, as JSON
//! pantry-chef suggest --pantry pantry.json --diet vegan --max 2 --json
//!
//! # Check the configured provider before generating
//! pantry-chef suggest --check-provider
//!
//! # Parse raw model output saved to a file
//! pantry-chef parse reply.txt
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use pantry_chef::errors::AppResult;
use pantry_chef::logging::LoggingConfig;
use pantry_chef::models::DifficultyFilter;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "pantry-chef",
    about = "Quick recipe suggestions from your pantry",
    long_about = "Suggests quick recipes that use what is already in your pantry, favoring ingredients that are about to expire."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Suggest recipes for a pantry
    Suggest {
        /// Pantry JSON file (array of items or {"items": [...]}); demo pantry when omitted
        #[arg(long)]
        pantry: Option<PathBuf>,

        /// Maximum suggestions (1-4)
        #[arg(long, default_value = "4")]
        max: usize,

        /// Cook-time ceiling in minutes
        #[arg(long, default_value = "30")]
        cook_time: u32,

        /// Difficulty filter
        #[arg(long, value_enum, default_value = "either")]
        difficulty: DifficultyArg,

        /// Dietary preference (repeatable: --diet vegan --diet gluten-free)
        #[arg(long = "diet")]
        diets: Vec<String>,

        /// Do not boost items close to expiry
        #[arg(long)]
        no_expiring: bool,

        /// Provider override (local, offline); `PANTRY_LLM_PROVIDER` otherwise
        #[arg(long)]
        provider: Option<String>,

        /// Check that the provider is reachable first
        #[arg(long)]
        check_provider: bool,

        /// Print the response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse saved provider output into recipe candidates
    Parse {
        /// File containing the raw model reply
        file: PathBuf,

        /// Print candidates as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Either,
}

impl From<DifficultyArg> for DifficultyFilter {
    fn from(value: DifficultyArg) -> Self {
        match value {
            DifficultyArg::Easy => Self::Easy,
            DifficultyArg::Medium => Self::Medium,
            DifficultyArg::Either => Self::Either,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    match cli.command {
        Command::Suggest {
            pantry,
            max,
            cook_time,
            difficulty,
            diets,
            no_expiring,
            provider,
            check_provider,
            json,
        } => {
            let options = commands::suggest::SuggestOptions {
                pantry,
                max,
                cook_time,
                difficulty: difficulty.into(),
                diets,
                prioritize_expiring: !no_expiring,
                provider,
                check_provider,
                json,
            };
            commands::suggest::run(options).await?;
        }
        Command::Parse { file, json } => {
            commands::parse::run(&file, json).await?;
        }
    }

    Ok(())
}
