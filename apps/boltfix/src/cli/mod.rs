//! # boltfix CLI Module
//!
//! ## Available Commands
//!
//! - `list` - List the built-in fixtures
//! - `show` - Build a fixture (or a TOML spec) and print the cursor

mod commands;

use boltfix_core::FixtureError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// boltfix - synthetic graph-database results
///
/// Builds driver-style statement results in memory and prints them.
#[derive(Parser, Debug)]
#[command(name = "boltfix")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the built-in fixtures
    List,

    /// Build a result and print its keys and records
    Show {
        /// Built-in fixture name (see `list`)
        fixture: Option<String>,

        /// TOML result spec to build instead of a built-in fixture
        #[arg(short, long, conflicts_with = "fixture")]
        file: Option<PathBuf>,

        /// Print at most this many records
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), FixtureError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::List) => cmd_list(json_mode),
        Some(Commands::Show {
            fixture,
            file,
            limit,
        }) => cmd_show(fixture.as_deref(), file.as_deref(), json_mode, limit),
        None => {
            // No subcommand - list fixtures by default
            cmd_list(json_mode)
        }
    }
}
