//! # boltfix - Fixture Inspector
//!
//! Builds synthetic graph-database statement results with boltfix-core and
//! prints them.
//!
//! ## Usage
//!
//! ```bash
//! # List the built-in fixtures
//! boltfix list
//!
//! # Print a fixture as a table, or as JSON
//! boltfix show nodes
//! boltfix --json-mode show more-elements-diff
//!
//! # Build a result declared in TOML
//! boltfix show --file result.toml --limit 10
//! ```
//!
//! Logs go to stderr. `BOLTFIX_LOG_FORMAT=json` switches them to JSON lines;
//! `RUST_LOG` overrides the default filter.

use boltfix::cli;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    init_tracing(cli.verbose);

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing - BOLTFIX_LOG_FORMAT=json enables machine-parseable output.
fn init_tracing(verbose: bool) {
    let log_format = std::env::var("BOLTFIX_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if verbose {
        "boltfix=debug,boltfix_core=debug"
    } else {
        "boltfix=info,boltfix_core=warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
