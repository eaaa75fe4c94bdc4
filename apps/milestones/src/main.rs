//! # Milestones - Feedback Milestone Deriver
//!
//! The main binary around `milestone-core`.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │        apps/milestones (THE BINARY)      │
//! │                                          │
//! │   ┌──────────────┐   ┌───────────────┐   │
//! │   │    CLI       │   │   Logging     │   │
//! │   │   (clap)     │   │  (tracing)    │   │
//! │   └──────┬───────┘   └───────────────┘   │
//! │          ▼                               │
//! │   ┌────────────────┐                     │
//! │   │ milestone-core │                     │
//! │   │  (THE LOGIC)   │                     │
//! │   └────────────────┘                     │
//! └──────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! milestones derive -f feedback.json --detailed
//! cat feedback.json | milestones --json-mode derive
//! milestones codes
//! ```

use clap::Parser;
use milestones::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = cli::Cli::parse();

    init_tracing(cli.verbose);

    // Banner goes to stderr; stdout is reserved for command output.
    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing. `MILESTONES_LOG_FORMAT=json` enables machine-parseable output.
fn init_tracing(verbose: bool) {
    let log_format = std::env::var("MILESTONES_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_directive = if verbose {
        "milestones=debug"
    } else {
        "milestones=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directive.into());

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

/// Print the startup banner.
fn print_banner() {
    eprintln!(
        r#"
  Milestones v{}

  M1-M6 • Deterministic • Pure
"#,
        env!("CARGO_PKG_VERSION")
    );
}
