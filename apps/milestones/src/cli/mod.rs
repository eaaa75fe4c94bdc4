//! # Milestones CLI Module
//!
//! This module implements the CLI interface.
//!
//! ## Available Commands
//!
//! - `derive` - Derive milestones from a feedback JSON document
//! - `codes` - List milestone codes and their criteria

mod commands;

use clap::{Parser, Subcommand};
use milestone_core::MilestoneError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Milestones - feedback milestone deriver
///
/// Reads an AI-generated feedback record and reports which of the six
/// milestones (M1-M6) it achieves.
#[derive(Parser, Debug)]
#[command(name = "milestones")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

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
    /// Derive milestones from a feedback record
    Derive {
        /// Path to the feedback JSON file ("-" or omitted for stdin)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Show each milestone's description
        #[arg(short, long)]
        detailed: bool,

        /// Emit the full report instead of the milestone array (JSON mode only; ignored in text mode)
        #[arg(short, long)]
        report: bool,
    },

    /// List milestone codes and criteria
    Codes,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), MilestoneError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Derive {
            file,
            detailed,
            report,
        }) => cmd_derive(file.as_deref(), json_mode, detailed, report),
        Some(Commands::Codes) => cmd_codes(json_mode),
        None => {
            // No subcommand - list codes by default
            cmd_codes(json_mode)
        }
    }
}
