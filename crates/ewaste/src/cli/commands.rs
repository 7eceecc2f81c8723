//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Add command arguments.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Device name
    pub name: String,

    /// Purchase date (YYYY-MM-DD)
    pub purchase_date: String,

    /// Expected lifetime in years
    #[arg(allow_negative_numbers = true)]
    pub expected_lifetime: i64,
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Due command arguments.
#[derive(Debug, Args)]
pub struct DueCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Recycle command arguments.
#[derive(Debug, Args)]
pub struct RecycleCommand {
    /// Exact name of the items to remove
    pub name: String,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration and exit non-zero if it is invalid
    Validate {
        /// Configuration file to validate (defaults to --config, then the default path)
        #[arg(short, long, value_name = "FILE")]
        path: Option<PathBuf>,
    },
}
