//! Command-line interface for ewaste.
//!
//! This module provides the CLI structure for the `ewaste` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::logging::Verbosity;

pub use commands::{AddCommand, ConfigCommand, DueCommand, ListCommand, RecycleCommand};

/// ewaste - Know when your devices are due for replacement
///
/// Tracks electronic devices by purchase date and expected lifetime and
/// reports which ones should be replaced or recycled.
#[derive(Debug, Parser)]
#[command(name = "ewaste")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to the inventory data file (overrides configuration)
    #[arg(short, long, global = true, value_name = "DATA_FILE")]
    pub file: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute (runs the demo when omitted)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load, add two sample devices, report due items, recycle one, save
    Demo,

    /// Track a new device
    Add(AddCommand),

    /// List every tracked device
    List(ListCommand),

    /// Show devices due for replacement
    Due(DueCommand),

    /// Remove every device with the given name
    Recycle(RecycleCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }

    /// The command to run, defaulting to the demo sequence.
    #[must_use]
    pub fn command_or_demo(&self) -> &Command {
        self.command.as_ref().unwrap_or(&Command::Demo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn cli(verbose: u8, quiet: bool) -> Cli {
        Cli {
            config: None,
            file: None,
            verbose,
            quiet,
            command: None,
        }
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "ewaste");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(cli(0, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(cli(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(cli(3, false).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_no_subcommand_runs_demo() {
        let cli = Cli::try_parse_from(["ewaste"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(cli.command_or_demo(), Command::Demo));
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from(["ewaste", "add", "Laptop", "2022-01-01", "3"]).unwrap();
        match cli.command_or_demo() {
            Command::Add(add) => {
                assert_eq!(add.name, "Laptop");
                assert_eq!(add.purchase_date, "2022-01-01");
                assert_eq!(add.expected_lifetime, 3);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_add_negative_lifetime() {
        let cli = Cli::try_parse_from(["ewaste", "add", "Loaner", "2022-01-01", "-3"]).unwrap();
        assert!(matches!(cli.command_or_demo(), Command::Add(add) if add.expected_lifetime == -3));
    }

    #[test]
    fn test_parse_due_json() {
        let cli = Cli::try_parse_from(["ewaste", "due", "--json"]).unwrap();
        assert!(matches!(cli.command_or_demo(), Command::Due(DueCommand { json: true })));
    }

    #[test]
    fn test_parse_recycle() {
        let cli = Cli::try_parse_from(["ewaste", "recycle", "Smartphone"]).unwrap();
        assert!(matches!(cli.command_or_demo(), Command::Recycle(r) if r.name == "Smartphone"));
    }

    #[test]
    fn test_parse_with_data_file() {
        let cli = Cli::try_parse_from(["ewaste", "list", "-f", "/tmp/items.json"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/items.json")));
    }

    #[test]
    fn test_parse_with_config() {
        let cli = Cli::try_parse_from(["ewaste", "-c", "/custom/config.toml", "list"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_config_validate_path_is_separate_from_data_file() {
        let cli = Cli::try_parse_from(["ewaste", "-f", "d.json", "config", "validate"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("d.json")));
        assert!(matches!(
            cli.command_or_demo(),
            Command::Config(ConfigCommand::Validate { path: None })
        ));

        let cli = Cli::try_parse_from(["ewaste", "config", "validate", "--path", "x.toml"]).unwrap();
        assert_eq!(cli.file, None);
        assert!(matches!(
            cli.command_or_demo(),
            Command::Config(ConfigCommand::Validate { path: Some(p) }) if p == &PathBuf::from("x.toml")
        ));
    }

    #[test]
    fn test_parse_config_show() {
        let cli = Cli::try_parse_from(["ewaste", "config", "show", "--json"]).unwrap();
        assert!(matches!(
            cli.command_or_demo(),
            Command::Config(ConfigCommand::Show { json: true })
        ));
    }
}
