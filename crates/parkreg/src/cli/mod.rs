//! Command-line interface for parkreg.
//!
//! This module provides the CLI structure for the `parkreg` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ClearCommand, ConfigCommand, ListCommand, OutputFormatArg, RegisterCommand, RemoveCommand,
    StatusCommand,
};

/// parkreg - Track the vehicles parked at your facility
///
/// Registers vehicles by name and plate, stamps their entry time, and keeps
/// the list in local storage until they leave.
#[derive(Debug, Parser)]
#[command(name = "parkreg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Register a vehicle entering now
    Register(RegisterCommand),

    /// Remove a vehicle by plate
    #[command(visible_alias = "rm")]
    Remove(RemoveCommand),

    /// Show the registered vehicles
    #[command(visible_alias = "ls")]
    List(ListCommand),

    /// Remove every registered vehicle
    Clear(ClearCommand),

    /// Show storage status
    Status(StatusCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::Verbosity;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "parkreg");
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(parse(&["parkreg", "-q", "list"]).verbosity(), Verbosity::Quiet);
        assert_eq!(parse(&["parkreg", "list"]).verbosity(), Verbosity::Normal);
        assert_eq!(parse(&["parkreg", "-v", "list"]).verbosity(), Verbosity::Verbose);
        assert_eq!(parse(&["parkreg", "-vv", "list"]).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_parse_register() {
        let cli = parse(&["parkreg", "register", "Alice", "ABC123"]);
        let Command::Register(cmd) = cli.command else {
            panic!("expected register");
        };
        assert_eq!(cmd.name, "Alice");
        assert_eq!(cmd.plate, "ABC123");
        assert!(cmd.format.is_none());
    }

    #[test]
    fn test_parse_register_accepts_empty_strings() {
        let cli = parse(&["parkreg", "register", "", ""]);
        let Command::Register(cmd) = cli.command else {
            panic!("expected register");
        };
        assert!(cmd.name.is_empty());
        assert!(cmd.plate.is_empty());
    }

    #[test]
    fn test_parse_register_requires_plate() {
        assert!(Cli::try_parse_from(["parkreg", "register", "Alice"]).is_err());
    }

    #[test]
    fn test_parse_remove_alias() {
        let cli = parse(&["parkreg", "rm", "ABC123"]);
        assert!(matches!(cli.command, Command::Remove(RemoveCommand { ref plate, .. }) if plate == "ABC123"));
    }

    #[test]
    fn test_parse_list_format() {
        let cli = parse(&["parkreg", "list", "--format", "json"]);
        let Command::List(cmd) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(cmd.format, Some(OutputFormatArg::Json));
    }

    #[test]
    fn test_parse_clear_yes() {
        let cli = parse(&["parkreg", "clear", "--yes"]);
        assert!(matches!(cli.command, Command::Clear(ClearCommand { yes: true })));
    }

    #[test]
    fn test_parse_with_config() {
        let cli = parse(&["parkreg", "-c", "/custom/config.toml", "status"]);
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
        assert!(matches!(cli.command, Command::Status(_)));
    }

    #[test]
    fn test_parse_config_validate() {
        let cli = parse(&["parkreg", "config", "validate", "--file", "x.toml"]);
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Validate { file: Some(_) })
        ));
    }
}
