//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Flowcheck CLI - workflow definition validation
///
/// Validates workflow definition documents against the workflow JSON Schema
/// and the semantic business rules, reporting precise, itemized errors.
#[derive(Parser, Debug)]
#[command(
    name = "flowcheck",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output format for results
    #[arg(short, long, value_enum, global = true, default_value = "human")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Whether output should be colorized.
    pub fn use_color(&self) -> bool {
        !self.no_color
    }
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a workflow definition document
    Validate(ValidateArgs),

    /// Emit an example workflow definition document
    Init(InitArgs),
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the workflow definition JSON file, or '-' for stdin
    #[arg(value_name = "WORKFLOW")]
    pub file: PathBuf,
}

/// Arguments for the init command
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Write the example document to this file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it already exists
    #[arg(long)]
    pub force: bool,
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output with colors
    Human,
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_validate_accepts_stdin_marker() {
        let cli = Cli::try_parse_from(["flowcheck", "validate", "-"]).unwrap();
        match cli.command {
            Commands::Validate(args) => assert_eq!(args.file, PathBuf::from("-")),
            _ => panic!("expected validate command"),
        }
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["flowcheck", "-q", "-v", "validate", "wf.json"]).is_err());
    }
}
