//! Flowcheck CLI - validate workflow definition documents
//!
//! This is the main entry point for the flowcheck binary, providing the
//! `validate` and `init` commands over the flowcheck-schemas validation
//! core.

mod cli;
mod error;
mod handlers;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use colored::control;
use error::Result;
use output::OutputWriter;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    control::set_override(cli.use_color());
    init_logging(&cli);

    let use_color = cli.use_color();
    let writer = OutputWriter::new(cli.output, use_color, cli.quiet);

    let result = run(cli.command, &writer);
    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            // Validation failures are already rendered as a report; only
            // operational errors need an extra line.
            if !e.is_validation_failure() {
                eprintln!("{}", error::format_error(&e, use_color));
            }
            process::exit(e.exit_code());
        }
    }
}

/// Dispatch to the command handler
fn run(command: Commands, writer: &OutputWriter) -> Result<()> {
    match command {
        Commands::Validate(args) => handlers::handle_validate(args, writer),
        Commands::Init(args) => handlers::handle_init(args, writer),
    }
}

/// Initialize tracing from verbosity flags; RUST_LOG overrides when set.
fn init_logging(cli: &Cli) {
    let default_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("flowcheck={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
