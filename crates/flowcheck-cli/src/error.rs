//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! various failure modes in the CLI application.

use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document failed validation (or was not valid JSON)
    #[error("Document failed validation with {count} error(s)")]
    Invalid { count: usize },

    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Refusing to overwrite an existing file
    #[error("File already exists: {} (pass --force to overwrite)", path.display())]
    AlreadyExists { path: PathBuf },

    /// The embedded schema failed to compile
    #[error("Schema error: {0}")]
    Schema(#[from] flowcheck_schemas::SchemaCompileError),

    /// JSON serialization error while rendering output
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Invalid { .. } => 1,
            Self::Io(_) => 2,
            Self::FileNotFound { .. } => 3,
            Self::AlreadyExists { .. } => 4,
            Self::Schema(_) => 5,
            Self::Json(_) => 6,
        }
    }

    /// Whether the root cause was already rendered as a report and only the
    /// exit code matters.
    pub fn is_validation_failure(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}
