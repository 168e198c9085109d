//! Validation command handler
//!
//! Reads a workflow definition document, parses it as JSON, and runs the
//! two-layer validator. When the text is not valid JSON the handler
//! substitutes the single "Invalid JSON syntax" sentinel and never invokes
//! the validation core.

use crate::cli::ValidateArgs;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use flowcheck_schemas::{validate_workflow, ValidationReport};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// What checking a piece of source text produced.
#[derive(Debug, PartialEq)]
pub enum ValidationOutcome {
    /// The text was not valid JSON; the core was not invoked.
    ParseFailure,
    /// The parsed document's validation report.
    Report(ValidationReport),
}

impl ValidationOutcome {
    /// Number of errors this outcome carries.
    pub fn error_count(&self) -> usize {
        match self {
            Self::ParseFailure => 1,
            Self::Report(report) => report.len(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Report(report) if report.is_valid())
    }
}

/// Parse and validate raw document text.
pub fn check_source(text: &str) -> ValidationOutcome {
    match serde_json::from_str(text) {
        Ok(doc) => ValidationOutcome::Report(validate_workflow(&doc)),
        Err(e) => {
            debug!("JSON parse failed: {}", e);
            ValidationOutcome::ParseFailure
        }
    }
}

/// Handle the validate command
#[instrument(skip(output), fields(file = %args.file.display()))]
pub fn handle_validate(args: ValidateArgs, output: &OutputWriter) -> Result<()> {
    info!("Starting validation");

    let content = read_source(&args.file)?;
    debug!("Read {} bytes", content.len());

    let outcome = check_source(&content);
    match &outcome {
        ValidationOutcome::ParseFailure => {
            warn!("Input is not valid JSON");
            output.parse_failure()?;
        }
        ValidationOutcome::Report(report) => {
            if report.is_valid() {
                info!("Document is valid");
            } else {
                warn!("Validation failed with {} error(s)", report.len());
            }
            output.report(report)?;
        }
    }

    if outcome.is_valid() {
        Ok(())
    } else {
        Err(Error::Invalid {
            count: outcome.error_count(),
        })
    }
}

fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_text_yields_parse_failure() {
        let outcome = check_source("{not json");
        assert_eq!(outcome, ValidationOutcome::ParseFailure);
        assert_eq!(outcome.error_count(), 1);
        assert!(!outcome.is_valid());
    }

    #[test]
    fn test_empty_object_yields_invalid_report() {
        match check_source("{}") {
            ValidationOutcome::Report(report) => {
                assert!(!report.is_valid());
                assert!(report
                    .messages()
                    .any(|m| m == "Triggers must be a non-empty array"));
            }
            other => panic!("expected a report, got {:?}", other),
        }
    }

    #[test]
    fn test_boilerplate_document_is_valid() {
        let outcome = check_source(crate::handlers::init::BOILERPLATE);
        assert!(outcome.is_valid(), "boilerplate must validate: {:?}", outcome);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let result = read_source(Path::new("definitely-not-here.json"));
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }
}
