//! Output formatting and writing utilities
//!
//! Renders validation reports and status lines in human-readable or JSON
//! form. Human output tags each issue with the layer that reported it;
//! JSON output serializes the report structure as-is.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use flowcheck_schemas::{ValidationIssue, ValidationReport};
use serde_json::json;
use std::io::{self, Write};

/// Writer for command output, honoring format, color, and quiet settings.
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self {
            format,
            use_color,
            quiet,
        }
    }

    /// Informational line; suppressed in quiet mode and JSON modes.
    pub fn info(&self, message: &str) -> Result<()> {
        if !self.quiet && self.format == OutputFormat::Human {
            writeln!(io::stdout(), "{}", message)?;
        }
        Ok(())
    }

    /// Success line (human mode only).
    pub fn success(&self, message: &str) -> Result<()> {
        if self.format == OutputFormat::Human {
            if self.use_color {
                writeln!(io::stdout(), "{}", message.green())?;
            } else {
                writeln!(io::stdout(), "{}", message)?;
            }
        }
        Ok(())
    }

    /// Write raw text unconditionally (used for document output).
    pub fn raw(&self, text: &str) -> Result<()> {
        writeln!(io::stdout(), "{}", text.trim_end())?;
        Ok(())
    }

    /// Render a validation report.
    pub fn report(&self, report: &ValidationReport) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.raw(&serde_json::to_string(report)?),
            OutputFormat::JsonPretty => self.raw(&serde_json::to_string_pretty(report)?),
            OutputFormat::Human => {
                if report.is_valid() {
                    self.success("✓ Workflow definition is valid")
                } else {
                    self.failure_line("✗ Workflow definition is invalid")?;
                    for (i, issue) in report.errors.iter().enumerate() {
                        self.issue_line(i + 1, issue)?;
                    }
                    Ok(())
                }
            }
        }
    }

    /// Render the parse-failure sentinel: the single synthetic error the
    /// collaborator substitutes when the input is not valid JSON.
    pub fn parse_failure(&self) -> Result<()> {
        match self.format {
            OutputFormat::Human => self.failure_line("✗ Invalid JSON syntax"),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                let body = json!({
                    "valid": false,
                    "errors": [{"layer": "parse", "message": "Invalid JSON syntax"}],
                });
                if self.format == OutputFormat::Json {
                    self.raw(&serde_json::to_string(&body)?)
                } else {
                    self.raw(&serde_json::to_string_pretty(&body)?)
                }
            }
        }
    }

    fn failure_line(&self, message: &str) -> Result<()> {
        if self.use_color {
            writeln!(io::stdout(), "{}", message.red())?;
        } else {
            writeln!(io::stdout(), "{}", message)?;
        }
        Ok(())
    }

    fn issue_line(&self, number: usize, issue: &ValidationIssue) -> Result<()> {
        let tag = format!("[{}]", issue.layer);
        if self.use_color {
            writeln!(
                io::stdout(),
                "  {}. {} {}",
                number,
                tag.dimmed(),
                issue.message
            )?;
        } else {
            writeln!(io::stdout(), "  {}. {} {}", number, tag, issue.message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowcheck_schemas::ValidationReport;

    #[test]
    fn test_report_serializes_to_stable_json() {
        let report = ValidationReport::from_errors(vec![ValidationIssue::semantic(
            "Triggers must be a non-empty array",
        )]);
        let body = serde_json::to_value(&report).unwrap();
        assert_eq!(body["valid"], false);
        assert_eq!(
            body["errors"][0]["message"],
            "Triggers must be a non-empty array"
        );
        assert_eq!(body["errors"][0]["layer"], "semantic");
    }

    #[test]
    fn test_writers_do_not_fail_on_empty_report() {
        let writer = OutputWriter::new(OutputFormat::Human, false, false);
        let report = ValidationReport::from_errors(vec![]);
        assert!(writer.report(&report).is_ok());
    }
}
