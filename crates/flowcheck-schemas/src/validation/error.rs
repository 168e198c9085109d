//! Error and report types for workflow-definition validation
//!
//! Copyright (c) 2025 Flowcheck Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The validation layer that produced an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// Hand-coded business rules (non-empty arrays, required sub-fields).
    Semantic,
    /// JSON Schema conformance (required properties, types, nesting).
    Structural,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layer::Semantic => write!(f, "semantic"),
            Layer::Structural => write!(f, "structural"),
        }
    }
}

/// A single validation failure.
///
/// `Display` renders the message text alone; the layer tag is extra context
/// for callers that want to group or filter issues, and callers comparing
/// output against known messages can rely on the text being stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Which layer reported the issue.
    pub layer: Layer,
    /// Human-readable description of the failed check.
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ValidationIssue {
    /// Create a semantic-layer issue.
    pub fn semantic<M: Into<String>>(message: M) -> Self {
        Self {
            layer: Layer::Semantic,
            message: message.into(),
        }
    }

    /// Create a structural-layer issue.
    pub fn structural<M: Into<String>>(message: M) -> Self {
        Self {
            layer: Layer::Structural,
            message: message.into(),
        }
    }
}

/// The combined outcome of validating one document.
///
/// Issues keep the order they were reported in: semantic issues first, in
/// rule-declaration order, then structural issues in schema-engine order.
/// The same underlying defect may appear once per layer; the report does not
/// deduplicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Every failed check, in reporting order.
    pub errors: Vec<ValidationIssue>,
    /// True when `errors` is empty.
    pub valid: bool,
}

impl ValidationReport {
    /// Build a report from an ordered issue list.
    pub fn from_errors(errors: Vec<ValidationIssue>) -> Self {
        let valid = errors.is_empty();
        Self { errors, valid }
    }

    /// Whether the document passed both layers.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Number of reported issues.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when no issues were reported.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The message texts, in reporting order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|issue| issue.message.as_str())
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            return write!(f, "document is valid");
        }
        write!(f, "{} validation error(s):", self.errors.len())?;
        for (i, issue) in self.errors.iter().enumerate() {
            write!(f, "\n{}. {}", i + 1, issue)?;
        }
        Ok(())
    }
}

/// The embedded schema failed to compile into a validator.
///
/// This indicates a defect in the shipped schema artifact, not in any
/// candidate document.
#[derive(Debug, Error)]
#[error("failed to compile the workflow-definition schema: {reason}")]
pub struct SchemaCompileError {
    /// Engine-reported reason.
    pub reason: String,
}

impl SchemaCompileError {
    pub(crate) fn new<R: Into<String>>(reason: R) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_display_is_bare_message() {
        let issue = ValidationIssue::semantic("Tasks must be a non-empty array");
        assert_eq!(issue.to_string(), "Tasks must be a non-empty array");
    }

    #[test]
    fn test_report_valid_flag_tracks_errors() {
        let empty = ValidationReport::from_errors(vec![]);
        assert!(empty.is_valid());
        assert!(empty.is_empty());

        let report = ValidationReport::from_errors(vec![ValidationIssue::structural(
            "\"id\" is a required property",
        )]);
        assert!(!report.is_valid());
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_report_display_numbers_issues() {
        let report = ValidationReport::from_errors(vec![
            ValidationIssue::semantic("Initiation event is required"),
            ValidationIssue::semantic("Termination event is required"),
        ]);
        let rendered = report.to_string();
        assert!(rendered.contains("1. Initiation event is required"));
        assert!(rendered.contains("2. Termination event is required"));
    }

    #[test]
    fn test_issue_serializes_with_layer_tag() {
        let issue = ValidationIssue::structural("\"tasks\" is a required property");
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["layer"], "structural");
        assert_eq!(json["message"], "\"tasks\" is a required property");
    }
}
