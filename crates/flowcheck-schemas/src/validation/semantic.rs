//! Semantic business rules for workflow definitions
//!
//! These are the checks a generic schema cannot express cleanly: non-empty
//! arrays with custom messages, required sub-fields, and per-task rules.
//! Rules run in a fixed declaration order and every failing check appends
//! one message; no rule aborts the pass.
//!
//! A required string counts as missing when its value is absent, null, or an
//! empty string. Child-field rules for `initiationEvent` and
//! `terminationEvent` only run when the parent itself is present; the
//! parent's own required-presence rule covers the absent case.
//!
//! Copyright (c) 2025 Flowcheck Team
//! Licensed under the Apache-2.0 license

use crate::validation::error::ValidationIssue;
use serde_json::Value;

/// Apply every semantic rule to a parsed document.
///
/// Returns one issue per failing check, in rule-declaration order; per-task
/// issues follow task index order. An empty result means all rules passed,
/// not that the document conforms to the schema.
pub fn validate_semantics(doc: &Value) -> Vec<ValidationIssue> {
    let mut errors = Vec::new();

    // Root triggers
    if !is_non_empty_array(doc.get("triggers")) {
        errors.push(ValidationIssue::semantic(
            "Triggers must be a non-empty array",
        ));
    }

    // Initiation event
    match present(doc.get("initiationEvent")) {
        None => errors.push(ValidationIssue::semantic("Initiation event is required")),
        Some(event) => {
            if !is_present_string(event.get("eventType")) {
                errors.push(ValidationIssue::semantic(
                    "Initiation event type is required",
                ));
            }
            if !is_present_string(event.get("version")) {
                errors.push(ValidationIssue::semantic(
                    "Initiation event version is required",
                ));
            }
        }
    }

    // Tasks
    match doc.get("tasks").and_then(Value::as_array) {
        Some(tasks) if !tasks.is_empty() => {
            for (index, task) in tasks.iter().enumerate() {
                if !is_present_string(task.get("name")) {
                    errors.push(ValidationIssue::semantic(format!(
                        "Task at index {} is missing a name",
                        index
                    )));
                }
                if !is_non_empty_array(task.get("triggers")) {
                    errors.push(ValidationIssue::semantic(format!(
                        "Task at index {} must have at least one trigger",
                        index
                    )));
                }
                if !is_non_empty_array(task.get("templates")) {
                    errors.push(ValidationIssue::semantic(format!(
                        "Task at index {} must have at least one template",
                        index
                    )));
                }
            }
        }
        _ => errors.push(ValidationIssue::semantic("Tasks must be a non-empty array")),
    }

    // Termination event
    match present(doc.get("terminationEvent")) {
        None => errors.push(ValidationIssue::semantic("Termination event is required")),
        Some(event) => {
            if !is_present_string(event.get("eventType")) {
                errors.push(ValidationIssue::semantic(
                    "Termination event type is required",
                ));
            }
            if !is_present_string(event.get("version")) {
                errors.push(ValidationIssue::semantic(
                    "Termination event version is required",
                ));
            }
            if !is_non_empty_array(event.get("terminators")) {
                errors.push(ValidationIssue::semantic(
                    "Termination event must have at least one terminator",
                ));
            }
        }
    }

    errors
}

/// A value counts as present when it exists and is not null.
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Required-string rule: absent, null, and empty string all count as missing.
/// A non-string value passes here; the structural layer reports the type
/// mismatch.
fn is_present_string(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

/// Non-empty-array rule: the value must be an array with at least one item.
/// A non-array value fails this same rule; the type mismatch itself is the
/// structural layer's job to report.
fn is_non_empty_array(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Array(items)) if !items.is_empty())
}
