//! Flowcheck Schemas - workflow-definition schema and validators
//!
//! This crate ships the draft-07 JSON Schema for workflow definition
//! documents together with a two-layer validator:
//!
//! - **Semantic rules**: business checks a generic schema cannot express
//!   cleanly (non-empty trigger lists, per-task required sub-fields), each
//!   with a fixed, descriptive message
//! - **Schema conformance**: required fields, types, and nesting, checked
//!   recursively with the schema engine's own messages
//!
//! Both layers always run to completion: a failed check is reported and the
//! remaining checks continue. The validator is a pure function from parsed
//! document to report; it never mutates or repairs its input.
//!
//! ## Quick start
//!
//! ```rust
//! use flowcheck_schemas::validate_workflow;
//! use serde_json::json;
//!
//! let report = validate_workflow(&json!({
//!     "triggers": ["manual"],
//!     "tasks": []
//! }));
//!
//! assert!(!report.is_valid());
//! for message in report.messages() {
//!     println!("{}", message);
//! }
//! ```
//!
//! ## Semantic rules
//!
//! - Root `triggers` must be a non-empty array
//! - `initiationEvent` must be present with `eventType` and `version`
//! - `tasks` must be non-empty; each task needs a name, at least one
//!   trigger, and at least one template
//! - `terminationEvent` must be present with `eventType`, `version`, and at
//!   least one terminator
//!
//! For required strings, absent, null, and empty all count as missing.
//!
//! Copyright (c) 2025 Flowcheck Team
//! Licensed under the Apache-2.0 license

pub mod schema;
pub mod validation;

// Re-export commonly used types for convenience
pub use schema::workflow_schema;
pub use validation::{
    validate_semantics, validate_workflow, Layer, SchemaCompileError, StructuralValidator,
    ValidationIssue, ValidationReport, WorkflowValidator,
};
