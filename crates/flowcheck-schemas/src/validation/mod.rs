//! Validation for workflow-definition documents
//!
//! Two independent layers, run over the same parsed document and merged:
//!
//! - **Semantic**: hand-coded business rules with custom messages
//!   ("every task must have at least one trigger and at least one template")
//! - **Structural**: JSON Schema conformance against the embedded draft-07
//!   workflow-definition schema
//!
//! The orchestrator reports semantic issues first, then structural ones, and
//! never deduplicates: a missing `tasks` array surfaces once from each layer.
//! Both layers are pure over their input; validators hold no state between
//! calls beyond the compiled schema.
//!
//! Copyright (c) 2025 Flowcheck Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod semantic;
pub mod structural;

// Re-export commonly used types
pub use error::{Layer, SchemaCompileError, ValidationIssue, ValidationReport};
pub use semantic::validate_semantics;
pub use structural::StructuralValidator;

use serde_json::Value;
use std::sync::LazyLock;
use tracing::trace;

/// Two-layer validator for workflow definitions.
///
/// Construction compiles the embedded schema; validation is synchronous,
/// side-effect-free, and safe to run concurrently from multiple threads.
///
/// # Examples
///
/// ```rust
/// use flowcheck_schemas::validation::WorkflowValidator;
/// use serde_json::json;
///
/// let validator = WorkflowValidator::new().unwrap();
/// let report = validator.validate(&json!({}));
/// assert!(!report.is_valid());
/// assert!(report
///     .messages()
///     .any(|m| m == "Tasks must be a non-empty array"));
/// ```
pub struct WorkflowValidator {
    structural: StructuralValidator,
}

impl WorkflowValidator {
    /// Create a validator, compiling the embedded schema.
    pub fn new() -> Result<Self, SchemaCompileError> {
        Ok(Self {
            structural: StructuralValidator::new()?,
        })
    }

    /// Validate a parsed document against both layers.
    ///
    /// The returned report lists semantic issues first, in rule-declaration
    /// order, followed by structural issues in schema-engine order. The
    /// input is never mutated and repeated calls on the same document yield
    /// identical reports.
    pub fn validate(&self, doc: &Value) -> ValidationReport {
        let mut errors = semantic::validate_semantics(doc);
        trace!(semantic_errors = errors.len(), "semantic layer finished");

        let structural = self.structural.validate(doc);
        trace!(
            structural_errors = structural.len(),
            "structural layer finished"
        );
        errors.extend(structural);

        ValidationReport::from_errors(errors)
    }
}

static SHARED_VALIDATOR: LazyLock<WorkflowValidator> = LazyLock::new(|| {
    WorkflowValidator::new().expect("embedded workflow-definition schema compiles")
});

/// Validate with a process-wide validator (compile-once, validate-many).
///
/// Results are identical to building a [`WorkflowValidator`] per call; only
/// the schema-compilation cost is shared.
pub fn validate_workflow(doc: &Value) -> ValidationReport {
    SHARED_VALIDATOR.validate(doc)
}
