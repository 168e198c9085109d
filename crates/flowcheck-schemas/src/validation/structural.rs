//! Structural schema layer
//!
//! Wraps a compiled `jsonschema` validator for the embedded draft-07
//! workflow-definition schema. Violations are reported with the engine's own
//! message wording, one issue per violated constraint, in engine order.
//! Unknown extra fields pass; the schema does not forbid them.
//!
//! Copyright (c) 2025 Flowcheck Team
//! Licensed under the Apache-2.0 license

use crate::schema::workflow_schema;
use crate::validation::error::{SchemaCompileError, ValidationIssue};
use jsonschema::Validator;
use serde_json::Value;

/// Schema-conformance validator for workflow definitions.
///
/// Compiling the schema is the expensive step, so construct once and reuse;
/// validation itself borrows the input and allocates only the issue list.
pub struct StructuralValidator {
    validator: Validator,
}

impl StructuralValidator {
    /// Compile the embedded schema.
    pub fn new() -> Result<Self, SchemaCompileError> {
        let validator = jsonschema::validator_for(workflow_schema())
            .map_err(|e| SchemaCompileError::new(e.to_string()))?;
        Ok(Self { validator })
    }

    /// Report every schema violation in the document.
    ///
    /// Never panics for well-formed value trees; a document of the wrong
    /// shape produces issues rather than an error.
    pub fn validate(&self, doc: &Value) -> Vec<ValidationIssue> {
        self.validator
            .iter_errors(doc)
            .map(|error| ValidationIssue::structural(error.to_string()))
            .collect()
    }

    /// Fast conformance check without building messages.
    pub fn is_valid(&self, doc: &Value) -> bool {
        self.validator.is_valid(doc)
    }
}
