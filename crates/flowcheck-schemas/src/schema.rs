//! The embedded workflow-definition JSON Schema
//!
//! The schema is a fixed, versioned artifact shipped inside the crate. It is
//! data, not user input: it never changes per invocation, so it is parsed
//! once on first access and shared for the lifetime of the process.
//!
//! Copyright (c) 2025 Flowcheck Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;
use std::sync::LazyLock;

/// Raw schema text, draft-07.
pub const WORKFLOW_SCHEMA_JSON: &str =
    include_str!("../schemas/workflow-definition.schema.json");

static WORKFLOW_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    serde_json::from_str(WORKFLOW_SCHEMA_JSON)
        .expect("embedded workflow-definition schema is valid JSON")
});

/// The parsed workflow-definition schema.
pub fn workflow_schema() -> &'static Value {
    &WORKFLOW_SCHEMA
}
