//! Property-based tests for the workflow-definition validator
//!
//! These verify the validator's behavioral guarantees across a wide range of
//! inputs: no panics, deterministic output, and stable per-task ordering.

use flowcheck_schemas::{validate_workflow, WorkflowValidator};
use proptest::prelude::*;
use serde_json::{json, Value};

/// Strategy for generating random JSON values with controlled complexity
fn json_value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-zA-Z0-9 ]{0,40}".prop_map(Value::String),
    ];

    leaf.prop_recursive(
        3,  // max depth
        10, // max size
        5,  // items per collection
        |inner| {
            prop_oneof![
                proptest::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
                proptest::collection::hash_map("[a-zA-Z_][a-zA-Z0-9_]{0,16}", inner, 0..5)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        },
    )
}

/// Strategy for generating workflow-shaped documents with optional holes
fn workflow_like_strategy() -> impl Strategy<Value = Value> {
    (
        proptest::option::of(proptest::collection::vec("[a-z-]{1,16}", 0..3)),
        proptest::option::of("[a-z-]{0,16}"), // initiationEvent.eventType
        proptest::option::of(proptest::collection::vec(
            proptest::option::of("[a-z-]{0,16}"), // task names, possibly empty
            0..4,
        )),
        proptest::option::of("[a-z-]{0,16}"), // terminationEvent.eventType
    )
        .prop_map(|(triggers, initiation, tasks, termination)| {
            let mut doc = json!({});
            if let Some(t) = triggers {
                doc["triggers"] = json!(t);
            }
            if let Some(et) = initiation {
                doc["initiationEvent"] = json!({"eventType": et, "version": "1.0"});
            }
            if let Some(names) = tasks {
                let tasks: Vec<Value> = names
                    .into_iter()
                    .map(|name| match name {
                        Some(n) => json!({"name": n, "triggers": ["t"], "templates": [{}]}),
                        None => json!({}),
                    })
                    .collect();
                doc["tasks"] = json!(tasks);
            }
            if let Some(et) = termination {
                doc["terminationEvent"] =
                    json!({"eventType": et, "version": "1.0", "terminators": []});
            }
            doc
        })
}

proptest! {
    /// Property: the validator never panics, whatever the object shape.
    #[test]
    fn prop_validator_never_panics(input in json_value_strategy()) {
        // Input must be object-like to match a parsed document; wrap leaves.
        let doc = match input {
            Value::Object(_) => input,
            other => json!({"payload": other}),
        };
        let _ = validate_workflow(&doc);
    }

    /// Property: validation is idempotent - identical ordered reports for
    /// repeated calls on the same input.
    #[test]
    fn prop_validation_is_idempotent(doc in workflow_like_strategy()) {
        let first = validate_workflow(&doc);
        let second = validate_workflow(&doc);
        prop_assert_eq!(first, second);
    }

    /// Property: a fresh validator and the shared one always agree.
    #[test]
    fn prop_fresh_validator_agrees_with_shared(doc in workflow_like_strategy()) {
        let validator = WorkflowValidator::new().unwrap();
        prop_assert_eq!(validator.validate(&doc), validate_workflow(&doc));
    }

    /// Property: per-task errors appear in strictly increasing index order.
    #[test]
    fn prop_task_errors_keep_index_order(doc in workflow_like_strategy()) {
        let report = validate_workflow(&doc);
        let indices: Vec<usize> = report
            .messages()
            .filter_map(|m| {
                m.strip_prefix("Task at index ")
                    .and_then(|rest| rest.split(' ').next())
                    .and_then(|n| n.parse().ok())
            })
            .collect();
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        prop_assert_eq!(indices, sorted);
    }

    /// Property: a valid report means an empty error list and vice versa.
    #[test]
    fn prop_valid_flag_matches_error_count(doc in workflow_like_strategy()) {
        let report = validate_workflow(&doc);
        prop_assert_eq!(report.is_valid(), report.errors.is_empty());
    }
}
