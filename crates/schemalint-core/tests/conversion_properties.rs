//! Property tests for converting arbitrary JSON documents into the schema model.
//!
//! Conversion must be total for object and boolean roots, and re-emitting a
//! converted schema must convert back to the same tree.

use proptest::prelude::*;
use schemalint_core::{Schema, SchemaError};
use serde_json::Value;

/// Arbitrary JSON biased towards schema keywords so nested containers
/// actually get exercised.
fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-5i64..10).prop_map(|n| serde_json::json!(n)),
        "[a-zA-Z]{0,6}".prop_map(Value::String),
    ];
    let key = prop_oneof![
        Just("properties".to_string()),
        Just("items".to_string()),
        Just("additionalProperties".to_string()),
        Just("anyOf".to_string()),
        Just("definitions".to_string()),
        Just("enum".to_string()),
        Just("tsEnumNames".to_string()),
        Just("minItems".to_string()),
        Just("maxItems".to_string()),
        "[a-z]{1,6}",
    ];
    leaf.prop_recursive(4, 48, 6, move |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            prop::collection::btree_map(key.clone(), inner, 0..5)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    /// Conversion succeeds exactly when the root is an object or a boolean.
    #[test]
    fn conversion_is_total_for_schema_roots(value in json_value()) {
        let schema_shaped = matches!(value, Value::Object(_) | Value::Bool(_));
        match Schema::from_value(value) {
            Ok(_) => prop_assert!(schema_shaped),
            Err(SchemaError::NotASchema { .. }) => prop_assert!(!schema_shaped),
        }
    }

    /// Re-emitting and re-converting yields the same tree.
    #[test]
    fn re_emitted_schema_converts_back(value in json_value()) {
        if let Ok(schema) = Schema::from_value(value) {
            let again = Schema::from_value(schema.to_value()).unwrap();
            prop_assert_eq!(again, schema);
        }
    }
}
