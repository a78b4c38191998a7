//! Property tests over generated schema trees.
//!
//! The generator tracks how many object schemas it produced, so traversal
//! can be checked against an independent count.

use std::collections::HashSet;

use proptest::prelude::*;
use schemalint_core::{LocationPath, Schema};
use schemalint_schema::walk::{count_nodes, visit, walk};
use schemalint_schema::{RuleRegistry, ValidationEngine};
use serde_json::{json, Map, Value};

/// A schema document paired with the number of object schemas in it.
fn schema_tree() -> impl Strategy<Value = (Value, usize)> {
    let leaf = prop_oneof![
        any::<bool>().prop_map(|b| (Value::Bool(b), 0)),
        (
            prop::option::of(-3i64..6),
            prop::option::of(-3i64..6)
        )
            .prop_map(|(min, max)| {
                let mut map = Map::new();
                if let Some(min) = min {
                    map.insert("minItems".into(), json!(min));
                }
                if let Some(max) = max {
                    map.insert("maxItems".into(), json!(max));
                }
                (Value::Object(map), 1)
            }),
        (0usize..3, prop::option::of(0usize..3), any::<bool>()).prop_map(
            |(n_values, n_names, numeric_label)| {
                let mut map = Map::new();
                map.insert("enum".into(), json!((0..n_values).collect::<Vec<_>>()));
                if let Some(n) = n_names {
                    let mut names: Vec<Value> = (0..n).map(|i| json!(format!("N{i}"))).collect();
                    if numeric_label {
                        names.push(json!(7));
                    }
                    map.insert("tsEnumNames".into(), Value::Array(names));
                }
                (Value::Object(map), 1)
            }
        ),
    ];

    leaf.prop_recursive(4, 64, 4, |inner| {
        let children = prop::collection::vec(inner.clone(), 0..4);
        prop_oneof![
            children.clone().prop_map(|children| {
                let total = children.iter().map(|(_, n)| n).sum::<usize>();
                let properties: Map<String, Value> = children
                    .into_iter()
                    .enumerate()
                    .map(|(i, (child, _))| (format!("p{i}"), child))
                    .collect();
                (json!({ "properties": properties, "minItems": -1 }), total + 1)
            }),
            (children.clone(), any::<bool>()).prop_map(|(children, with_junk)| {
                let total = children.iter().map(|(_, n)| n).sum::<usize>();
                let mut items: Vec<Value> = children.into_iter().map(|(c, _)| c).collect();
                if with_junk {
                    // Not a schema; must neither count nor hide its siblings.
                    items.insert(0, json!("junk"));
                }
                (json!({ "items": items }), total + 1)
            }),
            children.prop_map(|children| {
                let total = children.iter().map(|(_, n)| n).sum::<usize>();
                let any_of: Vec<Value> = children.into_iter().map(|(c, _)| c).collect();
                (json!({ "anyOf": any_of, "maxItems": 2 }), total + 1)
            }),
            inner.prop_map(|(child, n)| (json!({ "not": child, "definitions": {} }), n + 1)),
        ]
    })
}

proptest! {
    /// Every object schema is visited exactly once, at a distinct path.
    #[test]
    fn every_node_visited_exactly_once((doc, expected) in schema_tree()) {
        let schema = Schema::from_value(doc).unwrap();
        prop_assert_eq!(count_nodes(&schema), expected);

        let mut paths = Vec::new();
        visit(&schema, &LocationPath::root(), &mut |_, path| paths.push(path.to_string()));
        let distinct: HashSet<&String> = paths.iter().collect();
        prop_assert_eq!(distinct.len(), paths.len());
    }

    /// A transforming traversal that re-emits each node unchanged is the identity.
    #[test]
    fn identity_walk_preserves_tree((doc, _) in schema_tree()) {
        let schema = Schema::from_value(doc).unwrap();
        let rebuilt = walk(schema.clone(), &LocationPath::root(), &mut |object, _| {
            Schema::from(object)
        });
        prop_assert_eq!(rebuilt, schema);
    }

    /// Validating the same tree twice yields identical, identically ordered output.
    #[test]
    fn validation_is_idempotent((doc, _) in schema_tree()) {
        let schema = Schema::from_value(doc).unwrap();
        let engine = ValidationEngine::default();
        prop_assert_eq!(
            engine.validate(&schema, "generated.json"),
            engine.validate(&schema, "generated.json")
        );
    }

    /// Diagnostics are grouped by rule in registration order.
    #[test]
    fn diagnostics_grouped_by_rule((doc, _) in schema_tree()) {
        let schema = Schema::from_value(doc).unwrap();
        let registry = RuleRegistry::builtin();
        let names = registry.names();
        let diagnostics = ValidationEngine::new(registry).check(&schema, "generated.json");

        let positions: Vec<usize> = diagnostics
            .iter()
            .map(|d| names.iter().position(|n| *n == d.rule).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] <= w[1]), "{:?}", positions);
    }

    /// At most one diagnostic per (rule, node) pair.
    #[test]
    fn no_duplicate_diagnostics((doc, expected) in schema_tree()) {
        let schema = Schema::from_value(doc).unwrap();
        let engine = ValidationEngine::default();
        let diagnostics = engine.check(&schema, "generated.json");

        let distinct: HashSet<_> = diagnostics.iter().collect();
        prop_assert_eq!(distinct.len(), diagnostics.len());
        prop_assert!(diagnostics.len() <= expected * engine.registry().len());
    }
}
