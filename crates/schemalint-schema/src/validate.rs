//! # Validation Engine
//!
//! Runs every registered rule over every object schema in a tree and
//! collects one [`Diagnostic`] per violation.
//!
//! ## Ordering
//!
//! The outer loop is over rules in registration order; each rule gets its
//! own full traversal of the tree. Output is therefore grouped by rule,
//! then by traversal order within the rule's pass. Callers may rely on
//! this ordering: the same input always yields the same sequence.
//!
//! There is no deduplication and no early exit. A node violating three
//! rules produces three diagnostics.
//!
//! ## Side Effects
//!
//! None. The tree is borrowed immutably and no I/O is performed. The file
//! name is used only as a label.

use std::fmt;

use schemalint_core::{LocationPath, Schema};
use serde::Serialize;

use crate::rules::RuleRegistry;
use crate::walk;

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Diagnostic {
    /// Name of the violated rule.
    pub rule: String,
    /// Location of the violating node (empty at the root).
    pub path: String,
    /// Source file label supplied by the caller.
    pub file: String,
}

impl Diagnostic {
    pub fn new(rule: impl Into<String>, path: &LocationPath, file: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            path: path.to_string(),
            file: file.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error at key \"{}\" in file \"{}\": {}",
            self.path, self.file, self.rule
        )
    }
}

/// Applies a [`RuleRegistry`] to schema trees.
///
/// The engine holds no per-validation state; one engine can validate many
/// trees, from many threads.
#[derive(Debug, Clone, Default)]
pub struct ValidationEngine {
    registry: RuleRegistry,
}

impl ValidationEngine {
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Structured diagnostics for every violation in `root`.
    pub fn check(&self, root: &Schema, file_name: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for rule in self.registry.iter() {
            let before = diagnostics.len();

            walk::visit(root, &LocationPath::root(), &mut |node, path| {
                if rule.evaluate(node).is_violated() {
                    tracing::trace!(rule = rule.name(), path = %path, "rule violated");
                    diagnostics.push(Diagnostic::new(rule.name(), path, file_name));
                }
            });

            tracing::debug!(
                rule = rule.name(),
                file = file_name,
                violations = diagnostics.len() - before,
                "rule pass complete"
            );
        }

        diagnostics
    }

    /// Rendered diagnostics for every violation in `root`. Empty means no
    /// violations were found.
    pub fn validate(&self, root: &Schema, file_name: &str) -> Vec<String> {
        self.check(root, file_name)
            .iter()
            .map(Diagnostic::to_string)
            .collect()
    }
}

/// Validate `root` with the built-in rules.
pub fn validate(root: &Schema, file_name: &str) -> Vec<String> {
    ValidationEngine::default().validate(root, file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{
        Rule, RuleOutcome, ENUM_NAMES_ARE_STRINGS, ENUM_NAMES_SAME_LENGTH,
        MAX_ITEMS_AT_LEAST_MIN_ITEMS, MAX_ITEMS_NON_NEGATIVE, MIN_ITEMS_NON_NEGATIVE,
    };
    use serde_json::json;

    fn schema(value: serde_json::Value) -> Schema {
        Schema::from_value(value).unwrap()
    }

    fn rules_hit(diagnostics: &[Diagnostic]) -> Vec<&str> {
        diagnostics.iter().map(|d| d.rule.as_str()).collect()
    }

    #[test]
    fn diagnostic_format() {
        let d = Diagnostic::new(
            MIN_ITEMS_NON_NEGATIVE,
            &LocationPath::root().key("properties").key("foo"),
            "pet.json",
        );
        assert_eq!(
            d.to_string(),
            "Error at key \"properties.foo\" in file \"pet.json\": When minItems exists, minItems >= 0"
        );
    }

    #[test]
    fn clean_schema_has_no_diagnostics() {
        let s = schema(json!({
            "type": "object",
            "properties": {"name": {"type": "string"}},
            "additionalProperties": false
        }));
        assert!(validate(&s, "clean.json").is_empty());
    }

    #[test]
    fn enum_length_mismatch_reported_once_at_node() {
        let s = schema(json!({
            "properties": {"kind": {"enum": ["a", "b"], "tsEnumNames": ["A"]}}
        }));
        let diagnostics = ValidationEngine::default().check(&s, "f.json");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule, ENUM_NAMES_SAME_LENGTH);
        assert_eq!(diagnostics[0].path, "properties.kind");
    }

    #[test]
    fn non_string_enum_name_reported() {
        let s = schema(json!({"enum": [1, 2], "tsEnumNames": ["One", 2]}));
        let diagnostics = ValidationEngine::default().check(&s, "f.json");
        assert_eq!(rules_hit(&diagnostics), vec![ENUM_NAMES_ARE_STRINGS]);
        assert_eq!(diagnostics[0].path, "");
    }

    #[test]
    fn inverted_bounds_reported() {
        let s = schema(json!({"minItems": 5, "maxItems": 3}));
        let diagnostics = ValidationEngine::default().check(&s, "f.json");
        assert_eq!(rules_hit(&diagnostics), vec![MAX_ITEMS_AT_LEAST_MIN_ITEMS]);
    }

    #[test]
    fn negative_max_items_alone() {
        let s = schema(json!({"maxItems": -1}));
        let diagnostics = ValidationEngine::default().check(&s, "f.json");
        assert_eq!(rules_hit(&diagnostics), vec![MAX_ITEMS_NON_NEGATIVE]);
    }

    #[test]
    fn negative_min_items_alone() {
        let s = schema(json!({"minItems": -1}));
        let diagnostics = ValidationEngine::default().check(&s, "f.json");
        assert_eq!(rules_hit(&diagnostics), vec![MIN_ITEMS_NON_NEGATIVE]);
    }

    #[test]
    fn bounds_outside_i64_are_still_checked() {
        let s = schema(serde_json::from_str(r#"{"minItems": 10000000000000000000, "maxItems": 3}"#).unwrap());
        let diagnostics = ValidationEngine::default().check(&s, "f.json");
        assert_eq!(rules_hit(&diagnostics), vec![MAX_ITEMS_AT_LEAST_MIN_ITEMS]);

        let s = schema(serde_json::from_str(r#"{"maxItems": -10000000000000000000}"#).unwrap());
        let diagnostics = ValidationEngine::default().check(&s, "f.json");
        assert_eq!(rules_hit(&diagnostics), vec![MAX_ITEMS_NON_NEGATIVE]);
    }

    #[test]
    fn malformed_container_elements_do_not_hide_siblings() {
        let s = schema(json!({"properties": {"a": {"minItems": -1}, "b": 5}}));
        assert_eq!(
            validate(&s, "f.json"),
            vec!["Error at key \"properties.a\" in file \"f.json\": When minItems exists, minItems >= 0"]
        );

        let s = schema(json!({"items": [{"maxItems": -1}, "x"]}));
        assert_eq!(
            validate(&s, "f.json"),
            vec!["Error at key \"items[0]\" in file \"f.json\": When maxItems exists, maxItems >= 0"]
        );
    }

    #[test]
    fn one_node_can_violate_several_rules() {
        let s = schema(json!({"minItems": -1, "maxItems": -2}));
        let diagnostics = ValidationEngine::default().check(&s, "f.json");
        assert_eq!(
            rules_hit(&diagnostics),
            vec![
                MAX_ITEMS_AT_LEAST_MIN_ITEMS,
                MAX_ITEMS_NON_NEGATIVE,
                MIN_ITEMS_NON_NEGATIVE
            ]
        );
    }

    #[test]
    fn nested_violation_path() {
        let s = schema(json!({
            "properties": {"foo": {"type": "array", "items": {"maxItems": -1}}}
        }));
        assert_eq!(
            validate(&s, "nested.json"),
            vec![
                "Error at key \"properties.foo.items\" in file \"nested.json\": When maxItems exists, maxItems >= 0"
            ]
        );
    }

    #[test]
    fn output_grouped_by_rule_then_traversal_order() {
        let s = schema(json!({
            "minItems": -1,
            "properties": {
                "a": {"maxItems": -1},
                "b": {"minItems": -3, "maxItems": 1}
            },
            "definitions": {"D": {"maxItems": -5}}
        }));
        let diagnostics = ValidationEngine::default().check(&s, "f.json");
        let got: Vec<(&str, &str)> = diagnostics
            .iter()
            .map(|d| (d.rule.as_str(), d.path.as_str()))
            .collect();
        assert_eq!(
            got,
            vec![
                (MAX_ITEMS_NON_NEGATIVE, "properties.a"),
                (MAX_ITEMS_NON_NEGATIVE, "definitions.D"),
                (MIN_ITEMS_NON_NEGATIVE, "properties.b"),
                (MIN_ITEMS_NON_NEGATIVE, ""),
            ]
        );
    }

    #[test]
    fn satisfied_outcome_does_not_suppress_later_rules() {
        let registry = RuleRegistry::from_rules([
            Rule::new("always satisfied", |_| RuleOutcome::Satisfied),
            Rule::new("always violated", |_| RuleOutcome::Violated),
        ]);
        let s = schema(json!({"items": {}}));
        let diagnostics = ValidationEngine::new(registry).check(&s, "f.json");
        assert_eq!(
            rules_hit(&diagnostics),
            vec!["always violated", "always violated"]
        );
    }

    #[test]
    fn boolean_root_has_no_diagnostics() {
        assert!(validate(&Schema::Bool(false), "bool.json").is_empty());
    }

    #[test]
    fn validate_is_idempotent() {
        let s = schema(json!({
            "anyOf": [{"minItems": -1}, {"enum": [1], "tsEnumNames": [true, "x"]}]
        }));
        let engine = ValidationEngine::default();
        let first = engine.validate(&s, "same.json");
        let second = engine.validate(&s, "same.json");
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }
}
