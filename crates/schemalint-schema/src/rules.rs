//! # Rule Registry
//!
//! Named predicates evaluated against a single object schema.
//!
//! Rules never assume a keyword is present. A missing or mis-shaped keyword
//! means the rule has no opinion on the node
//! ([`RuleOutcome::NotApplicable`]), never a violation. A satisfied outcome
//! is informational: it does not suppress or short-circuit other rules.
//!
//! The registry is built once and is read-only afterwards. There is no way
//! to add or remove a rule from an existing registry; build a new one with
//! [`RuleRegistry::from_rules`] instead.

use std::fmt;

use schemalint_core::SchemaObject;

/// Result of evaluating one rule against one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleOutcome {
    /// The node breaks the rule.
    Violated,
    /// The rule applies to the node and holds.
    Satisfied,
    /// The node's shape gives the rule nothing to judge.
    NotApplicable,
}

impl RuleOutcome {
    /// `Satisfied` if `holds`, otherwise `Violated`.
    pub fn check(holds: bool) -> Self {
        if holds {
            RuleOutcome::Satisfied
        } else {
            RuleOutcome::Violated
        }
    }

    pub fn is_violated(self) -> bool {
        self == RuleOutcome::Violated
    }
}

impl fmt::Display for RuleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleOutcome::Violated => write!(f, "violated"),
            RuleOutcome::Satisfied => write!(f, "satisfied"),
            RuleOutcome::NotApplicable => write!(f, "not applicable"),
        }
    }
}

/// Predicate signature shared by every rule.
pub type Predicate = fn(&SchemaObject) -> RuleOutcome;

/// An immutable (name, predicate) pair.
#[derive(Clone, Copy)]
pub struct Rule {
    name: &'static str,
    predicate: Predicate,
}

impl Rule {
    pub const fn new(name: &'static str, predicate: Predicate) -> Self {
        Self { name, predicate }
    }

    /// The rule's name, used verbatim in diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn evaluate(&self, node: &SchemaObject) -> RuleOutcome {
        (self.predicate)(node)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish_non_exhaustive()
    }
}

pub const ENUM_NAMES_SAME_LENGTH: &str = "Enum members and tsEnumNames must be of the same length";
pub const ENUM_NAMES_ARE_STRINGS: &str = "tsEnumNames must be an array of strings";
pub const MAX_ITEMS_AT_LEAST_MIN_ITEMS: &str =
    "When both maxItems and minItems are present, maxItems >= minItems";
pub const MAX_ITEMS_NON_NEGATIVE: &str = "When maxItems exists, maxItems >= 0";
pub const MIN_ITEMS_NON_NEGATIVE: &str = "When minItems exists, minItems >= 0";

/// The built-in rules, in registration order.
pub const BUILTIN_RULES: &[Rule] = &[
    Rule::new(ENUM_NAMES_SAME_LENGTH, enum_names_same_length),
    Rule::new(ENUM_NAMES_ARE_STRINGS, enum_names_are_strings),
    Rule::new(MAX_ITEMS_AT_LEAST_MIN_ITEMS, max_items_at_least_min_items),
    Rule::new(MAX_ITEMS_NON_NEGATIVE, max_items_non_negative),
    Rule::new(MIN_ITEMS_NON_NEGATIVE, min_items_non_negative),
];

fn enum_names_same_length(node: &SchemaObject) -> RuleOutcome {
    match (&node.enum_values, &node.ts_enum_names) {
        (Some(values), Some(names)) => RuleOutcome::check(values.len() == names.len()),
        _ => RuleOutcome::NotApplicable,
    }
}

fn enum_names_are_strings(node: &SchemaObject) -> RuleOutcome {
    match &node.ts_enum_names {
        Some(names) => RuleOutcome::check(names.iter().all(|n| n.as_text().is_some())),
        None => RuleOutcome::NotApplicable,
    }
}

fn max_items_at_least_min_items(node: &SchemaObject) -> RuleOutcome {
    match (&node.max_items, &node.min_items) {
        (Some(max), Some(min)) => RuleOutcome::check(max >= min),
        _ => RuleOutcome::NotApplicable,
    }
}

fn max_items_non_negative(node: &SchemaObject) -> RuleOutcome {
    node.max_items
        .as_ref()
        .map_or(RuleOutcome::NotApplicable, |max| RuleOutcome::check(!max.is_negative()))
}

fn min_items_non_negative(node: &SchemaObject) -> RuleOutcome {
    node.min_items
        .as_ref()
        .map_or(RuleOutcome::NotApplicable, |min| RuleOutcome::check(!min.is_negative()))
}

/// Ordered, read-only collection of rules.
///
/// `RuleRegistry` is `Send + Sync`; one registry can serve concurrent
/// validations of different trees.
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    rules: Vec<Rule>,
}

impl RuleRegistry {
    /// The built-in rules in their fixed order.
    pub fn builtin() -> Self {
        Self::from_rules(BUILTIN_RULES.iter().copied())
    }

    /// A registry holding exactly `rules`, in iteration order.
    pub fn from_rules(rules: impl IntoIterator<Item = Rule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Rule names in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(Rule::name).collect()
    }

    /// Look up a rule by name.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
