//! # schemalint-schema — Semantic Consistency Checks
//!
//! Applies a fixed set of cross-field invariants to every node of a schema
//! tree and reports each violation as a diagnostic anchored at the node's
//! location and the source file name.
//!
//! ## Traversal (`walk`)
//!
//! [`walk::visit`] and [`walk::walk`] descend into every keyword that can
//! hold nested schemas, in a fixed order, children before the node itself.
//! Boolean schemas are leaves and are never handed to a visitor.
//!
//! ## Rules (`rules`)
//!
//! A [`RuleRegistry`] is an ordered, read-only list of named predicates.
//! Each predicate returns a [`RuleOutcome`]: violated, satisfied, or not
//! applicable to the node's shape.
//!
//! ## Validation (`validate`)
//!
//! [`ValidationEngine::validate`] runs one full traversal per rule, in
//! registration order, and collects a [`Diagnostic`] for every violation.
//! Output is grouped by rule, then by traversal order.
//!
//! ## Loading (`load`)
//!
//! [`load::load_schema_file`] reads a JSON or YAML document from disk for
//! callers. Nothing else in this crate performs I/O.
//!
//! ## Limitations
//!
//! The tree is owned and acyclic by construction, but traversal depth
//! equals nesting depth. Pathologically deep documents can exhaust the
//! stack.

pub mod load;
pub mod rules;
pub mod validate;
pub mod walk;

pub use load::{load_schema_file, parse_schema_str, DocumentFormat, LoadError};
pub use rules::{Rule, RuleOutcome, RuleRegistry, BUILTIN_RULES};
pub use validate::{validate, Diagnostic, ValidationEngine};
