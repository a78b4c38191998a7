//! # schemalint-core — Foundational Types for schemalint
//!
//! Defines the in-memory schema tree every other crate operates on, plus
//! the location paths used to anchor diagnostics.
//!
//! ## Key Design Principles
//!
//! 1. **Closed sum type for schemas.** A [`Schema`] is either a boolean
//!    schema or an object schema. Traversal is an exhaustive `match`, never
//!    reflective field probing.
//!
//! 2. **Typed fields for every recognised key.** `minItems` is an
//!    `Option<ItemBound>`, `tsEnumNames` is a list of [`EnumLabel`]s. A rule's
//!    applicability check is a pattern match.
//!
//! 3. **Lenient nested conversion.** Only the root can be rejected. A
//!    recognised key holding an unexpected shape is preserved verbatim in
//!    [`SchemaObject::extra`] and is neither traversed nor judged. Inside
//!    a container, a non-schema element becomes [`Entry::Malformed`] and
//!    its siblings are still converted.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `schemalint-*` crates (leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod node;
pub mod path;

// Re-export primary types for ergonomic imports.
pub use error::SchemaError;
pub use node::{EnumLabel, Entry, ItemBound, NamedSchemas, Schema, SchemaObject, SchemaOrList};
pub use path::LocationPath;
