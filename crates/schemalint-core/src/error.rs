//! # Error Types
//!
//! Conversion into the schema model can fail only at the document root.
//! Everything below the root degrades to "unrecognised shape" instead.

use serde_json::Value;
use thiserror::Error;

/// Error converting a parsed document into a [`Schema`](crate::Schema).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The document root is neither an object nor a boolean.
    #[error("document root is not a schema: expected an object or a boolean, found {found}")]
    NotASchema {
        /// JSON kind of the rejected root value.
        found: &'static str,
    },
}

/// Human-readable JSON kind of a value, used in error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
