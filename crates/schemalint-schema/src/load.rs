//! # Schema Loading
//!
//! Reads schema documents from disk or from strings and converts them
//! into the typed [`Schema`] tree. JSON and YAML are supported; the format
//! is chosen from the file extension (`.yaml`/`.yml` for YAML, anything
//! else is parsed as JSON).
//!
//! This is the only I/O in the crate. Traversal, rules and the engine
//! operate on already-loaded trees.

use std::path::Path;

use schemalint_core::{LocationPath, Schema, SchemaError};
use serde_json::{Map, Number, Value};
use serde_yaml::Value as YamlValue;
use thiserror::Error;

/// Error loading a schema document.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("cannot read '{path}': {source}")]
    Read {
        /// Path of the unreadable file.
        path: String,
        source: std::io::Error,
    },

    /// The document is not well-formed JSON or YAML.
    #[error("cannot parse '{origin}' as {format}: {reason}")]
    Parse {
        /// File path or other label for the document.
        origin: String,
        format: DocumentFormat,
        reason: String,
    },

    /// The document parsed but its root is not a schema.
    #[error("'{origin}' is not a schema: {source}")]
    Schema {
        /// File path or other label for the document.
        origin: String,
        source: SchemaError,
    },
}

/// Serialization format of a schema document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Format implied by `path`'s extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                DocumentFormat::Yaml
            }
            _ => DocumentFormat::Json,
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Json => write!(f, "JSON"),
            DocumentFormat::Yaml => write!(f, "YAML"),
        }
    }
}

/// Load and convert the schema document at `path`.
///
/// # Errors
///
/// Returns [`LoadError::Read`] if the file cannot be read,
/// [`LoadError::Parse`] if it is not valid JSON/YAML, and
/// [`LoadError::Schema`] if its root is neither an object nor a boolean.
pub fn load_schema_file(path: &Path) -> Result<Schema, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "loaded schema file");

    parse_schema_str(
        &content,
        DocumentFormat::from_path(path),
        &path.display().to_string(),
    )
}

/// Parse `content` in the given format and convert it to a [`Schema`].
///
/// `origin` labels the document in error messages.
pub fn parse_schema_str(
    content: &str,
    format: DocumentFormat,
    origin: &str,
) -> Result<Schema, LoadError> {
    let parse_error = |reason: String| LoadError::Parse {
        origin: origin.to_string(),
        format,
        reason,
    };

    let value = match format {
        DocumentFormat::Json => {
            serde_json::from_str::<Value>(content).map_err(|e| parse_error(e.to_string()))?
        }
        DocumentFormat::Yaml => {
            let yaml: YamlValue =
                serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
            json_from_yaml(yaml, &LocationPath::root()).map_err(parse_error)?
        }
    };

    Schema::from_value(value).map_err(|source| LoadError::Schema {
        origin: origin.to_string(),
        source,
    })
}

/// Move a YAML document into the JSON data model.
///
/// Tags are dropped and scalar mapping keys are rendered as text. Values
/// JSON cannot hold (non-finite floats, non-scalar keys) are rejected with
/// the location at which they occur.
fn json_from_yaml(yaml: YamlValue, at: &LocationPath) -> Result<Value, String> {
    let value = match yaml {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(b),
        YamlValue::Number(n) => Value::Number(json_number(&n).ok_or_else(|| {
            format!("number {n} at {} has no JSON form", describe(at))
        })?),
        YamlValue::String(s) => Value::String(s),
        YamlValue::Sequence(seq) => Value::Array(
            seq.into_iter()
                .enumerate()
                .map(|(i, item)| json_from_yaml(item, &at.index(i)))
                .collect::<Result<_, _>>()?,
        ),
        YamlValue::Mapping(mapping) => {
            let mut map = Map::with_capacity(mapping.len());
            for (key, item) in mapping {
                let key = match key {
                    YamlValue::String(s) => s,
                    YamlValue::Number(n) => n.to_string(),
                    YamlValue::Bool(b) => b.to_string(),
                    _ => return Err(format!("non-scalar mapping key at {}", describe(at))),
                };
                let item = json_from_yaml(item, &at.key(&key))?;
                map.insert(key, item);
            }
            Value::Object(map)
        }
        YamlValue::Tagged(tagged) => json_from_yaml(tagged.value, at)?,
    };
    Ok(value)
}

fn json_number(n: &serde_yaml::Number) -> Option<Number> {
    if let Some(i) = n.as_i64() {
        Some(Number::from(i))
    } else if let Some(u) = n.as_u64() {
        Some(Number::from(u))
    } else {
        n.as_f64().and_then(Number::from_f64)
    }
}

fn describe(at: &LocationPath) -> String {
    if at.is_root() {
        "document root".to_string()
    } else {
        format!("key \"{at}\"")
    }
}
