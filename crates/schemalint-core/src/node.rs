//! # Schema Node Model
//!
//! The typed in-memory form of a schema-definition tree.
//!
//! A schema position holds either a boolean (`true` accepts anything,
//! `false` rejects everything) or an object with keywords. Only the
//! keywords that rules judge or that can nest further schemas get typed
//! fields; everything else is carried through untouched in
//! [`SchemaObject::extra`].
//!
//! ## Lenient Conversion
//!
//! [`Schema::from_value`] rejects only a root that is neither an object nor
//! a boolean. Below the root, a recognised keyword with an unexpected shape
//! (e.g. `"minItems": "3"`, or `"properties": [1, 2]`) is moved into
//! `extra` unchanged. Inside a well-shaped container (`properties`,
//! `items`, `oneOf`, ...) each element is converted on its own: a
//! non-schema element is kept as [`Entry::Malformed`] at its position and
//! its schema-shaped siblings are still traversed.

use std::cmp::Ordering;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};

use crate::error::{json_kind, SchemaError};

/// Keyword spellings as they appear in schema documents.
pub mod keys {
    pub const ENUM: &str = "enum";
    pub const TS_ENUM_NAMES: &str = "tsEnumNames";
    pub const MIN_ITEMS: &str = "minItems";
    pub const MAX_ITEMS: &str = "maxItems";
    pub const PROPERTIES: &str = "properties";
    pub const ITEMS: &str = "items";
    pub const ADDITIONAL_PROPERTIES: &str = "additionalProperties";
    pub const ONE_OF: &str = "oneOf";
    pub const ANY_OF: &str = "anyOf";
    pub const ALL_OF: &str = "allOf";
    pub const NOT: &str = "not";
    pub const DEFINITIONS: &str = "definitions";
}

/// Named container elements in source order (`properties`, `definitions`).
pub type NamedSchemas = Vec<(String, Entry)>;

/// A schema fragment: a boolean schema or an object schema.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    /// `true` or `false` standing in place of a schema. A leaf.
    Bool(bool),
    /// An object schema with keywords.
    Object(Box<SchemaObject>),
}

/// One element of a schema container.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Schema(Schema),
    /// A non-schema value where a schema was expected. Never traversed.
    Malformed(Value),
}

/// A keyword slot that takes either one schema or a sequence of elements.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaOrList {
    Single(Schema),
    List(Vec<Entry>),
}

/// One element of `tsEnumNames`.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumLabel {
    /// A string label, the only well-formed kind.
    Text(String),
    /// Any non-string element, kept so it can be reported.
    Other(Value),
}

/// A numeric `minItems`/`maxItems` value.
///
/// Holds the JSON number as written. Integers compare exactly across the
/// whole `i64`/`u64` range; anything involving a float compares as `f64`.
#[derive(Debug, Clone)]
pub struct ItemBound(Number);

/// An object-shaped schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaObject {
    /// `enum`: allowed literal values.
    pub enum_values: Option<Vec<Value>>,
    /// `tsEnumNames`: labels paired positionally with `enum`.
    pub ts_enum_names: Option<Vec<EnumLabel>>,
    /// `minItems`, when it is a number.
    pub min_items: Option<ItemBound>,
    /// `maxItems`, when it is a number.
    pub max_items: Option<ItemBound>,
    pub properties: Option<NamedSchemas>,
    pub items: Option<SchemaOrList>,
    pub additional_properties: Option<Schema>,
    pub one_of: Option<SchemaOrList>,
    pub any_of: Option<SchemaOrList>,
    pub all_of: Option<SchemaOrList>,
    pub not: Option<SchemaOrList>,
    pub definitions: Option<NamedSchemas>,
    /// Every other keyword, plus recognised keywords whose value had an
    /// unexpected shape.
    pub extra: Map<String, Value>,
}

impl Schema {
    /// Convert a parsed document into a schema tree.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::NotASchema`] if `value` is neither an object
    /// nor a boolean. Nested content never causes an error.
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        schema(value).map_err(|rejected| SchemaError::NotASchema {
            found: json_kind(&rejected),
        })
    }

    /// Re-emit the schema as a JSON value.
    ///
    /// Typed keywords come first in a fixed order, followed by `extra` in
    /// its original order. Map-valued keywords keep their source order.
    pub fn to_value(&self) -> Value {
        match self {
            Schema::Bool(b) => Value::Bool(*b),
            Schema::Object(object) => Value::Object(object.to_map()),
        }
    }

    /// The object schema, if this is not a boolean schema.
    pub fn as_object(&self) -> Option<&SchemaObject> {
        match self {
            Schema::Object(object) => Some(object),
            Schema::Bool(_) => None,
        }
    }

    /// The boolean value, if this is a boolean schema.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Schema::Bool(b) => Some(*b),
            Schema::Object(_) => None,
        }
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Schema::Bool(_))
    }
}

impl From<SchemaObject> for Schema {
    fn from(object: SchemaObject) -> Self {
        Schema::Object(Box::new(object))
    }
}

impl TryFrom<Value> for Schema {
    type Error = SchemaError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Schema::from_value(value)
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Schema::from_value(value).map_err(serde::de::Error::custom)
    }
}

impl Entry {
    /// The schema, unless this element is malformed.
    pub fn as_schema(&self) -> Option<&Schema> {
        match self {
            Entry::Schema(schema) => Some(schema),
            Entry::Malformed(_) => None,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Entry::Schema(schema) => schema.to_value(),
            Entry::Malformed(value) => value.clone(),
        }
    }
}

impl From<Value> for Entry {
    fn from(value: Value) -> Self {
        match schema(value) {
            Ok(schema) => Entry::Schema(schema),
            Err(value) => Entry::Malformed(value),
        }
    }
}

impl From<Schema> for Entry {
    fn from(schema: Schema) -> Self {
        Entry::Schema(schema)
    }
}

impl ItemBound {
    pub fn new(number: Number) -> Self {
        Self(number)
    }

    pub fn as_number(&self) -> &Number {
        &self.0
    }

    pub fn is_negative(&self) -> bool {
        match self.exact() {
            Some(n) => n < 0,
            None => self.0.as_f64().is_some_and(|f| f < 0.0),
        }
    }

    fn exact(&self) -> Option<i128> {
        self.0
            .as_i64()
            .map(i128::from)
            .or_else(|| self.0.as_u64().map(i128::from))
    }
}

impl PartialEq for ItemBound {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for ItemBound {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.exact(), other.exact()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ => self.0.as_f64()?.partial_cmp(&other.0.as_f64()?),
        }
    }
}

impl From<i64> for ItemBound {
    fn from(n: i64) -> Self {
        Self(Number::from(n))
    }
}

impl SchemaObject {
    /// Build an object schema from a keyword map.
    pub fn from_map(map: Map<String, Value>) -> Self {
        let mut object = SchemaObject::default();

        for (key, value) in map {
            let rejected = match key.as_str() {
                keys::ENUM => array(value).map(|v| object.enum_values = Some(v)),
                keys::TS_ENUM_NAMES => array(value).map(|v| {
                    object.ts_enum_names = Some(v.into_iter().map(EnumLabel::from).collect());
                }),
                keys::MIN_ITEMS => bound(value).map(|n| object.min_items = Some(n)),
                keys::MAX_ITEMS => bound(value).map(|n| object.max_items = Some(n)),
                keys::PROPERTIES => named(value).map(|s| object.properties = Some(s)),
                keys::ITEMS => schema_or_list(value).map(|s| object.items = Some(s)),
                keys::ADDITIONAL_PROPERTIES => {
                    schema(value).map(|s| object.additional_properties = Some(s))
                }
                keys::ONE_OF => schema_or_list(value).map(|s| object.one_of = Some(s)),
                keys::ANY_OF => schema_or_list(value).map(|s| object.any_of = Some(s)),
                keys::ALL_OF => schema_or_list(value).map(|s| object.all_of = Some(s)),
                keys::NOT => schema_or_list(value).map(|s| object.not = Some(s)),
                keys::DEFINITIONS => named(value).map(|s| object.definitions = Some(s)),
                _ => Err(value),
            };

            if let Err(value) = rejected {
                object.extra.insert(key, value);
            }
        }

        object
    }

    /// Re-emit the object schema as a keyword map.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();

        if let Some(values) = &self.enum_values {
            map.insert(keys::ENUM.into(), Value::Array(values.clone()));
        }
        if let Some(labels) = &self.ts_enum_names {
            let labels = labels.iter().map(EnumLabel::to_value).collect();
            map.insert(keys::TS_ENUM_NAMES.into(), Value::Array(labels));
        }
        if let Some(n) = &self.min_items {
            map.insert(keys::MIN_ITEMS.into(), Value::Number(n.0.clone()));
        }
        if let Some(n) = &self.max_items {
            map.insert(keys::MAX_ITEMS.into(), Value::Number(n.0.clone()));
        }
        if let Some(named) = &self.properties {
            map.insert(keys::PROPERTIES.into(), named_to_value(named));
        }
        if let Some(items) = &self.items {
            map.insert(keys::ITEMS.into(), items.to_value());
        }
        if let Some(schema) = &self.additional_properties {
            map.insert(keys::ADDITIONAL_PROPERTIES.into(), schema.to_value());
        }
        for (key, slot) in [
            (keys::ONE_OF, &self.one_of),
            (keys::ANY_OF, &self.any_of),
            (keys::ALL_OF, &self.all_of),
            (keys::NOT, &self.not),
        ] {
            if let Some(slot) = slot {
                map.insert(key.into(), slot.to_value());
            }
        }
        if let Some(named) = &self.definitions {
            map.insert(keys::DEFINITIONS.into(), named_to_value(named));
        }

        for (key, value) in &self.extra {
            map.insert(key.clone(), value.clone());
        }

        map
    }
}

impl SchemaOrList {
    pub fn to_value(&self) -> Value {
        match self {
            SchemaOrList::Single(schema) => schema.to_value(),
            SchemaOrList::List(entries) => {
                Value::Array(entries.iter().map(Entry::to_value).collect())
            }
        }
    }
}

impl EnumLabel {
    /// The label text, if this element is a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            EnumLabel::Text(s) => Some(s),
            EnumLabel::Other(_) => None,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            EnumLabel::Text(s) => Value::String(s.clone()),
            EnumLabel::Other(v) => v.clone(),
        }
    }
}

impl From<Value> for EnumLabel {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => EnumLabel::Text(s),
            other => EnumLabel::Other(other),
        }
    }
}

// Shape converters. Each hands the original value back on mismatch so the
// caller can keep it in `extra`.

fn schema(value: Value) -> Result<Schema, Value> {
    match value {
        Value::Bool(b) => Ok(Schema::Bool(b)),
        Value::Object(map) => Ok(Schema::Object(Box::new(SchemaObject::from_map(map)))),
        other => Err(other),
    }
}

fn schema_or_list(value: Value) -> Result<SchemaOrList, Value> {
    match value {
        Value::Array(values) => Ok(SchemaOrList::List(
            values.into_iter().map(Entry::from).collect(),
        )),
        other => schema(other).map(SchemaOrList::Single),
    }
}

fn named(value: Value) -> Result<NamedSchemas, Value> {
    match value {
        Value::Object(map) => Ok(map
            .into_iter()
            .map(|(name, value)| (name, Entry::from(value)))
            .collect()),
        other => Err(other),
    }
}

fn array(value: Value) -> Result<Vec<Value>, Value> {
    match value {
        Value::Array(values) => Ok(values),
        other => Err(other),
    }
}

fn bound(value: Value) -> Result<ItemBound, Value> {
    match value {
        Value::Number(n) => Ok(ItemBound(n)),
        other => Err(other),
    }
}

fn named_to_value(named: &NamedSchemas) -> Value {
    Value::Object(
        named
            .iter()
            .map(|(name, entry)| (name.clone(), entry.to_value()))
            .collect(),
    )
}
