//! # Schema Tree Traversal
//!
//! Recursive descent over every sub-schema reachable from a root.
//!
//! ## Order
//!
//! A node's children are visited before the node itself. Children are
//! taken keyword by keyword in this order:
//!
//! 1. `properties` (source order)
//! 2. `items` (single schema, or index order)
//! 3. `additionalProperties` (only when it is a schema object)
//! 4. `oneOf`, `anyOf`, `allOf`, `not` (single schema, or index order)
//! 5. `definitions` (source order)
//!
//! Boolean schemas are skipped wherever they appear, as are malformed
//! container elements; their siblings keep their own keys and indices.
//! Each object schema is handed to the visitor exactly once per traversal.
//!
//! ## Paths
//!
//! The visitor receives the node's [`LocationPath`], e.g.
//! `properties.foo.items` or `anyOf[2]`.

use schemalint_core::node::keys;
use schemalint_core::{Entry, LocationPath, NamedSchemas, Schema, SchemaObject, SchemaOrList};

/// Read-only traversal. Calls `visitor` once per object schema under
/// `schema` (inclusive), children first.
pub fn visit<F>(schema: &Schema, path: &LocationPath, visitor: &mut F)
where
    F: FnMut(&SchemaObject, &LocationPath),
{
    let Schema::Object(object) = schema else {
        return;
    };
    let object: &SchemaObject = object;

    if let Some(properties) = &object.properties {
        visit_named(properties, &path.key(keys::PROPERTIES), visitor);
    }
    if let Some(items) = &object.items {
        visit_slot(items, &path.key(keys::ITEMS), visitor);
    }
    if let Some(additional) = &object.additional_properties {
        visit(additional, &path.key(keys::ADDITIONAL_PROPERTIES), visitor);
    }
    for (key, slot) in combinator_slots(object) {
        if let Some(slot) = slot {
            visit_slot(slot, &path.key(key), visitor);
        }
    }
    if let Some(definitions) = &object.definitions {
        visit_named(definitions, &path.key(keys::DEFINITIONS), visitor);
    }

    visitor(object, path);
}

fn visit_named<F>(named: &NamedSchemas, path: &LocationPath, visitor: &mut F)
where
    F: FnMut(&SchemaObject, &LocationPath),
{
    for (name, entry) in named {
        if let Entry::Schema(schema) = entry {
            visit(schema, &path.key(name), visitor);
        }
    }
}

fn visit_slot<F>(slot: &SchemaOrList, path: &LocationPath, visitor: &mut F)
where
    F: FnMut(&SchemaObject, &LocationPath),
{
    match slot {
        SchemaOrList::Single(schema) => visit(schema, path, visitor),
        SchemaOrList::List(entries) => {
            for (i, entry) in entries.iter().enumerate() {
                if let Entry::Schema(schema) = entry {
                    visit(schema, &path.index(i), visitor);
                }
            }
        }
    }
}

fn combinator_slots(object: &SchemaObject) -> [(&'static str, &Option<SchemaOrList>); 4] {
    [
        (keys::ONE_OF, &object.one_of),
        (keys::ANY_OF, &object.any_of),
        (keys::ALL_OF, &object.all_of),
        (keys::NOT, &object.not),
    ]
}

/// Transforming traversal. Rebuilds the tree bottom-up, replacing each
/// object schema with whatever `visitor` returns for it.
///
/// The visitor sees a node whose children have already been replaced.
/// Boolean schemas pass through untouched. Visiting order and paths are
/// identical to [`visit`].
pub fn walk<F>(schema: Schema, path: &LocationPath, visitor: &mut F) -> Schema
where
    F: FnMut(SchemaObject, &LocationPath) -> Schema,
{
    let object = match schema {
        Schema::Bool(b) => return Schema::Bool(b),
        Schema::Object(object) => *object,
    };
    let object = walk_children(object, path, visitor);
    visitor(object, path)
}

fn walk_children<F>(mut object: SchemaObject, path: &LocationPath, visitor: &mut F) -> SchemaObject
where
    F: FnMut(SchemaObject, &LocationPath) -> Schema,
{
    if let Some(properties) = object.properties.take() {
        object.properties = Some(walk_named(properties, &path.key(keys::PROPERTIES), visitor));
    }
    if let Some(items) = object.items.take() {
        object.items = Some(walk_slot(items, &path.key(keys::ITEMS), visitor));
    }
    if let Some(additional) = object.additional_properties.take() {
        object.additional_properties =
            Some(walk(additional, &path.key(keys::ADDITIONAL_PROPERTIES), visitor));
    }
    for (key, slot) in [
        (keys::ONE_OF, &mut object.one_of),
        (keys::ANY_OF, &mut object.any_of),
        (keys::ALL_OF, &mut object.all_of),
        (keys::NOT, &mut object.not),
    ] {
        if let Some(taken) = slot.take() {
            *slot = Some(walk_slot(taken, &path.key(key), visitor));
        }
    }
    if let Some(definitions) = object.definitions.take() {
        object.definitions = Some(walk_named(definitions, &path.key(keys::DEFINITIONS), visitor));
    }
    object
}

fn walk_named<F>(named: NamedSchemas, path: &LocationPath, visitor: &mut F) -> NamedSchemas
where
    F: FnMut(SchemaObject, &LocationPath) -> Schema,
{
    named
        .into_iter()
        .map(|(name, entry)| {
            let entry = walk_entry(entry, &path.key(&name), visitor);
            (name, entry)
        })
        .collect()
}

fn walk_slot<F>(slot: SchemaOrList, path: &LocationPath, visitor: &mut F) -> SchemaOrList
where
    F: FnMut(SchemaObject, &LocationPath) -> Schema,
{
    match slot {
        SchemaOrList::Single(schema) => SchemaOrList::Single(walk(schema, path, visitor)),
        SchemaOrList::List(entries) => SchemaOrList::List(
            entries
                .into_iter()
                .enumerate()
                .map(|(i, entry)| walk_entry(entry, &path.index(i), visitor))
                .collect(),
        ),
    }
}

fn walk_entry<F>(entry: Entry, path: &LocationPath, visitor: &mut F) -> Entry
where
    F: FnMut(SchemaObject, &LocationPath) -> Schema,
{
    match entry {
        Entry::Schema(schema) => Entry::Schema(walk(schema, path, visitor)),
        malformed @ Entry::Malformed(_) => malformed,
    }
}

/// Number of object schemas under `schema`, inclusive.
pub fn count_nodes(schema: &Schema) -> usize {
    let mut count = 0;
    visit(schema, &LocationPath::root(), &mut |_, _| count += 1);
    count
}
