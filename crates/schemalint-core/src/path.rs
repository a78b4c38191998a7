//! # Location Paths
//!
//! A [`LocationPath`] identifies a node's position from the schema root.
//! Keys are joined with `.` and sequence indices are bracketed, so a node
//! reached through `properties` → `foo` → `items` → second element renders
//! as `properties.foo.items[1]`. The root renders as the empty string.
//!
//! Keys are not escaped: a property literally named `a.b` is
//! indistinguishable from nested keys `a` and `b` in the rendered form.

use std::fmt;

/// Accumulated location of a node, built one descent step at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LocationPath {
    rendered: String,
}

impl LocationPath {
    /// The empty path at the schema root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Extend the path with a map key or field name.
    pub fn key(&self, key: &str) -> Self {
        let rendered = if self.rendered.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.rendered)
        };
        Self { rendered }
    }

    /// Extend the path with a sequence index.
    pub fn index(&self, index: usize) -> Self {
        Self {
            rendered: format!("{}[{index}]", self.rendered),
        }
    }

    /// Whether this is the root path.
    pub fn is_root(&self) -> bool {
        self.rendered.is_empty()
    }

    /// The rendered path.
    pub fn as_str(&self) -> &str {
        &self.rendered
    }
}

impl fmt::Display for LocationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl AsRef<str> for LocationPath {
    fn as_ref(&self) -> &str {
        &self.rendered
    }
}
