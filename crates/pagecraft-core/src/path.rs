//! Structural field paths.
//!
//! Every edit the form session makes addresses the value tree through a
//! [`FieldPath`] — a real sequence of key/index steps, not a concatenated
//! string key. Paths are stable identifiers for in-flight work (uploads)
//! and can be re-validated against the live tree before a late merge.

use serde_json::Value;
use std::fmt;
use thiserror::Error as ThisError;

///
/// PathStep
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum PathStep {
    Key(String),
    Index(usize),
}

///
/// FieldPath
///

#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FieldPath(Vec<PathStep>);

impl FieldPath {
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn key(mut self, name: impl Into<String>) -> Self {
        self.0.push(PathStep::Key(name.into()));
        self
    }

    #[must_use]
    pub fn index(mut self, index: usize) -> Self {
        self.0.push(PathStep::Index(index));
        self
    }

    #[must_use]
    pub fn steps(&self) -> &[PathStep] {
        &self.0
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Path with the final step removed; `None` at the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.0.is_empty() {
            None
        } else {
            Some(Self(self.0[..self.0.len() - 1].to_vec()))
        }
    }

    /// Resolve to a shared reference, `None` if any step is missing.
    #[must_use]
    pub fn get<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        let mut cursor = root;
        for step in &self.0 {
            cursor = match step {
                PathStep::Key(k) => cursor.as_object()?.get(k)?,
                PathStep::Index(i) => cursor.as_array()?.get(*i)?,
            };
        }

        Some(cursor)
    }

    #[must_use]
    pub fn get_mut<'a>(&self, root: &'a mut Value) -> Option<&'a mut Value> {
        let mut cursor = root;
        for step in &self.0 {
            cursor = match step {
                PathStep::Key(k) => cursor.as_object_mut()?.get_mut(k)?,
                PathStep::Index(i) => cursor.as_array_mut()?.get_mut(*i)?,
            };
        }

        Some(cursor)
    }

    /// True when every enclosing container on this path still exists; the
    /// leaf key itself may be absent (it is about to be written).
    #[must_use]
    pub fn target_exists(&self, root: &Value) -> bool {
        match (self.parent(), self.0.last()) {
            (Some(parent), Some(PathStep::Key(_))) => {
                parent.get(root).is_some_and(Value::is_object)
            }
            (Some(parent), Some(PathStep::Index(i))) => parent
                .get(root)
                .and_then(Value::as_array)
                .is_some_and(|arr| *i < arr.len()),
            _ => true,
        }
    }

    /// Write `value` at this path.
    ///
    /// Missing objects along `Key` steps are created so a schema-known field
    /// can be set on a sparse value tree; `Index` steps never create or
    /// extend arrays — list growth goes through explicit list operations.
    pub fn set(&self, root: &mut Value, value: Value) -> Result<(), PathError> {
        let Some((last, walk)) = self.0.split_last() else {
            // whole-tree replacement
            *root = value;
            return Ok(());
        };

        let mut cursor = root;
        for (depth, step) in walk.iter().enumerate() {
            cursor = match step {
                PathStep::Key(k) => {
                    let map = cursor.as_object_mut().ok_or_else(|| PathError::NotAnObject {
                        path: render_steps(&self.0[..depth]),
                    })?;
                    map.entry(k.clone()).or_insert_with(|| Value::Object(Default::default()))
                }
                PathStep::Index(i) => {
                    let arr = cursor.as_array_mut().ok_or_else(|| PathError::NotAList {
                        path: render_steps(&self.0[..depth]),
                    })?;
                    let len = arr.len();
                    arr.get_mut(*i).ok_or(PathError::IndexOutOfBounds {
                        path: render_steps(&self.0[..depth]),
                        index: *i,
                        len,
                    })?
                }
            };
        }

        match last {
            PathStep::Key(k) => {
                let map = cursor.as_object_mut().ok_or_else(|| PathError::NotAnObject {
                    path: render_steps(walk),
                })?;
                map.insert(k.clone(), value);
            }
            PathStep::Index(i) => {
                let arr = cursor.as_array_mut().ok_or_else(|| PathError::NotAList {
                    path: render_steps(walk),
                })?;
                let len = arr.len();
                let slot = arr.get_mut(*i).ok_or(PathError::IndexOutOfBounds {
                    path: render_steps(walk),
                    index: *i,
                    len,
                })?;
                *slot = value;
            }
        }

        Ok(())
    }
}

impl From<&str> for FieldPath {
    fn from(name: &str) -> Self {
        Self::root().key(name)
    }
}

fn render_steps(steps: &[PathStep]) -> String {
    let mut out = String::new();
    for step in steps {
        match step {
            PathStep::Key(k) => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(k);
            }
            PathStep::Index(i) => {
                out.push_str(&format!("[{i}]"));
            }
        }
    }

    out
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("<root>")
        } else {
            f.write_str(&render_steps(&self.0))
        }
    }
}

///
/// PathError
///

#[remain::sorted]
#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum PathError {
    #[error("index {index} out of bounds at '{path}' (len {len})")]
    IndexOutOfBounds {
        path: String,
        index: usize,
        len: usize,
    },

    #[error("value at '{path}' is not a list")]
    NotAList { path: String },

    #[error("value at '{path}' is not an object")]
    NotAnObject { path: String },
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn items_path(i: usize, field: &str) -> FieldPath {
        FieldPath::root().key("items").index(i).key(field)
    }

    #[test]
    fn get_walks_nested_structures() {
        let root = json!({ "items": [{ "name": "A" }, { "name": "B" }] });
        let path = items_path(1, "name");
        assert_eq!(path.get(&root), Some(&json!("B")));
        assert_eq!(items_path(2, "name").get(&root), None);
    }

    #[test]
    fn set_replaces_only_the_addressed_slot() {
        let mut root = json!({ "items": [{ "name": "A" }, { "name": "B" }] });
        items_path(0, "name").set(&mut root, json!("X")).unwrap();
        assert_eq!(root, json!({ "items": [{ "name": "X" }, { "name": "B" }] }));
    }

    #[test]
    fn set_creates_missing_objects_for_key_steps() {
        let mut root = json!({});
        FieldPath::root()
            .key("nested")
            .key("title")
            .set(&mut root, json!("T"))
            .unwrap();
        assert_eq!(root, json!({ "nested": { "title": "T" } }));
    }

    #[test]
    fn set_never_extends_arrays() {
        let mut root = json!({ "items": [] });
        let err = items_path(0, "name").set(&mut root, json!("X")).unwrap_err();
        assert_eq!(
            err,
            PathError::IndexOutOfBounds {
                path: "items".to_string(),
                index: 0,
                len: 0,
            }
        );
    }

    #[test]
    fn target_exists_tracks_the_enclosing_item() {
        let root = json!({ "items": [{ "src": "a.png" }] });
        assert!(items_path(0, "src").target_exists(&root));
        // leaf key absent is fine, the item exists
        assert!(items_path(0, "alt").target_exists(&root));
        // the item itself is gone
        assert!(!items_path(1, "src").target_exists(&root));
    }

    #[test]
    fn display_renders_a_readable_route() {
        assert_eq!(items_path(2, "src").to_string(), "items[2].src");
        assert_eq!(FieldPath::root().to_string(), "<root>");
    }
}
