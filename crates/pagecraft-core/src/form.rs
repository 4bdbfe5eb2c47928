//! Schema-driven form session for one section's data.
//!
//! The session owns a working copy of the section's property bag and applies
//! edits addressed by [`FieldPath`]. Nothing is persisted here; `commit`
//! hands the mutated bag back to the composition store, and is the only
//! gate — it refuses while any raw-JSON field holds unparseable text.

use crate::{
    JsonMap,
    obs::{self, EngineEvent},
    path::{FieldPath, PathError, PathStep},
};
use pagecraft_schema::field::{FieldDescriptor, FieldKind, find_field};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// FormSession
///

#[derive(Debug)]
pub struct FormSession<'s> {
    schema: &'s [FieldDescriptor],
    data: Value,
    initial: Value,
    json_errors: BTreeMap<FieldPath, String>,
    next_ticket: u64,
}

impl<'s> FormSession<'s> {
    #[must_use]
    pub fn new(schema: &'s [FieldDescriptor], data: JsonMap) -> Self {
        let data = Value::Object(data);
        Self {
            schema,
            initial: data.clone(),
            data,
            json_errors: BTreeMap::new(),
            next_ticket: 0,
        }
    }

    /// Live view of the working value tree.
    #[must_use]
    pub const fn data(&self) -> &Value {
        &self.data
    }

    /// True once the working tree differs from the data the session was
    /// opened with.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.data != self.initial
    }

    #[must_use]
    pub fn value_at(&self, path: &FieldPath) -> Option<&Value> {
        path.get(&self.data)
    }

    // ---- scalar fields ----

    /// Replace the value bound at `path` (text, textarea, number, select,
    /// color, or a manually typed image URL). The root path only accepts an
    /// object; the working tree must stay a property bag.
    pub fn set_value(&mut self, path: &FieldPath, value: Value) -> Result<(), FormError> {
        if path.is_root() && !value.is_object() {
            return Err(FormError::DataNotAnObject);
        }
        path.set(&mut self.data, value)?;
        Ok(())
    }

    // ---- list fields ----

    /// Append an empty item to the list at `path`, creating the list itself
    /// on first use. The item is matched lazily against the item schema as
    /// the user fills fields. Returns the new item's index.
    pub fn push_item(&mut self, path: &FieldPath) -> Result<usize, FormError> {
        self.require_list_field(path)?;

        if path.get(&self.data).is_none() {
            path.set(&mut self.data, Value::Array(Vec::new()))?;
        }

        let arr = path
            .get_mut(&mut self.data)
            .and_then(Value::as_array_mut)
            .ok_or_else(|| FormError::NotAListField {
                path: path.to_string(),
            })?;

        arr.push(Value::Object(JsonMap::new()));
        Ok(arr.len() - 1)
    }

    /// Remove the item at `index` from the list at `path`.
    pub fn remove_item(&mut self, path: &FieldPath, index: usize) -> Result<(), FormError> {
        self.require_list_field(path)?;

        let arr = path
            .get_mut(&mut self.data)
            .and_then(Value::as_array_mut)
            .ok_or_else(|| FormError::NotAListField {
                path: path.to_string(),
            })?;

        if index >= arr.len() {
            return Err(FormError::Path(PathError::IndexOutOfBounds {
                path: path.to_string(),
                index,
                len: arr.len(),
            }));
        }
        arr.remove(index);

        Ok(())
    }

    // ---- raw JSON fields ----

    /// Apply one keystroke's worth of raw JSON text for the field at `path`
    /// (the root path for whole-form `JsonFull` fields).
    ///
    /// On parse success the parsed value replaces the bound value and any
    /// prior error for the field is cleared; on failure the bound value is
    /// left untouched and the field is flagged in the error map.
    pub fn edit_json(&mut self, path: &FieldPath, raw: &str) {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) if path.is_root() => {
                self.data = Value::Object(map);
                self.json_errors.remove(path);
            }
            Ok(_) if path.is_root() => {
                // the whole form binds to the data object; scalars and
                // arrays cannot replace it
                self.flag_json(path, "whole-form JSON must be an object");
            }
            Ok(value) => {
                if let Err(err) = path.set(&mut self.data, value) {
                    self.flag_json(path, err.to_string());
                } else {
                    self.json_errors.remove(path);
                }
            }
            Err(err) => {
                self.flag_json(path, format!("invalid JSON: {err}"));
            }
        }
    }

    fn flag_json(&mut self, path: &FieldPath, message: impl Into<String>) {
        obs::record(&EngineEvent::JsonRejected {
            path: path.to_string(),
        });
        self.json_errors.insert(path.clone(), message.into());
    }

    /// Per-field error map for raw JSON fields; empty means save is allowed.
    #[must_use]
    pub const fn json_errors(&self) -> &BTreeMap<FieldPath, String> {
        &self.json_errors
    }

    #[must_use]
    pub fn error_at(&self, path: &FieldPath) -> Option<&str> {
        self.json_errors.get(path).map(String::as_str)
    }

    // ---- image uploads ----

    /// Snapshot the target path for a file upload that is about to start.
    pub fn begin_upload(&mut self, path: FieldPath) -> UploadTicket {
        let id = self.next_ticket;
        self.next_ticket += 1;

        UploadTicket { id, path }
    }

    /// Merge a finished upload's URL into the slot its ticket was issued
    /// for. The path is re-validated first: if the enclosing list item was
    /// removed while the upload was in flight, the result is dropped rather
    /// than merged into the wrong slot.
    pub fn complete_upload(&mut self, ticket: UploadTicket, url: &str) -> UploadOutcome {
        // a URL can only land in a field slot, never replace the whole bag
        if ticket.path.is_root() || !ticket.path.target_exists(&self.data) {
            obs::record(&EngineEvent::UploadDropped {
                path: ticket.path.to_string(),
            });
            return UploadOutcome::TargetGone;
        }

        match ticket.path.set(&mut self.data, Value::String(url.to_string())) {
            Ok(()) => {
                obs::record(&EngineEvent::UploadMerged {
                    path: ticket.path.to_string(),
                });
                UploadOutcome::Merged
            }
            Err(_) => {
                obs::record(&EngineEvent::UploadDropped {
                    path: ticket.path.to_string(),
                });
                UploadOutcome::TargetGone
            }
        }
    }

    // ---- commit ----

    /// Hand back the edited property bag, refusing while any raw JSON field
    /// is invalid.
    pub fn commit(self) -> Result<JsonMap, FormError> {
        if !self.json_errors.is_empty() {
            return Err(FormError::CommitBlocked {
                fields: self.json_errors.keys().map(ToString::to_string).collect(),
            });
        }

        match self.data {
            Value::Object(map) => Ok(map),
            // unreachable while the root-path guards hold; never hand back
            // an empty bag in place of real data
            _ => Err(FormError::DataNotAnObject),
        }
    }

    // Walk the descriptor tree alongside `path` and require a `List` field
    // at the end. Index steps descend into the enclosing list's item schema.
    fn require_list_field(&self, path: &FieldPath) -> Result<(), FormError> {
        let mut level = self.schema;
        let mut current: Option<&FieldDescriptor> = None;

        for step in path.steps() {
            match step {
                PathStep::Key(name) => {
                    current = find_field(level, name);
                    let Some(field) = current else {
                        return Err(FormError::NotAListField {
                            path: path.to_string(),
                        });
                    };
                    if let Some(items) = field.item_schema() {
                        // stay at this level until an index step descends
                        level = items;
                    }
                }
                PathStep::Index(_) => {
                    // descend only through list fields
                    if current.is_none_or(|f| !f.is_list()) {
                        return Err(FormError::NotAListField {
                            path: path.to_string(),
                        });
                    }
                    current = None;
                }
            }
        }

        match current {
            Some(field) if matches!(field.kind, FieldKind::List { .. }) => Ok(()),
            _ => Err(FormError::NotAListField {
                path: path.to_string(),
            }),
        }
    }
}

///
/// UploadTicket
///
/// Composite identity for an in-flight upload: issued at start, consumed at
/// completion. The snapshotted path keeps a late completion targeting the
/// slot it was started for.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UploadTicket {
    pub id: u64,
    pub path: FieldPath,
}

///
/// UploadOutcome
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UploadOutcome {
    Merged,
    TargetGone,
}

///
/// FormError
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum FormError {
    #[error("save blocked by invalid JSON in: {}", fields.join(", "))]
    CommitBlocked { fields: Vec<String> },

    #[error("section data must be a JSON object")]
    DataNotAnObject,

    #[error("'{path}' is not a list field in this schema")]
    NotAListField { path: String },

    #[error(transparent)]
    Path(#[from] PathError),
}

///
/// TESTS
///
