//! Catalog validation: structural invariants over descriptor trees.
//!
//! Validation is a development-time safety net for hand-maintained catalog
//! entries; the runtime never rejects a schema it is handed.

use crate::{MAX_FIELD_NAME_LEN, MAX_NESTING_DEPTH, field::FieldDescriptor};
use thiserror::Error as ThisError;

///
/// ValidateError
///
/// Route-aware aggregate of every problem found in one schema, so a bad
/// catalog entry reports all of its faults in a single pass.
///

#[derive(Debug, ThisError)]
#[error("{}", self.render())]
pub struct ValidateError {
    pub entries: Vec<(String, String)>,
}

impl ValidateError {
    fn render(&self) -> String {
        self.entries
            .iter()
            .map(|(route, msg)| format!("{route}: {msg}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

///
/// ErrorList
///

#[derive(Debug, Default)]
pub struct ErrorList {
    entries: Vec<(String, String)>,
}

impl ErrorList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, route: &str, message: impl Into<String>) {
        self.entries.push((route.to_string(), message.into()));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn result(self) -> Result<(), ValidateError> {
        if self.entries.is_empty() {
            Ok(())
        } else {
            Err(ValidateError {
                entries: self.entries,
            })
        }
    }
}

/// Validate one schema: local field invariants plus recursive descent into
/// list item schemas.
pub fn validate_schema(schema: &[FieldDescriptor]) -> Result<(), ValidateError> {
    let mut errors = ErrorList::new();
    validate_level(schema, "", 0, &mut errors);
    errors.result()
}

fn validate_level(schema: &[FieldDescriptor], route: &str, depth: usize, errors: &mut ErrorList) {
    if depth > MAX_NESTING_DEPTH {
        errors.add(route, format!("nesting depth exceeds {MAX_NESTING_DEPTH}"));
        return;
    }

    for (index, field) in schema.iter().enumerate() {
        let field_route = if route.is_empty() {
            field.name.to_string()
        } else {
            format!("{route}.{}", field.name)
        };

        if field.name.is_empty() {
            errors.add(&field_route, "field name must be non-empty");
        }
        if field.name.len() > MAX_FIELD_NAME_LEN {
            errors.add(
                &field_route,
                format!("field name exceeds {MAX_FIELD_NAME_LEN} chars"),
            );
        }
        if field.label.is_empty() {
            errors.add(&field_route, "field label must be non-empty");
        }

        // duplicate names shadow each other in the value tree
        if schema[..index].iter().any(|prev| prev.name == field.name) {
            errors.add(&field_route, "duplicate field name at this level");
        }

        if let Some(item_schema) = field.item_schema() {
            if item_schema.is_empty() {
                errors.add(&field_route, "list field must carry a non-empty item schema");
            } else {
                validate_level(item_schema, &field_route, depth + 1, errors);
            }
        }
    }
}

///
/// TESTS
///
