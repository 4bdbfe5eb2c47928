//! Declarative layer of the page composition engine: template keys, the
//! recursive field-descriptor AST, the per-template schema catalog, picker
//! presets, and catalog validation.

pub mod catalog;
pub mod field;
pub mod key;
pub mod preset;
pub mod validate;

/// Maximum length for template key identifiers.
pub const MAX_TEMPLATE_KEY_LEN: usize = 64;

/// Maximum length for field identifiers within a schema.
pub const MAX_FIELD_NAME_LEN: usize = 64;

/// Maximum nesting depth for list field schemas.
///
/// The descriptor type is recursive in principle; this bound keeps editor
/// recursion and path lengths predictable.
pub const MAX_NESTING_DEPTH: usize = 8;

use thiserror::Error as ThisError;

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    ValidateError(#[from] validate::ValidateError),
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        catalog::Catalog,
        field::{FieldDescriptor, FieldKind},
        key::TemplateKey,
        preset::Preset,
    };
    pub use serde::{Deserialize, Serialize};
}
