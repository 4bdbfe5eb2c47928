//! Runtime for the page composition engine: the page/section data model,
//! field paths and value patching, the schema-driven form session, the
//! per-page composition store, the template registry, the renderer, and
//! the collaborator boundaries they talk to.

pub mod compose;
pub mod error;
pub mod form;
pub mod model;
pub mod obs;
pub mod path;
pub mod registry;
pub mod render;
pub mod store;

/// Convenience alias for the untyped property bags templates consume.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

///
/// Prelude
///
/// Domain vocabulary only; stores, sessions, and helpers are imported from
/// their modules.
///

pub mod prelude {
    pub use crate::{
        JsonMap,
        model::{Page, PageStatus, Section, SectionId, Slug},
        path::{FieldPath, PathStep},
        registry::Rendered,
    };
    pub use pagecraft_schema::prelude::*;
}
