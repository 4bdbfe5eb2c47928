//! ## Crate layout
//! - `schema`: template keys, field descriptors, the section schema
//!   catalog, picker presets, and catalog validation.
//! - `core`: page/section data model, field paths, the schema-driven form
//!   session, the composition store, the template registry, the renderer,
//!   collaborator traits, and observability.
//!
//! The `prelude` module mirrors the surface a page-editing or rendering
//! caller uses day to day.

pub use pagecraft_core as core;
pub use pagecraft_schema as schema;

pub use pagecraft_core::error::Error;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use pagecraft_core::{
        JsonMap,
        compose::Composition,
        form::{FormSession, UploadOutcome},
        model::{Page, PageStatus, Section, SectionId, Slug},
        path::{FieldPath, PathStep},
        registry::{Rendered, Template, TemplateRegistry},
        render::{RenderContext, render_sections, render_slug},
        store::{FileStore, PageStore, StoreError},
    };
    pub use pagecraft_schema::{
        catalog::Catalog,
        field::{FieldDescriptor, FieldKind},
        key::TemplateKey,
        preset::presets,
    };
}
