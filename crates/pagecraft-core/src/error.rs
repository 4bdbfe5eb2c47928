//! Crate-level error aggregation.
//!
//! Every failure in the engine is scoped to the operation that raised it;
//! none are fatal. Callers that do not care which subsystem failed can
//! funnel everything into [`Error`].

use crate::{
    compose::ComposeError, form::FormError, model::ModelError, path::PathError, store::StoreError,
};
use thiserror::Error as ThisError;

///
/// Error
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    ComposeError(#[from] ComposeError),

    #[error(transparent)]
    FormError(#[from] FormError),

    #[error(transparent)]
    ModelError(#[from] ModelError),

    #[error(transparent)]
    PathError(#[from] PathError),

    #[error(transparent)]
    StoreError(#[from] StoreError),
}

///
/// TESTS
///
