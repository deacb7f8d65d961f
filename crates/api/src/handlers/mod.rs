//! Request handlers.
//!
//! Entity submodules provide async handler functions (create, list,
//! get_by_id, update, delete) for a single entity type. Handlers validate
//! input with the catalog helpers in `skillmatch_core`, delegate to the
//! corresponding repository in `skillmatch_db`, and map errors via
//! [`AppError`](crate::error::AppError). The `matching` submodule drives the
//! matching engine.

pub mod matching;
pub mod personnel;
pub mod project;
pub mod skill;

use skillmatch_core::error::CoreError;

use crate::error::AppError;

/// Wrap a validator message as a 400 `VALIDATION_ERROR`.
pub(crate) fn invalid(msg: String) -> AppError {
    AppError::Core(CoreError::Validation(msg))
}
