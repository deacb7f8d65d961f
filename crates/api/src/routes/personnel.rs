//! Route definitions for the `/personnel` resource, including skill
//! assignments under `/personnel/{id}/skills`.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::personnel;
use crate::state::AppState;

/// Routes mounted at `/personnel`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id
/// PUT    /{id}                      -> update
/// DELETE /{id}                      -> delete
///
/// POST   /{id}/skills               -> assign_skill
/// DELETE /{id}/skills/{skill_id}    -> remove_skill
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(personnel::list).post(personnel::create))
        .route(
            "/{id}",
            get(personnel::get_by_id)
                .put(personnel::update)
                .delete(personnel::delete),
        )
        .route("/{id}/skills", post(personnel::assign_skill))
        .route("/{id}/skills/{skill_id}", delete(personnel::remove_skill))
}
