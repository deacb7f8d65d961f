//! Route definitions for the `/matching` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::matching;
use crate::state::AppState;

/// Routes mounted at `/matching`.
///
/// ```text
/// GET    /project/{project_id}     -> match_project
/// GET    /search?skills=1,2,3      -> search_by_skills
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/project/{project_id}", get(matching::match_project))
        .route("/search", get(matching::search_by_skills))
}
