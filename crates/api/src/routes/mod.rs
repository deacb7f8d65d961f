pub mod health;
pub mod matching;
pub mod personnel;
pub mod project;
pub mod skill;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /matching/project/{project_id}                   ranked matches for a project
/// /matching/search?skills=1,2,3                    personnel holding every skill
///
/// /skills                                          list, create
/// /skills/{id}                                     get, update, delete
///
/// /personnel                                       list, create
/// /personnel/{id}                                  get, update, delete
/// /personnel/{id}/skills                           assign skill (POST)
/// /personnel/{id}/skills/{skill_id}                remove skill (DELETE)
///
/// /projects                                        list, create
/// /projects/{id}                                   get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/matching", matching::router())
        .nest("/skills", skill::router())
        .nest("/personnel", personnel::router())
        .nest("/projects", project::router())
}
