//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use skillmatch_core::catalog::{
    validate_date_range, validate_name, validate_project_status, validate_unique_skill_ids,
};
use skillmatch_core::error::CoreError;
use skillmatch_core::proficiency::validate_proficiency;
use skillmatch_core::roster::ProjectWithRequirements;
use skillmatch_core::types::DbId;
use skillmatch_db::models::project::{CreateProject, RequiredSkillInput, UpdateProject};
use skillmatch_db::repositories::ProjectRepo;

use super::invalid;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

/// Reject invalid proficiencies and repeated skills in a requirement list.
fn validate_requirements(required_skills: &[RequiredSkillInput]) -> AppResult<()> {
    for req in required_skills {
        validate_proficiency(&req.min_proficiency).map_err(invalid)?;
    }
    let ids: Vec<DbId> = required_skills.iter().map(|r| r.skill_id).collect();
    validate_unique_skill_ids(&ids).map_err(invalid)
}

/// Load a project with requirements or fail with 404.
async fn load(state: &AppState, id: DbId) -> AppResult<ProjectWithRequirements> {
    ProjectRepo::find_with_requirements(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// POST /api/v1/projects
///
/// The project and its requirements are written in one transaction.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<ProjectWithRequirements>)> {
    validate_name("Project name", &input.name).map_err(invalid)?;
    if let Some(ref status) = input.status {
        validate_project_status(status).map_err(invalid)?;
    }
    validate_date_range(input.start_date, input.end_date).map_err(invalid)?;
    validate_requirements(&input.required_skills)?;

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(
        project_id = project.id,
        requirement_count = input.required_skills.len(),
        "Project created"
    );
    Ok((StatusCode::CREATED, Json(load(&state, project.id).await?)))
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProjectWithRequirements>>> {
    let projects = ProjectRepo::list_with_requirements(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectWithRequirements>> {
    Ok(Json(load(&state, id).await?))
}

/// PUT /api/v1/projects/{id}
///
/// A `required_skills` list, when present, replaces the existing set
/// atomically. `null` clears `description`, `start_date` or `end_date`.
/// The date range is checked against the stored dates for whichever bound
/// the payload omits; a concurrent write that still breaks the range is
/// rejected by `ck_projects_date_range` and surfaces as a 400.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<ProjectWithRequirements>> {
    if let Some(ref name) = input.name {
        validate_name("Project name", name).map_err(invalid)?;
    }
    if let Some(ref status) = input.status {
        validate_project_status(status).map_err(invalid)?;
    }
    if let Some(ref required_skills) = input.required_skills {
        validate_requirements(required_skills)?;
    }

    let existing = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    validate_date_range(
        input.start_date.unwrap_or(existing.start_date),
        input.end_date.unwrap_or(existing.end_date),
    )
    .map_err(invalid)?;

    ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(
        project_id = id,
        requirements_replaced = input.required_skills.is_some(),
        "Project updated"
    );
    Ok(Json(load(&state, id).await?))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ProjectRepo::delete(&state.pool, id).await? {
        tracing::info!(project_id = id, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
