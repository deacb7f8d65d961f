//! Handlers for the `/skills` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use skillmatch_core::catalog::{validate_name, validate_skill_category};
use skillmatch_core::error::CoreError;
use skillmatch_core::types::DbId;
use skillmatch_db::models::skill::{CreateSkill, Skill, UpdateSkill};
use skillmatch_db::repositories::SkillRepo;

use super::invalid;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/skills
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSkill>,
) -> AppResult<(StatusCode, Json<Skill>)> {
    validate_name("Skill name", &input.name).map_err(invalid)?;
    validate_skill_category(&input.category).map_err(invalid)?;

    let skill = SkillRepo::create(&state.pool, &input).await?;
    tracing::info!(skill_id = skill.id, name = %skill.name, "Skill created");
    Ok((StatusCode::CREATED, Json(skill)))
}

/// GET /api/v1/skills
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Skill>>> {
    let skills = SkillRepo::list(&state.pool).await?;
    Ok(Json(skills))
}

/// GET /api/v1/skills/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Skill>> {
    let skill = SkillRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Skill", id }))?;
    Ok(Json(skill))
}

/// PUT /api/v1/skills/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSkill>,
) -> AppResult<Json<Skill>> {
    if let Some(ref name) = input.name {
        validate_name("Skill name", name).map_err(invalid)?;
    }
    if let Some(ref category) = input.category {
        validate_skill_category(category).map_err(invalid)?;
    }

    let skill = SkillRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Skill", id }))?;
    Ok(Json(skill))
}

/// DELETE /api/v1/skills/{id}
///
/// Removes the skill from every person and project that referenced it.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if SkillRepo::delete(&state.pool, id).await? {
        tracing::info!(skill_id = id, "Skill deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Skill", id }))
    }
}
