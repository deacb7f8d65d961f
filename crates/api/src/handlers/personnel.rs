//! Handlers for the `/personnel` resource and skill assignments.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use skillmatch_core::catalog::{validate_email, validate_experience_level, validate_name};
use skillmatch_core::error::CoreError;
use skillmatch_core::proficiency::validate_proficiency;
use skillmatch_core::roster::PersonnelWithSkills;
use skillmatch_core::types::DbId;
use skillmatch_db::models::personnel::{AssignSkill, CreatePersonnel, UpdatePersonnel};
use skillmatch_db::repositories::{PersonnelRepo, SkillRepo};

use super::invalid;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Personnel",
        id,
    })
}

/// Load a person with skills or fail with 404.
async fn load(state: &AppState, id: DbId) -> AppResult<PersonnelWithSkills> {
    PersonnelRepo::find_with_skills(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// POST /api/v1/personnel
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePersonnel>,
) -> AppResult<(StatusCode, Json<PersonnelWithSkills>)> {
    validate_name("Name", &input.name).map_err(invalid)?;
    validate_email(&input.email).map_err(invalid)?;
    if let Some(ref level) = input.experience_level {
        validate_experience_level(level).map_err(invalid)?;
    }

    let person = PersonnelRepo::create(&state.pool, &input).await?;
    tracing::info!(personnel_id = person.id, "Personnel created");
    Ok((
        StatusCode::CREATED,
        Json(PersonnelWithSkills {
            person: person.into(),
            skills: Vec::new(),
        }),
    ))
}

/// GET /api/v1/personnel
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<PersonnelWithSkills>>> {
    let people = PersonnelRepo::list_with_skills(&state.pool).await?;
    Ok(Json(people))
}

/// GET /api/v1/personnel/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PersonnelWithSkills>> {
    Ok(Json(load(&state, id).await?))
}

/// PUT /api/v1/personnel/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePersonnel>,
) -> AppResult<Json<PersonnelWithSkills>> {
    if let Some(ref name) = input.name {
        validate_name("Name", name).map_err(invalid)?;
    }
    if let Some(ref email) = input.email {
        validate_email(email).map_err(invalid)?;
    }
    if let Some(ref level) = input.experience_level {
        validate_experience_level(level).map_err(invalid)?;
    }

    PersonnelRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(load(&state, id).await?))
}

/// DELETE /api/v1/personnel/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if PersonnelRepo::delete(&state.pool, id).await? {
        tracing::info!(personnel_id = id, "Personnel deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// POST /api/v1/personnel/{id}/skills
///
/// Assigning a skill the person already holds is a 409.
pub async fn assign_skill(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AssignSkill>,
) -> AppResult<(StatusCode, Json<PersonnelWithSkills>)> {
    validate_proficiency(&input.proficiency).map_err(invalid)?;

    PersonnelRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    SkillRepo::find_by_id(&state.pool, input.skill_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Skill",
            id: input.skill_id,
        }))?;

    PersonnelRepo::assign_skill(&state.pool, id, input.skill_id, &input.proficiency).await?;
    tracing::info!(
        personnel_id = id,
        skill_id = input.skill_id,
        proficiency = %input.proficiency,
        "Skill assigned"
    );
    Ok((StatusCode::CREATED, Json(load(&state, id).await?)))
}

/// DELETE /api/v1/personnel/{id}/skills/{skill_id}
pub async fn remove_skill(
    State(state): State<AppState>,
    Path((id, skill_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if PersonnelRepo::remove_skill(&state.pool, id, skill_id).await? {
        tracing::info!(personnel_id = id, skill_id, "Skill removed");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Skill assignment",
            id: skill_id,
        }))
    }
}
