//! Handlers for the `/matching` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use skillmatch_core::matching::MatchReport;
use skillmatch_core::matching_service::{compute_matches, search_by_skill_set};
use skillmatch_core::roster::PersonnelWithSkills;
use skillmatch_core::skill_search::parse_skill_ids;
use skillmatch_core::types::DbId;

use crate::error::AppResult;
use crate::query::SkillSetParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/matching/project/{project_id}
///
/// Rank every person against the project's required skills.
pub async fn match_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<MatchReport>>> {
    let report = compute_matches(&state.staffing_store(), project_id).await?;
    tracing::info!(
        project_id,
        match_count = report.matches.len(),
        "Computed project matches"
    );
    Ok(Json(DataResponse { data: report }))
}

/// GET /api/v1/matching/search?skills=1,2,3
///
/// List personnel holding every listed skill, at any proficiency.
pub async fn search_by_skills(
    State(state): State<AppState>,
    Query(params): Query<SkillSetParams>,
) -> AppResult<Json<DataResponse<Vec<PersonnelWithSkills>>>> {
    let skill_ids = parse_skill_ids(params.skills.as_deref().unwrap_or_default())?;
    let personnel = search_by_skill_set(&state.staffing_store(), &skill_ids).await?;
    tracing::info!(
        skill_count = skill_ids.len(),
        result_count = personnel.len(),
        "Searched personnel by skill set"
    );
    Ok(Json(DataResponse { data: personnel }))
}
