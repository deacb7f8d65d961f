//! Storage-facing matching operations.
//!
//! Defines [`StaffingStore`], the read contract the storage layer must
//! satisfy, and the two operations exposed to callers:
//! [`compute_matches`] and [`search_by_skill_set`]. Storage errors are
//! surfaced unchanged; nothing here retries.

use std::future::Future;

use crate::error::CoreError;
use crate::matching::{build_match_report, MatchReport};
use crate::roster::{PersonnelWithSkills, ProjectWithRequirements};
use crate::skill_search::{covers_skill_set, normalize_skill_ids};
use crate::types::DbId;

/// Read access to personnel, projects, and their skills.
///
/// Implementations return structured snapshots. Requirement and skill lists
/// must come back in stored order, and a project's requirements must never
/// be observed mid-update.
pub trait StaffingStore: Send + Sync {
    /// Load a project and its requirements, or `None` if it does not exist.
    fn project_with_requirements(
        &self,
        project_id: DbId,
    ) -> impl Future<Output = Result<Option<ProjectWithRequirements>, CoreError>> + Send;

    /// Load every person with their full skill list.
    fn all_personnel_with_skills(
        &self,
    ) -> impl Future<Output = Result<Vec<PersonnelWithSkills>, CoreError>> + Send;

    /// Load the personnel whose skills are a superset of `skill_ids`.
    fn personnel_by_skill_set(
        &self,
        skill_ids: &[DbId],
    ) -> impl Future<Output = Result<Vec<PersonnelWithSkills>, CoreError>> + Send;
}

/// Rank all personnel against a project's requirements.
///
/// The project and personnel reads are issued concurrently. Fails with
/// [`CoreError::NotFound`] if the project does not exist.
pub async fn compute_matches<S: StaffingStore>(
    store: &S,
    project_id: DbId,
) -> Result<MatchReport, CoreError> {
    let (project, personnel) = tokio::try_join!(
        store.project_with_requirements(project_id),
        store.all_personnel_with_skills(),
    )?;

    let project = project.ok_or(CoreError::NotFound {
        entity: "Project",
        id: project_id,
    })?;

    Ok(build_match_report(project, &personnel))
}

/// Find personnel who hold every skill in `skill_ids`.
///
/// Fails with [`CoreError::Validation`] if `skill_ids` is empty.
pub async fn search_by_skill_set<S: StaffingStore>(
    store: &S,
    skill_ids: &[DbId],
) -> Result<Vec<PersonnelWithSkills>, CoreError> {
    let skill_ids = normalize_skill_ids(skill_ids)?;
    let mut personnel = store.personnel_by_skill_set(&skill_ids).await?;
    personnel.retain(|p| covers_skill_set(p, &skill_ids));
    Ok(personnel)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
