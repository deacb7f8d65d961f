//! PostgreSQL implementation of the matching engine's storage contract.

use skillmatch_core::error::CoreError;
use skillmatch_core::matching_service::StaffingStore;
use skillmatch_core::roster::{PersonnelWithSkills, ProjectWithRequirements};
use skillmatch_core::types::DbId;

use crate::repositories::{PersonnelRepo, ProjectRepo};
use crate::DbPool;

/// [`StaffingStore`] backed by the repository layer.
///
/// Cheap to construct per request; it only holds a pool handle.
#[derive(Clone)]
pub struct PgStaffingStore {
    pool: DbPool,
}

impl PgStaffingStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Convert a sqlx failure into the core's storage error, logging the cause.
fn storage_error(op: &'static str, err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, op, "Staffing store read failed");
    CoreError::StorageUnavailable(format!("{op}: {err}"))
}

impl StaffingStore for PgStaffingStore {
    async fn project_with_requirements(
        &self,
        project_id: DbId,
    ) -> Result<Option<ProjectWithRequirements>, CoreError> {
        ProjectRepo::find_with_requirements(&self.pool, project_id)
            .await
            .map_err(|e| storage_error("project_with_requirements", e))
    }

    async fn all_personnel_with_skills(&self) -> Result<Vec<PersonnelWithSkills>, CoreError> {
        PersonnelRepo::list_with_skills_by_name(&self.pool)
            .await
            .map_err(|e| storage_error("all_personnel_with_skills", e))
    }

    async fn personnel_by_skill_set(
        &self,
        skill_ids: &[DbId],
    ) -> Result<Vec<PersonnelWithSkills>, CoreError> {
        PersonnelRepo::find_by_skill_set(&self.pool, skill_ids)
            .await
            .map_err(|e| storage_error("personnel_by_skill_set", e))
    }
}
