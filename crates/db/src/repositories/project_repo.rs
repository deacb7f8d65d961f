//! Repository for the `projects` and `project_required_skills` tables.

use std::collections::HashMap;

use skillmatch_core::roster::{ProjectWithRequirements, RequiredSkill};
use skillmatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{
    CreateProject, Project, ProjectRequirementRow, RequiredSkillInput, UpdateProject,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, description, start_date, end_date, status, created_at, updated_at";

/// Column list for `project_required_skills` joined with `skills`.
const REQUIREMENT_COLUMNS: &str = "prs.project_id, prs.skill_id, s.name, prs.min_proficiency";

/// Provides CRUD operations for projects and their required skills.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project and its requirements in one transaction.
    ///
    /// If `status` is `None` in the input, defaults to `Planning`.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO projects (name, description, start_date, end_date, status)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'Planning'))
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&insert_query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.status)
            .fetch_one(&mut *tx)
            .await?;

        Self::insert_requirements(&mut tx, project.id, &input.required_skills).await?;

        tx.commit().await?;
        Ok(project)
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied;
    /// `Some(None)` clears `description`, `start_date` or `end_date`.
    ///
    /// If `required_skills` is `Some`, the requirement set is replaced in the
    /// same transaction, so readers see either the old set or the new one.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let update_query = format!(
            "UPDATE projects SET
                name = COALESCE($2, name),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                start_date = CASE WHEN $5 THEN $6 ELSE start_date END,
                end_date = CASE WHEN $7 THEN $8 ELSE end_date END,
                status = COALESCE($9, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&update_query)
            .bind(id)
            .bind(&input.name)
            .bind(input.description.is_some())
            .bind(input.description.as_ref().and_then(|d| d.as_deref()))
            .bind(input.start_date.is_some())
            .bind(input.start_date.flatten())
            .bind(input.end_date.is_some())
            .bind(input.end_date.flatten())
            .bind(&input.status)
            .fetch_optional(&mut *tx)
            .await?;

        if let Some(ref project) = project {
            if let Some(ref required_skills) = input.required_skills {
                sqlx::query("DELETE FROM project_required_skills WHERE project_id = $1")
                    .bind(project.id)
                    .execute(&mut *tx)
                    .await?;
                Self::insert_requirements(&mut tx, project.id, required_skills).await?;
            }
        }

        tx.commit().await?;
        Ok(project)
    }

    /// Delete a project and, by cascade, its requirements.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Requirements
    // -----------------------------------------------------------------------

    /// Requirement rows for a set of projects, in stored order per project.
    pub async fn requirements_for_many(
        pool: &PgPool,
        project_ids: &[DbId],
    ) -> Result<Vec<ProjectRequirementRow>, sqlx::Error> {
        let query = format!(
            "SELECT {REQUIREMENT_COLUMNS} \
             FROM project_required_skills prs \
             JOIN skills s ON s.id = prs.skill_id \
             WHERE prs.project_id = ANY($1) \
             ORDER BY prs.project_id, prs.id"
        );
        sqlx::query_as::<_, ProjectRequirementRow>(&query)
            .bind(project_ids)
            .fetch_all(pool)
            .await
    }

    /// Find a project by ID, enriched with its requirements.
    pub async fn find_with_requirements(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectWithRequirements>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(project) => {
                let mut enriched = Self::attach_requirements(pool, vec![project]).await?;
                Ok(enriched.pop())
            }
            None => Ok(None),
        }
    }

    /// List all projects with their requirements, most recently created first.
    pub async fn list_with_requirements(
        pool: &PgPool,
    ) -> Result<Vec<ProjectWithRequirements>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC, id DESC");
        let projects = sqlx::query_as::<_, Project>(&query)
            .fetch_all(pool)
            .await?;
        Self::attach_requirements(pool, projects).await
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Insert requirement rows in list order within an existing transaction.
    async fn insert_requirements(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        project_id: DbId,
        required_skills: &[RequiredSkillInput],
    ) -> Result<(), sqlx::Error> {
        for req in required_skills {
            sqlx::query(
                "INSERT INTO project_required_skills (project_id, skill_id, min_proficiency) \
                 VALUES ($1, $2, $3)",
            )
            .bind(project_id)
            .bind(req.skill_id)
            .bind(&req.min_proficiency)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }

    /// Load requirements for `projects` in one query and pair them up,
    /// keeping the order of `projects`.
    async fn attach_requirements(
        pool: &PgPool,
        projects: Vec<Project>,
    ) -> Result<Vec<ProjectWithRequirements>, sqlx::Error> {
        if projects.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<DbId> = projects.iter().map(|p| p.id).collect();
        let mut by_project: HashMap<DbId, Vec<RequiredSkill>> = HashMap::new();
        for row in Self::requirements_for_many(pool, &ids).await? {
            by_project
                .entry(row.project_id)
                .or_default()
                .push(row.into());
        }

        Ok(projects
            .into_iter()
            .map(|project| {
                let required_skills = by_project.remove(&project.id).unwrap_or_default();
                ProjectWithRequirements {
                    project: project.into(),
                    required_skills,
                }
            })
            .collect())
    }
}
