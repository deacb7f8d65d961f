//! Repository for the `skills` table.

use skillmatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::skill::{CreateSkill, Skill, UpdateSkill};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, category, description, created_at, updated_at";

/// Provides CRUD operations for the skill catalog.
pub struct SkillRepo;

impl SkillRepo {
    /// Insert a new skill, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSkill) -> Result<Skill, sqlx::Error> {
        let query = format!(
            "INSERT INTO skills (name, category, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a skill by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills WHERE id = $1");
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all skills ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills ORDER BY name, id");
        sqlx::query_as::<_, Skill>(&query).fetch_all(pool).await
    }

    /// Update a skill. Only non-`None` fields in `input` are applied;
    /// `description: Some(None)` clears the description.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSkill,
    ) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!(
            "UPDATE skills SET
                name = COALESCE($2, name),
                category = COALESCE($3, category),
                description = CASE WHEN $4 THEN $5 ELSE description END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.description.is_some())
            .bind(input.description.as_ref().and_then(|d| d.as_deref()))
            .fetch_optional(pool)
            .await
    }

    /// Delete a skill by ID. Assignments and requirements referencing it
    /// are removed by cascade. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
