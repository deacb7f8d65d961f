//! Repository for the `personnel` and `personnel_skills` tables.

use std::collections::HashMap;

use skillmatch_core::roster::{HeldSkill, PersonnelWithSkills};
use skillmatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::personnel::{CreatePersonnel, Personnel, PersonnelSkillRow, UpdatePersonnel};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, role, experience_level, created_at, updated_at";

/// Column list for `personnel_skills` joined with `skills`.
const SKILL_COLUMNS: &str = "ps.personnel_id, ps.skill_id, s.name, ps.proficiency";

/// Provides CRUD operations for personnel and their skill assignments.
pub struct PersonnelRepo;

impl PersonnelRepo {
    /// Insert a new person, returning the created row.
    ///
    /// If `experience_level` is `None` in the input, defaults to `Junior`.
    pub async fn create(pool: &PgPool, input: &CreatePersonnel) -> Result<Personnel, sqlx::Error> {
        let query = format!(
            "INSERT INTO personnel (name, email, role, experience_level)
             VALUES ($1, $2, $3, COALESCE($4, 'Junior'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Personnel>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.role)
            .bind(&input.experience_level)
            .fetch_one(pool)
            .await
    }

    /// Find a person by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Personnel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM personnel WHERE id = $1");
        sqlx::query_as::<_, Personnel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a person. Only non-`None` fields in `input` are applied;
    /// `role: Some(None)` clears the role.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePersonnel,
    ) -> Result<Option<Personnel>, sqlx::Error> {
        let query = format!(
            "UPDATE personnel SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                role = CASE WHEN $4 THEN $5 ELSE role END,
                experience_level = COALESCE($6, experience_level)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Personnel>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.role.is_some())
            .bind(input.role.as_ref().and_then(|r| r.as_deref()))
            .bind(&input.experience_level)
            .fetch_optional(pool)
            .await
    }

    /// Delete a person and, by cascade, their skill assignments.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM personnel WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Skill assignments
    // -----------------------------------------------------------------------

    /// Assign a skill to a person.
    ///
    /// Assigning a skill the person already holds violates
    /// `uq_personnel_skills`; an unknown person or skill violates a
    /// foreign key. Both surface as `sqlx::Error::Database`.
    pub async fn assign_skill(
        pool: &PgPool,
        personnel_id: DbId,
        skill_id: DbId,
        proficiency: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO personnel_skills (personnel_id, skill_id, proficiency) \
             VALUES ($1, $2, $3)",
        )
        .bind(personnel_id)
        .bind(skill_id)
        .bind(proficiency)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Remove a skill from a person. Returns `true` if an assignment was removed.
    pub async fn remove_skill(
        pool: &PgPool,
        personnel_id: DbId,
        skill_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM personnel_skills WHERE personnel_id = $1 AND skill_id = $2",
        )
        .bind(personnel_id)
        .bind(skill_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Skill rows for a set of people, in assignment order per person.
    pub async fn skills_for_many(
        pool: &PgPool,
        personnel_ids: &[DbId],
    ) -> Result<Vec<PersonnelSkillRow>, sqlx::Error> {
        let query = format!(
            "SELECT {SKILL_COLUMNS} \
             FROM personnel_skills ps \
             JOIN skills s ON s.id = ps.skill_id \
             WHERE ps.personnel_id = ANY($1) \
             ORDER BY ps.personnel_id, ps.id"
        );
        sqlx::query_as::<_, PersonnelSkillRow>(&query)
            .bind(personnel_ids)
            .fetch_all(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Enriched reads
    // -----------------------------------------------------------------------

    /// Find a person by ID, enriched with their skills.
    pub async fn find_with_skills(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PersonnelWithSkills>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(person) => {
                let mut enriched = Self::attach_skills(pool, vec![person]).await?;
                Ok(enriched.pop())
            }
            None => Ok(None),
        }
    }

    /// List everyone with their skills, most recently created first.
    pub async fn list_with_skills(pool: &PgPool) -> Result<Vec<PersonnelWithSkills>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM personnel ORDER BY created_at DESC, id DESC");
        let people = sqlx::query_as::<_, Personnel>(&query)
            .fetch_all(pool)
            .await?;
        Self::attach_skills(pool, people).await
    }

    /// List everyone with their skills, ordered by name then ID.
    ///
    /// This is the population order fed to the matching engine.
    pub async fn list_with_skills_by_name(
        pool: &PgPool,
    ) -> Result<Vec<PersonnelWithSkills>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM personnel ORDER BY name, id");
        let people = sqlx::query_as::<_, Personnel>(&query)
            .fetch_all(pool)
            .await?;
        Self::attach_skills(pool, people).await
    }

    /// List the people holding every skill in `skill_ids` (any proficiency),
    /// with their full skill lists, ordered by name then ID.
    ///
    /// `skill_ids` must already be de-duplicated.
    pub async fn find_by_skill_set(
        pool: &PgPool,
        skill_ids: &[DbId],
    ) -> Result<Vec<PersonnelWithSkills>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM personnel \
             WHERE id IN ( \
                 SELECT personnel_id FROM personnel_skills \
                 WHERE skill_id = ANY($1) \
                 GROUP BY personnel_id \
                 HAVING COUNT(DISTINCT skill_id) = $2 \
             ) \
             ORDER BY name, id"
        );
        let people = sqlx::query_as::<_, Personnel>(&query)
            .bind(skill_ids)
            .bind(skill_ids.len() as i64)
            .fetch_all(pool)
            .await?;
        Self::attach_skills(pool, people).await
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Load skills for `people` in one query and pair them up, keeping the
    /// order of `people`.
    async fn attach_skills(
        pool: &PgPool,
        people: Vec<Personnel>,
    ) -> Result<Vec<PersonnelWithSkills>, sqlx::Error> {
        if people.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<DbId> = people.iter().map(|p| p.id).collect();
        let mut by_person: HashMap<DbId, Vec<HeldSkill>> = HashMap::new();
        for row in Self::skills_for_many(pool, &ids).await? {
            by_person
                .entry(row.personnel_id)
                .or_default()
                .push(row.into());
        }

        Ok(people
            .into_iter()
            .map(|person| {
                let skills = by_person.remove(&person.id).unwrap_or_default();
                PersonnelWithSkills {
                    person: person.into(),
                    skills,
                }
            })
            .collect())
    }
}
