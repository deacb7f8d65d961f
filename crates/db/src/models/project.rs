//! Project entity model, required skills, and DTOs.

use serde::{Deserialize, Serialize};
use skillmatch_core::roster::{ProjectSummary, RequiredSkill};
use skillmatch_core::types::{Date, DbId, Timestamp};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Project> for ProjectSummary {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            start_date: p.start_date,
            end_date: p.end_date,
            status: p.status,
            created_at: p.created_at,
        }
    }
}

/// A `project_required_skills` row joined with the skill's catalog name.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRequirementRow {
    pub project_id: DbId,
    pub skill_id: DbId,
    pub name: String,
    pub min_proficiency: String,
}

impl From<ProjectRequirementRow> for RequiredSkill {
    fn from(row: ProjectRequirementRow) -> Self {
        Self {
            skill_id: row.skill_id,
            name: row.name,
            min_proficiency: row.min_proficiency,
        }
    }
}

/// One requirement in a create / update payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RequiredSkillInput {
    pub skill_id: DbId,
    pub min_proficiency: String,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    /// Defaults to `Planning` if omitted.
    pub status: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<RequiredSkillInput>,
}

/// DTO for updating an existing project. All fields are optional.
///
/// `description`, `start_date` and `end_date` distinguish an absent key
/// (unchanged) from `null` (cleared).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::present")]
    pub start_date: Option<Option<Date>>,
    #[serde(default, deserialize_with = "super::present")]
    pub end_date: Option<Option<Date>>,
    pub status: Option<String>,
    /// If `Some`, replaces all requirements. If `None`, leaves them unchanged.
    pub required_skills: Option<Vec<RequiredSkillInput>>,
}
