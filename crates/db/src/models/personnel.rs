//! Personnel entity model, skill assignments, and DTOs.

use serde::{Deserialize, Serialize};
use skillmatch_core::roster::{HeldSkill, PersonnelSummary};
use skillmatch_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `personnel` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Personnel {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: Option<String>,
    pub experience_level: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Personnel> for PersonnelSummary {
    fn from(p: Personnel) -> Self {
        Self {
            id: p.id,
            name: p.name,
            email: p.email,
            role: p.role,
            experience_level: p.experience_level,
            created_at: p.created_at,
        }
    }
}

/// A `personnel_skills` row joined with the skill's catalog name.
#[derive(Debug, Clone, FromRow)]
pub struct PersonnelSkillRow {
    pub personnel_id: DbId,
    pub skill_id: DbId,
    pub name: String,
    pub proficiency: String,
}

impl From<PersonnelSkillRow> for HeldSkill {
    fn from(row: PersonnelSkillRow) -> Self {
        Self {
            skill_id: row.skill_id,
            name: row.name,
            proficiency: row.proficiency,
        }
    }
}

/// DTO for creating a new person.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePersonnel {
    pub name: String,
    pub email: String,
    pub role: Option<String>,
    /// Defaults to `Junior` if omitted.
    pub experience_level: Option<String>,
}

/// DTO for updating an existing person. All fields are optional;
/// `"role": null` clears the role.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePersonnel {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "super::present")]
    pub role: Option<Option<String>>,
    pub experience_level: Option<String>,
}

/// DTO for assigning a skill to a person.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignSkill {
    pub skill_id: DbId,
    pub proficiency: String,
}
