//! Skill catalog entity model and DTOs.

use serde::{Deserialize, Serialize};
use skillmatch_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `skills` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Skill {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new skill.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSkill {
    pub name: String,
    pub category: String,
    pub description: Option<String>,
}

/// DTO for updating an existing skill. All fields are optional;
/// `"description": null` clears the description.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSkill {
    pub name: Option<String>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "super::present")]
    pub description: Option<Option<String>>,
}
