//! Snapshot records handed from the storage collaborator to the matching
//! engine.
//!
//! These are structured, read-only views of personnel and projects joined
//! with the skill catalog. Enumerated fields stay as their stored strings;
//! see [`crate::catalog`] and [`crate::proficiency`] for the valid values.

use serde::{Deserialize, Serialize};

use crate::types::{Date, DbId, Timestamp};

/// Personnel fields as exposed to callers (no skills).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonnelSummary {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: Option<String>,
    pub experience_level: String,
    pub created_at: Timestamp,
}

/// One skill a person holds, joined with its catalog name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeldSkill {
    pub skill_id: DbId,
    pub name: String,
    pub proficiency: String,
}

/// A person together with every skill they hold, in stored order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonnelWithSkills {
    #[serde(flatten)]
    pub person: PersonnelSummary,
    pub skills: Vec<HeldSkill>,
}

/// Project fields as exposed to callers (no requirements).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub status: String,
    pub created_at: Timestamp,
}

/// One stored requirement, joined with the skill's catalog name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredSkill {
    pub skill_id: DbId,
    pub name: String,
    pub min_proficiency: String,
}

/// A project together with its requirements, in stored order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectWithRequirements {
    #[serde(flatten)]
    pub project: ProjectSummary,
    pub required_skills: Vec<RequiredSkill>,
}
