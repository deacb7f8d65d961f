//! Catalog values and write-path validation for skills, personnel, and
//! projects.
//!
//! Enumerated columns are stored as their display strings and guarded by
//! `CHECK` constraints; these helpers reject bad input before it reaches
//! the database so callers get a 400 instead of a constraint error.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Date, DbId};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Valid skill categories.
pub const VALID_SKILL_CATEGORIES: &[&str] = &[
    "Programming Language",
    "Framework",
    "Tool",
    "Soft Skill",
    "Database",
    "Cloud",
];

/// Valid personnel experience levels.
pub const VALID_EXPERIENCE_LEVELS: &[&str] = &["Junior", "Mid-Level", "Senior"];

pub const STATUS_PLANNING: &str = "Planning";
pub const STATUS_ACTIVE: &str = "Active";
pub const STATUS_COMPLETED: &str = "Completed";

/// Valid project statuses.
pub const VALID_PROJECT_STATUSES: &[&str] = &[STATUS_PLANNING, STATUS_ACTIVE, STATUS_COMPLETED];

/// Status applied to a new project when none is given.
pub const DEFAULT_PROJECT_STATUS: &str = STATUS_PLANNING;

/// Maximum length for entity names.
pub const MAX_NAME_LENGTH: usize = 255;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

fn validate_one_of(field: &str, value: &str, allowed: &[&str]) -> Result<(), String> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(format!(
            "Invalid {field} '{value}'. Must be one of: {}",
            allowed.join(", ")
        ))
    }
}

/// Validate that a skill category is in the catalog.
pub fn validate_skill_category(category: &str) -> Result<(), String> {
    validate_one_of("skill category", category, VALID_SKILL_CATEGORIES)
}

/// Validate that an experience level is in the catalog.
pub fn validate_experience_level(level: &str) -> Result<(), String> {
    validate_one_of("experience level", level, VALID_EXPERIENCE_LEVELS)
}

/// Validate that a project status is in the catalog.
pub fn validate_project_status(status: &str) -> Result<(), String> {
    validate_one_of("project status", status, VALID_PROJECT_STATUSES)
}

/// Validate a required, non-blank name of bounded length.
pub fn validate_name(field: &str, name: &str) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(format!("{field} is required"));
    }
    if trimmed.len() > MAX_NAME_LENGTH {
        return Err(format!(
            "{field} exceeds maximum length of {MAX_NAME_LENGTH}"
        ));
    }
    Ok(())
}

/// Validate the basic shape of an email address.
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Email is required".to_string());
    }
    if !EMAIL_RE.is_match(email) {
        return Err(format!("Invalid email format '{email}'"));
    }
    Ok(())
}

/// Validate that `end` does not precede `start` when both are set.
pub fn validate_date_range(start: Option<Date>, end: Option<Date>) -> Result<(), String> {
    match (start, end) {
        (Some(s), Some(e)) if e < s => Err(format!(
            "end_date ({e}) must not be before start_date ({s})"
        )),
        _ => Ok(()),
    }
}

/// Validate that a project lists each required skill at most once.
pub fn validate_unique_skill_ids(skill_ids: &[DbId]) -> Result<(), String> {
    let mut seen = HashSet::with_capacity(skill_ids.len());
    for id in skill_ids {
        if !seen.insert(*id) {
            return Err(format!("Skill {id} is listed more than once"));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
