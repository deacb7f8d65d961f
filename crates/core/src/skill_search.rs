//! Exact skill-set search: personnel holding every skill in a given set,
//! regardless of proficiency.

use std::collections::HashSet;

use crate::error::CoreError;
use crate::roster::PersonnelWithSkills;
use crate::types::DbId;

/// Parse a comma-separated list of skill ids (`"1,2,3"`).
///
/// Whitespace around items is ignored. Empty input, empty items, or
/// non-numeric items are rejected.
pub fn parse_skill_ids(raw: &str) -> Result<Vec<DbId>, CoreError> {
    if raw.trim().is_empty() {
        return Err(CoreError::Validation(
            "Skills parameter is required".to_string(),
        ));
    }
    raw.split(',')
        .map(|item| {
            let item = item.trim();
            item.parse::<DbId>().map_err(|_| {
                CoreError::Validation(format!("Invalid skill id '{item}' in skills parameter"))
            })
        })
        .collect()
}

/// Validate and de-duplicate a requested skill set, preserving first
/// occurrence order.
pub fn normalize_skill_ids(skill_ids: &[DbId]) -> Result<Vec<DbId>, CoreError> {
    if skill_ids.is_empty() {
        return Err(CoreError::Validation(
            "At least one skill id is required".to_string(),
        ));
    }
    let mut seen = HashSet::with_capacity(skill_ids.len());
    Ok(skill_ids
        .iter()
        .copied()
        .filter(|id| seen.insert(*id))
        .collect())
}

/// Whether `person` holds every skill in `skill_ids`.
pub fn covers_skill_set(person: &PersonnelWithSkills, skill_ids: &[DbId]) -> bool {
    let held: HashSet<DbId> = person.skills.iter().map(|s| s.skill_id).collect();
    skill_ids.iter().all(|id| held.contains(id))
}
