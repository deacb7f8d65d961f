//! Personnel-to-project matching engine.
//!
//! Pure functions over pre-loaded snapshots: resolve a project's
//! requirements, build each person's skill profile, score every person
//! against the requirements, and rank the results. Nothing here touches
//! storage; see [`crate::matching_service`] for the orchestration.

use serde::Serialize;

use crate::proficiency::level_of;
use crate::roster::{PersonnelSummary, PersonnelWithSkills, ProjectSummary, ProjectWithRequirements};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Derived types
// ---------------------------------------------------------------------------

/// A normalized project requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillRequirement {
    pub skill_id: DbId,
    pub name: String,
    pub min_proficiency: String,
    /// Scale ordinal of `min_proficiency` (0 when unrecognized).
    pub min_level: u8,
}

/// A normalized skill held by a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonSkill {
    pub skill_id: DbId,
    pub name: String,
    pub proficiency: String,
    pub level: u8,
}

/// Outcome of one requirement for a person who holds the skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedSkillEntry {
    pub skill_name: String,
    pub required_proficiency: String,
    pub actual_proficiency: String,
    pub meets_requirement: bool,
}

/// Match outcome for one person against one project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub person: PersonnelSummary,
    pub matched_skills: Vec<MatchedSkillEntry>,
    pub missing_skills: Vec<String>,
    pub match_percentage: u8,
    pub meets_all_requirements: bool,
}

/// A requirement as shown back to the caller, without ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequirementView {
    pub name: String,
    pub min_proficiency: String,
}

/// The project half of a matching response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectView {
    #[serde(flatten)]
    pub project: ProjectSummary,
    pub required_skills: Vec<RequirementView>,
}

/// Everything returned for one matching query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    pub project: ProjectView,
    pub matches: Vec<MatchResult>,
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Resolve a project's stored requirements, keeping stored order.
pub fn resolve_requirements(project: &ProjectWithRequirements) -> Vec<SkillRequirement> {
    project
        .required_skills
        .iter()
        .map(|rs| SkillRequirement {
            skill_id: rs.skill_id,
            name: rs.name.clone(),
            min_proficiency: rs.min_proficiency.clone(),
            min_level: level_of(&rs.min_proficiency),
        })
        .collect()
}

/// Build a person's skill profile, keeping stored order.
pub fn build_skill_profile(person: &PersonnelWithSkills) -> Vec<PersonSkill> {
    person
        .skills
        .iter()
        .map(|s| PersonSkill {
            skill_id: s.skill_id,
            name: s.name.clone(),
            proficiency: s.proficiency.clone(),
            level: level_of(&s.proficiency),
        })
        .collect()
}

/// Strip ids from a project's requirements for display.
pub fn project_view(project: ProjectWithRequirements) -> ProjectView {
    ProjectView {
        project: project.project,
        required_skills: project
            .required_skills
            .into_iter()
            .map(|rs| RequirementView {
                name: rs.name,
                min_proficiency: rs.min_proficiency,
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Percentage of `total` requirements that are `met`, rounded half up.
///
/// Returns 0 if `total` is 0.
pub fn compute_match_pct(total: usize, met: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let met = met.min(total);
    ((200 * met + total) / (2 * total)) as u8
}

/// Score one person against a requirement list.
///
/// Returns `None` when the person holds none of the required skills and
/// should be left out of the results. An empty requirement list always
/// yields a 0% result with nothing missing.
pub fn score_person(
    person: &PersonnelWithSkills,
    requirements: &[SkillRequirement],
) -> Option<MatchResult> {
    if requirements.is_empty() {
        return Some(MatchResult {
            person: person.person.clone(),
            matched_skills: Vec::new(),
            missing_skills: Vec::new(),
            match_percentage: 0,
            meets_all_requirements: false,
        });
    }

    let profile = build_skill_profile(person);
    let mut matched = Vec::new();
    let mut missing = Vec::new();
    let mut met = 0usize;

    for req in requirements {
        match profile.iter().find(|ps| ps.skill_id == req.skill_id) {
            Some(held) => {
                let meets = held.level >= req.min_level;
                if meets {
                    met += 1;
                } else {
                    missing.push(req.name.clone());
                }
                matched.push(MatchedSkillEntry {
                    skill_name: req.name.clone(),
                    required_proficiency: req.min_proficiency.clone(),
                    actual_proficiency: held.proficiency.clone(),
                    meets_requirement: meets,
                });
            }
            None => missing.push(req.name.clone()),
        }
    }

    if matched.is_empty() {
        return None;
    }

    let meets_all = missing.is_empty();
    Some(MatchResult {
        person: person.person.clone(),
        matched_skills: matched,
        missing_skills: missing,
        match_percentage: compute_match_pct(requirements.len(), met),
        meets_all_requirements: meets_all,
    })
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// Score every person and sort the included results by match percentage,
/// highest first. Ties keep the order in which personnel were supplied.
pub fn rank_personnel(
    requirements: &[SkillRequirement],
    personnel: &[PersonnelWithSkills],
) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = personnel
        .iter()
        .filter_map(|p| score_person(p, requirements))
        .collect();
    // `sort_by` is stable.
    results.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    results
}

/// Run the full matching pipeline for one project over a population.
pub fn build_match_report(
    project: ProjectWithRequirements,
    personnel: &[PersonnelWithSkills],
) -> MatchReport {
    let requirements = resolve_requirements(&project);
    let matches = rank_personnel(&requirements, personnel);
    MatchReport {
        project: project_view(project),
        matches,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
