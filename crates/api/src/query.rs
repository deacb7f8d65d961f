//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /matching/search` (`?skills=1,2,3`).
///
/// Kept as a raw string so a missing or malformed list produces a
/// validation error rather than a generic extractor rejection.
#[derive(Debug, Deserialize)]
pub struct SkillSetParams {
    pub skills: Option<String>,
}
