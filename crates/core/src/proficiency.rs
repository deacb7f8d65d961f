//! Proficiency scale used to compare a person's skill level against a
//! project's minimum requirement.
//!
//! Levels are stored as their display names (`"Beginner"`, ...). The write
//! path validates names strictly via [`Proficiency::from_str_value`]; the
//! scoring path uses [`level_of`], which never fails.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const PROFICIENCY_BEGINNER: &str = "Beginner";
pub const PROFICIENCY_INTERMEDIATE: &str = "Intermediate";
pub const PROFICIENCY_ADVANCED: &str = "Advanced";
pub const PROFICIENCY_EXPERT: &str = "Expert";

/// All valid proficiency names, lowest first.
pub const VALID_PROFICIENCIES: &[&str] = &[
    PROFICIENCY_BEGINNER,
    PROFICIENCY_INTERMEDIATE,
    PROFICIENCY_ADVANCED,
    PROFICIENCY_EXPERT,
];

/// Ordinal assigned to a name that is not on the scale. Lower than any
/// real level, so an unrecognized value never satisfies a requirement.
pub const UNKNOWN_LEVEL: u8 = 0;

// ---------------------------------------------------------------------------
// Enum
// ---------------------------------------------------------------------------

/// A named step on the proficiency scale. Variant order is scale order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Proficiency {
    /// Parse a stored proficiency name.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            PROFICIENCY_BEGINNER => Ok(Self::Beginner),
            PROFICIENCY_INTERMEDIATE => Ok(Self::Intermediate),
            PROFICIENCY_ADVANCED => Ok(Self::Advanced),
            PROFICIENCY_EXPERT => Ok(Self::Expert),
            _ => Err(format!(
                "Invalid proficiency '{s}'. Must be one of: {}",
                VALID_PROFICIENCIES.join(", ")
            )),
        }
    }

    /// The stored name of this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => PROFICIENCY_BEGINNER,
            Self::Intermediate => PROFICIENCY_INTERMEDIATE,
            Self::Advanced => PROFICIENCY_ADVANCED,
            Self::Expert => PROFICIENCY_EXPERT,
        }
    }

    /// Ordinal on the scale, 1 (Beginner) through 4 (Expert).
    pub fn level(&self) -> u8 {
        match self {
            Self::Beginner => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
            Self::Expert => 4,
        }
    }
}

/// Map a proficiency name to its ordinal.
///
/// Unrecognized names yield [`UNKNOWN_LEVEL`] and emit a warning instead of
/// failing, so one malformed row cannot abort a whole matching request.
pub fn level_of(name: &str) -> u8 {
    match Proficiency::from_str_value(name) {
        Ok(p) => p.level(),
        Err(_) => {
            tracing::warn!(proficiency = %name, "Unknown proficiency, treating as level 0");
            UNKNOWN_LEVEL
        }
    }
}

/// Validate that a proficiency name is on the scale.
pub fn validate_proficiency(name: &str) -> Result<(), String> {
    Proficiency::from_str_value(name).map(|_| ())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
