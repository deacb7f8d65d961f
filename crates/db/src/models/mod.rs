//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Nullable columns in update DTOs are `Option<Option<T>>`: an absent key
//! leaves the column alone, an explicit `null` clears it.

pub mod personnel;
pub mod project;
pub mod skill;

use serde::{Deserialize, Deserializer};

/// Deserialize a present key (including `null`) as `Some(..)`.
///
/// Pair with `#[serde(default)]` so a missing key becomes `None`.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
