//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod personnel_repo;
pub mod project_repo;
pub mod skill_repo;

pub use personnel_repo::PersonnelRepo;
pub use project_repo::ProjectRepo;
pub use skill_repo::SkillRepo;
