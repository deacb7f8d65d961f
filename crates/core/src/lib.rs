//! Domain core for the skills-to-project matching service.
//!
//! Holds the proficiency scale, catalog enums and validation, the pure
//! matching engine, and the storage-facing service operations. This crate
//! contains no database or HTTP code; storage is reached through the
//! [`matching_service::StaffingStore`] trait.

pub mod catalog;
pub mod error;
pub mod matching;
pub mod matching_service;
pub mod proficiency;
pub mod roster;
pub mod skill_search;
pub mod types;
