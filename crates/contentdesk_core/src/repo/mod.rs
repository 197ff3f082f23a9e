//! Entity repositories over the key/value namespace.
//!
//! # Responsibility
//! - Load and persist each entity list as one JSON array under its key.
//! - Translate storage failures into semantic errors (`NotFound`).
//!
//! # Invariants
//! - A missing or undecodable list reads as empty; it is never an error.
//! - Every write replaces the whole list (read-modify-write).

pub mod entity_repo;

pub use entity_repo::{EntityRepository, JsonListRepository, RepoError, RepoResult, StoredEntity};
