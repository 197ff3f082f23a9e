//! Portal domain records.
//!
//! # Responsibility
//! - Define the five flat record shapes persisted under fixed keys.
//! - Keep on-disk JSON field names compatible with existing stores.
//!
//! # Invariants
//! - Records carry no referential integrity; `ForeignKey` fields may dangle.
//! - Ids are creation timestamps in epoch milliseconds.

pub mod client;
pub mod content;
pub mod ids;
pub mod project;
pub mod role;
pub mod task;
pub mod user;
pub mod validate;
