//! Use-case services, one per portal section.
//!
//! # Responsibility
//! - Resolve the signed-in actor, apply the permission filter, and only then
//!   touch repositories.
//! - Stamp ids and dates on new and edited records.
//!
//! # Invariants
//! - Every mutating call checks its predicate or section gate first; a denied
//!   call leaves storage untouched.
//! - Without a session every gate fails closed.

mod context;
mod error;

pub mod client_service;
pub mod content_service;
pub mod dashboard;
pub mod project_service;
pub mod task_service;
pub mod user_service;

pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};

/// Display fallback for a project reference that resolves to nothing.
pub const UNKNOWN_PROJECT: &str = "Unknown Project";
/// Display fallback for a task whose project reference resolves to nothing.
pub const NO_PROJECT: &str = "No Project";
pub const UNKNOWN_CLIENT: &str = "Unknown Client";
