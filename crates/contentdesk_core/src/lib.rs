//! Core domain logic for the ContentDesk agency portal.
//! This crate is the single source of truth for who may see and change what.

pub mod clock;
pub mod db;
pub mod logging;
pub mod model;
pub mod policy;
pub mod repo;
pub mod seed;
pub mod service;
pub mod session;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::client::{Client, ClientDraft};
pub use model::content::{Content, ContentDraft, ContentStatus};
pub use model::ids::{ForeignKey, RecordId};
pub use model::project::{Project, ProjectDraft, ProjectStatus};
pub use model::role::Role;
pub use model::task::{Task, TaskDraft, TaskPriority, TaskStatus};
pub use model::user::{User, UserDraft};
pub use model::validate::ValidationError;
pub use policy::{Actor, RecordPermissions, Section};
pub use repo::{EntityRepository, JsonListRepository, RepoError, RepoResult};
pub use seed::{seed_demo_data, SeedReport};
pub use service::client_service::ClientService;
pub use service::content_service::ContentService;
pub use service::dashboard::{DashboardService, DashboardSummary, LabeledCount};
pub use service::project_service::ProjectService;
pub use service::task_service::{TaskFilter, TaskService, TaskStats};
pub use service::user_service::UserService;
pub use service::{ServiceContext, ServiceError, ServiceResult};
pub use session::{SessionError, SessionStore};
pub use store::{KeyValueStore, MemoryStore, SqliteStore, StoreError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
