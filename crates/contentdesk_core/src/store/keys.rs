//! Fixed keys of the persisted namespace.

pub const USERS: &str = "users";
pub const CLIENTS: &str = "clients";
pub const PROJECTS: &str = "projects";
pub const CONTENT: &str = "content";
pub const TASKS: &str = "tasks";
pub const CURRENT_USER: &str = "currentUser";
