//! Role-based visibility and permission filter.
//!
//! # Responsibility
//! - Decide, per content or task record, whether the acting user may see it,
//!   edit it, change its status, or delete it.
//! - Gate whole portal sections (clients, projects, settings) by role.
//!
//! # Invariants
//! - Every predicate is a pure, total function of `(actor, record)`.
//! - A missing actor (`None`) denies everything.
//! - Role behaviour comes from the `rules` table only; predicates never
//!   branch on `Role` directly.

pub mod content;
pub mod rules;
pub mod section;
pub mod task;

use crate::model::role::Role;
use crate::model::user::User;

pub use rules::{rules_for, RoleRules};
pub use section::Section;

/// The signed-in user as seen by the policy: a role and a display name.
///
/// Ownership fields on records (`author`, `assignedTo`) hold display names,
/// so ownership checks compare against `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub role: Role,
    pub name: String,
}

impl Actor {
    pub fn new(role: Role, name: impl Into<String>) -> Self {
        Self {
            role,
            name: name.into(),
        }
    }

    pub fn rules(&self) -> &'static RoleRules {
        rules_for(self.role)
    }
}

impl From<&User> for Actor {
    fn from(user: &User) -> Self {
        Self::new(user.role, user.name.clone())
    }
}

/// The four decisions the filter makes for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordPermissions {
    pub visible: bool,
    pub editable: bool,
    pub status_changeable: bool,
    pub deletable: bool,
}

impl RecordPermissions {
    pub const DENIED: RecordPermissions = RecordPermissions {
        visible: false,
        editable: false,
        status_changeable: false,
        deletable: false,
    };
}
