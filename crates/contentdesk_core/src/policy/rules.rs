//! Per-role rule table.

use super::section::Section;
use crate::model::role::Role;

/// Which content records a role sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentScope {
    All,
    /// Only records whose `author` is the actor.
    Authored,
}

/// When a role may edit a content record's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEdit {
    Always,
    UnlessPublished,
    /// Only the actor's own records while still in draft.
    OwnDraft,
    Never,
}

/// Which tasks a role sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskScope {
    All,
    /// Review-type tasks plus tasks assigned to the actor.
    ReviewOrAssigned,
    Assigned,
}

/// Everything the policy needs to know about one role.
#[derive(Debug, PartialEq, Eq)]
pub struct RoleRules {
    pub content_scope: ContentScope,
    pub content_edit: ContentEdit,
    pub content_status: bool,
    /// May delete any content, not only the actor's own.
    pub content_delete_any: bool,
    pub content_create: bool,
    pub task_scope: TaskScope,
    /// May edit or move any task, not only tasks assigned to the actor.
    pub task_manage_any: bool,
    pub task_delete: bool,
    pub sections: &'static [Section],
}

static ADMIN: RoleRules = RoleRules {
    content_scope: ContentScope::All,
    content_edit: ContentEdit::Always,
    content_status: true,
    content_delete_any: true,
    content_create: true,
    task_scope: TaskScope::All,
    task_manage_any: true,
    task_delete: true,
    sections: &[
        Section::Dashboard,
        Section::Clients,
        Section::Projects,
        Section::Content,
        Section::Tasks,
        Section::Settings,
    ],
};

static STRATEGIST: RoleRules = RoleRules {
    content_scope: ContentScope::All,
    content_edit: ContentEdit::Never,
    content_status: false,
    content_delete_any: false,
    content_create: false,
    task_scope: TaskScope::All,
    task_manage_any: false,
    task_delete: false,
    sections: &[
        Section::Dashboard,
        Section::Clients,
        Section::Projects,
        Section::Content,
        Section::Tasks,
    ],
};

static EDITOR: RoleRules = RoleRules {
    content_scope: ContentScope::All,
    content_edit: ContentEdit::UnlessPublished,
    content_status: true,
    content_delete_any: false,
    content_create: false,
    task_scope: TaskScope::ReviewOrAssigned,
    task_manage_any: false,
    task_delete: false,
    sections: &[
        Section::Dashboard,
        Section::Projects,
        Section::Content,
        Section::Tasks,
    ],
};

static WRITER: RoleRules = RoleRules {
    content_scope: ContentScope::Authored,
    content_edit: ContentEdit::OwnDraft,
    content_status: false,
    content_delete_any: false,
    content_create: true,
    task_scope: TaskScope::Assigned,
    task_manage_any: false,
    task_delete: false,
    sections: &[Section::Dashboard, Section::Content, Section::Tasks],
};

pub fn rules_for(role: Role) -> &'static RoleRules {
    match role {
        Role::Admin => &ADMIN,
        Role::Strategist => &STRATEGIST,
        Role::Editor => &EDITOR,
        Role::Writer => &WRITER,
    }
}
