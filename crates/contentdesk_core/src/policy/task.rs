//! Task record predicates.

use super::rules::TaskScope;
use super::{Actor, RecordPermissions};
use crate::model::task::{Task, REVIEW_TASK_TYPE};

pub fn can_view_task(actor: Option<&Actor>, task: &Task) -> bool {
    let Some(actor) = actor else {
        return false;
    };
    match actor.rules().task_scope {
        TaskScope::All => true,
        TaskScope::ReviewOrAssigned => task.kind == REVIEW_TASK_TYPE || is_assignee(actor, task),
        TaskScope::Assigned => is_assignee(actor, task),
    }
}

pub fn can_edit_task(actor: Option<&Actor>, task: &Task) -> bool {
    actor.is_some_and(|actor| actor.rules().task_manage_any || is_assignee(actor, task))
}

/// Same rule as editing: whoever may edit a task may also move it.
pub fn can_change_task_status(actor: Option<&Actor>, task: &Task) -> bool {
    can_edit_task(actor, task)
}

pub fn can_delete_task(actor: Option<&Actor>, _task: &Task) -> bool {
    actor.is_some_and(|actor| actor.rules().task_delete)
}

pub fn task_permissions(actor: Option<&Actor>, task: &Task) -> RecordPermissions {
    RecordPermissions {
        visible: can_view_task(actor, task),
        editable: can_edit_task(actor, task),
        status_changeable: can_change_task_status(actor, task),
        deletable: can_delete_task(actor, task),
    }
}

fn is_assignee(actor: &Actor, task: &Task) -> bool {
    task.assigned_to == actor.name
}
