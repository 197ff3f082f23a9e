//! Content record predicates.

use super::rules::{ContentEdit, ContentScope};
use super::{Actor, RecordPermissions};
use crate::model::content::{Content, ContentStatus};

pub fn can_view_content(actor: Option<&Actor>, item: &Content) -> bool {
    let Some(actor) = actor else {
        return false;
    };
    match actor.rules().content_scope {
        ContentScope::All => true,
        ContentScope::Authored => is_author(actor, item),
    }
}

pub fn can_edit_content(actor: Option<&Actor>, item: &Content) -> bool {
    let Some(actor) = actor else {
        return false;
    };
    match actor.rules().content_edit {
        ContentEdit::Always => true,
        ContentEdit::UnlessPublished => item.status != ContentStatus::Published,
        ContentEdit::OwnDraft => is_author(actor, item) && item.status == ContentStatus::Draft,
        ContentEdit::Never => false,
    }
}

pub fn can_change_content_status(actor: Option<&Actor>, _item: &Content) -> bool {
    actor.is_some_and(|actor| actor.rules().content_status)
}

pub fn can_delete_content(actor: Option<&Actor>, item: &Content) -> bool {
    actor.is_some_and(|actor| actor.rules().content_delete_any || is_author(actor, item))
}

pub fn can_create_content(actor: Option<&Actor>) -> bool {
    actor.is_some_and(|actor| actor.rules().content_create)
}

pub fn content_permissions(actor: Option<&Actor>, item: &Content) -> RecordPermissions {
    RecordPermissions {
        visible: can_view_content(actor, item),
        editable: can_edit_content(actor, item),
        status_changeable: can_change_content_status(actor, item),
        deletable: can_delete_content(actor, item),
    }
}

fn is_author(actor: &Actor, item: &Content) -> bool {
    item.author == actor.name
}
