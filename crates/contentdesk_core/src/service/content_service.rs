//! Content use-cases: workflow list, authoring, editorial status moves.

use super::context::denied;
use super::{ServiceContext, ServiceResult, UNKNOWN_PROJECT};
use crate::model::content::{Content, ContentDraft, ContentStatus};
use crate::model::ids::RecordId;
use crate::model::project::Project;
use crate::model::validate::require_text;
use crate::policy::content::{
    can_change_content_status, can_create_content, can_delete_content, can_edit_content,
    can_view_content, content_permissions,
};
use crate::policy::RecordPermissions;
use crate::repo::EntityRepository;
use log::info;

/// Author recorded when nobody is signed in. Creation is gated on a
/// session, so this only shows up in imported data.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

pub struct ContentService<'s> {
    ctx: ServiceContext<'s>,
}

impl<'s> ContentService<'s> {
    pub fn new(ctx: ServiceContext<'s>) -> Self {
        Self { ctx }
    }

    /// Content the actor may see, optionally narrowed to one status tab.
    pub fn list_visible(&self, status: Option<ContentStatus>) -> ServiceResult<Vec<Content>> {
        let actor = self.ctx.actor()?;
        let items = self.ctx.repo::<Content>().list()?;
        Ok(items
            .into_iter()
            .filter(|item| can_view_content(actor.as_ref(), item))
            .filter(|item| status.map_or(true, |status| item.status == status))
            .collect())
    }

    pub fn get_visible(&self, id: RecordId) -> ServiceResult<Content> {
        let item: Content = self.ctx.load(id)?;
        if !can_view_content(self.ctx.actor()?.as_ref(), &item) {
            return Err(denied("view content"));
        }
        Ok(item)
    }

    /// Creates a draft authored by the actor.
    pub fn create(&self, draft: ContentDraft) -> ServiceResult<Content> {
        let actor = self.ctx.actor()?;
        if !can_create_content(actor.as_ref()) {
            return Err(denied("create content"));
        }
        require_text("title", &draft.title)?;
        require_text("content", &draft.body)?;

        let repo = self.ctx.repo::<Content>();
        let existing = repo.list()?;
        let today = self.ctx.clock().today_iso();
        let item = Content {
            id: self.ctx.next_id(&existing),
            title: draft.title,
            kind: draft.kind,
            status: ContentStatus::Draft,
            project_id: draft.project_id,
            body: draft.body,
            author: actor.map_or_else(|| UNKNOWN_AUTHOR.to_string(), |actor| actor.name),
            created_at: today.clone(),
            updated_at: Some(today),
        };
        repo.insert(&item)?;
        info!(
            "event=content_create module=service status=ok id={}",
            item.id
        );
        Ok(item)
    }

    /// Replaces the editable fields; status is left as is.
    pub fn update(&self, id: RecordId, draft: ContentDraft) -> ServiceResult<Content> {
        let mut item: Content = self.ctx.load(id)?;
        if !can_edit_content(self.ctx.actor()?.as_ref(), &item) {
            return Err(denied("edit content"));
        }
        require_text("title", &draft.title)?;
        require_text("content", &draft.body)?;

        item.apply(draft);
        item.updated_at = Some(self.ctx.clock().today_iso());
        self.ctx.repo::<Content>().update(&item)?;
        info!("event=content_update module=service status=ok id={id}");
        Ok(item)
    }

    pub fn change_status(&self, id: RecordId, status: ContentStatus) -> ServiceResult<Content> {
        let mut item: Content = self.ctx.load(id)?;
        if !can_change_content_status(self.ctx.actor()?.as_ref(), &item) {
            return Err(denied("change content status"));
        }

        let previous = item.status;
        item.status = status;
        item.updated_at = Some(self.ctx.clock().today_iso());
        self.ctx.repo::<Content>().update(&item)?;
        info!(
            "event=content_status module=service status=ok id={} from={} to={}",
            id,
            previous.as_str(),
            status.as_str()
        );
        Ok(item)
    }

    pub fn delete(&self, id: RecordId) -> ServiceResult<Content> {
        let item: Content = self.ctx.load(id)?;
        if !can_delete_content(self.ctx.actor()?.as_ref(), &item) {
            return Err(denied("delete content"));
        }
        let removed = self.ctx.repo::<Content>().remove(id)?;
        info!("event=content_delete module=service status=ok id={id}");
        Ok(removed)
    }

    pub fn permissions(&self, item: &Content) -> ServiceResult<RecordPermissions> {
        Ok(content_permissions(self.ctx.actor()?.as_ref(), item))
    }

    /// Title of the referenced project, matched with numeric coercion.
    pub fn project_title(&self, item: &Content) -> ServiceResult<String> {
        let projects = self.ctx.repo::<Project>().list()?;
        Ok(projects
            .into_iter()
            .find(|project| item.project_id.loose_eq(project.id))
            .map_or_else(|| UNKNOWN_PROJECT.to_string(), |project| project.title))
    }
}
