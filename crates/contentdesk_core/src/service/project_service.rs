//! Project use-cases (Projects section).

use super::{ServiceContext, ServiceResult, UNKNOWN_CLIENT};
use crate::model::client::Client;
use crate::model::ids::RecordId;
use crate::model::project::{Project, ProjectDraft};
use crate::model::validate::{optional_date, require_text, ValidationError};
use crate::policy::Section;
use crate::repo::EntityRepository;
use log::info;

pub struct ProjectService<'s> {
    ctx: ServiceContext<'s>,
}

impl<'s> ProjectService<'s> {
    pub fn new(ctx: ServiceContext<'s>) -> Self {
        Self { ctx }
    }

    pub fn list(&self) -> ServiceResult<Vec<Project>> {
        self.ctx.require_section(Section::Projects, "list projects")?;
        Ok(self.ctx.repo::<Project>().list()?)
    }

    pub fn create(&self, draft: ProjectDraft) -> ServiceResult<Project> {
        self.ctx.require_section(Section::Projects, "add project")?;
        validate(&draft)?;

        let repo = self.ctx.repo::<Project>();
        let id = self.ctx.next_id(&repo.list()?);
        let project = Project::from_draft(id, draft, self.ctx.clock().today_iso());
        repo.insert(&project)?;
        info!("event=project_create module=service status=ok id={id}");
        Ok(project)
    }

    pub fn update(&self, id: RecordId, draft: ProjectDraft) -> ServiceResult<Project> {
        self.ctx.require_section(Section::Projects, "edit project")?;
        validate(&draft)?;

        let mut project: Project = self.ctx.load(id)?;
        project.apply(draft);
        self.ctx.repo::<Project>().update(&project)?;
        info!("event=project_update module=service status=ok id={id}");
        Ok(project)
    }

    /// Content and tasks that reference the project are left dangling.
    pub fn delete(&self, id: RecordId) -> ServiceResult<Project> {
        self.ctx.require_section(Section::Projects, "delete project")?;
        let removed = self.ctx.repo::<Project>().remove(id)?;
        info!("event=project_delete module=service status=ok id={id}");
        Ok(removed)
    }

    /// Name of the referenced client, matched with numeric coercion.
    pub fn client_name(&self, project: &Project) -> ServiceResult<String> {
        let clients = self.ctx.repo::<Client>().list()?;
        Ok(clients
            .into_iter()
            .find(|client| project.client_id.loose_eq(client.id))
            .map_or_else(|| UNKNOWN_CLIENT.to_string(), |client| client.name))
    }
}

fn validate(draft: &ProjectDraft) -> Result<(), ValidationError> {
    require_text("title", &draft.title)?;
    optional_date("dueDate", &draft.due_date)
}
