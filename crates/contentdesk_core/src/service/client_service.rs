//! Client directory use-cases (Clients section).

use super::{ServiceContext, ServiceResult};
use crate::model::client::{Client, ClientDraft};
use crate::model::ids::RecordId;
use crate::model::validate::require_text;
use crate::policy::Section;
use crate::repo::EntityRepository;
use log::info;

pub struct ClientService<'s> {
    ctx: ServiceContext<'s>,
}

impl<'s> ClientService<'s> {
    pub fn new(ctx: ServiceContext<'s>) -> Self {
        Self { ctx }
    }

    pub fn list(&self) -> ServiceResult<Vec<Client>> {
        self.ctx.require_section(Section::Clients, "list clients")?;
        Ok(self.ctx.repo::<Client>().list()?)
    }

    pub fn create(&self, draft: ClientDraft) -> ServiceResult<Client> {
        self.ctx.require_section(Section::Clients, "add client")?;
        require_text("name", &draft.name)?;

        let repo = self.ctx.repo::<Client>();
        let client = Client::from_draft(self.ctx.next_id(&repo.list()?), draft);
        repo.insert(&client)?;
        info!("event=client_create module=service status=ok id={}", client.id);
        Ok(client)
    }

    pub fn update(&self, id: RecordId, draft: ClientDraft) -> ServiceResult<Client> {
        self.ctx.require_section(Section::Clients, "edit client")?;
        require_text("name", &draft.name)?;

        let mut client: Client = self.ctx.load(id)?;
        client.apply(draft);
        self.ctx.repo::<Client>().update(&client)?;
        info!("event=client_update module=service status=ok id={id}");
        Ok(client)
    }

    /// Projects that reference the client are left dangling.
    pub fn delete(&self, id: RecordId) -> ServiceResult<Client> {
        self.ctx.require_section(Section::Clients, "delete client")?;
        let removed = self.ctx.repo::<Client>().remove(id)?;
        info!("event=client_delete module=service status=ok id={id}");
        Ok(removed)
    }
}
