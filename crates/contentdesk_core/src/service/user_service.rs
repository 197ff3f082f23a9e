//! Account management (Settings section, admins only).

use super::{ServiceContext, ServiceError, ServiceResult};
use crate::model::ids::RecordId;
use crate::model::user::{User, UserDraft};
use crate::model::validate::{email, require_text, ValidationError};
use crate::policy::Section;
use crate::repo::EntityRepository;
use log::{info, warn};

pub struct UserService<'s> {
    ctx: ServiceContext<'s>,
}

impl<'s> UserService<'s> {
    pub fn new(ctx: ServiceContext<'s>) -> Self {
        Self { ctx }
    }

    pub fn list(&self) -> ServiceResult<Vec<User>> {
        self.ctx.require_section(Section::Settings, "list users")?;
        Ok(self.ctx.repo::<User>().list()?)
    }

    pub fn create(&self, draft: UserDraft) -> ServiceResult<User> {
        self.ctx.require_section(Section::Settings, "add user")?;
        validate(&draft)?;

        let repo = self.ctx.repo::<User>();
        let user = draft.into_user(self.ctx.next_id(&repo.list()?));
        repo.insert(&user)?;
        info!(
            "event=user_create module=service status=ok id={} role={}",
            user.id, user.role
        );
        Ok(user)
    }

    /// Replaces an account. An active session for that account keeps the
    /// identity it signed in with until the next login.
    pub fn update(&self, id: RecordId, draft: UserDraft) -> ServiceResult<User> {
        self.ctx.require_section(Section::Settings, "edit user")?;
        validate(&draft)?;

        // Existence check first so a missing id reads as NotFound.
        let _: User = self.ctx.load(id)?;
        let user = draft.into_user(id);
        self.ctx.repo::<User>().update(&user)?;
        info!("event=user_update module=service status=ok id={id}");
        Ok(user)
    }

    /// Deletes an account other than the signed-in one.
    pub fn delete(&self, id: RecordId) -> ServiceResult<User> {
        let current = self.ctx.session().current_user()?;
        if current.as_ref().is_some_and(|user| user.id == id) {
            warn!("event=user_delete module=service status=denied reason=self_delete id={id}");
            return Err(ServiceError::CannotDeleteSelf);
        }
        self.ctx.require_section(Section::Settings, "delete user")?;

        let removed = self.ctx.repo::<User>().remove(id)?;
        info!("event=user_delete module=service status=ok id={id}");
        Ok(removed)
    }
}

fn validate(draft: &UserDraft) -> Result<(), ValidationError> {
    require_text("name", &draft.name)?;
    email(&draft.email)?;
    require_text("password", &draft.password)
}
