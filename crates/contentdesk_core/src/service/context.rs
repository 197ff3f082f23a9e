use super::error::{ServiceError, ServiceResult};
use crate::clock::{Clock, SystemClock};
use crate::model::ids::{next_record_id, RecordId};
use crate::policy::section::can_access;
use crate::policy::{Actor, Section};
use crate::repo::{EntityRepository, JsonListRepository, RepoResult, StoredEntity};
use crate::session::SessionStore;
use crate::store::KeyValueStore;
use log::warn;

static SYSTEM_CLOCK: SystemClock = SystemClock;

/// Shared handles every service works through.
#[derive(Clone, Copy)]
pub struct ServiceContext<'s> {
    store: &'s dyn KeyValueStore,
    clock: &'s dyn Clock,
}

impl<'s> ServiceContext<'s> {
    pub fn new(store: &'s dyn KeyValueStore, clock: &'s dyn Clock) -> Self {
        Self { store, clock }
    }

    /// Context on the wall clock.
    pub fn system(store: &'s dyn KeyValueStore) -> Self {
        Self::new(store, &SYSTEM_CLOCK)
    }

    pub fn store(&self) -> &'s dyn KeyValueStore {
        self.store
    }

    pub fn clock(&self) -> &'s dyn Clock {
        self.clock
    }

    pub fn session(&self) -> SessionStore<'s> {
        SessionStore::new(self.store)
    }

    pub fn repo<T: StoredEntity>(&self) -> JsonListRepository<'s, T> {
        JsonListRepository::new(self.store)
    }

    pub fn actor(&self) -> RepoResult<Option<Actor>> {
        self.session().actor()
    }

    /// Returns the actor when it may open `section`.
    pub(crate) fn require_section(
        &self,
        section: Section,
        action: &'static str,
    ) -> ServiceResult<Actor> {
        let actor = self.actor()?;
        match actor {
            Some(actor) if can_access(Some(&actor), section) => Ok(actor),
            _ => Err(denied(action)),
        }
    }

    pub(crate) fn next_id<T: StoredEntity>(&self, existing: &[T]) -> RecordId {
        next_record_id(existing.iter().map(StoredEntity::id), self.clock.now_ms())
    }

    pub(crate) fn load<T: StoredEntity>(&self, id: RecordId) -> ServiceResult<T> {
        self.repo::<T>()
            .get(id)?
            .ok_or(ServiceError::NotFound {
                entity: T::ENTITY,
                id,
            })
    }
}

pub(crate) fn denied(action: &'static str) -> ServiceError {
    warn!(
        "event=permission_check module=service status=denied action=\"{}\"",
        action
    );
    ServiceError::PermissionDenied { action }
}
