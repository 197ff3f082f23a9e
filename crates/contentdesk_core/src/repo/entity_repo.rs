//! Generic JSON-list repository and its per-entity bindings.

use crate::model::client::Client;
use crate::model::content::Content;
use crate::model::ids::RecordId;
use crate::model::project::Project;
use crate::model::task::Task;
use crate::model::user::User;
use crate::store::{keys, KeyValueStore, StoreError};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    Encode(serde_json::Error),
    NotFound { entity: &'static str, id: RecordId },
    /// The stored value is not a JSON array, so rewriting it would lose data.
    Unreadable { key: &'static str },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode records: {err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::Unreadable { key } => write!(
                f,
                "stored `{key}` is not a list; refusing to overwrite it"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::NotFound { .. } | Self::Unreadable { .. } => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// A record kind persisted as one list under a fixed key.
pub trait StoredEntity: Serialize + DeserializeOwned + Clone {
    const STORAGE_KEY: &'static str;
    /// Singular name used in errors and log lines.
    const ENTITY: &'static str;

    fn id(&self) -> RecordId;
}

impl StoredEntity for User {
    const STORAGE_KEY: &'static str = keys::USERS;
    const ENTITY: &'static str = "user";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl StoredEntity for Client {
    const STORAGE_KEY: &'static str = keys::CLIENTS;
    const ENTITY: &'static str = "client";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl StoredEntity for Project {
    const STORAGE_KEY: &'static str = keys::PROJECTS;
    const ENTITY: &'static str = "project";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl StoredEntity for Content {
    const STORAGE_KEY: &'static str = keys::CONTENT;
    const ENTITY: &'static str = "content";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl StoredEntity for Task {
    const STORAGE_KEY: &'static str = keys::TASKS;
    const ENTITY: &'static str = "task";

    fn id(&self) -> RecordId {
        self.id
    }
}

/// CRUD contract for one entity list.
pub trait EntityRepository<T: StoredEntity> {
    /// All records in stored order.
    fn list(&self) -> RepoResult<Vec<T>>;
    fn get(&self, id: RecordId) -> RepoResult<Option<T>>;
    /// Appends a record.
    fn insert(&self, record: &T) -> RepoResult<()>;
    /// Replaces the record with the same id in place.
    fn update(&self, record: &T) -> RepoResult<()>;
    /// Removes and returns the record with `id`.
    fn remove(&self, id: RecordId) -> RepoResult<T>;
    /// Overwrites the whole list.
    fn save_all(&self, records: &[T]) -> RepoResult<()>;
    /// Whether the key exists at all, even holding an empty list.
    fn is_initialized(&self) -> RepoResult<bool>;
}

/// Repository storing `T` as a JSON array under `T::STORAGE_KEY`.
pub struct JsonListRepository<'s, T> {
    store: &'s dyn KeyValueStore,
    _records: PhantomData<fn() -> T>,
}

impl<'s, T: StoredEntity> JsonListRepository<'s, T> {
    pub fn new(store: &'s dyn KeyValueStore) -> Self {
        Self {
            store,
            _records: PhantomData,
        }
    }
}

/// One element of a stored list. Elements that do not decode as `T` (an
/// unknown status, a missing field) are carried through writes untouched.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum StoredEntry<T> {
    Record(T),
    Unrecognized(serde_json::Value),
}

impl<T: StoredEntity> StoredEntry<T> {
    fn record_id(&self) -> Option<RecordId> {
        match self {
            Self::Record(record) => Some(record.id()),
            Self::Unrecognized(_) => None,
        }
    }
}

impl<T: StoredEntity> JsonListRepository<'_, T> {
    /// Entries to rewrite. Fails instead of starting from an empty list when
    /// the stored value cannot be decoded at all.
    fn entries_for_write(&self) -> RepoResult<Vec<StoredEntry<T>>> {
        let Some(raw) = self.store.get(T::STORAGE_KEY)? else {
            return Ok(Vec::new());
        };
        decode_entries(T::STORAGE_KEY, &raw).ok_or_else(|| {
            warn!(
                "event=store_write module=repo status=denied key={} reason=unreadable",
                T::STORAGE_KEY
            );
            RepoError::Unreadable {
                key: T::STORAGE_KEY,
            }
        })
    }

    fn write_entries(&self, entries: &[StoredEntry<T>]) -> RepoResult<()> {
        let raw = serde_json::to_string(entries)?;
        self.store.set(T::STORAGE_KEY, &raw)?;
        debug!(
            "event=store_write module=repo status=ok key={} entries={}",
            T::STORAGE_KEY,
            entries.len()
        );
        Ok(())
    }
}

impl<T: StoredEntity> EntityRepository<T> for JsonListRepository<'_, T> {
    fn list(&self) -> RepoResult<Vec<T>> {
        let Some(raw) = self.store.get(T::STORAGE_KEY)? else {
            return Ok(Vec::new());
        };
        let entries = decode_entries::<T>(T::STORAGE_KEY, &raw).unwrap_or_default();
        Ok(entries
            .into_iter()
            .filter_map(|entry| match entry {
                StoredEntry::Record(record) => Some(record),
                StoredEntry::Unrecognized(_) => None,
            })
            .collect())
    }

    fn get(&self, id: RecordId) -> RepoResult<Option<T>> {
        Ok(self.list()?.into_iter().find(|record| record.id() == id))
    }

    fn insert(&self, record: &T) -> RepoResult<()> {
        let mut entries = self.entries_for_write()?;
        entries.push(StoredEntry::Record(record.clone()));
        self.write_entries(&entries)
    }

    fn update(&self, record: &T) -> RepoResult<()> {
        let mut entries = self.entries_for_write()?;
        let slot = entries
            .iter_mut()
            .find(|entry| entry.record_id() == Some(record.id()))
            .ok_or(RepoError::NotFound {
                entity: T::ENTITY,
                id: record.id(),
            })?;
        *slot = StoredEntry::Record(record.clone());
        self.write_entries(&entries)
    }

    fn remove(&self, id: RecordId) -> RepoResult<T> {
        let mut entries = self.entries_for_write()?;
        let not_found = || RepoError::NotFound {
            entity: T::ENTITY,
            id,
        };
        let index = entries
            .iter()
            .position(|entry| entry.record_id() == Some(id))
            .ok_or_else(not_found)?;
        let StoredEntry::Record(removed) = entries.remove(index) else {
            return Err(not_found());
        };
        self.write_entries(&entries)?;
        Ok(removed)
    }

    /// Replaces the whole list, unrecognized entries included.
    fn save_all(&self, records: &[T]) -> RepoResult<()> {
        let raw = serde_json::to_string(records)?;
        self.store.set(T::STORAGE_KEY, &raw)?;
        debug!(
            "event=store_write module=repo status=ok key={} records={}",
            T::STORAGE_KEY,
            records.len()
        );
        Ok(())
    }

    fn is_initialized(&self) -> RepoResult<bool> {
        Ok(self.store.contains(T::STORAGE_KEY)?)
    }
}

/// `None` when `raw` is not a JSON array.
fn decode_entries<T: DeserializeOwned>(key: &str, raw: &str) -> Option<Vec<StoredEntry<T>>> {
    match serde_json::from_str::<Vec<StoredEntry<T>>>(raw) {
        Ok(entries) => {
            let skipped = entries
                .iter()
                .filter(|entry| matches!(entry, StoredEntry::Unrecognized(_)))
                .count();
            if skipped > 0 {
                warn!(
                    "event=store_decode module=repo status=degraded key={} skipped={}",
                    key, skipped
                );
            }
            Some(entries)
        }
        Err(err) => {
            warn!(
                "event=store_decode module=repo status=degraded key={} error_line={} error_column={}",
                key,
                err.line(),
                err.column()
            );
            None
        }
    }
}
