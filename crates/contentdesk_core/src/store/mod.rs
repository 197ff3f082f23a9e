//! Key/value storage backends.
//!
//! # Responsibility
//! - Define the namespace contract every entity repository writes through.
//! - Provide an in-memory backend and a SQLite-backed backend.
//!
//! # Invariants
//! - Values are opaque UTF-8 strings; JSON encoding lives in `repo`.
//! - Writes are last-write-wins. There is no cross-key transaction and no
//!   locking between independent processes sharing one database file.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod keys;
mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Backend failure while reading or writing a key.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "storage backend error: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Flat string namespace, the moral equivalent of browser local storage.
pub trait KeyValueStore {
    /// Returns the raw value under `key`, or `None` when absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    /// Inserts or overwrites `key`.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;

    fn contains(&self, key: &str) -> StoreResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}
