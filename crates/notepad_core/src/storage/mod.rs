//! Key-value storage facility behind the note persistence adapter.
//!
//! # Responsibility
//! - Define the string-keyed storage contract the store persists through.
//! - Provide in-memory, SQLite and always-unavailable backends.
//!
//! # Invariants
//! - Values are opaque strings; callers own serialization.
//! - `set_item` overwrites the whole value for a key.
//! - An unavailable facility reports `StorageError::Unavailable` on every call.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;
mod unavailable;

pub use memory::MemoryStorage;
pub use sqlite::SqliteKvStorage;
pub use unavailable::UnavailableStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure reported by a key-value backend.
#[derive(Debug)]
pub enum StorageError {
    /// The storage facility does not exist in this environment.
    Unavailable,
    /// SQLite-backed storage failed.
    Db(DbError),
    /// Backend-specific failure, e.g. a rejected write.
    Backend(String),
}

impl StorageError {
    /// Returns whether this error means "no storage facility at all".
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable => write!(f, "key-value storage is unavailable"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Backend(message) => write!(f, "key-value storage error: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Unavailable | Self::Backend(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Query(value))
    }
}

/// String key-value storage contract.
pub trait KeyValueStorage {
    /// Returns the value stored under `key`, or `None` when absent.
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()>;
    /// Removes `key`. Removing an absent key is not an error.
    fn remove_item(&mut self, key: &str) -> StorageResult<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> StorageResult<()> {
        (**self).remove_item(key)
    }
}
