//! Note list repository over a key-value backend.
//!
//! # Responsibility
//! - Load and store the whole ordered note list as one JSON array.
//!
//! # Invariants
//! - An absent key loads as an empty list.
//! - List order is preserved exactly across a save/load cycle.

use crate::model::note::Note;
use crate::storage::{KeyValueStorage, StorageError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the serialized note list.
pub const NOTES_STORAGE_KEY: &str = "notes";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error for note list load/save.
#[derive(Debug)]
pub enum RepoError {
    Storage(StorageError),
    /// Note list could not be encoded to, or decoded from, JSON.
    Malformed(serde_json::Error),
}

impl RepoError {
    /// Returns whether the failure comes from a missing storage facility.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Storage(err) if err.is_unavailable())
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Malformed(err) => write!(f, "malformed persisted note list: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Malformed(err) => Some(err),
        }
    }
}

impl From<StorageError> for RepoError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Loads and saves the full note list under a single key.
#[derive(Debug)]
pub struct NoteListRepository<S: KeyValueStorage> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> NoteListRepository<S> {
    /// Creates a repository using [`NOTES_STORAGE_KEY`].
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, NOTES_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Reads the persisted list. An absent key yields an empty list.
    pub fn load_notes(&self) -> RepoResult<Vec<Note>> {
        match self.storage.get_item(&self.key)? {
            Some(raw) => serde_json::from_str(&raw).map_err(RepoError::Malformed),
            None => Ok(Vec::new()),
        }
    }

    /// Overwrites the persisted list with `notes`.
    pub fn save_notes(&mut self, notes: &[Note]) -> RepoResult<()> {
        let raw = serde_json::to_string(notes).map_err(RepoError::Malformed)?;
        self.storage.set_item(&self.key, &raw)?;
        Ok(())
    }
}
