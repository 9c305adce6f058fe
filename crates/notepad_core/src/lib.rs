//! Core state and persistence for the notepad.
//!
//! The [`NoteStore`] owns the note list, its filtered view and the staged
//! selection, and writes the list back to a [`KeyValueStorage`] after every
//! mutation.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod storage;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::clock::{format_timestamp, Clock, SystemClock};
pub use model::note::{Note, NoteId};
pub use repo::note_repo::{NoteListRepository, RepoError, RepoResult, NOTES_STORAGE_KEY};
pub use search::filter::{filter_notes, normalize_query};
pub use service::note_store::{NoteStore, NoteStoreConfig};
pub use storage::{
    KeyValueStorage, MemoryStorage, SqliteKvStorage, StorageError, StorageResult,
    UnavailableStorage,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
