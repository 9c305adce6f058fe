//! SQLite bootstrap for the key-value backend.
//!
//! # Responsibility
//! - Open the key-value database file (or a private in-memory one).
//! - Bring the `kv_entries` schema up to date before first use.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - No key-value reads or writes happen before migrations succeed.
//! - Errors say which phase failed: opening, migrating, or a later query.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_kv_db, open_kv_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure of the SQLite key-value backend.
#[derive(Debug)]
pub enum DbError {
    /// The database at `target` could not be opened or configured.
    Open {
        target: String,
        source: rusqlite::Error,
    },
    /// Schema step `version` failed; the whole migration was rolled back.
    Migrate {
        version: u32,
        source: rusqlite::Error,
    },
    /// The file was written by a newer build with an unknown schema.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    /// A read or write on `kv_entries` failed.
    Query(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { target, source } => {
                write!(f, "failed to open key-value store `{target}`: {source}")
            }
            Self::Migrate { version, source } => {
                write!(f, "key-value schema migration {version} failed: {source}")
            }
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "key-value schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::Query(err) => write!(f, "key-value query failed: {err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } | Self::Migrate { source, .. } => Some(source),
            Self::Query(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Query(value)
    }
}
