//! SQLite-backed key-value storage.
//!
//! # Invariants
//! - One row per key in `kv_entries`; writes are upserts.
//! - `updated_at` is refreshed on every write (epoch milliseconds).

use super::{KeyValueStorage, StorageResult};
use crate::db::{open_kv_db, open_kv_db_in_memory, DbResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Durable key-value store over a migrated SQLite connection.
pub struct SqliteKvStorage {
    conn: Connection,
}

impl SqliteKvStorage {
    /// Opens or creates the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Ok(Self {
            conn: open_kv_db(path)?,
        })
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self {
            conn: open_kv_db_in_memory()?,
        })
    }
}

impl KeyValueStorage for SqliteKvStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> StorageResult<()> {
        self.conn
            .execute("DELETE FROM kv_entries WHERE key = ?1;", [key])?;
        Ok(())
    }
}
