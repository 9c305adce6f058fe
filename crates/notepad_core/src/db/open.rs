//! Connection bootstrap for the SQLite key-value file.
//!
//! # Invariants
//! - Returned connections have migrations fully applied.
//! - Open attempts emit one `kv_open` start event and one terminal event.

use super::migrations::apply_migrations;
use super::{DbError, DbResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const IN_MEMORY_TARGET: &str = ":memory:";

/// Opens (or creates) a key-value database file and applies migrations.
pub fn open_kv_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    bootstrap(&path.display().to_string(), || Connection::open(path))
}

/// Opens a private in-memory key-value database.
pub fn open_kv_db_in_memory() -> DbResult<Connection> {
    bootstrap(IN_MEMORY_TARGET, Connection::open_in_memory)
}

fn bootstrap(
    target: &str,
    connect: impl FnOnce() -> rusqlite::Result<Connection>,
) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=kv_open module=db status=start target={target}");

    let result = connect()
        .and_then(|conn| {
            conn.busy_timeout(Duration::from_secs(5))?;
            Ok(conn)
        })
        .map_err(|source| DbError::Open {
            target: target.to_string(),
            source,
        })
        .and_then(|mut conn| {
            let applied = apply_migrations(&mut conn)?;
            Ok((conn, applied))
        });

    match result {
        Ok((conn, applied)) => {
            info!(
                "event=kv_open module=db status=ok target={target} migrations_applied={} duration_ms={}",
                applied.len(),
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=kv_open module=db status=error target={target} duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}
