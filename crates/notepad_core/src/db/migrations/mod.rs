//! Schema steps for the key-value table.
//!
//! # Invariants
//! - Step versions are strictly increasing, starting at 1.
//! - All pending steps run in one transaction; a failing step rolls back
//!   every step before it.
//! - The reached version is mirrored to `PRAGMA user_version`.

use crate::db::{DbError, DbResult};
use log::debug;
use rusqlite::{Connection, Transaction};

/// One schema step for the key-value file.
#[derive(Debug, Clone, Copy)]
struct SchemaStep {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

const SCHEMA_STEPS: &[SchemaStep] = &[SchemaStep {
    version: 1,
    name: "kv_entries",
    sql: include_str!("0001_kv_entries.sql"),
}];

/// Returns the schema version this build writes.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.last().map_or(0, |step| step.version)
}

/// Reads the schema version recorded in the database.
pub fn schema_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}

/// Brings the schema up to [`latest_version`].
///
/// Returns the versions applied by this call, oldest first; an up-to-date
/// database yields an empty list.
///
/// # Errors
/// - [`DbError::UnsupportedSchemaVersion`] when the file is newer than this build.
/// - [`DbError::Migrate`] naming the step that failed.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<Vec<u32>> {
    let current = schema_version(conn)?;
    let latest = latest_version();
    if current > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current,
            latest_supported: latest,
        });
    }

    let pending: Vec<&SchemaStep> = SCHEMA_STEPS
        .iter()
        .filter(|step| step.version > current)
        .collect();
    let Some(last) = pending.last() else {
        return Ok(Vec::new());
    };

    let tx = conn.transaction().map_err(|source| DbError::Migrate {
        version: pending[0].version,
        source,
    })?;
    for step in &pending {
        run_step(&tx, step)?;
    }
    tx.commit().map_err(|source| DbError::Migrate {
        version: last.version,
        source,
    })?;

    Ok(pending.iter().map(|step| step.version).collect())
}

fn run_step(tx: &Transaction<'_>, step: &SchemaStep) -> DbResult<()> {
    tx.execute_batch(step.sql)
        .and_then(|()| tx.execute_batch(&format!("PRAGMA user_version = {};", step.version)))
        .map_err(|source| DbError::Migrate {
            version: step.version,
            source,
        })?;
    debug!(
        "event=kv_migrate module=db status=ok version={} step={}",
        step.version, step.name
    );
    Ok(())
}
