use notepad_core::db::migrations::{apply_migrations, latest_version, schema_version};
use notepad_core::db::{open_kv_db, open_kv_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn open_kv_db_in_memory_applies_all_migrations() {
    let conn = open_kv_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn).unwrap(), latest_version());
    assert_table_exists(&conn, "kv_entries");
}

#[test]
fn apply_migrations_reports_only_pending_steps() {
    let mut conn = Connection::open_in_memory().unwrap();

    let applied = apply_migrations(&mut conn).unwrap();
    assert_eq!(applied, (1..=latest_version()).collect::<Vec<_>>());

    let applied_again = apply_migrations(&mut conn).unwrap();
    assert!(applied_again.is_empty());
}

#[test]
fn failing_step_is_reported_and_rolled_back() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE legacy (k TEXT);
         CREATE INDEX kv_entries ON legacy (k);",
    )
    .unwrap();

    match apply_migrations(&mut conn).unwrap_err() {
        DbError::Migrate { version, .. } => assert_eq!(version, 1),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(schema_version(&conn).unwrap(), 0);
}

#[test]
fn opening_file_in_missing_directory_names_the_target() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("notepad.sqlite3");

    match open_kv_db(&path).unwrap_err() {
        DbError::Open { target, .. } => assert_eq!(target, path.display().to_string()),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn reopening_same_file_keeps_schema_and_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notepad.sqlite3");

    let conn_first = open_kv_db(&path).unwrap();
    conn_first
        .execute(
            "INSERT INTO kv_entries (key, value) VALUES ('notes', '[]');",
            [],
        )
        .unwrap();
    drop(conn_first);

    let conn_second = open_kv_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second).unwrap(), latest_version());
    let value: String = conn_second
        .query_row("SELECT value FROM kv_entries WHERE key = 'notes';", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(value, "[]");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_kv_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
