use contentdesk_core::db::migrations::latest_version;
use contentdesk_core::db::{open_db, open_db_in_memory, DbError};
use contentdesk_core::{
    seed_demo_data, ContentService, KeyValueStore, ServiceContext, SessionStore, SqliteStore,
};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "kv_entries");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contentdesk.sqlite3");

    let conn_first = open_db(&path).unwrap();
    SqliteStore::new(&conn_first).set("clients", "[]").unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_eq!(
        SqliteStore::new(&conn_second).get("clients").unwrap().as_deref(),
        Some("[]")
    );
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    assert!(err
        .to_string()
        .starts_with("contentdesk schema version 999 is newer"));
    match err {
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

#[test]
fn failed_migration_reports_its_version_and_rolls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clash.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE legacy (value TEXT);
         CREATE INDEX kv_entries ON legacy (value);",
    )
    .unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::Migration { version, .. } => assert_eq!(version, 1),
        other => panic!("unexpected error: {other}"),
    }

    let conn = Connection::open(&path).unwrap();
    assert_eq!(schema_version(&conn), 0);
}

#[test]
fn sqlite_store_overwrites_and_removes_keys() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStore::new(&conn);

    assert_eq!(store.get("tasks").unwrap(), None);
    assert!(!store.contains("tasks").unwrap());

    store.set("tasks", "[1]").unwrap();
    store.set("tasks", "[2]").unwrap();
    assert_eq!(store.get("tasks").unwrap().as_deref(), Some("[2]"));

    store.remove("tasks").unwrap();
    assert_eq!(store.get("tasks").unwrap(), None);
    store.remove("tasks").unwrap();
}

#[test]
fn session_and_content_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portal.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        let store = SqliteStore::new(&conn);
        seed_demo_data(&store).unwrap();
        SessionStore::new(&store)
            .login("writer@example.com", "writer123")
            .unwrap();
    }

    let conn = open_db(&path).unwrap();
    let store = SqliteStore::new(&conn);
    let current = SessionStore::new(&store).current_user().unwrap().unwrap();
    assert_eq!(current.name, "Writer");

    let visible = ContentService::new(ServiceContext::system(&store))
        .list_visible(None)
        .unwrap();
    assert_eq!(visible.len(), 3);
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1);",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "expected table `{table_name}` to exist");
}
