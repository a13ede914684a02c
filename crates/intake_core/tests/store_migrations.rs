use intake_core::db::migrations::latest_version;
use intake_core::db::{open_store, open_store_in_memory, DbError, StoreKind};
use rusqlite::Connection;

#[test]
fn in_memory_stores_apply_all_migrations() {
    for kind in [StoreKind::Users, StoreKind::Products, StoreKind::Orders] {
        let conn = open_store_in_memory(kind).unwrap();
        assert_eq!(schema_version(&conn), latest_version(kind));
        assert_table_exists(&conn, kind.table());
    }
}

#[test]
fn opening_same_store_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(StoreKind::Users.file_name());

    let conn_first = open_store(StoreKind::Users, &path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version(StoreKind::Users));
    drop(conn_first);

    let conn_second = open_store(StoreKind::Users, &path).unwrap();
    assert_eq!(
        schema_version(&conn_second),
        latest_version(StoreKind::Users)
    );
    assert_table_exists(&conn_second, "users");
}

#[test]
fn opening_store_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_store(StoreKind::Products, &path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            store,
            db_version,
            latest_supported,
        } => {
            assert_eq!(store, StoreKind::Products);
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version(StoreKind::Products));
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
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
