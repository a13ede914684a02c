//! Schema migration registries for the entity stores.
//!
//! # Responsibility
//! - Register each store's schema migrations in strictly increasing order.
//! - Apply pending migrations atomically per store.
//!
//! # Invariants
//! - `version` values within a registry must remain monotonic.
//! - Applied migration version is mirrored to `PRAGMA user_version` of the
//!   store's own database file.
//! - A store file newer than this binary's registry is refused, not patched.

use crate::db::{DbError, DbResult, StoreKind};
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

const USERS_MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("users_0001_init.sql"),
}];

const PRODUCTS_MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("products_0001_init.sql"),
}];

const ORDERS_MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("orders_0001_init.sql"),
}];

fn registry(kind: StoreKind) -> &'static [Migration] {
    match kind {
        StoreKind::Users => USERS_MIGRATIONS,
        StoreKind::Products => PRODUCTS_MIGRATIONS,
        StoreKind::Orders => ORDERS_MIGRATIONS,
    }
}

/// Returns the latest migration version known for a store.
pub fn latest_version(kind: StoreKind) -> u32 {
    registry(kind)
        .last()
        .map_or(0, |migration| migration.version)
}

/// Applies all pending migrations for a store on the provided connection.
pub fn apply_migrations(kind: StoreKind, conn: &mut Connection) -> DbResult<()> {
    let current_version = current_user_version(conn)?;
    let latest = latest_version(kind);

    if current_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            store: kind,
            db_version: current_version,
            latest_supported: latest,
        });
    }

    if current_version == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for migration in registry(kind) {
        if migration.version <= current_version {
            continue;
        }

        tx.execute_batch(migration.sql)?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))?;
    }
    tx.commit()?;

    Ok(())
}

fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
