//! Connection bootstrap utilities for entity stores.
//!
//! # Responsibility
//! - Open file or in-memory connections for a given store kind.
//! - Configure connection settings shared by all stores.
//! - Apply that store's migrations before returning a usable connection.
//!
//! # Invariants
//! - Returned connections have all migrations for their store applied.
//! - Opening an already-migrated store is a no-op on the schema.

use super::migrations::apply_migrations;
use super::{DbResult, StoreKind};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Opens a store's database file and applies its pending migrations.
///
/// # Side effects
/// - Creates the file when absent.
/// - Emits `store_open` logging events with duration and status.
pub fn open_store(kind: StoreKind, path: impl AsRef<Path>) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=store_open module=db status=start store={kind} mode=file");

    let mut conn = match Connection::open(path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=store_open module=db status=error store={kind} mode=file duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(kind, &mut conn) {
        Ok(()) => {
            info!(
                "event=store_open module=db status=ok store={kind} mode=file duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=store_open module=db status=error store={kind} mode=file duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Opens an in-memory store and applies its pending migrations.
///
/// Used by tests and callers that do not need durable state.
pub fn open_store_in_memory(kind: StoreKind) -> DbResult<Connection> {
    let mut conn = Connection::open_in_memory()?;
    bootstrap_connection(kind, &mut conn)?;
    Ok(conn)
}

fn bootstrap_connection(kind: StoreKind, conn: &mut Connection) -> DbResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    apply_migrations(kind, conn)?;
    Ok(())
}
