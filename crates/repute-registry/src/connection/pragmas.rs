//! PRAGMA configuration applied to every registry connection.
//!
//! WAL mode and NORMAL sync for file-backed databases, 5s busy_timeout.

use rusqlite::Connection;

use repute_core::errors::RegistryError;

use crate::to_registry_err;

/// Apply pragmas for a file-backed database.
pub fn apply_pragmas(conn: &Connection) -> Result<(), RegistryError> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        PRAGMA foreign_keys = ON;
        ",
    )
    .map_err(|e| to_registry_err(e.to_string()))
}

/// Apply pragmas for an in-memory database. WAL does not apply there.
pub fn apply_memory_pragmas(conn: &Connection) -> Result<(), RegistryError> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(|e| to_registry_err(e.to_string()))
}

/// Verify that WAL mode is active on a connection.
pub fn verify_wal_mode(conn: &Connection) -> Result<bool, RegistryError> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_registry_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
