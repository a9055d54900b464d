//! Schema migrations using PRAGMA user_version.

pub mod v001_links;

use rusqlite::Connection;

use repute_core::errors::RegistryError;

use crate::to_registry_err;

/// Run all pending migrations.
pub fn run_migrations(conn: &Connection) -> Result<(), RegistryError> {
    let current = current_version(conn).map_err(|e| RegistryError::MigrationFailed {
        version: 0,
        reason: e.to_string(),
    })?;

    let migrations: &[(&str, u32)] = &[(v001_links::MIGRATION_SQL, 1)];

    for (sql, version) in migrations {
        if current < *version {
            conn.execute_batch(sql)
                .and_then(|_| conn.pragma_update(None, "user_version", version))
                .map_err(|e| RegistryError::MigrationFailed {
                    version: *version,
                    reason: e.to_string(),
                })?;
            tracing::info!(version = version, "applied registry migration");
        }
    }

    Ok(())
}

/// Get the current schema version.
pub fn current_version(conn: &Connection) -> Result<u32, RegistryError> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_registry_err(e.to_string()))
}

/// Highest version this build knows about.
pub const LATEST_VERSION: u32 = 1;
