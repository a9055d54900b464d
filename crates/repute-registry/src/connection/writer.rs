//! Single connection behind `std::sync::Mutex`. Serialized access.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use repute_core::errors::RegistryError;

use super::pragmas::{apply_memory_pragmas, apply_pragmas};
use crate::to_registry_err;

pub struct RegistryConnection {
    conn: Mutex<Connection>,
}

impl RegistryConnection {
    /// Open (creating if needed) the database at `path`.
    pub fn open(path: &Path) -> Result<Self, RegistryError> {
        let conn = Connection::open(path).map_err(|e| to_registry_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, RegistryError> {
        let conn = Connection::open_in_memory().map_err(|e| to_registry_err(e.to_string()))?;
        apply_memory_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the lock and run `f` with the connection.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, RegistryError>
    where
        F: FnOnce(&Connection) -> Result<T, RegistryError>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|_| to_registry_err("registry connection lock poisoned"))?;
        f(&guard)
    }
}
