//! # repute-registry
//!
//! Persistent nickname → wallet links in SQLite. One serialized connection,
//! schema versioned through `PRAGMA user_version`.

pub mod connection;
pub mod engine;
pub mod migrations;
pub mod queries;

pub use engine::LinkRegistry;

use repute_core::errors::RegistryError;

/// Map any SQLite failure into the registry error type.
pub(crate) fn to_registry_err(message: impl Into<String>) -> RegistryError {
    RegistryError::SqliteError {
        message: message.into(),
    }
}
