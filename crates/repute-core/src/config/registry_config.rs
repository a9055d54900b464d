use serde::{Deserialize, Serialize};

use super::defaults;

/// Link registry configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Path of the SQLite database file.
    pub db_path: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            db_path: defaults::DEFAULT_REGISTRY_PATH.to_string(),
        }
    }
}
