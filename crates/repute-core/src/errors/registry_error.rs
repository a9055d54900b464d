/// Link registry errors.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("invalid wallet address: {address}")]
    InvalidAddress { address: String },

    #[error("invalid nickname: {reason}")]
    InvalidNickname { reason: String },

    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },
}
