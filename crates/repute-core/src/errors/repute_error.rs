use super::{ConfigError, FetchError, RegistryError, ScoreError, SummaryError};

/// Umbrella error for the whole workspace.
#[derive(Debug, thiserror::Error)]
pub enum ReputeError {
    #[error("scoring error: {0}")]
    Score(#[from] ScoreError),

    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("summary error: {0}")]
    Summary(#[from] SummaryError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("nickname not found: {nickname}")]
    NicknameNotFound { nickname: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ReputeResult<T> = Result<T, ReputeError>;
