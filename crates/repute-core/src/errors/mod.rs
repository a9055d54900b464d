//! Error handling for Repute.
//! One error enum per subsystem, `thiserror` only.

mod config_error;
mod fetch_error;
mod registry_error;
mod repute_error;
mod score_error;
mod summary_error;

pub use config_error::ConfigError;
pub use fetch_error::FetchError;
pub use registry_error::RegistryError;
pub use repute_error::{ReputeError, ReputeResult};
pub use score_error::ScoreError;
pub use summary_error::SummaryError;
