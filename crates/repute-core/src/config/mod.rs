//! Configuration: one struct per subsystem, aggregated by [`ReputeConfig`].

pub mod defaults;
mod graph_config;
mod observability_config;
mod registry_config;
mod repute_config;
mod scoring_config;
mod summary_config;

pub use graph_config::GraphConfig;
pub use observability_config::ObservabilityConfig;
pub use registry_config::RegistryConfig;
pub use repute_config::{CliOverrides, ReputeConfig};
pub use scoring_config::{ActivityBasis, ExtraKeywords, ScoringConfig};
pub use summary_config::SummaryConfig;
