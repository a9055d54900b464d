//! Top-level Repute configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{GraphConfig, ObservabilityConfig, RegistryConfig, ScoringConfig, SummaryConfig};
use crate::errors::ConfigError;

/// Default project config file name.
pub const CONFIG_FILENAME: &str = "repute.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`REPUTE_*`, plus `INTUITION_GRAPHQL_URL`)
/// 3. Config file (`repute.toml` or an explicit path)
/// 4. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReputeConfig {
    pub scoring: ScoringConfig,
    pub graph: GraphConfig,
    pub registry: RegistryConfig,
    pub summary: SummaryConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub graphql_url: Option<String>,
    pub registry_path: Option<String>,
    pub llm_enabled: Option<bool>,
    pub log_level: Option<String>,
    pub log_json: Option<bool>,
}

impl ReputeConfig {
    /// Load configuration with layered resolution.
    ///
    /// With `path = None`, `repute.toml` in the working directory is used when
    /// present. An explicit path that does not exist is an error.
    pub fn load(path: Option<&Path>, cli: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => {
                let default_path = Path::new(CONFIG_FILENAME);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());

        if let Some(cli) = cli {
            config.apply_cli_overrides(cli);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML file. Unknown keys are ignored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment overrides through `lookup` (usually `std::env::var`).
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("REPUTE_GRAPHQL_URL").or_else(|| lookup("INTUITION_GRAPHQL_URL"))
        {
            self.graph.graphql_url = url;
        }
        if let Some(path) = lookup("REPUTE_REGISTRY_PATH") {
            self.registry.db_path = path;
        }
        if let Some(endpoint) = lookup("REPUTE_LLM_ENDPOINT") {
            self.summary.llm_endpoint = Some(endpoint);
        }
        if let Some(key) = lookup("REPUTE_LLM_API_KEY") {
            self.summary.llm_api_key = Some(key);
        }
        if let Some(model) = lookup("REPUTE_LLM_MODEL") {
            self.summary.llm_model = model;
        }
        if let Some(enabled) = lookup("REPUTE_LLM_ENABLED").and_then(|v| parse_bool(&v)) {
            self.summary.llm_enabled = enabled;
        }
        if let Some(level) = lookup("REPUTE_LOG_LEVEL") {
            self.observability.log_level = level;
        }
    }

    /// Apply CLI flags. Only `Some` values override.
    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(ref url) = cli.graphql_url {
            self.graph.graphql_url = url.clone();
        }
        if let Some(ref path) = cli.registry_path {
            self.registry.db_path = path.clone();
        }
        if let Some(enabled) = cli.llm_enabled {
            self.summary.llm_enabled = enabled;
        }
        if let Some(ref level) = cli.log_level {
            self.observability.log_level = level.clone();
        }
        if let Some(json) = cli.log_json {
            self.observability.json = json;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring.validate()?;

        if self.graph.graphql_url.trim().is_empty() {
            return Err(invalid("graph.graphql_url", "must not be empty"));
        }
        if self.graph.page_size == 0 {
            return Err(invalid("graph.page_size", "must be greater than 0"));
        }
        if self.registry.db_path.trim().is_empty() {
            return Err(invalid("registry.db_path", "must not be empty"));
        }
        if self.summary.llm_enabled && self.summary.llm_endpoint.is_none() {
            return Err(invalid(
                "summary.llm_endpoint",
                "required when summary.llm_enabled is true",
            ));
        }
        Ok(())
    }
}

pub(super) fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
