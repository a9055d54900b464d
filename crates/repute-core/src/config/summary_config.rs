use serde::{Deserialize, Serialize};

use super::defaults;

/// Summary formatter configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Use the text-generation service for prose summaries.
    pub llm_enabled: bool,
    /// OpenAI-compatible chat completions endpoint.
    pub llm_endpoint: Option<String>,
    /// Bearer token for the endpoint. Usually supplied via `REPUTE_LLM_API_KEY`.
    #[serde(skip_serializing)]
    pub llm_api_key: Option<String>,
    pub llm_model: String,
    pub llm_timeout_secs: u64,
    pub llm_max_tokens: u32,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            llm_enabled: defaults::DEFAULT_LLM_ENABLED,
            llm_endpoint: None,
            llm_api_key: None,
            llm_model: defaults::DEFAULT_LLM_MODEL.to_string(),
            llm_timeout_secs: defaults::DEFAULT_LLM_TIMEOUT_SECS,
            llm_max_tokens: defaults::DEFAULT_LLM_MAX_TOKENS,
        }
    }
}
