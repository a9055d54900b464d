use serde::{Deserialize, Serialize};

use super::defaults;

/// Knowledge-graph client configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// GraphQL endpoint URL.
    pub graphql_url: String,
    /// Rows requested per page.
    pub page_size: u32,
    /// Paging stops once the offset passes this value.
    pub max_offset: u32,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Retries after a network error or 5xx response.
    pub max_retries: u32,
    /// First retry delay in milliseconds, doubled on each attempt.
    pub initial_backoff_ms: u64,
    pub user_agent: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            graphql_url: defaults::DEFAULT_GRAPHQL_URL.to_string(),
            page_size: defaults::DEFAULT_PAGE_SIZE,
            max_offset: defaults::DEFAULT_MAX_OFFSET,
            request_timeout_secs: defaults::DEFAULT_REQUEST_TIMEOUT_SECS,
            max_retries: defaults::DEFAULT_MAX_RETRIES,
            initial_backoff_ms: defaults::DEFAULT_INITIAL_BACKOFF_MS,
            user_agent: defaults::DEFAULT_USER_AGENT.to_string(),
        }
    }
}
