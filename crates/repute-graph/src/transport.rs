//! GraphQL over HTTP with retry, exponential backoff, timeout and gzip.

use std::time::Duration;

use serde_json::{json, Value};

use repute_core::config::{defaults, GraphConfig};
use repute_core::errors::FetchError;

use crate::response::GraphQlResponse;

/// Executes one GraphQL document and returns its `data` object.
pub trait GraphTransport: Send + Sync {
    fn execute(&self, query: &str, variables: Value) -> Result<Value, FetchError>;
}

/// Blocking reqwest transport. The client is built once and reused.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    url: String,
    timeout_secs: u64,
    max_retries: u32,
    initial_backoff: Duration,
    max_backoff: Duration,
}

impl HttpTransport {
    pub fn new(config: &GraphConfig) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.clone())
            .gzip(true)
            .build()
            .map_err(|e| FetchError::Network {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            url: config.graphql_url.clone(),
            timeout_secs: config.request_timeout_secs,
            max_retries: config.max_retries,
            initial_backoff: Duration::from_millis(config.initial_backoff_ms),
            max_backoff: Duration::from_millis(defaults::DEFAULT_MAX_BACKOFF_MS),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn send_once(&self, body: &Value) -> Result<Value, Attempt> {
        let resp = self.client.post(&self.url).json(body).send().map_err(|e| {
            if e.is_timeout() {
                Attempt::Retry(FetchError::Timeout {
                    timeout_secs: self.timeout_secs,
                })
            } else {
                Attempt::Retry(FetchError::Network {
                    message: e.to_string(),
                })
            }
        })?;

        let status = resp.status();
        if status.is_server_error() || status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(Attempt::Retry(FetchError::Http {
                status: status.as_u16(),
            }));
        }
        if !status.is_success() {
            return Err(Attempt::Fatal(FetchError::Http {
                status: status.as_u16(),
            }));
        }

        let envelope: GraphQlResponse = resp.json().map_err(|e| {
            Attempt::Fatal(FetchError::MalformedResponse {
                reason: format!("invalid GraphQL envelope: {e}"),
            })
        })?;
        unwrap_envelope(envelope).map_err(Attempt::Fatal)
    }
}

/// Outcome of a failed attempt: worth retrying or not.
enum Attempt {
    Retry(FetchError),
    Fatal(FetchError),
}

impl GraphTransport for HttpTransport {
    fn execute(&self, query: &str, variables: Value) -> Result<Value, FetchError> {
        let body = json!({ "query": query, "variables": variables });
        let mut backoff = self.initial_backoff;
        let mut attempt = 0u32;

        loop {
            match self.send_once(&body) {
                Ok(data) => return Ok(data),
                Err(Attempt::Fatal(e)) => return Err(e),
                Err(Attempt::Retry(e)) if attempt >= self.max_retries => return Err(e),
                Err(Attempt::Retry(e)) => {
                    attempt += 1;
                    tracing::debug!(
                        "graph: retry attempt {}/{} after {:?}: {}",
                        attempt,
                        self.max_retries,
                        backoff,
                        e
                    );
                    std::thread::sleep(backoff);
                    backoff = (backoff * 2).min(self.max_backoff);
                }
            }
        }
    }
}

/// Turn a response envelope into its `data`, surfacing GraphQL errors.
pub fn unwrap_envelope(envelope: GraphQlResponse) -> Result<Value, FetchError> {
    if !envelope.errors.is_empty() {
        let message = envelope
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(FetchError::GraphQl { message });
    }
    envelope.data.ok_or_else(|| FetchError::MalformedResponse {
        reason: "response has neither data nor errors".into(),
    })
}
