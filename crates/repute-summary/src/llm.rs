//! Prose summaries from an OpenAI-compatible chat completions endpoint.

use std::time::Duration;

use serde::Deserialize;
use serde_json::{json, Value};

use repute_core::config::SummaryConfig;
use repute_core::errors::SummaryError;
use repute_core::models::SummaryInput;
use repute_core::traits::ISummaryRenderer;

const SYSTEM_PROMPT: &str = "You write short, factual reputation summaries for on-chain \
identities. Use only the numbers provided. Two to four sentences, no headings, no advice.";

pub struct LlmRenderer {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
    max_tokens: u32,
}

impl LlmRenderer {
    /// Build from config. `Disabled` when no endpoint is configured.
    pub fn from_config(config: &SummaryConfig) -> Result<Self, SummaryError> {
        let endpoint = config.llm_endpoint.clone().ok_or(SummaryError::Disabled)?;
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.llm_timeout_secs))
            .gzip(true)
            .build()
            .map_err(|e| SummaryError::Llm {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            endpoint,
            api_key: config.llm_api_key.clone(),
            model: config.llm_model.clone(),
            max_tokens: config.llm_max_tokens,
        })
    }

    /// Chat completions request body for `input`.
    pub fn request_body(&self, input: &SummaryInput) -> Result<Value, SummaryError> {
        let facts = serde_json::to_string_pretty(input).map_err(|e| SummaryError::Llm {
            message: format!("failed to serialize summary input: {e}"),
        })?;
        Ok(json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "temperature": 0.2,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                {
                    "role": "user",
                    "content": format!(
                        "Summarize the reputation of {} from this data:\n{}",
                        input.display_name, facts
                    )
                }
            ]
        }))
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Pull the first non-blank message out of a chat completions response.
pub fn extract_content(body: &Value) -> Result<String, SummaryError> {
    let completion: ChatCompletion =
        serde_json::from_value(body.clone()).map_err(|e| SummaryError::Llm {
            message: format!("unexpected response shape: {e}"),
        })?;
    completion
        .choices
        .into_iter()
        .filter_map(|c| c.message.and_then(|m| m.content))
        .map(|text| text.trim().to_string())
        .find(|text| !text.is_empty())
        .ok_or(SummaryError::EmptyResponse)
}

impl ISummaryRenderer for LlmRenderer {
    fn render(&self, input: &SummaryInput) -> Result<String, SummaryError> {
        let body = self.request_body(input)?;
        let mut req = self.client.post(&self.endpoint).json(&body);
        if let Some(ref key) = self.api_key {
            req = req.bearer_auth(key);
        }

        let resp = req.send().map_err(|e| SummaryError::Llm {
            message: e.to_string(),
        })?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SummaryError::Llm {
                message: format!("HTTP {status}"),
            });
        }
        let value: Value = resp.json().map_err(|e| SummaryError::Llm {
            message: format!("invalid JSON: {e}"),
        })?;
        extract_content(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_non_empty_choice() {
        let body = json!({
            "choices": [
                { "message": { "content": "   " } },
                { "message": { "content": " Alice is well regarded. " } }
            ]
        });
        assert_eq!(extract_content(&body).unwrap(), "Alice is well regarded.");
    }

    #[test]
    fn no_choices_is_empty_response() {
        assert!(matches!(
            extract_content(&json!({ "choices": [] })),
            Err(SummaryError::EmptyResponse)
        ));
    }

    #[test]
    fn wrong_shape_is_llm_error() {
        assert!(matches!(
            extract_content(&json!({ "choices": "nope" })),
            Err(SummaryError::Llm { .. })
        ));
    }

    #[test]
    fn missing_endpoint_is_disabled() {
        assert!(matches!(
            LlmRenderer::from_config(&SummaryConfig::default()),
            Err(SummaryError::Disabled)
        ));
    }
}
