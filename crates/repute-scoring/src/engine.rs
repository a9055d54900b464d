use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde_json::Value;

use repute_core::address;
use repute_core::config::ScoringConfig;
use repute_core::errors::{ConfigError, ScoreError};
use repute_core::models::{Attestation, AttestationContribution, ReputationScore, ScoreBreakdown};
use repute_core::traits::IScoreEngine;

use crate::classifier::Classifier;
use crate::factors::ScoringContext;
use crate::formula;

/// One subject and its attestations, for batch scoring.
#[derive(Debug, Clone, Default)]
pub struct ScoreRequest {
    pub subject: String,
    pub attestations: Vec<Attestation>,
}

impl ScoreRequest {
    pub fn new(subject: impl Into<String>, attestations: Vec<Attestation>) -> Self {
        Self {
            subject: subject.into(),
            attestations,
        }
    }
}

/// Score engine: classify, weight and sum attestations, add bonuses, clamp.
///
/// Holds only immutable configuration, so one instance can be shared
/// across threads and every call is independent.
#[derive(Debug, Clone)]
pub struct ScoreEngine {
    config: ScoringConfig,
    classifier: Classifier,
}

impl ScoreEngine {
    /// Engine with compiled defaults.
    pub fn new() -> Self {
        Self {
            config: ScoringConfig::default(),
            classifier: Classifier::new(),
        }
    }

    /// Engine with a custom scoring config. The config is validated first.
    pub fn with_config(config: ScoringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let classifier = if config.extra_keywords.is_empty() {
            Classifier::new()
        } else {
            Classifier::with_extra_keywords(&config.extra_keywords)
        };
        Ok(Self { config, classifier })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Score a subject from its attestations as of `now`.
    pub fn score(
        &self,
        subject: &str,
        attestations: &[Attestation],
        now: DateTime<Utc>,
    ) -> ReputationScore {
        self.score_breakdown(subject, attestations, now).score
    }

    /// Score plus the per-attestation contributions behind it.
    pub fn score_breakdown(
        &self,
        subject: &str,
        attestations: &[Attestation],
        now: DateTime<Utc>,
    ) -> ScoreBreakdown {
        let ctx = ScoringContext::at(now);
        let subject = address::normalize(subject);

        let contributions: Vec<AttestationContribution> = attestations
            .iter()
            .map(|a| formula::contribution(a, &self.classifier, &self.config, &ctx))
            .collect();
        let score = formula::aggregate(&subject, attestations, &contributions, &self.config, &ctx);

        tracing::debug!(
            subject = %score.subject,
            total = score.total_score,
            attestations = score.attestation_count,
            positive = score.positive_count,
            negative = score.negative_count,
            vouches = score.vouch_count,
            builder = score.builder_detected,
            "scored subject"
        );

        ScoreBreakdown {
            score,
            contributions,
        }
    }

    /// Score from untyped JSON.
    ///
    /// The value must be an array. Each element is read leniently with
    /// [`Attestation::from_value`], so malformed elements still count as
    /// attestations (of the Unknown class).
    pub fn score_value(
        &self,
        subject: &str,
        value: &Value,
        now: DateTime<Utc>,
    ) -> Result<ReputationScore, ScoreError> {
        let items = value.as_array().ok_or_else(|| ScoreError::InvalidInput {
            found: json_kind(value).to_string(),
        })?;
        let attestations: Vec<Attestation> = items.iter().map(Attestation::from_value).collect();
        Ok(self.score(subject, &attestations, now))
    }

    /// Score independent requests in parallel. Output order matches input.
    pub fn score_batch(&self, requests: &[ScoreRequest], now: DateTime<Utc>) -> Vec<ReputationScore> {
        requests
            .par_iter()
            .map(|r| self.score(&r.subject, &r.attestations, now))
            .collect()
    }
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IScoreEngine for ScoreEngine {
    fn score(
        &self,
        subject: &str,
        attestations: &[Attestation],
        now: DateTime<Utc>,
    ) -> ReputationScore {
        ScoreEngine::score(self, subject, attestations, now)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
