use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Which side of the claim the scored subject is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttestationDirection {
    /// The subject made the claim.
    Given,
    /// The claim is about the subject.
    Received,
    /// The source does not say.
    Undirected,
}

/// A claim made by one identity about another.
///
/// Every field is optional: upstream data is noisy and the score engine
/// normalizes missing values instead of rejecting the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attestation {
    pub id: Option<String>,
    pub predicate: Option<String>,
    #[serde(alias = "subjectIsTarget")]
    pub subject_is_target: Option<bool>,
    pub counterparty: Option<String>,
    #[serde(alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    /// Stake backing the claim, in whole tokens.
    #[serde(alias = "stakeAmount", alias = "vaultShares", alias = "stake_amount")]
    pub stake: Option<f64>,
    #[serde(alias = "isVouch")]
    pub is_vouch: Option<bool>,
    #[serde(alias = "isBuilder", alias = "isBuilderFlag")]
    pub is_builder: Option<bool>,
}

impl Attestation {
    /// Create an attestation with only a predicate set.
    pub fn with_predicate(predicate: impl Into<String>) -> Self {
        Self {
            predicate: Some(predicate.into()),
            ..Default::default()
        }
    }

    pub fn created(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    pub fn staked(mut self, stake: f64) -> Self {
        self.stake = Some(stake);
        self
    }

    pub fn toward(mut self, counterparty: impl Into<String>) -> Self {
        self.counterparty = Some(counterparty.into());
        self
    }

    /// Predicate text, or `""` when absent.
    pub fn predicate_text(&self) -> &str {
        self.predicate.as_deref().unwrap_or("")
    }

    pub fn direction(&self) -> AttestationDirection {
        match self.subject_is_target {
            Some(true) => AttestationDirection::Given,
            Some(false) => AttestationDirection::Received,
            None => AttestationDirection::Undirected,
        }
    }

    /// Stake as a usable number: absent, negative or non-finite values are 0.0.
    pub fn effective_stake(&self) -> f64 {
        match self.stake {
            Some(s) if s.is_finite() && s > 0.0 => s,
            _ => 0.0,
        }
    }

    /// Build an attestation from an arbitrary JSON value, field by field.
    ///
    /// Unlike serde deserialization this never fails: a field with the wrong
    /// type is dropped, and a non-object value yields an empty attestation.
    /// Timestamps may be RFC 3339 strings or unix seconds; stakes may be
    /// numbers or numeric strings.
    pub fn from_value(value: &Value) -> Self {
        let obj = match value.as_object() {
            Some(obj) => obj,
            None => return Self::default(),
        };

        Self {
            id: first_field(obj, &["id"]).and_then(string_like),
            predicate: first_field(obj, &["predicate"]).and_then(string_like),
            subject_is_target: first_field(obj, &["subject_is_target", "subjectIsTarget"])
                .and_then(Value::as_bool),
            counterparty: first_field(obj, &["counterparty"]).and_then(string_like),
            created_at: first_field(obj, &["created_at", "createdAt"]).and_then(parse_timestamp),
            stake: first_field(obj, &["stake", "stakeAmount", "stake_amount", "vaultShares"])
                .and_then(parse_number),
            is_vouch: first_field(obj, &["is_vouch", "isVouch"]).and_then(Value::as_bool),
            is_builder: first_field(obj, &["is_builder", "isBuilder", "isBuilderFlag"])
                .and_then(Value::as_bool),
        }
    }
}

fn first_field<'a>(obj: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|n| obj.get(*n))
}

fn string_like(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(n) => n
            .as_i64()
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single()),
        _ => None,
    }
}

fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
