use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::NEUTRAL_SCORE;

/// Aggregate reputation for one subject, produced by a single scoring call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReputationScore {
    /// Normalized subject identifier.
    pub subject: String,
    /// Final score after bonuses, clamped to the configured range.
    pub total_score: f64,
    pub attestation_count: u64,
    pub positive_count: u64,
    pub negative_count: u64,
    /// Attestations that contributed exactly zero.
    pub unknown_count: u64,
    pub vouch_count: u64,
    pub builder_detected: bool,
    pub vouch_bonus: f64,
    pub builder_bonus: f64,
    pub activity_bonus: f64,
    /// Sum of per-attestation weighted values, before bonuses.
    pub raw_weighted_sum: f64,
    /// Evaluation time used for decay.
    pub evaluated_at: DateTime<Utc>,
}

impl ReputationScore {
    /// The score of a subject with no attestations.
    pub fn neutral(subject: impl Into<String>, evaluated_at: DateTime<Utc>) -> Self {
        Self {
            subject: subject.into(),
            total_score: NEUTRAL_SCORE,
            attestation_count: 0,
            positive_count: 0,
            negative_count: 0,
            unknown_count: 0,
            vouch_count: 0,
            builder_detected: false,
            vouch_bonus: 0.0,
            builder_bonus: 0.0,
            activity_bonus: 0.0,
            raw_weighted_sum: 0.0,
            evaluated_at,
        }
    }

    /// Sum of all bonus components.
    pub fn total_bonus(&self) -> f64 {
        self.vouch_bonus + self.builder_bonus + self.activity_bonus
    }

    pub fn standing(&self) -> Standing {
        Standing::from_score(self.total_score)
    }
}

/// Coarse band for presenting a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    Flagged,
    Neutral,
    Emerging,
    Trusted,
    HighlyTrusted,
}

impl Standing {
    pub const TRUSTED_THRESHOLD: f64 = 20.0;
    pub const HIGHLY_TRUSTED_THRESHOLD: f64 = 50.0;

    pub fn from_score(score: f64) -> Self {
        if score < 0.0 {
            Self::Flagged
        } else if score == 0.0 {
            Self::Neutral
        } else if score < Self::TRUSTED_THRESHOLD {
            Self::Emerging
        } else if score < Self::HIGHLY_TRUSTED_THRESHOLD {
            Self::Trusted
        } else {
            Self::HighlyTrusted
        }
    }
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Flagged => "Flagged",
            Self::Neutral => "Neutral",
            Self::Emerging => "Emerging",
            Self::Trusted => "Trusted",
            Self::HighlyTrusted => "Highly trusted",
        };
        f.write_str(label)
    }
}
