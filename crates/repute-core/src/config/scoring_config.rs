use serde::{Deserialize, Serialize};

use super::defaults;
use super::repute_config::invalid;
use crate::errors::ConfigError;

/// What the activity bonus counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityBasis {
    /// Every attestation counts once.
    #[default]
    Attestations,
    /// Each distinct counterparty counts once.
    DistinctCounterparties,
}

/// Additional keywords appended to the built-in classifier tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraKeywords {
    pub high: Vec<String>,
    pub medium: Vec<String>,
    pub low: Vec<String>,
    pub negative: Vec<String>,
}

impl ExtraKeywords {
    pub fn is_empty(&self) -> bool {
        self.high.is_empty()
            && self.medium.is_empty()
            && self.low.is_empty()
            && self.negative.is_empty()
    }
}

/// Score engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Attestations strictly older than this many days are decayed.
    pub decay_after_days: i64,
    /// Multiplier applied to stale attestations.
    pub decay_multiplier: f64,
    /// Upper bound of the stake conviction boost.
    pub stake_boost_ceiling: f64,
    /// Slope of the logarithmic stake boost.
    pub stake_boost_coefficient: f64,
    /// Multiplier for attestations the subject made.
    pub given_weight: f64,
    /// Multiplier for attestations made about the subject.
    pub received_weight: f64,
    /// Flat bonus per vouch.
    pub vouch_bonus: f64,
    /// One-time bonus for builder status.
    pub builder_bonus: f64,
    /// Activity bonus per counted unit.
    pub activity_per_unit: f64,
    /// Activity bonus ceiling.
    pub activity_cap: f64,
    pub activity_basis: ActivityBasis,
    /// Lower clamp of the final score.
    pub min_score: f64,
    /// Upper clamp of the final score.
    pub max_score: f64,
    /// Maximum entries held by the score cache.
    pub cache_capacity: u64,
    /// Width of the evaluation-time bucket used as part of the cache key.
    pub cache_bucket_secs: u64,
    pub extra_keywords: ExtraKeywords,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            decay_after_days: defaults::DEFAULT_DECAY_AFTER_DAYS,
            decay_multiplier: defaults::DEFAULT_DECAY_MULTIPLIER,
            stake_boost_ceiling: defaults::DEFAULT_STAKE_BOOST_CEILING,
            stake_boost_coefficient: defaults::DEFAULT_STAKE_BOOST_COEFFICIENT,
            given_weight: defaults::DEFAULT_GIVEN_WEIGHT,
            received_weight: defaults::DEFAULT_RECEIVED_WEIGHT,
            vouch_bonus: defaults::DEFAULT_VOUCH_BONUS,
            builder_bonus: defaults::DEFAULT_BUILDER_BONUS,
            activity_per_unit: defaults::DEFAULT_ACTIVITY_PER_UNIT,
            activity_cap: defaults::DEFAULT_ACTIVITY_CAP,
            activity_basis: ActivityBasis::default(),
            min_score: defaults::DEFAULT_MIN_SCORE,
            max_score: defaults::DEFAULT_MAX_SCORE,
            cache_capacity: defaults::DEFAULT_CACHE_CAPACITY,
            cache_bucket_secs: defaults::DEFAULT_CACHE_BUCKET_SECS,
            extra_keywords: ExtraKeywords::default(),
        }
    }
}

impl ScoringConfig {
    /// Validate the scoring parameters.
    ///
    /// Guarantees every number is finite and the score range is ordered and
    /// contains the neutral score, so clamping cannot panic.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = self;

        let finite_fields = [
            ("scoring.decay_multiplier", s.decay_multiplier),
            ("scoring.stake_boost_ceiling", s.stake_boost_ceiling),
            ("scoring.stake_boost_coefficient", s.stake_boost_coefficient),
            ("scoring.given_weight", s.given_weight),
            ("scoring.received_weight", s.received_weight),
            ("scoring.vouch_bonus", s.vouch_bonus),
            ("scoring.builder_bonus", s.builder_bonus),
            ("scoring.activity_per_unit", s.activity_per_unit),
            ("scoring.activity_cap", s.activity_cap),
            ("scoring.min_score", s.min_score),
            ("scoring.max_score", s.max_score),
        ];
        for (field, value) in finite_fields {
            if !value.is_finite() {
                return Err(invalid(field, "must be a finite number"));
            }
        }

        if !(0..=defaults::MAX_DECAY_AFTER_DAYS).contains(&s.decay_after_days) {
            return Err(invalid(
                "scoring.decay_after_days",
                "must be between 0 and 3650000 days",
            ));
        }
        if !(0.0..=1.0).contains(&s.decay_multiplier) {
            return Err(invalid("scoring.decay_multiplier", "must be between 0.0 and 1.0"));
        }
        if s.stake_boost_ceiling < 1.0 {
            return Err(invalid("scoring.stake_boost_ceiling", "must be at least 1.0"));
        }
        if s.stake_boost_coefficient < 0.0 {
            return Err(invalid("scoring.stake_boost_coefficient", "must not be negative"));
        }
        if s.given_weight < 0.0 || s.received_weight < 0.0 {
            return Err(invalid(
                "scoring.given_weight/received_weight",
                "must not be negative",
            ));
        }
        if s.activity_per_unit < 0.0 || s.activity_cap < 0.0 {
            return Err(invalid("scoring.activity_cap", "activity bonus must not be negative"));
        }
        if s.min_score >= s.max_score {
            return Err(invalid("scoring.min_score", "must be lower than scoring.max_score"));
        }
        if s.min_score > 0.0 || s.max_score < 0.0 {
            return Err(invalid("scoring.min_score", "range must contain the neutral score 0"));
        }
        if s.cache_bucket_secs == 0 {
            return Err(invalid("scoring.cache_bucket_secs", "must be greater than 0"));
        }
        Ok(())
    }
}
