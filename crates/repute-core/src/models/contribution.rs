use serde::{Deserialize, Serialize};

use super::{PredicateWeightClass, ReputationScore};

/// How a single attestation fed into the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttestationContribution {
    pub attestation_id: Option<String>,
    pub predicate: String,
    pub class: PredicateWeightClass,
    pub base_weight: f64,
    pub decay_multiplier: f64,
    pub stake_boost: f64,
    pub direction_multiplier: f64,
    /// `base_weight × decay × stake × direction`.
    pub weighted_value: f64,
    pub is_vouch: bool,
    pub is_builder: bool,
}

/// A score together with every per-attestation contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub score: ReputationScore,
    pub contributions: Vec<AttestationContribution>,
}
