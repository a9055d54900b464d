use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_IDENTITY_LABEL;

/// Identity metadata reported next to a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityProfile {
    pub address: String,
    /// Human label of the identity's atom.
    pub label: String,
    /// Total TRUST staked across positions, in whole tokens.
    pub staked: f64,
    /// Triples created plus deposits sent.
    pub activity: u64,
}

impl IdentityProfile {
    pub fn unlabeled(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            label: DEFAULT_IDENTITY_LABEL.to_string(),
            staked: 0.0,
            activity: 0,
        }
    }
}
