pub mod activity;
pub mod direction;
pub mod stake;
pub mod temporal;

use chrono::{DateTime, Utc};

/// Context shared by every factor within one scoring call.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext {
    /// Evaluation time used for decay.
    pub now: DateTime<Utc>,
}

impl ScoringContext {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}
