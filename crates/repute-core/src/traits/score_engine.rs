use chrono::{DateTime, Utc};

use crate::models::{Attestation, ReputationScore};

/// Turns a set of attestations into a reputation score.
///
/// Implementations are pure: no I/O, no state carried between calls.
pub trait IScoreEngine: Send + Sync {
    fn score(&self, subject: &str, attestations: &[Attestation], now: DateTime<Utc>)
        -> ReputationScore;

    /// Score at the current wall-clock time.
    fn score_now(&self, subject: &str, attestations: &[Attestation]) -> ReputationScore {
        self.score(subject, attestations, Utc::now())
    }
}
