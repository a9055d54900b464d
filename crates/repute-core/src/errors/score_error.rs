/// Score engine errors.
///
/// The engine normalizes every per-attestation anomaly; the only failure is a
/// caller handing it something that is not a collection at all.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoreError {
    #[error("invalid input: expected an array of attestations, got {found}")]
    InvalidInput { found: String },
}
