//! # repute-scoring
//!
//! Attestation-weighted reputation scoring.
//! Predicates are classified into weight classes by keyword, then each
//! attestation is weighted by time decay, stake conviction and direction.
//! Vouch, builder and activity bonuses are added and the total is clamped.

pub mod cache;
pub mod classifier;
pub mod engine;
pub mod factors;
pub mod formula;
pub mod keywords;

pub use cache::ScoreCache;
pub use classifier::{classify, Classifier};
pub use engine::{ScoreEngine, ScoreRequest};
pub use factors::ScoringContext;
