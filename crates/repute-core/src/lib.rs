//! # repute-core
//!
//! Foundation crate for the Repute scoring system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod address;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ReputeConfig;
pub use errors::{ReputeError, ReputeResult};
pub use models::{
    Attestation, AttestationDirection, IdentityProfile, PredicateWeightClass, ReputationScore,
    Standing,
};
