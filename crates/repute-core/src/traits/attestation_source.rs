use crate::errors::FetchError;
use crate::models::{Attestation, IdentityProfile};

/// Where attestations come from.
pub trait IAttestationSource: Send + Sync {
    /// All attestations where `address` is the subject or the object.
    fn fetch_attestations(&self, address: &str) -> Result<Vec<Attestation>, FetchError>;

    /// Identity label, stake and activity for `address`.
    fn fetch_profile(&self, address: &str) -> Result<IdentityProfile, FetchError>;
}
