/// Repute system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of wei in one TRUST token.
pub const WEI_PER_TOKEN: f64 = 1e18;

/// Label used when the knowledge graph has no atom for an address.
pub const DEFAULT_IDENTITY_LABEL: &str = "Intuition Member";

/// Score reported for a subject with no attestations.
pub const NEUTRAL_SCORE: f64 = 0.0;
