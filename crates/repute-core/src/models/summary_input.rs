use serde::{Deserialize, Serialize};

use super::{IdentityProfile, ReputationScore};

/// Everything a summary renderer may use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryInput {
    /// Nickname or abbreviated address shown in the title.
    pub display_name: String,
    pub score: ReputationScore,
    pub profile: Option<IdentityProfile>,
}
