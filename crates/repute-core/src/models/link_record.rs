use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A nickname linked to a wallet address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub nickname: String,
    pub wallet: String,
    pub linked_at: DateTime<Utc>,
}
