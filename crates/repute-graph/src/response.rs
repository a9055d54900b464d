//! Typed `data` payloads. Every field is optional: indexers omit or null
//! fields freely, and a missing field must not fail the whole page.

use serde::Deserialize;
use serde_json::Value;

/// Standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Vec<GraphQlErrorItem>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlErrorItem {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TriplesData {
    #[serde(default)]
    pub triples: Vec<TripleRow>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TripleRow {
    /// String or number depending on the indexer version.
    pub id: Option<Value>,
    pub created_at: Option<String>,
    pub subject: Option<AtomRef>,
    pub predicate: Option<AtomRef>,
    pub object: Option<AtomRef>,
    pub vault: Option<VaultRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AtomRef {
    pub data: Option<String>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VaultRef {
    /// Wei amount, usually a decimal string.
    pub total_shares: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AtomsData {
    #[serde(default)]
    pub atoms: Vec<AtomRef>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AccountsData {
    #[serde(default)]
    pub accounts: Vec<AccountRow>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AccountRow {
    pub triples_aggregate: Option<AggregateRef>,
    pub deposits_sent_aggregate: Option<AggregateRef>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AggregateRef {
    pub aggregate: Option<CountRef>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CountRef {
    pub count: Option<u64>,
}

impl AggregateRef {
    pub fn count(&self) -> u64 {
        self.aggregate.as_ref().and_then(|a| a.count).unwrap_or(0)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PositionsData {
    #[serde(default)]
    pub positions: Vec<PositionRow>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PositionRow {
    pub total_redeem_assets_for_receiver: Option<Value>,
}
