//! Graph rows → domain models.

use chrono::{DateTime, Utc};
use serde_json::Value;

use repute_core::address;
use repute_core::constants::WEI_PER_TOKEN;
use repute_core::models::Attestation;

use crate::response::{AtomRef, TripleRow};

/// Convert a wei amount (decimal string or number) to whole tokens.
///
/// Returns `None` for anything that is not a finite, non-negative number.
pub fn wei_to_tokens(value: &Value) -> Option<f64> {
    let wei = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (wei.is_finite() && wei >= 0.0).then(|| wei / WEI_PER_TOKEN)
}

/// Map a triple to an attestation seen from `address`.
///
/// The side that matches `address` decides the direction; the other side is
/// the counterparty. An unparseable timestamp or stake becomes `None`.
pub fn triple_to_attestation(row: &TripleRow, address: &str) -> Attestation {
    let target = address::normalize(address);
    let matches = |side: &Option<AtomRef>| {
        side.as_ref()
            .and_then(|atom| atom.data.as_deref())
            .is_some_and(|data| address::normalize(data) == target)
    };

    let (subject_is_target, counterparty) = if matches(&row.subject) {
        (Some(true), atom_data(&row.object))
    } else if matches(&row.object) {
        (Some(false), atom_data(&row.subject))
    } else {
        (None, None)
    };

    Attestation {
        id: row.id.as_ref().and_then(id_string),
        predicate: row
            .predicate
            .as_ref()
            .and_then(|p| p.label.clone().or_else(|| p.data.clone())),
        subject_is_target,
        counterparty,
        created_at: row.created_at.as_deref().and_then(parse_timestamp),
        stake: row
            .vault
            .as_ref()
            .and_then(|v| v.total_shares.as_ref())
            .and_then(wei_to_tokens),
        is_vouch: None,
        is_builder: None,
    }
}

fn atom_data(side: &Option<AtomRef>) -> Option<String> {
    side.as_ref().and_then(|atom| atom.data.clone())
}

fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// RFC 3339, or the offset-less form some indexers emit (assumed UTC).
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
