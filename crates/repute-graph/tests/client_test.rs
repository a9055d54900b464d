use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::{json, Value};

use repute_core::config::GraphConfig;
use repute_core::errors::FetchError;
use repute_core::traits::IAttestationSource;
use repute_graph::{GraphClient, GraphTransport};

const ME: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

/// Replays canned `data` payloads and records every call.
struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<Value, FetchError>>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl ScriptedTransport {
    fn new(replies: Vec<Result<Value, FetchError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

impl GraphTransport for ScriptedTransport {
    fn execute(&self, query: &str, variables: Value) -> Result<Value, FetchError> {
        self.calls.lock().unwrap().push((query.to_string(), variables));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected extra query"))
    }
}

fn config(page_size: u32, max_offset: u32) -> GraphConfig {
    GraphConfig {
        page_size,
        max_offset,
        ..Default::default()
    }
}

fn triple(i: usize) -> Value {
    json!({
        "id": i.to_string(),
        "created_at": "2024-05-01T00:00:00Z",
        "subject": { "data": ME.to_lowercase(), "label": "me" },
        "predicate": { "label": "trusts" },
        "object": { "data": format!("0x{i:040x}"), "label": "someone" },
        "vault": { "total_shares": "1000000000000000000" }
    })
}

fn triples_page(range: std::ops::Range<usize>) -> Result<Value, FetchError> {
    Ok(json!({ "triples": range.map(triple).collect::<Vec<_>>() }))
}

#[test]
fn pages_until_short_page() {
    let transport = ScriptedTransport::new(vec![
        triples_page(0..3),
        triples_page(3..6),
        triples_page(6..7),
    ]);
    let client = GraphClient::with_transport(transport, &config(3, 1_000));
    let list = client.fetch_attestations(ME).unwrap();

    assert_eq!(list.len(), 7);
    assert_eq!(list[0].subject_is_target, Some(true));
    assert_eq!(list[0].stake, Some(1.0));
    assert_eq!(list[6].id.as_deref(), Some("6"));

    let calls = client.transport().calls();
    assert_eq!(calls.len(), 3);
    let offsets: Vec<_> = calls.iter().map(|(_, v)| v["offset"].clone()).collect();
    assert_eq!(offsets, vec![json!(0), json!(3), json!(6)]);
    // Address is sent lowercased, as a variable.
    assert_eq!(calls[0].1["address"], json!(ME.to_lowercase()));
    assert!(!calls[0].0.contains(&ME.to_lowercase()));
}

#[test]
fn stops_at_max_offset() {
    let transport = ScriptedTransport::new(vec![
        triples_page(0..2),
        triples_page(2..4),
        triples_page(4..6),
    ]);
    let client = GraphClient::with_transport(transport, &config(2, 4));
    let list = client.fetch_attestations(ME).unwrap();
    assert_eq!(list.len(), 6);
    assert_eq!(client.transport().calls().len(), 3);
}

#[test]
fn empty_history_is_one_query() {
    let transport = ScriptedTransport::new(vec![triples_page(0..0)]);
    let client = GraphClient::with_transport(transport, &config(20, 1_000));
    assert!(client.fetch_attestations(ME).unwrap().is_empty());
}

#[test]
fn transport_errors_propagate() {
    let transport = ScriptedTransport::new(vec![Err(FetchError::Timeout { timeout_secs: 10 })]);
    let client = GraphClient::with_transport(transport, &config(20, 1_000));
    assert!(matches!(
        client.fetch_attestations(ME),
        Err(FetchError::Timeout { timeout_secs: 10 })
    ));
}

#[test]
fn wrong_shape_is_malformed() {
    let transport = ScriptedTransport::new(vec![Ok(json!({ "triples": "nope" }))]);
    let client = GraphClient::with_transport(transport, &config(20, 1_000));
    assert!(matches!(
        client.fetch_attestations(ME),
        Err(FetchError::MalformedResponse { .. })
    ));
}

#[test]
fn profile_combines_three_lookups() {
    let transport = ScriptedTransport::new(vec![
        Ok(json!({ "atoms": [{ "data": ME, "label": "alice.eth" }] })),
        Ok(json!({ "accounts": [{
            "triples_aggregate": { "aggregate": { "count": 30 } },
            "deposits_sent_aggregate": { "aggregate": { "count": 15 } }
        }] })),
        Ok(json!({ "positions": [
            { "total_redeem_assets_for_receiver": "2000000000000000000000" },
            { "total_redeem_assets_for_receiver": "215910000000000000000" }
        ] })),
    ]);
    let client = GraphClient::with_transport(transport, &config(20, 1_000));
    let profile = client.fetch_profile(ME).unwrap();

    assert_eq!(profile.address, ME.to_lowercase());
    assert_eq!(profile.label, "alice.eth");
    assert_eq!(profile.activity, 45);
    assert!((profile.staked - 2215.91).abs() < 1e-6);
}

#[test]
fn profile_defaults_for_unknown_account() {
    let transport = ScriptedTransport::new(vec![
        Ok(json!({ "atoms": [] })),
        Ok(json!({ "accounts": [] })),
        Ok(json!({ "positions": [] })),
    ]);
    let client = GraphClient::with_transport(transport, &config(20, 1_000));
    let profile = client.fetch_profile(ME).unwrap();
    assert_eq!(profile.label, "Intuition Member");
    assert_eq!(profile.activity, 0);
    assert_eq!(profile.staked, 0.0);
}

#[test]
fn staked_sums_every_page_and_skips_garbage() {
    let page = |n: usize| {
        Ok(json!({
            "positions": (0..n)
                .map(|_| json!({ "total_redeem_assets_for_receiver": "1000000000000000000" }))
                .collect::<Vec<_>>()
        }))
    };
    let transport = ScriptedTransport::new(vec![
        page(2),
        Ok(json!({ "positions": [
            { "total_redeem_assets_for_receiver": null },
            { "total_redeem_assets_for_receiver": "3000000000000000000" }
        ] })),
        page(1),
    ]);
    let client = GraphClient::with_transport(transport, &config(2, 1_000));
    assert!((client.fetch_staked(ME).unwrap() - 6.0).abs() < 1e-9);
}
