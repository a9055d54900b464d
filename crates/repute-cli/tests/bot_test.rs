use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};

use repute_cli::app::App;
use repute_cli::bot::{handle_line, run};
use repute_core::config::ReputeConfig;
use repute_core::errors::{FetchError, ReputeError};
use repute_core::models::{Attestation, IdentityProfile};
use repute_core::traits::IAttestationSource;
use repute_registry::LinkRegistry;

const WALLET: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

/// Serves a fixed history, or fails every fetch when `fail` is set.
struct StubSource {
    attestations: Vec<Attestation>,
    fail: bool,
    fetches: Arc<AtomicUsize>,
}

impl IAttestationSource for StubSource {
    fn fetch_attestations(&self, _address: &str) -> Result<Vec<Attestation>, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(FetchError::Timeout { timeout_secs: 10 });
        }
        Ok(self.attestations.clone())
    }

    fn fetch_profile(&self, address: &str) -> Result<IdentityProfile, FetchError> {
        if self.fail {
            return Err(FetchError::Timeout { timeout_secs: 10 });
        }
        Ok(IdentityProfile {
            address: address.to_lowercase(),
            label: "alice.eth".into(),
            staked: 2215.91,
            activity: 45,
        })
    }
}

fn app_with(attestations: Vec<Attestation>, fail: bool) -> (App, Arc<AtomicUsize>) {
    let fetches = Arc::new(AtomicUsize::new(0));
    let source = StubSource {
        attestations,
        fail,
        fetches: Arc::clone(&fetches),
    };
    let app = App::with_parts(
        ReputeConfig::default(),
        Box::new(source),
        Box::new(LinkRegistry::open_in_memory().unwrap()),
    )
    .unwrap();
    (app, fetches)
}

fn trusted_history() -> Vec<Attestation> {
    vec![Attestation::with_predicate("trusted").created(now() - Duration::days(10))]
}

fn reply(app: &App, line: &str) -> String {
    handle_line(app, "!", line, now()).expect("expected a reply")
}

#[test]
fn ignores_chatter() {
    let (app, fetches) = app_with(trusted_history(), false);
    assert!(handle_line(&app, "!", "hello there", now()).is_none());
    assert!(handle_line(&app, "!", "!", now()).is_none());
    assert!(handle_line(&app, "!", "", now()).is_none());
    assert_eq!(fetches.load(Ordering::SeqCst), 0);
}

#[test]
fn help_lists_commands() {
    let (app, _) = app_with(Vec::new(), false);
    let text = reply(&app, "!help");
    for cmd in ["!link", "!rep", "!score", "!help"] {
        assert!(text.contains(cmd), "missing {cmd} in {text}");
    }
}

#[test]
fn usage_and_unknown_commands_reply() {
    let (app, _) = app_with(Vec::new(), false);
    assert_eq!(reply(&app, "!rep"), "Usage: !rep <nickname>");
    assert_eq!(reply(&app, "!link onlyone"), "Usage: !link <wallet> <nickname>");
    assert!(reply(&app, "!dance").contains("Unknown command `dance`"));
}

#[test]
fn link_then_rep() {
    let (app, _) = app_with(trusted_history(), false);
    assert_eq!(
        reply(&app, &format!("!link {WALLET} Alice")),
        "Success: alice is now linked."
    );

    let text = reply(&app, "!rep ALICE");
    assert!(text.starts_with("Reputation: alice"), "{text}");
    assert!(text.contains("Attestations: 1 (1 positive, 0 negative, 0 unknown)"));
    assert!(text.contains("Identity: alice.eth"));
    assert!(text.contains("TRUST Staked: 2,215.91"));
    assert!(!text.contains("score may be incomplete"));
}

#[test]
fn link_rejects_bad_wallet() {
    let (app, _) = app_with(Vec::new(), false);
    assert_eq!(
        reply(&app, "!link 0x1234 alice"),
        "The wallet address is invalid."
    );
}

#[test]
fn rep_for_unknown_nickname() {
    let (app, _) = app_with(Vec::new(), false);
    assert_eq!(
        reply(&app, "!rep nobody"),
        "Nickname not found. Link it first with !link."
    );
}

#[test]
fn score_by_address_uses_abbreviation() {
    let (app, _) = app_with(trusted_history(), false);
    let text = reply(&app, &format!("!score {WALLET}"));
    assert!(text.starts_with("Reputation: 0x5290…9ee7"), "{text}");
    assert!(!text.contains("Identity:"));
}

#[test]
fn score_rejects_non_address() {
    let (app, fetches) = app_with(trusted_history(), false);
    assert_eq!(reply(&app, "!score alice"), "The wallet address is invalid.");
    assert_eq!(fetches.load(Ordering::SeqCst), 0);
}

#[test]
fn failed_fetch_degrades_to_neutral() {
    let (app, fetches) = app_with(trusted_history(), true);
    app.link("alice", WALLET).unwrap();

    let report = app.rep("alice", now()).unwrap();
    assert!(report.degraded);
    assert_eq!(report.score.total_score, 0.0);
    assert_eq!(report.score.attestation_count, 0);
    assert!(report.profile.is_none());

    // Neutral fallbacks are not cached.
    app.rep("alice", now()).unwrap();
    assert_eq!(fetches.load(Ordering::SeqCst), 2);

    let text = reply(&app, "!rep alice");
    assert!(text.contains("score may be incomplete"));
}

#[test]
fn failed_fetch_is_flagged_on_score_command() {
    let (app, _) = app_with(trusted_history(), true);
    let text = reply(&app, &format!("!score {WALLET}"));
    assert!(text.contains("Score: +0.00 (Neutral)"), "{text}");
    assert!(text.contains("attestations unavailable"), "{text}");

    let (healthy, _) = app_with(trusted_history(), false);
    let text = reply(&healthy, &format!("!score {WALLET}"));
    assert!(!text.contains("attestations unavailable"), "{text}");
}

#[test]
fn failed_fetch_is_flagged_per_address() {
    let (app, _) = app_with(trusted_history(), true);
    let scored = app.score_address(WALLET, now());
    assert!(scored.degraded);
    assert!(scored.fetch_error.as_deref().unwrap().contains("timed out"));

    let wallets = vec![WALLET.to_string(), format!("0x{:040x}", 7)];
    let batch = app.score_addresses(&wallets, now());
    assert_eq!(batch.len(), 2);
    assert!(batch.iter().all(|s| s.degraded && s.score.total_score == 0.0));

    let json = serde_json::to_value(&batch[0]).unwrap();
    assert_eq!(json["degraded"], serde_json::json!(true));
    assert_eq!(json["total_score"], serde_json::json!(0.0));
    assert!(json["fetch_error"].is_string());
}

#[test]
fn healthy_scores_serialize_without_fetch_error() {
    let (app, _) = app_with(trusted_history(), false);
    let json = serde_json::to_value(app.score_address(WALLET, now())).unwrap();
    assert_eq!(json["degraded"], serde_json::json!(false));
    assert!(json.get("fetch_error").is_none());
    assert_eq!(json["attestation_count"], serde_json::json!(1));
}

#[test]
fn file_backed_registry_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = ReputeConfig::default();
    config.registry.db_path = dir.path().join("links.db").to_string_lossy().into_owned();

    {
        let app = App::from_config(config.clone()).unwrap();
        app.link("alice", WALLET).unwrap();
    }
    let app = App::from_config(config).unwrap();
    let links = app.links().unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].nickname, "alice");
    assert_eq!(links[0].wallet, WALLET);
}

#[test]
fn scores_are_cached_within_a_bucket() {
    let (app, fetches) = app_with(trusted_history(), false);
    let first = app.score_address(WALLET, now());
    let second = app.score_address(&WALLET.to_lowercase(), now());
    assert!(!first.degraded);
    assert_eq!(first, second);
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}

#[test]
fn batch_scores_every_wallet() {
    let (app, fetches) = app_with(trusted_history(), false);
    let wallets = vec![WALLET.to_string(), format!("0x{:040x}", 7)];
    let scores = app.score_addresses(&wallets, now());
    assert_eq!(scores.len(), 2);
    assert!(scores.iter().all(|s| s.score.attestation_count == 1 && !s.degraded));
    assert_eq!(fetches.load(Ordering::SeqCst), 2);
}

#[test]
fn score_json_rejects_non_arrays() {
    let (app, _) = app_with(Vec::new(), false);
    let err = app
        .score_json("subject", &serde_json::json!({ "not": "a list" }), now())
        .unwrap_err();
    assert!(matches!(err, ReputeError::Score(_)));
}

#[test]
fn unlink_and_list() {
    let (app, _) = app_with(Vec::new(), false);
    app.link("bob", WALLET).unwrap();
    app.link("alice", WALLET).unwrap();
    let names: Vec<_> = app.links().unwrap().into_iter().map(|r| r.nickname).collect();
    assert_eq!(names, vec!["alice", "bob"]);

    assert!(app.unlink("Bob").unwrap());
    assert!(!app.unlink("bob").unwrap());
    assert_eq!(app.links().unwrap().len(), 1);
}

#[test]
fn run_replies_line_by_line() {
    let (app, _) = app_with(Vec::new(), false);
    let input = b"just chatting\n!help\n!rep ghost\n" as &[u8];
    let mut output = Vec::new();
    run(&app, "!", input, &mut output).unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Commands:"));
    assert!(text.contains("Nickname not found."));
    assert!(!text.contains("just chatting"));
}

#[test]
fn custom_prefix() {
    let (app, _) = app_with(Vec::new(), false);
    assert!(handle_line(&app, "/", "!help", now()).is_none());
    assert!(handle_line(&app, "/", "/help", now())
        .unwrap()
        .contains("/score <address>"));
}
