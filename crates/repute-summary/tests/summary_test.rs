use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{TimeZone, Utc};

use repute_core::config::SummaryConfig;
use repute_core::errors::SummaryError;
use repute_core::models::{IdentityProfile, ReputationScore, SummaryInput};
use repute_core::traits::ISummaryRenderer;
use repute_summary::{LlmRenderer, SummaryService, SummarySource, TemplateRenderer};

fn input(with_profile: bool) -> SummaryInput {
    let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let mut score = ReputationScore::neutral("0xabc", at);
    score.total_score = 1.5;
    score.attestation_count = 2;
    score.positive_count = 1;
    score.negative_count = 1;
    score.raw_weighted_sum = 0.5;
    score.activity_bonus = 1.0;

    SummaryInput {
        display_name: "alice".into(),
        score,
        profile: with_profile.then(|| IdentityProfile {
            address: "0xabc".into(),
            label: "alice.eth".into(),
            staked: 2215.91,
            activity: 45,
        }),
    }
}

struct Scripted {
    reply: Result<String, ()>,
    calls: Arc<AtomicUsize>,
}

impl ISummaryRenderer for Scripted {
    fn render(&self, _input: &SummaryInput) -> Result<String, SummaryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone().map_err(|_| SummaryError::Llm {
            message: "boom".into(),
        })
    }
}

#[test]
fn template_without_profile() {
    let text = TemplateRenderer::new().render(&input(false)).unwrap();
    assert_eq!(
        text,
        "Reputation: alice\n\
         Score: +1.50 (Emerging)\n\
         Attestations: 2 (1 positive, 1 negative, 0 unknown)\n\
         Breakdown: weighted +0.50, vouches +0.00 (0), builder +0.00, activity +1.00"
    );
}

#[test]
fn template_with_profile() {
    let text = TemplateRenderer::new().render(&input(true)).unwrap();
    assert!(text.contains("Identity: alice.eth"));
    assert!(text.contains("Network Activity: 45 Actions"));
    assert!(text.ends_with("TRUST Staked: 2,215.91"));
}

#[test]
fn template_shows_flagged_standing() {
    let mut i = input(false);
    i.score.total_score = -3.0;
    assert!(TemplateRenderer::new().render_text(&i).contains("Score: -3.00 (Flagged)"));
}

#[test]
fn llm_used_when_preferred() {
    let calls = Arc::new(AtomicUsize::new(0));
    let service = SummaryService::with_llm(Box::new(Scripted {
        reply: Ok("Alice is trusted.".into()),
        calls: Arc::clone(&calls),
    }));
    let out = service.render(&input(true), true);
    assert_eq!(out.source, SummarySource::Llm);
    assert_eq!(out.text, "Alice is trusted.");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn llm_skipped_when_not_preferred() {
    let calls = Arc::new(AtomicUsize::new(0));
    let service = SummaryService::with_llm(Box::new(Scripted {
        reply: Ok("unused".into()),
        calls: Arc::clone(&calls),
    }));
    assert_eq!(service.render(&input(true), false).source, SummarySource::Template);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn llm_failure_falls_back_to_template() {
    let service = SummaryService::with_llm(Box::new(Scripted {
        reply: Err(()),
        calls: Arc::new(AtomicUsize::new(0)),
    }));
    let out = service.render(&input(false), true);
    assert_eq!(out.source, SummarySource::Template);
    assert!(out.text.starts_with("Reputation: alice"));
}

#[test]
fn enabled_without_endpoint_degrades_to_template() {
    let config = SummaryConfig {
        llm_enabled: true,
        ..Default::default()
    };
    let service = SummaryService::from_config(&config);
    assert!(!service.has_llm());
}

#[test]
fn request_body_carries_model_and_facts() {
    let config = SummaryConfig {
        llm_enabled: true,
        llm_endpoint: Some("http://127.0.0.1:9/v1/chat/completions".into()),
        llm_model: "tiny".into(),
        llm_max_tokens: 50,
        ..Default::default()
    };
    let renderer = LlmRenderer::from_config(&config).unwrap();
    let body = renderer.request_body(&input(true)).unwrap();
    assert_eq!(body["model"], "tiny");
    assert_eq!(body["max_tokens"], 50);
    let user = body["messages"][1]["content"].as_str().unwrap();
    assert!(user.contains("alice"));
    assert!(user.contains("\"total_score\": 1.5"));
}
