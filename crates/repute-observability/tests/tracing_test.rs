use repute_core::config::ObservabilityConfig;
use repute_observability::tracing_setup::{events, spans};
use repute_observability::{fetch_span, registry_span, score_span, summary_span};

#[test]
fn second_init_is_rejected_without_panicking() {
    let _ = repute_observability::init_tracing_with_filter("debug");
    // A global subscriber now exists, whichever test installed it.
    assert!(!repute_observability::init_tracing(&ObservabilityConfig::default()));
}

#[test]
fn filter_builds_from_any_level_string() {
    for level in ["warn", "repute_graph=debug,info", "not a [valid directive"] {
        let config = ObservabilityConfig {
            log_level: level.into(),
            json: false,
        };
        let _ = repute_observability::build_filter(&config);
    }
}

#[test]
fn spans_and_events_can_be_emitted() {
    let _ = repute_observability::init_tracing_with_filter("trace");
    let span = score_span!("0xabc", 3);
    let _guard = span.enter();
    let _f = fetch_span!("0xabc").entered();
    let _s = summary_span!("template").entered();
    let _r = registry_span!("link").entered();
    events::fetch_degraded("0xabc", &"timeout");
    events::summary_fallback(&"empty response");
    events::score_computed("0xabc", 1.5, 2);
    assert_eq!(spans::names::SCORE, "repute.score");
}
