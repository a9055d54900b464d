use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use repute_core::models::Attestation;
use repute_scoring::factors::stake;
use repute_scoring::ScoreEngine;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

fn arb_predicate() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("trusted".to_string()),
        Just("verified builder".to_string()),
        Just("vouches for".to_string()),
        Just("met".to_string()),
        Just("follows".to_string()),
        Just("scam".to_string()),
        Just("not trusted".to_string()),
        Just(String::new()),
        "\\PC{0,24}",
    ]
}

fn arb_attestation() -> impl Strategy<Value = Attestation> {
    (
        proptest::option::of(arb_predicate()),
        proptest::option::of(-30i64..2_000),
        proptest::option::of(prop_oneof![
            Just(f64::NAN),
            Just(-1.0),
            0.0f64..1e12,
        ]),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(predicate, age_days, stake, subject_is_target)| Attestation {
            predicate,
            created_at: age_days.map(|d| now() - Duration::days(d)),
            stake,
            subject_is_target,
            ..Default::default()
        })
}

proptest! {
    #[test]
    fn count_matches_input_length(list in prop::collection::vec(arb_attestation(), 0..60)) {
        let score = ScoreEngine::new().score("0xabc", &list, now());
        prop_assert_eq!(score.attestation_count as usize, list.len());
        prop_assert_eq!(
            (score.positive_count + score.negative_count + score.unknown_count) as usize,
            list.len()
        );
    }

    #[test]
    fn total_is_bounded_and_finite(list in prop::collection::vec(arb_attestation(), 0..300)) {
        let score = ScoreEngine::new().score("0xabc", &list, now());
        prop_assert!(score.total_score.is_finite());
        prop_assert!((-100.0..=100.0).contains(&score.total_score));
    }

    #[test]
    fn appending_a_scam_never_helps(list in prop::collection::vec(arb_attestation(), 0..40)) {
        let engine = ScoreEngine::new();
        let before = engine.score("0xabc", &list, now()).total_score;
        let mut more = list.clone();
        more.push(Attestation::with_predicate("scam"));
        let after = engine.score("0xabc", &more, now()).total_score;
        prop_assert!(after <= before);
    }

    #[test]
    fn stake_boost_is_monotone_and_bounded(a in 0.0f64..1e15, b in 0.0f64..1e15) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let boost_lo = stake::calculate(lo, 2.0, 0.25);
        let boost_hi = stake::calculate(hi, 2.0, 0.25);
        prop_assert!(boost_lo <= boost_hi);
        prop_assert!((1.0..=2.0).contains(&boost_lo));
        prop_assert!((1.0..=2.0).contains(&boost_hi));
    }
}
