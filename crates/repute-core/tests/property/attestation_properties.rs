use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

use repute_core::models::Attestation;

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        "\\PC{0,16}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map(
                prop_oneof![
                    Just("predicate".to_string()),
                    Just("createdAt".to_string()),
                    Just("stake".to_string()),
                    Just("isVouch".to_string()),
                    "[a-z_]{1,12}",
                ],
                inner,
                0..6
            )
            .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

proptest! {
    #[test]
    fn from_value_is_total(value in arb_json()) {
        let attestation = Attestation::from_value(&value);
        if !value.is_object() {
            prop_assert_eq!(attestation.clone(), Attestation::default());
        }
        let stake = attestation.effective_stake();
        prop_assert!(stake.is_finite() && stake >= 0.0);
    }

    #[test]
    fn numeric_and_string_stakes_agree(stake in 0.0f64..1e15) {
        let from_number = Attestation::from_value(&json!({ "stake": stake }));
        let from_string = Attestation::from_value(&json!({ "stakeAmount": stake.to_string() }));
        prop_assert_eq!(from_number.stake, Some(stake));
        prop_assert_eq!(from_string.stake, Some(stake));
    }

    #[test]
    fn epoch_second_timestamps_are_accepted(secs in 0i64..4_102_444_800) {
        let attestation = Attestation::from_value(&json!({ "created_at": secs }));
        prop_assert_eq!(attestation.created_at, Utc.timestamp_opt(secs, 0).single());
    }
}
