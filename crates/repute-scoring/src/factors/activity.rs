use std::collections::HashSet;

use repute_core::address;
use repute_core::config::ActivityBasis;
use repute_core::models::Attestation;

/// Activity bonus: `min(cap, units × per_unit)`.
///
/// Units are attestations, or distinct counterparties depending on `basis`.
/// Attestations without a counterparty each count as their own anonymous
/// counterparty.
pub fn calculate(
    attestations: &[Attestation],
    basis: ActivityBasis,
    per_unit: f64,
    cap: f64,
) -> f64 {
    let units = count_units(attestations, basis);
    (units as f64 * per_unit).min(cap).max(0.0)
}

/// Number of units the activity bonus is computed from.
pub fn count_units(attestations: &[Attestation], basis: ActivityBasis) -> usize {
    match basis {
        ActivityBasis::Attestations => attestations.len(),
        ActivityBasis::DistinctCounterparties => {
            let mut named = HashSet::new();
            let mut anonymous = 0usize;
            for a in attestations {
                match a.counterparty.as_deref().map(address::normalize) {
                    Some(cp) if !cp.is_empty() => {
                        named.insert(cp);
                    }
                    _ => anonymous += 1,
                }
            }
            named.len() + anonymous
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn many(n: usize) -> Vec<Attestation> {
        (0..n).map(|_| Attestation::with_predicate("met")).collect()
    }

    #[test]
    fn proportional_then_flat() {
        assert_eq!(calculate(&many(0), ActivityBasis::Attestations, 0.5, 5.0), 0.0);
        assert_eq!(calculate(&many(2), ActivityBasis::Attestations, 0.5, 5.0), 1.0);
        assert_eq!(calculate(&many(10), ActivityBasis::Attestations, 0.5, 5.0), 5.0);
        assert_eq!(calculate(&many(500), ActivityBasis::Attestations, 0.5, 5.0), 5.0);
    }

    #[test]
    fn distinct_counterparties_dedupes_case_insensitively() {
        let list = vec![
            Attestation::with_predicate("met").toward("0xAAA"),
            Attestation::with_predicate("trusted").toward("0xaaa"),
            Attestation::with_predicate("met").toward("0xbbb"),
            Attestation::with_predicate("met"),
            Attestation::with_predicate("met"),
        ];
        assert_eq!(count_units(&list, ActivityBasis::DistinctCounterparties), 4);
        assert_eq!(count_units(&list, ActivityBasis::Attestations), 5);
    }
}
