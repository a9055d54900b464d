use repute_core::config::ScoringConfig;
use repute_core::models::{Attestation, AttestationContribution, ReputationScore};

use crate::classifier::{self, Classifier};
use crate::factors::{self, ScoringContext};

/// Per-attestation weighting formula.
///
/// ```text
/// weightedValue = baseWeight(class)
///   × temporalDecay
///   × stakeBoost
///   × directionMultiplier
/// ```
pub fn contribution(
    attestation: &Attestation,
    classifier: &Classifier,
    config: &ScoringConfig,
    ctx: &ScoringContext,
) -> AttestationContribution {
    let predicate = attestation.predicate_text();
    let class = classifier.classify(predicate);
    let base = class.weight();

    let decay = factors::temporal::calculate(
        attestation.created_at,
        ctx.now,
        config.decay_after_days,
        config.decay_multiplier,
    );
    let stake = factors::stake::calculate(
        attestation.effective_stake(),
        config.stake_boost_ceiling,
        config.stake_boost_coefficient,
    );
    let direction = factors::direction::calculate(
        attestation.direction(),
        config.given_weight,
        config.received_weight,
    );

    AttestationContribution {
        attestation_id: attestation.id.clone(),
        predicate: predicate.to_string(),
        class,
        base_weight: base,
        decay_multiplier: decay,
        stake_boost: stake,
        direction_multiplier: direction,
        weighted_value: base * decay * stake * direction,
        is_vouch: attestation
            .is_vouch
            .unwrap_or_else(|| classifier::is_vouch_predicate(predicate)),
        is_builder: attestation
            .is_builder
            .unwrap_or_else(|| classifier::is_builder_predicate(predicate)),
    }
}

/// Fold contributions into the final score.
///
/// Vouches are summed per occurrence; builder status is a flag that pays
/// out once no matter how many attestations raise it.
pub fn aggregate(
    subject: &str,
    attestations: &[Attestation],
    contributions: &[AttestationContribution],
    config: &ScoringConfig,
    ctx: &ScoringContext,
) -> ReputationScore {
    let mut score = ReputationScore::neutral(subject, ctx.now);
    if attestations.is_empty() {
        return score;
    }

    let mut builder_detected = false;
    for c in contributions {
        score.raw_weighted_sum += c.weighted_value;
        if c.weighted_value > 0.0 {
            score.positive_count += 1;
        } else if c.weighted_value < 0.0 {
            score.negative_count += 1;
        } else {
            score.unknown_count += 1;
        }
        if c.is_vouch {
            score.vouch_count += 1;
        }
        builder_detected |= c.is_builder;
    }

    score.attestation_count = attestations.len() as u64;
    score.vouch_bonus = score.vouch_count as f64 * config.vouch_bonus;
    score.builder_detected = builder_detected;
    score.builder_bonus = if builder_detected {
        config.builder_bonus
    } else {
        0.0
    };
    score.activity_bonus = factors::activity::calculate(
        attestations,
        config.activity_basis,
        config.activity_per_unit,
        config.activity_cap,
    );

    let total = score.raw_weighted_sum + score.total_bonus();
    score.total_score = total.clamp(config.min_score, config.max_score);
    score
}
