use chrono::{DateTime, Duration, Utc};

/// Step time decay.
///
/// Attestations strictly older than `decay_after_days` get `stale_multiplier`;
/// everything else, including an age of exactly `decay_after_days`, a missing
/// timestamp or a timestamp in the future, gets 1.0. A window too large to
/// represent never decays.
pub fn calculate(
    created_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    decay_after_days: i64,
    stale_multiplier: f64,
) -> f64 {
    let created_at = match created_at {
        Some(ts) => ts,
        None => return 1.0, // Age undefined, no decay.
    };

    match Duration::try_days(decay_after_days) {
        Some(window) if now - created_at > window => stale_multiplier,
        _ => 1.0,
    }
}
