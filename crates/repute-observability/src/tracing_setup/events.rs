//! Structured log events for degraded paths and state changes.

/// Attestations could not be fetched; scoring continues on an empty list.
pub fn fetch_degraded(address: &str, error: &dyn std::fmt::Display) {
    tracing::warn!(
        event = "fetch_degraded",
        address = %address,
        error = %error,
        "attestation fetch failed, scoring with no attestations"
    );
}

/// The profile lookup failed; the summary omits identity details.
pub fn profile_unavailable(address: &str, error: &dyn std::fmt::Display) {
    tracing::warn!(
        event = "profile_unavailable",
        address = %address,
        error = %error,
        "identity profile unavailable"
    );
}

/// The LLM renderer failed and the template was used instead.
pub fn summary_fallback(error: &dyn std::fmt::Display) {
    tracing::warn!(
        event = "summary_fallback",
        error = %error,
        "llm summary failed, using template"
    );
}

/// A nickname was linked to a wallet.
pub fn link_changed(nickname: &str, wallet: &str) {
    tracing::info!(
        event = "link_changed",
        nickname = %nickname,
        wallet = %wallet,
        "nickname linked"
    );
}

/// A score was computed for a subject.
pub fn score_computed(subject: &str, total: f64, attestations: u64) {
    tracing::info!(
        event = "score_computed",
        subject = %subject,
        total = total,
        attestations = attestations,
        "score computed"
    );
}
