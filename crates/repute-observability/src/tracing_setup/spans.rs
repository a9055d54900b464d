//! Span definitions per operation: scoring, fetching, summarizing, registry.

/// Create a scoring span.
#[macro_export]
macro_rules! score_span {
    ($subject:expr, $count:expr) => {
        tracing::info_span!("repute.score", subject = %$subject, attestations = $count)
    };
}

/// Create a fetch span.
#[macro_export]
macro_rules! fetch_span {
    ($address:expr) => {
        tracing::info_span!("repute.fetch", address = %$address)
    };
}

/// Create a summary span.
#[macro_export]
macro_rules! summary_span {
    ($renderer:expr) => {
        tracing::info_span!("repute.summary", renderer = %$renderer)
    };
}

/// Create a registry span.
#[macro_export]
macro_rules! registry_span {
    ($op:expr) => {
        tracing::debug_span!("repute.registry", op = %$op)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SCORE: &str = "repute.score";
    pub const FETCH: &str = "repute.fetch";
    pub const SUMMARY: &str = "repute.summary";
    pub const REGISTRY: &str = "repute.registry";
}
