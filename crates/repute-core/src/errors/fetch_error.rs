/// Attestation fetcher errors.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {message}")]
    Network { message: String },

    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("unexpected HTTP status {status}")]
    Http { status: u16 },

    #[error("GraphQL error: {message}")]
    GraphQl { message: String },

    #[error("malformed response: {reason}")]
    MalformedResponse { reason: String },
}
