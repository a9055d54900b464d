/// Summary formatter errors.
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("text generation is disabled")]
    Disabled,

    #[error("text generation failed: {message}")]
    Llm { message: String },

    #[error("text generation returned no content")]
    EmptyResponse,
}
