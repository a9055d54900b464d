use crate::errors::SummaryError;
use crate::models::SummaryInput;

/// Renders a score as human-readable text.
pub trait ISummaryRenderer: Send + Sync {
    fn render(&self, input: &SummaryInput) -> Result<String, SummaryError>;
}
