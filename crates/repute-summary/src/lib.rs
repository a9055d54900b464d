//! # repute-summary
//!
//! Turns a [`SummaryInput`](repute_core::models::SummaryInput) into text.
//! The template renderer is deterministic and always available; the LLM
//! renderer is optional and falls back to the template on failure.

pub mod format;
pub mod llm;
pub mod service;
pub mod template;

pub use llm::LlmRenderer;
pub use service::{RenderedSummary, SummaryService, SummarySource};
pub use template::TemplateRenderer;
