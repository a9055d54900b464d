//! SummaryService: LLM when available and asked for, template otherwise.

use repute_core::config::SummaryConfig;
use repute_core::models::SummaryInput;
use repute_core::traits::ISummaryRenderer;
use repute_observability::summary_span;
use repute_observability::tracing_setup::events;

use crate::llm::LlmRenderer;
use crate::template::TemplateRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummarySource {
    Template,
    Llm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSummary {
    pub text: String,
    pub source: SummarySource,
}

pub struct SummaryService {
    template: TemplateRenderer,
    llm: Option<Box<dyn ISummaryRenderer>>,
}

impl SummaryService {
    pub fn template_only() -> Self {
        Self {
            template: TemplateRenderer::new(),
            llm: None,
        }
    }

    /// Service with an LLM renderer when the config enables one.
    ///
    /// A misconfigured LLM is logged and left out; the template still works.
    pub fn from_config(config: &SummaryConfig) -> Self {
        if !config.llm_enabled {
            return Self::template_only();
        }
        match LlmRenderer::from_config(config) {
            Ok(renderer) => Self::with_llm(Box::new(renderer)),
            Err(e) => {
                tracing::warn!(error = %e, "llm renderer unavailable");
                Self::template_only()
            }
        }
    }

    pub fn with_llm(renderer: Box<dyn ISummaryRenderer>) -> Self {
        Self {
            template: TemplateRenderer::new(),
            llm: Some(renderer),
        }
    }

    pub fn has_llm(&self) -> bool {
        self.llm.is_some()
    }

    /// Render a summary. Never fails: any LLM error falls back to the template.
    pub fn render(&self, input: &SummaryInput, prefer_llm: bool) -> RenderedSummary {
        if prefer_llm {
            if let Some(llm) = &self.llm {
                let _span = summary_span!("llm").entered();
                match llm.render(input) {
                    Ok(text) => {
                        return RenderedSummary {
                            text,
                            source: SummarySource::Llm,
                        }
                    }
                    Err(e) => events::summary_fallback(&e),
                }
            }
        }

        let _span = summary_span!("template").entered();
        RenderedSummary {
            text: self.template.render_text(input),
            source: SummarySource::Template,
        }
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::template_only()
    }
}
