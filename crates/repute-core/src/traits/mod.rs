mod attestation_source;
mod link_registry;
mod score_engine;
mod summary_renderer;

pub use attestation_source::IAttestationSource;
pub use link_registry::ILinkRegistry;
pub use score_engine::IScoreEngine;
pub use summary_renderer::ISummaryRenderer;
