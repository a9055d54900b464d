//! Deterministic plain-text summary.

use std::fmt::Write;

use repute_core::errors::SummaryError;
use repute_core::models::SummaryInput;
use repute_core::traits::ISummaryRenderer;

use crate::format::{signed, thousands};

#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateRenderer;

impl TemplateRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render without the `Result` wrapper; the template cannot fail.
    pub fn render_text(&self, input: &SummaryInput) -> String {
        let s = &input.score;
        let mut out = String::new();

        // Writing into a String is infallible.
        let _ = writeln!(out, "Reputation: {}", input.display_name);
        let _ = writeln!(out, "Score: {} ({})", signed(s.total_score), s.standing());
        let _ = writeln!(
            out,
            "Attestations: {} ({} positive, {} negative, {} unknown)",
            s.attestation_count, s.positive_count, s.negative_count, s.unknown_count
        );
        let _ = write!(
            out,
            "Breakdown: weighted {}, vouches {} ({}), builder {}, activity {}",
            signed(s.raw_weighted_sum),
            signed(s.vouch_bonus),
            s.vouch_count,
            signed(s.builder_bonus),
            signed(s.activity_bonus)
        );

        if let Some(profile) = &input.profile {
            let _ = write!(
                out,
                "\nIdentity: {}\nNetwork Activity: {} Actions\nTRUST Staked: {}",
                profile.label,
                profile.activity,
                thousands(profile.staked)
            );
        }
        out
    }
}

impl ISummaryRenderer for TemplateRenderer {
    fn render(&self, input: &SummaryInput) -> Result<String, SummaryError> {
        Ok(self.render_text(input))
    }
}
