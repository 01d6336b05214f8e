use crate::probability::Probability;
use crate::trials::ConfidenceLevel;

/// Calculation configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcConfig {
    /// Unmodified per-encounter rate; modifiers are multiples of this.
    pub base_rate: Probability,
    /// Confidence levels to report, in output order.
    pub confidence_levels: Vec<ConfidenceLevel>,
}

impl CalcConfig {
    pub fn with_base_rate(mut self, base_rate: Probability) -> Self {
        self.base_rate = base_rate;
        self
    }

    pub fn with_confidence_levels(mut self, levels: Vec<ConfidenceLevel>) -> Self {
        self.confidence_levels = levels;
        self
    }
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            // Gen 6+ full odds
            base_rate: Probability::base_shiny_rate(),
            confidence_levels: ConfidenceLevel::STANDARD.to_vec(),
        }
    }
}
