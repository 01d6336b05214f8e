//! The full calculator output: effective rate plus encounters per confidence level.

use crate::config::CalcConfig;
use crate::error::Result;
use crate::modifiers::ModifierSet;
use crate::probability::Probability;
use crate::rate::{compose_rate, format_rate};
use crate::trials::{required_trials_for_levels, ConfidenceLevel};
use std::fmt;

/// Encounters needed to reach one confidence level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialEstimate {
    pub confidence: ConfidenceLevel,
    pub encounters: u64,
}

/// Result of one calculator run.
///
/// `Display` renders the lines printed by the CLI, each newline-terminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShinyReport {
    pub modifiers: ModifierSet,
    pub rate: Probability,
    pub estimates: Vec<TrialEstimate>,
}

impl ShinyReport {
    pub fn build(config: &CalcConfig, modifiers: ModifierSet) -> Result<Self> {
        let rate = compose_rate(&config.base_rate, modifiers)?;
        log::info!("Shiny rate with modifiers [{}]: {}", modifiers, rate);

        let estimates = required_trials_for_levels(&rate, &config.confidence_levels)?
            .into_iter()
            .map(|(confidence, encounters)| TrialEstimate {
                confidence,
                encounters,
            })
            .collect();

        Ok(Self {
            modifiers,
            rate,
            estimates,
        })
    }
}

impl fmt::Display for ShinyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Your shiny rate is : {}", format_rate(&self.rate))?;
        for estimate in &self.estimates {
            writeln!(
                f,
                "{}% chance of shiny after {} encounters",
                estimate.confidence.percent(),
                estimate.encounters
            )?;
        }
        Ok(())
    }
}
