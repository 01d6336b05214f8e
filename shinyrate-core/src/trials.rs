//! Encounters needed to see at least one success with a given confidence.
//!
//! With per-encounter probability `p`, the chance of zero successes in `n`
//! independent encounters is `(1 - p)^n`. The answer is the smallest `n`
//! with `(1 - p)^n <= 1 - c`, i.e. `ceil(ln(1 - c) / ln(1 - p))`.
//!
//! Both logarithms go through [`f64::ln_1p`]; `ln(1 - p)` loses most of its
//! digits when `p` is around 1/4096.

use crate::error::{CalcError, Result};
use crate::probability::Probability;
use std::fmt;

/// A confidence percentage strictly between 0 and 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConfidenceLevel(u8);

impl ConfidenceLevel {
    /// Levels reported by the calculator: 50, 60, 70, 80, 90.
    pub const STANDARD: [ConfidenceLevel; 5] = [
        ConfidenceLevel(50),
        ConfidenceLevel(60),
        ConfidenceLevel(70),
        ConfidenceLevel(80),
        ConfidenceLevel(90),
    ];

    pub fn new(percent: i64) -> Result<Self> {
        if percent <= 0 || percent >= 100 {
            return Err(CalcError::InvalidConfidence { value: percent });
        }
        Ok(ConfidenceLevel(percent as u8))
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    /// The level as a fraction in (0, 1).
    pub fn fraction(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Minimum encounters for at least one success with `confidence_percent`% certainty.
///
/// Fails with an invalid-argument error when the confidence is not strictly
/// between 0 and 100.
pub fn required_trials(probability: &Probability, confidence_percent: i64) -> Result<u64> {
    let level = ConfidenceLevel::new(confidence_percent)?;
    trials_for_level(probability, level)
}

/// [`required_trials`] for an already-validated level.
pub fn trials_for_level(probability: &Probability, level: ConfidenceLevel) -> Result<u64> {
    if probability.is_certain() {
        return Ok(1);
    }

    let p = probability.to_f64()?;
    let trials = (-level.fraction()).ln_1p() / (-p).ln_1p();
    let n = trials.ceil();

    if !n.is_finite() || n >= u64::MAX as f64 {
        return Err(CalcError::TooManyTrials {
            probability: probability.to_string(),
            confidence: level.percent(),
        });
    }

    // n is -0.0 when p rounds to 1.0
    Ok((n as u64).max(1))
}

/// Trial counts for each level, in the order given.
pub fn required_trials_for_levels(
    probability: &Probability,
    levels: &[ConfidenceLevel],
) -> Result<Vec<(ConfidenceLevel, u64)>> {
    levels
        .iter()
        .map(|&level| {
            let n = trials_for_level(probability, level)?;
            log::debug!("{} at {}: {} encounters", level, probability, n);
            Ok((level, n))
        })
        .collect()
}
