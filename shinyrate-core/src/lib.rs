//! # Shiny Rate Core
//!
//! Exact odds for shiny encounters and the number of encounters needed to
//! see one with a given confidence.
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌────────────────┐
//! │  base rate  │────▶│ compose_rate │────▶│ required_trials│
//! │ + modifiers │     │ (exact)      │     │ (f64, ln_1p)   │
//! └─────────────┘     └──────────────┘     └───────┬────────┘
//!                                                  │
//!                                          ┌───────▼────────┐
//!                                          │  ShinyReport   │
//!                                          └────────────────┘
//! ```
//!
//! ## Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Probability`] | Exact rational in (0, 1] |
//! | [`Modifier`] / [`ModifierSet`] | Rate boosts (Shiny Charm, Masuda) |
//! | [`ConfidenceLevel`] | Percentage strictly between 0 and 100 |
//! | [`ShinyReport`] | Rate plus encounters per confidence level |
//!
//! Everything here is a pure function of its inputs.

pub mod config;
pub mod error;
pub mod modifiers;
pub mod probability;
pub mod rate;
pub mod report;
pub mod trials;

pub use config::CalcConfig;
pub use error::{CalcError, ErrorKind};
pub use modifiers::{Modifier, ModifierSet};
pub use probability::Probability;
pub use rate::{compose_rate, format_rate};
pub use report::{ShinyReport, TrialEstimate};
pub use trials::{required_trials, ConfidenceLevel};
