//! Rate composition and display.

use crate::error::Result;
use crate::modifiers::ModifierSet;
use crate::probability::Probability;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use std::cmp::Ordering;

/// Effective per-encounter rate for `base` under `modifiers`.
///
/// With no modifiers this is `base` itself. With any modifier active it is
/// the sum of the active increments only: the increments are already scaled
/// from `base`, so `base` is not added again.
///
/// Fails if the summed increments exceed 1, which only happens for bases
/// far larger than real shiny rates.
pub fn compose_rate(base: &Probability, modifiers: ModifierSet) -> Result<Probability> {
    if modifiers.is_empty() {
        return Ok(base.clone());
    }

    let total = modifiers
        .iter()
        .fold(BigRational::zero(), |acc, m| acc + m.increment(base));

    log::debug!("Composed rate from {} with [{}]: {}", base, modifiers, total);

    Probability::new(total)
}

/// Approximate `N` in "1 in N", or `None` when the numerator is already 1.
///
/// Rounds `denominator / numerator` half-to-even, exactly on integers.
pub fn approx_one_in(probability: &Probability) -> Option<BigInt> {
    if probability.numer().is_one() {
        return None;
    }
    Some(round_half_even(probability.denom(), probability.numer()))
}

/// `<numerator>/<denominator>`, plus ` (~1/N)` when the numerator is not 1.
pub fn format_rate(probability: &Probability) -> String {
    match approx_one_in(probability) {
        Some(n) => format!("{} (~1/{})", probability, n),
        None => probability.to_string(),
    }
}

/// `n / d` rounded to the nearest integer, ties to even. Both must be positive.
fn round_half_even(n: &BigInt, d: &BigInt) -> BigInt {
    let quotient = n / d;
    let twice_remainder = (n % d) * 2u32;

    match twice_remainder.cmp(d) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1u32,
        Ordering::Equal => {
            if (&quotient % 2u32).is_zero() {
                quotient
            } else {
                quotient + 1u32
            }
        }
    }
}
