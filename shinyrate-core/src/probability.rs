//! Exact probabilities.
//!
//! Rates are kept as arbitrary-precision fractions so that summing boosts
//! like `3/4096 + 6/4096` never drifts. Floats only appear at the very end,
//! in [`crate::trials`].

use crate::error::{CalcError, Result};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, ToPrimitive, Zero};
use std::fmt;

/// Denominator of the unmodified shiny rate (1/4096).
pub const BASE_SHINY_DENOMINATOR: u64 = 4096;

/// An exact probability in the half-open interval (0, 1].
///
/// Always stored in lowest terms.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Probability(BigRational);

impl Probability {
    /// Validate and wrap an exact rational.
    pub fn new(value: BigRational) -> Result<Self> {
        if value <= BigRational::zero() || value > BigRational::one() {
            return Err(CalcError::InvalidProbability {
                value: format!("{}/{}", value.numer(), value.denom()),
            });
        }
        Ok(Self(value))
    }

    /// `numer / denom`, reduced.
    pub fn from_ratio(numer: u64, denom: u64) -> Result<Self> {
        if denom == 0 {
            return Err(CalcError::InvalidProbability {
                value: format!("{}/{}", numer, denom),
            });
        }
        Self::new(BigRational::new(BigInt::from(numer), BigInt::from(denom)))
    }

    /// `1 / denom`.
    pub fn one_in(denom: u64) -> Result<Self> {
        Self::from_ratio(1, denom)
    }

    /// The unmodified shiny rate, 1/4096.
    pub fn base_shiny_rate() -> Self {
        Self(BigRational::new(
            BigInt::one(),
            BigInt::from(BASE_SHINY_DENOMINATOR),
        ))
    }

    pub fn as_ratio(&self) -> &BigRational {
        &self.0
    }

    pub fn into_ratio(self) -> BigRational {
        self.0
    }

    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    /// True when the event happens on every trial.
    pub fn is_certain(&self) -> bool {
        self.0.is_one()
    }

    /// Nearest `f64` (display and logarithms only).
    ///
    /// Fails when the value underflows to zero, since a zero would turn the
    /// trial count into a division by zero.
    pub fn to_f64(&self) -> Result<f64> {
        match self.0.to_f64() {
            Some(v) if v > 0.0 && v.is_finite() => Ok(v),
            _ => Err(CalcError::NotRepresentable {
                value: self.to_string(),
            }),
        }
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0.numer(), self.0.denom())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_base_rate() {
        let base = Probability::base_shiny_rate();
        assert_eq!(base, Probability::one_in(4096).unwrap());
        assert_eq!(base.to_string(), "1/4096");
    }

    #[test]
    fn test_reduces_to_lowest_terms() {
        let p = Probability::from_ratio(6, 4096).unwrap();
        assert_eq!(p.to_string(), "3/2048");
        assert_eq!(p.numer(), &BigInt::from(3));
        assert_eq!(p.denom(), &BigInt::from(2048));
    }

    #[test]
    fn test_one_is_certain() {
        let p = Probability::from_ratio(7, 7).unwrap();
        assert!(p.is_certain());
        assert_eq!(p.to_string(), "1/1");
        assert!(!Probability::base_shiny_rate().is_certain());
    }

    #[test]
    fn test_rejects_out_of_range() {
        for (n, d) in [(0, 4096), (4097, 4096), (1, 0), (0, 0)] {
            let err = Probability::from_ratio(n, d).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{}/{}", n, d);
        }

        let negative = BigRational::new(BigInt::from(-1), BigInt::from(4096));
        assert!(matches!(
            Probability::new(negative),
            Err(CalcError::InvalidProbability { .. })
        ));
    }

    #[test]
    fn test_to_f64() {
        let p = Probability::one_in(4).unwrap();
        assert_eq!(p.to_f64().unwrap(), 0.25);

        let tiny = BigRational::new(BigInt::one(), BigInt::from(10u32).pow(400));
        let p = Probability::new(tiny).unwrap();
        assert!(matches!(
            p.to_f64(),
            Err(CalcError::NotRepresentable { .. })
        ));
    }
}
