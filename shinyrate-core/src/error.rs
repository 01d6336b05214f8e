//! Error types for rate and trial calculations.

use thiserror::Error;

/// Broad classification of a [`CalcError`].
///
/// Every failure in this crate comes from an input outside its domain, so
/// there is a single kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
}

/// Errors raised when an input violates its domain constraint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Probability outside (0, 1].
    #[error("Invalid probability {value}: must be greater than 0 and at most 1")]
    InvalidProbability { value: String },

    /// Confidence percentage outside (0, 100).
    #[error("Invalid confidence level {value}%: must be strictly between 0 and 100")]
    InvalidConfidence { value: i64 },

    /// Probability too small to survive conversion to `f64`.
    #[error("Probability {value} is too small to be approximated as a floating-point number")]
    NotRepresentable { value: String },

    /// Trial count does not fit in a `u64`.
    #[error("Reaching {confidence}% confidence at probability {probability} needs more than u64::MAX encounters")]
    TooManyTrials { probability: String, confidence: u8 },
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::InvalidProbability { .. }
            | CalcError::InvalidConfidence { .. }
            | CalcError::NotRepresentable { .. }
            | CalcError::TooManyTrials { .. } => ErrorKind::InvalidArgument,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_input() {
        let err = CalcError::InvalidConfidence { value: 100 };
        assert!(err.to_string().contains("100%"));

        let err = CalcError::InvalidProbability {
            value: "0/1".to_string(),
        };
        assert!(err.to_string().contains("0/1"));
    }

    #[test]
    fn test_all_errors_are_invalid_argument() {
        let errors = [
            CalcError::InvalidConfidence { value: 0 },
            CalcError::InvalidProbability {
                value: "3/2".to_string(),
            },
            CalcError::NotRepresentable {
                value: "1/huge".to_string(),
            },
            CalcError::TooManyTrials {
                probability: "1/huge".to_string(),
                confidence: 50,
            },
        ];
        for err in errors {
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }
}
