//! Domain Error Types
//!
//! Pure domain errors that don't depend on loading or configuration.

use thiserror::Error;

use super::money::MoneyError;

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-specific errors
///
/// These represent contract violations on the domain types and the ranking
/// helpers. They are surfaced to the immediate caller and never retried.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A ranking helper was handed no candidates
    #[error("Empty input: {0}")]
    EmptyInput(&'static str),

    /// Heterogeneous values were handed to a ranking helper
    #[error("Type mismatch at index {index}: expected {expected}, found {found}")]
    TypeMismatch {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    /// Argument outside of its accepted range (e.g. zero quantity)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Money value rejected by the money primitive
    #[error(transparent)]
    InvalidMoney(#[from] MoneyError),
}

impl DomainError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Check if this error comes from a ranking helper
    pub fn is_ranking_error(&self) -> bool {
        matches!(self, Self::EmptyInput(_) | Self::TypeMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_type_mismatch_error() {
        let err = DomainError::TypeMismatch {
            index: 2,
            expected: "integer",
            found: "decimal",
        };

        assert!(err.is_ranking_error());
        assert!(err.to_string().contains("index 2"));
        assert!(err.to_string().contains("decimal"));
    }

    #[test]
    fn test_invalid_argument_error() {
        let err = DomainError::invalid_argument("quantity must be at least 1, got 0");

        assert!(!err.is_ranking_error());
        assert!(err.to_string().contains("got 0"));
    }

    #[test]
    fn test_money_error_is_transparent() {
        let err: DomainError = MoneyError::Negative(Decimal::new(-5, 0)).into();

        assert!(!err.is_ranking_error());
        assert_eq!(err.to_string(), "Money value cannot be negative (got -5)");
    }
}
