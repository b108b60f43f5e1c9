//! Error types.

use thiserror::Error;

pub use crate::decimal::DecimalError;

/// Errors surfaced by the generator operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomError {
    /// Malformed numeric bounds.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// Structural mismatch or degenerate input collection.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A decimal rescale could not be represented.
    #[error("decimal arithmetic failed: {0}")]
    Arithmetic(#[from] DecimalError),

    /// The delay helper was cancelled before the duration elapsed.
    #[error("operation was cancelled")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::{DecimalError, RandomError};

    #[test]
    fn test_display_includes_detail() {
        let err = RandomError::InvalidRange("min 5 is greater than max 3".to_owned());
        assert_eq!(err.to_string(), "invalid range: min 5 is greater than max 3");
    }

    #[test]
    fn test_decimal_error_converts() {
        let err: RandomError = DecimalError::Overflow.into();
        assert_eq!(err, RandomError::Arithmetic(DecimalError::Overflow));
    }
}
