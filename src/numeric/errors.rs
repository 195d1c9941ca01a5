// ============================================================================
// Numeric Errors
// Error types for arbitrary-precision decimal arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur during decimal arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Scale or exponent left the representable range
    Overflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Digits had to be discarded but the rounding mode forbids it
    RoundingNecessary,
    /// Exact quotient has a non-terminating decimal expansion
    NonTerminating,
    /// Input string or value is invalid
    InvalidInput,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: scale out of range")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::RoundingNecessary => write!(
                f,
                "rounding necessary: result exceeds precision and rounding is disallowed"
            ),
            NumericError::NonTerminating => write!(
                f,
                "non-terminating decimal expansion: no exact representable quotient"
            ),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
