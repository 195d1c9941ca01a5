// ============================================================================
// Money Errors
// Failure taxonomy for monetary operations
// ============================================================================

use crate::domain::currency::Currency;
use crate::numeric::NumericError;
use std::error::Error;
use std::fmt;

/// Errors surfaced by money construction, arithmetic and queries.
#[derive(Debug)]
pub enum MoneyError {
    /// A required input is missing or malformed
    InvalidArgument(String),
    /// No currency is registered under the given code
    UnknownCurrency(String),
    /// Binary operation between amounts of different currencies
    CurrencyMismatch { expected: Currency, found: Currency },
    /// The result is not representable under the governing numeric context
    Numeric(NumericError),
    /// A caller-supplied query or operator failed with a foreign error
    OperationFailed {
        operation: String,
        source: Box<dyn Error + Send + Sync>,
    },
}

impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            MoneyError::UnknownCurrency(code) => write!(f, "unknown currency: {code}"),
            MoneyError::CurrencyMismatch { expected, found } => {
                write!(f, "currency mismatch: {expected}/{found}")
            },
            MoneyError::Numeric(err) => write!(f, "{err}"),
            MoneyError::OperationFailed { operation, source } => {
                write!(f, "{operation} failed: {source}")
            },
        }
    }
}

impl Error for MoneyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MoneyError::Numeric(err) => Some(err),
            MoneyError::OperationFailed { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<NumericError> for MoneyError {
    #[inline]
    fn from(err: NumericError) -> Self {
        MoneyError::Numeric(err)
    }
}

impl MoneyError {
    /// Keep a money error as-is; wrap anything else with the failing operation's name.
    pub(crate) fn rewrap(operation: String, err: Box<dyn Error + Send + Sync>) -> Self {
        match err.downcast::<MoneyError>() {
            Ok(money_err) => *money_err,
            Err(source) => MoneyError::OperationFailed { operation, source },
        }
    }
}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;
