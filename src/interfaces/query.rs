// ============================================================================
// Query and Operator Interfaces
// Caller-supplied functions applied to an amount
// ============================================================================

use crate::domain::Money;
use std::error::Error;

/// Boxed error returned by caller-supplied functions
pub type BoxError = Box<dyn Error + Send + Sync>;

/// Extracts an arbitrary result from an amount.
///
/// Closures `Fn(&Money) -> Result<R, E>` implement this trait.
pub trait MonetaryQuery<R> {
    fn query_from(&self, amount: &Money) -> Result<R, BoxError>;

    /// Identity reported when the query fails
    fn name(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

impl<R, E, F> MonetaryQuery<R> for F
where
    F: Fn(&Money) -> Result<R, E>,
    E: Into<BoxError>,
{
    fn query_from(&self, amount: &Money) -> Result<R, BoxError> {
        self(amount).map_err(Into::into)
    }
}

/// Maps an amount to a new amount of the same type.
///
/// Closures `Fn(&Money) -> Result<Money, E>` implement this trait.
pub trait MonetaryOperator {
    fn apply(&self, amount: &Money) -> Result<Money, BoxError>;

    /// Identity reported when the operator fails
    fn name(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

impl<E, F> MonetaryOperator for F
where
    F: Fn(&Money) -> Result<Money, E>,
    E: Into<BoxError>,
{
    fn apply(&self, amount: &Money) -> Result<Money, BoxError> {
        self(amount).map_err(Into::into)
    }
}
