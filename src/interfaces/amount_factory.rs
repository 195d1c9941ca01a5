// ============================================================================
// Amount Factory Interface
// Generic construction of amount implementations
// ============================================================================

use crate::domain::{Currency, MoneyResult, NumericContext};
use crate::interfaces::MonetaryAmount;
use crate::numeric::IntoBigDecimal;

/// Builder-style factory producing one amount implementation.
///
/// Setters consume and return the factory; validation happens in
/// [`create`](Self::create).
pub trait MonetaryAmountFactory: Sized {
    /// The amount type produced
    type Amount: MonetaryAmount;

    fn set_currency(self, currency: Currency) -> Self;

    /// Resolve the currency through the default registry.
    fn set_currency_code(self, code: &str) -> Self;

    fn set_number<N: IntoBigDecimal>(self, number: N) -> Self;

    fn set_context(self, context: NumericContext) -> Self;

    /// Copy currency, number and context from an existing amount.
    fn set_amount<A: MonetaryAmount>(self, amount: &A) -> Self {
        self.set_currency(amount.currency())
            .set_number(amount.number().into_owned())
            .set_context(amount.context())
    }

    /// Build the amount.
    ///
    /// # Errors
    /// - `InvalidArgument` if currency or number is missing or invalid
    /// - `UnknownCurrency` if a currency code could not be resolved
    /// - `Numeric` if the number is not representable in the context
    fn create(&self) -> MoneyResult<Self::Amount>;

    /// Context used when none is set
    fn default_context(&self) -> NumericContext;

    /// Widest context this factory supports
    fn maximal_context(&self) -> NumericContext;
}
