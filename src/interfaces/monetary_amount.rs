// ============================================================================
// Monetary Amount Interface
// Minimal capability set shared by all amount implementations
// ============================================================================

use crate::domain::{Currency, Money, NumericContext};
use crate::numeric::BigDecimal;
use std::borrow::Cow;

/// Any amount of money: a currency, a decimal number and the context that
/// bounds it.
///
/// Money arithmetic accepts any implementation as an operand, and
/// [`Money::from_amount`] converts foreign implementations.
pub trait MonetaryAmount {
    fn currency(&self) -> Currency;

    /// The numeric value, borrowed when the implementation stores a `BigDecimal`.
    fn number(&self) -> Cow<'_, BigDecimal>;

    /// The context governing this amount
    fn context(&self) -> NumericContext;

    /// Sign of the amount as -1, 0 or 1.
    fn signum(&self) -> i32 {
        self.number().signum()
    }

    fn is_zero(&self) -> bool {
        self.signum() == 0
    }

    /// Downcast hook: `Some` only for [`Money`] itself, so conversions can
    /// reuse the instance instead of rebuilding it.
    fn as_money(&self) -> Option<&Money> {
        None
    }
}
