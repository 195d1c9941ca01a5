// ============================================================================
// Money Factory
// Builder producing Money instances
// ============================================================================

use crate::domain::context::{NumericContext, MONEY_AMOUNT_TYPE};
use crate::domain::currency::{default_registry, Currency, CurrencyRegistry};
use crate::domain::error::{MoneyError, MoneyResult};
use crate::domain::money::Money;
use crate::interfaces::MonetaryAmountFactory;
use crate::numeric::{BigDecimal, IntoBigDecimal, NumericResult, RoundingMode};

/// Widest context a money factory hands out: unlimited precision.
const MAXIMAL_CONTEXT: NumericContext = NumericContext::new(0, RoundingMode::HalfEven);

#[derive(Debug, Clone)]
enum CurrencySource {
    Resolved(Currency),
    /// Looked up in the default registry at `create` time
    Code(String),
}

/// Factory for [`Money`].
///
/// Conversion and lookup failures are deferred: setters never fail, and
/// [`create`](MonetaryAmountFactory::create) reports the first problem.
///
/// # Example
/// ```
/// use decimal_money::prelude::*;
///
/// let amount = MoneyAmountFactory::new()
///     .set_currency_code("CHF")
///     .set_number(12.5)
///     .create()
///     .unwrap();
/// assert_eq!(amount.to_string(), "CHF 12.5");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MoneyAmountFactory {
    currency: Option<CurrencySource>,
    number: Option<NumericResult<BigDecimal>>,
    context: Option<NumericContext>,
}

impl MoneyAmountFactory {
    pub fn new() -> Self {
        Self::default()
    }

    fn resolve_currency(&self) -> MoneyResult<Currency> {
        match &self.currency {
            Some(CurrencySource::Resolved(currency)) => Ok(*currency),
            Some(CurrencySource::Code(code)) => default_registry().currency(code),
            None => Err(MoneyError::InvalidArgument("currency must be set".to_string())),
        }
    }

    fn resolve_number(&self) -> MoneyResult<BigDecimal> {
        match &self.number {
            Some(Ok(number)) => Ok(number.clone()),
            Some(Err(err)) => Err(MoneyError::InvalidArgument(format!("invalid number: {err}"))),
            None => Err(MoneyError::InvalidArgument("number must be set".to_string())),
        }
    }
}

impl MonetaryAmountFactory for MoneyAmountFactory {
    type Amount = Money;

    fn set_currency(mut self, currency: Currency) -> Self {
        self.currency = Some(CurrencySource::Resolved(currency));
        self
    }

    fn set_currency_code(mut self, code: &str) -> Self {
        self.currency = Some(CurrencySource::Code(code.to_string()));
        self
    }

    fn set_number<N: IntoBigDecimal>(mut self, number: N) -> Self {
        self.number = Some(number.into_big_decimal());
        self
    }

    fn set_context(mut self, context: NumericContext) -> Self {
        self.context = Some(context.with_amount_type(MONEY_AMOUNT_TYPE));
        self
    }

    fn create(&self) -> MoneyResult<Money> {
        let currency = self.resolve_currency()?;
        let number = self.resolve_number()?;
        let context = self.context.unwrap_or_else(|| self.default_context());
        Money::with_context(number, currency, context)
    }

    fn default_context(&self) -> NumericContext {
        NumericContext::money_default()
    }

    fn maximal_context(&self) -> NumericContext {
        MAXIMAL_CONTEXT
    }
}
