// ============================================================================
// Money
// Immutable currency amount backed by an arbitrary-precision decimal
// ============================================================================

use crate::domain::context::{NumericContext, MONEY_AMOUNT_TYPE};
use crate::domain::currency::{default_registry, Currency, CurrencyRegistry};
use crate::domain::error::{MoneyError, MoneyResult};
use crate::domain::factory::MoneyAmountFactory;
use crate::interfaces::{MonetaryAmount, MonetaryAmountFactory, MonetaryOperator, MonetaryQuery};
use crate::numeric::{BigDecimal, IntoBigDecimal, NumericError, RoundingMode};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;
use std::str::FromStr;
use std::sync::Arc;

/// Immutable monetary amount: a currency, a decimal number and the numeric
/// context that bounds it.
///
/// The number always fits the context precision. Every operation returns a
/// new value; identity fast paths (adding zero, multiplying by one, ...)
/// return the receiver itself, which [`Money::ptr_eq`] can observe.
///
/// Equality and hashing use the currency and the number with trailing zeros
/// stripped, so `USD 1.0 == USD 1.00`.
///
/// # Example
/// ```
/// use decimal_money::prelude::*;
///
/// let price = Money::of_code(10, "USD").unwrap();
/// let share = price.divide(3).unwrap();
/// assert_eq!(share.to_string(), "USD 3.333333333333333");
/// ```
#[derive(Clone)]
pub struct Money {
    inner: Arc<MoneyInner>,
}

struct MoneyInner {
    currency: Currency,
    number: BigDecimal,
    context: NumericContext,
}

fn invalid_number(err: NumericError) -> MoneyError {
    MoneyError::InvalidArgument(format!("invalid number: {err}"))
}

/// Convert a numeric operand, reporting bad input as an invalid argument.
fn operand<N: IntoBigDecimal>(value: N) -> MoneyResult<BigDecimal> {
    value.into_big_decimal().map_err(invalid_number)
}

impl Money {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Wrap a number already known to fit `context`.
    fn from_parts(number: BigDecimal, currency: Currency, context: NumericContext) -> Self {
        Self {
            inner: Arc::new(MoneyInner {
                currency,
                number,
                context,
            }),
        }
    }

    /// Create an amount under the default money context.
    ///
    /// # Errors
    /// - `InvalidArgument` for NaN or infinite floats
    /// - `Numeric(RoundingNecessary)` if the default context forbids the required rounding
    pub fn of<N: IntoBigDecimal>(number: N, currency: Currency) -> MoneyResult<Self> {
        Self::with_context(number, currency, NumericContext::money_default())
    }

    /// Create an amount under an explicit context.
    ///
    /// The number is rounded to the context precision with the context
    /// rounding mode.
    ///
    /// # Errors
    /// - `InvalidArgument` for NaN or infinite floats
    /// - `Numeric(RoundingNecessary)` if rounding is needed but disallowed
    pub fn with_context<N: IntoBigDecimal>(
        number: N,
        currency: Currency,
        context: NumericContext,
    ) -> MoneyResult<Self> {
        let number = context.apply(operand(number)?)?;
        Ok(Self::from_parts(number, currency, context))
    }

    /// Create an amount, resolving the currency code through the default registry.
    ///
    /// # Errors
    /// Returns `UnknownCurrency` for unregistered codes, otherwise as [`Money::of`].
    pub fn of_code<N: IntoBigDecimal>(number: N, code: &str) -> MoneyResult<Self> {
        Self::of(number, default_registry().currency(code)?)
    }

    /// As [`Money::of_code`] with an explicit context.
    ///
    /// # Errors
    /// As [`Money::of_code`] and [`Money::with_context`].
    pub fn of_code_with_context<N: IntoBigDecimal>(
        number: N,
        code: &str,
        context: NumericContext,
    ) -> MoneyResult<Self> {
        Self::with_context(number, default_registry().currency(code)?, context)
    }

    /// Zero in the given currency under the default context.
    pub fn zero(currency: Currency) -> Self {
        Self::from_parts(BigDecimal::zero(), currency, NumericContext::money_default())
    }

    /// Convert any amount implementation into `Money`.
    ///
    /// A `Money` operand is returned as-is. Foreign amounts keep their own
    /// context (retagged as money), widened to the default precision when
    /// the default allows more digits, and further to the digit count of
    /// the foreign number so nothing is rounded away.
    ///
    /// # Errors
    /// Returns `Numeric` if the foreign number does not fit the derived context.
    pub fn from_amount<A: MonetaryAmount + ?Sized>(amount: &A) -> MoneyResult<Self> {
        if let Some(money) = amount.as_money() {
            return Ok(money.clone());
        }
        let default = NumericContext::money_default();
        let number = amount.number().into_owned();
        let mut context = amount.context().with_amount_type(MONEY_AMOUNT_TYPE);
        if !context.is_at_least_as_wide_as(&default) {
            context = context.with_precision(default.precision());
        }
        // Never drop digits the foreign amount already carries
        let digits = u32::try_from(number.precision()).unwrap_or(u32::MAX);
        if !context.is_unlimited() && digits > context.precision() {
            context = context.with_precision(digits);
        }
        Self::with_context(number, amount.currency(), context)
    }

    /// A factory preset with this amount's currency, number and context.
    pub fn factory(&self) -> MoneyAmountFactory {
        MoneyAmountFactory::new().set_amount(self)
    }

    /// Apply the receiver's context to a computed number.
    fn derive(&self, number: BigDecimal) -> MoneyResult<Self> {
        let context = self.inner.context;
        let number = context.apply(number)?;
        Ok(Self::from_parts(number, self.inner.currency, context))
    }

    /// Same currency and context, number taken as-is.
    fn derive_exact(&self, number: BigDecimal) -> Self {
        Self::from_parts(number, self.inner.currency, self.inner.context)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn currency(&self) -> Currency {
        self.inner.currency
    }

    #[inline]
    pub fn number(&self) -> &BigDecimal {
        &self.inner.number
    }

    #[inline]
    pub fn context(&self) -> NumericContext {
        self.inner.context
    }

    /// The number without trailing zeros; zero of any scale becomes `0`.
    pub fn number_stripped(&self) -> BigDecimal {
        self.inner.number.strip_trailing_zeros()
    }

    /// Significant digits of the stored number
    pub fn precision(&self) -> u64 {
        self.inner.number.precision()
    }

    pub fn scale(&self) -> i32 {
        self.inner.number.scale()
    }

    /// True if both handles refer to the same instance.
    #[inline]
    pub fn ptr_eq(a: &Money, b: &Money) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    // ========================================================================
    // Sign
    // ========================================================================

    /// Sign of the amount as -1, 0 or 1.
    #[inline]
    pub fn signum(&self) -> i32 {
        self.inner.number.signum()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.signum() == 0
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.signum() == 1
    }

    #[inline]
    pub fn is_positive_or_zero(&self) -> bool {
        self.signum() >= 0
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.signum() == -1
    }

    #[inline]
    pub fn is_negative_or_zero(&self) -> bool {
        self.signum() <= 0
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    fn check_currency<A: MonetaryAmount + ?Sized>(&self, amount: &A) -> MoneyResult<()> {
        let found = amount.currency();
        if found.code() != self.inner.currency.code() {
            return Err(MoneyError::CurrencyMismatch {
                expected: self.inner.currency,
                found,
            });
        }
        Ok(())
    }

    /// Sum of two amounts of the same currency.
    ///
    /// # Errors
    /// - `CurrencyMismatch` if the currencies differ
    /// - `Numeric` if the sum cannot be rounded into the context
    pub fn add<A: MonetaryAmount + ?Sized>(&self, amount: &A) -> MoneyResult<Self> {
        self.check_currency(amount)?;
        if amount.is_zero() {
            return Ok(self.clone());
        }
        self.derive(self.inner.number.add(&amount.number()))
    }

    /// Difference of two amounts of the same currency.
    ///
    /// # Errors
    /// - `CurrencyMismatch` if the currencies differ
    /// - `Numeric` if the difference cannot be rounded into the context
    pub fn subtract<A: MonetaryAmount + ?Sized>(&self, amount: &A) -> MoneyResult<Self> {
        self.check_currency(amount)?;
        if amount.is_zero() {
            return Ok(self.clone());
        }
        self.derive(self.inner.number.sub(&amount.number()))
    }

    /// Multiply by any number. Multiplying by one returns the receiver.
    ///
    /// # Errors
    /// - `InvalidArgument` for NaN or infinite floats
    /// - `Numeric` if the product cannot be rounded into the context
    pub fn multiply<N: IntoBigDecimal>(&self, multiplicand: N) -> MoneyResult<Self> {
        let multiplicand = operand(multiplicand)?;
        if multiplicand.is_one() {
            return Ok(self.clone());
        }
        self.derive(self.inner.number.mul(&multiplicand)?)
    }

    /// Divide by any number. Dividing by one returns the receiver.
    ///
    /// The quotient is bounded by the context precision and always rounded
    /// half-even, so non-terminating quotients still produce a value.
    ///
    /// # Errors
    /// - `Numeric(DivisionByZero)` for a zero divisor
    /// - `Numeric(NonTerminating)` under an unlimited context with no exact quotient
    pub fn divide<N: IntoBigDecimal>(&self, divisor: N) -> MoneyResult<Self> {
        let divisor = operand(divisor)?;
        if divisor.is_one() {
            return Ok(self.clone());
        }
        let quotient = self.inner.number.div_with(
            &divisor,
            self.inner.context.precision(),
            RoundingMode::HalfEven,
        )?;
        self.derive(quotient)
    }

    /// Truncating quotient and remainder; the remainder has the sign of the
    /// dividend, and `quotient * divisor + remainder == self`.
    ///
    /// # Errors
    /// - `Numeric(DivisionByZero)` for a zero divisor
    pub fn divide_and_remainder<N: IntoBigDecimal>(&self, divisor: N) -> MoneyResult<(Self, Self)> {
        let divisor = operand(divisor)?;
        if divisor.is_one() && self.inner.number.is_integral() {
            return Ok((self.clone(), self.derive_exact(BigDecimal::zero())));
        }
        let (quotient, remainder) = self.inner.number.div_rem(&divisor)?;
        Ok((self.derive(quotient)?, self.derive(remainder)?))
    }

    /// Integer part of the quotient, truncated toward zero.
    ///
    /// # Errors
    /// - `Numeric(DivisionByZero)` for a zero divisor
    pub fn divide_to_integral_value<N: IntoBigDecimal>(&self, divisor: N) -> MoneyResult<Self> {
        let divisor = operand(divisor)?;
        self.derive(self.inner.number.div_to_integral(&divisor)?)
    }

    /// Remainder of truncating division (sign of the dividend).
    ///
    /// # Errors
    /// - `Numeric(DivisionByZero)` for a zero divisor
    pub fn remainder<N: IntoBigDecimal>(&self, divisor: N) -> MoneyResult<Self> {
        let divisor = operand(divisor)?;
        self.derive(self.inner.number.rem(&divisor)?)
    }

    pub fn negate(&self) -> Self {
        self.derive_exact(self.inner.number.negate())
    }

    /// Unary plus: the receiver itself.
    pub fn plus(&self) -> Self {
        self.clone()
    }

    /// Absolute value; non-negative amounts are returned as-is.
    pub fn abs(&self) -> Self {
        if self.is_positive_or_zero() {
            return self.clone();
        }
        self.negate()
    }

    /// Remove trailing fractional zeros. Zero becomes `0` with scale 0.
    pub fn strip_trailing_zeros(&self) -> Self {
        self.derive_exact(self.number_stripped())
    }

    /// Shift the decimal point `n` places right (`self × 10^n`).
    ///
    /// Only the scale changes; the context is not re-applied.
    ///
    /// # Errors
    /// Returns `Numeric(Overflow)` if the scale leaves the i32 range.
    pub fn scale_by_power_of_ten(&self, n: i32) -> MoneyResult<Self> {
        Ok(self.derive_exact(self.inner.number.scale_by_power_of_ten(n)?))
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare stripped numbers of two amounts of the same currency.
    fn compare_stripped<A: MonetaryAmount + ?Sized>(&self, amount: &A) -> MoneyResult<Ordering> {
        self.check_currency(amount)?;
        let other = amount.number().strip_trailing_zeros();
        Ok(self.number_stripped().numeric_cmp(&other))
    }

    /// # Errors
    /// Returns `CurrencyMismatch` if the currencies differ.
    pub fn is_less_than<A: MonetaryAmount + ?Sized>(&self, amount: &A) -> MoneyResult<bool> {
        Ok(self.compare_stripped(amount)? == Ordering::Less)
    }

    /// # Errors
    /// Returns `CurrencyMismatch` if the currencies differ.
    pub fn is_less_than_or_equal_to<A: MonetaryAmount + ?Sized>(
        &self,
        amount: &A,
    ) -> MoneyResult<bool> {
        Ok(self.compare_stripped(amount)? != Ordering::Greater)
    }

    /// # Errors
    /// Returns `CurrencyMismatch` if the currencies differ.
    pub fn is_greater_than<A: MonetaryAmount + ?Sized>(&self, amount: &A) -> MoneyResult<bool> {
        Ok(self.compare_stripped(amount)? == Ordering::Greater)
    }

    /// # Errors
    /// Returns `CurrencyMismatch` if the currencies differ.
    pub fn is_greater_than_or_equal_to<A: MonetaryAmount + ?Sized>(
        &self,
        amount: &A,
    ) -> MoneyResult<bool> {
        Ok(self.compare_stripped(amount)? != Ordering::Less)
    }

    /// Numeric equality ignoring scale.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` if the currencies differ.
    pub fn is_equal_to<A: MonetaryAmount + ?Sized>(&self, amount: &A) -> MoneyResult<bool> {
        Ok(self.compare_stripped(amount)? == Ordering::Equal)
    }

    /// Total order over amounts: currency code first, then the raw number
    /// of `other` converted to `Money`.
    ///
    /// # Errors
    /// Returns `Numeric` if a foreign amount cannot be converted.
    pub fn compare_to<A: MonetaryAmount + ?Sized>(&self, other: &A) -> MoneyResult<Ordering> {
        let by_code = self.inner.currency.code().cmp(other.currency().code());
        if by_code != Ordering::Equal {
            return Ok(by_code);
        }
        let other = Money::from_amount(other)?;
        Ok(self.inner.number.numeric_cmp(&other.inner.number))
    }

    // ========================================================================
    // Queries and Operators
    // ========================================================================

    /// Run a query against this amount.
    ///
    /// # Errors
    /// A `MoneyError` raised by the query propagates unchanged; any other
    /// error becomes `OperationFailed` naming the query.
    pub fn query<R, Q: MonetaryQuery<R> + ?Sized>(&self, query: &Q) -> MoneyResult<R> {
        query
            .query_from(self)
            .map_err(|err| MoneyError::rewrap(query.name(), err))
    }

    /// Apply an operator to this amount.
    ///
    /// # Errors
    /// A `MoneyError` raised by the operator propagates unchanged; any other
    /// error becomes `OperationFailed` naming the operator.
    pub fn with<O: MonetaryOperator + ?Sized>(&self, operator: &O) -> MoneyResult<Self> {
        operator
            .apply(self)
            .map_err(|err| MoneyError::rewrap(operator.name(), err))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl MonetaryAmount for Money {
    fn currency(&self) -> Currency {
        self.inner.currency
    }

    fn number(&self) -> Cow<'_, BigDecimal> {
        Cow::Borrowed(&self.inner.number)
    }

    fn context(&self) -> NumericContext {
        self.inner.context
    }

    fn signum(&self) -> i32 {
        self.inner.number.signum()
    }

    fn as_money(&self) -> Option<&Money> {
        Some(self)
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        if Money::ptr_eq(self, other) {
            return true;
        }
        // Numeric equality is equality of the stripped forms.
        self.inner.currency == other.inner.currency
            && self.inner.number.numeric_cmp(&other.inner.number) == Ordering::Equal
    }
}

impl Eq for Money {}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.currency.hash(state);
        self.number_stripped().hash(state);
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner
            .currency
            .code()
            .cmp(other.inner.currency.code())
            .then_with(|| self.inner.number.numeric_cmp(&other.inner.number))
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Neg for &Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.inner.currency, self.inner.number)
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Money")
            .field("currency", &self.inner.currency.code())
            .field("number", &format_args!("{}", self.inner.number))
            .field("context", &self.inner.context)
            .finish()
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    /// Parse the display form `"<CODE> <number>"` under the default context.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (code, number) = s
            .trim()
            .split_once(char::is_whitespace)
            .ok_or_else(|| MoneyError::InvalidArgument(format!("expected \"CODE number\", got {s:?}")))?;
        let number: BigDecimal = number.trim().parse().map_err(invalid_number)?;
        Money::of(number, Currency::new(code)?)
    }
}

// ============================================================================
// Tests
// ============================================================================
