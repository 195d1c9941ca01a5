// ============================================================================
// Decimal Money Library
// Immutable currency amounts on arbitrary-precision decimals
// ============================================================================

//! # Decimal Money
//!
//! An immutable money type pairing a currency with an arbitrary-precision
//! decimal, bounded by a configurable numeric context.
//!
//! ## Features
//!
//! - **Exact decimal arithmetic** with no binary floating-point error
//! - **Numeric contexts** (precision + rounding) resolved once per process
//!   from configuration, or supplied explicitly
//! - **Currency-checked operations**: mixing currencies is an error
//! - **Pluggable queries and operators** via traits implemented by closures
//! - **Optional serde mapping** behind the `serde` feature
//!
//! ## Example
//!
//! ```rust
//! use decimal_money::prelude::*;
//!
//! let usd = Currency::new("USD").unwrap();
//! let price = Money::of(19.99, usd).unwrap();
//! let shipping = Money::of(5, usd).unwrap();
//!
//! let total = price.multiply(3).unwrap().add(&shipping).unwrap();
//! assert_eq!(total.to_string(), "USD 64.97");
//!
//! // Division is bounded by the context precision
//! let split = total.divide(7).unwrap();
//! assert!(split.precision() <= NumericContext::money_default().precision() as u64);
//!
//! // Mixing currencies fails
//! let eur = Money::of_code(1, "EUR").unwrap();
//! assert!(total.add(&eur).is_err());
//! ```

pub mod domain;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        CanonicalWidth, Currency, CurrencyRegistry, Money, MoneyAmountFactory, MoneyError,
        MoneyResult, NumericContext,
    };
    pub use crate::interfaces::{
        MonetaryAmount, MonetaryAmountFactory, MonetaryOperator, MonetaryQuery,
    };
    pub use crate::numeric::{BigDecimal, IntoBigDecimal, RoundingMode};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use crate::domain::{default_registry, resolve_default_context, MonetaryConfig};
    use std::borrow::Cow;
    use std::collections::HashMap;

    /// Minimal foreign amount: a fixed-point value in minor units.
    struct MinorUnits {
        currency: Currency,
        cents: i64,
    }

    impl MonetaryAmount for MinorUnits {
        fn currency(&self) -> Currency {
            self.currency
        }

        fn number(&self) -> Cow<'_, BigDecimal> {
            Cow::Owned(BigDecimal::new(self.cents, 2))
        }

        fn context(&self) -> NumericContext {
            NumericContext::for_amount_type(7, RoundingMode::HalfUp, "MinorUnits")
        }
    }

    #[test]
    fn test_end_to_end_invoice() {
        let lines = ["12.99", "0.01", "7.00"];
        let usd = Currency::new("USD").unwrap();

        let subtotal = lines.iter().fold(Money::zero(usd), |acc, line| {
            let amount = Money::of(line.parse::<BigDecimal>().unwrap(), usd).unwrap();
            acc.add(&amount).unwrap()
        });
        assert_eq!(subtotal.to_string(), "USD 20.00");

        let tax = subtotal.multiply(rust_decimal::Decimal::new(825, 4)).unwrap();
        assert_eq!(tax.number().to_string(), "1.650000");

        let total = subtotal.add(&tax).unwrap();
        let (per_person, leftover) = total.divide_and_remainder(3).unwrap();
        assert_eq!(per_person, "USD 7".parse().unwrap());
        assert_eq!(leftover, "USD 0.65".parse().unwrap());
        assert!(total.is_greater_than(&subtotal).unwrap());
    }

    #[test]
    fn test_foreign_amount_interop() {
        let usd = Currency::new("USD").unwrap();
        let foreign = MinorUnits { currency: usd, cents: 1050 };

        let money = Money::from_amount(&foreign).unwrap();
        assert_eq!(money.number().to_string(), "10.50");
        assert_eq!(money.context().amount_type(), "Money");
        // Narrow foreign context widened to the default precision
        assert!(money
            .context()
            .is_at_least_as_wide_as(&NumericContext::money_default()));
        assert_eq!(money.context().rounding(), RoundingMode::HalfUp);

        let sum = Money::of(1, usd).unwrap().add(&foreign).unwrap();
        assert_eq!(sum.to_string(), "USD 11.50");
        assert!(sum.is_greater_than(&foreign).unwrap());
        assert_eq!(
            Money::of(10.5, usd).unwrap().compare_to(&foreign).unwrap(),
            std::cmp::Ordering::Equal
        );

        // Digits beyond the default precision are kept by widening
        let long = MinorUnits {
            currency: usd,
            cents: 1_234_567_890_123_456_789,
        };
        let converted = Money::from_amount(&long).unwrap();
        assert_eq!(converted.number().to_string(), "12345678901234567.89");
        assert_eq!(converted.context().precision(), 19);

        let eur_foreign = MinorUnits {
            currency: Currency::new("EUR").unwrap(),
            cents: 0,
        };
        assert!(matches!(
            sum.subtract(&eur_foreign),
            Err(MoneyError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_from_amount_reuses_money() {
        let original = Money::of_code(5, "CHF").unwrap();
        let converted = Money::from_amount(&original).unwrap();
        assert!(Money::ptr_eq(&original, &converted));
    }

    #[test]
    fn test_registered_currency_usable_everywhere() {
        default_registry().register("BTC").unwrap();
        let btc = Money::of_code("0.00000001".parse::<BigDecimal>().unwrap(), "btc").unwrap();
        assert_eq!(btc.to_string(), "BTC 1E-8");
        assert_eq!(btc.number().to_plain_string(), "0.00000001");
    }

    #[test]
    fn test_queries_and_operators_compose() {
        let round_to_cents = |m: &Money| -> MoneyResult<Money> {
            let cents = m.number().set_scale(2, RoundingMode::HalfEven)?;
            Money::with_context(cents, m.currency(), m.context())
        };
        let minor_units = |m: &Money| -> MoneyResult<i64> {
            let shifted = m.number().scale_by_power_of_ten(2)?;
            Ok(shifted.to_rust_decimal()?.trunc().try_into().unwrap_or(i64::MAX))
        };

        let amount = Money::of_code(10, "USD").unwrap().divide(3).unwrap();
        let rounded = amount.with(&round_to_cents).unwrap();
        assert_eq!(rounded.to_string(), "USD 3.33");
        assert_eq!(rounded.query(&minor_units).unwrap(), 333);
    }

    #[test]
    fn test_explicit_context_resolution() {
        let from_file = MonetaryConfig::from_properties(
            "# house rounding\nmoney.defaults.precision = 10\nmoney.defaults.roundingMode = floor\n",
        )
        .unwrap();
        let ctx = resolve_default_context(&from_file);
        assert_eq!(ctx, NumericContext::new(10, RoundingMode::Floor));

        let amount = Money::of_code_with_context(2, "USD", ctx).unwrap();
        assert_eq!(amount.divide(3).unwrap().number().to_string(), "0.6666666667");

        let map: HashMap<String, String> = HashMap::new();
        assert_eq!(
            resolve_default_context(&map),
            NumericContext::from_width(CanonicalWidth::Decimal64)
        );
    }
}
