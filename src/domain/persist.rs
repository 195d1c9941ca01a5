// ============================================================================
// Persisted Form
// Serde mapping for Money through a flat record
// ============================================================================

use crate::domain::context::{NumericContext, MONEY_AMOUNT_TYPE};
use crate::domain::currency::{default_registry, CurrencyRegistry};
use crate::domain::error::MoneyError;
use crate::domain::money::Money;
use crate::numeric::{BigDecimal, RoundingMode};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Persisted context: precision, rounding and owning amount type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextRecord {
    pub precision: u32,
    pub rounding: RoundingMode,
    #[serde(default)]
    pub amount_type: Option<String>,
}

impl From<NumericContext> for ContextRecord {
    fn from(context: NumericContext) -> Self {
        Self {
            precision: context.precision(),
            rounding: context.rounding(),
            amount_type: Some(context.amount_type().to_string()),
        }
    }
}

impl From<&ContextRecord> for NumericContext {
    /// The amount type is always restored as money.
    fn from(record: &ContextRecord) -> Self {
        NumericContext::new(record.precision, record.rounding)
    }
}

/// Flat persisted form of a [`Money`] value.
///
/// Every field is optional on input; [`Money::try_from`] fills the gaps
/// (zero number, default context) and rejects a missing currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyRecord {
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub context: Option<ContextRecord>,
}

impl From<&Money> for MoneyRecord {
    fn from(money: &Money) -> Self {
        Self {
            number: Some(money.number().to_string()),
            currency: Some(money.currency().code().to_string()),
            context: Some(money.context().into()),
        }
    }
}

impl TryFrom<MoneyRecord> for Money {
    type Error = MoneyError;

    fn try_from(record: MoneyRecord) -> Result<Self, Self::Error> {
        let code = record
            .currency
            .ok_or_else(|| MoneyError::InvalidArgument("currency is required".to_string()))?;
        let currency = default_registry().currency(&code)?;

        let number = match record.number {
            Some(text) => text.trim().parse::<BigDecimal>().map_err(|err| {
                MoneyError::InvalidArgument(format!("invalid number {text:?}: {err}"))
            })?,
            None => BigDecimal::zero(),
        };

        let context = record
            .context
            .as_ref()
            .map(NumericContext::from)
            .unwrap_or_else(NumericContext::money_default);

        Money::with_context(number, currency, context)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MoneyRecord::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = MoneyRecord::deserialize(deserializer)?;
        Money::try_from(record).map_err(D::Error::custom)
    }
}
