// ============================================================================
// Domain Models Module
// Money, its numeric context, currencies and configuration
// ============================================================================

pub mod config;
pub mod context;
pub mod currency;
pub mod error;
pub mod factory;
pub mod money;
#[cfg(feature = "serde")]
pub mod persist;

#[cfg(test)]
mod properties;

pub use config::{ConfigError, ConfigSource, MonetaryConfig};
pub use context::{
    resolve_default_context, CanonicalWidth, NumericContext, ResolutionError, MONEY_AMOUNT_TYPE,
};
pub use currency::{default_registry, Currency, CurrencyRegistry, InMemoryCurrencyRegistry};
pub use error::{MoneyError, MoneyResult};
pub use factory::MoneyAmountFactory;
pub use money::Money;
#[cfg(feature = "serde")]
pub use persist::{ContextRecord, MoneyRecord};
