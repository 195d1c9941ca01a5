// ============================================================================
// Currency
// Currency handle and code registry
// ============================================================================

use crate::domain::error::{MoneyError, MoneyResult};
use arrayvec::ArrayString;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Maximum length of a currency code
pub const MAX_CODE_LEN: usize = 8;

/// Opaque currency handle, compared and ordered by its code.
///
/// The code is stored inline so the handle is `Copy`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Currency {
    code: ArrayString<MAX_CODE_LEN>,
}

impl Currency {
    /// Create a currency handle from a code (upper-cased).
    ///
    /// # Errors
    /// Returns `InvalidArgument` unless the code is 1 to 8 ASCII letters or digits.
    pub fn new(code: &str) -> MoneyResult<Self> {
        let trimmed = code.trim();
        if trimmed.is_empty()
            || trimmed.len() > MAX_CODE_LEN
            || !trimmed.bytes().all(|b| b.is_ascii_alphanumeric())
        {
            return Err(MoneyError::InvalidArgument(format!(
                "invalid currency code {code:?}"
            )));
        }
        let upper = trimmed.to_ascii_uppercase();
        let code = ArrayString::from(&upper)
            .map_err(|_| MoneyError::InvalidArgument(format!("invalid currency code {code:?}")))?;
        Ok(Self { code })
    }

    /// The currency code, e.g. `"USD"`.
    #[inline]
    pub fn code(&self) -> &str {
        self.code.as_str()
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Currency({})", self.code)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Resolves currency codes to currency handles.
pub trait CurrencyRegistry: Send + Sync {
    /// Look up a currency by code.
    ///
    /// # Errors
    /// Returns `UnknownCurrency` if the code is not registered.
    fn currency(&self, code: &str) -> MoneyResult<Currency>;
}

/// Commonly traded ISO 4217 codes seeded into the default registry
const ISO_CODES: &[&str] = &[
    "AED", "ARS", "AUD", "BGN", "BRL", "CAD", "CHF", "CLP", "CNY", "COP", "CZK", "DKK", "EGP",
    "EUR", "GBP", "HKD", "HUF", "IDR", "ILS", "INR", "ISK", "JPY", "KRW", "KWD", "MXN", "MYR",
    "NGN", "NOK", "NZD", "PEN", "PHP", "PKR", "PLN", "RON", "RUB", "SAR", "SEK", "SGD", "THB",
    "TRY", "TWD", "UAH", "USD", "VND", "XAG", "XAU", "ZAR",
];

/// Thread-safe in-memory registry keyed by currency code.
#[derive(Default)]
pub struct InMemoryCurrencyRegistry {
    currencies: RwLock<HashMap<ArrayString<MAX_CODE_LEN>, Currency>>,
}

impl InMemoryCurrencyRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-seeded with common ISO 4217 codes.
    pub fn with_iso_codes() -> Self {
        let registry = Self::new();
        {
            let mut currencies = registry.currencies.write();
            for code in ISO_CODES {
                if let Ok(currency) = Currency::new(code) {
                    currencies.insert(currency.code, currency);
                }
            }
        }
        registry
    }

    /// Register an additional currency code, returning its handle.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the code is malformed.
    pub fn register(&self, code: &str) -> MoneyResult<Currency> {
        let currency = Currency::new(code)?;
        let previous = self.currencies.write().insert(currency.code, currency);
        if previous.is_none() {
            tracing::debug!(code = currency.code(), "Registered currency");
        }
        Ok(currency)
    }

    pub fn contains(&self, code: &str) -> bool {
        Currency::new(code)
            .map(|currency| self.currencies.read().contains_key(&currency.code))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.currencies.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.read().is_empty()
    }
}

impl CurrencyRegistry for InMemoryCurrencyRegistry {
    fn currency(&self, code: &str) -> MoneyResult<Currency> {
        let key = Currency::new(code).map_err(|_| MoneyError::UnknownCurrency(code.to_string()))?;
        self.currencies
            .read()
            .get(&key.code)
            .copied()
            .ok_or_else(|| MoneyError::UnknownCurrency(code.to_string()))
    }
}

/// The process-wide registry used by code-based factories.
pub fn default_registry() -> &'static InMemoryCurrencyRegistry {
    static REGISTRY: OnceLock<InMemoryCurrencyRegistry> = OnceLock::new();
    REGISTRY.get_or_init(InMemoryCurrencyRegistry::with_iso_codes)
}
