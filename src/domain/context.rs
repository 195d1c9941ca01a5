// ============================================================================
// Numeric Context
// Precision and rounding policy governing money arithmetic
// ============================================================================

use crate::domain::config::{
    ConfigError, ConfigSource, MonetaryConfig, MATH_CONTEXT_KEY, PRECISION_KEY,
    ROUNDING_MODE_KEY,
};
use crate::numeric::{BigDecimal, NumericResult, RoundingMode};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Owner tag of contexts that govern [`Money`](crate::domain::Money)
pub const MONEY_AMOUNT_TYPE: &str = "Money";

// ============================================================================
// Canonical Widths
// ============================================================================

/// Standard precision/rounding presets usable as a configuration shorthand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalWidth {
    /// 7 digits, half-even (32-bit decimal equivalent)
    Decimal32,
    /// 16 digits, half-even (64-bit decimal equivalent)
    Decimal64,
    /// 34 digits, half-even (128-bit decimal equivalent)
    Decimal128,
    /// No digit limit, half-up
    Unlimited,
}

impl CanonicalWidth {
    pub const fn precision(self) -> u32 {
        match self {
            CanonicalWidth::Decimal32 => 7,
            CanonicalWidth::Decimal64 => 16,
            CanonicalWidth::Decimal128 => 34,
            CanonicalWidth::Unlimited => 0,
        }
    }

    pub const fn rounding(self) -> RoundingMode {
        match self {
            CanonicalWidth::Unlimited => RoundingMode::HalfUp,
            _ => RoundingMode::HalfEven,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            CanonicalWidth::Decimal32 => "DECIMAL32",
            CanonicalWidth::Decimal64 => "DECIMAL64",
            CanonicalWidth::Decimal128 => "DECIMAL128",
            CanonicalWidth::Unlimited => "UNLIMITED",
        }
    }
}

impl fmt::Display for CanonicalWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CanonicalWidth {
    type Err = ResolutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DECIMAL32" => Ok(CanonicalWidth::Decimal32),
            "DECIMAL64" => Ok(CanonicalWidth::Decimal64),
            "DECIMAL128" => Ok(CanonicalWidth::Decimal128),
            "UNLIMITED" => Ok(CanonicalWidth::Unlimited),
            _ => Err(ResolutionError::UnknownWidth(s.to_string())),
        }
    }
}

// ============================================================================
// Numeric Context
// ============================================================================

/// Immutable precision/rounding policy for one amount type.
///
/// A precision of 0 means unlimited. Contexts are `Copy`; the process-wide
/// default for money is resolved once by [`NumericContext::money_default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumericContext {
    precision: u32,
    rounding: RoundingMode,
    amount_type: &'static str,
}

impl NumericContext {
    /// Create a money context with the given precision and rounding.
    pub const fn new(precision: u32, rounding: RoundingMode) -> Self {
        Self::for_amount_type(precision, rounding, MONEY_AMOUNT_TYPE)
    }

    /// Create a context owned by an arbitrary amount type.
    pub const fn for_amount_type(
        precision: u32,
        rounding: RoundingMode,
        amount_type: &'static str,
    ) -> Self {
        Self {
            precision,
            rounding,
            amount_type,
        }
    }

    /// Money context for a canonical width.
    pub const fn from_width(width: CanonicalWidth) -> Self {
        Self::new(width.precision(), width.rounding())
    }

    /// Maximum significant digits (0 = unlimited)
    #[inline]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    #[inline]
    pub const fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// The amount type this context belongs to
    #[inline]
    pub const fn amount_type(&self) -> &'static str {
        self.amount_type
    }

    #[inline]
    pub const fn is_unlimited(&self) -> bool {
        self.precision == 0
    }

    /// Builder method: Replace the precision
    pub const fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method: Replace the rounding mode
    pub const fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Builder method: Retag the owning amount type
    pub const fn with_amount_type(mut self, amount_type: &'static str) -> Self {
        self.amount_type = amount_type;
        self
    }

    /// True if this context allows at least as many digits as `other`.
    pub const fn is_at_least_as_wide_as(&self, other: &Self) -> bool {
        self.precision == 0 || (other.precision != 0 && self.precision >= other.precision)
    }

    /// Coerce a value into this context: round to `precision` digits with
    /// this context's rounding mode.
    ///
    /// # Errors
    /// Returns `RoundingNecessary` when digits must be dropped under
    /// [`RoundingMode::Unnecessary`].
    pub fn apply(&self, value: BigDecimal) -> NumericResult<BigDecimal> {
        if self.precision == 0 || value.precision() <= self.precision as u64 {
            return Ok(value);
        }
        value.round(self.precision, self.rounding)
    }

    /// The process-wide default money context.
    ///
    /// Resolved at most once per process from [`MonetaryConfig::load`];
    /// concurrent first callers observe the same value.
    pub fn money_default() -> NumericContext {
        static DEFAULT_CONTEXT: OnceLock<NumericContext> = OnceLock::new();
        *DEFAULT_CONTEXT.get_or_init(|| {
            MonetaryConfig::load()
                .map_err(ResolutionError::from)
                .and_then(|config| try_resolve(&config))
                .unwrap_or_else(fallback_context)
        })
    }
}

impl fmt::Display for NumericContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NumericContext[amountType={}, precision={}, rounding={}]",
            self.amount_type, self.precision, self.rounding
        )
    }
}

// ============================================================================
// Default Context Resolution
// ============================================================================

/// Reasons a configured default context could not be built.
#[derive(Debug)]
pub enum ResolutionError {
    /// Precision value is not a non-negative integer
    InvalidPrecision(String),
    /// Rounding mode name is not recognized
    InvalidRoundingMode(String),
    /// Canonical width name is not recognized
    UnknownWidth(String),
    /// Configuration could not be loaded
    Config(ConfigError),
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionError::InvalidPrecision(value) => {
                write!(f, "invalid precision {value:?}")
            },
            ResolutionError::InvalidRoundingMode(value) => {
                write!(f, "invalid rounding mode {value:?}")
            },
            ResolutionError::UnknownWidth(value) => write!(f, "unknown math context {value:?}"),
            ResolutionError::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ResolutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResolutionError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for ResolutionError {
    fn from(err: ConfigError) -> Self {
        ResolutionError::Config(err)
    }
}

fn try_resolve(source: &dyn ConfigSource) -> Result<NumericContext, ResolutionError> {
    if let Some(value) = source.lookup(PRECISION_KEY) {
        let precision: u32 = value
            .trim()
            .parse()
            .map_err(|_| ResolutionError::InvalidPrecision(value.clone()))?;
        let rounding = match source.lookup(ROUNDING_MODE_KEY) {
            Some(name) => name
                .parse()
                .map_err(|_| ResolutionError::InvalidRoundingMode(name.clone()))?,
            None => RoundingMode::HalfUp,
        };
        tracing::info!(
            precision,
            rounding = %rounding,
            "Using custom numeric context"
        );
        return Ok(NumericContext::new(precision, rounding));
    }

    match source.lookup(MATH_CONTEXT_KEY) {
        Some(name) => {
            let width: CanonicalWidth = name.parse()?;
            tracing::info!(width = %width, "Using configured canonical numeric context");
            Ok(NumericContext::from_width(width))
        },
        None => {
            tracing::info!("Using default numeric context DECIMAL64");
            Ok(NumericContext::from_width(CanonicalWidth::Decimal64))
        },
    }
}

/// Resolve the default money context from a configuration source.
///
/// Resolution order:
/// 1. explicit precision (+ optional rounding mode, default half-up)
/// 2. canonical width name
/// 3. DECIMAL64
///
/// Any resolution failure is logged and yields DECIMAL64; this never fails.
pub fn resolve_default_context(source: &dyn ConfigSource) -> NumericContext {
    try_resolve(source).unwrap_or_else(fallback_context)
}

fn fallback_context(err: ResolutionError) -> NumericContext {
    tracing::error!(
        error = %err,
        "Error evaluating default numeric context, using default (DECIMAL64)"
    );
    NumericContext::from_width(CanonicalWidth::Decimal64)
}
