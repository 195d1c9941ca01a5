// ============================================================================
// Numeric Module
// Arbitrary-precision decimal arithmetic for monetary calculations
// ============================================================================
//
// This module provides:
// - BigDecimal: unscaled BigInt coefficient with a base-10 scale
// - RoundingMode: rules for discarding digits
// - NumericError: Error types for arithmetic operations
// - IntoBigDecimal: numeric inputs accepted by money construction
//
// Design principles:
// - No binary floating-point arithmetic (floats are converted through text)
// - All fallible arithmetic returns Result (no panics)
// - Exact operations by default; precision is bounded by an explicit
//   digit count and rounding mode

mod big_decimal;
mod errors;
mod rounding;

pub use big_decimal::{BigDecimal, IntoBigDecimal};
pub use errors::{NumericError, NumericResult};
pub use rounding::RoundingMode;
