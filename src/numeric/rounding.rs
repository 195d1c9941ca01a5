// ============================================================================
// Rounding Modes
// Rules for discarding digits from a decimal coefficient
// ============================================================================

use super::errors::{NumericError, NumericResult};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rounding policy applied when a result has more digits than allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum RoundingMode {
    /// Away from zero
    Up,
    /// Toward zero (truncation)
    Down,
    /// Toward positive infinity
    Ceiling,
    /// Toward negative infinity
    Floor,
    /// Nearest neighbour, ties away from zero
    HalfUp,
    /// Nearest neighbour, ties toward zero
    HalfDown,
    /// Nearest neighbour, ties to the even neighbour (banker's rounding)
    HalfEven,
    /// Rounding is disallowed: discarding a non-zero digit is an error
    Unnecessary,
}

impl RoundingMode {
    /// Canonical upper-case name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            RoundingMode::Up => "UP",
            RoundingMode::Down => "DOWN",
            RoundingMode::Ceiling => "CEILING",
            RoundingMode::Floor => "FLOOR",
            RoundingMode::HalfUp => "HALF_UP",
            RoundingMode::HalfDown => "HALF_DOWN",
            RoundingMode::HalfEven => "HALF_EVEN",
            RoundingMode::Unnecessary => "UNNECESSARY",
        }
    }

    /// Decides whether the truncated `quotient` must move one unit away from zero.
    ///
    /// `remainder` carries the sign of the exact value and `divisor` is positive.
    fn rounds_away(
        self,
        quotient: &BigInt,
        remainder: &BigInt,
        divisor: &BigInt,
    ) -> NumericResult<bool> {
        if remainder.is_zero() {
            return Ok(false);
        }

        let away = match self {
            RoundingMode::Up => true,
            RoundingMode::Down => false,
            RoundingMode::Ceiling => remainder.is_positive(),
            RoundingMode::Floor => remainder.is_negative(),
            RoundingMode::HalfUp => (remainder.abs() * 2u8) >= *divisor,
            RoundingMode::HalfDown => (remainder.abs() * 2u8) > *divisor,
            RoundingMode::HalfEven => {
                let doubled = remainder.abs() * 2u8;
                match doubled.cmp(divisor) {
                    std::cmp::Ordering::Greater => true,
                    std::cmp::Ordering::Equal => quotient.is_odd(),
                    std::cmp::Ordering::Less => false,
                }
            },
            RoundingMode::Unnecessary => return Err(NumericError::RoundingNecessary),
        };
        Ok(away)
    }

    /// Divides `numerator` by `divisor` and rounds the integer quotient.
    ///
    /// # Errors
    /// - `DivisionByZero` if `divisor` is zero
    /// - `RoundingNecessary` under [`RoundingMode::Unnecessary`] with a non-zero remainder
    pub fn divide(self, numerator: &BigInt, divisor: &BigInt) -> NumericResult<BigInt> {
        if divisor.is_zero() {
            return Err(NumericError::DivisionByZero);
        }

        // Normalize so the divisor is positive and the remainder carries the sign.
        let (numerator, divisor) = if divisor.is_negative() {
            (-numerator, -divisor)
        } else {
            (numerator.clone(), divisor.clone())
        };

        let (quotient, remainder) = numerator.div_rem(&divisor);
        if self.rounds_away(&quotient, &remainder, &divisor)? {
            if remainder.is_negative() {
                Ok(quotient - 1)
            } else {
                Ok(quotient + 1)
            }
        } else {
            Ok(quotient)
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoundingMode {
    type Err = NumericError;

    /// Parses a rounding mode name, case-insensitively.
    ///
    /// Accepts both `HALF_EVEN` and `ROUND_HALF_EVEN` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let name = upper.strip_prefix("ROUND_").unwrap_or(&upper);
        match name {
            "UP" => Ok(RoundingMode::Up),
            "DOWN" => Ok(RoundingMode::Down),
            "CEILING" => Ok(RoundingMode::Ceiling),
            "FLOOR" => Ok(RoundingMode::Floor),
            "HALF_UP" => Ok(RoundingMode::HalfUp),
            "HALF_DOWN" => Ok(RoundingMode::HalfDown),
            "HALF_EVEN" => Ok(RoundingMode::HalfEven),
            "UNNECESSARY" => Ok(RoundingMode::Unnecessary),
            _ => Err(NumericError::InvalidInput),
        }
    }
}
