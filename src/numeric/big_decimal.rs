// ============================================================================
// Arbitrary-Precision Decimal
// Unscaled BigInt coefficient with a base-10 scale
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::rounding::RoundingMode;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

/// Arbitrary-precision signed decimal number.
///
/// Represents `unscaled × 10^-scale`. The scale is significant for
/// representation: `1.0` and `1.00` are different values under `==`
/// (representational equality) but compare equal under
/// [`numeric_cmp`](Self::numeric_cmp).
///
/// # Example
/// ```
/// use decimal_money::numeric::{BigDecimal, RoundingMode};
///
/// let ten: BigDecimal = "10".parse().unwrap();
/// let three = BigDecimal::from(3);
/// let q = ten.div_with(&three, 16, RoundingMode::HalfEven).unwrap();
/// assert_eq!(q.to_string(), "3.333333333333333");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigDecimal {
    unscaled: BigInt,
    scale: i32,
}

/// 10^exp as a BigInt
fn ten_pow(exp: u32) -> BigInt {
    BigInt::from(10u8).pow(exp)
}

/// Number of decimal digits in the magnitude (zero has one digit)
fn digit_count(n: &BigInt) -> u64 {
    if n.is_zero() {
        return 1;
    }
    n.magnitude().to_string().len() as u64
}

fn checked_scale(scale: i64) -> NumericResult<i32> {
    i32::try_from(scale).map_err(|_| NumericError::Overflow)
}

/// Clamp a preferred scale into the i32 range (used only for zero results).
fn saturate_scale(scale: i64) -> i32 {
    scale.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

impl BigDecimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from an unscaled coefficient and a scale.
    #[inline]
    pub fn new(unscaled: impl Into<BigInt>, scale: i32) -> Self {
        Self {
            unscaled: unscaled.into(),
            scale,
        }
    }

    /// Zero with scale 0.
    #[inline]
    pub fn zero() -> Self {
        Self::new(BigInt::zero(), 0)
    }

    /// One with scale 0.
    #[inline]
    pub fn one() -> Self {
        Self::new(BigInt::one(), 0)
    }

    /// Convert a double through its shortest round-trip text, so `0.1`
    /// becomes exactly `0.1` rather than its binary expansion.
    ///
    /// # Errors
    /// Returns `InvalidInput` for NaN or infinite values.
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::InvalidInput);
        }
        value.to_string().parse()
    }

    /// Convert a float through its own text form (never widened to f64 first).
    ///
    /// # Errors
    /// Returns `InvalidInput` for NaN or infinite values.
    pub fn from_f32(value: f32) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::InvalidInput);
        }
        value.to_string().parse()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The unscaled coefficient.
    #[inline]
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// The scale (number of digits right of the decimal point, may be negative).
    #[inline]
    pub const fn scale(&self) -> i32 {
        self.scale
    }

    /// Sign as -1, 0 or 1.
    #[inline]
    pub fn signum(&self) -> i32 {
        if self.unscaled.is_zero() {
            0
        } else if self.unscaled.is_negative() {
            -1
        } else {
            1
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    /// True if the value is numerically one, whatever its scale.
    pub fn is_one(&self) -> bool {
        self.numeric_cmp(&Self::one()) == Ordering::Equal
    }

    /// True if the value has no fractional part.
    pub fn is_integral(&self) -> bool {
        if self.scale <= 0 || self.unscaled.is_zero() {
            return true;
        }
        // Non-zero with magnitude below one
        if self.scale as u64 >= self.precision() {
            return false;
        }
        (&self.unscaled % ten_pow(self.scale as u32)).is_zero()
    }

    /// Count of significant digits in the unscaled value.
    #[inline]
    pub fn precision(&self) -> u64 {
        digit_count(&self.unscaled)
    }

    // ========================================================================
    // Sign Operations
    // ========================================================================

    pub fn negate(&self) -> Self {
        Self::new(-&self.unscaled, self.scale)
    }

    pub fn abs(&self) -> Self {
        Self::new(self.unscaled.abs(), self.scale)
    }

    // ========================================================================
    // Exact Arithmetic
    // ========================================================================

    /// Bring both coefficients to the larger of the two scales.
    fn aligned(&self, other: &Self) -> (BigInt, BigInt, i32) {
        match self.scale.cmp(&other.scale) {
            Ordering::Equal => (self.unscaled.clone(), other.unscaled.clone(), self.scale),
            Ordering::Less => {
                let shift = (other.scale as i64 - self.scale as i64) as u32;
                (
                    &self.unscaled * ten_pow(shift),
                    other.unscaled.clone(),
                    other.scale,
                )
            },
            Ordering::Greater => {
                let shift = (self.scale as i64 - other.scale as i64) as u32;
                (
                    self.unscaled.clone(),
                    &other.unscaled * ten_pow(shift),
                    self.scale,
                )
            },
        }
    }

    /// Exact sum; scale is the larger operand scale.
    pub fn add(&self, other: &Self) -> Self {
        let (a, b, scale) = self.aligned(other);
        Self::new(a + b, scale)
    }

    /// Exact difference; scale is the larger operand scale.
    pub fn sub(&self, other: &Self) -> Self {
        let (a, b, scale) = self.aligned(other);
        Self::new(a - b, scale)
    }

    /// Exact product; scale is the sum of the operand scales.
    ///
    /// # Errors
    /// Returns `Overflow` if the resulting scale leaves the i32 range.
    pub fn mul(&self, other: &Self) -> NumericResult<Self> {
        let scale = checked_scale(self.scale as i64 + other.scale as i64)?;
        Ok(Self::new(&self.unscaled * &other.unscaled, scale))
    }

    // ========================================================================
    // Division
    // ========================================================================

    /// Exact quotient.
    ///
    /// The result has the preferred scale `self.scale - divisor.scale`,
    /// widened only as far as needed to represent the quotient exactly.
    ///
    /// # Errors
    /// - `DivisionByZero` if `divisor` is zero
    /// - `NonTerminating` if the quotient has no finite decimal expansion
    pub fn div_exact(&self, divisor: &Self) -> NumericResult<Self> {
        if divisor.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        let preferred = self.scale as i64 - divisor.scale as i64;
        if self.is_zero() {
            return Ok(Self::new(BigInt::zero(), saturate_scale(preferred)));
        }

        // The quotient terminates iff the reduced denominator is 2^a * 5^b.
        let gcd = self.unscaled.gcd(&divisor.unscaled);
        let mut reduced = divisor.unscaled.abs() / &gcd;
        let two = BigInt::from(2u8);
        let five = BigInt::from(5u8);
        let mut twos = 0u32;
        let mut fives = 0u32;
        while reduced.is_even() {
            reduced /= &two;
            twos += 1;
        }
        while (&reduced % &five).is_zero() {
            reduced /= &five;
            fives += 1;
        }
        if !reduced.is_one() {
            return Err(NumericError::NonTerminating);
        }

        let shift = twos.max(fives);
        let unscaled = (&self.unscaled * ten_pow(shift)) / &divisor.unscaled;
        let scale = checked_scale(preferred + shift as i64)?;
        Ok(Self::new(unscaled, scale))
    }

    /// Quotient rounded to at most `precision` significant digits.
    ///
    /// A `precision` of 0 requests the exact quotient (see [`div_exact`](Self::div_exact)).
    /// Trailing zeros are removed down to the preferred scale
    /// `self.scale - divisor.scale`.
    ///
    /// # Errors
    /// - `DivisionByZero` if `divisor` is zero
    /// - `NonTerminating` for an unlimited precision with no exact quotient
    /// - `RoundingNecessary` under [`RoundingMode::Unnecessary`] with an inexact quotient
    pub fn div_with(
        &self,
        divisor: &Self,
        precision: u32,
        rounding: RoundingMode,
    ) -> NumericResult<Self> {
        if precision == 0 {
            return self.div_exact(divisor);
        }
        if divisor.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        let preferred = self.scale as i64 - divisor.scale as i64;
        if self.is_zero() {
            return Ok(Self::new(BigInt::zero(), saturate_scale(preferred)));
        }

        let scaled_operands = |shift: i64| -> (BigInt, BigInt) {
            if shift >= 0 {
                (&self.unscaled * ten_pow(shift as u32), divisor.unscaled.clone())
            } else {
                (self.unscaled.clone(), &divisor.unscaled * ten_pow((-shift) as u32))
            }
        };

        // Pick the shift that leaves exactly `precision` digits in the
        // truncated quotient; the first guess is off by at most one.
        let mut shift = precision as i64 + digit_count(&divisor.unscaled) as i64
            - digit_count(&self.unscaled) as i64;
        let (mut numerator, mut denominator) = scaled_operands(shift);
        if digit_count(&(&numerator / &denominator)) > precision as u64 {
            shift -= 1;
            (numerator, denominator) = scaled_operands(shift);
        }

        let mut quotient = rounding.divide(&numerator, &denominator)?;
        if digit_count(&quotient) > precision as u64 {
            // Rounding carried into a new digit (e.g. 9.99 -> 10.0)
            quotient /= 10u8;
            shift -= 1;
        }

        let scale = preferred + shift;
        Self::strip_zeros_toward(quotient, scale, preferred)
    }

    /// Integer part of the quotient, truncated toward zero.
    ///
    /// The result scale is the preferred scale `self.scale - divisor.scale`
    /// where the value allows it.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero.
    pub fn div_to_integral(&self, divisor: &Self) -> NumericResult<Self> {
        if divisor.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        let preferred = self.scale as i64 - divisor.scale as i64;
        let (dividend, divisor_aligned, _) = self.aligned(divisor);
        let truncated = dividend / divisor_aligned;

        if preferred > 0 {
            let scale = checked_scale(preferred)?;
            Ok(Self::new(truncated * ten_pow(scale as u32), scale))
        } else {
            Self::strip_zeros_toward(truncated, 0, preferred)
        }
    }

    /// Remainder of truncating division: `self - self.div_to_integral(d) * d`.
    ///
    /// The remainder has the sign of the dividend.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero.
    pub fn rem(&self, divisor: &Self) -> NumericResult<Self> {
        let integral = self.div_to_integral(divisor)?;
        Ok(self.sub(&integral.mul(divisor)?))
    }

    /// Truncated quotient and remainder as a pair.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> NumericResult<(Self, Self)> {
        let integral = self.div_to_integral(divisor)?;
        let remainder = self.sub(&integral.mul(divisor)?);
        Ok((integral, remainder))
    }

    // ========================================================================
    // Scale and Precision
    // ========================================================================

    /// Round to at most `precision` significant digits. A precision of 0
    /// leaves the value untouched.
    ///
    /// # Errors
    /// - `RoundingNecessary` under [`RoundingMode::Unnecessary`] when non-zero digits would be dropped
    /// - `Overflow` if the resulting scale leaves the i32 range
    pub fn round(&self, precision: u32, rounding: RoundingMode) -> NumericResult<Self> {
        let digits = self.precision();
        if precision == 0 || digits <= precision as u64 {
            return Ok(self.clone());
        }

        let drop = digits - precision as u64;
        let mut unscaled = rounding.divide(&self.unscaled, &ten_pow(drop as u32))?;
        let mut scale = self.scale as i64 - drop as i64;
        if digit_count(&unscaled) > precision as u64 {
            unscaled /= 10u8;
            scale -= 1;
        }
        Ok(Self::new(unscaled, checked_scale(scale)?))
    }

    /// Rescale to exactly `scale` fractional digits.
    ///
    /// # Errors
    /// Returns `RoundingNecessary` under [`RoundingMode::Unnecessary`] if digits would be lost.
    pub fn set_scale(&self, scale: i32, rounding: RoundingMode) -> NumericResult<Self> {
        match scale.cmp(&self.scale) {
            Ordering::Equal => Ok(self.clone()),
            Ordering::Greater => {
                let shift = (scale as i64 - self.scale as i64) as u32;
                Ok(Self::new(&self.unscaled * ten_pow(shift), scale))
            },
            Ordering::Less => {
                let shift = (self.scale as i64 - scale as i64) as u32;
                let unscaled = rounding.divide(&self.unscaled, &ten_pow(shift))?;
                Ok(Self::new(unscaled, scale))
            },
        }
    }

    /// Remove trailing zeros from the coefficient. Zero becomes `0` with scale 0.
    pub fn strip_trailing_zeros(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let ten = BigInt::from(10u8);
        let mut unscaled = self.unscaled.clone();
        let mut scale = self.scale as i64;
        loop {
            let (quotient, remainder) = unscaled.div_rem(&ten);
            if !remainder.is_zero() || scale == i32::MIN as i64 {
                break;
            }
            unscaled = quotient;
            scale -= 1;
        }
        Self::new(unscaled, scale as i32)
    }

    /// Strip trailing zeros while the scale stays above `preferred`.
    fn strip_zeros_toward(mut unscaled: BigInt, scale: i64, preferred: i64) -> NumericResult<Self> {
        if unscaled.is_zero() {
            return Ok(Self::new(unscaled, saturate_scale(preferred.min(scale))));
        }
        let ten = BigInt::from(10u8);
        let mut scale = scale;
        while scale > preferred {
            let (quotient, remainder) = unscaled.div_rem(&ten);
            if !remainder.is_zero() {
                break;
            }
            unscaled = quotient;
            scale -= 1;
        }
        Ok(Self::new(unscaled, checked_scale(scale)?))
    }

    /// Move the decimal point `n` places to the right: `self × 10^n`.
    ///
    /// Only the scale changes; the coefficient is not rounded.
    ///
    /// # Errors
    /// Returns `Overflow` if the resulting scale leaves the i32 range.
    pub fn scale_by_power_of_ten(&self, n: i32) -> NumericResult<Self> {
        let scale = checked_scale(self.scale as i64 - n as i64)?;
        Ok(Self::new(self.unscaled.clone(), scale))
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare numeric values, ignoring scale (`1.0` equals `1.00`).
    pub fn numeric_cmp(&self, other: &Self) -> Ordering {
        let (left, right) = (self.signum(), other.signum());
        if left != right {
            return left.cmp(&right);
        }
        if left == 0 {
            return Ordering::Equal;
        }
        // Differing leading-digit positions decide without aligning scales.
        let by_exponent = self.adjusted_exponent().cmp(&other.adjusted_exponent());
        if by_exponent != Ordering::Equal {
            return if left > 0 { by_exponent } else { by_exponent.reverse() };
        }
        let (a, b, _) = self.aligned(other);
        a.cmp(&b)
    }

    /// Power of ten of the leading digit: `precision - 1 - scale`.
    fn adjusted_exponent(&self) -> i64 {
        self.precision() as i64 - 1 - self.scale as i64
    }

    // ========================================================================
    // Text
    // ========================================================================

    /// Render without an exponent, padding with zeros as needed.
    pub fn to_plain_string(&self) -> String {
        let digits = self.unscaled.magnitude().to_string();
        let sign = if self.unscaled.is_negative() { "-" } else { "" };
        if self.scale <= 0 {
            let zeros = if self.unscaled.is_zero() {
                String::new()
            } else {
                "0".repeat((-(self.scale as i64)) as usize)
            };
            return format!("{sign}{digits}{zeros}");
        }
        format!("{sign}{}", insert_point(&digits, self.scale as usize))
    }
}

/// Place a decimal point `scale` digits from the right of `digits`.
fn insert_point(digits: &str, scale: usize) -> String {
    if digits.len() > scale {
        let (int_part, frac_part) = digits.split_at(digits.len() - scale);
        format!("{int_part}.{frac_part}")
    } else {
        format!("0.{}{}", "0".repeat(scale - digits.len()), digits)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for BigDecimal {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl Neg for BigDecimal {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.unscaled, self.scale)
    }
}

impl Neg for &BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigDecimal {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::new(BigInt::from(value), 0)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for BigDecimal {
    #[inline]
    fn from(value: BigInt) -> Self {
        Self::new(value, 0)
    }
}

// ============================================================================
// rust_decimal Interop (for API boundaries)
// ============================================================================

impl From<rust_decimal::Decimal> for BigDecimal {
    fn from(value: rust_decimal::Decimal) -> Self {
        Self::new(BigInt::from(value.mantissa()), value.scale() as i32)
    }
}

impl BigDecimal {
    /// Convert to `rust_decimal::Decimal` when the value fits its 96-bit,
    /// scale 0..=28 representation.
    ///
    /// # Errors
    /// - `Overflow` if the coefficient does not fit
    /// - `RoundingNecessary` if more than 28 fractional digits are significant
    pub fn to_rust_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        const MAX_SCALE: i32 = 28;

        let mut value = if self.scale < 0 {
            self.set_scale(0, RoundingMode::Unnecessary)?
        } else {
            self.clone()
        };
        if value.scale > MAX_SCALE {
            value = value.strip_trailing_zeros();
            if value.scale > MAX_SCALE {
                return Err(NumericError::RoundingNecessary);
            }
            if value.scale < 0 {
                value = value.set_scale(0, RoundingMode::Unnecessary)?;
            }
        }

        let mantissa = value.unscaled.to_i128().ok_or(NumericError::Overflow)?;
        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, value.scale as u32)
            .map_err(|_| NumericError::Overflow)
    }
}

// ============================================================================
// Numeric Input Conversion
// ============================================================================

/// Any numeric input accepted by money construction and arithmetic.
///
/// Floating-point values are converted through their text form.
pub trait IntoBigDecimal {
    fn into_big_decimal(self) -> NumericResult<BigDecimal>;
}

macro_rules! impl_into_big_decimal_integer {
    ($($t:ty),*) => {
        $(
            impl IntoBigDecimal for $t {
                #[inline]
                fn into_big_decimal(self) -> NumericResult<BigDecimal> {
                    Ok(BigDecimal::from(self))
                }
            }
        )*
    };
}

impl_into_big_decimal_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl IntoBigDecimal for f64 {
    fn into_big_decimal(self) -> NumericResult<BigDecimal> {
        BigDecimal::from_f64(self)
    }
}

impl IntoBigDecimal for f32 {
    fn into_big_decimal(self) -> NumericResult<BigDecimal> {
        BigDecimal::from_f32(self)
    }
}

impl IntoBigDecimal for BigInt {
    fn into_big_decimal(self) -> NumericResult<BigDecimal> {
        Ok(BigDecimal::from(self))
    }
}

impl IntoBigDecimal for BigDecimal {
    #[inline]
    fn into_big_decimal(self) -> NumericResult<BigDecimal> {
        Ok(self)
    }
}

impl IntoBigDecimal for &BigDecimal {
    #[inline]
    fn into_big_decimal(self) -> NumericResult<BigDecimal> {
        Ok(self.clone())
    }
}

impl IntoBigDecimal for rust_decimal::Decimal {
    fn into_big_decimal(self) -> NumericResult<BigDecimal> {
        Ok(BigDecimal::from(self))
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BigDecimal({}, unscaled={}, scale={})",
            self, self.unscaled, self.scale
        )
    }
}

impl fmt::Display for BigDecimal {
    /// Canonical form: plain notation when `scale >= 0` and the adjusted
    /// exponent is at least -6, scientific notation (`1.23E+5`) otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.unscaled.magnitude().to_string();
        let sign = if self.unscaled.is_negative() { "-" } else { "" };
        let adjusted = -(self.scale as i64) + (digits.len() as i64 - 1);

        if self.scale == 0 {
            return write!(f, "{sign}{digits}");
        }
        if self.scale > 0 && adjusted >= -6 {
            return write!(f, "{sign}{}", insert_point(&digits, self.scale as usize));
        }

        let (lead, rest) = digits.split_at(1);
        let exp_sign = if adjusted >= 0 { "+" } else { "-" };
        if rest.is_empty() {
            write!(f, "{sign}{lead}E{exp_sign}{}", adjusted.unsigned_abs())
        } else {
            write!(f, "{sign}{lead}.{rest}E{exp_sign}{}", adjusted.unsigned_abs())
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for BigDecimal {
    type Err = NumericError;

    /// Parse from a decimal string.
    ///
    /// # Examples
    /// - "123" -> unscaled 123, scale 0
    /// - "-0.050" -> unscaled -50, scale 3
    /// - "1.5E+3" -> unscaled 15, scale -2
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (mantissa, exponent) = match body.find(['e', 'E']) {
            Some(pos) => {
                let exp: i64 = body[pos + 1..]
                    .parse()
                    .map_err(|_| NumericError::InvalidInput)?;
                (&body[..pos], exp)
            },
            None => (body, 0),
        };

        let (int_str, frac_str) = match mantissa.find('.') {
            Some(pos) => (&mantissa[..pos], &mantissa[pos + 1..]),
            None => (mantissa, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (int_str.is_empty() && frac_str.is_empty())
            || !all_digits(int_str)
            || !all_digits(frac_str)
        {
            return Err(NumericError::InvalidInput);
        }

        let digits = format!("{int_str}{frac_str}");
        let mut unscaled =
            BigInt::from_str(&digits).map_err(|_| NumericError::InvalidInput)?;
        if negative {
            unscaled = -unscaled;
        }

        let scale = (frac_str.len() as i64)
            .checked_sub(exponent)
            .ok_or(NumericError::Overflow)?;
        let scale = checked_scale(scale)?;
        Ok(Self::new(unscaled, scale))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_accessors() {
        let x = dec("123.450");
        assert_eq!(x.unscaled(), &BigInt::from(123450));
        assert_eq!(x.scale(), 3);
        assert_eq!(x.precision(), 6);
        assert_eq!(x.signum(), 1);

        let y = dec("-0.001");
        assert_eq!(y.unscaled(), &BigInt::from(-1));
        assert_eq!(y.scale(), 3);
        assert_eq!(y.signum(), -1);

        let z = dec("1.5E+3");
        assert_eq!(z.unscaled(), &BigInt::from(15));
        assert_eq!(z.scale(), -2);

        assert_eq!(dec(".5").scale(), 1);
        assert_eq!(dec("+7").unscaled(), &BigInt::from(7));
    }

    #[test]
    fn test_parse_invalid() {
        for bad in [
            "",
            "-",
            ".",
            "abc",
            "1.2.3",
            "1e",
            "1x",
            "--1",
            "1e999999999999",
            "1e-9223372036854775808",
            "0.1e-9223372036854775807",
            "1e9223372036854775807",
        ] {
            assert!(bad.parse::<BigDecimal>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_display_canonical() {
        assert_eq!(dec("123.45").to_string(), "123.45");
        assert_eq!(dec("-0.050").to_string(), "-0.050");
        assert_eq!(dec("0.000001").to_string(), "0.000001");
        assert_eq!(dec("0.0000001").to_string(), "1E-7");
        assert_eq!(BigDecimal::new(123, -2).to_string(), "1.23E+4");
        assert_eq!(BigDecimal::new(0, -3).to_string(), "0E+3");
        assert_eq!(BigDecimal::new(0, 2).to_string(), "0.00");
    }

    #[test]
    fn test_plain_string() {
        assert_eq!(BigDecimal::new(123, -2).to_plain_string(), "12300");
        assert_eq!(dec("0.0000001").to_plain_string(), "0.0000001");
        assert_eq!(BigDecimal::new(0, -3).to_plain_string(), "0");
    }

    #[test]
    fn test_from_f64_uses_text() {
        let x = BigDecimal::from_f64(0.1).unwrap();
        assert_eq!(x, dec("0.1"));
        assert_eq!(BigDecimal::from_f32(2.5).unwrap(), dec("2.5"));
        assert_eq!(
            BigDecimal::from_f64(f64::NAN),
            Err(NumericError::InvalidInput)
        );
        assert_eq!(
            BigDecimal::from_f64(f64::INFINITY),
            Err(NumericError::InvalidInput)
        );
    }

    #[test]
    fn test_add_sub_keep_larger_scale() {
        let sum = dec("1.5").add(&dec("2.25"));
        assert_eq!(sum, dec("3.75"));

        let diff = dec("1.50").sub(&dec("3"));
        assert_eq!(diff, dec("-1.50"));
        assert_eq!(diff.scale(), 2);
    }

    #[test]
    fn test_mul_adds_scales() {
        let product = dec("1.5").mul(&dec("1.5")).unwrap();
        assert_eq!(product, dec("2.25"));

        let huge = BigDecimal::new(1, i32::MAX);
        assert_eq!(huge.mul(&huge), Err(NumericError::Overflow));
    }

    #[test]
    fn test_div_with_precision() {
        let q = dec("10").div_with(&dec("3"), 16, RoundingMode::HalfEven).unwrap();
        assert_eq!(q.to_string(), "3.333333333333333");
        assert_eq!(q.precision(), 16);

        let q = dec("2").div_with(&dec("3"), 7, RoundingMode::HalfEven).unwrap();
        assert_eq!(q.to_string(), "0.6666667");
    }

    #[test]
    fn test_div_with_strips_to_preferred_scale() {
        let q = dec("10").div_with(&dec("4"), 16, RoundingMode::HalfEven).unwrap();
        assert_eq!(q.to_string(), "2.5");

        let q = dec("1.00").div_with(&dec("1"), 16, RoundingMode::HalfEven).unwrap();
        assert_eq!(q.to_string(), "1.00");

        let q = dec("1000").div_with(&dec("1"), 2, RoundingMode::HalfEven).unwrap();
        assert_eq!(q.to_string(), "1.0E+3");
    }

    #[test]
    fn test_div_with_rounding_carry() {
        // 9.996 rounded to 3 digits -> 10.0
        let q = dec("9.996").div_with(&dec("1"), 3, RoundingMode::HalfUp).unwrap();
        assert_eq!(q.to_string(), "10.0");
    }

    #[test]
    fn test_div_with_unnecessary() {
        let result = dec("1").div_with(&dec("3"), 10, RoundingMode::Unnecessary);
        assert_eq!(result, Err(NumericError::RoundingNecessary));
    }

    #[test]
    fn test_div_exact() {
        assert_eq!(dec("1").div_exact(&dec("8")).unwrap(), dec("0.125"));
        assert_eq!(dec("6.0").div_exact(&dec("2")).unwrap(), dec("3.0"));
        assert_eq!(
            dec("1").div_exact(&dec("3")),
            Err(NumericError::NonTerminating)
        );
        assert_eq!(
            dec("1").div_exact(&BigDecimal::zero()),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_div_to_integral_truncates() {
        assert_eq!(dec("7").div_to_integral(&dec("2")).unwrap(), dec("3"));
        assert_eq!(dec("-7").div_to_integral(&dec("2")).unwrap(), dec("-3"));
        assert_eq!(dec("7.50").div_to_integral(&dec("2")).unwrap(), dec("3.00"));
        assert_eq!(dec("0.5").div_to_integral(&dec("2")).unwrap(), dec("0.0"));
    }

    #[test]
    fn test_remainder_sign_follows_dividend() {
        assert_eq!(dec("7").rem(&dec("2")).unwrap(), dec("1"));
        assert_eq!(dec("-7").rem(&dec("2")).unwrap(), dec("-1"));
        assert_eq!(dec("7").rem(&dec("-2")).unwrap(), dec("1"));
        assert_eq!(dec("7.5").rem(&dec("2")).unwrap(), dec("1.5"));
    }

    #[test]
    fn test_div_rem_reconstructs() {
        let value = dec("-123.45");
        let divisor = dec("7");
        let (q, r) = value.div_rem(&divisor).unwrap();
        let rebuilt = q.mul(&divisor).unwrap().add(&r);
        assert_eq!(rebuilt.numeric_cmp(&value), Ordering::Equal);
    }

    #[test]
    fn test_round() {
        let x = dec("123.456");
        assert_eq!(x.round(4, RoundingMode::HalfUp).unwrap(), dec("123.5"));
        assert_eq!(x.round(2, RoundingMode::Down).unwrap().to_string(), "1.2E+2");
        assert_eq!(x.round(0, RoundingMode::Down).unwrap(), x);
        assert_eq!(x.round(10, RoundingMode::Down).unwrap(), x);
        assert_eq!(dec("999.9").round(3, RoundingMode::HalfUp).unwrap().to_string(), "1.00E+3");
        assert_eq!(
            x.round(3, RoundingMode::Unnecessary),
            Err(NumericError::RoundingNecessary)
        );
    }

    #[test]
    fn test_set_scale() {
        assert_eq!(dec("1.5").set_scale(3, RoundingMode::Unnecessary).unwrap(), dec("1.500"));
        assert_eq!(dec("1.25").set_scale(1, RoundingMode::HalfEven).unwrap(), dec("1.2"));
        assert!(dec("1.25").set_scale(1, RoundingMode::Unnecessary).is_err());
    }

    #[test]
    fn test_strip_trailing_zeros() {
        assert_eq!(dec("1.500").strip_trailing_zeros(), dec("1.5"));
        assert_eq!(dec("100").strip_trailing_zeros(), BigDecimal::new(1, -2));
        assert_eq!(dec("0.000").strip_trailing_zeros(), BigDecimal::zero());
        assert_eq!(dec("0.000").strip_trailing_zeros().scale(), 0);
    }

    #[test]
    fn test_scale_by_power_of_ten() {
        let x = dec("1.23");
        assert_eq!(x.scale_by_power_of_ten(2).unwrap().to_string(), "123");
        assert_eq!(x.scale_by_power_of_ten(-2).unwrap().to_string(), "0.0123");
        assert_eq!(
            BigDecimal::new(1, i32::MIN).scale_by_power_of_ten(1),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_numeric_cmp_ignores_scale() {
        assert_eq!(dec("1.0").numeric_cmp(&dec("1.00")), Ordering::Equal);
        assert_ne!(dec("1.0"), dec("1.00"));
        assert_eq!(dec("-1").numeric_cmp(&dec("0.5")), Ordering::Less);
        assert_eq!(dec("0.00").numeric_cmp(&dec("0")), Ordering::Equal);
        assert_eq!(dec("2.01").numeric_cmp(&dec("2.1")), Ordering::Less);
        assert_eq!(dec("-99").numeric_cmp(&dec("-100.0")), Ordering::Greater);
        assert_eq!(dec("9.99").numeric_cmp(&dec("10")), Ordering::Less);
    }

    #[test]
    fn test_numeric_cmp_far_apart_exponents() {
        // Decided by leading-digit position; aligning would need 10^20000000
        let huge = dec("1e+20000000");
        let tiny = dec("1e-20000000");
        let one = BigDecimal::one();
        assert_eq!(huge.numeric_cmp(&one), Ordering::Greater);
        assert_eq!(tiny.numeric_cmp(&one), Ordering::Less);
        assert_eq!(huge.negate().numeric_cmp(&tiny.negate()), Ordering::Less);
        assert_eq!(dec("-1e-20000000").numeric_cmp(&one.negate()), Ordering::Greater);
        assert!(!huge.is_one());
        assert!(!tiny.is_one());
        assert!(huge.is_integral());
        assert!(!tiny.is_integral());
    }

    #[test]
    fn test_is_one_and_integral() {
        assert!(dec("1.000").is_one());
        assert!(!dec("1.001").is_one());
        assert!(dec("12.00").is_integral());
        assert!(!dec("12.01").is_integral());
        assert!(BigDecimal::new(5, -3).is_integral());
    }

    #[test]
    fn test_rust_decimal_interop() {
        use rust_decimal::Decimal;

        let d = Decimal::new(12345, 2); // 123.45
        let x = BigDecimal::from(d);
        assert_eq!(x, dec("123.45"));
        assert_eq!(x.to_rust_decimal().unwrap(), d);

        assert_eq!(
            BigDecimal::new(5, -2).to_rust_decimal().unwrap(),
            Decimal::from(500)
        );
        let too_precise = dec("0.00000000000000000000000000001");
        assert_eq!(
            too_precise.to_rust_decimal(),
            Err(NumericError::RoundingNecessary)
        );
    }

    #[test]
    fn test_negation() {
        let x = dec("100.5");
        assert_eq!(-x.clone(), dec("-100.5"));
        assert_eq!((-&x).negate(), x);
        assert_eq!(dec("-3").abs(), dec("3"));
    }
}
