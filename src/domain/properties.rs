//! # Property-Based Tests for Money Arithmetic
//!
//! Uses proptest to check the algebraic laws that hold for every amount
//! that fits the 16-digit context.
//!
//! # Test Coverage
//!
//! - Double negation and zero identity
//! - `divide_and_remainder` reconstruction
//! - Equality and hashing across scales
//! - `compare_to` agreement with `is_equal_to`

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::domain::context::{CanonicalWidth, NumericContext};
use crate::domain::currency::Currency;
use crate::domain::money::Money;
use crate::numeric::BigDecimal;

fn usd(unscaled: i64, scale: i32) -> Money {
    let context = NumericContext::from_width(CanonicalWidth::Decimal64);
    Money::with_context(BigDecimal::new(unscaled, scale), Currency::new("USD").unwrap(), context)
        .unwrap()
}

fn hash_of(money: &Money) -> u64 {
    let mut hasher = DefaultHasher::new();
    money.hash(&mut hasher);
    hasher.finish()
}

// ============================================================================
// Sign and Identity
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn double_negation_is_identity(unscaled in -1_000_000_000_000i64..1_000_000_000_000i64, scale in 0i32..8) {
        let amount = usd(unscaled, scale);
        let back = amount.negate().negate();
        prop_assert_eq!(back.number(), amount.number());
        prop_assert_eq!(back.currency(), amount.currency());
    }

    #[test]
    fn adding_zero_returns_same_instance(unscaled in any::<i64>(), scale in 0i32..8, zero_scale in 0i32..5) {
        let amount = usd(unscaled, scale);
        let zero = usd(0, zero_scale);
        prop_assert!(Money::ptr_eq(&amount, &amount.add(&zero).unwrap()));
        prop_assert!(Money::ptr_eq(&amount, &amount.subtract(&zero).unwrap()));
    }

    #[test]
    fn abs_is_never_negative(unscaled in any::<i64>(), scale in 0i32..8) {
        let amount = usd(unscaled, scale);
        prop_assert!(amount.abs().is_positive_or_zero());
        prop_assert_eq!(amount.abs(), amount.negate().abs());
    }
}

// ============================================================================
// Division
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn divide_and_remainder_reconstructs_dividend(
        unscaled in -1_000_000_000_000i64..1_000_000_000_000i64,
        scale in 0i32..6,
        divisor in prop_oneof![-1000i64..-1, 1i64..1000],
    ) {
        let amount = usd(unscaled, scale);
        let (quotient, remainder) = amount.divide_and_remainder(divisor).unwrap();

        prop_assert!(quotient.number().is_integral());
        prop_assert!(remainder.is_zero() || remainder.signum() == amount.signum());
        prop_assert!(remainder.number().abs().numeric_cmp(&BigDecimal::from(divisor.abs())) == Ordering::Less);

        let rebuilt = quotient
            .number()
            .mul(&BigDecimal::from(divisor))
            .unwrap()
            .add(remainder.number());
        prop_assert_eq!(rebuilt.numeric_cmp(amount.number()), Ordering::Equal);
    }

    #[test]
    fn divide_stays_within_context(unscaled in 1i64..1_000_000_000, divisor in 1i64..10_000) {
        let quotient = usd(unscaled, 2).divide(divisor).unwrap();
        prop_assert!(quotient.precision() <= 16);
    }
}

// ============================================================================
// Equality and Ordering
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn padded_amounts_are_equal_and_hash_alike(unscaled in -1_000_000_000i64..1_000_000_000i64, scale in 0i32..4, pad in 1u32..5) {
        let amount = usd(unscaled, scale);
        let padded = usd(unscaled * 10i64.pow(pad), scale + pad as i32);
        prop_assert_eq!(&amount, &padded);
        prop_assert_eq!(hash_of(&amount), hash_of(&padded));
        prop_assert_eq!(amount.cmp(&padded), Ordering::Equal);
    }

    #[test]
    fn compare_to_agrees_with_is_equal_to(
        a in -1_000_000i64..1_000_000,
        a_scale in 0i32..6,
        b in -1_000_000i64..1_000_000,
        b_scale in 0i32..6,
    ) {
        let left = usd(a, a_scale);
        let right = usd(b, b_scale);
        let ordering = left.compare_to(&right).unwrap();
        prop_assert_eq!(ordering == Ordering::Equal, left.is_equal_to(&right).unwrap());
        prop_assert_eq!(ordering == Ordering::Less, left.is_less_than(&right).unwrap());
        prop_assert_eq!(ordering == Ordering::Greater, left.is_greater_than(&right).unwrap());
        prop_assert_eq!(ordering == Ordering::Equal, left == right);
    }
}
