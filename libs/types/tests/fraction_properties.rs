//! Property-based tests for exact fraction arithmetic
//!
//! These validate the algebraic invariants the money math rests on across
//! wide input ranges, not just hand-picked examples.

use dex_types::{BigInt, Fraction, Rounding};
use proptest::prelude::*;

/// Parse a plain decimal string (as produced by `to_fixed`) back into an
/// exact fraction
fn parse_decimal(text: &str) -> Fraction {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text),
    };

    let (integer, fractional) = match unsigned.split_once('.') {
        Some((integer, fractional)) => (integer, fractional),
        None => (unsigned, ""),
    };

    let digits: BigInt = format!("{integer}{fractional}")
        .parse()
        .expect("formatted output is numeric");
    let scale = BigInt::from(10u32).pow(fractional.len() as u32);

    Fraction::new(digits * sign, scale)
}

fn any_fraction() -> impl Strategy<Value = Fraction> {
    (any::<i64>(), 1..=i64::MAX).prop_map(|(numerator, denominator)| {
        Fraction::new(numerator, denominator)
    })
}

proptest! {
    #[test]
    fn plus_then_minus_restores_original(a in any_fraction(), b in any_fraction()) {
        prop_assert!(a.plus(&b).minus(&b).is_equal_to(&a));
    }

    #[test]
    fn double_invert_is_identity(a in any_fraction()) {
        prop_assume!(!a.is_zero());
        prop_assert!(a.invert().invert().is_equal_to(&a));
    }

    #[test]
    fn addition_commutes(a in any_fraction(), b in any_fraction()) {
        prop_assert!(a.plus(&b).is_equal_to(b.plus(&a)));
    }

    #[test]
    fn comparison_is_antisymmetric(a in any_fraction(), b in any_fraction()) {
        let less = a.is_less_than(&b);
        let greater = a.is_greater_than(&b);
        let equal = a.is_equal_to(&b);

        prop_assert_eq!([less, greater, equal].iter().filter(|&&flag| flag).count(), 1);
    }

    #[test]
    fn to_fixed_roundtrip_stays_within_rounding_error(
        a in any_fraction(),
        decimal_places in 0u32..12,
    ) {
        for rounding in [Rounding::RoundDown, Rounding::RoundHalfUp, Rounding::RoundUp] {
            let formatted = a.to_fixed(decimal_places, rounding);
            let reparsed = parse_decimal(&formatted);

            // |a - reparsed| must be below one unit in the last printed place
            let difference = a.minus(&reparsed);
            let magnitude = if difference.is_less_than(0) {
                Fraction::zero().minus(&difference)
            } else {
                difference
            };
            let unit = Fraction::new(1, BigInt::from(10u32).pow(decimal_places));

            prop_assert!(magnitude.is_less_than(&unit) || magnitude.is_equal_to(&unit));
        }
    }

    #[test]
    fn to_precision_roundtrip_stays_within_rounding_error(
        a in any_fraction(),
        significant_digits in 1u32..=9,
    ) {
        for rounding in [Rounding::RoundDown, Rounding::RoundHalfUp, Rounding::RoundUp] {
            let formatted = a.to_precision(significant_digits, rounding).unwrap();
            let reparsed = parse_decimal(&formatted);

            // one unit in the last printed place; integer-only output keeps
            // every integer digit, so its last place is the units digit
            let unit = match formatted.split_once('.') {
                Some((_, fractional)) => {
                    Fraction::new(1, BigInt::from(10u32).pow(fractional.len() as u32))
                }
                None => Fraction::new(1, 1),
            };

            let difference = a.minus(&reparsed);
            let magnitude = if difference.is_less_than(0) {
                Fraction::zero().minus(&difference)
            } else {
                difference
            };

            prop_assert!(magnitude.is_less_than(&unit) || magnitude.is_equal_to(&unit));
        }
    }
}
