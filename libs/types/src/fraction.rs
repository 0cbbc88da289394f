//! Exact rational arithmetic for precise financial calculations
//!
//! [`Fraction`] stores an arbitrary-precision numerator/denominator pair and
//! never implicitly reduces it. All arithmetic returns new values, comparisons
//! use cross-multiplication rather than reduction, and decimal formatting is
//! the only place rounding ever happens.
//!
//! ## Design Principles
//!
//! - **No Precision Loss**: all values stored as exact big-integer ratios
//! - **Immutability**: every operation returns a fresh `Fraction`
//! - **Explicit Rounding**: rounding is confined to string formatting and is
//!   always caller-selected

use crate::errors::FractionError;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Rounding mode for decimal string output
///
/// Semantics are defined on the magnitude: `RoundDown` truncates toward zero,
/// `RoundHalfUp` rounds halves away from zero, `RoundUp` always rounds away
/// from zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rounding {
    RoundDown,
    #[default]
    RoundHalfUp,
    RoundUp,
}

/// Exact rational number, never implicitly reduced
///
/// The denominator is taken on trust: no arithmetic operation constructs a
/// zero denominator on its own, but dividing by a zero-valued fraction is a
/// caller error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl Fraction {
    /// Create a fraction from explicit numerator and denominator
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Self {
        Self {
            numerator: numerator.into(),
            denominator: denominator.into(),
        }
    }

    /// The zero fraction `0/1`
    pub fn zero() -> Self {
        Self::new(0, 1)
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Truncating integer division of numerator by denominator (toward zero)
    pub fn quotient(&self) -> BigInt {
        &self.numerator / &self.denominator
    }

    /// Swap numerator and denominator
    pub fn invert(&self) -> Fraction {
        Fraction::new(self.denominator.clone(), self.numerator.clone())
    }

    pub fn plus(&self, other: impl Into<Fraction>) -> Fraction {
        let other = other.into();

        if self.denominator == other.denominator {
            return Fraction::new(&self.numerator + &other.numerator, self.denominator.clone());
        }

        Fraction::new(
            &self.numerator * &other.denominator + &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }

    pub fn minus(&self, other: impl Into<Fraction>) -> Fraction {
        let other = other.into();

        if self.denominator == other.denominator {
            return Fraction::new(&self.numerator - &other.numerator, self.denominator.clone());
        }

        Fraction::new(
            &self.numerator * &other.denominator - &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }

    pub fn multiplied_by(&self, other: impl Into<Fraction>) -> Fraction {
        let other = other.into();

        Fraction::new(
            &self.numerator * &other.numerator,
            &self.denominator * &other.denominator,
        )
    }

    pub fn divided_by(&self, other: impl Into<Fraction>) -> Fraction {
        let other = other.into();

        Fraction::new(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
        )
    }

    /// Cross-multiplication comparison; reduced and unreduced forms of the
    /// same value compare equal
    pub fn compare(&self, other: &Fraction) -> Ordering {
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }

    pub fn is_less_than(&self, other: impl Into<Fraction>) -> bool {
        self.compare(&other.into()) == Ordering::Less
    }

    pub fn is_equal_to(&self, other: impl Into<Fraction>) -> bool {
        self.compare(&other.into()) == Ordering::Equal
    }

    pub fn is_greater_than(&self, other: impl Into<Fraction>) -> bool {
        self.compare(&other.into()) == Ordering::Greater
    }

    /// Format with the given number of significant digits
    ///
    /// `significant_digits` must be strictly positive. If the integer part
    /// already has more digits than requested, the request is widened to the
    /// integer-part length so the integer part is never truncated. For values
    /// below one, significant digits are counted from the first nonzero digit.
    pub fn to_precision(
        &self,
        significant_digits: u32,
        rounding: Rounding,
    ) -> Result<String, FractionError> {
        if significant_digits == 0 {
            return Err(FractionError::InvalidSignificantDigits {
                digits: significant_digits,
            });
        }

        if self.numerator.is_zero() {
            return Ok(zero_with_decimals(significant_digits - 1));
        }

        let num_abs = self.numerator.abs();
        let den_abs = self.denominator.abs();
        let negative = self.numerator.is_negative() != self.denominator.is_negative();

        let int_part = &num_abs / &den_abs;
        let mut effective = significant_digits;
        let mut decimals = if int_part.is_zero() {
            // count zeros between the decimal point and the first significant digit
            let mut leading_zeros = 0u32;
            let mut probe = &num_abs * 10u32;
            while probe < den_abs {
                leading_zeros += 1;
                probe *= 10u32;
            }
            leading_zeros + effective
        } else {
            let int_digits = decimal_digits(&int_part);
            if int_digits > effective {
                effective = int_digits;
            }
            effective - int_digits
        };

        // a rounding carry (e.g. 9.99 -> 10) can add a significant digit;
        // shrink the decimal count until the digit budget holds again
        loop {
            let scale = BigInt::from(10u32).pow(decimals);
            let scaled = round_magnitude(&(&num_abs * &scale), &den_abs, rounding);

            if decimal_digits(&scaled) > effective && decimals > 0 {
                decimals -= 1;
                continue;
            }

            return Ok(format_scaled(&scaled, decimals, negative));
        }
    }

    /// Format with a fixed number of decimal places, keeping trailing zeros
    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> String {
        let num_abs = self.numerator.abs();
        let den_abs = self.denominator.abs();
        let negative = self.numerator.is_negative() != self.denominator.is_negative();

        let scale = BigInt::from(10u32).pow(decimal_places);
        let scaled = round_magnitude(&(&num_abs * &scale), &den_abs, rounding);

        format_scaled(&scaled, decimal_places, negative)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl From<&Fraction> for Fraction {
    fn from(value: &Fraction) -> Self {
        value.clone()
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Fraction::new(value, 1)
    }
}

impl From<&BigInt> for Fraction {
    fn from(value: &BigInt) -> Self {
        Fraction::new(value.clone(), 1)
    }
}

macro_rules! fraction_from_int {
    ($($int:ty),*) => {
        $(
            impl From<$int> for Fraction {
                fn from(value: $int) -> Self {
                    Fraction::new(BigInt::from(value), 1)
                }
            }
        )*
    };
}

fraction_from_int!(i32, i64, i128, u32, u64, u128);

/// Round `numerator / denominator` on non-negative magnitudes
fn round_magnitude(numerator: &BigInt, denominator: &BigInt, rounding: Rounding) -> BigInt {
    match rounding {
        Rounding::RoundDown => numerator / denominator,
        Rounding::RoundUp => {
            let quotient = numerator / denominator;
            if (numerator % denominator).is_zero() {
                quotient
            } else {
                quotient + 1
            }
        }
        Rounding::RoundHalfUp => (numerator * 2u32 + denominator) / (denominator * 2u32),
    }
}

/// Number of decimal digits in a non-negative integer (zero counts as one)
fn decimal_digits(value: &BigInt) -> u32 {
    value.to_string().len() as u32
}

/// Render a scaled non-negative integer as a decimal string with
/// `decimal_places` digits after the point
fn format_scaled(scaled: &BigInt, decimal_places: u32, negative: bool) -> String {
    let sign = if negative && !scaled.is_zero() { "-" } else { "" };
    let digits = scaled.to_string();

    if decimal_places == 0 {
        return format!("{sign}{digits}");
    }

    let decimal_places = decimal_places as usize;
    let padded = if digits.len() <= decimal_places {
        format!("{}{}", "0".repeat(decimal_places + 1 - digits.len()), digits)
    } else {
        digits
    };
    let split = padded.len() - decimal_places;

    format!("{sign}{}.{}", &padded[..split], &padded[split..])
}

fn zero_with_decimals(decimal_places: u32) -> String {
    if decimal_places == 0 {
        "0".to_string()
    } else {
        format!("0.{}", "0".repeat(decimal_places as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus_with_common_denominator() {
        let a = Fraction::new(1, 10);
        let b = Fraction::new(3, 10);

        let sum = a.plus(&b);
        assert_eq!(sum.numerator(), &BigInt::from(4));
        assert_eq!(sum.denominator(), &BigInt::from(10));
    }

    #[test]
    fn test_plus_cross_multiplies_mixed_denominators() {
        let a = Fraction::new(1, 2);
        let b = Fraction::new(1, 3);

        let sum = a.plus(&b);
        assert_eq!(sum.numerator(), &BigInt::from(5));
        assert_eq!(sum.denominator(), &BigInt::from(6));
    }

    #[test]
    fn test_minus_roundtrip_restores_original() {
        let a = Fraction::new(7, 12);
        let b = Fraction::new(5, 9);

        assert!(a.plus(&b).minus(&b).is_equal_to(&a));
    }

    #[test]
    fn test_scalar_coercion() {
        let a = Fraction::new(3, 2);

        assert!(a.multiplied_by(2).is_equal_to(3));
        assert!(a.minus(1).is_equal_to(Fraction::new(1, 2)));
    }

    #[test]
    fn test_comparison_ignores_reduction() {
        let half = Fraction::new(1, 2);
        let two_quarters = Fraction::new(2, 4);

        assert!(half.is_equal_to(&two_quarters));
        assert!(!half.is_less_than(&two_quarters));
        assert!(Fraction::new(1, 3).is_less_than(&half));
        assert!(half.is_greater_than(Fraction::new(1, 3)));
    }

    #[test]
    fn test_quotient_truncates_toward_zero() {
        assert_eq!(Fraction::new(7, 2).quotient(), BigInt::from(3));
        assert_eq!(Fraction::new(-7, 2).quotient(), BigInt::from(-3));
    }

    #[test]
    fn test_double_invert_is_identity() {
        let a = Fraction::new(13, 7);
        assert!(a.invert().invert().is_equal_to(&a));
    }

    #[test]
    fn test_to_fixed_rounding_modes() {
        let value = Fraction::new(1, 3);

        assert_eq!(value.to_fixed(4, Rounding::RoundDown), "0.3333");
        assert_eq!(value.to_fixed(4, Rounding::RoundUp), "0.3334");
        assert_eq!(value.to_fixed(4, Rounding::RoundHalfUp), "0.3333");
    }

    #[test]
    fn test_to_fixed_half_up_rounds_half_away_from_zero() {
        assert_eq!(Fraction::new(3, 2).to_fixed(0, Rounding::RoundHalfUp), "2");
        assert_eq!(Fraction::new(5, 2).to_fixed(0, Rounding::RoundHalfUp), "3");
        assert_eq!(Fraction::new(-3, 2).to_fixed(0, Rounding::RoundHalfUp), "-2");
    }

    #[test]
    fn test_to_fixed_negative_truncates_toward_zero() {
        assert_eq!(Fraction::new(-1, 3).to_fixed(2, Rounding::RoundDown), "-0.33");
        assert_eq!(Fraction::new(-1, 3).to_fixed(2, Rounding::RoundUp), "-0.34");
    }

    #[test]
    fn test_to_fixed_keeps_trailing_zeros() {
        assert_eq!(Fraction::new(3, 2).to_fixed(4, Rounding::RoundDown), "1.5000");
    }

    #[test]
    fn test_to_precision_zero_digits_rejected() {
        let result = Fraction::new(1, 2).to_precision(0, Rounding::RoundDown);
        assert_eq!(
            result,
            Err(FractionError::InvalidSignificantDigits { digits: 0 })
        );
    }

    #[test]
    fn test_to_precision_basic() {
        let third = Fraction::new(1, 3);

        assert_eq!(third.to_precision(4, Rounding::RoundDown).unwrap(), "0.3333");
        assert_eq!(
            Fraction::new(25, 1).to_precision(5, Rounding::RoundHalfUp).unwrap(),
            "25.000"
        );
    }

    #[test]
    fn test_to_precision_never_truncates_integer_part() {
        // 123456 / 10 = 12345.6; two significant digits requested but the
        // integer part alone has five
        let value = Fraction::new(123_456, 10);
        assert_eq!(value.to_precision(2, Rounding::RoundDown).unwrap(), "12345");
    }

    #[test]
    fn test_to_precision_counts_from_first_nonzero_digit() {
        let value = Fraction::new(1234, 1_000_000);
        assert_eq!(value.to_precision(2, Rounding::RoundDown).unwrap(), "0.0012");
    }

    #[test]
    fn test_to_precision_carry_drops_a_decimal() {
        // 9.99 rounded to two significant digits carries into a new integer digit
        let value = Fraction::new(999, 100);
        assert_eq!(value.to_precision(2, Rounding::RoundHalfUp).unwrap(), "10");

        // 0.0999 to one significant digit becomes 0.1, not 0.10
        let small = Fraction::new(999, 10_000);
        assert_eq!(small.to_precision(1, Rounding::RoundHalfUp).unwrap(), "0.1");
    }

    #[test]
    fn test_to_precision_zero_value() {
        assert_eq!(Fraction::zero().to_precision(1, Rounding::RoundDown).unwrap(), "0");
        assert_eq!(
            Fraction::zero().to_precision(4, Rounding::RoundDown).unwrap(),
            "0.000"
        );
    }

    #[test]
    fn test_display_shows_unreduced_ratio() {
        assert_eq!(Fraction::new(2, 4).to_string(), "2/4");
    }
}
