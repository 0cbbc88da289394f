//! Percentage-formatted fractions for slippage and fee display

use crate::errors::FractionError;
use crate::fraction::{Fraction, Rounding};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// A [`Fraction`] rendered as a percentage: `1/4` formats as `25`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Percent(Fraction);

impl Percent {
    /// Documented default significant digits for `to_precision`
    pub const DEFAULT_SIGNIFICANT_DIGITS: u32 = 5;
    /// Documented default decimal places for `to_fixed`
    pub const DEFAULT_DECIMAL_PLACES: u32 = 2;

    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Self {
        Self(Fraction::new(numerator, denominator))
    }

    pub fn as_fraction(&self) -> &Fraction {
        &self.0
    }

    pub fn to_precision(
        &self,
        significant_digits: u32,
        rounding: Rounding,
    ) -> Result<String, FractionError> {
        self.0
            .multiplied_by(100)
            .to_precision(significant_digits, rounding)
    }

    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> String {
        self.0.multiplied_by(100).to_fixed(decimal_places, rounding)
    }
}

impl From<Fraction> for Percent {
    fn from(value: Fraction) -> Self {
        Self(value)
    }
}
