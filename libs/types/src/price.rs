//! Exchange rates between two tokens
//!
//! A [`Price`] is an exact fraction of raw units (quote over base) annotated
//! with its base and quote tokens. A decimals scalar adjusts the rate for
//! human-readable output only; the underlying math always runs on raw units.

use crate::amount::TokenAmount;
use crate::currency::Token;
use crate::errors::{AmountError, FractionError};
use crate::fraction::{Fraction, Rounding};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    base_token: Token,
    quote_token: Token,
    value: Fraction,
    scalar: Fraction,
}

impl Price {
    /// Documented default significant digits for `to_precision`
    pub const DEFAULT_SIGNIFICANT_DIGITS: u32 = 6;
    /// Documented default decimal places for `to_fixed`
    pub const DEFAULT_DECIMAL_PLACES: u32 = 4;

    /// Build a price from raw reserve units: `denominator` base units buy
    /// `numerator` quote units
    pub fn new(
        base_token: Token,
        quote_token: Token,
        denominator: impl Into<BigInt>,
        numerator: impl Into<BigInt>,
    ) -> Self {
        let scalar = Fraction::new(
            BigInt::from(10u32).pow(base_token.decimals()),
            BigInt::from(10u32).pow(quote_token.decimals()),
        );

        Self {
            base_token,
            quote_token,
            value: Fraction::new(numerator.into(), denominator.into()),
            scalar,
        }
    }

    pub fn base_token(&self) -> &Token {
        &self.base_token
    }

    pub fn quote_token(&self) -> &Token {
        &self.quote_token
    }

    /// The exact rate in raw units
    pub fn raw(&self) -> &Fraction {
        &self.value
    }

    /// The decimals-adjusted rate; display only, never used for settlement
    pub fn adjusted(&self) -> Fraction {
        self.value.multiplied_by(&self.scalar)
    }

    /// Swap base and quote; the scalar is recomputed from the new ordering
    pub fn invert(&self) -> Price {
        Price::new(
            self.quote_token.clone(),
            self.base_token.clone(),
            self.value.numerator().clone(),
            self.value.denominator().clone(),
        )
    }

    /// Compose exchange rates transitively: `A->B` times `B->C` spans `A->C`
    pub fn multiplied_by(&self, other: &Price) -> Result<Price, AmountError> {
        if !self.quote_token.equals(&other.base_token) {
            return Err(AmountError::TokenMismatch {
                expected: self.quote_token.asset_id().canonical(),
                actual: other.base_token.asset_id().canonical(),
            });
        }

        let composed = self.value.multiplied_by(&other.value);

        Ok(Price::new(
            self.base_token.clone(),
            other.quote_token.clone(),
            composed.denominator().clone(),
            composed.numerator().clone(),
        ))
    }

    /// Convert a base-token amount into quote-token units, truncating toward
    /// zero
    pub fn quote(&self, token_amount: &TokenAmount) -> Result<TokenAmount, AmountError> {
        if !token_amount.token().equals(&self.base_token) {
            return Err(AmountError::TokenMismatch {
                expected: self.base_token.asset_id().canonical(),
                actual: token_amount.token().asset_id().canonical(),
            });
        }

        let quoted = self.value.multiplied_by(token_amount.raw()).quotient();

        Ok(TokenAmount::new(self.quote_token.clone(), quoted))
    }

    /// Format the adjusted rate with significant digits (documented default
    /// 6, `RoundHalfUp`)
    pub fn to_precision(
        &self,
        significant_digits: u32,
        rounding: Rounding,
    ) -> Result<String, FractionError> {
        self.adjusted().to_precision(significant_digits, rounding)
    }

    /// Format the adjusted rate with fixed decimal places (documented default
    /// 4, `RoundHalfUp`)
    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> String {
        self.adjusted().to_fixed(decimal_places, rounding)
    }
}
