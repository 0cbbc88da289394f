//! Currency- and token-denominated amounts
//!
//! An amount is a [`Fraction`] whose denominator is pinned to `10^decimals`
//! of its currency; the numerator is the raw smallest-unit integer amount.
//! Arithmetic is type-safe: combining amounts of different currencies or
//! tokens is a [`AmountError`] rather than a silent unit error.

use crate::currency::{Currency, Token};
use crate::errors::AmountError;
use crate::fraction::{Fraction, Rounding};
use num_bigint::BigInt;
use num_traits::Signed;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator configuration for human-readable amount formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    pub decimal_separator: String,
    pub group_separator: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            decimal_separator: ".".to_string(),
            group_separator: String::new(),
        }
    }
}

/// An amount of an abstract [`Currency`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyAmount {
    currency: Currency,
    value: Fraction,
}

impl CurrencyAmount {
    /// Documented default significant digits for `to_precision`
    pub const DEFAULT_SIGNIFICANT_DIGITS: u32 = 6;

    /// Build from a raw smallest-unit amount
    pub fn new(currency: Currency, raw: impl Into<BigInt>) -> Self {
        let value = scaled_fraction(raw.into(), currency.decimals());
        Self { currency, value }
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Raw smallest-unit integer amount (the fraction's numerator)
    pub fn raw(&self) -> &BigInt {
        self.value.numerator()
    }

    pub fn as_fraction(&self) -> &Fraction {
        &self.value
    }

    pub fn plus(&self, other: &CurrencyAmount) -> Result<CurrencyAmount, AmountError> {
        self.check_currency(other)?;
        Ok(CurrencyAmount::new(
            self.currency.clone(),
            self.raw() + other.raw(),
        ))
    }

    pub fn minus(&self, other: &CurrencyAmount) -> Result<CurrencyAmount, AmountError> {
        self.check_currency(other)?;
        Ok(CurrencyAmount::new(
            self.currency.clone(),
            self.raw() - other.raw(),
        ))
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.raw().is_positive()
    }

    pub fn to_precision(
        &self,
        significant_digits: u32,
        rounding: Rounding,
    ) -> Result<String, crate::errors::FractionError> {
        self.value.to_precision(significant_digits, rounding)
    }

    /// Fixed-point rendering at the currency's own decimal count
    pub fn to_fixed(&self, rounding: Rounding) -> String {
        self.value.to_fixed(self.currency.decimals(), rounding)
    }

    pub fn to_fixed_digits(&self, decimal_places: u32, rounding: Rounding) -> String {
        self.value.to_fixed(decimal_places, rounding)
    }

    pub fn to_format(&self, format: &FormatConfig) -> String {
        format_amount(&self.value, self.currency.decimals(), format)
    }

    fn check_currency(&self, other: &CurrencyAmount) -> Result<(), AmountError> {
        if self.currency.equals(&other.currency) {
            return Ok(());
        }

        Err(AmountError::CurrencyMismatch {
            left: self.currency.to_string(),
            right: other.currency.to_string(),
        })
    }
}

impl fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.to_fixed(Rounding::RoundDown), self.currency)
    }
}

/// An amount of a concrete [`Token`]
///
/// Comparison helpers are value-level (cross-multiplied fractions) and do not
/// require token equality; `plus`/`minus` do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAmount {
    token: Token,
    value: Fraction,
}

impl TokenAmount {
    /// Documented default significant digits for `to_precision`
    pub const DEFAULT_SIGNIFICANT_DIGITS: u32 = 6;

    /// Build from a raw smallest-unit amount
    pub fn new(token: Token, raw: impl Into<BigInt>) -> Self {
        let value = scaled_fraction(raw.into(), token.decimals());
        Self { token, value }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Raw smallest-unit integer amount (the fraction's numerator)
    pub fn raw(&self) -> &BigInt {
        self.value.numerator()
    }

    pub fn as_fraction(&self) -> &Fraction {
        &self.value
    }

    pub fn plus(&self, other: &TokenAmount) -> Result<TokenAmount, AmountError> {
        self.check_token(other)?;
        Ok(TokenAmount::new(self.token.clone(), self.raw() + other.raw()))
    }

    pub fn minus(&self, other: &TokenAmount) -> Result<TokenAmount, AmountError> {
        self.check_token(other)?;
        Ok(TokenAmount::new(self.token.clone(), self.raw() - other.raw()))
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.raw().is_positive()
    }

    pub fn is_less_than(&self, other: &TokenAmount) -> bool {
        self.value.is_less_than(&other.value)
    }

    pub fn is_equal_to(&self, other: &TokenAmount) -> bool {
        self.value.is_equal_to(&other.value)
    }

    pub fn is_greater_than(&self, other: &TokenAmount) -> bool {
        self.value.is_greater_than(&other.value)
    }

    pub fn to_precision(
        &self,
        significant_digits: u32,
        rounding: Rounding,
    ) -> Result<String, crate::errors::FractionError> {
        self.value.to_precision(significant_digits, rounding)
    }

    /// Fixed-point rendering at the token's own decimal count
    pub fn to_fixed(&self, rounding: Rounding) -> String {
        self.value.to_fixed(self.token.decimals(), rounding)
    }

    pub fn to_fixed_digits(&self, decimal_places: u32, rounding: Rounding) -> String {
        self.value.to_fixed(decimal_places, rounding)
    }

    pub fn to_format(&self, format: &FormatConfig) -> String {
        format_amount(&self.value, self.token.decimals(), format)
    }

    fn check_token(&self, other: &TokenAmount) -> Result<(), AmountError> {
        if self.token.equals(&other.token) {
            return Ok(());
        }

        Err(AmountError::TokenMismatch {
            expected: self.token.asset_id().canonical(),
            actual: other.token.asset_id().canonical(),
        })
    }
}

impl From<TokenAmount> for CurrencyAmount {
    fn from(amount: TokenAmount) -> Self {
        CurrencyAmount {
            currency: Currency::Token(amount.token),
            value: amount.value,
        }
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.token.symbol() {
            Some(symbol) => write!(f, "{} {}", self.to_fixed(Rounding::RoundDown), symbol),
            None => write!(f, "{}", self.to_fixed(Rounding::RoundDown)),
        }
    }
}

fn scaled_fraction(raw: BigInt, decimals: u32) -> Fraction {
    Fraction::new(raw, BigInt::from(10u32).pow(decimals))
}

/// Full-precision rendering with configurable separators; trailing fractional
/// zeros are dropped
fn format_amount(value: &Fraction, decimals: u32, format: &FormatConfig) -> String {
    let fixed = value.to_fixed(decimals, Rounding::RoundDown);

    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };

    let (integer, fractional) = match unsigned.split_once('.') {
        Some((integer, fractional)) => (integer, fractional.trim_end_matches('0')),
        None => (unsigned, ""),
    };

    let grouped = if format.group_separator.is_empty() {
        integer.to_string()
    } else {
        group_digits(integer, &format.group_separator)
    };

    if fractional.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}{}{fractional}", format.decimal_separator)
    }
}

fn group_digits(integer: &str, separator: &str) -> String {
    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::new();

    for (index, digit) in digits.iter().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(*digit);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::AssetId;

    fn token(asset_id: &str, decimals: u32) -> Token {
        Token::from_canonical(asset_id, decimals, Some("TKN".to_string()), None).unwrap()
    }

    #[test]
    fn test_amount_is_raw_over_decimals() {
        let amount = TokenAmount::new(token("200-2-10", 6), 1_500_000);

        assert_eq!(amount.raw(), &BigInt::from(1_500_000));
        assert_eq!(
            amount.as_fraction().denominator(),
            &BigInt::from(1_000_000)
        );
        assert_eq!(amount.to_fixed(Rounding::RoundDown), "1.500000");
    }

    #[test]
    fn test_plus_minus_same_token() {
        let t = token("200-2-10", 6);
        let a = TokenAmount::new(t.clone(), 100);
        let b = TokenAmount::new(t, 40);

        assert_eq!(a.plus(&b).unwrap().raw(), &BigInt::from(140));
        assert_eq!(a.minus(&b).unwrap().raw(), &BigInt::from(60));
        // subtraction past zero stays exact
        assert_eq!(b.minus(&a).unwrap().raw(), &BigInt::from(-60));
    }

    #[test]
    fn test_cross_token_arithmetic_rejected() {
        let a = TokenAmount::new(token("200-2-10", 6), 100);
        let b = TokenAmount::new(token("200-2-11", 6), 40);

        assert_eq!(
            a.plus(&b),
            Err(AmountError::TokenMismatch {
                expected: "200-2-10".to_string(),
                actual: "200-2-11".to_string(),
            })
        );
        assert!(a.minus(&b).is_err());
    }

    #[test]
    fn test_currency_amount_mismatch() {
        let native = Currency::native(12, Some("NAT".to_string()), None);
        let a = CurrencyAmount::new(native, 5);
        let b = CurrencyAmount::new(Currency::Token(token("200-2-10", 12)), 5);

        assert!(matches!(
            a.plus(&b),
            Err(AmountError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_value_comparisons_ignore_token_identity() {
        let a = TokenAmount::new(token("200-2-10", 6), 100);
        let b = TokenAmount::new(token("300-2-10", 6), 200);

        assert!(a.is_less_than(&b));
        assert!(b.is_greater_than(&a));
        assert!(!a.is_equal_to(&b));
    }

    #[test]
    fn test_to_format_defaults() {
        let amount = TokenAmount::new(token("200-2-10", 6), 1_234_500_000);
        assert_eq!(amount.to_format(&FormatConfig::default()), "1234.5");

        let whole = TokenAmount::new(token("200-2-10", 6), 2_000_000);
        assert_eq!(whole.to_format(&FormatConfig::default()), "2");
    }

    #[test]
    fn test_to_format_with_separators() {
        let amount = TokenAmount::new(token("200-2-10", 6), 1_234_567_890_123i64);
        let format = FormatConfig {
            decimal_separator: ",".to_string(),
            group_separator: " ".to_string(),
        };

        assert_eq!(amount.to_format(&format), "1 234 567,890123");
    }

    #[test]
    fn test_token_amount_into_currency_amount() {
        let t = token("200-2-10", 6);
        let amount: CurrencyAmount = TokenAmount::new(t.clone(), 42).into();

        assert_eq!(amount.currency(), &Currency::Token(t));
        assert_eq!(amount.raw(), &BigInt::from(42));
    }

    #[test]
    fn test_zero_decimals() {
        let t = Token::new(AssetId::new(200, 2, 10), 0, None, None);
        let amount = TokenAmount::new(t, 7);

        assert_eq!(amount.to_fixed(Rounding::RoundDown), "7");
        assert_eq!(amount.as_fraction().denominator(), &BigInt::from(1));
    }
}
