//! Error types for exact-rational arithmetic and asset identity validation
//!
//! Every precondition violation in the value-object layer surfaces as a
//! distinct variant here; nothing is silently swallowed or downgraded to a
//! warning.

use thiserror::Error;

/// Errors raised while formatting a [`crate::Fraction`] as a decimal string
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FractionError {
    /// `to_precision` requires a strictly positive significant-digit count
    #[error("significant digits must be positive, got {digits}")]
    InvalidSignificantDigits { digits: u32 },
}

/// Errors raised during asset-id parsing and token ordering
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Input does not match the canonical `chainId-moduleIndex-assetIndex` form
    #[error("asset id '{input}' is not in canonical chainId-moduleIndex-assetIndex form")]
    InvalidAssetId { input: String },

    /// A token was ordered against a token with the same asset id
    #[error("cannot order asset id {asset_id} against itself")]
    EqualAssetIds { asset_id: String },
}

/// Errors raised by type-safe amount and price arithmetic
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AmountError {
    /// Arithmetic between amounts of two different currencies
    #[error("currency mismatch: cannot combine {left} with {right}")]
    CurrencyMismatch { left: String, right: String },

    /// Arithmetic, composition, or quoting against the wrong token
    #[error("token mismatch: expected {expected}, got {actual}")]
    TokenMismatch { expected: String, actual: String },
}
