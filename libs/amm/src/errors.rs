//! Error types for constant-product pair math

use dex_types::errors::{AmountError, TokenError};
use thiserror::Error;

/// Errors raised by [`crate::Pair`] construction and quoting
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PairError {
    /// The given token is neither of the pair's tokens
    #[error("token {asset_id} is not one of the pair's tokens")]
    TokenNotInvolved { asset_id: String },

    /// Swap quoting requires both reserves to be non-zero
    #[error("insufficient reserves: both reserves must be non-zero")]
    InsufficientReserves,

    /// The computed swap output truncated to zero (input too small relative
    /// to the reserves)
    #[error("computed output amount is zero")]
    ZeroOutputAmount,

    /// A total-supply or liquidity argument is not denominated in the pair's
    /// liquidity token
    #[error("amount is not denominated in the pair's liquidity token")]
    InvalidLiquidityToken,

    /// The two deposit amounts do not match the pair's token0/token1 after
    /// canonical ordering
    #[error("deposit tokens do not match the pair's tokens")]
    TokenOrderMismatch,

    /// A liquidity amount exceeds the recorded total supply
    #[error("liquidity {liquidity} exceeds total supply {total_supply}")]
    LiquidityExceedsTotalSupply {
        liquidity: String,
        total_supply: String,
    },

    /// Redemption against a zero total supply has no defined share
    #[error("total supply is zero")]
    ZeroTotalSupply,

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Amount(#[from] AmountError),
}
