//! # DEX AMM - Constant-Product Pair Mathematics
//!
//! ## Purpose
//!
//! Exact swap quoting and liquidity accounting for two-asset constant-product
//! pools (x*y=k with a fixed 0.3% fee). All math runs on arbitrary-precision
//! integers from `dex-types`; every division truncates toward zero so a quote
//! can never pay out more than the pool holds.
//!
//! ## Integration Points
//!
//! - **Input**: reserve snapshots as `TokenAmount` pairs, trade sizes from
//!   callers
//! - **Output**: swap quotes, post-trade pool states, liquidity mint/redeem
//!   amounts
//!
//! Pools are immutable values; a swap quote returns the updated pool as a new
//! [`Pair`] instead of mutating reserves in place.

pub mod errors;
pub mod pair;

pub use errors::PairError;
pub use pair::{
    Pair, FEE_DENOMINATOR, FEE_NUMERATOR, LIQUIDITY_TOKEN_DECIMALS, LIQUIDITY_TOKEN_NAME,
    LIQUIDITY_TOKEN_SYMBOL,
};
