//! # DEX Types - Exact-Rational Value Objects
//!
//! ## Purpose
//!
//! Foundation types for the DEX client domain model: arbitrary-precision
//! rational arithmetic, chain-qualified asset identity, type-safe currency
//! amounts, exchange rates, and percentage display. Every monetary quantity
//! in the workspace flows through these types, so all of them are exact —
//! no floating point anywhere in an arithmetic path.
//!
//! ## Architecture Role
//!
//! Data flows one way through this crate and outward:
//!
//! ```text
//! raw integers -> Fraction -> CurrencyAmount / TokenAmount -> Price math
//!                                   |
//!                                   +-> dex-amm (pair math)
//!                                   +-> dex-router (path allocation)
//! ```
//!
//! All types are immutable values: operations return fresh instances and the
//! crate holds no state of its own.
//!
//! ## Error Handling
//!
//! Every precondition violation (invalid digit counts, cross-currency
//! arithmetic, malformed asset ids, self-ordering) is a typed error variant;
//! see [`errors`].

pub mod amount;
pub mod currency;
pub mod errors;
pub mod fraction;
pub mod percent;
pub mod price;

pub use amount::{CurrencyAmount, FormatConfig, TokenAmount};
pub use currency::{AssetId, Currency, Token};
pub use errors::{AmountError, FractionError, TokenError};
pub use fraction::{Fraction, Rounding};
pub use percent::Percent;
pub use price::Price;

/// Re-export of the big-integer primitive all exact math rests on
pub use num_bigint::BigInt;
