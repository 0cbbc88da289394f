//! # DEX Router - Best-Path Cross-Chain Allocation
//!
//! ## Purpose
//!
//! Plans how to fund a desired token amount on a target chain from the same
//! asset's balances spread across other chains. The allocator is greedy
//! (richest chain first), holds back fixed gas reserves so transfers stay
//! payable, and reports gas or total-amount problems as warnings on the
//! computed plan rather than failing it.
//!
//! ## Integration Points
//!
//! - **Input**: a [`ChainBalances`] snapshot and per-chain gas-asset
//!   balances from the external balance-aggregation service, plus an
//!   injected [`NativeChainResolver`] backed by the client's token registry
//! - **Output**: an ordered list of [`Path`] legs and an optional overall
//!   shortfall warning
//!
//! The router is synchronous pure computation over the supplied snapshot; it
//! performs no I/O and keeps no state between invocations.

pub mod errors;
pub mod gas;
pub mod path;

pub use errors::RouterError;
pub use gas::{gas_reserve, NativeChainResolver, NoNativeChains, GAS_FEE};
pub use path::{ChainBalances, Path, PathWarning};
