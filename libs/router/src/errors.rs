//! Error types for cross-chain path allocation

use dex_types::errors::AmountError;
use thiserror::Error;

/// Errors raised by path allocation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// The balance snapshot is still loading; stale or partial data must
    /// never drive an allocation
    #[error("balance snapshot is still loading")]
    BalancesLoading,

    /// A gas reserve was required for a chain the fee table does not cover
    #[error("no gas fee configured for chain {chain_id}")]
    MissingGasFeeConfig { chain_id: u64 },

    #[error(transparent)]
    Amount(#[from] AmountError),
}
