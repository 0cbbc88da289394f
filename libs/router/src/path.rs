//! Greedy best-path allocation of a cross-chain funding request
//!
//! Given a desired amount on a target chain and a snapshot of the same
//! logical asset's balances across chains, the allocator credits funds
//! already resident on the target chain, then consumes the remaining chains
//! in descending balance order. Native gas assets hold back a fixed reserve
//! so the transfer transaction itself stays payable; gas problems and an
//! overall shortfall surface as warnings on an otherwise-computed plan,
//! never as failures.

use crate::errors::RouterError;
use crate::gas::{gas_reserve, NativeChainResolver};
use dex_types::{AssetId, TokenAmount};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Non-fatal annotations on an allocation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathWarning {
    /// A leg's chain is left without enough of its gas asset to pay for the
    /// transfer
    InsufficientGas,
    /// The balances across all chains could not cover the requested amount
    InsufficientTotalAmount,
}

/// One leg of a cross-chain funding plan
///
/// `to_transfer == false` marks funds already resident on the target chain;
/// no transfer action is needed for that leg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub execute_chain_id: u64,
    pub asset_id: AssetId,
    pub target_chain_id: u64,
    pub amount: TokenAmount,
    pub to_transfer: bool,
    pub warning: Option<PathWarning>,
}

/// Point-in-time snapshot of one logical asset's balance per chain, as
/// supplied by the external balance-aggregation service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChainBalances {
    /// Balance per chain; `None` means the chain holds none (or the service
    /// has no entry)
    pub amounts: BTreeMap<u64, Option<TokenAmount>>,
    /// Set while any chain's balance is still being fetched
    pub any_loading: bool,
}

impl ChainBalances {
    /// A fully-loaded snapshot
    pub fn ready(amounts: BTreeMap<u64, Option<TokenAmount>>) -> Self {
        Self {
            amounts,
            any_loading: false,
        }
    }
}

impl Path {
    /// Allocate `token_amount_in` on `target_chain_id` across the snapshot
    ///
    /// Returns the legs in allocation order plus an optional overall
    /// shortfall warning. Fails fast while the snapshot is loading, and when
    /// a gas reserve is required for a chain the fee table does not cover.
    pub fn best_paths_exact_in(
        token_amount_in: &TokenAmount,
        balances: &ChainBalances,
        target_chain_id: u64,
        balance_for_gas_fee: &BTreeMap<u64, TokenAmount>,
        resolver: &dyn NativeChainResolver,
    ) -> Result<(Vec<Path>, Option<PathWarning>), RouterError> {
        if balances.any_loading {
            return Err(RouterError::BalancesLoading);
        }

        debug!(
            target_chain_id,
            amount = %token_amount_in,
            "allocating cross-chain funding request"
        );

        let amount_in_target = balances
            .amounts
            .get(&target_chain_id)
            .and_then(|amount| amount.as_ref());

        // portion of the request not already satisfied on the target chain;
        // when the input token is native to the target chain, a gas buffer is
        // held out of the resident balance before crediting it
        let mut amount_to_transfer = match amount_in_target {
            Some(resident) => {
                let input_token = token_amount_in.token();
                if resolver.native_chain_id(input_token) == Some(target_chain_id) {
                    let reserve = gas_reserve(input_token.asset_id().chain_id)?;
                    let buffer = TokenAmount::new(input_token.clone(), reserve.clone());
                    token_amount_in.minus(&resident.minus(&buffer)?)?
                } else {
                    token_amount_in.minus(resident)?
                }
            }
            None => token_amount_in.clone(),
        };

        let mut paths = Vec::new();

        if let Some(resident) = amount_in_target {
            if resident.is_positive() {
                // when the resident balance alone satisfies the request, the
                // non-transfer leg is clamped to the requested amount
                let leg_amount = if amount_to_transfer.is_positive() {
                    resident.clone()
                } else {
                    TokenAmount::new(resident.token().clone(), token_amount_in.raw().clone())
                };

                debug!(chain_id = target_chain_id, amount = %leg_amount, "funds already in place");
                paths.push(Path {
                    execute_chain_id: target_chain_id,
                    asset_id: resident.token().asset_id().clone(),
                    target_chain_id,
                    amount: leg_amount,
                    to_transfer: false,
                    warning: None,
                });
            }
        }

        // remaining chains holding the asset, richest first; ties keep the
        // snapshot's ascending-chain-id order
        let mut candidates: Vec<(u64, &TokenAmount)> = balances
            .amounts
            .iter()
            .filter(|(chain_id, _)| **chain_id != target_chain_id)
            .filter_map(|(chain_id, amount)| amount.as_ref().map(|amount| (*chain_id, amount)))
            .collect();
        candidates.sort_by(|(_, a), (_, b)| b.as_fraction().compare(a.as_fraction()));

        for (chain_id, amount) in candidates {
            if !amount_to_transfer.is_positive() {
                break;
            }

            let asset_chain_id = amount.token().asset_id().chain_id;
            let is_enough = !amount_to_transfer.is_greater_than(amount);
            let is_native = resolver.native_chain_id(amount.token()) == Some(chain_id);
            let gas_balance = balance_for_gas_fee.get(&chain_id);

            // the gas reserve, denominated in whichever asset pays for gas on
            // this chain; only consulted when a reserve amount is needed
            let gas_amount = if is_native {
                Some(TokenAmount::new(
                    amount.token().clone(),
                    gas_reserve(asset_chain_id)?.clone(),
                ))
            } else if let Some(balance) = gas_balance {
                Some(TokenAmount::new(
                    balance.token().clone(),
                    gas_reserve(asset_chain_id)?.clone(),
                ))
            } else {
                None
            };

            let mut take = if is_enough {
                amount_to_transfer.clone()
            } else {
                amount.clone()
            };

            // draining a native gas balance: hold the reserve back, but only
            // when the remainder after the hold-back stays positive
            if is_native && !is_enough {
                if let Some(reserve) = &gas_amount {
                    if take.is_greater_than(reserve) {
                        take = take.minus(reserve)?;
                    }
                }
            }

            let mut warning = None;
            if is_native {
                if let Some(reserve) = &gas_amount {
                    if is_enough && amount.minus(&amount_to_transfer)?.is_less_than(reserve) {
                        warning = Some(PathWarning::InsufficientGas);
                    }
                }
            } else {
                match (gas_balance, &gas_amount) {
                    (Some(balance), Some(reserve)) if balance.is_less_than(reserve) => {
                        warning = Some(PathWarning::InsufficientGas);
                    }
                    (None, _) => warning = Some(PathWarning::InsufficientGas),
                    _ => {}
                }
            }

            if take.is_positive() {
                debug!(chain_id, take = %take, warning = ?warning, "adding transfer leg");
                paths.push(Path {
                    execute_chain_id: chain_id,
                    asset_id: amount.token().asset_id().clone(),
                    target_chain_id,
                    amount: take.clone(),
                    to_transfer: true,
                    warning,
                });
            }

            amount_to_transfer = amount_to_transfer.minus(&take)?;
        }

        let shortfall = if amount_to_transfer.is_positive() {
            debug!(remaining = %amount_to_transfer, "request could not be fully covered");
            Some(PathWarning::InsufficientTotalAmount)
        } else {
            None
        };

        Ok((paths, shortfall))
    }
}
