//! Fixed gas-reserve configuration and native-chain resolution

use crate::errors::RouterError;
use dex_types::Token;
use num_bigint::BigInt;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Fixed per-chain gas reserve: the minimum native-asset balance that must
/// survive a transfer so the transfer transaction itself can be paid for.
/// Chains outside this table have no configured reserve.
pub static GAS_FEE: Lazy<BTreeMap<u64, BigInt>> = Lazy::new(|| {
    // 0.01 of a 12-decimals native asset in base units
    let reserve = BigInt::from(10u64).pow(10);

    [188u64, 200, 300, 400]
        .into_iter()
        .map(|chain_id| (chain_id, reserve.clone()))
        .collect()
});

/// Look up the gas reserve for a chain; a missing entry is an explicit
/// configuration error rather than a silently-propagated invalid quantity
pub fn gas_reserve(chain_id: u64) -> Result<&'static BigInt, RouterError> {
    GAS_FEE
        .get(&chain_id)
        .ok_or(RouterError::MissingGasFeeConfig { chain_id })
}

/// Injected collaborator answering which chain a token is the native gas
/// asset of, if any
///
/// The client keeps this mapping in its token registry; the router never
/// reaches into ambient storage for it.
pub trait NativeChainResolver {
    fn native_chain_id(&self, token: &Token) -> Option<u64>;
}

/// Resolver that treats every token as non-native; useful for tests and for
/// routing pure asset-hub tokens
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNativeChains;

impl NativeChainResolver for NoNativeChains {
    fn native_chain_id(&self, _token: &Token) -> Option<u64> {
        None
    }
}
