// Withdrawal
//
// Burns shares for their pro-rata claim on both pool ticks. The last
// share out collects the pool record.

use soroban_sdk::Address;
use tickdex_shares::{
    burn_shares, pool_reserves, read_pool, share_balance, value_of_shares, PoolKey, PoolStore,
};
use tickdex_tick::remove_reserves;

use crate::error::DexError;
use crate::events;

/// Returns (amount0, amount1) released to `owner`
pub fn execute<S: PoolStore>(
    store: &mut S,
    owner: &Address,
    key: &PoolKey,
    shares: i128,
) -> Result<(i128, i128), DexError> {
    if shares <= 0 {
        return Err(DexError::InvalidAmount);
    }
    let pool = read_pool(store, key).ok_or(DexError::PoolNotFound)?;
    if share_balance(store, key, owner) < shares {
        return Err(DexError::InsufficientShares);
    }

    let (reserve0, reserve1) = pool_reserves(store, key);
    let (amount0, amount1) =
        value_of_shares(store.env(), reserve0, reserve1, shares, pool.total_shares)?;

    remove_reserves(store, &key.lower_key(), amount0)?;
    remove_reserves(store, &key.upper_key(), amount1)?;
    if burn_shares(store, key, owner, shares)?.is_none() {
        events::emit_pool_removed(store.env(), key, pool.id);
    }

    events::emit_withdraw(store.env(), owner, key, amount0, amount1, shares);
    Ok((amount0, amount1))
}
