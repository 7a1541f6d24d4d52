// Pool Registry
//
// A pool is the token0 tick at center - fee plus the token1 tick at
// center + fee. The registry owns the pool record and its share ledger;
// reserves stay in the tick ledger.

use soroban_sdk::{Address, Env};
use tickdex_math::{i128_to_u128, mul_div, u128_to_i128, Price};
use tickdex_tick::{get_reserves, EngineError, TickStore};

use crate::store::PoolStore;
use crate::types::{PoolKey, PoolRecord};

pub fn read_pool<S: PoolStore>(store: &S, key: &PoolKey) -> Option<PoolRecord> {
    store.read_pool(key)
}

/// Existing pool at `key`, or a new one with zero shares. The flag is true
/// when the pool was created by this call.
pub fn get_or_create_pool<S: PoolStore>(
    store: &mut S,
    key: &PoolKey,
) -> Result<(PoolRecord, bool), EngineError> {
    if let Some(pool) = store.read_pool(key) {
        return Ok((pool, false));
    }

    // both ticks must be priceable
    Price::at_tick(key.lower_tick())?;
    Price::at_tick(key.upper_tick())?;

    let pool = PoolRecord {
        id: store.next_pool_id(),
        total_shares: 0,
    };
    store.write_pool(key, &pool);
    Ok((pool, true))
}

/// (token0 reserves at the lower tick, token1 reserves at the upper tick)
pub fn pool_reserves<S: TickStore>(store: &S, key: &PoolKey) -> (i128, i128) {
    (
        get_reserves(store, &key.lower_key()),
        get_reserves(store, &key.upper_key()),
    )
}

pub fn share_balance<S: PoolStore>(store: &S, key: &PoolKey, owner: &Address) -> i128 {
    store.read_share_balance(key, owner)
}

pub fn issue_shares<S: PoolStore>(
    store: &mut S,
    key: &PoolKey,
    owner: &Address,
    amount: i128,
) -> Result<PoolRecord, EngineError> {
    if amount < 0 {
        return Err(EngineError::InvalidAmount);
    }
    let mut pool = store.read_pool(key).ok_or(EngineError::PoolNotFound)?;
    if amount == 0 {
        return Ok(pool);
    }

    let balance = store
        .read_share_balance(key, owner)
        .checked_add(amount)
        .ok_or(EngineError::Overflow)?;
    pool.total_shares = pool
        .total_shares
        .checked_add(amount)
        .ok_or(EngineError::Overflow)?;

    store.write_share_balance(key, owner, balance);
    store.write_pool(key, &pool);
    Ok(pool)
}

/// Burn shares from `owner`. Returns the remaining pool, or `None` once the
/// last share is gone and the pool record has been collected.
pub fn burn_shares<S: PoolStore>(
    store: &mut S,
    key: &PoolKey,
    owner: &Address,
    amount: i128,
) -> Result<Option<PoolRecord>, EngineError> {
    if amount <= 0 {
        return Err(EngineError::InvalidAmount);
    }
    let mut pool = store.read_pool(key).ok_or(EngineError::PoolNotFound)?;
    let balance = store.read_share_balance(key, owner);
    if amount > balance {
        return Err(EngineError::InsufficientShares);
    }
    if amount > pool.total_shares {
        return Err(EngineError::InvariantViolation);
    }

    pool.total_shares -= amount;
    if pool.total_shares == 0 && pool_reserves(store, key) != (0, 0) {
        return Err(EngineError::InvariantViolation);
    }

    store.write_share_balance(key, owner, balance - amount);
    if pool.total_shares == 0 {
        store.remove_pool(key);
        return Ok(None);
    }

    store.write_pool(key, &pool);
    Ok(Some(pool))
}

/// Proportional claim of `shares` on (reserve0, reserve1), rounded down on
/// both sides.
pub fn value_of_shares(
    env: &Env,
    reserve0: i128,
    reserve1: i128,
    shares: i128,
    total_shares: i128,
) -> Result<(i128, i128), EngineError> {
    if shares < 0 {
        return Err(EngineError::InvalidAmount);
    }
    if total_shares <= 0 {
        return Err(EngineError::PoolNotFound);
    }
    if shares > total_shares {
        return Err(EngineError::InsufficientShares);
    }

    let shares = i128_to_u128(shares)?;
    let total = i128_to_u128(total_shares)?;
    let amount0 = mul_div(env, i128_to_u128(reserve0)?, shares, total)?;
    let amount1 = mul_div(env, i128_to_u128(reserve1)?, shares, total)?;
    Ok((u128_to_i128(amount0)?, u128_to_i128(amount1)?))
}
