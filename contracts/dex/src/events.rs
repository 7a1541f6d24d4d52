//! Contract events

use soroban_sdk::{Address, Env, Symbol, Vec};
use tickdex_shares::PoolKey;
use tickdex_tick::{PairId, TickKey, TickReserves};

pub fn emit_initialized(env: &Env, admin: &Address, fee_tiers: &Vec<u64>) {
    env.events().publish(
        (Symbol::new(env, "DexInit"),),
        (admin.clone(), fee_tiers.clone()),
    );
}

pub fn emit_pool_created(env: &Env, key: &PoolKey, id: u64) {
    env.events().publish(
        (Symbol::new(env, "PoolCreated"),),
        (key.clone(), id),
    );
}

/// Emitted when the last share of a pool is burned
pub fn emit_pool_removed(env: &Env, key: &PoolKey, id: u64) {
    env.events().publish(
        (Symbol::new(env, "PoolRemoved"),),
        (key.clone(), id),
    );
}

pub fn emit_deposit(
    env: &Env,
    depositor: &Address,
    key: &PoolKey,
    reserve0: i128,
    reserve1: i128,
    shares: i128,
) {
    env.events().publish(
        (Symbol::new(env, "Deposit"),),
        (depositor.clone(), key.clone(), reserve0, reserve1, shares),
    );
}

/// Emitted when a request had nothing left to deposit after the
/// behind-enemy-lines policy
pub fn emit_deposit_skipped(env: &Env, depositor: &Address, key: &PoolKey) {
    env.events().publish(
        (Symbol::new(env, "DepositSkipped"),),
        (depositor.clone(), key.clone()),
    );
}

pub fn emit_withdraw(
    env: &Env,
    owner: &Address,
    key: &PoolKey,
    amount0: i128,
    amount1: i128,
    shares: i128,
) {
    env.events().publish(
        (Symbol::new(env, "Withdraw"),),
        (owner.clone(), key.clone(), amount0, amount1, shares),
    );
}

pub fn emit_swap(
    env: &Env,
    trader: &Address,
    pair: &PairId,
    token_in: &Address,
    amount_in: i128,
    amount_out: i128,
) {
    env.events().publish(
        (Symbol::new(env, "Swap"),),
        (trader.clone(), pair.clone(), token_in.clone(), amount_in, amount_out),
    );
}

/// Emitted on every tick write; a removed tick reports zeros
pub fn emit_tick_update(env: &Env, key: &TickKey, tick: &TickReserves) {
    env.events().publish(
        (Symbol::new(env, "TickUpdate"),),
        (key.clone(), tick.reserves, tick.liquidity),
    );
}
