// Tick Ledger
//
// Reserve and liquidity bookkeeping for single ticks. Every change that
// empties a tick or brings it back to life is reported to the cursor
// tracker so the per-pair cursors stay current.

use soroban_sdk::Env;
use tickdex_math::{i128_to_u128, u128_to_i128, Price};

use crate::cursor;
use crate::error::EngineError;
use crate::store::TickStore;
use crate::types::{Side, TickFill, TickKey, TickReserves};

/// Counter-token needed to drain `reserves` at the tick price, rounded up
pub fn liquidity_for_reserves(env: &Env, key: &TickKey, reserves: i128) -> Result<i128, EngineError> {
    if reserves == 0 {
        return Ok(0);
    }
    let price = Price::at_tick(key.tick_index)?;
    let amount = i128_to_u128(reserves)?;
    let liquidity = match key.side {
        Side::Token1 => price.mul_ceil(env, amount)?,
        Side::Token0 => price.div_ceil(env, amount)?,
    };
    Ok(u128_to_i128(liquidity)?)
}

/// Reserves that `liquidity` units buy at the tick price, rounded down
pub fn reserves_for_liquidity(env: &Env, key: &TickKey, liquidity: i128) -> Result<i128, EngineError> {
    if liquidity == 0 {
        return Ok(0);
    }
    let price = Price::at_tick(key.tick_index)?;
    let amount = i128_to_u128(liquidity)?;
    let reserves = match key.side {
        Side::Token1 => price.div_floor(env, amount)?,
        Side::Token0 => price.mul_floor(env, amount)?,
    };
    Ok(u128_to_i128(reserves)?)
}

pub fn get_tick<S: TickStore>(store: &S, key: &TickKey) -> TickReserves {
    store.read_tick(key).unwrap_or_default()
}

pub fn get_reserves<S: TickStore>(store: &S, key: &TickKey) -> i128 {
    get_tick(store, key).reserves
}

pub fn get_liquidity<S: TickStore>(store: &S, key: &TickKey) -> i128 {
    get_tick(store, key).liquidity
}

pub fn add_reserves<S: TickStore>(
    store: &mut S,
    key: &TickKey,
    amount: i128,
) -> Result<TickReserves, EngineError> {
    if amount < 0 {
        return Err(EngineError::InvalidAmount);
    }
    let current = get_tick(store, key);
    if amount == 0 {
        return Ok(current);
    }
    let reserves = current
        .reserves
        .checked_add(amount)
        .ok_or(EngineError::Overflow)?;
    set_reserves(store, key, &current, reserves)
}

pub fn remove_reserves<S: TickStore>(
    store: &mut S,
    key: &TickKey,
    amount: i128,
) -> Result<TickReserves, EngineError> {
    if amount < 0 {
        return Err(EngineError::InvalidAmount);
    }
    let current = get_tick(store, key);
    if amount > current.reserves {
        return Err(EngineError::InsufficientReserves);
    }
    if amount == 0 {
        return Ok(current);
    }
    set_reserves(store, key, &current, current.reserves - amount)
}

/// Credit the reserves bought by `liquidity` units; returns the reserves added
pub fn add_liquidity<S: TickStore>(
    store: &mut S,
    key: &TickKey,
    liquidity: i128,
) -> Result<i128, EngineError> {
    if liquidity < 0 {
        return Err(EngineError::InvalidAmount);
    }
    let reserves = reserves_for_liquidity(store.env(), key, liquidity)?;
    add_reserves(store, key, reserves)?;
    Ok(reserves)
}

/// Take up to `max_liquidity` units worth of reserves out of a tick.
///
/// Drains the tick when the budget covers its liquidity. Otherwise pays out
/// floor(budget at price) and charges the rounded-up cost of that payout,
/// which never exceeds the budget.
pub fn remove_liquidity<S: TickStore>(
    store: &mut S,
    key: &TickKey,
    max_liquidity: i128,
) -> Result<TickFill, EngineError> {
    if max_liquidity < 0 {
        return Err(EngineError::InvalidAmount);
    }
    let tick = get_tick(store, key);
    if tick.is_empty() || max_liquidity == 0 {
        return Ok(TickFill::default());
    }

    if max_liquidity >= tick.liquidity {
        remove_reserves(store, key, tick.reserves)?;
        return Ok(TickFill {
            reserves_out: tick.reserves,
            liquidity_in: tick.liquidity,
        });
    }

    let env = store.env().clone();
    let reserves_out = reserves_for_liquidity(&env, key, max_liquidity)?;
    if reserves_out == 0 {
        return Ok(TickFill::default());
    }
    let liquidity_in = liquidity_for_reserves(&env, key, reserves_out)?;
    if liquidity_in > max_liquidity || reserves_out >= tick.reserves {
        return Err(EngineError::InvariantViolation);
    }

    remove_reserves(store, key, reserves_out)?;
    Ok(TickFill {
        reserves_out,
        liquidity_in,
    })
}

fn set_reserves<S: TickStore>(
    store: &mut S,
    key: &TickKey,
    previous: &TickReserves,
    reserves: i128,
) -> Result<TickReserves, EngineError> {
    if reserves < 0 {
        return Err(EngineError::InvariantViolation);
    }
    let updated = TickReserves {
        reserves,
        liquidity: liquidity_for_reserves(store.env(), key, reserves)?,
    };

    if updated.is_empty() {
        store.remove_tick(key);
        if !previous.is_empty() {
            cursor::on_reserves_emptied(store, key)?;
        }
    } else {
        store.write_tick(key, &updated);
        if previous.is_empty() {
            cursor::on_reserves_created(store, key)?;
        }
    }
    Ok(updated)
}
