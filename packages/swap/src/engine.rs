use tickdex_math::constants::MAX_SWAP_ITERATIONS;
use tickdex_tick::{
    add_reserves, next_location, remove_liquidity, EngineError, PairId, TickKey, TickStore,
};

use crate::simulation::SimulatedStore;
use crate::types::{Direction, SwapResult, SwapStatus};

// ============================================================
// PUBLIC SWAP FUNCTIONS
// ============================================================

/// Execute a swap against the ticks of `pair`
///
/// # Arguments
/// * `store` - Tick storage
/// * `pair` - Canonical pair
/// * `direction` - Token sold by the taker
/// * `amount_in` - Maximum input
/// * `limit_tick` - Last tick index (inclusive) the swap may consume
///
/// Each step starts at the direction's cursor. The taker's payment is
/// credited to the counterpart tick of the same pool, which is how the
/// spread stays with that pool's share holders.
pub fn swap<S: TickStore>(
    store: &mut S,
    pair: &PairId,
    direction: Direction,
    amount_in: i128,
    limit_tick: Option<i64>,
) -> Result<SwapResult, EngineError> {
    if amount_in < 0 {
        return Err(EngineError::InvalidAmount);
    }

    let maker_side = direction.maker_side();
    let mut remaining = amount_in;
    let mut amount_out: i128 = 0;
    let mut ticks_crossed: u32 = 0;
    let mut iterations: u32 = 0;
    let mut status = SwapStatus::Completed;

    while remaining > 0 {
        if iterations >= MAX_SWAP_ITERATIONS {
            status = SwapStatus::LimitReached;
            break;
        }
        iterations += 1;

        let Some(location) = next_location(store, pair, maker_side)? else {
            status = SwapStatus::LiquidityExhausted;
            break;
        };
        if limit_tick.is_some_and(|limit| direction.is_past_limit(location.tick_index, limit)) {
            status = SwapStatus::LimitReached;
            break;
        }

        let maker = TickKey::new(pair, location.tick_index, location.fee, maker_side);
        let fill = remove_liquidity(store, &maker, remaining)?;
        if fill.reserves_out == 0 {
            // dust left; every later tick is pricier
            break;
        }

        add_reserves(store, &maker.counterpart(), fill.liquidity_in)?;
        remaining -= fill.liquidity_in;
        amount_out = amount_out
            .checked_add(fill.reserves_out)
            .ok_or(EngineError::Overflow)?;
        if store.read_tick(&maker).is_none() {
            ticks_crossed += 1;
        }
    }

    Ok(SwapResult {
        amount_in: amount_in - remaining,
        amount_out,
        ticks_crossed,
        status,
    })
}

/// Quote a swap without executing (read-only simulation)
pub fn quote<S: TickStore>(
    store: &S,
    pair: &PairId,
    direction: Direction,
    amount_in: i128,
    limit_tick: Option<i64>,
) -> Result<SwapResult, EngineError> {
    let mut simulated = SimulatedStore::new(store);
    swap(&mut simulated, pair, direction, amount_in, limit_tick)
}
