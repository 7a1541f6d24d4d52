// Caller coordinates to canonical pair coordinates
//
// Callers name tokens in any order. A tick index given for (token_a,
// token_b) is the price of token_b in token_a, so when token_a sorts after
// token_b the index is negated.

use soroban_sdk::Address;
use tickdex_math::{MAX_TICK, MIN_TICK};
use tickdex_shares::PoolKey;
use tickdex_tick::PairId;

use crate::error::DexError;

pub fn sort_pair(token_a: &Address, token_b: &Address) -> Result<(PairId, bool), DexError> {
    PairId::from_tokens(token_a, token_b).ok_or(DexError::InvalidTokenPair)
}

pub fn canonical_tick(tick_index: i64, flipped: bool) -> Result<i64, DexError> {
    if flipped {
        tick_index.checked_neg().ok_or(DexError::TickOutOfRange)
    } else {
        Ok(tick_index)
    }
}

/// Reorder an (a, b) amount pair to (token0, token1), or back
pub fn canonical_amounts(amount_a: i128, amount_b: i128, flipped: bool) -> (i128, i128) {
    if flipped {
        (amount_b, amount_a)
    } else {
        (amount_a, amount_b)
    }
}

/// Pool key for a center given in caller coordinates. Both pool ticks must
/// lie within +/- MAX_TICK.
pub fn pool_key(pair: &PairId, tick_index: i64, fee: u64, flipped: bool) -> Result<PoolKey, DexError> {
    let center = canonical_tick(tick_index, flipped)?;
    let offset = i64::try_from(fee).map_err(|_| DexError::TickOutOfRange)?;
    let in_range = |tick: Option<i64>| tick.is_some_and(|t| (MIN_TICK..=MAX_TICK).contains(&t));
    if !in_range(center.checked_sub(offset)) || !in_range(center.checked_add(offset)) {
        return Err(DexError::TickOutOfRange);
    }
    Ok(PoolKey::new(pair, center, fee))
}
