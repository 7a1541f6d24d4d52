// Current-Tick Tracker
//
// Per pair and side, a bitmap of liquid tick indices, the fee tiers live at
// each of them, and the two directional cursors. The ledger calls in here
// whenever a tick gains its first reserves or loses its last ones.

use crate::bitmap;
use crate::error::EngineError;
use crate::store::TickStore;
use crate::types::{PairId, Side, TickFeesKey, TickKey, TickLocation};

/// Lowest token1-side tick with reserves; where a token0 -> token1 swap starts
pub fn curr_tick_0_to_1<S: TickStore>(store: &S, pair: &PairId) -> Option<i64> {
    store.read_current_ticks(pair).curr_0_to_1
}

/// Highest token0-side tick with reserves; where a token1 -> token0 swap starts
pub fn curr_tick_1_to_0<S: TickStore>(store: &S, pair: &PairId) -> Option<i64> {
    store.read_current_ticks(pair).curr_1_to_0
}

/// Cursor consumed by takers of `side`
pub fn cursor_for<S: TickStore>(store: &S, pair: &PairId, side: Side) -> Option<i64> {
    match side {
        Side::Token1 => curr_tick_0_to_1(store, pair),
        Side::Token0 => curr_tick_1_to_0(store, pair),
    }
}

/// A deposit of `side` at `tick_index` would sit across the spread from
/// existing opposite liquidity and be immediately arbitrageable.
pub fn is_behind_enemy_lines<S: TickStore>(
    store: &S,
    pair: &PairId,
    side: Side,
    tick_index: i64,
) -> bool {
    match side {
        Side::Token0 => curr_tick_0_to_1(store, pair).is_some_and(|curr| tick_index > curr),
        Side::Token1 => curr_tick_1_to_0(store, pair).is_some_and(|curr| tick_index < curr),
    }
}

/// Tick the cursor of `side` points at. Among fee tiers sharing the cursor
/// index the lowest fee comes first.
pub fn next_location<S: TickStore>(
    store: &S,
    pair: &PairId,
    side: Side,
) -> Result<Option<TickLocation>, EngineError> {
    let Some(tick_index) = cursor_for(store, pair, side) else {
        return Ok(None);
    };
    let fee = store
        .read_tick_fees(&fees_key(pair, side, tick_index))
        .first()
        .ok_or(EngineError::InvariantViolation)?;
    Ok(Some(TickLocation { tick_index, fee }))
}

pub fn on_reserves_created<S: TickStore>(store: &mut S, key: &TickKey) -> Result<(), EngineError> {
    let fees_key = fees_key(&key.pair, key.side, key.tick_index);
    let mut fees = store.read_tick_fees(&fees_key);
    let mut position = fees.len();
    for (index, fee) in fees.iter().enumerate() {
        if fee == key.fee {
            return Err(EngineError::InvariantViolation);
        }
        if fee > key.fee {
            position = index as u32;
            break;
        }
    }
    let first_at_index = fees.is_empty();
    fees.insert(position, key.fee);
    store.write_tick_fees(&fees_key, &fees);
    if first_at_index {
        bitmap::set(store, &key.pair, key.side, key.tick_index)?;
    }

    let mut current = store.read_current_ticks(&key.pair);
    match key.side {
        Side::Token1 => {
            current.curr_0_to_1 = Some(
                current
                    .curr_0_to_1
                    .map_or(key.tick_index, |curr| curr.min(key.tick_index)),
            );
        }
        Side::Token0 => {
            current.curr_1_to_0 = Some(
                current
                    .curr_1_to_0
                    .map_or(key.tick_index, |curr| curr.max(key.tick_index)),
            );
        }
    }
    store.write_current_ticks(&key.pair, &current);
    Ok(())
}

pub fn on_reserves_emptied<S: TickStore>(store: &mut S, key: &TickKey) -> Result<(), EngineError> {
    let fees_key = fees_key(&key.pair, key.side, key.tick_index);
    let mut fees = store.read_tick_fees(&fees_key);
    let position = fees
        .first_index_of(key.fee)
        .ok_or(EngineError::InvariantViolation)?;
    fees.remove(position);
    store.write_tick_fees(&fees_key, &fees);
    if !fees.is_empty() {
        return Ok(());
    }
    bitmap::clear(store, &key.pair, key.side, key.tick_index)?;

    if cursor_for(store, &key.pair, key.side) != Some(key.tick_index) {
        return Ok(());
    }
    let mut current = store.read_current_ticks(&key.pair);
    // advance to the next liquid tick in the taker's direction
    match key.side {
        Side::Token1 => {
            current.curr_0_to_1 =
                bitmap::next_at_or_above(store, &key.pair, key.side, key.tick_index)?;
        }
        Side::Token0 => {
            current.curr_1_to_0 =
                bitmap::next_at_or_below(store, &key.pair, key.side, key.tick_index)?;
        }
    }
    store.write_current_ticks(&key.pair, &current);
    Ok(())
}

fn fees_key(pair: &PairId, side: Side, tick_index: i64) -> TickFeesKey {
    TickFeesKey {
        pair: pair.clone(),
        side,
        tick_index,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ledger::{add_reserves, remove_reserves};
    use crate::testutils::{pair, MemoryStore};
    use soroban_sdk::Env;

    #[test]
    fn test_cursors_track_best_ticks() {
        let env = Env::default();
        let mut store = MemoryStore::new(&env);
        let pair = pair(&env);

        add_reserves(&mut store, &TickKey::new(&pair, 5, 5, Side::Token1), 10).unwrap();
        add_reserves(&mut store, &TickKey::new(&pair, -5, 5, Side::Token0), 10).unwrap();
        assert_eq!(curr_tick_0_to_1(&store, &pair), Some(5));
        assert_eq!(curr_tick_1_to_0(&store, &pair), Some(-5));

        add_reserves(&mut store, &TickKey::new(&pair, -1, 1, Side::Token0), 10).unwrap();
        assert_eq!(curr_tick_1_to_0(&store, &pair), Some(-1));

        // a worse tick leaves the cursor alone
        add_reserves(&mut store, &TickKey::new(&pair, 9, 1, Side::Token1), 10).unwrap();
        assert_eq!(curr_tick_0_to_1(&store, &pair), Some(5));
    }

    #[test]
    fn test_cursor_advances_when_tick_empties() {
        let env = Env::default();
        let mut store = MemoryStore::new(&env);
        let pair = pair(&env);
        let best = TickKey::new(&pair, 2, 1, Side::Token1);
        let next = TickKey::new(&pair, 4, 1, Side::Token1);

        add_reserves(&mut store, &next, 10).unwrap();
        add_reserves(&mut store, &best, 10).unwrap();
        assert_eq!(curr_tick_0_to_1(&store, &pair), Some(2));

        remove_reserves(&mut store, &best, 10).unwrap();
        assert_eq!(curr_tick_0_to_1(&store, &pair), Some(4));

        remove_reserves(&mut store, &next, 10).unwrap();
        assert_eq!(curr_tick_0_to_1(&store, &pair), None);
    }

    #[test]
    fn test_cursor_stays_while_other_fee_tier_remains() {
        let env = Env::default();
        let mut store = MemoryStore::new(&env);
        let pair = pair(&env);
        let fee_one = TickKey::new(&pair, -3, 1, Side::Token0);
        let fee_two = TickKey::new(&pair, -3, 2, Side::Token0);

        add_reserves(&mut store, &fee_two, 10).unwrap();
        add_reserves(&mut store, &fee_one, 10).unwrap();
        assert_eq!(
            next_location(&store, &pair, Side::Token0).unwrap(),
            Some(fee_one.location())
        );

        remove_reserves(&mut store, &fee_one, 10).unwrap();
        assert_eq!(curr_tick_1_to_0(&store, &pair), Some(-3));
        assert_eq!(
            next_location(&store, &pair, Side::Token0).unwrap(),
            Some(fee_two.location())
        );
    }

    #[test]
    fn test_cursor_jumps_gaps_between_words() {
        let env = Env::default();
        let mut store = MemoryStore::new(&env);
        let pair = pair(&env);
        let near = TickKey::new(&pair, -10, 1, Side::Token0);
        let middle = TickKey::new(&pair, -20_000, 3, Side::Token0);
        let far = TickKey::new(&pair, -400_000, 1, Side::Token0);

        for key in [&far, &middle, &near] {
            add_reserves(&mut store, key, 10).unwrap();
        }
        assert_eq!(curr_tick_1_to_0(&store, &pair), Some(-10));

        // emptying a tick behind the cursor leaves it alone
        remove_reserves(&mut store, &middle, 10).unwrap();
        assert_eq!(curr_tick_1_to_0(&store, &pair), Some(-10));

        remove_reserves(&mut store, &near, 10).unwrap();
        assert_eq!(curr_tick_1_to_0(&store, &pair), Some(-400_000));
        assert_eq!(
            next_location(&store, &pair, Side::Token0).unwrap(),
            Some(far.location())
        );
    }

    #[test]
    fn test_fee_list_is_sorted_per_index() {
        let env = Env::default();
        let mut store = MemoryStore::new(&env);
        let pair = pair(&env);
        for fee in [5, 0, 2] {
            add_reserves(&mut store, &TickKey::new(&pair, 7, fee, Side::Token1), 1).unwrap();
        }

        let fees = store.read_tick_fees(&fees_key(&pair, Side::Token1, 7));
        assert_eq!(fees, soroban_sdk::vec![&env, 0u64, 2, 5]);

        remove_reserves(&mut store, &TickKey::new(&pair, 7, 2, Side::Token1), 1).unwrap();
        let fees = store.read_tick_fees(&fees_key(&pair, Side::Token1, 7));
        assert_eq!(fees, soroban_sdk::vec![&env, 0u64, 5]);
    }

    #[test]
    fn test_behind_enemy_lines_is_strict() {
        let env = Env::default();
        let mut store = MemoryStore::new(&env);
        let pair = pair(&env);
        add_reserves(&mut store, &TickKey::new(&pair, 2002, 1, Side::Token1), 10).unwrap();

        assert!(is_behind_enemy_lines(&store, &pair, Side::Token0, 2003));
        assert!(!is_behind_enemy_lines(&store, &pair, Side::Token0, 2002));
        assert!(!is_behind_enemy_lines(&store, &pair, Side::Token0, 2001));
        // no token0 liquidity, so token1 is never behind the lines
        assert!(!is_behind_enemy_lines(&store, &pair, Side::Token1, -100));
    }

    #[test]
    fn test_empty_side_has_no_location() {
        let env = Env::default();
        let store = MemoryStore::new(&env);
        assert_eq!(next_location(&store, &pair(&env), Side::Token1), Ok(None));
    }
}
