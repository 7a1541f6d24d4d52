// Liquid Tick Bitmap
//
// Three levels of 128-bit words per pair and side. Tick indices are offset
// by MAX_TICK so every valid index maps to a non-negative bit position. The
// top level is a single word, so a search reads at most two words per
// level on the way up and one per level on the way down.

use tickdex_math::constants::MAX_TICK;

use crate::error::EngineError;
use crate::store::TickStore;
use crate::types::{BitmapWordKey, PairId, Side};

const WORD_BITS: u32 = 128;
const WORD_SHIFT: u32 = 7;
const TOP_LEVEL: u32 = 2;

fn position(tick_index: i64) -> Result<u32, EngineError> {
    if !(-MAX_TICK..=MAX_TICK).contains(&tick_index) {
        return Err(EngineError::TickOutOfRange);
    }
    Ok((tick_index + MAX_TICK) as u32)
}

fn tick_at(position: u32) -> i64 {
    position as i64 - MAX_TICK
}

fn word_key(pair: &PairId, side: Side, level: u32, word: u32) -> BitmapWordKey {
    BitmapWordKey {
        pair: pair.clone(),
        side,
        level,
        word,
    }
}

/// Split a bit position into (word index, bit within word)
#[inline]
fn split(position: u32) -> (u32, u32) {
    (position >> WORD_SHIFT, position & (WORD_BITS - 1))
}

pub fn set<S: TickStore>(store: &mut S, pair: &PairId, side: Side, tick_index: i64) -> Result<(), EngineError> {
    let mut position = position(tick_index)?;
    for level in 0..=TOP_LEVEL {
        let (word, bit) = split(position);
        let key = word_key(pair, side, level, word);
        let previous = store.read_bitmap_word(&key);
        store.write_bitmap_word(&key, previous | (1u128 << bit));
        if previous != 0 {
            break;
        }
        position = word;
    }
    Ok(())
}

pub fn clear<S: TickStore>(store: &mut S, pair: &PairId, side: Side, tick_index: i64) -> Result<(), EngineError> {
    let mut position = position(tick_index)?;
    for level in 0..=TOP_LEVEL {
        let (word, bit) = split(position);
        let key = word_key(pair, side, level, word);
        let bits = store.read_bitmap_word(&key) & !(1u128 << bit);
        store.write_bitmap_word(&key, bits);
        if bits != 0 {
            break;
        }
        position = word;
    }
    Ok(())
}

/// Lowest marked tick at or above `tick_index`
pub fn next_at_or_above<S: TickStore>(
    store: &S,
    pair: &PairId,
    side: Side,
    tick_index: i64,
) -> Result<Option<i64>, EngineError> {
    let found = search_up(store, pair, side, 0, position(tick_index)?);
    Ok(found.map(tick_at))
}

/// Highest marked tick at or below `tick_index`
pub fn next_at_or_below<S: TickStore>(
    store: &S,
    pair: &PairId,
    side: Side,
    tick_index: i64,
) -> Result<Option<i64>, EngineError> {
    let found = search_down(store, pair, side, 0, position(tick_index)?);
    Ok(found.map(tick_at))
}

fn search_up<S: TickStore>(store: &S, pair: &PairId, side: Side, level: u32, from: u32) -> Option<u32> {
    let (word, bit) = split(from);
    let bits = store.read_bitmap_word(&word_key(pair, side, level, word)) & (u128::MAX << bit);
    if bits != 0 {
        return Some((word << WORD_SHIFT) | bits.trailing_zeros());
    }
    if level == TOP_LEVEL {
        return None;
    }
    let next_word = search_up(store, pair, side, level + 1, word + 1)?;
    let bits = store.read_bitmap_word(&word_key(pair, side, level, next_word));
    Some((next_word << WORD_SHIFT) | bits.trailing_zeros())
}

fn search_down<S: TickStore>(store: &S, pair: &PairId, side: Side, level: u32, from: u32) -> Option<u32> {
    let (word, bit) = split(from);
    let bits = store.read_bitmap_word(&word_key(pair, side, level, word)) & (u128::MAX >> (WORD_BITS - 1 - bit));
    if bits != 0 {
        return Some((word << WORD_SHIFT) | (WORD_BITS - 1 - bits.leading_zeros()));
    }
    if level == TOP_LEVEL || word == 0 {
        return None;
    }
    let next_word = search_down(store, pair, side, level + 1, word - 1)?;
    let bits = store.read_bitmap_word(&word_key(pair, side, level, next_word));
    Some((next_word << WORD_SHIFT) | (WORD_BITS - 1 - bits.leading_zeros()))
}
