// Tick Types

use soroban_sdk::{contracttype, Address};

/// Canonically ordered token pair; `token0 < token1`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PairId {
    pub token0: Address,
    pub token1: Address,
}

impl PairId {
    /// Sort two tokens into a pair. The flag is true when `token_a` became
    /// token1. Identical tokens do not form a pair.
    pub fn from_tokens(token_a: &Address, token_b: &Address) -> Option<(Self, bool)> {
        if token_a == token_b {
            return None;
        }
        let flipped = token_a > token_b;
        let (token0, token1) = if flipped {
            (token_b.clone(), token_a.clone())
        } else {
            (token_a.clone(), token_b.clone())
        };
        Some((Self { token0, token1 }, flipped))
    }
}

/// Which token a tick holds
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Token0,
    Token1,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Token0 => Side::Token1,
            Side::Token1 => Side::Token0,
        }
    }
}

/// Storage key of a single tick
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TickKey {
    pub pair: PairId,
    pub tick_index: i64,
    pub fee: u64,
    pub side: Side,
}

impl TickKey {
    pub fn new(pair: &PairId, tick_index: i64, fee: u64, side: Side) -> Self {
        Self {
            pair: pair.clone(),
            tick_index,
            fee,
            side,
        }
    }

    /// Center tick of the pool this tick belongs to
    pub fn center_tick(&self) -> i64 {
        match self.side {
            Side::Token0 => self.tick_index + self.fee as i64,
            Side::Token1 => self.tick_index - self.fee as i64,
        }
    }

    /// The other tick of the same pool
    pub fn counterpart(&self) -> Self {
        let offset = 2 * self.fee as i64;
        let tick_index = match self.side {
            Side::Token0 => self.tick_index + offset,
            Side::Token1 => self.tick_index - offset,
        };
        Self {
            pair: self.pair.clone(),
            tick_index,
            fee: self.fee,
            side: self.side.opposite(),
        }
    }

    pub fn location(&self) -> TickLocation {
        TickLocation {
            tick_index: self.tick_index,
            fee: self.fee,
        }
    }
}

/// Amounts held by a tick
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TickReserves {
    /// Tokens held, in the tick's own token
    pub reserves: i128,
    /// Counter-token needed to drain the tick at its price, rounded up
    pub liquidity: i128,
}

impl TickReserves {
    pub fn is_empty(&self) -> bool {
        self.reserves == 0
    }
}

/// Position of a liquid tick within one side of a pair
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TickLocation {
    pub tick_index: i64,
    pub fee: u64,
}

/// Fee tiers holding reserves at one tick index of one side
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TickFeesKey {
    pub pair: PairId,
    pub side: Side,
    pub tick_index: i64,
}

/// One 128-bit word of a side's liquid-tick bitmap.
///
/// Level 0 bits mark tick indices; a bit at level `n + 1` marks a nonzero
/// word at level `n`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BitmapWordKey {
    pub pair: PairId,
    pub side: Side,
    pub level: u32,
    pub word: u32,
}

/// Directional cursors of a pair
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CurrentTicks {
    /// Lowest token1-side tick with reserves
    pub curr_0_to_1: Option<i64>,
    /// Highest token0-side tick with reserves
    pub curr_1_to_0: Option<i64>,
}

/// Result of taking liquidity from a tick
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TickFill {
    /// Paid out of the tick
    pub reserves_out: i128,
    /// Owed by the taker, in the counter-token
    pub liquidity_in: i128,
}
