use soroban_sdk::contracttype;
use tickdex_tick::Side;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    /// Sell token0, buy token1 from ascending token1 ticks
    ZeroToOne,
    /// Sell token1, buy token0 from descending token0 ticks
    OneToZero,
}

impl Direction {
    /// Side whose reserves the taker buys
    pub fn maker_side(self) -> Side {
        match self {
            Direction::ZeroToOne => Side::Token1,
            Direction::OneToZero => Side::Token0,
        }
    }

    pub fn taker_side(self) -> Side {
        self.maker_side().opposite()
    }

    /// Selling `side` for the other token
    pub fn selling(side: Side) -> Self {
        match side {
            Side::Token0 => Direction::ZeroToOne,
            Side::Token1 => Direction::OneToZero,
        }
    }

    /// `tick_index` lies beyond an inclusive limit tick
    pub fn is_past_limit(self, tick_index: i64, limit_tick: i64) -> bool {
        match self {
            Direction::ZeroToOne => tick_index > limit_tick,
            Direction::OneToZero => tick_index < limit_tick,
        }
    }
}

/// How a swap ended
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwapStatus {
    /// Input used up, or what is left cannot buy a single unit
    Completed,
    /// Next tick lies past the limit tick, or the iteration cap was hit
    LimitReached,
    /// No liquidity left on the maker side
    LiquidityExhausted,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapResult {
    pub amount_in: i128,
    pub amount_out: i128,
    /// Ticks drained completely
    pub ticks_crossed: u32,
    pub status: SwapStatus,
}

impl SwapResult {
    pub fn empty(status: SwapStatus) -> Self {
        Self {
            amount_in: 0,
            amount_out: 0,
            ticks_crossed: 0,
            status,
        }
    }
}
