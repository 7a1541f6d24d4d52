use soroban_sdk::contracttype;
use tickdex_tick::{PairId, Side, TickKey};

/// Identity of a pool: a center tick and fee tier within a pair
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolKey {
    pub pair: PairId,
    pub center_tick: i64,
    pub fee: u64,
}

impl PoolKey {
    pub fn new(pair: &PairId, center_tick: i64, fee: u64) -> Self {
        Self {
            pair: pair.clone(),
            center_tick,
            fee,
        }
    }

    pub fn lower_tick(&self) -> i64 {
        self.center_tick - self.fee as i64
    }

    pub fn upper_tick(&self) -> i64 {
        self.center_tick + self.fee as i64
    }

    /// Token0 tick below the center
    pub fn lower_key(&self) -> TickKey {
        TickKey::new(&self.pair, self.lower_tick(), self.fee, Side::Token0)
    }

    /// Token1 tick above the center
    pub fn upper_key(&self) -> TickKey {
        TickKey::new(&self.pair, self.upper_tick(), self.fee, Side::Token1)
    }
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PoolRecord {
    /// Sequential id assigned at creation
    pub id: u64,
    pub total_shares: i128,
}
