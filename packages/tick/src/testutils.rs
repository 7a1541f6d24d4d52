// In-memory tick store for tests

use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, Map, Vec};

use crate::store::TickStore;
use crate::types::{BitmapWordKey, CurrentTicks, PairId, TickFeesKey, TickKey, TickReserves};

/// Tick state held in host maps
pub struct MemoryStore {
    env: Env,
    ticks: Map<TickKey, TickReserves>,
    fees: Map<TickFeesKey, Vec<u64>>,
    bitmap: Map<BitmapWordKey, u128>,
    current: Map<PairId, CurrentTicks>,
}

impl MemoryStore {
    pub fn new(env: &Env) -> Self {
        Self {
            env: env.clone(),
            ticks: Map::new(env),
            fees: Map::new(env),
            bitmap: Map::new(env),
            current: Map::new(env),
        }
    }

    /// Number of ticks holding reserves
    pub fn tick_count(&self) -> u32 {
        self.ticks.len()
    }

    /// Number of nonzero bitmap words across all levels
    pub fn bitmap_word_count(&self) -> u32 {
        self.bitmap.len()
    }
}

impl TickStore for MemoryStore {
    fn env(&self) -> &Env {
        &self.env
    }

    fn read_tick(&self, key: &TickKey) -> Option<TickReserves> {
        self.ticks.get(key.clone())
    }

    fn write_tick(&mut self, key: &TickKey, tick: &TickReserves) {
        self.ticks.set(key.clone(), tick.clone());
    }

    fn remove_tick(&mut self, key: &TickKey) {
        self.ticks.remove(key.clone());
    }

    fn read_tick_fees(&self, key: &TickFeesKey) -> Vec<u64> {
        self.fees
            .get(key.clone())
            .unwrap_or_else(|| Vec::new(&self.env))
    }

    fn write_tick_fees(&mut self, key: &TickFeesKey, fees: &Vec<u64>) {
        if fees.is_empty() {
            self.fees.remove(key.clone());
        } else {
            self.fees.set(key.clone(), fees.clone());
        }
    }

    fn read_bitmap_word(&self, key: &BitmapWordKey) -> u128 {
        self.bitmap.get(key.clone()).unwrap_or(0)
    }

    fn write_bitmap_word(&mut self, key: &BitmapWordKey, bits: u128) {
        if bits == 0 {
            self.bitmap.remove(key.clone());
        } else {
            self.bitmap.set(key.clone(), bits);
        }
    }

    fn read_current_ticks(&self, pair: &PairId) -> CurrentTicks {
        self.current.get(pair.clone()).unwrap_or_default()
    }

    fn write_current_ticks(&mut self, pair: &PairId, current: &CurrentTicks) {
        self.current.set(pair.clone(), current.clone());
    }
}

/// A fresh pair of generated token addresses
pub fn pair(env: &Env) -> PairId {
    let token_a = Address::generate(env);
    let token_b = Address::generate(env);
    match PairId::from_tokens(&token_a, &token_b) {
        Some((pair, _)) => pair,
        None => panic!("generated addresses collided"),
    }
}
