// In-memory pool store for tests

use soroban_sdk::{Address, Env, Map, Vec};
use tickdex_tick::testutils::MemoryStore;
use tickdex_tick::{
    BitmapWordKey, CurrentTicks, PairId, TickFeesKey, TickKey, TickReserves, TickStore,
};

use crate::store::PoolStore;
use crate::types::{PoolKey, PoolRecord};

/// Tick state plus pool records and share balances in host maps
pub struct MemoryPoolStore {
    ticks: MemoryStore,
    pools: Map<PoolKey, PoolRecord>,
    shares: Map<(PoolKey, Address), i128>,
    next_id: u64,
}

impl MemoryPoolStore {
    pub fn new(env: &Env) -> Self {
        Self {
            ticks: MemoryStore::new(env),
            pools: Map::new(env),
            shares: Map::new(env),
            next_id: 0,
        }
    }
}

impl TickStore for MemoryPoolStore {
    fn env(&self) -> &Env {
        self.ticks.env()
    }

    fn read_tick(&self, key: &TickKey) -> Option<TickReserves> {
        self.ticks.read_tick(key)
    }

    fn write_tick(&mut self, key: &TickKey, tick: &TickReserves) {
        self.ticks.write_tick(key, tick)
    }

    fn remove_tick(&mut self, key: &TickKey) {
        self.ticks.remove_tick(key)
    }

    fn read_tick_fees(&self, key: &TickFeesKey) -> Vec<u64> {
        self.ticks.read_tick_fees(key)
    }

    fn write_tick_fees(&mut self, key: &TickFeesKey, fees: &Vec<u64>) {
        self.ticks.write_tick_fees(key, fees)
    }

    fn read_bitmap_word(&self, key: &BitmapWordKey) -> u128 {
        self.ticks.read_bitmap_word(key)
    }

    fn write_bitmap_word(&mut self, key: &BitmapWordKey, bits: u128) {
        self.ticks.write_bitmap_word(key, bits)
    }

    fn read_current_ticks(&self, pair: &PairId) -> CurrentTicks {
        self.ticks.read_current_ticks(pair)
    }

    fn write_current_ticks(&mut self, pair: &PairId, current: &CurrentTicks) {
        self.ticks.write_current_ticks(pair, current)
    }
}

impl PoolStore for MemoryPoolStore {
    fn read_pool(&self, key: &PoolKey) -> Option<PoolRecord> {
        self.pools.get(key.clone())
    }

    fn write_pool(&mut self, key: &PoolKey, pool: &PoolRecord) {
        self.pools.set(key.clone(), pool.clone());
    }

    fn remove_pool(&mut self, key: &PoolKey) {
        self.pools.remove(key.clone());
    }

    fn next_pool_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn read_share_balance(&self, key: &PoolKey, owner: &Address) -> i128 {
        self.shares.get((key.clone(), owner.clone())).unwrap_or(0)
    }

    fn write_share_balance(&mut self, key: &PoolKey, owner: &Address, balance: i128) {
        if balance == 0 {
            self.shares.remove((key.clone(), owner.clone()));
        } else {
            self.shares.set((key.clone(), owner.clone()), balance);
        }
    }
}
