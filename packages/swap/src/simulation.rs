// Copy-on-write view over a tick store. Reads fall through to the base
// store until a key is written here; the base store is never touched.

use soroban_sdk::{Env, Map, Vec};
use tickdex_tick::{
    BitmapWordKey, CurrentTicks, PairId, TickFeesKey, TickKey, TickReserves, TickStore,
};

pub struct SimulatedStore<'a, S: TickStore> {
    base: &'a S,
    ticks: Map<TickKey, TickReserves>,
    removed: Map<TickKey, bool>,
    fees: Map<TickFeesKey, Vec<u64>>,
    bitmap: Map<BitmapWordKey, u128>,
    current: Map<PairId, CurrentTicks>,
}

impl<'a, S: TickStore> SimulatedStore<'a, S> {
    pub fn new(base: &'a S) -> Self {
        let env = base.env();
        Self {
            base,
            ticks: Map::new(env),
            removed: Map::new(env),
            fees: Map::new(env),
            bitmap: Map::new(env),
            current: Map::new(env),
        }
    }
}

impl<'a, S: TickStore> TickStore for SimulatedStore<'a, S> {
    fn env(&self) -> &Env {
        self.base.env()
    }

    fn read_tick(&self, key: &TickKey) -> Option<TickReserves> {
        if self.removed.contains_key(key.clone()) {
            return None;
        }
        self.ticks
            .get(key.clone())
            .or_else(|| self.base.read_tick(key))
    }

    fn write_tick(&mut self, key: &TickKey, tick: &TickReserves) {
        self.removed.remove(key.clone());
        self.ticks.set(key.clone(), tick.clone());
    }

    fn remove_tick(&mut self, key: &TickKey) {
        self.ticks.remove(key.clone());
        self.removed.set(key.clone(), true);
    }

    fn read_tick_fees(&self, key: &TickFeesKey) -> Vec<u64> {
        self.fees
            .get(key.clone())
            .unwrap_or_else(|| self.base.read_tick_fees(key))
    }

    fn write_tick_fees(&mut self, key: &TickFeesKey, fees: &Vec<u64>) {
        self.fees.set(key.clone(), fees.clone());
    }

    fn read_bitmap_word(&self, key: &BitmapWordKey) -> u128 {
        self.bitmap
            .get(key.clone())
            .unwrap_or_else(|| self.base.read_bitmap_word(key))
    }

    fn write_bitmap_word(&mut self, key: &BitmapWordKey, bits: u128) {
        self.bitmap.set(key.clone(), bits);
    }

    fn read_current_ticks(&self, pair: &PairId) -> CurrentTicks {
        self.current
            .get(pair.clone())
            .unwrap_or_else(|| self.base.read_current_ticks(pair))
    }

    fn write_current_ticks(&mut self, pair: &PairId, current: &CurrentTicks) {
        self.current.set(pair.clone(), current.clone());
    }
}
