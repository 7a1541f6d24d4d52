// Storage trait for tick state
//
// Implemented by the contract over Soroban storage and by in-memory stores
// in tests and swap simulation.

use soroban_sdk::{Env, Vec};
use crate::types::{BitmapWordKey, CurrentTicks, PairId, TickFeesKey, TickKey, TickReserves};

pub trait TickStore {
    fn env(&self) -> &Env;

    fn read_tick(&self, key: &TickKey) -> Option<TickReserves>;
    fn write_tick(&mut self, key: &TickKey, tick: &TickReserves);
    fn remove_tick(&mut self, key: &TickKey);

    /// Fee tiers with reserves at one tick index, ascending
    fn read_tick_fees(&self, key: &TickFeesKey) -> Vec<u64>;
    /// An empty list deletes the entry
    fn write_tick_fees(&mut self, key: &TickFeesKey, fees: &Vec<u64>);

    /// Missing words read as zero
    fn read_bitmap_word(&self, key: &BitmapWordKey) -> u128;
    /// A zero word deletes the entry
    fn write_bitmap_word(&mut self, key: &BitmapWordKey, bits: u128);

    fn read_current_ticks(&self, pair: &PairId) -> CurrentTicks;
    fn write_current_ticks(&mut self, pair: &PairId, current: &CurrentTicks);
}
