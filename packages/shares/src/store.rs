use soroban_sdk::Address;
use tickdex_tick::TickStore;

use crate::types::{PoolKey, PoolRecord};

/// Pool records and share balances, alongside the tick state they cover
pub trait PoolStore: TickStore {
    fn read_pool(&self, key: &PoolKey) -> Option<PoolRecord>;
    fn write_pool(&mut self, key: &PoolKey, pool: &PoolRecord);
    fn remove_pool(&mut self, key: &PoolKey);

    /// Allocate the next pool id
    fn next_pool_id(&mut self) -> u64;

    fn read_share_balance(&self, key: &PoolKey, owner: &Address) -> i128;
    /// A zero balance removes the entry
    fn write_share_balance(&mut self, key: &PoolKey, owner: &Address, balance: i128);
}
