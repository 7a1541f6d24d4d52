// Contract storage
//
// Config lives in instance storage. Ticks, cursors, pools and share
// balances live in persistent storage, one entry each. The liquid-tick
// index is split into bitmap words and per-index fee lists.

use soroban_sdk::{contracttype, Address, Env, IntoVal, TryFromVal, Val, Vec};
use tickdex_shares::{PoolKey, PoolRecord, PoolStore};
use tickdex_tick::{
    BitmapWordKey, CurrentTicks, PairId, TickFeesKey, TickKey, TickReserves, TickStore,
};

use crate::error::DexError;
use crate::events;
use crate::types::DexConfig;

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Initialized,
    NextPoolId,
    Tick(TickKey),
    TickFees(TickFeesKey),
    TickBitmap(BitmapWordKey),
    CurrentTicks(PairId),
    Pool(PoolKey),
    Shares(PoolKey, Address),
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// ~30 days at 5s/ledger
const TTL_THRESHOLD: u32 = 518_400;
/// ~180 days at 5s/ledger
const TTL_EXTEND_TO: u32 = 3_110_400;

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ============================================================
// INITIALIZATION / CONFIG
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
    extend_instance_ttl(env);
}

pub fn write_config(env: &Env, config: &DexConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

pub fn read_config(env: &Env) -> Result<DexConfig, DexError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(DexError::NotInitialized)
}

// ============================================================
// ENGINE STORE
// ============================================================

/// Tick and pool state over contract storage
pub struct ContractStore {
    env: Env,
}

impl ContractStore {
    pub fn new(env: &Env) -> Self {
        Self { env: env.clone() }
    }

    fn get<V: TryFromVal<Env, Val>>(&self, key: &DataKey) -> Option<V> {
        self.env.storage().persistent().get(key)
    }

    fn set<V: IntoVal<Env, Val>>(&self, key: &DataKey, value: &V) {
        self.env.storage().persistent().set(key, value);
        extend_ttl(&self.env, key);
    }

    fn remove(&self, key: &DataKey) {
        self.env.storage().persistent().remove(key);
    }
}

impl TickStore for ContractStore {
    fn env(&self) -> &Env {
        &self.env
    }

    fn read_tick(&self, key: &TickKey) -> Option<TickReserves> {
        self.get(&DataKey::Tick(key.clone()))
    }

    fn write_tick(&mut self, key: &TickKey, tick: &TickReserves) {
        self.set(&DataKey::Tick(key.clone()), tick);
        events::emit_tick_update(&self.env, key, tick);
    }

    fn remove_tick(&mut self, key: &TickKey) {
        self.remove(&DataKey::Tick(key.clone()));
        events::emit_tick_update(&self.env, key, &TickReserves::default());
    }

    fn read_tick_fees(&self, key: &TickFeesKey) -> Vec<u64> {
        self.get(&DataKey::TickFees(key.clone()))
            .unwrap_or_else(|| Vec::new(&self.env))
    }

    fn write_tick_fees(&mut self, key: &TickFeesKey, fees: &Vec<u64>) {
        let key = DataKey::TickFees(key.clone());
        if fees.is_empty() {
            self.remove(&key);
        } else {
            self.set(&key, fees);
        }
    }

    fn read_bitmap_word(&self, key: &BitmapWordKey) -> u128 {
        self.get(&DataKey::TickBitmap(key.clone())).unwrap_or(0)
    }

    fn write_bitmap_word(&mut self, key: &BitmapWordKey, bits: u128) {
        let key = DataKey::TickBitmap(key.clone());
        if bits == 0 {
            self.remove(&key);
        } else {
            self.set(&key, &bits);
        }
    }

    fn read_current_ticks(&self, pair: &PairId) -> CurrentTicks {
        self.get(&DataKey::CurrentTicks(pair.clone()))
            .unwrap_or_default()
    }

    fn write_current_ticks(&mut self, pair: &PairId, current: &CurrentTicks) {
        self.set(&DataKey::CurrentTicks(pair.clone()), current);
    }
}

impl PoolStore for ContractStore {
    fn read_pool(&self, key: &PoolKey) -> Option<PoolRecord> {
        self.get(&DataKey::Pool(key.clone()))
    }

    fn write_pool(&mut self, key: &PoolKey, pool: &PoolRecord) {
        self.set(&DataKey::Pool(key.clone()), pool);
    }

    fn remove_pool(&mut self, key: &PoolKey) {
        self.remove(&DataKey::Pool(key.clone()));
    }

    fn next_pool_id(&mut self) -> u64 {
        let id: u64 = self
            .env
            .storage()
            .instance()
            .get(&DataKey::NextPoolId)
            .unwrap_or(0);
        self.env.storage().instance().set(&DataKey::NextPoolId, &(id + 1));
        id
    }

    fn read_share_balance(&self, key: &PoolKey, owner: &Address) -> i128 {
        self.get(&DataKey::Shares(key.clone(), owner.clone()))
            .unwrap_or(0)
    }

    fn write_share_balance(&mut self, key: &PoolKey, owner: &Address, balance: i128) {
        let key = DataKey::Shares(key.clone(), owner.clone());
        if balance == 0 {
            self.remove(&key);
        } else {
            self.set(&key, &balance);
        }
    }
}
