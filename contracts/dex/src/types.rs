//! Contract type definitions

use soroban_sdk::{contracttype, Address, Vec};
use tickdex_tick::Side;

// ============================================================
// CONFIG
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DexConfig {
    pub admin: Address,
    /// Accepted fee tiers, in ticks
    pub fee_tiers: Vec<u64>,
}

// ============================================================
// DEPOSIT
// ============================================================

/// Per-request deposit policy
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DepositOptions {
    /// Reject instead of skipping a side that is behind enemy lines
    pub fail_tx_on_bel: bool,
    /// Swap a behind-enemy-lines side through the book before depositing
    pub swap_on_deposit: bool,
    /// Leave the unmatched remainder with the depositor
    pub disable_autoswap: bool,
}

/// One pool deposit, expressed in the caller's (token_a, token_b) order.
/// `tick_index` is the pool center as the price of token_b in token_a.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositRequest {
    pub amount_a: i128,
    pub amount_b: i128,
    pub tick_index: i64,
    pub fee: u64,
    pub options: DepositOptions,
}

/// Per-request outcome of a deposit batch. `reserve0_deposited` is in
/// token_a and `reserve1_deposited` in token_b, as passed by the caller.
/// Skipped requests report zeros.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositResult {
    pub reserve0_deposited: Vec<i128>,
    pub reserve1_deposited: Vec<i128>,
    pub shares_issued: Vec<i128>,
}

// ============================================================
// VIEWS
// ============================================================

/// Pool snapshot in canonical (token0, token1) coordinates
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolInfo {
    pub id: u64,
    pub token0: Address,
    pub token1: Address,
    pub center_tick: i64,
    pub fee: u64,
    pub lower_tick: i64,
    pub upper_tick: i64,
    pub reserve0: i128,
    pub reserve1: i128,
    pub total_shares: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TickInfo {
    pub tick_index: i64,
    pub fee: u64,
    pub side: Side,
    pub reserves: i128,
    pub liquidity: i128,
    /// Price of token1 in token0 at this tick (Q64.64)
    pub price_x64: u128,
}
