#![no_std]

//! # TickDex
//!
//! Concentrated-liquidity exchange over discrete price ticks.
//!
//! ## Responsibilities:
//! 1. Pool deposits with behind-enemy-lines policy and autoswap
//! 2. Pro-rata withdrawals
//! 3. Tick-walking swaps and side-effect-free quotes
//! 4. Per-pair current-tick cursors
//!
//! Every entry point takes tokens in any order. Tick indices passed in are
//! the price of the second token in the first; views that report cursors
//! or ticks use canonical (token0 < token1) coordinates.

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};
use tickdex_math::{price_x64_at_tick, DEFAULT_FEE_TIERS, MAX_FEE_TIER};
use tickdex_shares::{pool_reserves, read_pool, share_balance};
use tickdex_swap::Direction;
use tickdex_tick::{curr_tick_0_to_1, curr_tick_1_to_0, TickKey};

mod deposit;
mod error;
mod escrow;
mod events;
mod pair;
mod storage;
mod types;
mod withdraw;

pub use error::DexError;
pub use types::*;
pub use tickdex_swap::{SwapResult, SwapStatus};
pub use tickdex_tick::Side;

use deposit::PoolDeposit;
use pair::{canonical_amounts, canonical_tick, pool_key, sort_pair};
use storage::{extend_instance_ttl, read_config, ContractStore};

#[contract]
pub struct TickDex;

#[contractimpl]
impl TickDex {
    // ========================================================
    // WRITE FUNCTIONS
    // ========================================================

    /// Initialize with the accepted fee tiers; `None` uses the defaults
    pub fn initialize(
        env: Env,
        admin: Address,
        fee_tiers: Option<Vec<u64>>,
    ) -> Result<(), DexError> {
        admin.require_auth();

        if storage::is_initialized(&env) {
            return Err(DexError::AlreadyInitialized);
        }

        let fee_tiers = fee_tiers.unwrap_or_else(|| Vec::from_slice(&env, &DEFAULT_FEE_TIERS));
        validate_fee_tiers(&fee_tiers)?;

        let config = DexConfig {
            admin: admin.clone(),
            fee_tiers: fee_tiers.clone(),
        };
        storage::write_config(&env, &config);
        storage::set_initialized(&env);

        events::emit_initialized(&env, &admin, &fee_tiers);

        Ok(())
    }

    /// Deposit a batch of requests into pools of one pair.
    ///
    /// Requests apply in order. Token movement is netted per token over the
    /// whole batch, so swap-on-deposit output can fund later requests.
    pub fn deposit(
        env: Env,
        depositor: Address,
        token_a: Address,
        token_b: Address,
        requests: Vec<DepositRequest>,
    ) -> Result<DepositResult, DexError> {
        depositor.require_auth();

        let config = read_config(&env)?;
        let (pair, flipped) = sort_pair(&token_a, &token_b)?;
        if requests.is_empty() {
            return Err(DexError::EmptyRequest);
        }

        // the whole batch is validated before any engine state is read
        let mut deposits: Vec<PoolDeposit> = Vec::new(&env);
        for request in requests.iter() {
            deposits.push_back(PoolDeposit::from_request(&config, &pair, flipped, &request)?);
        }

        extend_instance_ttl(&env);
        let mut store = ContractStore::new(&env);
        let mut result = DepositResult {
            reserve0_deposited: Vec::new(&env),
            reserve1_deposited: Vec::new(&env),
            shares_issued: Vec::new(&env),
        };
        let mut net0: i128 = 0;
        let mut net1: i128 = 0;
        let mut deposited = false;

        for pool_deposit in deposits.iter() {
            let outcome = deposit::execute(&mut store, &depositor, &pool_deposit)?;
            net0 = net0.checked_add(outcome.net0).ok_or(DexError::Overflow)?;
            net1 = net1.checked_add(outcome.net1).ok_or(DexError::Overflow)?;
            deposited |= !outcome.skipped;

            let (reserve_a, reserve_b) = canonical_amounts(outcome.reserve0, outcome.reserve1, flipped);
            result.reserve0_deposited.push_back(reserve_a);
            result.reserve1_deposited.push_back(reserve_b);
            result.shares_issued.push_back(outcome.shares);
        }

        if !deposited {
            return Err(DexError::ZeroDeposit);
        }

        escrow::settle(&env, &pair.token0, &depositor, net0)?;
        escrow::settle(&env, &pair.token1, &depositor, net1)?;

        Ok(result)
    }

    /// Burn `shares` of the pool at (`tick_index`, `fee`). Returns the
    /// released amounts in (token_a, token_b) order.
    pub fn withdraw(
        env: Env,
        owner: Address,
        token_a: Address,
        token_b: Address,
        tick_index: i64,
        fee: u64,
        shares: i128,
    ) -> Result<(i128, i128), DexError> {
        owner.require_auth();

        read_config(&env)?;
        let (pair, flipped) = sort_pair(&token_a, &token_b)?;
        if shares <= 0 {
            return Err(DexError::InvalidAmount);
        }
        let key = pool_key(&pair, tick_index, fee, flipped)?;

        extend_instance_ttl(&env);
        let mut store = ContractStore::new(&env);
        let (amount0, amount1) = withdraw::execute(&mut store, &owner, &key, shares)?;

        escrow::pay(&env, &pair.token0, &owner, amount0)?;
        escrow::pay(&env, &pair.token1, &owner, amount1)?;

        Ok(canonical_amounts(amount0, amount1, flipped))
    }

    /// Sell up to `amount_in` of `token_in` for `token_out`.
    ///
    /// `limit_tick` bounds the ticks consumed (inclusive), in
    /// (token_in, token_out) coordinates.
    pub fn swap(
        env: Env,
        trader: Address,
        token_in: Address,
        token_out: Address,
        amount_in: i128,
        limit_tick: Option<i64>,
        min_amount_out: i128,
    ) -> Result<SwapResult, DexError> {
        trader.require_auth();

        read_config(&env)?;
        let (pair, flipped) = sort_pair(&token_in, &token_out)?;
        if amount_in <= 0 || min_amount_out < 0 {
            return Err(DexError::InvalidAmount);
        }
        let direction = if flipped {
            Direction::OneToZero
        } else {
            Direction::ZeroToOne
        };
        let limit_tick = limit_tick
            .map(|tick| canonical_tick(tick, flipped))
            .transpose()?;

        extend_instance_ttl(&env);
        let mut store = ContractStore::new(&env);
        let result = tickdex_swap::swap(&mut store, &pair, direction, amount_in, limit_tick)?;

        if result.amount_out == 0 {
            return Err(DexError::NoLiquidity);
        }
        if result.amount_out < min_amount_out {
            return Err(DexError::InsufficientOutput);
        }

        escrow::collect(&env, &token_in, &trader, result.amount_in)?;
        escrow::pay(&env, &token_out, &trader, result.amount_out)?;

        events::emit_swap(&env, &trader, &pair, &token_in, result.amount_in, result.amount_out);

        Ok(result)
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    /// Outcome of `swap` against current state, without executing it
    pub fn quote_swap(
        env: Env,
        token_in: Address,
        token_out: Address,
        amount_in: i128,
        limit_tick: Option<i64>,
    ) -> Result<SwapResult, DexError> {
        let (pair, flipped) = sort_pair(&token_in, &token_out)?;
        if amount_in <= 0 {
            return Err(DexError::InvalidAmount);
        }
        let direction = if flipped {
            Direction::OneToZero
        } else {
            Direction::ZeroToOne
        };
        let limit_tick = limit_tick
            .map(|tick| canonical_tick(tick, flipped))
            .transpose()?;

        let store = ContractStore::new(&env);
        Ok(tickdex_swap::quote(&store, &pair, direction, amount_in, limit_tick)?)
    }

    pub fn get_config(env: Env) -> Result<DexConfig, DexError> {
        read_config(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        storage::is_initialized(&env)
    }

    pub fn get_pool(
        env: Env,
        token_a: Address,
        token_b: Address,
        tick_index: i64,
        fee: u64,
    ) -> Option<PoolInfo> {
        let (pair, flipped) = sort_pair(&token_a, &token_b).ok()?;
        let key = pool_key(&pair, tick_index, fee, flipped).ok()?;
        let store = ContractStore::new(&env);
        let pool = read_pool(&store, &key)?;
        let (reserve0, reserve1) = pool_reserves(&store, &key);

        Some(PoolInfo {
            id: pool.id,
            token0: pair.token0.clone(),
            token1: pair.token1.clone(),
            center_tick: key.center_tick,
            fee,
            lower_tick: key.lower_tick(),
            upper_tick: key.upper_tick(),
            reserve0,
            reserve1,
            total_shares: pool.total_shares,
        })
    }

    /// Tick holding `side` at `tick_index`, in canonical coordinates.
    /// Empty ticks report zero reserves.
    pub fn get_tick(
        env: Env,
        token_a: Address,
        token_b: Address,
        tick_index: i64,
        fee: u64,
        side: Side,
    ) -> Result<TickInfo, DexError> {
        let (pair, _) = sort_pair(&token_a, &token_b)?;
        let price_x64 = price_x64_at_tick(tick_index)?;
        let store = ContractStore::new(&env);
        let tick = tickdex_tick::get_tick(&store, &TickKey::new(&pair, tick_index, fee, side));

        Ok(TickInfo {
            tick_index,
            fee,
            side,
            reserves: tick.reserves,
            liquidity: tick.liquidity,
            price_x64,
        })
    }

    /// Lowest token1-side tick with reserves
    pub fn get_curr_tick_0_to_1(env: Env, token_a: Address, token_b: Address) -> Option<i64> {
        let (pair, _) = sort_pair(&token_a, &token_b).ok()?;
        curr_tick_0_to_1(&ContractStore::new(&env), &pair)
    }

    /// Highest token0-side tick with reserves
    pub fn get_curr_tick_1_to_0(env: Env, token_a: Address, token_b: Address) -> Option<i64> {
        let (pair, _) = sort_pair(&token_a, &token_b).ok()?;
        curr_tick_1_to_0(&ContractStore::new(&env), &pair)
    }

    pub fn get_shares(
        env: Env,
        owner: Address,
        token_a: Address,
        token_b: Address,
        tick_index: i64,
        fee: u64,
    ) -> i128 {
        let Ok((pair, flipped)) = sort_pair(&token_a, &token_b) else {
            return 0;
        };
        let Ok(key) = pool_key(&pair, tick_index, fee, flipped) else {
            return 0;
        };
        share_balance(&ContractStore::new(&env), &key, &owner)
    }

    /// Price of token1 in token0 at `tick` (Q64.64)
    pub fn price_at_tick(_env: Env, tick: i64) -> Result<u128, DexError> {
        Ok(price_x64_at_tick(tick)?)
    }
}

fn validate_fee_tiers(fee_tiers: &Vec<u64>) -> Result<(), DexError> {
    if fee_tiers.is_empty() {
        return Err(DexError::InvalidFeeTiers);
    }
    for (i, tier) in fee_tiers.iter().enumerate() {
        if tier > MAX_FEE_TIER {
            return Err(DexError::InvalidFeeTiers);
        }
        if fee_tiers.iter().skip(i + 1).any(|other| other == tier) {
            return Err(DexError::InvalidFeeTiers);
        }
    }
    Ok(())
}
