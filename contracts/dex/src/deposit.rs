// Deposit Engine
//
// Places one request into its pool: optional swap-on-deposit legs, the
// behind-enemy-lines policy, the ratio-matched main deposit and the
// fee-charged autoswap of whatever does not match.

use soroban_sdk::{contracttype, Address, U256};
use tickdex_math::{
    autoswap_value, greatest_matching_ratio, i128_to_u128, shares_minted, u128_to_i128,
    value_as_token0_x64, Price,
};
use tickdex_shares::{get_or_create_pool, issue_shares, pool_reserves, PoolKey, PoolStore};
use tickdex_swap::{swap, Direction};
use tickdex_tick::{add_reserves, is_behind_enemy_lines, PairId, Side};

use crate::error::DexError;
use crate::events;
use crate::pair::{canonical_amounts, pool_key};
use crate::types::{DepositOptions, DepositRequest, DexConfig};

/// A validated request in canonical (token0, token1) coordinates
#[contracttype(export = false)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolDeposit {
    pub key: PoolKey,
    pub amount0: i128,
    pub amount1: i128,
    pub options: DepositOptions,
}

impl PoolDeposit {
    /// Check a request without reading any engine state
    pub fn from_request(
        config: &DexConfig,
        pair: &PairId,
        flipped: bool,
        request: &DepositRequest,
    ) -> Result<Self, DexError> {
        if request.amount_a < 0 || request.amount_b < 0 {
            return Err(DexError::InvalidAmount);
        }
        if request.amount_a == 0 && request.amount_b == 0 {
            return Err(DexError::ZeroDeposit);
        }
        if !config.fee_tiers.contains(request.fee) {
            return Err(DexError::UnsupportedFeeTier);
        }

        let key = pool_key(pair, request.tick_index, request.fee, flipped)?;
        let (amount0, amount1) = canonical_amounts(request.amount_a, request.amount_b, flipped);
        Ok(Self {
            key,
            amount0,
            amount1,
            options: request.options.clone(),
        })
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DepositOutcome {
    pub reserve0: i128,
    pub reserve1: i128,
    pub shares: i128,
    /// Token0 owed by the depositor, swap legs included; negative when the
    /// contract owes it
    pub net0: i128,
    pub net1: i128,
    pub skipped: bool,
}

fn checked(value: Option<i128>) -> Result<i128, DexError> {
    value.ok_or(DexError::Overflow)
}

/// Run one deposit against `store`.
///
/// Nothing is written before the behind-enemy-lines policy has passed,
/// except by swap-on-deposit legs.
pub fn execute<S: PoolStore>(
    store: &mut S,
    depositor: &Address,
    deposit: &PoolDeposit,
) -> Result<DepositOutcome, DexError> {
    let env = store.env().clone();
    let key = &deposit.key;
    let pair = &key.pair;
    let lower = key.lower_tick();
    let upper = key.upper_tick();

    let mut amount0 = deposit.amount0;
    let mut amount1 = deposit.amount1;
    let mut net0: i128 = 0;
    let mut net1: i128 = 0;

    if deposit.options.swap_on_deposit {
        if amount0 > 0 && is_behind_enemy_lines(store, pair, Side::Token0, lower) {
            let fill = swap(store, pair, Direction::ZeroToOne, amount0, Some(lower - 1))?;
            amount0 -= fill.amount_in;
            amount1 = checked(amount1.checked_add(fill.amount_out))?;
            net0 = checked(net0.checked_add(fill.amount_in))?;
            net1 = checked(net1.checked_sub(fill.amount_out))?;
        }
        if amount1 > 0 && is_behind_enemy_lines(store, pair, Side::Token1, upper) {
            let fill = swap(store, pair, Direction::OneToZero, amount1, Some(upper + 1))?;
            amount1 -= fill.amount_in;
            amount0 = checked(amount0.checked_add(fill.amount_out))?;
            net1 = checked(net1.checked_add(fill.amount_in))?;
            net0 = checked(net0.checked_sub(fill.amount_out))?;
        }
    }

    let bel0 = amount0 > 0 && is_behind_enemy_lines(store, pair, Side::Token0, lower);
    let bel1 = amount1 > 0 && is_behind_enemy_lines(store, pair, Side::Token1, upper);
    if bel0 || bel1 {
        if deposit.options.fail_tx_on_bel {
            return Err(DexError::DepositBehindEnemyLines);
        }
        if bel0 {
            amount0 = 0;
        }
        if bel1 {
            amount1 = 0;
        }
    }
    if amount0 == 0 && amount1 == 0 {
        return Ok(skip(depositor, key, net0, net1, store));
    }

    let (pool, created) = get_or_create_pool(store, key)?;
    if created {
        events::emit_pool_created(&env, key, pool.id);
    }

    let (reserve0, reserve1) = pool_reserves(store, key);
    let reserve0 = i128_to_u128(reserve0)?;
    let reserve1 = i128_to_u128(reserve1)?;
    let amount0 = i128_to_u128(amount0)?;
    let amount1 = i128_to_u128(amount1)?;
    let total_shares = i128_to_u128(pool.total_shares)?;
    let center = Price::at_tick(key.center_tick)?;

    // main deposit at the pool's ratio
    let (in0, in1) = greatest_matching_ratio(&env, reserve0, reserve1, amount0, amount1)?;
    let pool_value = value_as_token0_x64(&env, reserve0, reserve1, &center);
    let in_value = value_as_token0_x64(&env, in0, in1, &center);
    let mut shares = shares_minted(&env, &in_value, &pool_value, total_shares)?;
    let mut deposit0 = in0;
    let mut deposit1 = in1;

    let residual0 = amount0 - in0;
    let residual1 = amount1 - in1;
    if !deposit.options.disable_autoswap && (residual0 > 0 || residual1 > 0) {
        let side0 = reserve0.checked_add(in0).ok_or(DexError::Overflow)?;
        let side1 = reserve1.checked_add(in1).ok_or(DexError::Overflow)?;
        let value0 = U256::from_u128(&env, side0).shl(64);
        let value1 = center.mul_x64(&env, side1);
        let swapped = autoswap_value(&env, &value0, &value1, residual0, residual1, &center, key.fee)?;

        // the fee stays in the pool and is priced in ahead of the residual
        let priced_against = value0.add(&value1).add(&swapped.fee_x64);
        let shares_before = total_shares.checked_add(shares).ok_or(DexError::Overflow)?;
        let residual_shares =
            shares_minted(&env, &swapped.deposit_value_x64, &priced_against, shares_before)?;
        shares = shares.checked_add(residual_shares).ok_or(DexError::Overflow)?;
        deposit0 = amount0;
        deposit1 = amount1;
    }

    if deposit0 == 0 && deposit1 == 0 {
        return Ok(skip(depositor, key, net0, net1, store));
    }
    let shares = u128_to_i128(shares)?;
    if shares == 0 {
        return Err(DexError::ZeroSharesIssued);
    }
    let deposit0 = u128_to_i128(deposit0)?;
    let deposit1 = u128_to_i128(deposit1)?;

    add_reserves(store, &key.lower_key(), deposit0)?;
    add_reserves(store, &key.upper_key(), deposit1)?;
    issue_shares(store, key, depositor, shares)?;

    events::emit_deposit(&env, depositor, key, deposit0, deposit1, shares);

    Ok(DepositOutcome {
        reserve0: deposit0,
        reserve1: deposit1,
        shares,
        net0: checked(net0.checked_add(deposit0))?,
        net1: checked(net1.checked_add(deposit1))?,
        skipped: false,
    })
}

fn skip<S: PoolStore>(
    depositor: &Address,
    key: &PoolKey,
    net0: i128,
    net1: i128,
    store: &S,
) -> DepositOutcome {
    events::emit_deposit_skipped(store.env(), depositor, key);
    DepositOutcome {
        net0,
        net1,
        skipped: true,
        ..Default::default()
    }
}
