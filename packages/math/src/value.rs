// SPDX-License-Identifier: MIT
// Pool Value and Share Math
//
// All values are denominated in token0 and carried as Q64.64 in a U256.

use soroban_sdk::{Env, U256};
use crate::error::MathError;
use crate::price::Price;
use crate::q64::{mul_div, mul_div_u256, u256_to_u128};

/// amount0 + amount1 * price, in Q64.64 token0 units (rounded down)
pub fn value_as_token0_x64(env: &Env, amount0: u128, amount1: u128, price: &Price) -> U256 {
    U256::from_u128(env, amount0)
        .shl(64)
        .add(&price.mul_x64(env, amount1))
}

/// Largest part of (amount0, amount1) that matches the reserve ratio.
///
/// An empty pool accepts everything. A pool holding only one token accepts
/// only that token.
pub fn greatest_matching_ratio(
    env: &Env,
    reserve0: u128,
    reserve1: u128,
    amount0: u128,
    amount1: u128,
) -> Result<(u128, u128), MathError> {
    let mut max0 = amount0;
    let mut max1 = amount1;

    if reserve1 > 0 {
        max0 = max0.min(mul_div(env, amount1, reserve0, reserve1)?);
    }
    if reserve0 > 0 {
        max1 = max1.min(mul_div(env, max0, reserve1, reserve0)?);
    }

    Ok((max0, max1))
}

/// Shares minted for `value_in` against a pool worth `pool_value` with
/// `total_shares` outstanding. The first deposit mints one share per unit
/// of token0 value.
pub fn shares_minted(
    env: &Env,
    value_in_x64: &U256,
    pool_value_x64: &U256,
    total_shares: u128,
) -> Result<u128, MathError> {
    let zero = U256::from_u32(env, 0);
    if total_shares == 0 || *pool_value_x64 == zero {
        return u256_to_u128(&value_in_x64.shr(64));
    }

    let minted = mul_div_u256(
        env,
        value_in_x64,
        &U256::from_u128(env, total_shares),
        pool_value_x64,
    )?;
    u256_to_u128(&minted)
}

/// Value credited for an unmatched residual after its implied swap fee.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AutoswapValue {
    /// Residual value minus the fee; mints shares
    pub deposit_value_x64: U256,
    /// Fee retained by the pool; added to the pool value when pricing shares
    pub fee_x64: U256,
}

/// Price a residual (residual0, residual1) deposited into a pool whose
/// sides are worth (pool_value0, pool_value1).
///
/// The portion that would have to change sides to match the pool ratio is
/// charged the pool's fee: fee = swapped * (1 - 1.0001^-fee_tier).
pub fn autoswap_value(
    env: &Env,
    pool_value0_x64: &U256,
    pool_value1_x64: &U256,
    residual0: u128,
    residual1: u128,
    center: &Price,
    fee_tier: u64,
) -> Result<AutoswapValue, MathError> {
    let zero = U256::from_u32(env, 0);
    let residual_value = value_as_token0_x64(env, residual0, residual1, center);
    let pool_value = pool_value0_x64.add(pool_value1_x64);

    if pool_value == zero || residual_value == zero {
        return Ok(AutoswapValue {
            deposit_value_x64: residual_value,
            fee_x64: zero,
        });
    }

    // value that must cross sides: |x0 * V1 - x1 * V0| / (V0 + V1)
    let x0 = U256::from_u128(env, residual0).shl(64);
    let x1 = center.mul_x64(env, residual1);
    let surplus0 = mul_div_u256(env, &x0, pool_value1_x64, &pool_value)?;
    let surplus1 = mul_div_u256(env, &x1, pool_value0_x64, &pool_value)?;
    let swapped = if surplus0 >= surplus1 {
        surplus0.sub(&surplus1)
    } else {
        surplus1.sub(&surplus0)
    };

    let fee_tier = i64::try_from(fee_tier).map_err(|_| MathError::TickOutOfRange)?;
    let discount = Price::at_tick(-fee_tier)?;
    let fee = swapped.sub(&discount.scale(env, &swapped)?);

    Ok(AutoswapValue {
        deposit_value_x64: residual_value.sub(&fee),
        fee_x64: fee,
    })
}
