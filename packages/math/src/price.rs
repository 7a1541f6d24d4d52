// SPDX-License-Identifier: MIT
// Tick Price Calculations
//
// price(tick) = 1.0001^tick, the price of one unit of token1 in token0.

use core::cmp::Ordering;

use soroban_sdk::{Env, U256};
use crate::constants::{MAX_TICK, MIN_TICK, POW_TABLE_X64, Q64};
use crate::error::MathError;
use crate::q64::{mul_div, mul_div_ceil, mul_div_u256, mul_q64, ONE_X64};

/// 1.0001^abs_tick in Q64.64, rounded down.
///
/// Multiplies the precomputed 1.0001^(2^k) factors for every set bit,
/// lowest bit first, so the result is reproducible bit for bit.
pub fn ratio_x64_at(abs_tick: u64) -> Result<u128, MathError> {
    if abs_tick > MAX_TICK.unsigned_abs() {
        return Err(MathError::TickOutOfRange);
    }

    let mut ratio = ONE_X64;
    for (bit, factor) in POW_TABLE_X64.iter().enumerate() {
        if abs_tick & (1u64 << bit) != 0 {
            ratio = mul_q64(ratio, *factor);
        }
    }
    Ok(ratio)
}

/// Exact price at a tick.
///
/// Stores the tick together with 1.0001^|tick| in Q64.64. Negative ticks
/// divide by the ratio instead of multiplying, so prices far below 1 keep
/// the same relative precision as prices far above 1.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Price {
    tick: i64,
    ratio_x64: u128,
}

impl Price {
    pub fn at_tick(tick: i64) -> Result<Self, MathError> {
        if !(MIN_TICK..=MAX_TICK).contains(&tick) {
            return Err(MathError::TickOutOfRange);
        }
        Ok(Self {
            tick,
            ratio_x64: ratio_x64_at(tick.unsigned_abs())?,
        })
    }

    #[inline]
    pub fn tick(&self) -> i64 {
        self.tick
    }

    /// 1.0001^|tick| in Q64.64
    #[inline]
    pub fn ratio_x64(&self) -> u128 {
        self.ratio_x64
    }

    /// Price of token0 in token1 at the same tick
    pub fn inverse(&self) -> Self {
        Self {
            tick: -self.tick,
            ratio_x64: self.ratio_x64,
        }
    }

    /// (numerator, denominator) with price = numerator / denominator
    #[inline]
    fn fraction(&self) -> (u128, u128) {
        if self.tick >= 0 {
            (self.ratio_x64, Q64)
        } else {
            (Q64, self.ratio_x64)
        }
    }

    /// floor(amount * price)
    pub fn mul_floor(&self, env: &Env, amount: u128) -> Result<u128, MathError> {
        let (num, den) = self.fraction();
        mul_div(env, amount, num, den)
    }

    /// ceil(amount * price)
    pub fn mul_ceil(&self, env: &Env, amount: u128) -> Result<u128, MathError> {
        let (num, den) = self.fraction();
        mul_div_ceil(env, amount, num, den)
    }

    /// floor(amount / price)
    pub fn div_floor(&self, env: &Env, amount: u128) -> Result<u128, MathError> {
        let (num, den) = self.fraction();
        mul_div(env, amount, den, num)
    }

    /// ceil(amount / price)
    pub fn div_ceil(&self, env: &Env, amount: u128) -> Result<u128, MathError> {
        let (num, den) = self.fraction();
        mul_div_ceil(env, amount, den, num)
    }

    /// floor(amount * price * 2^64)
    pub fn mul_x64(&self, env: &Env, amount: u128) -> U256 {
        let amount_256 = U256::from_u128(env, amount);
        let ratio_256 = U256::from_u128(env, self.ratio_x64);
        if self.tick >= 0 {
            amount_256.mul(&ratio_256)
        } else {
            amount_256.shl(128).div(&ratio_256)
        }
    }

    /// floor(value * price) for a 256-bit value
    pub fn scale(&self, env: &Env, value: &U256) -> Result<U256, MathError> {
        let (num, den) = self.fraction();
        mul_div_u256(
            env,
            value,
            &U256::from_u128(env, num),
            &U256::from_u128(env, den),
        )
    }

    /// Q64.64 representation of the price, rounded down.
    /// Collapses to 0 or 1 near MIN_TICK; use only for reporting.
    pub fn to_x64(&self) -> u128 {
        if self.tick >= 0 {
            return self.ratio_x64;
        }
        // floor(2^128 / ratio) with 2^128 = u128::MAX + 1
        let quotient = u128::MAX / self.ratio_x64;
        if u128::MAX % self.ratio_x64 == self.ratio_x64 - 1 {
            quotient + 1
        } else {
            quotient
        }
    }
}

impl Ord for Price {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.tick < 0, other.tick < 0) {
            (false, false) => self.ratio_x64.cmp(&other.ratio_x64),
            (true, true) => other.ratio_x64.cmp(&self.ratio_x64),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Price at `tick`; fails outside the supported range
pub fn price_at_tick(tick: i64) -> Result<Price, MathError> {
    Price::at_tick(tick)
}

/// Q64.64 price at `tick`, for display and events
pub fn price_x64_at_tick(tick: i64) -> Result<u128, MathError> {
    Ok(Price::at_tick(tick)?.to_x64())
}
