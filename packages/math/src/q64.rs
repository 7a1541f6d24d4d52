// SPDX-License-Identifier: MIT
// Q64.64 Fixed-Point Arithmetic Operations

use soroban_sdk::{Env, U256};
use crate::constants::Q64;
use crate::error::MathError;

pub const ONE_X64: u128 = Q64;

/// Non-negative i128 to u128
#[inline]
pub fn i128_to_u128(x: i128) -> Result<u128, MathError> {
    u128::try_from(x).map_err(|_| MathError::Overflow)
}

#[inline]
pub fn u128_to_i128(x: u128) -> Result<i128, MathError> {
    i128::try_from(x).map_err(|_| MathError::Overflow)
}

/// Multiply two Q64.64 numbers, returning Q64.64 result (rounded down).
/// Uses decomposition to avoid overflow; the caller guarantees the result fits.
#[inline]
pub fn mul_q64(a: u128, b: u128) -> u128 {
    let a_hi = a >> 64;
    let a_lo = a & 0xFFFFFFFFFFFFFFFF;
    let b_hi = b >> 64;
    let b_lo = b & 0xFFFFFFFFFFFFFFFF;

    let term_hh = a_hi * b_hi;
    let term_hl = a_hi * b_lo;
    let term_lh = a_lo * b_hi;
    let term_ll = a_lo * b_lo;

    (term_hh << 64) + term_hl + term_lh + (term_ll >> 64)
}

/// (a * b) / denominator, rounded down, with a 256-bit intermediate
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> Result<u128, MathError> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    product
        .div(&U256::from_u128(env, denominator))
        .to_u128()
        .ok_or(MathError::Overflow)
}

/// (a * b) / denominator, rounded up
pub fn mul_div_ceil(env: &Env, a: u128, b: u128, denominator: u128) -> Result<u128, MathError> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }

    let den_256 = U256::from_u128(env, denominator);
    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let quotient = product
        .div(&den_256)
        .to_u128()
        .ok_or(MathError::Overflow)?;

    if product.rem_euclid(&den_256) == U256::from_u32(env, 0) {
        Ok(quotient)
    } else {
        quotient.checked_add(1).ok_or(MathError::Overflow)
    }
}

/// Divide with rounding up
#[inline]
pub fn div_round_up(numerator: u128, denominator: u128) -> Result<u128, MathError> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }
    let result = numerator / denominator;
    if numerator % denominator != 0 {
        result.checked_add(1).ok_or(MathError::Overflow)
    } else {
        Ok(result)
    }
}

// ============================================================
// 256-BIT HELPERS
// ============================================================

pub fn u256_max(env: &Env) -> U256 {
    U256::from_parts(env, u64::MAX, u64::MAX, u64::MAX, u64::MAX)
}

pub fn u256_to_u128(value: &U256) -> Result<u128, MathError> {
    value.to_u128().ok_or(MathError::Overflow)
}

/// floor(a * b / denominator) over 256-bit operands.
///
/// If `a * b` would not fit in 256 bits, `a` and `denominator` are shifted
/// right together until it does. The quotient is then approximate in the
/// low bits, which only happens for amounts far beyond any token supply.
pub fn mul_div_u256(env: &Env, a: &U256, b: &U256, denominator: &U256) -> Result<U256, MathError> {
    let zero = U256::from_u32(env, 0);
    if *denominator == zero {
        return Err(MathError::DivisionByZero);
    }
    if *a == zero || *b == zero {
        return Ok(zero);
    }

    let limit = u256_max(env).div(b);
    let mut a = a.clone();
    let mut denominator = denominator.clone();
    while a > limit {
        a = a.shr(32);
        denominator = denominator.shr(32);
        if denominator == zero {
            return Err(MathError::Overflow);
        }
    }

    Ok(a.mul(b).div(&denominator))
}
