// TickDex Math Package

#![no_std]

pub mod constants;
pub mod error;
pub mod q64;
pub mod price;
pub mod value;

pub use constants::*;
pub use error::MathError;

pub use q64::{
    mul_q64,
    mul_div,
    mul_div_ceil,
    mul_div_u256,
    div_round_up,
    i128_to_u128,
    u128_to_i128,
    u256_to_u128,
    ONE_X64,
};

pub use price::{price_at_tick, price_x64_at_tick, ratio_x64_at, Price};

pub use value::{
    autoswap_value,
    greatest_matching_ratio,
    shares_minted,
    value_as_token0_x64,
    AutoswapValue,
};
