#![no_std]

pub mod types;
pub mod error;
pub mod store;
pub mod ledger;
pub mod bitmap;
pub mod cursor;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

pub use types::{
    BitmapWordKey, CurrentTicks, PairId, Side, TickFeesKey, TickFill, TickKey, TickLocation,
    TickReserves,
};
pub use error::EngineError;
pub use store::TickStore;
pub use ledger::{
    add_liquidity, add_reserves, get_liquidity, get_reserves, get_tick, liquidity_for_reserves,
    remove_liquidity, remove_reserves, reserves_for_liquidity,
};
pub use cursor::{
    curr_tick_0_to_1, curr_tick_1_to_0, cursor_for, is_behind_enemy_lines, next_location,
};
