#![no_std]

pub mod types;
pub mod store;
pub mod registry;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

pub use types::{PoolKey, PoolRecord};
pub use store::PoolStore;
pub use registry::{
    burn_shares, get_or_create_pool, issue_shares, pool_reserves, read_pool, share_balance,
    value_of_shares,
};
