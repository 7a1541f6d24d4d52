#![allow(dead_code)]

use soroban_sdk::{
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    vec, Address, Env, Vec,
};
use tickdex_dex::{DepositOptions, DepositRequest, DepositResult, TickDex, TickDexClient};

/// One whole token in smallest units
pub const ONE: i128 = 1_000_000;

/// Register and initialize the dex with default fee tiers. Returns the
/// client, its admin and a pair of tokens sorted so the first is token0.
pub fn setup_dex(env: &Env) -> (TickDexClient<'_>, Address, Address, Address) {
    env.mock_all_auths();

    let admin = Address::generate(env);
    let dex_id = env.register(TickDex, ());
    let client = TickDexClient::new(env, &dex_id);
    client.initialize(&admin, &None);

    let token_a = create_token(env, &admin);
    let token_b = create_token(env, &admin);
    let (token0, token1) = if token_a < token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    };

    (client, admin, token0, token1)
}

/// Create a test token
pub fn create_token(env: &Env, admin: &Address) -> Address {
    let token_id = env.register_stellar_asset_contract_v2(admin.clone());
    token_id.address()
}

/// Mint tokens to an address
pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    let client = StellarAssetClient::new(env, token);
    client.mint(to, &amount);
}

pub fn balance(env: &Env, token: &Address, who: &Address) -> i128 {
    TokenClient::new(env, token).balance(who)
}

/// Generate a user holding `amount0` of token0 and `amount1` of token1
pub fn funded_user(
    env: &Env,
    token0: &Address,
    token1: &Address,
    amount0: i128,
    amount1: i128,
) -> Address {
    let user = Address::generate(env);
    if amount0 > 0 {
        mint_tokens(env, token0, &user, amount0);
    }
    if amount1 > 0 {
        mint_tokens(env, token1, &user, amount1);
    }
    user
}

pub fn options(fail_tx_on_bel: bool, swap_on_deposit: bool) -> DepositOptions {
    DepositOptions {
        fail_tx_on_bel,
        swap_on_deposit,
        disable_autoswap: false,
    }
}

pub fn request(amount_a: i128, amount_b: i128, tick_index: i64, fee: u64) -> DepositRequest {
    request_with(amount_a, amount_b, tick_index, fee, DepositOptions::default())
}

pub fn request_with(
    amount_a: i128,
    amount_b: i128,
    tick_index: i64,
    fee: u64,
    options: DepositOptions,
) -> DepositRequest {
    DepositRequest {
        amount_a,
        amount_b,
        tick_index,
        fee,
        options,
    }
}

/// Single-request deposit in canonical token order
pub fn deposit(
    env: &Env,
    dex: &TickDexClient,
    user: &Address,
    token0: &Address,
    token1: &Address,
    amount0: i128,
    amount1: i128,
    tick_index: i64,
    fee: u64,
) -> DepositResult {
    let requests: Vec<DepositRequest> = vec![env, request(amount0, amount1, tick_index, fee)];
    dex.deposit(user, token0, token1, &requests)
}

/// Token1 liquidity of `amount` at the upper tick of each center (fee 1),
/// deposited by a fresh user
pub fn token1_ladder(
    env: &Env,
    dex: &TickDexClient,
    token0: &Address,
    token1: &Address,
    centers: &[i64],
    amount: i128,
) -> Address {
    let maker = funded_user(env, token0, token1, 0, amount * centers.len() as i128);
    for center in centers {
        deposit(env, dex, &maker, token0, token1, 0, amount, *center, 1);
    }
    maker
}
