mod common;

use common::*;
use soroban_sdk::{testutils::Address as _, vec, Address, Env, Vec};
use tickdex_dex::{DepositOptions, DepositRequest, DexError, Side};

#[test]
fn test_symmetric_pool_creation() {
    let env = Env::default();
    let (dex, _, token0, token1) = setup_dex(&env);
    let alice = funded_user(&env, &token0, &token1, 10, 10);

    let result = deposit(&env, &dex, &alice, &token0, &token1, 10, 10, 0, 5);
    assert_eq!(result.reserve0_deposited, vec![&env, 10i128]);
    assert_eq!(result.reserve1_deposited, vec![&env, 10i128]);
    assert_eq!(result.shares_issued, vec![&env, 20i128]);

    let lower = dex.get_tick(&token0, &token1, &-5, &5, &Side::Token0);
    let upper = dex.get_tick(&token0, &token1, &5, &5, &Side::Token1);
    assert_eq!(lower.reserves, 10);
    assert_eq!(upper.reserves, 10);

    assert_eq!(dex.get_curr_tick_1_to_0(&token0, &token1), Some(-5));
    assert_eq!(dex.get_curr_tick_0_to_1(&token0, &token1), Some(5));
    assert_eq!(dex.get_shares(&alice, &token0, &token1, &0, &5), 20);
}

#[test]
fn test_in_spread_deposit_shifts_cursor() {
    let env = Env::default();
    let (dex, _, token0, token1) = setup_dex(&env);
    let alice = funded_user(&env, &token0, &token1, 20, 10);

    deposit(&env, &dex, &alice, &token0, &token1, 10, 10, 0, 5);
    let result = deposit(&env, &dex, &alice, &token0, &token1, 10, 0, 0, 1);
    assert_eq!(result.shares_issued, vec![&env, 10i128]);

    assert_eq!(balance(&env, &token0, &alice), 0);
    assert_eq!(balance(&env, &token1, &alice), 0);
    assert_eq!(balance(&env, &token0, &dex.address), 20);
    assert_eq!(balance(&env, &token1, &dex.address), 10);

    assert_eq!(dex.get_curr_tick_1_to_0(&token0, &token1), Some(-1));
    assert_eq!(dex.get_curr_tick_0_to_1(&token0, &token1), Some(5));
}

#[test]
fn test_cursor_reports_raw_tick_index() {
    let env = Env::default();
    let (dex, _, token0, token1) = setup_dex(&env);
    let alice = funded_user(&env, &token0, &token1, 10, 10);

    deposit(&env, &dex, &alice, &token0, &token1, 10, 10, 3, 1);

    assert_eq!(dex.get_curr_tick_0_to_1(&token0, &token1), Some(4));
    assert_eq!(dex.get_curr_tick_1_to_0(&token0, &token1), Some(2));
}

#[test]
fn test_second_deposit_at_pool_ratio() {
    let env = Env::default();
    let (dex, _, token0, token1) = setup_dex(&env);
    let alice = funded_user(&env, &token0, &token1, 10 * ONE, 10 * ONE);
    let bob = funded_user(&env, &token0, &token1, 5 * ONE, 5 * ONE);

    deposit(&env, &dex, &alice, &token0, &token1, 10 * ONE, 10 * ONE, 0, 1);
    let result = deposit(&env, &dex, &bob, &token0, &token1, 5 * ONE, 5 * ONE, 0, 1);
    assert_eq!(result.shares_issued, vec![&env, 10 * ONE]);

    let pool = dex.get_pool(&token0, &token1, &0, &1).unwrap();
    assert_eq!(pool.reserve0, 15 * ONE);
    assert_eq!(pool.reserve1, 15 * ONE);
    assert_eq!(pool.total_shares, 30 * ONE);
    assert_eq!(
        dex.get_shares(&alice, &token0, &token1, &0, &1)
            + dex.get_shares(&bob, &token0, &token1, &0, &1),
        pool.total_shares
    );
}

#[test]
fn test_reversed_token_order() {
    let env = Env::default();
    let (dex, _, token0, token1) = setup_dex(&env);
    let alice = funded_user(&env, &token0, &token1, 0, 10 * ONE);

    // (token1, token0) order: the center is negated and amounts swap
    let requests: Vec<DepositRequest> = vec![&env, request(10 * ONE, 0, -3, 1)];
    let result = dex.deposit(&alice, &token1, &token0, &requests);
    // reported in the caller's (token1, token0) order
    assert_eq!(result.reserve0_deposited, vec![&env, 10 * ONE]);
    assert_eq!(result.reserve1_deposited, vec![&env, 0i128]);

    let pool = dex.get_pool(&token0, &token1, &3, &1).unwrap();
    assert_eq!(pool.center_tick, 3);
    assert_eq!(pool.token0, token0);
    assert_eq!(pool.reserve1, 10 * ONE);
    assert_eq!(dex.get_pool(&token1, &token0, &-3, &1), Some(pool));
    assert_eq!(dex.get_curr_tick_0_to_1(&token1, &token0), Some(4));
    assert_eq!(balance(&env, &token1, &alice), 0);
}

#[test]
fn test_batch_deposit() {
    let env = Env::default();
    let (dex, _, token0, token1) = setup_dex(&env);
    let alice = funded_user(&env, &token0, &token1, 30 * ONE, 30 * ONE);

    let requests = vec![
        &env,
        request(10 * ONE, 10 * ONE, 0, 1),
        request(10 * ONE, 0, -10, 2),
        request(0, 10 * ONE, 10, 2),
    ];
    let result = dex.deposit(&alice, &token0, &token1, &requests);
    assert_eq!(result.shares_issued.len(), 3);
    assert_eq!(result.reserve0_deposited, vec![&env, 10 * ONE, 10 * ONE, 0]);
    assert_eq!(result.reserve1_deposited, vec![&env, 10 * ONE, 0, 10 * ONE]);

    assert_eq!(balance(&env, &token0, &alice), 10 * ONE);
    assert_eq!(balance(&env, &token1, &alice), 10 * ONE);
    assert_eq!(dex.get_curr_tick_1_to_0(&token0, &token1), Some(-1));
    assert_eq!(dex.get_curr_tick_0_to_1(&token0, &token1), Some(1));
}

#[test]
fn test_pool_ids_are_sequential() {
    let env = Env::default();
    let (dex, _, token0, token1) = setup_dex(&env);
    let alice = funded_user(&env, &token0, &token1, 2 * ONE, 0);

    deposit(&env, &dex, &alice, &token0, &token1, ONE, 0, 0, 1);
    deposit(&env, &dex, &alice, &token0, &token1, ONE, 0, 0, 2);

    let first = dex.get_pool(&token0, &token1, &0, &1).unwrap();
    let second = dex.get_pool(&token0, &token1, &0, &2).unwrap();
    assert_eq!(second.id, first.id + 1);
    assert_eq!(second.lower_tick, -2);
    assert_eq!(second.upper_tick, 2);
}

#[test]
fn test_validation_errors() {
    let env = Env::default();
    let (dex, _, token0, token1) = setup_dex(&env);
    let alice = funded_user(&env, &token0, &token1, ONE, ONE);

    let unsupported = dex.try_deposit(&alice, &token0, &token1, &vec![&env, request(ONE, ONE, 0, 7)]);
    assert_eq!(unsupported, Err(Ok(DexError::UnsupportedFeeTier)));

    let out_of_range =
        dex.try_deposit(&alice, &token0, &token1, &vec![&env, request(ONE, ONE, 440_000, 1)]);
    assert_eq!(out_of_range, Err(Ok(DexError::TickOutOfRange)));

    let negative = dex.try_deposit(&alice, &token0, &token1, &vec![&env, request(-1, ONE, 0, 1)]);
    assert_eq!(negative, Err(Ok(DexError::InvalidAmount)));

    let zero = dex.try_deposit(&alice, &token0, &token1, &vec![&env, request(0, 0, 0, 1)]);
    assert_eq!(zero, Err(Ok(DexError::ZeroDeposit)));

    let empty: Vec<DepositRequest> = Vec::new(&env);
    assert_eq!(
        dex.try_deposit(&alice, &token0, &token1, &empty),
        Err(Ok(DexError::EmptyRequest))
    );

    let same_token = dex.try_deposit(&alice, &token0, &token0, &vec![&env, request(ONE, ONE, 0, 1)]);
    assert_eq!(same_token, Err(Ok(DexError::InvalidTokenPair)));
}

#[test]
fn test_invalid_request_rejects_whole_batch() {
    let env = Env::default();
    let (dex, _, token0, token1) = setup_dex(&env);
    let alice = funded_user(&env, &token0, &token1, ONE, ONE);

    let requests = vec![&env, request(ONE, ONE, 0, 1), request(ONE, 0, 0, 7)];
    let result = dex.try_deposit(&alice, &token0, &token1, &requests);
    assert_eq!(result, Err(Ok(DexError::UnsupportedFeeTier)));

    assert!(dex.get_pool(&token0, &token1, &0, &1).is_none());
    assert_eq!(balance(&env, &token0, &alice), ONE);
}

#[test]
fn test_insufficient_funds() {
    let env = Env::default();
    let (dex, _, token0, token1) = setup_dex(&env);
    let alice = funded_user(&env, &token0, &token1, 5, 0);

    let result = dex.try_deposit(&alice, &token0, &token1, &vec![&env, request(10, 0, 0, 1)]);
    assert_eq!(result, Err(Ok(DexError::InsufficientFunds)));
    assert!(dex.get_pool(&token0, &token1, &0, &1).is_none());
    assert_eq!(dex.get_curr_tick_1_to_0(&token0, &token1), None);
}

#[test]
fn test_disable_autoswap_keeps_residual() {
    let env = Env::default();
    let (dex, _, token0, token1) = setup_dex(&env);
    let alice = funded_user(&env, &token0, &token1, 10 * ONE, 10 * ONE);
    let bob = funded_user(&env, &token0, &token1, 10 * ONE, 5 * ONE);

    deposit(&env, &dex, &alice, &token0, &token1, 10 * ONE, 10 * ONE, 0, 1);

    let options = DepositOptions {
        disable_autoswap: true,
        ..DepositOptions::default()
    };
    let requests = vec![&env, request_with(10 * ONE, 5 * ONE, 0, 1, options)];
    let result = dex.deposit(&bob, &token0, &token1, &requests);
    assert_eq!(result.reserve0_deposited, vec![&env, 5 * ONE]);
    assert_eq!(result.reserve1_deposited, vec![&env, 5 * ONE]);
    assert_eq!(result.shares_issued, vec![&env, 10 * ONE]);
    assert_eq!(balance(&env, &token0, &bob), 5 * ONE);
    assert_eq!(balance(&env, &token1, &bob), 0);
}

#[test]
fn test_deposit_into_existing_pool_from_new_user() {
    let env = Env::default();
    let (dex, _, token0, token1) = setup_dex(&env);
    let alice = funded_user(&env, &token0, &token1, ONE, ONE);
    let carol = Address::generate(&env);

    deposit(&env, &dex, &alice, &token0, &token1, ONE, ONE, 0, 1);
    assert_eq!(dex.get_shares(&carol, &token0, &token1, &0, &1), 0);
    assert_eq!(dex.get_shares(&alice, &token0, &token1, &0, &2), 0);
}

#[test]
fn test_deposit_worth_less_than_one_share() {
    let env = Env::default();
    let (dex, _, token0, token1) = setup_dex(&env);
    let alice = funded_user(&env, &token0, &token1, 0, 1);

    // one unit of token1 at 1.0001^-100000 is worth far below one share
    let requests = vec![&env, request(0, 1, -100_000, 0)];
    let rejected = dex.try_deposit(&alice, &token0, &token1, &requests);
    assert_eq!(rejected, Err(Ok(DexError::ZeroSharesIssued)));

    assert!(dex.get_pool(&token0, &token1, &-100_000, &0).is_none());
    assert_eq!(dex.get_curr_tick_0_to_1(&token0, &token1), None);
    assert_eq!(balance(&env, &token1, &alice), 1);
}

/// Instructions spent by a token1 deposit at a fresh tick once `existing`
/// token1 ticks are already liquid
fn fresh_tick_deposit_cost(existing: i64) -> u64 {
    let env = Env::default();
    let (dex, _, token0, token1) = setup_dex(&env);
    let centers: std::vec::Vec<i64> = (1..=existing).collect();
    token1_ladder(&env, &dex, &token0, &token1, &centers, ONE);
    let bob = funded_user(&env, &token0, &token1, 0, ONE);

    deposit(&env, &dex, &bob, &token0, &token1, 0, ONE, 5_000, 1);
    env.cost_estimate().budget().cpu_instruction_cost()
}

#[test]
fn test_deposit_cost_does_not_grow_with_liquid_ticks() {
    let few = fresh_tick_deposit_cost(4);
    let many = fresh_tick_deposit_cost(150);
    assert!(many < few * 3 / 2, "cost went from {few} to {many}");
}

#[test]
fn test_cursor_crosses_wide_gap_after_withdraw() {
    let env = Env::default();
    let (dex, _, token0, token1) = setup_dex(&env);
    let maker = token1_ladder(&env, &dex, &token0, &token1, &[1, 300_000], ONE);
    assert_eq!(dex.get_curr_tick_0_to_1(&token0, &token1), Some(2));

    let shares = dex.get_shares(&maker, &token0, &token1, &1, &1);
    dex.withdraw(&maker, &token0, &token1, &1, &1, &shares);
    assert_eq!(dex.get_curr_tick_0_to_1(&token0, &token1), Some(300_001));
}
