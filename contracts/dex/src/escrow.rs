// Token escrow
//
// Moves tokens between accounts and the contract through the token
// interface. The balance is checked up front so a short account surfaces
// as a typed error rather than a host trap.

use soroban_sdk::{token, Address, Env};

use crate::error::DexError;

/// Pull `amount` of `token` from `from` into the contract
pub fn collect(env: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), DexError> {
    if amount <= 0 {
        return Ok(());
    }
    let client = token::Client::new(env, token);
    if client.balance(from) < amount {
        return Err(DexError::InsufficientFunds);
    }
    client.transfer(from, &env.current_contract_address(), &amount);
    Ok(())
}

/// Pay `amount` of `token` out of the contract to `to`
pub fn pay(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), DexError> {
    if amount <= 0 {
        return Ok(());
    }
    let client = token::Client::new(env, token);
    let contract = env.current_contract_address();
    if client.balance(&contract) < amount {
        return Err(DexError::InvariantViolation);
    }
    client.transfer(&contract, to, &amount);
    Ok(())
}

/// Settle a net amount: positive is owed by `account`, negative is owed to it
pub fn settle(env: &Env, token: &Address, account: &Address, net: i128) -> Result<(), DexError> {
    if net >= 0 {
        collect(env, token, account, net)
    } else {
        pay(env, token, account, net.checked_neg().ok_or(DexError::Overflow)?)
    }
}
