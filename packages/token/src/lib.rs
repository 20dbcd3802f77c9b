//! Balance and allowance ledger shared by the workspace's token contracts.
//!
//! The wrapped-native asset and the legacy pair's LP share both implement
//! `soroban_sdk::token::TokenInterface` on top of these helpers, so the
//! storage layout and the emitted events match the Stellar Asset Contract.

#![no_std]

mod events;
mod storage;

pub use events::{emit_approve, emit_burn, emit_mint, emit_transfer};
pub use storage::{
    read_allowance, read_balance, read_total_supply, spend_allowance, write_allowance,
    AllowanceValue, TokenDataKey,
};

use soroban_sdk::{Address, Env};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenError {
    /// Amount is negative
    NegativeAmount,
    /// Balance lower than the amount moved
    InsufficientBalance,
    /// Allowance lower than the amount spent
    InsufficientAllowance,
    /// Non-zero allowance with an expiration already in the past
    InvalidExpiration,
}

/// Reject negative amounts
#[inline]
pub fn check_nonnegative_amount(amount: i128) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::NegativeAmount);
    }
    Ok(())
}

/// Move `amount` from `from` to `to` and emit a transfer event
pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), TokenError> {
    check_nonnegative_amount(amount)?;
    spend_balance(env, from, amount)?;
    receive_balance(env, to, amount);
    emit_transfer(env, from, to, amount);
    Ok(())
}

/// Move `amount` on behalf of `from`, consuming `spender`'s allowance
pub fn transfer_from(
    env: &Env,
    spender: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), TokenError> {
    check_nonnegative_amount(amount)?;
    spend_allowance(env, from, spender, amount)?;
    spend_balance(env, from, amount)?;
    receive_balance(env, to, amount);
    emit_transfer(env, from, to, amount);
    Ok(())
}

/// Set `spender`'s allowance over `from`'s balance
pub fn approve(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), TokenError> {
    check_nonnegative_amount(amount)?;
    write_allowance(env, from, spender, amount, expiration_ledger)?;
    emit_approve(env, from, spender, amount, expiration_ledger);
    Ok(())
}

/// Create `amount` new units for `to`
pub fn mint(env: &Env, to: &Address, amount: i128) -> Result<(), TokenError> {
    check_nonnegative_amount(amount)?;
    receive_balance(env, to, amount);
    storage::add_total_supply(env, amount);
    emit_mint(env, to, amount);
    Ok(())
}

/// Destroy `amount` units held by `from`
pub fn burn(env: &Env, from: &Address, amount: i128) -> Result<(), TokenError> {
    check_nonnegative_amount(amount)?;
    spend_balance(env, from, amount)?;
    storage::add_total_supply(env, -amount);
    emit_burn(env, from, amount);
    Ok(())
}

/// Destroy `amount` units held by `from`, consuming `spender`'s allowance
pub fn burn_from(env: &Env, spender: &Address, from: &Address, amount: i128) -> Result<(), TokenError> {
    check_nonnegative_amount(amount)?;
    spend_allowance(env, from, spender, amount)?;
    burn(env, from, amount)
}

/// Supply that exists without any holder (e.g. permanently locked units)
pub fn lock_supply(env: &Env, amount: i128) -> Result<(), TokenError> {
    check_nonnegative_amount(amount)?;
    storage::add_total_supply(env, amount);
    Ok(())
}

fn receive_balance(env: &Env, to: &Address, amount: i128) {
    let balance = read_balance(env, to);
    storage::write_balance(env, to, balance + amount);
}

fn spend_balance(env: &Env, from: &Address, amount: i128) -> Result<(), TokenError> {
    let balance = read_balance(env, from);
    if balance < amount {
        return Err(TokenError::InsufficientBalance);
    }
    storage::write_balance(env, from, balance - amount);
    Ok(())
}
