#![no_std]

//! # Wrapped Native
//!
//! Token backed 1:1 by the native asset it holds. `deposit` pulls native
//! through the depositor's allowance to this contract and mints the same
//! amount; `withdraw` burns and pays native back.

use soroban_sdk::{
    contract, contractimpl, contracttype, panic_with_error,
    token::{self, TokenInterface},
    Address, Env, String,
};

use belugaswap_token as ledger;

mod error;
mod events;

pub use error::WrappedNativeError;
use events::*;

const DECIMALS: u32 = 7;
const INSTANCE_TTL: u32 = 6_307_200; // ~1 year

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    NativeAsset,
}

fn read_native(env: &Env) -> Address {
    match env.storage().instance().get(&DataKey::NativeAsset) {
        Some(native) => {
            env.storage().instance().extend_ttl(INSTANCE_TTL, INSTANCE_TTL);
            native
        }
        None => panic_with_error!(env, WrappedNativeError::NotInitialized),
    }
}

fn unwrap_or_panic<T>(env: &Env, result: Result<T, ledger::TokenError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic_with_error!(env, WrappedNativeError::from(err)),
    }
}

#[contract]
pub struct WrappedNative;

#[contractimpl]
impl WrappedNative {
    pub fn initialize(env: Env, native_asset: Address) -> Result<(), WrappedNativeError> {
        if env.storage().instance().has(&DataKey::NativeAsset) {
            return Err(WrappedNativeError::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::NativeAsset, &native_asset);
        env.storage().instance().extend_ttl(INSTANCE_TTL, INSTANCE_TTL);
        Ok(())
    }

    pub fn native_asset(env: Env) -> Address {
        read_native(&env)
    }

    /// Wrap `amount` of `from`'s native asset.
    /// `from` must have approved this contract on the native asset.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), WrappedNativeError> {
        from.require_auth();
        ledger::check_nonnegative_amount(amount)?;

        let this = env.current_contract_address();
        token::TokenClient::new(&env, &read_native(&env)).transfer_from(&this, &from, &this, &amount);
        ledger::mint(&env, &from, amount)?;

        emit_deposit(&env, &from, amount);
        Ok(())
    }

    /// Unwrap `amount` back to `from` as native asset
    pub fn withdraw(env: Env, from: Address, amount: i128) -> Result<(), WrappedNativeError> {
        from.require_auth();

        ledger::burn(&env, &from, amount)?;
        token::TokenClient::new(&env, &read_native(&env)).transfer(
            &env.current_contract_address(),
            &from,
            &amount,
        );

        emit_withdrawal(&env, &from, amount);
        Ok(())
    }

    pub fn total_supply(env: Env) -> i128 {
        ledger::read_total_supply(&env)
    }
}

#[contractimpl]
impl TokenInterface for WrappedNative {
    fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        ledger::read_allowance(&env, &from, &spender).amount
    }

    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();
        unwrap_or_panic(&env, ledger::approve(&env, &from, &spender, amount, expiration_ledger));
    }

    fn balance(env: Env, id: Address) -> i128 {
        ledger::read_balance(&env, &id)
    }

    fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        unwrap_or_panic(&env, ledger::transfer(&env, &from, &to, amount));
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        unwrap_or_panic(&env, ledger::transfer_from(&env, &spender, &from, &to, amount));
    }

    fn burn(env: Env, from: Address, amount: i128) {
        from.require_auth();
        unwrap_or_panic(&env, ledger::burn(&env, &from, amount));
    }

    fn burn_from(env: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();
        unwrap_or_panic(&env, ledger::burn_from(&env, &spender, &from, amount));
    }

    fn decimals(_env: Env) -> u32 {
        DECIMALS
    }

    fn name(env: Env) -> String {
        String::from_str(&env, "Wrapped Native")
    }

    fn symbol(env: Env) -> String {
        String::from_str(&env, "WNATIVE")
    }
}
