#![no_std]

//! # BelugaSwap Legacy Pair
//!
//! Constant-product pair whose share is itself a token. Deposits are sent
//! to the pair first and then accounted by `mint`; shares are sent back to
//! the pair and redeemed by `burn`. The first mint locks
//! `MINIMUM_LIQUIDITY` shares forever.

use soroban_sdk::{contract, contractimpl, token, Address, Env, String};

use belugaswap_locator::sort_tokens;
use belugaswap_math::q64::{mul_div, sqrt_u256, u256};
use belugaswap_token as ledger;

mod error;
mod events;
mod storage;

pub use error::PairError;
use events::*;
use storage::*;

/// Shares locked by the first mint
pub const MINIMUM_LIQUIDITY: i128 = 1000;

const DECIMALS: u32 = 7;

#[contract]
pub struct LegacyPair;

#[contractimpl]
impl LegacyPair {
    pub fn initialize(env: Env, token_a: Address, token_b: Address) -> Result<(), PairError> {
        if has_config(&env) {
            return Err(PairError::AlreadyInitialized);
        }
        let (token0, token1) = sort_tokens(&env, &token_a, &token_b).map_err(|_| PairError::IdenticalTokens)?;
        write_config(&env, &PairConfig { token0, token1 });
        write_reserves(&env, 0, 0);
        Ok(())
    }

    pub fn token0(env: Env) -> Result<Address, PairError> {
        Ok(read_config(&env).ok_or(PairError::NotInitialized)?.token0)
    }

    pub fn token1(env: Env) -> Result<Address, PairError> {
        Ok(read_config(&env).ok_or(PairError::NotInitialized)?.token1)
    }

    pub fn get_reserves(env: Env) -> (i128, i128) {
        read_reserves(&env)
    }

    pub fn total_supply(env: Env) -> i128 {
        ledger::read_total_supply(&env)
    }

    /// Issue shares to `to` for whatever was deposited since the last sync
    pub fn mint(env: Env, to: Address) -> Result<i128, PairError> {
        let config = read_config(&env).ok_or(PairError::NotInitialized)?;
        let (reserve0, reserve1) = read_reserves(&env);
        let (balance0, balance1) = balances(&env, &config);
        let amount0 = balance0 - reserve0;
        let amount1 = balance1 - reserve1;

        let total_supply = ledger::read_total_supply(&env);
        let liquidity = if total_supply == 0 {
            let root = sqrt_u256(&env, &u256(&env, amount0 as u128).mul(&u256(&env, amount1 as u128))) as i128;
            if root <= MINIMUM_LIQUIDITY {
                return Err(PairError::InsufficientLiquidityMinted);
            }
            ledger::lock_supply(&env, MINIMUM_LIQUIDITY)?;
            root - MINIMUM_LIQUIDITY
        } else {
            let by0 = mul_div(&env, amount0 as u128, total_supply as u128, reserve0 as u128);
            let by1 = mul_div(&env, amount1 as u128, total_supply as u128, reserve1 as u128);
            by0.min(by1) as i128
        };
        if liquidity <= 0 {
            return Err(PairError::InsufficientLiquidityMinted);
        }

        ledger::mint(&env, &to, liquidity)?;
        write_reserves(&env, balance0, balance1);

        emit_mint(&env, &to, amount0, amount1, liquidity);
        emit_sync(&env, balance0, balance1);

        Ok(liquidity)
    }

    /// Redeem every share the pair holds, paying the pro-rata reserves to `to`
    pub fn burn(env: Env, to: Address) -> Result<(i128, i128), PairError> {
        let config = read_config(&env).ok_or(PairError::NotInitialized)?;
        let this = env.current_contract_address();
        let (balance0, balance1) = balances(&env, &config);

        let liquidity = ledger::read_balance(&env, &this);
        let total_supply = ledger::read_total_supply(&env);
        if liquidity <= 0 || total_supply == 0 {
            return Err(PairError::InsufficientLiquidityBurned);
        }

        let amount0 = mul_div(&env, liquidity as u128, balance0 as u128, total_supply as u128) as i128;
        let amount1 = mul_div(&env, liquidity as u128, balance1 as u128, total_supply as u128) as i128;
        if amount0 == 0 || amount1 == 0 {
            return Err(PairError::InsufficientLiquidityBurned);
        }

        ledger::burn(&env, &this, liquidity)?;
        token::TokenClient::new(&env, &config.token0).transfer(&this, &to, &amount0);
        token::TokenClient::new(&env, &config.token1).transfer(&this, &to, &amount1);

        let (balance0, balance1) = balances(&env, &config);
        write_reserves(&env, balance0, balance1);

        emit_burn(&env, &to, amount0, amount1, liquidity);
        emit_sync(&env, balance0, balance1);

        Ok((amount0, amount1))
    }
}

// ============================================================
// SHARE TOKEN
// ============================================================

// Share token surface; `burn` above is redemption, not a token burn.
#[contractimpl]
impl LegacyPair {
    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        ledger::read_allowance(&env, &from, &spender).amount
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), PairError> {
        from.require_auth();
        Ok(ledger::approve(&env, &from, &spender, amount, expiration_ledger)?)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        ledger::read_balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), PairError> {
        from.require_auth();
        Ok(ledger::transfer(&env, &from, &to, amount)?)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), PairError> {
        spender.require_auth();
        Ok(ledger::transfer_from(&env, &spender, &from, &to, amount)?)
    }

    pub fn decimals(_env: Env) -> u32 {
        DECIMALS
    }

    pub fn name(env: Env) -> String {
        String::from_str(&env, "Beluga Legacy LP")
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, "BLP")
    }
}

fn balances(env: &Env, config: &PairConfig) -> (i128, i128) {
    let this = env.current_contract_address();
    (
        token::TokenClient::new(env, &config.token0).balance(&this),
        token::TokenClient::new(env, &config.token1).balance(&this),
    )
}
