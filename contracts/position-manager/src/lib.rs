#![no_std]

//! # BelugaSwap Position Manager
//!
//! Holds core liquidity on behalf of position owners. Every position is a
//! numbered record (ids start at 1) over one tick range of one pool; the
//! core sees the manager as the owner of all of them.
//!
//! ## Functions:
//! - Write: initialize, create_and_init_pool_if_needed, mint,
//!   decrease_liquidity
//! - Read: core, positions

use soroban_sdk::{contract, contractimpl, log, token, Address, BytesN, Env};

pub use belugaswap_interfaces::PositionManagerError;
use belugaswap_interfaces::{
    create_and_init_pool_if_needed as init_pool, CoreClient, MintParams, MintResult, Position,
    APPROVAL_LEDGERS,
};
use belugaswap_locator::sort_tokens;
use belugaswap_math::{get_amounts_for_liquidity, get_liquidity_for_amounts, get_sqrt_ratio_at_tick, to_i128};

mod events;
mod storage;
mod types;

use events::*;
use storage::*;
pub use types::*;

#[contract]
pub struct BelugaPositionManager;

#[contractimpl]
impl BelugaPositionManager {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    pub fn initialize(env: Env, core: Address, admin: Address) -> Result<(), PositionManagerError> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(PositionManagerError::AlreadyInitialized);
        }

        write_config(&env, &ManagerConfig {
            core: core.clone(),
            admin: admin.clone(),
        });
        set_initialized(&env);

        emit_initialized(&env, &core, &admin);

        Ok(())
    }

    pub fn core(env: Env) -> Result<Address, PositionManagerError> {
        Ok(read_config(&env).ok_or(PositionManagerError::NotInitialized)?.core)
    }

    // ========================================================
    // POOLS
    // ========================================================

    /// Create and/or initialize a pool so positions can be opened in it
    pub fn create_and_init_pool_if_needed(
        env: Env,
        token_a: Address,
        token_b: Address,
        fee: u32,
        sqrt_price_x64: u128,
    ) -> Result<BytesN<32>, PositionManagerError> {
        let config = read_config(&env).ok_or(PositionManagerError::NotInitialized)?;
        Ok(init_pool(&env, &config.core, &token_a, &token_b, fee, sqrt_price_x64))
    }

    // ========================================================
    // LIQUIDITY
    // ========================================================

    /// Open a new position for `params.recipient` funded by `payer`.
    ///
    /// Liquidity is the most the desired amounts buy at the current price.
    /// The amounts it needs are pulled from `payer` through its allowance
    /// to this contract and approved to the core for exactly that much.
    pub fn mint(env: Env, payer: Address, params: MintParams) -> Result<MintResult, PositionManagerError> {
        payer.require_auth();

        let config = read_config(&env).ok_or(PositionManagerError::NotInitialized)?;

        if env.ledger().timestamp() > params.deadline {
            return Err(PositionManagerError::Expired);
        }
        if params.amount0_desired < 0 || params.amount1_desired < 0 {
            return Err(PositionManagerError::InvalidAmount);
        }

        let (token0, token1) = sort_tokens(&env, &params.token0, &params.token1)
            .map_err(|_| PositionManagerError::InvalidTokenOrder)?;
        if token0 != params.token0 {
            return Err(PositionManagerError::InvalidTokenOrder);
        }

        let core = CoreClient::new(&env, &config.core);
        let pool_id = core
            .get_pool(&token0, &token1, &params.fee)
            .ok_or(PositionManagerError::PoolNotFound)?;
        let slot0 = core.slot0(&pool_id);
        if !slot0.is_initialized() {
            return Err(PositionManagerError::PoolNotInitialized);
        }

        let sqrt_lower = get_sqrt_ratio_at_tick(&env, params.tick_lower);
        let sqrt_upper = get_sqrt_ratio_at_tick(&env, params.tick_upper);

        let liquidity = get_liquidity_for_amounts(
            &env,
            slot0.sqrt_price_x64,
            sqrt_lower,
            sqrt_upper,
            params.amount0_desired as u128,
            params.amount1_desired as u128,
        );
        if liquidity == 0 {
            return Err(PositionManagerError::ZeroLiquidity);
        }

        let (amount0, amount1) =
            get_amounts_for_liquidity(&env, slot0.sqrt_price_x64, sqrt_lower, sqrt_upper, liquidity, true);
        let (amount0, amount1) = (to_i128(amount0), to_i128(amount1));

        if amount0 < params.amount0_min || amount1 < params.amount1_min {
            return Err(PositionManagerError::PriceSlippageCheck);
        }

        let this = env.current_contract_address();
        collect(&env, &token0, &payer, &config.core, amount0);
        collect(&env, &token1, &payer, &config.core, amount1);

        let (paid0, paid1) = core.mint(
            &this,
            &pool_id,
            &this,
            &params.tick_lower,
            &params.tick_upper,
            &liquidity,
        );
        log!(&env, "position minted", liquidity, paid0, paid1);

        let token_id = next_token_id(&env);
        write_position(&env, token_id, &Position {
            owner: params.recipient,
            pool_id,
            token0,
            token1,
            fee: params.fee,
            tick_lower: params.tick_lower,
            tick_upper: params.tick_upper,
            liquidity,
        });

        emit_increase_liquidity(&env, token_id, liquidity, paid0, paid1);

        Ok(MintResult {
            token_id,
            liquidity,
            amount0: paid0,
            amount1: paid1,
        })
    }

    /// Withdraw `liquidity` from a position and pay the tokens to its owner
    pub fn decrease_liquidity(
        env: Env,
        owner: Address,
        token_id: u32,
        liquidity: u128,
        amount0_min: i128,
        amount1_min: i128,
        deadline: u64,
    ) -> Result<(i128, i128), PositionManagerError> {
        owner.require_auth();

        let config = read_config(&env).ok_or(PositionManagerError::NotInitialized)?;

        if env.ledger().timestamp() > deadline {
            return Err(PositionManagerError::Expired);
        }

        let mut position = read_position(&env, token_id).ok_or(PositionManagerError::PositionNotFound)?;
        if position.owner != owner {
            return Err(PositionManagerError::NotOwner);
        }
        if liquidity == 0 {
            return Err(PositionManagerError::ZeroLiquidity);
        }
        if liquidity > position.liquidity {
            return Err(PositionManagerError::InsufficientLiquidity);
        }

        let (amount0, amount1) = CoreClient::new(&env, &config.core).burn(
            &env.current_contract_address(),
            &position.pool_id,
            &position.tick_lower,
            &position.tick_upper,
            &liquidity,
            &owner,
        );

        if amount0 < amount0_min || amount1 < amount1_min {
            return Err(PositionManagerError::PriceSlippageCheck);
        }

        position.liquidity -= liquidity;
        write_position(&env, token_id, &position);

        emit_decrease_liquidity(&env, token_id, liquidity, amount0, amount1);

        Ok((amount0, amount1))
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    pub fn positions(env: Env, token_id: u32) -> Result<Position, PositionManagerError> {
        read_position(&env, token_id).ok_or(PositionManagerError::PositionNotFound)
    }
}

// ============================================================
// INTERNAL HELPERS
// ============================================================

/// Pull `amount` from `payer` and approve it to the core
fn collect(env: &Env, token: &Address, payer: &Address, core: &Address, amount: i128) {
    if amount == 0 {
        return;
    }
    let this = env.current_contract_address();
    let client = token::TokenClient::new(env, token);
    client.transfer_from(&this, payer, &this, &amount);
    client.approve(&this, core, &amount, &(env.ledger().sequence() + APPROVAL_LEDGERS));
}
