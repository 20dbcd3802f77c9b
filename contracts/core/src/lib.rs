#![no_std]

//! # BelugaSwap Core
//!
//! Singleton concentrated-liquidity core: factory and every pool live in
//! this one contract and are addressed by pool id, the sha256 of
//! `(core, token0, token1, fee)`.
//!
//! Tokens move by allowance. Callers approve the core, and `swap` / `mint`
//! pull exactly what they owe with `transfer_from`; outputs are paid
//! directly to the recipient.
//!
//! ## Functions:
//! - Admin: initialize, enable_fee_tier
//! - Pools: create_pool, initialize_pool, swap, mint, burn
//! - Read: get_pool, fee_tier_spacing, slot0, pool_key, pool_state,
//!   liquidity, reserves, tick, position, quote_swap

use soroban_sdk::{contract, contractimpl, log, token, Address, BytesN, Env};

use belugaswap_interfaces::{PoolKey, Slot0, SwapDelta};
use belugaswap_locator::{pool_id_for_key, pool_key as sorted_pool_key};
use belugaswap_math::{
    constants::{FEE_DENOMINATOR, MAX_SQRT_RATIO, MIN_SQRT_RATIO},
    get_amount_0_delta_signed, get_amount_1_delta_signed, get_sqrt_ratio_at_tick,
    get_tick_at_sqrt_ratio,
};
use belugaswap_swap::{engine_swap, quote_swap as engine_quote_swap, SwapState};
use belugaswap_tick::{check_ticks, insert_tick, max_liquidity_per_tick, remove_tick, update_tick, TickInfo};

mod error;
mod events;
mod storage;
mod types;

pub use error::CoreError;
use events::*;
use storage::*;
pub use types::*;

// ============================================================
// CONSTANTS
// ============================================================

/// Fee tiers enabled at initialization: (fee in pips, tick spacing)
const DEFAULT_FEE_TIERS: [(u32, i32); 3] = [(500, 10), (3000, 60), (10000, 200)];

/// Tick spacing upper bound
const MAX_TICK_SPACING: i32 = 16384;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct BelugaCore;

#[contractimpl]
impl BelugaCore {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize the core and enable the default fee tiers
    pub fn initialize(env: Env, admin: Address) -> Result<(), CoreError> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(CoreError::AlreadyInitialized);
        }

        write_config(&env, &CoreConfig { admin: admin.clone() });
        for (fee, tick_spacing) in DEFAULT_FEE_TIERS {
            write_fee_tier(&env, fee, tick_spacing);
            emit_fee_tier_enabled(&env, fee, tick_spacing);
        }
        set_initialized(&env);

        emit_initialized(&env, &admin);

        Ok(())
    }

    /// Enable a new fee tier (admin only)
    pub fn enable_fee_tier(env: Env, fee: u32, tick_spacing: i32) -> Result<(), CoreError> {
        let config = read_config(&env).ok_or(CoreError::NotInitialized)?;
        config.admin.require_auth();

        if fee >= FEE_DENOMINATOR {
            return Err(CoreError::InvalidFee);
        }
        if tick_spacing <= 0 || tick_spacing >= MAX_TICK_SPACING {
            return Err(CoreError::InvalidTickSpacing);
        }
        if read_fee_tier(&env, fee).is_some() {
            return Err(CoreError::FeeTierExists);
        }

        write_fee_tier(&env, fee, tick_spacing);
        emit_fee_tier_enabled(&env, fee, tick_spacing);

        Ok(())
    }

    // ========================================================
    // POOL REGISTRY
    // ========================================================

    /// Create the pool for an unordered pair and fee tier.
    /// The pool has no price until `initialize_pool`.
    pub fn create_pool(env: Env, token_a: Address, token_b: Address, fee: u32) -> Result<BytesN<32>, CoreError> {
        if !is_initialized(&env) {
            return Err(CoreError::NotInitialized);
        }

        let tick_spacing = read_fee_tier(&env, fee).ok_or(CoreError::InvalidFeeTier)?;
        let key = sorted_pool_key(&env, &token_a, &token_b, fee).map_err(|_| CoreError::SameToken)?;
        let pool_id = pool_id_for_key(&env, &env.current_contract_address(), &key);

        if has_pool(&env, &pool_id) {
            return Err(CoreError::PoolAlreadyExists);
        }

        let pool = PoolState {
            token0: key.token0.clone(),
            token1: key.token1.clone(),
            fee,
            tick_spacing,
            max_liquidity_per_tick: max_liquidity_per_tick(tick_spacing),
            sqrt_price_x64: 0,
            tick: 0,
            liquidity: 0,
            reserve0: 0,
            reserve1: 0,
        };
        write_pool(&env, &pool_id, &pool);

        emit_pool_created(&env, &pool_id, &key.token0, &key.token1, fee, tick_spacing);

        Ok(pool_id)
    }

    /// Set the starting price of a pool
    pub fn initialize_pool(env: Env, pool_id: BytesN<32>, sqrt_price_x64: u128) -> Result<(), CoreError> {
        let mut pool = read_pool(&env, &pool_id).ok_or(CoreError::PoolNotFound)?;

        if pool.sqrt_price_x64 != 0 {
            return Err(CoreError::PoolAlreadyInitialized);
        }
        if !(MIN_SQRT_RATIO..MAX_SQRT_RATIO).contains(&sqrt_price_x64) {
            return Err(CoreError::InvalidSqrtPrice);
        }

        pool.sqrt_price_x64 = sqrt_price_x64;
        pool.tick = get_tick_at_sqrt_ratio(&env, sqrt_price_x64);
        write_pool(&env, &pool_id, &pool);

        emit_pool_initialized(&env, &pool_id, sqrt_price_x64, pool.tick);

        Ok(())
    }

    // ========================================================
    // SWAP
    // ========================================================

    /// Swap against a pool.
    ///
    /// Positive `amount_specified` is exact input, negative exact output.
    /// The input owed is pulled from `caller` through its allowance to the
    /// core; the output is sent to `recipient`.
    pub fn swap(
        env: Env,
        caller: Address,
        pool_id: BytesN<32>,
        recipient: Address,
        zero_for_one: bool,
        amount_specified: i128,
        sqrt_price_limit_x64: u128,
    ) -> Result<SwapDelta, CoreError> {
        caller.require_auth();

        let mut pool = read_initialized_pool(&env, &pool_id)?;
        let ticks = read_tick_list(&env, &pool_id);

        let mut state = SwapState {
            sqrt_price_x64: pool.sqrt_price_x64,
            tick: pool.tick,
            liquidity: pool.liquidity,
        };

        let result = engine_swap(
            &env,
            &mut state,
            &ticks,
            |e, t| read_tick(e, &pool_id, t),
            pool.fee,
            zero_for_one,
            amount_specified,
            sqrt_price_limit_x64,
        )?;

        pool.sqrt_price_x64 = state.sqrt_price_x64;
        pool.tick = state.tick;
        pool.liquidity = state.liquidity;
        pool.reserve0 += result.amount0;
        pool.reserve1 += result.amount1;
        write_pool(&env, &pool_id, &pool);

        let core = env.current_contract_address();
        let (token_in, token_out) = if zero_for_one {
            (&pool.token0, &pool.token1)
        } else {
            (&pool.token1, &pool.token0)
        };
        let amount_in = result.amount_in(zero_for_one);
        let amount_out = result.amount_out(zero_for_one);

        if amount_in > 0 {
            token::TokenClient::new(&env, token_in).transfer_from(&core, &caller, &core, &amount_in);
        }
        if amount_out > 0 {
            token::TokenClient::new(&env, token_out).transfer(&core, &recipient, &amount_out);
        }

        log!(&env, "swap", amount_in, amount_out, result.ticks_crossed);

        emit_swap(
            &env,
            &pool_id,
            &caller,
            &recipient,
            result.amount0,
            result.amount1,
            pool.sqrt_price_x64,
            pool.liquidity,
            pool.tick,
        );

        Ok(SwapDelta {
            amount0: result.amount0,
            amount1: result.amount1,
        })
    }

    /// Simulate a swap without moving tokens or state
    pub fn quote_swap(
        env: Env,
        pool_id: BytesN<32>,
        zero_for_one: bool,
        amount_specified: i128,
        sqrt_price_limit_x64: u128,
    ) -> Result<SwapDelta, CoreError> {
        let pool = read_initialized_pool(&env, &pool_id)?;
        let ticks = read_tick_list(&env, &pool_id);

        let state = SwapState {
            sqrt_price_x64: pool.sqrt_price_x64,
            tick: pool.tick,
            liquidity: pool.liquidity,
        };

        let result = engine_quote_swap(
            &env,
            &state,
            &ticks,
            |e, t| read_tick(e, &pool_id, t),
            pool.fee,
            zero_for_one,
            amount_specified,
            sqrt_price_limit_x64,
        )?;

        Ok(SwapDelta {
            amount0: result.amount0,
            amount1: result.amount1,
        })
    }

    // ========================================================
    // LIQUIDITY
    // ========================================================

    /// Add `liquidity` to `owner`'s position over [tick_lower, tick_upper].
    ///
    /// The token amounts owed are rounded up and pulled from `caller`.
    pub fn mint(
        env: Env,
        caller: Address,
        pool_id: BytesN<32>,
        owner: Address,
        tick_lower: i32,
        tick_upper: i32,
        liquidity: u128,
    ) -> Result<(i128, i128), CoreError> {
        caller.require_auth();

        if liquidity == 0 || liquidity > i128::MAX as u128 {
            return Err(CoreError::InvalidLiquidityAmount);
        }

        let (amount0, amount1) =
            modify_position(&env, &pool_id, &owner, tick_lower, tick_upper, liquidity as i128)?;

        let core = env.current_contract_address();
        let pool = read_initialized_pool(&env, &pool_id)?;
        if amount0 > 0 {
            token::TokenClient::new(&env, &pool.token0).transfer_from(&core, &caller, &core, &amount0);
        }
        if amount1 > 0 {
            token::TokenClient::new(&env, &pool.token1).transfer_from(&core, &caller, &core, &amount1);
        }

        emit_mint(&env, &pool_id, &owner, tick_lower, tick_upper, liquidity, amount0, amount1);

        Ok((amount0, amount1))
    }

    /// Remove `liquidity` from the caller's position and pay the
    /// underlying tokens (rounded down) to `recipient`
    pub fn burn(
        env: Env,
        caller: Address,
        pool_id: BytesN<32>,
        tick_lower: i32,
        tick_upper: i32,
        liquidity: u128,
        recipient: Address,
    ) -> Result<(i128, i128), CoreError> {
        caller.require_auth();

        if liquidity == 0 || liquidity > i128::MAX as u128 {
            return Err(CoreError::InvalidLiquidityAmount);
        }

        let (delta0, delta1) =
            modify_position(&env, &pool_id, &caller, tick_lower, tick_upper, -(liquidity as i128))?;
        let (amount0, amount1) = (-delta0, -delta1);

        let core = env.current_contract_address();
        let pool = read_initialized_pool(&env, &pool_id)?;
        if amount0 > 0 {
            token::TokenClient::new(&env, &pool.token0).transfer(&core, &recipient, &amount0);
        }
        if amount1 > 0 {
            token::TokenClient::new(&env, &pool.token1).transfer(&core, &recipient, &amount1);
        }

        emit_burn(&env, &pool_id, &caller, tick_lower, tick_upper, liquidity, amount0, amount1);

        Ok((amount0, amount1))
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    /// Pool id for a pair and fee, if the pool exists
    pub fn get_pool(env: Env, token_a: Address, token_b: Address, fee: u32) -> Option<BytesN<32>> {
        let key = sorted_pool_key(&env, &token_a, &token_b, fee).ok()?;
        let pool_id = pool_id_for_key(&env, &env.current_contract_address(), &key);
        if has_pool(&env, &pool_id) {
            Some(pool_id)
        } else {
            None
        }
    }

    /// Tick spacing of an enabled fee tier
    pub fn fee_tier_spacing(env: Env, fee: u32) -> Option<i32> {
        read_fee_tier(&env, fee)
    }

    pub fn slot0(env: Env, pool_id: BytesN<32>) -> Result<Slot0, CoreError> {
        let pool = read_pool(&env, &pool_id).ok_or(CoreError::PoolNotFound)?;
        Ok(Slot0 {
            sqrt_price_x64: pool.sqrt_price_x64,
            tick: pool.tick,
        })
    }

    pub fn pool_key(env: Env, pool_id: BytesN<32>) -> Result<PoolKey, CoreError> {
        let pool = read_pool(&env, &pool_id).ok_or(CoreError::PoolNotFound)?;
        Ok(PoolKey {
            token0: pool.token0,
            token1: pool.token1,
            fee: pool.fee,
        })
    }

    pub fn pool_state(env: Env, pool_id: BytesN<32>) -> Result<PoolState, CoreError> {
        read_pool(&env, &pool_id).ok_or(CoreError::PoolNotFound)
    }

    /// Active liquidity at the current price
    pub fn liquidity(env: Env, pool_id: BytesN<32>) -> Result<u128, CoreError> {
        let pool = read_pool(&env, &pool_id).ok_or(CoreError::PoolNotFound)?;
        Ok(pool.liquidity)
    }

    /// Token balances the core holds for the pool
    pub fn reserves(env: Env, pool_id: BytesN<32>) -> Result<(i128, i128), CoreError> {
        let pool = read_pool(&env, &pool_id).ok_or(CoreError::PoolNotFound)?;
        Ok((pool.reserve0, pool.reserve1))
    }

    pub fn tick(env: Env, pool_id: BytesN<32>, tick: i32) -> TickInfo {
        read_tick(&env, &pool_id, tick)
    }

    /// Liquidity of a position
    pub fn position(env: Env, pool_id: BytesN<32>, owner: Address, tick_lower: i32, tick_upper: i32) -> u128 {
        read_position(&env, &pool_id, &owner, tick_lower, tick_upper)
    }
}

// ============================================================
// INTERNAL HELPERS
// ============================================================

fn read_initialized_pool(env: &Env, pool_id: &BytesN<32>) -> Result<PoolState, CoreError> {
    let pool = read_pool(env, pool_id).ok_or(CoreError::PoolNotFound)?;
    if pool.sqrt_price_x64 == 0 {
        return Err(CoreError::PoolNotInitialized);
    }
    Ok(pool)
}

/// Apply a liquidity change to a position, its ticks and the pool.
///
/// Returns the signed token amounts owed to (positive) or by (negative)
/// the pool.
fn modify_position(
    env: &Env,
    pool_id: &BytesN<32>,
    owner: &Address,
    tick_lower: i32,
    tick_upper: i32,
    liquidity_delta: i128,
) -> Result<(i128, i128), CoreError> {
    let mut pool = read_initialized_pool(env, pool_id)?;
    check_ticks(tick_lower, tick_upper, pool.tick_spacing)?;

    let position = read_position(env, pool_id, owner, tick_lower, tick_upper);
    let position_after = if liquidity_delta >= 0 {
        position
            .checked_add(liquidity_delta as u128)
            .ok_or(CoreError::LiquidityOverflow)?
    } else {
        position
            .checked_sub(liquidity_delta.unsigned_abs())
            .ok_or(CoreError::InsufficientLiquidity)?
    };
    write_position(env, pool_id, owner, tick_lower, tick_upper, position_after);

    let read = |e: &Env, t: i32| read_tick(e, pool_id, t);
    let write = |e: &Env, t: i32, info: &TickInfo| write_tick(e, pool_id, t, info);

    let flipped_lower = update_tick(
        env,
        read,
        write,
        tick_lower,
        liquidity_delta,
        false,
        pool.max_liquidity_per_tick,
    )?;
    let flipped_upper = update_tick(
        env,
        read,
        write,
        tick_upper,
        liquidity_delta,
        true,
        pool.max_liquidity_per_tick,
    )?;

    if flipped_lower || flipped_upper {
        let mut ticks = read_tick_list(env, pool_id);
        for (tick, flipped) in [(tick_lower, flipped_lower), (tick_upper, flipped_upper)] {
            if !flipped {
                continue;
            }
            if liquidity_delta > 0 {
                insert_tick(&mut ticks, tick);
            } else {
                remove_tick(&mut ticks, tick);
            }
        }
        write_tick_list(env, pool_id, &ticks);
    }

    let sqrt_lower = get_sqrt_ratio_at_tick(env, tick_lower);
    let sqrt_upper = get_sqrt_ratio_at_tick(env, tick_upper);

    let (amount0, amount1) = if pool.tick < tick_lower {
        (get_amount_0_delta_signed(env, sqrt_lower, sqrt_upper, liquidity_delta), 0)
    } else if pool.tick < tick_upper {
        let amount0 = get_amount_0_delta_signed(env, pool.sqrt_price_x64, sqrt_upper, liquidity_delta);
        let amount1 = get_amount_1_delta_signed(env, sqrt_lower, pool.sqrt_price_x64, liquidity_delta);
        pool.liquidity = if liquidity_delta >= 0 {
            pool.liquidity
                .checked_add(liquidity_delta as u128)
                .ok_or(CoreError::LiquidityOverflow)?
        } else {
            pool.liquidity
                .checked_sub(liquidity_delta.unsigned_abs())
                .ok_or(CoreError::InsufficientLiquidity)?
        };
        (amount0, amount1)
    } else {
        (0, get_amount_1_delta_signed(env, sqrt_lower, sqrt_upper, liquidity_delta))
    };

    pool.reserve0 += amount0;
    pool.reserve1 += amount1;
    write_pool(env, pool_id, &pool);

    Ok((amount0, amount1))
}
