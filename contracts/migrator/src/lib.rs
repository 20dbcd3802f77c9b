#![no_std]

//! # BelugaSwap Migrator
//!
//! Moves liquidity from a legacy constant-product pair into a
//! concentrated position held by the position manager.
//!
//! A migration redeems LP shares from the pair, opens a position with the
//! redeemed tokens and hands back whatever the position did not use. The
//! migrator holds nothing and keeps no allowance once a call returns.
//!
//! ## Functions:
//! - Write: initialize, create_and_init_pool_if_needed, migrate
//! - Read: factory, wrapped_native, position_manager

use soroban_sdk::{contract, contractimpl, log, token, Address, BytesN, Env};

use belugaswap_interfaces::{
    create_and_init_pool_if_needed as init_pool, CoreClient, LegacyPairClient, MintParams, MintResult,
    PositionManagerClient, PositionManagerError, WrappedNativeClient, APPROVAL_LEDGERS,
};
use belugaswap_locator::sort_tokens;

mod error;
mod events;
mod storage;
mod types;

pub use error::MigratorError;
use events::*;
use storage::*;
pub use types::*;

#[contract]
pub struct BelugaMigrator;

#[contractimpl]
impl BelugaMigrator {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    pub fn initialize(
        env: Env,
        admin: Address,
        factory: Address,
        wrapped_native: Address,
        position_manager: Address,
    ) -> Result<(), MigratorError> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(MigratorError::AlreadyInitialized);
        }

        let native_asset = WrappedNativeClient::new(&env, &wrapped_native).native_asset();

        write_config(&env, &MigratorConfig {
            factory: factory.clone(),
            wrapped_native,
            native_asset,
            position_manager: position_manager.clone(),
        });

        emit_initialized(&env, &factory, &position_manager, &admin);

        Ok(())
    }

    pub fn factory(env: Env) -> Result<Address, MigratorError> {
        Ok(read_config(&env).ok_or(MigratorError::NotInitialized)?.factory)
    }

    pub fn wrapped_native(env: Env) -> Result<Address, MigratorError> {
        Ok(read_config(&env).ok_or(MigratorError::NotInitialized)?.wrapped_native)
    }

    pub fn position_manager(env: Env) -> Result<Address, MigratorError> {
        Ok(read_config(&env).ok_or(MigratorError::NotInitialized)?.position_manager)
    }

    /// Create and/or initialize the target pool ahead of a migration
    pub fn create_and_init_pool_if_needed(
        env: Env,
        token_a: Address,
        token_b: Address,
        fee: u32,
        sqrt_price_x64: u128,
    ) -> Result<BytesN<32>, MigratorError> {
        let config = read_config(&env).ok_or(MigratorError::NotInitialized)?;
        Ok(init_pool(&env, &config.factory, &token_a, &token_b, fee, sqrt_price_x64))
    }

    // ========================================================
    // MIGRATION
    // ========================================================

    /// Redeem `liquidity_to_migrate * percentage_to_migrate / 100` pair
    /// shares of `sender` and open a position for `params.recipient`.
    ///
    /// `sender` must have approved the migrator on the pair share token.
    /// Redeemed amounts come back in the pair's token order and are mapped
    /// onto `params.token0`/`params.token1`. Tokens the position does not
    /// take are paid to `params.recipient`.
    pub fn migrate(env: Env, sender: Address, params: MigrateParams) -> Result<MintResult, MigratorError> {
        sender.require_auth();

        let config = read_config(&env).ok_or(MigratorError::NotInitialized)?;

        if env.ledger().timestamp() > params.deadline {
            return Err(MigratorError::Expired);
        }
        if params.percentage_to_migrate == 0 || params.percentage_to_migrate > 100 {
            return Err(MigratorError::InvalidPercentage);
        }
        if params.liquidity_to_migrate <= 0 {
            return Err(MigratorError::InvalidAmount);
        }

        let (token0, _) = sort_tokens(&env, &params.token0, &params.token1)
            .map_err(|_| MigratorError::InvalidTokenOrder)?;
        if token0 != params.token0 {
            return Err(MigratorError::InvalidTokenOrder);
        }

        // The pair may order its tokens differently from the target pool
        let pair = LegacyPairClient::new(&env, &params.pair);
        let (pair_token0, pair_token1) = (pair.token0(), pair.token1());
        let reversed = if pair_token0 == params.token0 && pair_token1 == params.token1 {
            false
        } else if pair_token0 == params.token1 && pair_token1 == params.token0 {
            true
        } else {
            return Err(MigratorError::PairMismatch);
        };

        let core = CoreClient::new(&env, &config.factory);
        let initialized = core
            .get_pool(&params.token0, &params.token1, &params.fee)
            .map(|pool_id| core.slot0(&pool_id).is_initialized())
            .unwrap_or(false);
        if !initialized {
            return Err(MigratorError::PoolNotInitialized);
        }

        let amount_to_migrate = params
            .liquidity_to_migrate
            .checked_mul(params.percentage_to_migrate as i128)
            .ok_or(MigratorError::InvalidAmount)?
            / 100;
        if amount_to_migrate == 0 {
            return Err(MigratorError::InvalidAmount);
        }

        let this = env.current_contract_address();

        // Shares go straight to the pair, which redeems its own balance
        token::TokenClient::new(&env, &params.pair).transfer_from(&this, &sender, &params.pair, &amount_to_migrate);
        let (burned0, burned1) = pair.burn(&this);
        let (amount0, amount1) = if reversed { (burned1, burned0) } else { (burned0, burned1) };
        log!(&env, "pair redeemed", amount_to_migrate, amount0, amount1);

        let expiration = env.ledger().sequence() + APPROVAL_LEDGERS;
        let client0 = token::TokenClient::new(&env, &params.token0);
        let client1 = token::TokenClient::new(&env, &params.token1);
        client0.approve(&this, &config.position_manager, &amount0, &expiration);
        client1.approve(&this, &config.position_manager, &amount1, &expiration);

        let manager = PositionManagerClient::new(&env, &config.position_manager);
        let result = match manager.try_mint(&this, &MintParams {
            token0: params.token0.clone(),
            token1: params.token1.clone(),
            fee: params.fee,
            tick_lower: params.tick_lower,
            tick_upper: params.tick_upper,
            amount0_desired: amount0,
            amount1_desired: amount1,
            amount0_min: params.amount0_min,
            amount1_min: params.amount1_min,
            recipient: params.recipient.clone(),
            deadline: params.deadline,
        }) {
            Ok(Ok(result)) => result,
            Err(Ok(PositionManagerError::PriceSlippageCheck)) => return Err(MigratorError::PriceSlippageCheck),
            Err(Ok(PositionManagerError::PoolNotInitialized)) => return Err(MigratorError::PoolNotInitialized),
            _ => return Err(MigratorError::MintFailed),
        };

        let refund0 = amount0 - result.amount0;
        let refund1 = amount1 - result.amount1;
        refund(&env, &config, &params, &params.token0, refund0);
        refund(&env, &config, &params, &params.token1, refund1);

        emit_migrate(
            &env,
            &params.pair,
            &params.recipient,
            result.token_id,
            result.liquidity,
            refund0,
            refund1,
        );

        Ok(result)
    }
}

/// Drop the manager allowance left on `token` and pay `amount` to the
/// recipient, unwrapping wrapped native when asked to
fn refund(env: &Env, config: &MigratorConfig, params: &MigrateParams, token: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }

    let this = env.current_contract_address();
    let client = token::TokenClient::new(env, token);
    client.approve(&this, &config.position_manager, &0, &env.ledger().sequence());

    if params.refund_as_native && *token == config.wrapped_native {
        WrappedNativeClient::new(env, token).withdraw(&this, &amount);
        token::TokenClient::new(env, &config.native_asset).transfer(&this, &params.recipient, &amount);
    } else {
        client.transfer(&this, &params.recipient, &amount);
    }
}
