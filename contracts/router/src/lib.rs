#![no_std]

//! # BelugaSwap Router
//!
//! Stateless swap router over the BelugaSwap core.
//!
//! ## Features:
//! 1. Exact input and exact output swaps, single pool or along an encoded path
//! 2. Native asset in and out through the wrapped-native token
//! 3. Sweep and unwrap helpers, optionally taking a payout fee
//! 4. Atomic batches with `multicall`
//!
//! Payable entrypoints take `(sender, value)`: `value` units of the native
//! asset are moved from `sender` into the router first, and whatever is
//! left of them is returned to `sender` when the call ends.
//!
//! ## Functions:
//! - Write: initialize, exact_input_single, exact_input, exact_output_single,
//!   exact_output, unwrap_native_asset, unwrap_native_asset_with_fee,
//!   sweep_token, sweep_token_with_fee, refund_native_asset, multicall
//! - Read: factory, wrapped_native

use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

use belugaswap_interfaces::WrappedNativeClient;

mod error;
mod events;
mod payments;
mod storage;
mod swap;
mod types;

pub use error::RouterError;
use events::*;
use storage::*;
pub use types::*;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct BelugaRouter;

#[contractimpl]
impl BelugaRouter {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize router with the core (pool factory) and wrapped native token
    pub fn initialize(
        env: Env,
        admin: Address,
        factory: Address,
        wrapped_native: Address,
    ) -> Result<(), RouterError> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(RouterError::AlreadyInitialized);
        }

        let native_asset = WrappedNativeClient::new(&env, &wrapped_native).native_asset();
        let config = RouterConfig {
            factory,
            wrapped_native,
            native_asset,
        };
        write_config(&env, &config);

        emit_initialized(&env, &config.factory, &config.wrapped_native, &admin);

        Ok(())
    }

    // ========================================================
    // SWAP FUNCTIONS (Write)
    // ========================================================

    /// Swap exactly `amount_in` of `token_in` in one pool
    pub fn exact_input_single(
        env: Env,
        sender: Address,
        value: i128,
        params: ExactInputSingleParams,
    ) -> Result<i128, RouterError> {
        sender.require_auth();
        let config = read_config(&env).ok_or(RouterError::NotInitialized)?;
        check_deadline(&env, params.deadline)?;

        payments::receive_value(&env, &config, &sender, value)?;
        let amount_out = swap::exact_input_single(&env, &config, &sender, &params)?;
        payments::refund_native_asset(&env, &config, &sender);

        Ok(amount_out)
    }

    /// Swap exactly `amount_in` along `path`
    pub fn exact_input(
        env: Env,
        sender: Address,
        value: i128,
        params: ExactInputParams,
    ) -> Result<i128, RouterError> {
        sender.require_auth();
        let config = read_config(&env).ok_or(RouterError::NotInitialized)?;
        check_deadline(&env, params.deadline)?;

        payments::receive_value(&env, &config, &sender, value)?;
        let amount_out = swap::exact_input(&env, &config, &sender, &params)?;
        payments::refund_native_asset(&env, &config, &sender);

        Ok(amount_out)
    }

    /// Buy exactly `amount_out` of `token_out` in one pool, returning the input spent
    pub fn exact_output_single(
        env: Env,
        sender: Address,
        value: i128,
        params: ExactOutputSingleParams,
    ) -> Result<i128, RouterError> {
        sender.require_auth();
        let config = read_config(&env).ok_or(RouterError::NotInitialized)?;
        check_deadline(&env, params.deadline)?;

        payments::receive_value(&env, &config, &sender, value)?;
        let amount_in = swap::exact_output_single(&env, &config, &sender, &params)?;
        payments::refund_native_asset(&env, &config, &sender);

        Ok(amount_in)
    }

    /// Buy exactly `amount_out` of the path's last token, returning the input spent
    pub fn exact_output(
        env: Env,
        sender: Address,
        value: i128,
        params: ExactOutputParams,
    ) -> Result<i128, RouterError> {
        sender.require_auth();
        let config = read_config(&env).ok_or(RouterError::NotInitialized)?;
        check_deadline(&env, params.deadline)?;

        payments::receive_value(&env, &config, &sender, value)?;
        let amount_in = swap::exact_output(&env, &config, &sender, &params)?;
        payments::refund_native_asset(&env, &config, &sender);

        Ok(amount_in)
    }

    // ========================================================
    // PAYMENT HELPERS (Write)
    // ========================================================

    /// Unwrap the router's wrapped-native balance to `recipient`
    pub fn unwrap_native_asset(env: Env, amount_minimum: i128, recipient: Address) -> Result<i128, RouterError> {
        let config = read_config(&env).ok_or(RouterError::NotInitialized)?;
        payments::unwrap_native_asset(&env, &config, amount_minimum, &recipient, None)
    }

    pub fn unwrap_native_asset_with_fee(
        env: Env,
        amount_minimum: i128,
        recipient: Address,
        fee_bips: u32,
        fee_recipient: Address,
    ) -> Result<i128, RouterError> {
        let config = read_config(&env).ok_or(RouterError::NotInitialized)?;
        payments::unwrap_native_asset(&env, &config, amount_minimum, &recipient, Some((fee_bips, fee_recipient)))
    }

    /// Send the router's whole balance of `token` to `recipient`
    pub fn sweep_token(env: Env, token: Address, amount_minimum: i128, recipient: Address) -> Result<i128, RouterError> {
        payments::sweep_token(&env, &token, amount_minimum, &recipient, None)
    }

    pub fn sweep_token_with_fee(
        env: Env,
        token: Address,
        amount_minimum: i128,
        recipient: Address,
        fee_bips: u32,
        fee_recipient: Address,
    ) -> Result<i128, RouterError> {
        payments::sweep_token(&env, &token, amount_minimum, &recipient, Some((fee_bips, fee_recipient)))
    }

    /// Return the router's native balance to `sender`
    pub fn refund_native_asset(env: Env, sender: Address) -> Result<i128, RouterError> {
        sender.require_auth();
        let config = read_config(&env).ok_or(RouterError::NotInitialized)?;
        Ok(payments::refund_native_asset(&env, &config, &sender))
    }

    // ========================================================
    // BATCHING
    // ========================================================

    /// Run `calls` in order as one atomic operation.
    ///
    /// Returns one amount per call: output for exact input swaps, input for
    /// exact output swaps, the amount paid out for helpers.
    pub fn multicall(
        env: Env,
        sender: Address,
        value: i128,
        calls: Vec<RouterCall>,
    ) -> Result<Vec<i128>, RouterError> {
        sender.require_auth();
        let config = read_config(&env).ok_or(RouterError::NotInitialized)?;

        payments::receive_value(&env, &config, &sender, value)?;

        let mut results = Vec::new(&env);
        for call in calls.iter() {
            results.push_back(dispatch(&env, &config, &sender, call)?);
        }

        let refunded = payments::refund_native_asset(&env, &config, &sender);
        log!(&env, "multicall", calls.len(), refunded);

        Ok(results)
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    pub fn factory(env: Env) -> Result<Address, RouterError> {
        Ok(read_config(&env).ok_or(RouterError::NotInitialized)?.factory)
    }

    pub fn wrapped_native(env: Env) -> Result<Address, RouterError> {
        Ok(read_config(&env).ok_or(RouterError::NotInitialized)?.wrapped_native)
    }
}

// ============================================================
// INTERNAL HELPERS
// ============================================================

fn check_deadline(env: &Env, deadline: u64) -> Result<(), RouterError> {
    if env.ledger().timestamp() > deadline {
        return Err(RouterError::Expired);
    }
    Ok(())
}

fn dispatch(env: &Env, config: &RouterConfig, sender: &Address, call: RouterCall) -> Result<i128, RouterError> {
    match call {
        RouterCall::ExactInputSingle(params) => {
            check_deadline(env, params.deadline)?;
            swap::exact_input_single(env, config, sender, &params)
        }
        RouterCall::ExactInput(params) => {
            check_deadline(env, params.deadline)?;
            swap::exact_input(env, config, sender, &params)
        }
        RouterCall::ExactOutputSingle(params) => {
            check_deadline(env, params.deadline)?;
            swap::exact_output_single(env, config, sender, &params)
        }
        RouterCall::ExactOutput(params) => {
            check_deadline(env, params.deadline)?;
            swap::exact_output(env, config, sender, &params)
        }
        RouterCall::UnwrapNativeAsset(amount_minimum, recipient) => {
            payments::unwrap_native_asset(env, config, amount_minimum, &recipient, None)
        }
        RouterCall::UnwrapNativeAssetWithFee(amount_minimum, recipient, fee_bips, fee_recipient) => {
            payments::unwrap_native_asset(env, config, amount_minimum, &recipient, Some((fee_bips, fee_recipient)))
        }
        RouterCall::SweepToken(token, amount_minimum, recipient) => {
            payments::sweep_token(env, &token, amount_minimum, &recipient, None)
        }
        RouterCall::SweepTokenWithFee(token, amount_minimum, recipient, fee_bips, fee_recipient) => {
            payments::sweep_token(env, &token, amount_minimum, &recipient, Some((fee_bips, fee_recipient)))
        }
        RouterCall::RefundNativeAsset => Ok(payments::refund_native_asset(env, config, sender)),
    }
}
