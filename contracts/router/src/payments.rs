//! Token custody and payouts.
//!
//! The core pulls swap input from the router through an allowance, so
//! every payment first brings the tokens into router custody and then
//! approves the core for exactly that amount.

use soroban_sdk::{token, Address, Env};

use belugaswap_interfaces::{WrappedNativeClient, APPROVAL_LEDGERS};

use crate::error::RouterError;
use crate::events::emit_sweep;
use crate::types::RouterConfig;

/// Basis point denominator for payout fees
const BIPS_DENOMINATOR: i128 = 10_000;

/// Highest payout fee, 1%
const MAX_FEE_BIPS: u32 = 100;

fn expiration(env: &Env) -> u32 {
    env.ledger().sequence() + APPROVAL_LEDGERS
}

fn balance_of(env: &Env, token: &Address) -> i128 {
    token::TokenClient::new(env, token).balance(&env.current_contract_address())
}

/// Move the native `value` attached to a call into router custody
pub fn receive_value(env: &Env, config: &RouterConfig, sender: &Address, value: i128) -> Result<(), RouterError> {
    if value < 0 {
        return Err(RouterError::InvalidAmount);
    }
    if value > 0 {
        token::TokenClient::new(env, &config.native_asset).transfer(sender, &env.current_contract_address(), &value);
    }
    Ok(())
}

/// Bring `amount` of `token` into custody and approve it to the core.
///
/// Router-held tokens are used as they are. Wrapped native is minted from
/// attached native value when enough is held; anything else is pulled
/// from `payer`.
pub fn pay(env: &Env, config: &RouterConfig, token: &Address, payer: &Address, amount: i128) {
    let this = env.current_contract_address();
    let client = token::TokenClient::new(env, token);

    if *payer != this {
        if *token == config.wrapped_native && balance_of(env, &config.native_asset) >= amount {
            token::TokenClient::new(env, &config.native_asset).approve(&this, token, &amount, &expiration(env));
            WrappedNativeClient::new(env, token).deposit(&this, &amount);
        } else {
            client.transfer(payer, &this, &amount);
        }
    }

    client.approve(&this, &config.factory, &amount, &expiration(env));
}

/// Return the part of a payment the core did not pull and drop the
/// remaining allowance
pub fn settle_unused(env: &Env, config: &RouterConfig, token: &Address, sender: &Address, paid: i128, used: i128) {
    if used >= paid {
        return;
    }
    let this = env.current_contract_address();
    let client = token::TokenClient::new(env, token);
    client.approve(&this, &config.factory, &0, &env.ledger().sequence());
    client.transfer(&this, sender, &(paid - used));
}

fn check_fee(fee_bips: u32) -> Result<(), RouterError> {
    if fee_bips == 0 || fee_bips > MAX_FEE_BIPS {
        return Err(RouterError::InvalidFee);
    }
    Ok(())
}

/// Split `amount` into (to recipient, to fee recipient)
fn split_fee(amount: i128, fee_bips: u32) -> (i128, i128) {
    let fee = amount * fee_bips as i128 / BIPS_DENOMINATOR;
    (amount - fee, fee)
}

/// Unwrap the whole wrapped-native balance and pay it out as native,
/// optionally keeping `fee_bips` for `fee_recipient`
pub fn unwrap_native_asset(
    env: &Env,
    config: &RouterConfig,
    amount_minimum: i128,
    recipient: &Address,
    fee: Option<(u32, Address)>,
) -> Result<i128, RouterError> {
    if let Some((fee_bips, _)) = &fee {
        check_fee(*fee_bips)?;
    }

    let balance = balance_of(env, &config.wrapped_native);
    if balance < amount_minimum {
        return Err(RouterError::InsufficientNativeAsset);
    }
    if balance == 0 {
        return Ok(0);
    }

    let this = env.current_contract_address();
    WrappedNativeClient::new(env, &config.wrapped_native).withdraw(&this, &balance);
    payout(env, &config.native_asset, balance, recipient, fee);

    Ok(balance)
}

/// Pay out the router's whole balance of `token`
pub fn sweep_token(
    env: &Env,
    token: &Address,
    amount_minimum: i128,
    recipient: &Address,
    fee: Option<(u32, Address)>,
) -> Result<i128, RouterError> {
    if let Some((fee_bips, _)) = &fee {
        check_fee(*fee_bips)?;
    }

    let balance = balance_of(env, token);
    if balance < amount_minimum {
        return Err(RouterError::InsufficientToken);
    }
    if balance > 0 {
        payout(env, token, balance, recipient, fee);
    }

    Ok(balance)
}

/// Send the router's native balance back to `sender`
pub fn refund_native_asset(env: &Env, config: &RouterConfig, sender: &Address) -> i128 {
    let balance = balance_of(env, &config.native_asset);
    if balance > 0 {
        token::TokenClient::new(env, &config.native_asset).transfer(
            &env.current_contract_address(),
            sender,
            &balance,
        );
    }
    balance
}

fn payout(env: &Env, token: &Address, amount: i128, recipient: &Address, fee: Option<(u32, Address)>) {
    let this = env.current_contract_address();
    let client = token::TokenClient::new(env, token);

    let (net, fee_amount) = match &fee {
        Some((fee_bips, fee_recipient)) => {
            let (net, fee_amount) = split_fee(amount, *fee_bips);
            if fee_amount > 0 {
                client.transfer(&this, fee_recipient, &fee_amount);
            }
            (net, fee_amount)
        }
        None => (amount, 0),
    };
    if net > 0 {
        client.transfer(&this, recipient, &net);
    }

    emit_sweep(env, token, recipient, net, fee_amount);
}
