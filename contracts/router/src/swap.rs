//! Swap execution against the core.

use soroban_sdk::{Address, BytesN, Env, Vec};

use belugaswap_interfaces::{CoreClient, PoolKey, SwapDelta};
use belugaswap_locator::{pool_id_for_key, sort_tokens};
use belugaswap_math::constants::{MAX_SQRT_RATIO, MIN_SQRT_RATIO};
use belugaswap_path::{decode_first_pool, decode_hops, has_multiple_pools, num_pools, skip_token};

use crate::error::RouterError;
use crate::events::emit_swap;
use crate::payments::{pay, settle_unused};
use crate::types::{
    ExactInputParams, ExactInputSingleParams, ExactOutputParams, ExactOutputSingleParams, RouterConfig,
};

/// A pool and the direction a hop trades through it
#[derive(Clone)]
struct Leg {
    pool_id: BytesN<32>,
    zero_for_one: bool,
}

fn leg(env: &Env, config: &RouterConfig, token_in: &Address, token_out: &Address, fee: u32) -> Result<Leg, RouterError> {
    let (token0, token1) = sort_tokens(env, token_in, token_out).map_err(|_| RouterError::InvalidPath)?;
    let zero_for_one = token0 == *token_in;
    let pool_id = pool_id_for_key(env, &config.factory, &PoolKey { token0, token1, fee });
    Ok(Leg { pool_id, zero_for_one })
}

fn price_limit(zero_for_one: bool, sqrt_price_limit_x64: u128) -> u128 {
    match (sqrt_price_limit_x64, zero_for_one) {
        (0, true) => MIN_SQRT_RATIO + 1,
        (0, false) => MAX_SQRT_RATIO - 1,
        (limit, _) => limit,
    }
}

/// (amount paid in, amount received) for a trade direction
fn flows(delta: &SwapDelta, zero_for_one: bool) -> (i128, i128) {
    if zero_for_one {
        (delta.amount0, -delta.amount1)
    } else {
        (delta.amount1, -delta.amount0)
    }
}

/// Swap up to `amount_in` through one pool, returning (input used, output).
/// Input the pool does not take is returned to `sender`.
#[allow(clippy::too_many_arguments)]
fn swap_exact_in(
    env: &Env,
    config: &RouterConfig,
    sender: &Address,
    payer: &Address,
    token_in: &Address,
    token_out: &Address,
    fee: u32,
    amount_in: i128,
    recipient: &Address,
    sqrt_price_limit_x64: u128,
) -> Result<(i128, i128), RouterError> {
    if amount_in <= 0 {
        return Err(RouterError::InvalidAmount);
    }
    let leg = leg(env, config, token_in, token_out, fee)?;

    pay(env, config, token_in, payer, amount_in);
    let delta = CoreClient::new(env, &config.factory).swap(
        &env.current_contract_address(),
        &leg.pool_id,
        recipient,
        &leg.zero_for_one,
        &amount_in,
        &price_limit(leg.zero_for_one, sqrt_price_limit_x64),
    );

    let (used, amount_out) = flows(&delta, leg.zero_for_one);
    settle_unused(env, config, token_in, sender, amount_in, used);

    Ok((used, amount_out))
}

// ============================================================
// EXACT INPUT
// ============================================================

pub fn exact_input_single(
    env: &Env,
    config: &RouterConfig,
    sender: &Address,
    params: &ExactInputSingleParams,
) -> Result<i128, RouterError> {
    let (amount_in, amount_out) = swap_exact_in(
        env,
        config,
        sender,
        sender,
        &params.token_in,
        &params.token_out,
        params.fee,
        params.amount_in,
        &params.recipient,
        params.sqrt_price_limit_x64,
    )?;

    if amount_out < params.amount_out_minimum {
        return Err(RouterError::InsufficientOutputAmount);
    }

    emit_swap(env, sender, &params.token_in, &params.token_out, amount_in, amount_out, 1);
    Ok(amount_out)
}

/// Walk the path hop by hop; intermediate outputs stay with the router
/// and pay for the next hop
pub fn exact_input(
    env: &Env,
    config: &RouterConfig,
    sender: &Address,
    params: &ExactInputParams,
) -> Result<i128, RouterError> {
    let this = env.current_contract_address();
    let hops = num_pools(&params.path)?;
    let first = decode_first_pool(env, &params.path)?;

    let mut path = params.path.clone();
    let mut payer = sender.clone();
    let mut amount = params.amount_in;
    let mut spent = None;

    let token_out = loop {
        let multiple = has_multiple_pools(&path);
        let hop = decode_first_pool(env, &path)?;
        let recipient = if multiple { this.clone() } else { params.recipient.clone() };

        let (used, amount_out) = swap_exact_in(
            env,
            config,
            sender,
            &payer,
            &hop.token_in,
            &hop.token_out,
            hop.fee,
            amount,
            &recipient,
            0,
        )?;
        if spent.is_none() {
            spent = Some(used);
        }
        amount = amount_out;

        if !multiple {
            break hop.token_out;
        }
        payer = this.clone();
        path = skip_token(&path)?;
    };

    if amount < params.amount_out_minimum {
        return Err(RouterError::InsufficientOutputAmount);
    }

    let amount_in = spent.unwrap_or(params.amount_in);
    emit_swap(env, sender, &first.token_in, &token_out, amount_in, amount, hops);
    Ok(amount)
}

// ============================================================
// EXACT OUTPUT
// ============================================================

pub fn exact_output_single(
    env: &Env,
    config: &RouterConfig,
    sender: &Address,
    params: &ExactOutputSingleParams,
) -> Result<i128, RouterError> {
    if params.amount_out <= 0 {
        return Err(RouterError::InvalidAmount);
    }

    let leg = leg(env, config, &params.token_in, &params.token_out, params.fee)?;
    let limit = price_limit(leg.zero_for_one, params.sqrt_price_limit_x64);
    let core = CoreClient::new(env, &config.factory);

    let quote = core.quote_swap(&leg.pool_id, &leg.zero_for_one, &-params.amount_out, &limit);
    let (amount_in, amount_out) = flows(&quote, leg.zero_for_one);

    // A partial fill is only acceptable when the caller set a price limit
    if params.sqrt_price_limit_x64 == 0 && amount_out != params.amount_out {
        return Err(RouterError::InsufficientLiquidity);
    }
    if amount_in > params.amount_in_maximum {
        return Err(RouterError::ExcessiveInputAmount);
    }

    pay(env, config, &params.token_in, sender, amount_in);
    core.swap(
        &env.current_contract_address(),
        &leg.pool_id,
        &params.recipient,
        &leg.zero_for_one,
        &-amount_out,
        &limit,
    );

    emit_swap(env, sender, &params.token_in, &params.token_out, amount_in, amount_out, 1);
    Ok(amount_in)
}

/// Quote the path backwards from the output to find each hop's input,
/// then pay the first input and execute the hops forward
pub fn exact_output(
    env: &Env,
    config: &RouterConfig,
    sender: &Address,
    params: &ExactOutputParams,
) -> Result<i128, RouterError> {
    if params.amount_out <= 0 {
        return Err(RouterError::InvalidAmount);
    }

    let this = env.current_contract_address();
    let core = CoreClient::new(env, &config.factory);
    let hops = decode_hops(env, &params.path)?;
    let n = hops.len();

    let mut legs: Vec<(BytesN<32>, bool)> = Vec::new(env);
    for hop in hops.iter() {
        let leg = leg(env, config, &hop.token_in, &hop.token_out, hop.fee)?;
        // Quotes assume every pool is untouched by earlier hops
        if legs.iter().any(|(pool_id, _)| pool_id == leg.pool_id) {
            return Err(RouterError::InvalidPath);
        }
        legs.push_back((leg.pool_id, leg.zero_for_one));
    }

    // inputs[i] is what hop i consumes; outputs[i] what it must deliver
    let mut inputs: Vec<i128> = Vec::new(env);
    let mut needed = params.amount_out;
    for i in (0..n).rev() {
        let (pool_id, zero_for_one) = legs.get_unchecked(i);
        let quote = core.quote_swap(&pool_id, &zero_for_one, &-needed, &price_limit(zero_for_one, 0));
        let (amount_in, amount_out) = flows(&quote, zero_for_one);
        if amount_out != needed {
            return Err(RouterError::InsufficientLiquidity);
        }
        inputs.push_front(amount_in);
        needed = amount_in;
    }

    let amount_in = needed;
    if amount_in > params.amount_in_maximum {
        return Err(RouterError::ExcessiveInputAmount);
    }

    for i in 0..n {
        let hop = hops.get_unchecked(i);
        let (pool_id, zero_for_one) = legs.get_unchecked(i);
        let last = i + 1 == n;
        let payer = if i == 0 { sender.clone() } else { this.clone() };
        let recipient = if last { params.recipient.clone() } else { this.clone() };
        let amount_out = if last { params.amount_out } else { inputs.get_unchecked(i + 1) };

        pay(env, config, &hop.token_in, &payer, inputs.get_unchecked(i));
        core.swap(&this, &pool_id, &recipient, &zero_for_one, &-amount_out, &price_limit(zero_for_one, 0));
    }

    let token_in = hops.get_unchecked(0).token_in;
    let token_out = hops.get_unchecked(n - 1).token_out;
    emit_swap(env, sender, &token_in, &token_out, amount_in, params.amount_out, n);
    Ok(amount_in)
}
