use soroban_sdk::{Env, Vec};
use belugaswap_math::{
    compute_swap_step, get_sqrt_ratio_at_tick, get_tick_at_sqrt_ratio,
    constants::{MAX_SQRT_RATIO, MAX_SWAP_ITERATIONS, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK},
};
use belugaswap_tick::{cross_tick, next_initialized_tick, TickInfo};
use crate::types::{default_price_limit, SwapError, SwapResult, SwapState};

// ============================================================
// PUBLIC SWAP FUNCTIONS
// ============================================================

/// Execute a swap against `state`, advancing it in place.
///
/// # Arguments
/// * `state` - Current pool price, tick and active liquidity
/// * `ticks` - Sorted list of initialized ticks
/// * `read_tick` - Callback to read tick info from storage
/// * `fee` - Fee in pips
/// * `zero_for_one` - Direction (true = token0 -> token1)
/// * `amount_specified` - Positive for exact input, negative for exact output
/// * `sqrt_price_limit_x64` - Price the swap may not cross (0 for no limit)
///
/// The swap stops when the specified amount is exhausted or the price
/// limit is reached, whichever comes first.
pub fn engine_swap<F>(
    env: &Env,
    state: &mut SwapState,
    ticks: &Vec<i32>,
    read_tick: F,
    fee: u32,
    zero_for_one: bool,
    amount_specified: i128,
    sqrt_price_limit_x64: u128,
) -> Result<SwapResult, SwapError>
where
    F: Fn(&Env, i32) -> TickInfo,
{
    if amount_specified == 0 {
        return Err(SwapError::ZeroAmount);
    }

    let sqrt_price_limit = if sqrt_price_limit_x64 == 0 {
        default_price_limit(zero_for_one)
    } else {
        sqrt_price_limit_x64
    };

    let valid_limit = if zero_for_one {
        sqrt_price_limit < state.sqrt_price_x64 && sqrt_price_limit > MIN_SQRT_RATIO
    } else {
        sqrt_price_limit > state.sqrt_price_x64 && sqrt_price_limit < MAX_SQRT_RATIO
    };
    if !valid_limit {
        return Err(SwapError::InvalidPriceLimit);
    }

    let exact_input = amount_specified > 0;

    let mut amount_remaining = amount_specified;
    let mut amount_calculated: i128 = 0;
    let mut sqrt_price = state.sqrt_price_x64;
    let mut tick = state.tick;
    let mut liquidity = state.liquidity;

    let mut iterations: u32 = 0;
    let mut ticks_crossed: u32 = 0;

    while amount_remaining != 0 && sqrt_price != sqrt_price_limit && iterations < MAX_SWAP_ITERATIONS {
        iterations += 1;

        let sqrt_price_start = sqrt_price;

        let (tick_next, initialized) = next_initialized_tick(ticks, tick, zero_for_one);
        let tick_next = tick_next.clamp(MIN_TICK, MAX_TICK);
        let sqrt_price_next_tick = get_sqrt_ratio_at_tick(env, tick_next);

        // Clamp target to the caller's price limit
        let sqrt_price_target = if zero_for_one {
            sqrt_price_next_tick.max(sqrt_price_limit)
        } else {
            sqrt_price_next_tick.min(sqrt_price_limit)
        };

        let step = compute_swap_step(
            env,
            sqrt_price,
            sqrt_price_target,
            liquidity,
            amount_remaining,
            fee,
        );

        if exact_input {
            amount_remaining -= (step.amount_in + step.fee_amount) as i128;
            amount_calculated -= step.amount_out as i128;
        } else {
            amount_remaining += step.amount_out as i128;
            amount_calculated += (step.amount_in + step.fee_amount) as i128;
        }

        sqrt_price = step.sqrt_price_next;

        if sqrt_price == sqrt_price_next_tick {
            if initialized {
                let liquidity_net = cross_tick(env, &read_tick, tick_next);
                let liquidity_net = if zero_for_one { -liquidity_net } else { liquidity_net };
                liquidity = add_delta(liquidity, liquidity_net)?;
                ticks_crossed += 1;
            }

            tick = if zero_for_one { tick_next - 1 } else { tick_next };
        } else if sqrt_price != sqrt_price_start {
            tick = get_tick_at_sqrt_ratio(env, sqrt_price);
        }
    }

    state.sqrt_price_x64 = sqrt_price;
    state.tick = tick;
    state.liquidity = liquidity;

    let (amount0, amount1) = if zero_for_one == exact_input {
        (amount_specified - amount_remaining, amount_calculated)
    } else {
        (amount_calculated, amount_specified - amount_remaining)
    };

    Ok(SwapResult {
        amount0,
        amount1,
        sqrt_price_x64: sqrt_price,
        tick,
        ticks_crossed,
    })
}

/// Quote a swap without executing (read-only simulation)
pub fn quote_swap<F>(
    env: &Env,
    state: &SwapState,
    ticks: &Vec<i32>,
    read_tick: F,
    fee: u32,
    zero_for_one: bool,
    amount_specified: i128,
    sqrt_price_limit_x64: u128,
) -> Result<SwapResult, SwapError>
where
    F: Fn(&Env, i32) -> TickInfo,
{
    let mut sim_state = state.clone();
    engine_swap(
        env,
        &mut sim_state,
        ticks,
        read_tick,
        fee,
        zero_for_one,
        amount_specified,
        sqrt_price_limit_x64,
    )
}

// ============================================================
// HELPER FUNCTIONS
// ============================================================

#[inline]
fn add_delta(liquidity: u128, delta: i128) -> Result<u128, SwapError> {
    if delta < 0 {
        liquidity.checked_sub(delta.unsigned_abs())
    } else {
        liquidity.checked_add(delta as u128)
    }
    .ok_or(SwapError::LiquidityOverflow)
}
