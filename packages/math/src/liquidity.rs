// SPDX-License-Identifier: MIT
// Liquidity Calculations

use soroban_sdk::Env;
use crate::q64::{div_round_up, mul_div, mul_div_rounding_up, mul_div_u256, to_u128, u256, ONE_X64};

#[inline]
fn sort_prices(sqrt_price_a: u128, sqrt_price_b: u128) -> (u128, u128) {
    if sqrt_price_a < sqrt_price_b {
        (sqrt_price_a, sqrt_price_b)
    } else {
        (sqrt_price_b, sqrt_price_a)
    }
}

/// Token0 amount between two prices:
/// L * (sqrt_upper - sqrt_lower) / (sqrt_upper * sqrt_lower)
pub fn get_amount_0_delta(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: u128,
    round_up: bool,
) -> u128 {
    let (sqrt_lower, sqrt_upper) = sort_prices(sqrt_price_a, sqrt_price_b);
    if sqrt_lower == 0 {
        panic!("sqrt price is zero");
    }

    let numerator1 = u256(env, liquidity).shl(64);
    let numerator2 = u256(env, sqrt_upper - sqrt_lower);
    let upper = u256(env, sqrt_upper);

    if round_up {
        let step = to_u128(&mul_div_u256(env, &numerator1, &numerator2, &upper, true));
        div_round_up(step, sqrt_lower)
    } else {
        let step = to_u128(&mul_div_u256(env, &numerator1, &numerator2, &upper, false));
        step / sqrt_lower
    }
}

/// Token1 amount between two prices: L * (sqrt_upper - sqrt_lower)
pub fn get_amount_1_delta(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: u128,
    round_up: bool,
) -> u128 {
    let (sqrt_lower, sqrt_upper) = sort_prices(sqrt_price_a, sqrt_price_b);

    if round_up {
        mul_div_rounding_up(env, liquidity, sqrt_upper - sqrt_lower, ONE_X64)
    } else {
        mul_div(env, liquidity, sqrt_upper - sqrt_lower, ONE_X64)
    }
}

/// Signed token0 delta for a liquidity change.
/// Adding liquidity rounds up (owed to the pool), removing rounds down.
pub fn get_amount_0_delta_signed(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity_delta: i128,
) -> i128 {
    if liquidity_delta < 0 {
        let amount = get_amount_0_delta(env, sqrt_price_a, sqrt_price_b, liquidity_delta.unsigned_abs(), false);
        -to_i128(amount)
    } else {
        to_i128(get_amount_0_delta(env, sqrt_price_a, sqrt_price_b, liquidity_delta as u128, true))
    }
}

/// Signed token1 delta for a liquidity change
pub fn get_amount_1_delta_signed(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity_delta: i128,
) -> i128 {
    if liquidity_delta < 0 {
        let amount = get_amount_1_delta(env, sqrt_price_a, sqrt_price_b, liquidity_delta.unsigned_abs(), false);
        -to_i128(amount)
    } else {
        to_i128(get_amount_1_delta(env, sqrt_price_a, sqrt_price_b, liquidity_delta as u128, true))
    }
}

/// Calculate liquidity from token0 amount
pub fn get_liquidity_for_amount0(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    amount0: u128,
) -> u128 {
    let (sqrt_lower, sqrt_upper) = sort_prices(sqrt_price_a, sqrt_price_b);
    if sqrt_lower == sqrt_upper {
        return 0;
    }
    let intermediate = mul_div(env, sqrt_lower, sqrt_upper, ONE_X64);
    mul_div(env, amount0, intermediate, sqrt_upper - sqrt_lower)
}

/// Calculate liquidity from token1 amount
pub fn get_liquidity_for_amount1(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    amount1: u128,
) -> u128 {
    let (sqrt_lower, sqrt_upper) = sort_prices(sqrt_price_a, sqrt_price_b);
    if sqrt_lower == sqrt_upper {
        return 0;
    }
    mul_div(env, amount1, ONE_X64, sqrt_upper - sqrt_lower)
}

/// Maximum liquidity obtainable from both token amounts at the current price
pub fn get_liquidity_for_amounts(
    env: &Env,
    sqrt_price_current: u128,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    amount0: u128,
    amount1: u128,
) -> u128 {
    let (sqrt_lower, sqrt_upper) = sort_prices(sqrt_price_a, sqrt_price_b);

    if sqrt_price_current <= sqrt_lower {
        get_liquidity_for_amount0(env, sqrt_lower, sqrt_upper, amount0)
    } else if sqrt_price_current < sqrt_upper {
        let liq0 = get_liquidity_for_amount0(env, sqrt_price_current, sqrt_upper, amount0);
        let liq1 = get_liquidity_for_amount1(env, sqrt_lower, sqrt_price_current, amount1);
        liq0.min(liq1)
    } else {
        get_liquidity_for_amount1(env, sqrt_lower, sqrt_upper, amount1)
    }
}

/// Token amounts represented by `liquidity` at the current price
pub fn get_amounts_for_liquidity(
    env: &Env,
    sqrt_price_current: u128,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: u128,
    round_up: bool,
) -> (u128, u128) {
    let (sqrt_lower, sqrt_upper) = sort_prices(sqrt_price_a, sqrt_price_b);

    if sqrt_price_current <= sqrt_lower {
        (get_amount_0_delta(env, sqrt_lower, sqrt_upper, liquidity, round_up), 0)
    } else if sqrt_price_current < sqrt_upper {
        (
            get_amount_0_delta(env, sqrt_price_current, sqrt_upper, liquidity, round_up),
            get_amount_1_delta(env, sqrt_lower, sqrt_price_current, liquidity, round_up),
        )
    } else {
        (0, get_amount_1_delta(env, sqrt_lower, sqrt_upper, liquidity, round_up))
    }
}

/// Token amounts as i128, panicking when they do not fit
#[inline]
pub fn to_i128(amount: u128) -> i128 {
    if amount > i128::MAX as u128 {
        panic!("i128 overflow");
    }
    amount as i128
}
