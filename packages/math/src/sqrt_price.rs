// SPDX-License-Identifier: MIT
// Sqrt Price Calculations

use soroban_sdk::{Env, U256};
use crate::constants::{MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK};
use crate::q64::{div_round_up_u256, mul_div_u256, to_u128, u256, u256_max, ONE_X64};

/// sqrt(1.0001^-(2^i)) in Q128.128, i = 0..19
const TICK_RATIOS: [u128; 20] = [
    0xfffcb933bd6fad37aa2d162d1a594001,
    0xfff97272373d413259a46990580e213a,
    0xfff2e50f5f656932ef12357cf3c7fdcc,
    0xffe5caca7e10e4e61c3624eaa0941cd0,
    0xffcb9843d60f6159c9db58835c926644,
    0xff973b41fa98c081472e6896dfb254c0,
    0xff2ea16466c96a3843ec78b326b52861,
    0xfe5dee046a99a2a811c461f1969c3053,
    0xfcbe86c7900a88aedcffc83b479aa3a4,
    0xf987a7253ac413176f2b074cf7815e54,
    0xf3392b0822b70005940c7a398e4b70f3,
    0xe7159475a2c29b7443b29c7fa6e889d9,
    0xd097f3bdfd2022b8845ad8f792aa5825,
    0xa9f746462d870fdf8a65dc1f90e061e5,
    0x70d869a156d2a1b890bb3df62baf32f7,
    0x31be135f97d08fd981231505542fcfa6,
    0x9aa508b5b7a84e1c677de54f3e99bc9,
    0x5d6af8dedb81196699c329225ee604,
    0x2216e584f5fa1ea926041bedfe98,
    0x48a170391f7dc42444e8fa2,
];

/// Convert tick to sqrt price in Q64.64 format
/// Formula: sqrt(1.0001^tick) * 2^64, rounded up
pub fn get_sqrt_ratio_at_tick(env: &Env, tick: i32) -> u128 {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        panic!("tick out of range");
    }

    if tick == 0 {
        return ONE_X64;
    }

    let abs_tick = tick.unsigned_abs();

    let mut ratio = if abs_tick & 0x1 != 0 {
        u256(env, TICK_RATIOS[0])
    } else {
        U256::from_parts(env, 0, 1, 0, 0)
    };

    for (i, constant) in TICK_RATIOS.iter().enumerate().skip(1) {
        if abs_tick & (1u32 << i) != 0 {
            ratio = ratio.mul(&u256(env, *constant)).shr(128);
        }
    }

    if tick > 0 {
        ratio = u256_max(env).div(&ratio);
    }

    // Q128.128 -> Q64.64, rounding up so that the result is never below the exact value
    let shifted = ratio.shr(64);
    let remainder = ratio.sub(&shifted.shl(64));
    let mut result = to_u128(&shifted);
    if remainder != U256::from_u32(env, 0) {
        result += 1;
    }
    result
}

/// Greatest tick whose sqrt price is less than or equal to `sqrt_price_x64`
pub fn get_tick_at_sqrt_ratio(env: &Env, sqrt_price_x64: u128) -> i32 {
    if !(MIN_SQRT_RATIO..MAX_SQRT_RATIO).contains(&sqrt_price_x64) {
        panic!("sqrt price out of range");
    }

    let mut low = MIN_TICK;
    let mut high = MAX_TICK;

    while low < high {
        let mid = low + (high - low + 1) / 2;
        if get_sqrt_ratio_at_tick(env, mid) <= sqrt_price_x64 {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    low
}

/// Next sqrt price after adding/removing `amount` of token0, rounded up
pub fn get_next_sqrt_price_from_amount0_rounding_up(
    env: &Env,
    sqrt_price: u128,
    liquidity: u128,
    amount: u128,
    add: bool,
) -> u128 {
    if amount == 0 {
        return sqrt_price;
    }

    let numerator1 = u256(env, liquidity).shl(64);
    let price = u256(env, sqrt_price);
    let amount_256 = u256(env, amount);
    let product_fits = amount_256 <= u256_max(env).div(&price);

    if add {
        if product_fits {
            let product = amount_256.mul(&price);
            let denominator = numerator1.add(&product);
            let fits = numerator1 <= u256_max(env).div(&price);
            if fits {
                return to_u128(&mul_div_u256(env, &numerator1, &price, &denominator, true));
            }
        }
        // L / (L / sqrt_price + amount)
        let denominator = numerator1.div(&price).add(&amount_256);
        to_u128(&div_round_up_u256(env, &numerator1, &denominator))
    } else {
        if !product_fits {
            panic!("price overflow");
        }
        let product = amount_256.mul(&price);
        if numerator1 <= product {
            panic!("insufficient liquidity for output");
        }
        let denominator = numerator1.sub(&product);
        to_u128(&mul_div_u256(env, &numerator1, &price, &denominator, true))
    }
}

/// Next sqrt price after adding/removing `amount` of token1, rounded down
pub fn get_next_sqrt_price_from_amount1_rounding_down(
    env: &Env,
    sqrt_price: u128,
    liquidity: u128,
    amount: u128,
    add: bool,
) -> u128 {
    let amount_256 = u256(env, amount);
    let liquidity_256 = u256(env, liquidity);

    if add {
        let quotient = to_u128(&amount_256.shl(64).div(&liquidity_256));
        sqrt_price.checked_add(quotient).unwrap_or_else(|| panic!("price overflow"))
    } else {
        let quotient = to_u128(&div_round_up_u256(env, &amount_256.shl(64), &liquidity_256));
        if sqrt_price <= quotient {
            panic!("insufficient liquidity for output");
        }
        sqrt_price - quotient
    }
}

/// Calculate next sqrt price given input amount
pub fn get_next_sqrt_price_from_input(
    env: &Env,
    sqrt_price: u128,
    liquidity: u128,
    amount_in: u128,
    zero_for_one: bool,
) -> u128 {
    if sqrt_price == 0 || liquidity == 0 {
        panic!("invalid price or liquidity");
    }

    if zero_for_one {
        get_next_sqrt_price_from_amount0_rounding_up(env, sqrt_price, liquidity, amount_in, true)
    } else {
        get_next_sqrt_price_from_amount1_rounding_down(env, sqrt_price, liquidity, amount_in, true)
    }
}

/// Calculate next sqrt price given output amount
pub fn get_next_sqrt_price_from_output(
    env: &Env,
    sqrt_price: u128,
    liquidity: u128,
    amount_out: u128,
    zero_for_one: bool,
) -> u128 {
    if sqrt_price == 0 || liquidity == 0 {
        panic!("invalid price or liquidity");
    }

    if zero_for_one {
        get_next_sqrt_price_from_amount1_rounding_down(env, sqrt_price, liquidity, amount_out, false)
    } else {
        get_next_sqrt_price_from_amount0_rounding_up(env, sqrt_price, liquidity, amount_out, false)
    }
}

/// Encode `reserve1 / reserve0` as a Q64.64 sqrt price
pub fn encode_price_sqrt(env: &Env, reserve1: u128, reserve0: u128) -> u128 {
    if reserve0 == 0 {
        panic!("encode_price_sqrt: zero reserve");
    }
    let ratio_x128 = u256(env, reserve1).shl(128).div(&u256(env, reserve0));
    crate::q64::sqrt_u256(env, &ratio_x128)
}
