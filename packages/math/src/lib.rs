// BelugaSwap Math Package

#![no_std]

pub mod constants;
pub mod q64;
pub mod sqrt_price;
pub mod liquidity;
pub mod swap_math;

pub use constants::*;

pub use q64::{
    mul_div,
    mul_div_rounding_up,
    div_round_up,
    ONE_X64,
};

pub use sqrt_price::{
    get_sqrt_ratio_at_tick,
    get_tick_at_sqrt_ratio,
    get_next_sqrt_price_from_input,
    get_next_sqrt_price_from_output,
    encode_price_sqrt,
};

pub use liquidity::{
    get_liquidity_for_amount0,
    get_liquidity_for_amount1,
    get_liquidity_for_amounts,
    get_amounts_for_liquidity,
    get_amount_0_delta,
    get_amount_1_delta,
    get_amount_0_delta_signed,
    get_amount_1_delta_signed,
    to_i128,
};

pub use swap_math::{compute_swap_step, SwapStep};

// ============================================================
// TICK HELPERS
// ============================================================

/// Round a tick down to the nearest multiple of `spacing`
pub fn snap_tick_to_spacing(tick: i32, spacing: i32) -> i32 {
    if spacing <= 0 {
        panic!("tick_spacing must be positive");
    }
    let rem = tick.rem_euclid(spacing);
    tick - rem
}

/// Lowest tick usable with `spacing`
pub fn min_usable_tick(spacing: i32) -> i32 {
    (MIN_TICK / spacing) * spacing
}

/// Highest tick usable with `spacing`
pub fn max_usable_tick(spacing: i32) -> i32 {
    (MAX_TICK / spacing) * spacing
}
