// Tick Update and Crossing Logic

use soroban_sdk::Env;
use belugaswap_math::constants::{MAX_TICK, MIN_TICK};
use crate::types::{TickError, TickInfo};

/// Update a tick when liquidity is added or removed.
///
/// Returns `true` when the tick flipped between initialized and
/// uninitialized.
pub fn update_tick(
    env: &Env,
    read_tick: impl Fn(&Env, i32) -> TickInfo,
    write_tick: impl Fn(&Env, i32, &TickInfo),
    tick: i32,
    liquidity_delta: i128,
    upper: bool,
    max_liquidity: u128,
) -> Result<bool, TickError> {
    let mut info = read_tick(env, tick);

    let liquidity_gross_before = info.liquidity_gross;
    let liquidity_gross_after = if liquidity_delta >= 0 {
        liquidity_gross_before
            .checked_add(liquidity_delta as u128)
            .ok_or(TickError::LiquidityOverflow)?
    } else {
        liquidity_gross_before
            .checked_sub(liquidity_delta.unsigned_abs())
            .ok_or(TickError::LiquidityUnderflow)?
    };

    if liquidity_gross_after > max_liquidity {
        return Err(TickError::LiquidityOverflow);
    }

    let flipped = (liquidity_gross_after == 0) != (liquidity_gross_before == 0);

    info.liquidity_gross = liquidity_gross_after;

    // Upper ticks subtract liquidity when crossed left-to-right
    info.liquidity_net = if upper {
        info.liquidity_net.checked_sub(liquidity_delta)
    } else {
        info.liquidity_net.checked_add(liquidity_delta)
    }
    .ok_or(TickError::LiquidityOverflow)?;

    info.initialized = liquidity_gross_after > 0;

    write_tick(env, tick, &info);

    Ok(flipped)
}

/// Liquidity change applied when a swap crosses `tick`
pub fn cross_tick(
    env: &Env,
    read_tick: impl Fn(&Env, i32) -> TickInfo,
    tick: i32,
) -> i128 {
    read_tick(env, tick).liquidity_net
}

/// Check if a tick is within valid range
#[inline]
pub fn is_valid_tick(tick: i32) -> bool {
    (MIN_TICK..=MAX_TICK).contains(&tick)
}

/// Validate a position range against bounds and pool spacing
pub fn check_ticks(tick_lower: i32, tick_upper: i32, tick_spacing: i32) -> Result<(), TickError> {
    if tick_lower >= tick_upper {
        return Err(TickError::InvalidTickRange);
    }
    if !is_valid_tick(tick_lower) || !is_valid_tick(tick_upper) {
        return Err(TickError::TickOutOfBounds);
    }
    if tick_lower % tick_spacing != 0 || tick_upper % tick_spacing != 0 {
        return Err(TickError::TickNotAligned);
    }
    Ok(())
}

/// Largest gross liquidity a single tick may reference so that
/// the sum over every usable tick fits in a u128
pub fn max_liquidity_per_tick(tick_spacing: i32) -> u128 {
    let min_tick = (MIN_TICK / tick_spacing) * tick_spacing;
    let max_tick = (MAX_TICK / tick_spacing) * tick_spacing;
    let num_ticks = ((max_tick - min_tick) / tick_spacing) as u128 + 1;
    u128::MAX / num_ticks
}
