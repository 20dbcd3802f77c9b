use belugaswap_math::constants::{MAX_SQRT_RATIO, MIN_SQRT_RATIO};

/// Pool state the swap loop reads and advances
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapState {
    pub sqrt_price_x64: u128,
    pub tick: i32,
    pub liquidity: u128,
}

/// Net token movement of a swap from the pool's point of view.
/// Positive amounts are owed to the pool, negative amounts are paid out.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SwapResult {
    pub amount0: i128,
    pub amount1: i128,
    pub sqrt_price_x64: u128,
    pub tick: i32,
    pub ticks_crossed: u32,
}

impl SwapResult {
    /// Amount the swapper pays in (always >= 0)
    pub fn amount_in(&self, zero_for_one: bool) -> i128 {
        if zero_for_one {
            self.amount0
        } else {
            self.amount1
        }
    }

    /// Amount the swapper receives (always >= 0)
    pub fn amount_out(&self, zero_for_one: bool) -> i128 {
        if zero_for_one {
            -self.amount1
        } else {
            -self.amount0
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwapError {
    /// amount_specified == 0
    ZeroAmount,
    /// Limit on the wrong side of the current price or outside the ratio bounds
    InvalidPriceLimit,
    /// Crossing a tick would push active liquidity out of range
    LiquidityOverflow,
}

/// Price limit used when the caller passes 0
#[inline]
pub fn default_price_limit(zero_for_one: bool) -> u128 {
    if zero_for_one {
        MIN_SQRT_RATIO + 1
    } else {
        MAX_SQRT_RATIO - 1
    }
}
