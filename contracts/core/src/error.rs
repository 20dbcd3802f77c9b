//! Core error types

use soroban_sdk::contracterror;
use belugaswap_swap::SwapError;
use belugaswap_tick::TickError;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CoreError {
    // Initialization errors (100-199)
    /// Core has already been initialized
    AlreadyInitialized = 100,
    /// Core has not been initialized
    NotInitialized = 101,

    // Configuration errors (200-299)
    /// Fee tier is not enabled
    InvalidFeeTier = 200,
    /// Fee tier is already enabled
    FeeTierExists = 201,
    /// Fee must be below 100%
    InvalidFee = 202,
    /// Tick spacing must be in (0, 16384)
    InvalidTickSpacing = 203,

    // Pool errors (300-399)
    /// No pool under this id
    PoolNotFound = 300,
    /// A pool for this pair and fee already exists
    PoolAlreadyExists = 301,
    /// Pool has no price yet
    PoolNotInitialized = 302,
    /// Pool already has a price
    PoolAlreadyInitialized = 303,
    /// Both sides of the pair are the same token
    SameToken = 304,
    /// Sqrt price outside [MIN_SQRT_RATIO, MAX_SQRT_RATIO)
    InvalidSqrtPrice = 305,

    // Tick errors (400-499)
    /// lower must be < upper
    InvalidTickRange = 400,
    /// Tick outside [MIN_TICK, MAX_TICK]
    InvalidTick = 401,
    /// Tick is not a multiple of the tick spacing
    TickNotAligned = 402,

    // Liquidity errors (500-599)
    /// Liquidity amount must be positive
    InvalidLiquidityAmount = 500,
    /// Position holds less liquidity than requested
    InsufficientLiquidity = 501,
    /// Liquidity exceeds the per-tick cap
    LiquidityOverflow = 502,

    // Swap errors (600-699)
    /// Swap amount must be non-zero
    ZeroAmount = 600,
    /// Price limit on the wrong side of the current price
    InvalidPriceLimit = 601,
}

impl From<TickError> for CoreError {
    fn from(err: TickError) -> Self {
        match err {
            TickError::InvalidTickRange => CoreError::InvalidTickRange,
            TickError::TickOutOfBounds => CoreError::InvalidTick,
            TickError::TickNotAligned => CoreError::TickNotAligned,
            TickError::LiquidityOverflow => CoreError::LiquidityOverflow,
            TickError::LiquidityUnderflow => CoreError::InsufficientLiquidity,
        }
    }
}

impl From<SwapError> for CoreError {
    fn from(err: SwapError) -> Self {
        match err {
            SwapError::ZeroAmount => CoreError::ZeroAmount,
            SwapError::InvalidPriceLimit => CoreError::InvalidPriceLimit,
            SwapError::LiquidityOverflow => CoreError::LiquidityOverflow,
        }
    }
}
