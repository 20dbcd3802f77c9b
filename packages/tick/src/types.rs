// Tick Types

use soroban_sdk::contracttype;

/// Information stored for each initialized tick
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TickInfo {
    /// Total liquidity referencing this tick
    pub liquidity_gross: u128,
    /// Net liquidity change when crossing left-to-right
    pub liquidity_net: i128,
    /// Whether this tick is initialized
    pub initialized: bool,
}

/// Failures raised while touching tick state
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickError {
    /// lower >= upper
    InvalidTickRange,
    /// Tick outside [MIN_TICK, MAX_TICK]
    TickOutOfBounds,
    /// Tick is not a multiple of the pool spacing
    TickNotAligned,
    /// Gross liquidity would exceed the per-tick cap
    LiquidityOverflow,
    /// Removing more liquidity than the tick references
    LiquidityUnderflow,
}
