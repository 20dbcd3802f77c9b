// Compatible with OpenZeppelin Stellar Soroban Contracts patterns
//
// Constants module following OpenZeppelin conventions:
// - Clear documentation for each constant
// - Grouped by functionality

// ============================================================
// TICK CONSTANTS
// ============================================================

/// Minimum valid tick value.
/// Bounded so that sqrt prices stay representable as Q64.64 in a u128.
pub const MIN_TICK: i32 = -443636;

/// Maximum valid tick value
pub const MAX_TICK: i32 = 443636;

// ============================================================
// SQRT PRICE CONSTANTS (Q64.64 format)
// ============================================================

/// Sqrt price at MIN_TICK: sqrt(1.0001^-443636) * 2^64
pub const MIN_SQRT_RATIO: u128 = 4295048017;

/// Sqrt price at MAX_TICK: sqrt(1.0001^443636) * 2^64
pub const MAX_SQRT_RATIO: u128 = 79226673515401279992447579062;

/// Sqrt price for 1:1 price ratio (2^64)
pub const SQRT_PRICE_1_1: u128 = 18446744073709551616_u128;

// ============================================================
// FEE CONSTANTS
// ============================================================

/// Fees are expressed in hundredths of a basis point (pips).
/// 3000 = 0.30%
pub const FEE_DENOMINATOR: u32 = 1_000_000;

// ============================================================
// SWAP CONSTANTS
// ============================================================

/// Maximum iterations in swap loop (prevents unbounded tick walks)
pub const MAX_SWAP_ITERATIONS: u32 = 1024;

// ============================================================
// MATH CONSTANTS
// ============================================================

/// Q64 multiplier (2^64) for fixed-point math
pub const Q64: u128 = 1u128 << 64;

/// Bit resolution of the Q64.64 format
pub const RESOLUTION: u32 = 64;
