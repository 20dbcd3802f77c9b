//! Position manager error codes

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PositionManagerError {
    // Initialization errors (100-199)
    /// Contract has already been initialized
    AlreadyInitialized = 100,
    /// Contract has not been initialized
    NotInitialized = 101,

    // Validation errors (200-299)
    /// Ledger timestamp is past the deadline
    Expired = 200,
    /// token0 must sort before token1
    InvalidTokenOrder = 201,
    /// Amounts must not be negative
    InvalidAmount = 202,

    // Pool errors (300-399)
    PoolNotFound = 300,
    PoolNotInitialized = 301,

    // Liquidity errors (400-499)
    /// Desired amounts buy no liquidity
    ZeroLiquidity = 400,
    /// Amounts fall below the caller's minimums
    PriceSlippageCheck = 401,
    /// Position holds less liquidity than requested
    InsufficientLiquidity = 402,

    // Position errors (500-599)
    PositionNotFound = 500,
    NotOwner = 501,
}
