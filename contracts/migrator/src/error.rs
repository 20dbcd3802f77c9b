//! Migrator error types

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MigratorError {
    // Initialization
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Request errors
    Expired = 10,
    InvalidPercentage = 11,
    InvalidAmount = 12,
    InvalidTokenOrder = 13,
    PairMismatch = 14,

    // Target pool errors
    PoolNotInitialized = 20,
    PriceSlippageCheck = 21,
    MintFailed = 22,
}
