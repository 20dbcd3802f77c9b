//! Router error types

use soroban_sdk::contracterror;
use belugaswap_path::PathError;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RouterError {
    // Initialization
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Request errors
    Expired = 10,
    InvalidAmount = 11,
    InvalidPath = 12,
    InvalidFee = 13,

    // Swap errors
    InsufficientOutputAmount = 20,
    ExcessiveInputAmount = 21,
    InsufficientLiquidity = 22,

    // Payment errors
    InsufficientToken = 30,
    InsufficientNativeAsset = 31,
}

impl RouterError {
    /// Human-readable revert reason
    pub fn reason(&self) -> &'static str {
        match self {
            RouterError::AlreadyInitialized => "Already initialized",
            RouterError::NotInitialized => "Not initialized",
            RouterError::Expired => "Transaction too old",
            RouterError::InvalidAmount => "Invalid amount",
            RouterError::InvalidPath => "Invalid path",
            RouterError::InvalidFee => "Invalid fee",
            RouterError::InsufficientOutputAmount => "Too little received",
            RouterError::ExcessiveInputAmount => "Too much requested",
            RouterError::InsufficientLiquidity => "Insufficient liquidity",
            RouterError::InsufficientToken => "Insufficient token",
            RouterError::InsufficientNativeAsset => "Insufficient native asset",
        }
    }
}

impl From<PathError> for RouterError {
    fn from(_: PathError) -> Self {
        RouterError::InvalidPath
    }
}
