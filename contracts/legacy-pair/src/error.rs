//! Legacy pair error types

use soroban_sdk::contracterror;
use belugaswap_token::TokenError;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PairError {
    AlreadyInitialized = 100,
    NotInitialized = 101,
    IdenticalTokens = 102,

    // Liquidity errors (200-299)
    /// Deposit too small to mint any share
    InsufficientLiquidityMinted = 200,
    /// Share too small to redeem anything
    InsufficientLiquidityBurned = 201,

    // Token errors (300-399)
    NegativeAmount = 300,
    InsufficientBalance = 301,
    InsufficientAllowance = 302,
    InvalidExpiration = 303,
}

impl From<TokenError> for PairError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::NegativeAmount => PairError::NegativeAmount,
            TokenError::InsufficientBalance => PairError::InsufficientBalance,
            TokenError::InsufficientAllowance => PairError::InsufficientAllowance,
            TokenError::InvalidExpiration => PairError::InvalidExpiration,
        }
    }
}
