//! Wrapped native error types

use soroban_sdk::contracterror;
use belugaswap_token::TokenError;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WrappedNativeError {
    AlreadyInitialized = 100,
    NotInitialized = 101,

    // Token errors (200-299)
    NegativeAmount = 200,
    InsufficientBalance = 201,
    InsufficientAllowance = 202,
    InvalidExpiration = 203,
}

impl From<TokenError> for WrappedNativeError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::NegativeAmount => WrappedNativeError::NegativeAmount,
            TokenError::InsufficientBalance => WrappedNativeError::InsufficientBalance,
            TokenError::InsufficientAllowance => WrappedNativeError::InsufficientAllowance,
            TokenError::InvalidExpiration => WrappedNativeError::InvalidExpiration,
        }
    }
}
