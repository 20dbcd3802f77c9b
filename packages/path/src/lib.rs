//! Packed swap paths.
//!
//! A path alternates token and fee tier: `token | fee | token | fee | token`.
//! Tokens are the 32-byte contract ids of Soroban contract addresses and
//! fees are 3-byte big-endian integers, so every hop adds 35 bytes and a
//! single-pool path is 67 bytes long.

#![no_std]

mod address;
mod codec;

pub use address::{address_from_contract_id, contract_id};
pub use codec::{
    decode_first_pool, decode_hops, encode, get_first_pool, has_multiple_pools, num_pools,
    reverse, skip_token, validate, Hop,
};

/// Bytes taken by one token id
pub const ADDR_SIZE: u32 = 32;
/// Bytes taken by one fee tier
pub const FEE_SIZE: u32 = 3;
/// Offset of the next token id
pub const NEXT_OFFSET: u32 = ADDR_SIZE + FEE_SIZE;
/// Length of a path holding exactly one pool
pub const POP_OFFSET: u32 = NEXT_OFFSET + ADDR_SIZE;
/// Minimum length of a path holding two or more pools
pub const MULTIPLE_POOLS_MIN_LENGTH: u32 = POP_OFFSET + NEXT_OFFSET;
/// Largest fee representable in 3 bytes
pub const MAX_FEE: u32 = 0x00ff_ffff;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PathError {
    /// Length is not `32 + k * 35` with `k >= 1`, or tokens/fees disagree
    InvalidPath,
    /// Fee does not fit in 3 bytes
    InvalidFee,
    /// Token is an account, not a contract
    NotContractAddress,
}
