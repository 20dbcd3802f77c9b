//! Shared types and cross-contract clients.
//!
//! Contracts in this workspace never link each other's code; they talk
//! through the `contractclient` traits below.

#![no_std]

mod clients;
mod errors;
mod pool_initializer;
mod types;

pub use belugaswap_locator::PoolKey;
pub use clients::*;
pub use errors::PositionManagerError;
pub use pool_initializer::create_and_init_pool_if_needed;
pub use types::*;

/// Ledgers an approval granted for a single call stays valid
pub const APPROVAL_LEDGERS: u32 = 1000;
