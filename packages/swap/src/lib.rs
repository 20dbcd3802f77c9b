#![no_std]

pub mod types;
pub mod engine;

pub use types::{default_price_limit, SwapError, SwapResult, SwapState};
pub use engine::{engine_swap, quote_swap};
