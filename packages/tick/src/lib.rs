#![no_std]

pub mod types;
pub mod update;
pub mod list;

pub use types::{TickError, TickInfo};
pub use update::{check_ticks, cross_tick, is_valid_tick, max_liquidity_per_tick, update_tick};
pub use list::{insert_tick, next_initialized_tick, remove_tick};

// Re-export from math
pub use belugaswap_math::snap_tick_to_spacing;
