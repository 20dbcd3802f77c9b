//! Core type definitions

use soroban_sdk::{contracttype, Address, BytesN};

#[contracttype]
#[derive(Clone, Debug)]
pub struct CoreConfig {
    /// Admin allowed to enable fee tiers
    pub admin: Address,
}

/// Full state of one pool
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolState {
    pub token0: Address,
    pub token1: Address,
    /// Fee in pips
    pub fee: u32,
    pub tick_spacing: i32,
    pub max_liquidity_per_tick: u128,
    /// 0 until the pool is initialized
    pub sqrt_price_x64: u128,
    pub tick: i32,
    /// Active liquidity at the current price
    pub liquidity: u128,
    /// Token balances held for this pool (fees included)
    pub reserve0: i128,
    pub reserve1: i128,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Core config
    Config,
    /// Initialization flag
    Initialized,
    /// Tick spacing by fee
    FeeTier(u32),
    /// Pool state by pool id
    Pool(BytesN<32>),
    /// Sorted initialized ticks by pool id
    TickList(BytesN<32>),
    /// Tick info by (pool id, tick)
    Tick(BytesN<32>, i32),
    /// Position liquidity by (pool id, owner, lower, upper)
    Position(BytesN<32>, Address, i32, i32),
}
