use soroban_sdk::{contracttype, Address, BytesN};

// ============================================================
// CORE
// ============================================================

/// Current price state of a pool; `sqrt_price_x64 == 0` until initialized
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Slot0 {
    pub sqrt_price_x64: u128,
    pub tick: i32,
}

impl Slot0 {
    pub fn is_initialized(&self) -> bool {
        self.sqrt_price_x64 != 0
    }
}

/// Token movement of a swap from the pool's point of view.
/// Positive amounts were paid into the pool, negative amounts paid out.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SwapDelta {
    pub amount0: i128,
    pub amount1: i128,
}

// ============================================================
// POSITION MANAGER
// ============================================================

#[contracttype]
#[derive(Clone, Debug)]
pub struct MintParams {
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub amount0_desired: i128,
    pub amount1_desired: i128,
    pub amount0_min: i128,
    pub amount1_min: i128,
    pub recipient: Address,
    /// Ledger timestamp after which the mint is rejected
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintResult {
    pub token_id: u32,
    pub liquidity: u128,
    pub amount0: i128,
    pub amount1: i128,
}

/// Position tracked by the position manager
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    pub owner: Address,
    pub pool_id: BytesN<32>,
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub liquidity: u128,
}
