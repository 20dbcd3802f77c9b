//! Migrator type definitions

use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug)]
pub struct MigratorConfig {
    /// Core the target pools live in
    pub factory: Address,
    pub wrapped_native: Address,
    pub native_asset: Address,
    pub position_manager: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
}

/// Move liquidity out of a legacy pair into a concentrated position.
///
/// `liquidity_to_migrate` LP shares are taken into account and
/// `percentage_to_migrate` of them are redeemed. `token0`/`token1` must be
/// sorted and name the same two tokens as `pair`, in either order.
#[contracttype]
#[derive(Clone, Debug)]
pub struct MigrateParams {
    pub pair: Address,
    pub liquidity_to_migrate: i128,
    /// 1..=100
    pub percentage_to_migrate: u32,
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub amount0_min: i128,
    pub amount1_min: i128,
    pub recipient: Address,
    pub deadline: u64,
    /// Pay wrapped-native leftovers out as the native asset
    pub refund_as_native: bool,
}
