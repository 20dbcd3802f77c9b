//! Core storage operations

use soroban_sdk::{Address, BytesN, Env, Vec};
use belugaswap_tick::TickInfo;

use crate::types::{CoreConfig, DataKey, PoolState};

// ============================================================
// TTL CONFIG
// ============================================================

const PERSISTENT_TTL: u32 = 6_307_200; // ~1 year

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(key, PERSISTENT_TTL, PERSISTENT_TTL);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().persistent().set(&DataKey::Initialized, &true);
    extend_ttl(env, &DataKey::Initialized);
}

// ============================================================
// CONFIG
// ============================================================

pub fn write_config(env: &Env, config: &CoreConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
    extend_ttl(env, &DataKey::Config);
}

pub fn read_config(env: &Env) -> Option<CoreConfig> {
    let key = DataKey::Config;
    let config = env.storage().persistent().get(&key);
    if config.is_some() {
        extend_ttl(env, &key);
    }
    config
}

// ============================================================
// FEE TIERS
// ============================================================

pub fn write_fee_tier(env: &Env, fee: u32, tick_spacing: i32) {
    let key = DataKey::FeeTier(fee);
    env.storage().persistent().set(&key, &tick_spacing);
    extend_ttl(env, &key);
}

pub fn read_fee_tier(env: &Env, fee: u32) -> Option<i32> {
    env.storage().persistent().get(&DataKey::FeeTier(fee))
}

// ============================================================
// POOLS
// ============================================================

pub fn has_pool(env: &Env, pool_id: &BytesN<32>) -> bool {
    env.storage().persistent().has(&DataKey::Pool(pool_id.clone()))
}

pub fn read_pool(env: &Env, pool_id: &BytesN<32>) -> Option<PoolState> {
    let key = DataKey::Pool(pool_id.clone());
    let pool = env.storage().persistent().get(&key);
    if pool.is_some() {
        extend_ttl(env, &key);
    }
    pool
}

pub fn write_pool(env: &Env, pool_id: &BytesN<32>, pool: &PoolState) {
    let key = DataKey::Pool(pool_id.clone());
    env.storage().persistent().set(&key, pool);
    extend_ttl(env, &key);
}

// ============================================================
// TICKS
// ============================================================

pub fn read_tick_list(env: &Env, pool_id: &BytesN<32>) -> Vec<i32> {
    env.storage()
        .persistent()
        .get(&DataKey::TickList(pool_id.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn write_tick_list(env: &Env, pool_id: &BytesN<32>, ticks: &Vec<i32>) {
    let key = DataKey::TickList(pool_id.clone());
    env.storage().persistent().set(&key, ticks);
    extend_ttl(env, &key);
}

pub fn read_tick(env: &Env, pool_id: &BytesN<32>, tick: i32) -> TickInfo {
    env.storage()
        .persistent()
        .get(&DataKey::Tick(pool_id.clone(), tick))
        .unwrap_or_default()
}

pub fn write_tick(env: &Env, pool_id: &BytesN<32>, tick: i32, info: &TickInfo) {
    let key = DataKey::Tick(pool_id.clone(), tick);
    if info.initialized {
        env.storage().persistent().set(&key, info);
        extend_ttl(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
}

// ============================================================
// POSITIONS
// ============================================================

pub fn read_position(env: &Env, pool_id: &BytesN<32>, owner: &Address, lower: i32, upper: i32) -> u128 {
    env.storage()
        .persistent()
        .get(&DataKey::Position(pool_id.clone(), owner.clone(), lower, upper))
        .unwrap_or(0)
}

pub fn write_position(env: &Env, pool_id: &BytesN<32>, owner: &Address, lower: i32, upper: i32, liquidity: u128) {
    let key = DataKey::Position(pool_id.clone(), owner.clone(), lower, upper);
    if liquidity == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &liquidity);
        extend_ttl(env, &key);
    }
}
