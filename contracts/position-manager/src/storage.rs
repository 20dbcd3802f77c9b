//! Position manager storage operations

use soroban_sdk::Env;
use belugaswap_interfaces::Position;

use crate::types::{DataKey, ManagerConfig};

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

pub fn write_config(env: &Env, config: &ManagerConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
    extend_ttl(env, &DataKey::Config);
}

pub fn read_config(env: &Env) -> Option<ManagerConfig> {
    let key = DataKey::Config;
    let config = env.storage().persistent().get(&key);
    if config.is_some() {
        extend_ttl(env, &key);
    }
    config
}

// ============================================================
// POSITIONS
// ============================================================

/// Reserve the next position id; ids start at 1
pub fn next_token_id(env: &Env) -> u32 {
    let key = DataKey::LastTokenId;
    let id: u32 = env.storage().persistent().get(&key).unwrap_or(0) + 1;
    env.storage().persistent().set(&key, &id);
    extend_ttl(env, &key);
    id
}

pub fn read_position(env: &Env, token_id: u32) -> Option<Position> {
    let key = DataKey::Position(token_id);
    let position = env.storage().persistent().get(&key);
    if position.is_some() {
        extend_ttl(env, &key);
    }
    position
}

pub fn write_position(env: &Env, token_id: u32, position: &Position) {
    let key = DataKey::Position(token_id);
    env.storage().persistent().set(&key, position);
    extend_ttl(env, &key);
}
