//! Migrator storage operations

use soroban_sdk::Env;

use crate::types::{DataKey, MigratorConfig};

const INSTANCE_TTL: u32 = 6_307_200; // ~1 year
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL / 2;

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn write_config(env: &Env, config: &MigratorConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    env.storage().instance().extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL);
}

pub fn read_config(env: &Env) -> Option<MigratorConfig> {
    let config = env.storage().instance().get(&DataKey::Config)?;
    env.storage().instance().extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL);
    Some(config)
}
