//! Legacy pair storage operations

use soroban_sdk::{contracttype, Address, Env};

const INSTANCE_TTL: u32 = 6_307_200; // ~1 year

#[contracttype]
#[derive(Clone, Debug)]
pub struct PairConfig {
    pub token0: Address,
    pub token1: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    /// (reserve0, reserve1) as of the last mint or burn
    Reserves,
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn write_config(env: &Env, config: &PairConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    env.storage().instance().extend_ttl(INSTANCE_TTL, INSTANCE_TTL);
}

pub fn read_config(env: &Env) -> Option<PairConfig> {
    let config = env.storage().instance().get(&DataKey::Config);
    if config.is_some() {
        env.storage().instance().extend_ttl(INSTANCE_TTL, INSTANCE_TTL);
    }
    config
}

pub fn read_reserves(env: &Env) -> (i128, i128) {
    env.storage().instance().get(&DataKey::Reserves).unwrap_or((0, 0))
}

pub fn write_reserves(env: &Env, reserve0: i128, reserve1: i128) {
    env.storage().instance().set(&DataKey::Reserves, &(reserve0, reserve1));
}
