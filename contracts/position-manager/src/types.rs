//! Position manager type definitions

use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug)]
pub struct ManagerConfig {
    /// Core holding the pools
    pub core: Address,
    pub admin: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    Initialized,
    /// Last issued position id
    LastTokenId,
    Position(u32),
}
