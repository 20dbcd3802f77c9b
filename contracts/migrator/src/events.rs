//! Migrator events

use soroban_sdk::{Address, Env, Symbol};

pub fn emit_initialized(env: &Env, factory: &Address, position_manager: &Address, admin: &Address) {
    env.events().publish(
        (Symbol::new(env, "MigratorInit"),),
        (factory.clone(), position_manager.clone(), admin.clone()),
    );
}

/// Emitted once a pair position has been moved into the core
pub fn emit_migrate(
    env: &Env,
    pair: &Address,
    recipient: &Address,
    token_id: u32,
    liquidity: u128,
    refund0: i128,
    refund1: i128,
) {
    env.events().publish(
        (Symbol::new(env, "Migrate"), pair.clone()),
        (recipient.clone(), token_id, liquidity, refund0, refund1),
    );
}
