//! Position manager events

use soroban_sdk::{Address, Env, Symbol};

/// Emitted when the position manager is initialized
pub fn emit_initialized(env: &Env, core: &Address, admin: &Address) {
    env.events().publish(
        (Symbol::new(env, "PositionManagerInit"),),
        (core.clone(), admin.clone()),
    );
}

/// Emitted when liquidity is added to a position
pub fn emit_increase_liquidity(env: &Env, token_id: u32, liquidity: u128, amount0: i128, amount1: i128) {
    env.events().publish(
        (Symbol::new(env, "IncreaseLiquidity"), token_id),
        (liquidity, amount0, amount1),
    );
}

/// Emitted when liquidity is withdrawn from a position
pub fn emit_decrease_liquidity(env: &Env, token_id: u32, liquidity: u128, amount0: i128, amount1: i128) {
    env.events().publish(
        (Symbol::new(env, "DecreaseLiquidity"), token_id),
        (liquidity, amount0, amount1),
    );
}
