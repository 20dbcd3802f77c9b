//! Legacy pair events

use soroban_sdk::{Address, Env, Symbol};

/// Topics: ("PairMint", to)
/// Data: (amount0, amount1, liquidity)
pub fn emit_mint(env: &Env, to: &Address, amount0: i128, amount1: i128, liquidity: i128) {
    env.events()
        .publish((Symbol::new(env, "PairMint"), to.clone()), (amount0, amount1, liquidity));
}

/// Topics: ("PairBurn", to)
/// Data: (amount0, amount1, liquidity)
pub fn emit_burn(env: &Env, to: &Address, amount0: i128, amount1: i128, liquidity: i128) {
    env.events()
        .publish((Symbol::new(env, "PairBurn"), to.clone()), (amount0, amount1, liquidity));
}

/// Topics: ("Sync",)
/// Data: (reserve0, reserve1)
pub fn emit_sync(env: &Env, reserve0: i128, reserve1: i128) {
    env.events()
        .publish((Symbol::new(env, "Sync"),), (reserve0, reserve1));
}
