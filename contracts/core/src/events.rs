//! Core events

use soroban_sdk::{Address, BytesN, Env, Symbol};

/// Topics: ("CoreInit",)
/// Data: admin
pub fn emit_initialized(env: &Env, admin: &Address) {
    env.events()
        .publish((Symbol::new(env, "CoreInit"),), admin.clone());
}

/// Topics: ("FeeTierEnabled",)
/// Data: (fee, tick_spacing)
pub fn emit_fee_tier_enabled(env: &Env, fee: u32, tick_spacing: i32) {
    env.events()
        .publish((Symbol::new(env, "FeeTierEnabled"),), (fee, tick_spacing));
}

/// Topics: ("PoolCreated",)
/// Data: (pool_id, token0, token1, fee, tick_spacing)
pub fn emit_pool_created(
    env: &Env,
    pool_id: &BytesN<32>,
    token0: &Address,
    token1: &Address,
    fee: u32,
    tick_spacing: i32,
) {
    env.events().publish(
        (Symbol::new(env, "PoolCreated"),),
        (pool_id.clone(), token0.clone(), token1.clone(), fee, tick_spacing),
    );
}

/// Topics: ("PoolInit",)
/// Data: (pool_id, sqrt_price_x64, tick)
pub fn emit_pool_initialized(env: &Env, pool_id: &BytesN<32>, sqrt_price_x64: u128, tick: i32) {
    env.events().publish(
        (Symbol::new(env, "PoolInit"),),
        (pool_id.clone(), sqrt_price_x64, tick),
    );
}

/// Topics: ("Swap",)
/// Data: (pool_id, caller, recipient, amount0, amount1, sqrt_price_x64, liquidity, tick)
pub fn emit_swap(
    env: &Env,
    pool_id: &BytesN<32>,
    caller: &Address,
    recipient: &Address,
    amount0: i128,
    amount1: i128,
    sqrt_price_x64: u128,
    liquidity: u128,
    tick: i32,
) {
    env.events().publish(
        (Symbol::new(env, "Swap"),),
        (
            pool_id.clone(),
            caller.clone(),
            recipient.clone(),
            amount0,
            amount1,
            sqrt_price_x64,
            liquidity,
            tick,
        ),
    );
}

/// Topics: ("Mint",)
/// Data: (pool_id, owner, tick_lower, tick_upper, liquidity, amount0, amount1)
pub fn emit_mint(
    env: &Env,
    pool_id: &BytesN<32>,
    owner: &Address,
    tick_lower: i32,
    tick_upper: i32,
    liquidity: u128,
    amount0: i128,
    amount1: i128,
) {
    env.events().publish(
        (Symbol::new(env, "Mint"),),
        (pool_id.clone(), owner.clone(), tick_lower, tick_upper, liquidity, amount0, amount1),
    );
}

/// Topics: ("Burn",)
/// Data: (pool_id, owner, tick_lower, tick_upper, liquidity, amount0, amount1)
pub fn emit_burn(
    env: &Env,
    pool_id: &BytesN<32>,
    owner: &Address,
    tick_lower: i32,
    tick_upper: i32,
    liquidity: u128,
    amount0: i128,
    amount1: i128,
) {
    env.events().publish(
        (Symbol::new(env, "Burn"),),
        (pool_id.clone(), owner.clone(), tick_lower, tick_upper, liquidity, amount0, amount1),
    );
}
