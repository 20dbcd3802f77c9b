use soroban_sdk::{Address, BytesN, Env};

use crate::clients::CoreClient;

/// Make sure the pool for `(token_a, token_b, fee)` exists and has a price.
///
/// Creates the pool if absent and initializes it at `sqrt_price_x64` if it
/// has no price yet. An already initialized pool is left untouched.
/// Returns the pool id.
pub fn create_and_init_pool_if_needed(
    env: &Env,
    core: &Address,
    token_a: &Address,
    token_b: &Address,
    fee: u32,
    sqrt_price_x64: u128,
) -> BytesN<32> {
    let core = CoreClient::new(env, core);

    let pool_id = match core.get_pool(token_a, token_b, &fee) {
        Some(pool_id) => pool_id,
        None => core.create_pool(token_a, token_b, &fee),
    };

    if !core.slot0(&pool_id).is_initialized() {
        core.initialize_pool(&pool_id, &sqrt_price_x64);
    }

    pool_id
}
