//! Router events

use soroban_sdk::{Address, Env, Symbol};

/// Emitted when router is initialized
pub fn emit_initialized(env: &Env, factory: &Address, wrapped_native: &Address, admin: &Address) {
    env.events().publish(
        (Symbol::new(env, "RouterInit"),),
        (factory.clone(), wrapped_native.clone(), admin.clone()),
    );
}

/// Emitted on every completed swap, single or multi-hop
pub fn emit_swap(
    env: &Env,
    sender: &Address,
    token_in: &Address,
    token_out: &Address,
    amount_in: i128,
    amount_out: i128,
    hops: u32,
) {
    env.events().publish(
        (Symbol::new(env, "Swap"),),
        (
            sender.clone(),
            token_in.clone(),
            token_out.clone(),
            amount_in,
            amount_out,
            hops,
        ),
    );
}

/// Emitted when the router pays out its balance of a token
pub fn emit_sweep(env: &Env, token: &Address, recipient: &Address, amount: i128, fee: i128) {
    env.events().publish(
        (Symbol::new(env, "Sweep"), token.clone()),
        (recipient.clone(), amount, fee),
    );
}
