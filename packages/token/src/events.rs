// Token events, topic layout of the Stellar Asset Contract

use soroban_sdk::{symbol_short, Address, Env};

/// Topics: ("transfer", from, to)
/// Data: amount
pub fn emit_transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("transfer"), from.clone(), to.clone()), amount);
}

/// Topics: ("approve", from, spender)
/// Data: (amount, expiration_ledger)
pub fn emit_approve(env: &Env, from: &Address, spender: &Address, amount: i128, expiration_ledger: u32) {
    env.events().publish(
        (symbol_short!("approve"), from.clone(), spender.clone()),
        (amount, expiration_ledger),
    );
}

/// Topics: ("mint", to)
/// Data: amount
pub fn emit_mint(env: &Env, to: &Address, amount: i128) {
    env.events().publish((symbol_short!("mint"), to.clone()), amount);
}

/// Topics: ("burn", from)
/// Data: amount
pub fn emit_burn(env: &Env, from: &Address, amount: i128) {
    env.events().publish((symbol_short!("burn"), from.clone()), amount);
}
