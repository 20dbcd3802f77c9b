//! Wrapped native events

use soroban_sdk::{Address, Env, Symbol};

/// Topics: ("Deposit", dst)
/// Data: amount
pub fn emit_deposit(env: &Env, dst: &Address, amount: i128) {
    env.events()
        .publish((Symbol::new(env, "Deposit"), dst.clone()), amount);
}

/// Topics: ("Withdrawal", src)
/// Data: amount
pub fn emit_withdrawal(env: &Env, src: &Address, amount: i128) {
    env.events()
        .publish((Symbol::new(env, "Withdrawal"), src.clone()), amount);
}
