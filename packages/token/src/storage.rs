use soroban_sdk::{contracttype, Address, Env};

use crate::TokenError;

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
#[derive(Clone)]
pub struct AllowanceDataKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[contracttype]
#[derive(Clone)]
pub enum TokenDataKey {
    Balance(Address),
    Allowance(AllowanceDataKey),
    TotalSupply,
}

// ============================================================
// TTL CONFIG
// ============================================================

const PERSISTENT_TTL: u32 = 6_307_200; // ~1 year

fn extend_ttl(env: &Env, key: &TokenDataKey) {
    env.storage().persistent().extend_ttl(key, PERSISTENT_TTL, PERSISTENT_TTL);
}

// ============================================================
// BALANCES
// ============================================================

pub fn read_balance(env: &Env, id: &Address) -> i128 {
    let key = TokenDataKey::Balance(id.clone());
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(balance) => {
            extend_ttl(env, &key);
            balance
        }
        None => 0,
    }
}

pub(crate) fn write_balance(env: &Env, id: &Address, amount: i128) {
    let key = TokenDataKey::Balance(id.clone());
    env.storage().persistent().set(&key, &amount);
    extend_ttl(env, &key);
}

// ============================================================
// SUPPLY
// ============================================================

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .persistent()
        .get(&TokenDataKey::TotalSupply)
        .unwrap_or(0)
}

pub(crate) fn add_total_supply(env: &Env, delta: i128) {
    let supply = read_total_supply(env) + delta;
    env.storage().persistent().set(&TokenDataKey::TotalSupply, &supply);
    extend_ttl(env, &TokenDataKey::TotalSupply);
}

// ============================================================
// ALLOWANCES
// ============================================================

/// Current allowance; an expired allowance reads as zero
pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = TokenDataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    match env.storage().persistent().get::<_, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => allowance,
        Some(allowance) => AllowanceValue {
            amount: 0,
            expiration_ledger: allowance.expiration_ledger,
        },
        None => AllowanceValue::default(),
    }
}

pub fn write_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), TokenError> {
    if amount > 0 && expiration_ledger < env.ledger().sequence() {
        return Err(TokenError::InvalidExpiration);
    }

    let key = TokenDataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    env.storage().persistent().set(
        &key,
        &AllowanceValue {
            amount,
            expiration_ledger,
        },
    );
    extend_ttl(env, &key);
    Ok(())
}

pub fn spend_allowance(env: &Env, from: &Address, spender: &Address, amount: i128) -> Result<(), TokenError> {
    let allowance = read_allowance(env, from, spender);
    if allowance.amount < amount {
        return Err(TokenError::InsufficientAllowance);
    }
    if amount > 0 {
        write_allowance(
            env,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        )?;
    }
    Ok(())
}
