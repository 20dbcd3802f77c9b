//! Deterministic pool addressing.
//!
//! A pool is identified by `sha256(factory | token0 | token1 | fee)` where
//! every address is serialized as XDR and the pair is sorted by those bytes,
//! so the id does not depend on the order the caller names the tokens in.

#![no_std]

use soroban_sdk::{contracttype, xdr::ToXdr, Address, Bytes, BytesN, Env};

/// Sorted token pair plus fee tier
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolKey {
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LocatorError {
    /// Both sides of the pair are the same token
    IdenticalTokens,
}

/// Order a token pair by the byte value of its XDR encoding
pub fn sort_tokens(env: &Env, token_a: &Address, token_b: &Address) -> Result<(Address, Address), LocatorError> {
    let a = token_a.clone().to_xdr(env);
    let b = token_b.clone().to_xdr(env);
    if a == b {
        return Err(LocatorError::IdenticalTokens);
    }
    if a < b {
        Ok((token_a.clone(), token_b.clone()))
    } else {
        Ok((token_b.clone(), token_a.clone()))
    }
}

/// Build the pool key for an unordered pair
pub fn pool_key(env: &Env, token_a: &Address, token_b: &Address, fee: u32) -> Result<PoolKey, LocatorError> {
    let (token0, token1) = sort_tokens(env, token_a, token_b)?;
    Ok(PoolKey { token0, token1, fee })
}

/// Pool id of `key` under `factory`
pub fn pool_id_for_key(env: &Env, factory: &Address, key: &PoolKey) -> BytesN<32> {
    let mut preimage = Bytes::new(env);
    preimage.append(&factory.clone().to_xdr(env));
    preimage.append(&key.token0.clone().to_xdr(env));
    preimage.append(&key.token1.clone().to_xdr(env));
    preimage.extend_from_array(&key.fee.to_be_bytes());
    env.crypto().sha256(&preimage).into()
}

/// Pool id for an unordered pair; symmetric in `token_a` / `token_b`
pub fn compute_pool_id(
    env: &Env,
    factory: &Address,
    token_a: &Address,
    token_b: &Address,
    fee: u32,
) -> Result<BytesN<32>, LocatorError> {
    let key = pool_key(env, token_a, token_b, fee)?;
    Ok(pool_id_for_key(env, factory, &key))
}
