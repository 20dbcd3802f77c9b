use soroban_sdk::{contracttype, Address, Bytes, Env, Vec};

use crate::address::{address_from_contract_id, contract_id};
use crate::{PathError, ADDR_SIZE, FEE_SIZE, MAX_FEE, MULTIPLE_POOLS_MIN_LENGTH, NEXT_OFFSET, POP_OFFSET};

/// One pool traversal in path order
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Hop {
    pub token_in: Address,
    pub token_out: Address,
    pub fee: u32,
}

/// Pack `tokens` and `fees` into a path.
///
/// Requires `tokens.len() == fees.len() + 1` and at least one hop.
pub fn encode(env: &Env, tokens: &Vec<Address>, fees: &Vec<u32>) -> Result<Bytes, PathError> {
    if fees.is_empty() || tokens.len() != fees.len() + 1 {
        return Err(PathError::InvalidPath);
    }

    let mut path = Bytes::new(env);
    for (i, token) in tokens.iter().enumerate() {
        path.append(&Bytes::from(contract_id(env, &token)?));
        if let Some(fee) = fees.get(i as u32) {
            if fee > MAX_FEE {
                return Err(PathError::InvalidFee);
            }
            let be = fee.to_be_bytes();
            path.extend_from_slice(&be[1..]);
        }
    }
    Ok(path)
}

/// Check the path length is `32 + k * 35` with `k >= 1`
pub fn validate(path: &Bytes) -> Result<(), PathError> {
    let len = path.len();
    if len < POP_OFFSET || (len - ADDR_SIZE) % NEXT_OFFSET != 0 {
        return Err(PathError::InvalidPath);
    }
    Ok(())
}

/// Number of pools in the path
pub fn num_pools(path: &Bytes) -> Result<u32, PathError> {
    validate(path)?;
    Ok((path.len() - ADDR_SIZE) / NEXT_OFFSET)
}

/// True if the path holds two or more pools
pub fn has_multiple_pools(path: &Bytes) -> bool {
    path.len() >= MULTIPLE_POOLS_MIN_LENGTH
}

/// First `token | fee | token` segment
pub fn get_first_pool(path: &Bytes) -> Result<Bytes, PathError> {
    validate(path)?;
    Ok(path.slice(0..POP_OFFSET))
}

/// Decode the first hop of the path
pub fn decode_first_pool(env: &Env, path: &Bytes) -> Result<Hop, PathError> {
    validate(path)?;
    decode_hop_at(env, path, 0)
}

/// Drop the first token and fee, leaving the path starting at the next hop
pub fn skip_token(path: &Bytes) -> Result<Bytes, PathError> {
    if !has_multiple_pools(path) {
        return Err(PathError::InvalidPath);
    }
    validate(path)?;
    Ok(path.slice(NEXT_OFFSET..))
}

/// Decode every hop of the path in order
pub fn decode_hops(env: &Env, path: &Bytes) -> Result<Vec<Hop>, PathError> {
    let pools = num_pools(path)?;
    let mut hops = Vec::new(env);
    for i in 0..pools {
        hops.push_back(decode_hop_at(env, path, i * NEXT_OFFSET)?);
    }
    Ok(hops)
}

/// The same pools traversed in the opposite direction
pub fn reverse(env: &Env, path: &Bytes) -> Result<Bytes, PathError> {
    let pools = num_pools(path)?;
    let mut reversed = Bytes::new(env);
    for i in (0..=pools).rev() {
        let start = i * NEXT_OFFSET;
        reversed.append(&path.slice(start..start + ADDR_SIZE));
        if i > 0 {
            let fee_start = start - FEE_SIZE;
            reversed.append(&path.slice(fee_start..start));
        }
    }
    Ok(reversed)
}

fn decode_hop_at(env: &Env, path: &Bytes, offset: u32) -> Result<Hop, PathError> {
    let token_in = address_from_contract_id(env, &path.slice(offset..offset + ADDR_SIZE))?;
    let fee = decode_fee(path, offset + ADDR_SIZE)?;
    let out_start = offset + NEXT_OFFSET;
    let token_out = address_from_contract_id(env, &path.slice(out_start..out_start + ADDR_SIZE))?;
    Ok(Hop { token_in, token_out, fee })
}

fn decode_fee(path: &Bytes, offset: u32) -> Result<u32, PathError> {
    let mut fee: u32 = 0;
    for i in 0..FEE_SIZE {
        let byte = path.get(offset + i).ok_or(PathError::InvalidPath)?;
        fee = (fee << 8) | byte as u32;
    }
    Ok(fee)
}
