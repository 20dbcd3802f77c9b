use soroban_sdk::{
    xdr::{FromXdr, ToXdr},
    Address, Bytes, BytesN, Env,
};

use crate::{PathError, ADDR_SIZE};

/// XDR header of `ScVal::Address(ScAddress::Contract(..))`
const CONTRACT_XDR_PREFIX: [u8; 8] = [0, 0, 0, 18, 0, 0, 0, 1];
const CONTRACT_XDR_LEN: u32 = CONTRACT_XDR_PREFIX.len() as u32 + ADDR_SIZE;

/// 32-byte contract id of `address`
pub fn contract_id(env: &Env, address: &Address) -> Result<BytesN<32>, PathError> {
    let xdr = address.clone().to_xdr(env);
    if xdr.len() != CONTRACT_XDR_LEN
        || xdr.slice(0..CONTRACT_XDR_PREFIX.len() as u32) != Bytes::from_array(env, &CONTRACT_XDR_PREFIX)
    {
        return Err(PathError::NotContractAddress);
    }
    BytesN::<32>::try_from(xdr.slice(CONTRACT_XDR_PREFIX.len() as u32..))
        .map_err(|_| PathError::NotContractAddress)
}

/// Contract address whose id is the 32 bytes in `id`
pub fn address_from_contract_id(env: &Env, id: &Bytes) -> Result<Address, PathError> {
    if id.len() != ADDR_SIZE {
        return Err(PathError::InvalidPath);
    }
    let mut xdr = Bytes::from_array(env, &CONTRACT_XDR_PREFIX);
    xdr.append(id);
    Address::from_xdr(env, &xdr).map_err(|_| PathError::InvalidPath)
}
