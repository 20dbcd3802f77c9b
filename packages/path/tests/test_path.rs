// Path codec tests
// Run with: cargo test -p belugaswap-path --test test_path

use belugaswap_path::*;
use soroban_sdk::{testutils::Address as _, vec, Address, Bytes, Env, String, Vec};

fn token(env: &Env) -> Address {
    env.register_stellar_asset_contract_v2(Address::generate(env)).address()
}

fn tokens(env: &Env, n: u32) -> Vec<Address> {
    let mut out = Vec::new(env);
    for _ in 0..n {
        out.push_back(token(env));
    }
    out
}

#[test]
fn test_single_pool_layout() {
    let env = Env::default();
    let t = tokens(&env, 2);

    let path = encode(&env, &t, &vec![&env, 3000]).unwrap();

    assert_eq!(path.len(), POP_OFFSET);
    assert_eq!(num_pools(&path), Ok(1));
    assert!(!has_multiple_pools(&path));

    // 3000 = 0x000bb8
    assert_eq!(path.get(32), Some(0x00));
    assert_eq!(path.get(33), Some(0x0b));
    assert_eq!(path.get(34), Some(0xb8));

    let hop = decode_first_pool(&env, &path).unwrap();
    assert_eq!(hop.token_in, t.get_unchecked(0));
    assert_eq!(hop.token_out, t.get_unchecked(1));
    assert_eq!(hop.fee, 3000);
}

#[test]
fn test_multi_pool_decode() {
    let env = Env::default();
    let t = tokens(&env, 3);
    let fees = vec![&env, 500, 10000];

    let path = encode(&env, &t, &fees).unwrap();

    assert_eq!(path.len(), 32 + 2 * 35);
    assert_eq!(num_pools(&path), Ok(2));
    assert!(has_multiple_pools(&path));

    let hops = decode_hops(&env, &path).unwrap();
    assert_eq!(hops.len(), 2);
    for i in 0..2 {
        let hop = hops.get_unchecked(i);
        assert_eq!(hop.token_in, t.get_unchecked(i));
        assert_eq!(hop.token_out, t.get_unchecked(i + 1));
        assert_eq!(hop.fee, fees.get_unchecked(i));
    }
}

#[test]
fn test_skip_token_walks_hops() {
    let env = Env::default();
    let t = tokens(&env, 3);

    let path = encode(&env, &t, &vec![&env, 500, 3000]).unwrap();
    let rest = skip_token(&path).unwrap();

    assert_eq!(num_pools(&rest), Ok(1));
    let hop = decode_first_pool(&env, &rest).unwrap();
    assert_eq!(hop.token_in, t.get_unchecked(1));
    assert_eq!(hop.token_out, t.get_unchecked(2));
    assert_eq!(hop.fee, 3000);

    assert_eq!(skip_token(&rest), Err(PathError::InvalidPath));
    assert_eq!(get_first_pool(&path).unwrap(), path.slice(0..POP_OFFSET));
}

#[test]
fn test_reverse_path() {
    let env = Env::default();
    let t = tokens(&env, 3);

    let path = encode(&env, &t, &vec![&env, 500, 3000]).unwrap();
    let reversed = reverse(&env, &path).unwrap();

    let expected = encode(
        &env,
        &vec![&env, t.get_unchecked(2), t.get_unchecked(1), t.get_unchecked(0)],
        &vec![&env, 3000, 500],
    )
    .unwrap();
    assert_eq!(reversed, expected);
    assert_eq!(reverse(&env, &reversed).unwrap(), path);
}

#[test]
fn test_encode_rejects_mismatched_lengths() {
    let env = Env::default();
    let t = tokens(&env, 3);

    assert_eq!(encode(&env, &t, &vec![&env, 3000]), Err(PathError::InvalidPath));
    assert_eq!(
        encode(&env, &vec![&env, t.get_unchecked(0)], &Vec::new(&env)),
        Err(PathError::InvalidPath)
    );
}

#[test]
fn test_encode_rejects_wide_fee() {
    let env = Env::default();
    let t = tokens(&env, 2);

    assert_eq!(encode(&env, &t, &vec![&env, MAX_FEE + 1]), Err(PathError::InvalidFee));
    assert!(encode(&env, &t, &vec![&env, MAX_FEE]).is_ok());
}

#[test]
fn test_encode_rejects_account_address() {
    let env = Env::default();
    let account = Address::from_string(&String::from_str(
        &env,
        "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF",
    ));
    let t = vec![&env, token(&env), account];

    assert_eq!(encode(&env, &t, &vec![&env, 3000]), Err(PathError::NotContractAddress));
}

#[test]
fn test_malformed_lengths() {
    let env = Env::default();
    let t = tokens(&env, 2);
    let path = encode(&env, &t, &vec![&env, 3000]).unwrap();

    let short = path.slice(0..POP_OFFSET - 1);
    assert_eq!(validate(&short), Err(PathError::InvalidPath));
    assert_eq!(num_pools(&short), Err(PathError::InvalidPath));
    assert_eq!(decode_first_pool(&env, &short), Err(PathError::InvalidPath));

    let mut long = path.clone();
    long.push_back(0);
    assert_eq!(validate(&long), Err(PathError::InvalidPath));

    assert_eq!(validate(&Bytes::new(&env)), Err(PathError::InvalidPath));
}

#[test]
fn test_contract_id_round_trip() {
    let env = Env::default();
    let t = token(&env);

    let id = contract_id(&env, &t).unwrap();
    assert_eq!(address_from_contract_id(&env, &id.into()).unwrap(), t);
}
