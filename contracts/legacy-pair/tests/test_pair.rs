use soroban_sdk::{
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    Address, Env,
};
use belugaswap_legacy_pair::{LegacyPair, LegacyPairClient, PairError, MINIMUM_LIQUIDITY};

struct Setup<'a> {
    env: Env,
    pair: LegacyPairClient<'a>,
    token0: Address,
    token1: Address,
}

fn setup<'a>() -> Setup<'a> {
    let env = Env::default();
    env.mock_all_auths();
    env.budget().reset_unlimited();

    let admin = Address::generate(&env);
    let token_a = env.register_stellar_asset_contract_v2(admin.clone()).address();
    let token_b = env.register_stellar_asset_contract_v2(admin).address();

    let pair = LegacyPairClient::new(&env, &env.register_contract(None, LegacyPair));
    pair.initialize(&token_a, &token_b);
    let token0 = pair.token0();
    let token1 = pair.token1();

    Setup { env, pair, token0, token1 }
}

impl<'a> Setup<'a> {
    fn deposit(&self, amount0: i128, amount1: i128) {
        StellarAssetClient::new(&self.env, &self.token0).mint(&self.pair.address, &amount0);
        StellarAssetClient::new(&self.env, &self.token1).mint(&self.pair.address, &amount1);
    }

    fn balance(&self, token: &Address, who: &Address) -> i128 {
        TokenClient::new(&self.env, token).balance(who)
    }
}

#[test]
fn test_tokens_are_sorted() {
    let s = setup();
    let (t0, t1) = belugaswap_locator::sort_tokens(&s.env, &s.token1, &s.token0).unwrap();
    assert_eq!((t0, t1), (s.token0.clone(), s.token1.clone()));
    assert_eq!(s.pair.try_initialize(&s.token0, &s.token1), Err(Ok(PairError::AlreadyInitialized)));
}

#[test]
fn test_first_mint_locks_minimum_liquidity() {
    let s = setup();
    let provider = Address::generate(&s.env);
    s.deposit(10_000, 10_000);

    let liquidity = s.pair.mint(&provider);

    assert_eq!(liquidity, 9_000);
    assert_eq!(s.pair.balance(&provider), 9_000);
    assert_eq!(s.pair.total_supply(), 10_000);
    assert_eq!(s.pair.get_reserves(), (10_000, 10_000));
    assert_eq!(MINIMUM_LIQUIDITY, 1_000);
}

#[test]
fn test_first_mint_too_small() {
    let s = setup();
    s.deposit(1_000, 1_000);
    assert_eq!(
        s.pair.try_mint(&Address::generate(&s.env)),
        Err(Ok(PairError::InsufficientLiquidityMinted))
    );
}

#[test]
fn test_second_mint_is_proportional() {
    let s = setup();
    let provider = Address::generate(&s.env);
    s.deposit(10_000, 40_000);
    assert_eq!(s.pair.mint(&provider), 19_000);

    s.deposit(1_000, 8_000);
    assert_eq!(s.pair.mint(&provider), 2_000);
    assert_eq!(s.pair.get_reserves(), (11_000, 48_000));
}

#[test]
fn test_burn_redeems_pair_held_shares() {
    let s = setup();
    let provider = Address::generate(&s.env);
    let recipient = Address::generate(&s.env);
    s.deposit(10_000, 10_000);
    s.pair.mint(&provider);

    s.pair.transfer(&provider, &s.pair.address, &9_000);
    let (amount0, amount1) = s.pair.burn(&recipient);

    assert_eq!((amount0, amount1), (9_000, 9_000));
    assert_eq!(s.balance(&s.token0, &recipient), 9_000);
    assert_eq!(s.balance(&s.token1, &recipient), 9_000);
    assert_eq!(s.pair.total_supply(), 1_000);
    assert_eq!(s.pair.get_reserves(), (1_000, 1_000));
    assert_eq!(s.pair.balance(&s.pair.address), 0);
}

#[test]
fn test_burn_without_shares_fails() {
    let s = setup();
    s.deposit(10_000, 10_000);
    s.pair.mint(&Address::generate(&s.env));

    assert_eq!(
        s.pair.try_burn(&Address::generate(&s.env)),
        Err(Ok(PairError::InsufficientLiquidityBurned))
    );
}

#[test]
fn test_share_allowance_flow() {
    let s = setup();
    let provider = Address::generate(&s.env);
    let spender = Address::generate(&s.env);
    s.deposit(10_000, 10_000);
    s.pair.mint(&provider);

    s.pair.approve(&provider, &spender, &4_000, &(s.env.ledger().sequence() + 100));
    assert_eq!(s.pair.allowance(&provider, &spender), 4_000);

    s.pair.transfer_from(&spender, &provider, &s.pair.address, &4_000);
    assert_eq!(s.pair.allowance(&provider, &spender), 0);
    assert_eq!(s.pair.balance(&provider), 5_000);

    assert_eq!(
        s.pair.try_transfer_from(&spender, &provider, &spender, &1),
        Err(Ok(PairError::InsufficientAllowance))
    );
}
