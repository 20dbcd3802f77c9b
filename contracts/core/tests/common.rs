#![allow(dead_code)]

use soroban_sdk::{
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    Address, BytesN, Env,
};
use belugaswap_core::{BelugaCore, BelugaCoreClient};

// Test constants
pub const DEFAULT_FEE: u32 = 3000; // 0.30%
pub const DEFAULT_TICK_SPACING: i32 = 60;
pub const PRICE_ONE_X64: u128 = 1u128 << 64; // Price = 1.0
pub const FULL_RANGE_LOWER: i32 = -443580;
pub const FULL_RANGE_UPPER: i32 = 443580;

pub struct TestCore<'a> {
    pub env: Env,
    pub core: BelugaCoreClient<'a>,
    pub admin: Address,
    pub token0: Address,
    pub token1: Address,
}

/// Deploy and initialize the core with two sorted test tokens
pub fn setup_core<'a>() -> TestCore<'a> {
    let env = Env::default();
    env.mock_all_auths();
    env.budget().reset_unlimited();

    let admin = Address::generate(&env);
    let core_id = env.register_contract(None, BelugaCore);
    let core = BelugaCoreClient::new(&env, &core_id);
    core.initialize(&admin);

    let token_a = create_token(&env, &admin);
    let token_b = create_token(&env, &admin);
    let (token0, token1) = sort(&env, token_a, token_b);

    TestCore {
        env,
        core,
        admin,
        token0,
        token1,
    }
}

impl<'a> TestCore<'a> {
    /// Create and initialize the default pool at `sqrt_price_x64`
    pub fn create_pool(&self, sqrt_price_x64: u128) -> BytesN<32> {
        let pool_id = self.core.create_pool(&self.token0, &self.token1, &DEFAULT_FEE);
        self.core.initialize_pool(&pool_id, &sqrt_price_x64);
        pool_id
    }

    /// Fund `user` with both tokens and approve the core for them
    pub fn fund(&self, user: &Address, amount: i128) {
        for token in [&self.token0, &self.token1] {
            mint_tokens(&self.env, token, user, amount);
            approve(&self.env, token, user, &self.core.address, amount);
        }
    }

    /// Add liquidity for a freshly generated provider
    pub fn add_liquidity(&self, pool_id: &BytesN<32>, lower: i32, upper: i32, liquidity: u128) -> Address {
        let provider = Address::generate(&self.env);
        self.fund(&provider, 1_000_000_000_000);
        self.core.mint(&provider, pool_id, &provider, &lower, &upper, &liquidity);
        provider
    }

    pub fn balance(&self, token: &Address, who: &Address) -> i128 {
        TokenClient::new(&self.env, token).balance(who)
    }
}

/// Create a test token
pub fn create_token(env: &Env, admin: &Address) -> Address {
    let token_id = env.register_stellar_asset_contract_v2(admin.clone());
    token_id.address()
}

/// Mint tokens to an address
pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(env, token).mint(to, &amount);
}

pub fn approve(env: &Env, token: &Address, from: &Address, spender: &Address, amount: i128) {
    let expiration = env.ledger().sequence() + 1000;
    TokenClient::new(env, token).approve(from, spender, &amount, &expiration);
}

fn sort(env: &Env, a: Address, b: Address) -> (Address, Address) {
    let (t0, t1) = belugaswap_locator::sort_tokens(env, &a, &b).unwrap();
    (t0, t1)
}
