#![allow(dead_code)]

use soroban_sdk::{
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    Address, BytesN, Env,
};
use belugaswap_core::{BelugaCore, BelugaCoreClient};
use belugaswap_interfaces::MintParams;
use belugaswap_position_manager::{BelugaPositionManager, BelugaPositionManagerClient};

pub const DEFAULT_FEE: u32 = 3000;
pub const PRICE_ONE_X64: u128 = 1u128 << 64;
pub const FULL_RANGE_LOWER: i32 = -443580;
pub const FULL_RANGE_UPPER: i32 = 443580;
pub const DEADLINE: u64 = 1_000;

pub struct TestManager<'a> {
    pub env: Env,
    pub core: BelugaCoreClient<'a>,
    pub manager: BelugaPositionManagerClient<'a>,
    pub admin: Address,
    pub token0: Address,
    pub token1: Address,
}

pub fn setup_manager<'a>() -> TestManager<'a> {
    let env = Env::default();
    env.mock_all_auths();
    env.budget().reset_unlimited();

    let admin = Address::generate(&env);

    let core = BelugaCoreClient::new(&env, &env.register_contract(None, BelugaCore));
    core.initialize(&admin);

    let manager = BelugaPositionManagerClient::new(&env, &env.register_contract(None, BelugaPositionManager));
    manager.initialize(&core.address, &admin);

    let token_a = create_token(&env, &admin);
    let token_b = create_token(&env, &admin);
    let (token0, token1) = belugaswap_locator::sort_tokens(&env, &token_a, &token_b).unwrap();

    TestManager {
        env,
        core,
        manager,
        admin,
        token0,
        token1,
    }
}

impl<'a> TestManager<'a> {
    pub fn create_pool(&self, sqrt_price_x64: u128) -> BytesN<32> {
        self.manager
            .create_and_init_pool_if_needed(&self.token0, &self.token1, &DEFAULT_FEE, &sqrt_price_x64)
    }

    /// Fund `user` and approve the position manager
    pub fn fund(&self, user: &Address, amount: i128) {
        for token in [&self.token0, &self.token1] {
            StellarAssetClient::new(&self.env, token).mint(user, &amount);
            let expiration = self.env.ledger().sequence() + 1000;
            TokenClient::new(&self.env, token).approve(user, &self.manager.address, &amount, &expiration);
        }
    }

    pub fn mint_params(&self, recipient: &Address, amount0: i128, amount1: i128) -> MintParams {
        MintParams {
            token0: self.token0.clone(),
            token1: self.token1.clone(),
            fee: DEFAULT_FEE,
            tick_lower: FULL_RANGE_LOWER,
            tick_upper: FULL_RANGE_UPPER,
            amount0_desired: amount0,
            amount1_desired: amount1,
            amount0_min: 0,
            amount1_min: 0,
            recipient: recipient.clone(),
            deadline: DEADLINE,
        }
    }

    pub fn balance(&self, token: &Address, who: &Address) -> i128 {
        TokenClient::new(&self.env, token).balance(who)
    }

    pub fn allowance(&self, token: &Address, from: &Address, spender: &Address) -> i128 {
        TokenClient::new(&self.env, token).allowance(from, spender)
    }
}

pub fn create_token(env: &Env, admin: &Address) -> Address {
    env.register_stellar_asset_contract_v2(admin.clone()).address()
}
