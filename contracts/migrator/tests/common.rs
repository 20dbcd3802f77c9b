#![allow(dead_code)]

use soroban_sdk::{
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    Address, BytesN, Env,
};
use belugaswap_core::{BelugaCore, BelugaCoreClient};
use belugaswap_legacy_pair::{LegacyPair, LegacyPairClient};
use belugaswap_migrator::{BelugaMigrator, BelugaMigratorClient, MigrateParams};
use belugaswap_position_manager::{BelugaPositionManager, BelugaPositionManagerClient};
use belugaswap_wrapped_native::{WrappedNative, WrappedNativeClient};

pub const FEE: u32 = 3000;
pub const PRICE_ONE_X64: u128 = 1u128 << 64;
/// sqrt(2) in Q64.64
pub const PRICE_TWO_X64: u128 = 26_087_635_650_665_564_424;
/// sqrt(1/2) in Q64.64
pub const PRICE_HALF_X64: u128 = 13_043_817_825_332_782_212;
pub const FULL_RANGE_LOWER: i32 = -443580;
pub const FULL_RANGE_UPPER: i32 = 443580;
pub const DEADLINE: u64 = 1_000;
/// Pair shares a wallet gets for a 10000/10000 deposit
pub const WALLET_SHARES: i128 = 9_000;

pub struct TestMigrator<'a> {
    pub env: Env,
    pub admin: Address,
    pub core: BelugaCoreClient<'a>,
    pub manager: BelugaPositionManagerClient<'a>,
    pub migrator: BelugaMigratorClient<'a>,
    pub wrapped: WrappedNativeClient<'a>,
    pub native: Address,
    pub wallet: Address,
}

pub fn setup_migrator<'a>() -> TestMigrator<'a> {
    let env = Env::default();
    env.mock_all_auths();
    env.budget().reset_unlimited();

    let admin = Address::generate(&env);

    let core = BelugaCoreClient::new(&env, &env.register_contract(None, BelugaCore));
    core.initialize(&admin);

    let manager = BelugaPositionManagerClient::new(&env, &env.register_contract(None, BelugaPositionManager));
    manager.initialize(&core.address, &admin);

    let native = env.register_stellar_asset_contract_v2(admin.clone()).address();
    let wrapped = WrappedNativeClient::new(&env, &env.register_contract(None, WrappedNative));
    wrapped.initialize(&native);

    let migrator = BelugaMigratorClient::new(&env, &env.register_contract(None, BelugaMigrator));
    migrator.initialize(&admin, &core.address, &wrapped.address, &manager.address);

    let wallet = Address::generate(&env);

    TestMigrator {
        env,
        admin,
        core,
        manager,
        migrator,
        wrapped,
        native,
        wallet,
    }
}

impl<'a> TestMigrator<'a> {
    pub fn create_token(&self) -> Address {
        self.env.register_stellar_asset_contract_v2(self.admin.clone()).address()
    }

    /// Give `who` `amount` of `token`, wrapping native for the wrapped token
    pub fn fund(&self, token: &Address, who: &Address, amount: i128) {
        if *token == self.wrapped.address {
            StellarAssetClient::new(&self.env, &self.native).mint(who, &amount);
            let expiration = self.env.ledger().sequence() + 1000;
            TokenClient::new(&self.env, &self.native).approve(who, &self.wrapped.address, &amount, &expiration);
            self.wrapped.deposit(who, &amount);
        } else {
            StellarAssetClient::new(&self.env, token).mint(who, &amount);
        }
    }

    /// Pair over `token_a`/`token_b` seeded with 10000 of each, its
    /// shares held by the wallet and approved to the migrator
    pub fn create_pair(&self, token_a: &Address, token_b: &Address) -> LegacyPairClient<'a> {
        let pair = LegacyPairClient::new(&self.env, &self.env.register_contract(None, LegacyPair));
        pair.initialize(token_a, token_b);

        for token in [token_a, token_b] {
            self.fund(token, &self.wallet, 10_000);
            TokenClient::new(&self.env, token).transfer(&self.wallet, &pair.address, &10_000);
        }
        assert_eq!(pair.mint(&self.wallet), WALLET_SHARES);

        let expiration = self.env.ledger().sequence() + 1000;
        pair.approve(&self.wallet, &self.migrator.address, &WALLET_SHARES, &expiration);
        pair
    }

    pub fn create_pool(&self, token0: &Address, token1: &Address, sqrt_price_x64: u128) -> BytesN<32> {
        self.migrator
            .create_and_init_pool_if_needed(token0, token1, &FEE, &sqrt_price_x64)
    }

    pub fn params(&self, pair: &LegacyPairClient, percentage: u32, refund_as_native: bool) -> MigrateParams {
        MigrateParams {
            pair: pair.address.clone(),
            liquidity_to_migrate: WALLET_SHARES,
            percentage_to_migrate: percentage,
            token0: pair.token0(),
            token1: pair.token1(),
            fee: FEE,
            tick_lower: FULL_RANGE_LOWER,
            tick_upper: FULL_RANGE_UPPER,
            amount0_min: 0,
            amount1_min: 0,
            recipient: self.wallet.clone(),
            deadline: DEADLINE,
            refund_as_native,
        }
    }

    pub fn balance(&self, token: &Address, who: &Address) -> i128 {
        TokenClient::new(&self.env, token).balance(who)
    }

    /// Migrator holds no tokens and no allowance to the position manager
    pub fn assert_migrator_empty(&self, tokens: &[&Address]) {
        for token in tokens {
            let client = TokenClient::new(&self.env, token);
            assert_eq!(client.balance(&self.migrator.address), 0);
            assert_eq!(client.allowance(&self.migrator.address, &self.manager.address), 0);
        }
    }
}
