#![allow(dead_code)]

use soroban_sdk::{
    testutils::{Address as _, Events},
    token::{StellarAssetClient, TokenClient},
    vec, Address, Bytes, BytesN, Env, Symbol, TryFromVal, Val,
};
use belugaswap_core::{BelugaCore, BelugaCoreClient};
use belugaswap_router::{BelugaRouter, BelugaRouterClient};
use belugaswap_wrapped_native::{WrappedNative, WrappedNativeClient};

// Test constants
pub const FEE: u32 = 3000; // 0.30%
pub const PRICE_ONE_X64: u128 = 1u128 << 64;
pub const FULL_RANGE_LOWER: i32 = -443580;
pub const FULL_RANGE_UPPER: i32 = 443580;
pub const POOL_LIQUIDITY: u128 = 1_000_000;
pub const DEADLINE: u64 = 1_000;

pub struct TestRouter<'a> {
    pub env: Env,
    pub admin: Address,
    pub core: BelugaCoreClient<'a>,
    pub router: BelugaRouterClient<'a>,
    pub wrapped: WrappedNativeClient<'a>,
    pub native: Address,
    /// Three plain tokens in ascending order
    pub tokens: [Address; 3],
    pub trader: Address,
}

/// Core, wrapped native and router, with full-range pools at price 1
/// for tokens[0]/tokens[1], tokens[1]/tokens[2] and wrapped/tokens[0]
pub fn setup_router<'a>() -> TestRouter<'a> {
    let env = Env::default();
    env.mock_all_auths();
    env.budget().reset_unlimited();

    let admin = Address::generate(&env);

    let core = BelugaCoreClient::new(&env, &env.register_contract(None, BelugaCore));
    core.initialize(&admin);

    let native = env.register_stellar_asset_contract_v2(admin.clone()).address();
    let wrapped = WrappedNativeClient::new(&env, &env.register_contract(None, WrappedNative));
    wrapped.initialize(&native);

    let router = BelugaRouterClient::new(&env, &env.register_contract(None, BelugaRouter));
    router.initialize(&admin, &core.address, &wrapped.address);

    let mut tokens = [
        create_token(&env, &admin),
        create_token(&env, &admin),
        create_token(&env, &admin),
    ];
    tokens.sort_by(|a, b| {
        let (first, _) = belugaswap_locator::sort_tokens(&env, a, b).unwrap_or((a.clone(), b.clone()));
        if first == *a {
            core::cmp::Ordering::Less
        } else {
            core::cmp::Ordering::Greater
        }
    });

    let trader = Address::generate(&env);

    let t = TestRouter {
        env,
        admin,
        core,
        router,
        wrapped,
        native,
        tokens,
        trader,
    };

    t.create_full_range_pool(&t.tokens[0], &t.tokens[1]);
    t.create_full_range_pool(&t.tokens[1], &t.tokens[2]);
    t.create_full_range_pool(&t.wrapped.address, &t.tokens[0]);
    t
}

impl<'a> TestRouter<'a> {
    pub fn create_full_range_pool(&self, token_a: &Address, token_b: &Address) -> BytesN<32> {
        let pool_id = self.core.create_pool(token_a, token_b, &FEE);
        self.core.initialize_pool(&pool_id, &PRICE_ONE_X64);

        let provider = Address::generate(&self.env);
        for token in [token_a, token_b] {
            self.fund(token, &provider, 10_000_000);
            self.approve(token, &provider, &self.core.address, 10_000_000);
        }
        self.core.mint(
            &provider,
            &pool_id,
            &provider,
            &FULL_RANGE_LOWER,
            &FULL_RANGE_UPPER,
            &POOL_LIQUIDITY,
        );
        pool_id
    }

    /// Give `to` some `token`; wrapped native is minted by depositing native
    pub fn fund(&self, token: &Address, to: &Address, amount: i128) {
        if *token == self.wrapped.address {
            StellarAssetClient::new(&self.env, &self.native).mint(to, &amount);
            self.approve(&self.native, to, &self.wrapped.address, amount);
            self.wrapped.deposit(to, &amount);
        } else {
            StellarAssetClient::new(&self.env, token).mint(to, &amount);
        }
    }

    pub fn approve(&self, token: &Address, from: &Address, spender: &Address, amount: i128) {
        let expiration = self.env.ledger().sequence() + 1000;
        TokenClient::new(&self.env, token).approve(from, spender, &amount, &expiration);
    }

    pub fn balance(&self, token: &Address, who: &Address) -> i128 {
        TokenClient::new(&self.env, token).balance(who)
    }

    pub fn path(&self, tokens: &[&Address]) -> Bytes {
        let mut addresses = vec![&self.env];
        let mut fees = vec![&self.env];
        for (i, token) in tokens.iter().enumerate() {
            addresses.push_back((*token).clone());
            if i > 0 {
                fees.push_back(FEE);
            }
        }
        belugaswap_path::encode(&self.env, &addresses, &fees).unwrap()
    }

    /// `(token, from, to, amount)` of every `transfer` event emitted by
    /// one of `tokens`, in emission order
    pub fn transfers(&self, tokens: &[&Address]) -> std::vec::Vec<(Address, Address, Address, i128)> {
        let name = Symbol::new(&self.env, "transfer");
        let mut found = std::vec::Vec::new();
        for (contract, topics, data) in self.env.events().all().iter() {
            if !tokens.contains(&&contract) || !self.topic_is(&topics.get_unchecked(0), &name) {
                continue;
            }
            let from = Address::try_from_val(&self.env, &topics.get_unchecked(1)).unwrap();
            let to = Address::try_from_val(&self.env, &topics.get_unchecked(2)).unwrap();
            let amount = i128::try_from_val(&self.env, &data).unwrap();
            found.push((contract, from, to, amount));
        }
        found
    }

    /// `(account, amount)` of every `event` published by the wrapped-native token
    pub fn wrapped_events(&self, event: &str) -> std::vec::Vec<(Address, i128)> {
        let name = Symbol::new(&self.env, event);
        let mut found = std::vec::Vec::new();
        for (contract, topics, data) in self.env.events().all().iter() {
            if contract != self.wrapped.address || !self.topic_is(&topics.get_unchecked(0), &name) {
                continue;
            }
            let account = Address::try_from_val(&self.env, &topics.get_unchecked(1)).unwrap();
            found.push((account, i128::try_from_val(&self.env, &data).unwrap()));
        }
        found
    }

    /// Data of every router `Swap` event:
    /// `(sender, token_in, token_out, amount_in, amount_out, hops)`
    pub fn swap_events(&self) -> std::vec::Vec<(Address, Address, Address, i128, i128, u32)> {
        let name = Symbol::new(&self.env, "Swap");
        let mut found = std::vec::Vec::new();
        for (contract, topics, data) in self.env.events().all().iter() {
            if contract == self.router.address && self.topic_is(&topics.get_unchecked(0), &name) {
                found.push(<(Address, Address, Address, i128, i128, u32)>::try_from_val(&self.env, &data).unwrap());
            }
        }
        found
    }

    fn topic_is(&self, topic: &Val, name: &Symbol) -> bool {
        matches!(Symbol::try_from_val(&self.env, topic), Ok(symbol) if symbol == *name)
    }

    /// The router must end every call empty-handed
    pub fn assert_router_empty(&self) {
        let router = &self.router.address;
        for token in self.tokens.iter() {
            assert_eq!(self.balance(token, router), 0);
            assert_eq!(TokenClient::new(&self.env, token).allowance(router, &self.core.address), 0);
        }
        assert_eq!(self.balance(&self.wrapped.address, router), 0);
        assert_eq!(self.balance(&self.native, router), 0);
        assert_eq!(
            TokenClient::new(&self.env, &self.wrapped.address).allowance(router, &self.core.address),
            0
        );
    }
}

pub fn create_token(env: &Env, admin: &Address) -> Address {
    env.register_stellar_asset_contract_v2(admin.clone()).address()
}
