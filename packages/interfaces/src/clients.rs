use soroban_sdk::{contractclient, Address, BytesN, Env};

use crate::errors::PositionManagerError;
use crate::types::{MintParams, MintResult, Position, Slot0, SwapDelta};
use belugaswap_locator::PoolKey;

/// Singleton concentrated-liquidity core: factory plus every pool
#[contractclient(name = "CoreClient")]
pub trait CoreInterface {
    fn get_pool(env: Env, token_a: Address, token_b: Address, fee: u32) -> Option<BytesN<32>>;

    fn create_pool(env: Env, token_a: Address, token_b: Address, fee: u32) -> BytesN<32>;

    fn initialize_pool(env: Env, pool_id: BytesN<32>, sqrt_price_x64: u128);

    fn slot0(env: Env, pool_id: BytesN<32>) -> Slot0;

    fn pool_key(env: Env, pool_id: BytesN<32>) -> PoolKey;

    fn liquidity(env: Env, pool_id: BytesN<32>) -> u128;

    fn swap(
        env: Env,
        caller: Address,
        pool_id: BytesN<32>,
        recipient: Address,
        zero_for_one: bool,
        amount_specified: i128,
        sqrt_price_limit_x64: u128,
    ) -> SwapDelta;

    fn quote_swap(
        env: Env,
        pool_id: BytesN<32>,
        zero_for_one: bool,
        amount_specified: i128,
        sqrt_price_limit_x64: u128,
    ) -> SwapDelta;

    fn mint(
        env: Env,
        caller: Address,
        pool_id: BytesN<32>,
        owner: Address,
        tick_lower: i32,
        tick_upper: i32,
        liquidity: u128,
    ) -> (i128, i128);

    fn burn(
        env: Env,
        caller: Address,
        pool_id: BytesN<32>,
        tick_lower: i32,
        tick_upper: i32,
        liquidity: u128,
        recipient: Address,
    ) -> (i128, i128);
}

/// Position manager holding core liquidity on behalf of position owners
#[contractclient(name = "PositionManagerClient")]
pub trait PositionManagerInterface {
    fn core(env: Env) -> Address;

    fn create_and_init_pool_if_needed(
        env: Env,
        token_a: Address,
        token_b: Address,
        fee: u32,
        sqrt_price_x64: u128,
    ) -> BytesN<32>;

    fn mint(env: Env, payer: Address, params: MintParams) -> Result<MintResult, PositionManagerError>;

    fn positions(env: Env, token_id: u32) -> Result<Position, PositionManagerError>;
}

/// Token wrapping the native asset 1:1
#[contractclient(name = "WrappedNativeClient")]
pub trait WrappedNativeInterface {
    fn native_asset(env: Env) -> Address;

    fn deposit(env: Env, from: Address, amount: i128);

    fn withdraw(env: Env, from: Address, amount: i128);
}

/// Constant-product pair whose LP share can be redeemed for reserves
#[contractclient(name = "LegacyPairClient")]
pub trait LegacyPairInterface {
    fn token0(env: Env) -> Address;

    fn token1(env: Env) -> Address;

    fn get_reserves(env: Env) -> (i128, i128);

    fn burn(env: Env, to: Address) -> (i128, i128);
}
