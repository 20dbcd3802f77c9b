mod common;

use common::*;
use soroban_sdk::{testutils::Address as _, vec, Address};
use belugaswap_router::{ExactInputParams, ExactInputSingleParams, RouterCall, RouterError};

#[test]
fn test_initialize_and_getters() {
    let t = setup_router();
    assert_eq!(t.router.factory(), t.core.address);
    assert_eq!(t.router.wrapped_native(), t.wrapped.address);
    assert_eq!(
        t.router.try_initialize(&t.admin, &t.core.address, &t.wrapped.address),
        Err(Ok(RouterError::AlreadyInitialized))
    );
}

#[test]
fn test_error_reasons() {
    assert_eq!(RouterError::InsufficientOutputAmount.reason(), "Too little received");
    assert_eq!(RouterError::ExcessiveInputAmount.reason(), "Too much requested");
    assert_eq!(RouterError::Expired.reason(), "Transaction too old");
}

#[test]
fn test_sweep_token() {
    let t = setup_router();
    let recipient = Address::generate(&t.env);
    t.fund(&t.tokens[0], &t.router.address, 100);

    assert_eq!(
        t.router.try_sweep_token(&t.tokens[0], &101, &recipient),
        Err(Ok(RouterError::InsufficientToken))
    );
    assert_eq!(t.router.sweep_token(&t.tokens[0], &100, &recipient), 100);
    assert_eq!(t.balance(&t.tokens[0], &recipient), 100);
    t.assert_router_empty();
}

#[test]
fn test_sweep_token_with_fee() {
    let t = setup_router();
    let recipient = Address::generate(&t.env);
    let fee_recipient = Address::generate(&t.env);
    t.fund(&t.tokens[0], &t.router.address, 100);

    t.router.sweep_token_with_fee(&t.tokens[0], &100, &recipient, &100, &fee_recipient);

    assert_eq!(t.balance(&t.tokens[0], &recipient), 99);
    assert_eq!(t.balance(&t.tokens[0], &fee_recipient), 1);
    t.assert_router_empty();
}

#[test]
fn test_fee_bips_bounds() {
    let t = setup_router();
    let recipient = Address::generate(&t.env);
    t.fund(&t.tokens[0], &t.router.address, 100);

    assert_eq!(
        t.router.try_sweep_token_with_fee(&t.tokens[0], &0, &recipient, &0, &recipient),
        Err(Ok(RouterError::InvalidFee))
    );
    assert_eq!(
        t.router.try_sweep_token_with_fee(&t.tokens[0], &0, &recipient, &101, &recipient),
        Err(Ok(RouterError::InvalidFee))
    );
    assert_eq!(
        t.router.try_unwrap_native_asset_with_fee(&0, &recipient, &101, &recipient),
        Err(Ok(RouterError::InvalidFee))
    );
}

#[test]
fn test_multicall_swap_then_sweep() {
    let t = setup_router();
    t.fund(&t.tokens[0], &t.trader, 100);

    let swap = ExactInputSingleParams {
        token_in: t.tokens[0].clone(),
        token_out: t.tokens[1].clone(),
        fee: FEE,
        recipient: t.router.address.clone(),
        deadline: DEADLINE,
        amount_in: 5,
        amount_out_minimum: 0,
        sqrt_price_limit_x64: 0,
    };
    let calls = vec![
        &t.env,
        RouterCall::ExactInputSingle(swap),
        RouterCall::SweepToken(t.tokens[1].clone(), 3, t.trader.clone()),
    ];
    let results = t.router.multicall(&t.trader, &0, &calls);

    assert_eq!(results.len(), 2);
    assert_eq!(results.get(0), Some(3));
    assert_eq!(t.balance(&t.tokens[1], &t.trader), 3);
    t.assert_router_empty();
}

#[test]
fn test_multicall_failure_rolls_back_everything() {
    let t = setup_router();
    t.fund(&t.tokens[0], &t.trader, 100);

    let first = ExactInputSingleParams {
        token_in: t.tokens[0].clone(),
        token_out: t.tokens[1].clone(),
        fee: FEE,
        recipient: t.trader.clone(),
        deadline: DEADLINE,
        amount_in: 3,
        amount_out_minimum: 1,
        sqrt_price_limit_x64: 0,
    };
    let second = ExactInputParams {
        path: t.path(&[&t.tokens[0], &t.tokens[1], &t.tokens[2]]),
        recipient: t.trader.clone(),
        deadline: DEADLINE,
        amount_in: 5,
        amount_out_minimum: 5,
    };
    let calls = vec![
        &t.env,
        RouterCall::ExactInputSingle(first),
        RouterCall::ExactInput(second),
    ];

    assert_eq!(
        t.router.try_multicall(&t.trader, &0, &calls),
        Err(Ok(RouterError::InsufficientOutputAmount))
    );
    assert_eq!(t.balance(&t.tokens[0], &t.trader), 100);
    assert_eq!(t.balance(&t.tokens[1], &t.trader), 0);
}
