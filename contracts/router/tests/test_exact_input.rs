mod common;

use common::*;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::Address;
use belugaswap_router::{ExactInputParams, ExactInputSingleParams, RouterError};

fn single_params(t: &TestRouter, amount_in: i128, amount_out_minimum: i128) -> ExactInputSingleParams {
    ExactInputSingleParams {
        token_in: t.tokens[0].clone(),
        token_out: t.tokens[1].clone(),
        fee: FEE,
        recipient: t.trader.clone(),
        deadline: DEADLINE,
        amount_in,
        amount_out_minimum,
        sqrt_price_limit_x64: 0,
    }
}

#[test]
fn test_exact_input_single_zero_for_one() {
    let t = setup_router();
    t.fund(&t.tokens[0], &t.trader, 100);

    let amount_out = t.router.exact_input_single(&t.trader, &0, &single_params(&t, 3, 1));

    assert_eq!(amount_out, 1);
    assert_eq!(t.balance(&t.tokens[0], &t.trader), 97);
    assert_eq!(t.balance(&t.tokens[1], &t.trader), 1);
    t.assert_router_empty();
}

#[test]
fn test_exact_input_single_one_for_zero() {
    let t = setup_router();
    t.fund(&t.tokens[1], &t.trader, 100);

    let mut params = single_params(&t, 3, 1);
    params.token_in = t.tokens[1].clone();
    params.token_out = t.tokens[0].clone();
    let amount_out = t.router.exact_input_single(&t.trader, &0, &params);

    assert_eq!(amount_out, 1);
    assert_eq!(t.balance(&t.tokens[0], &t.trader), 1);
    t.assert_router_empty();
}

#[test]
fn test_exact_input_single_minimum_output() {
    let t = setup_router();
    t.fund(&t.tokens[0], &t.trader, 100);

    let result = t.router.try_exact_input_single(&t.trader, &0, &single_params(&t, 3, 2));
    assert_eq!(result, Err(Ok(RouterError::InsufficientOutputAmount)));
    assert_eq!(t.balance(&t.tokens[0], &t.trader), 100);
}

#[test]
fn test_exact_input_single_partial_fill_refunds() {
    let t = setup_router();
    t.fund(&t.tokens[0], &t.trader, 1_000_000);

    // Price limit just below 1.0 stops the swap early
    let mut params = single_params(&t, 1_000_000, 0);
    params.sqrt_price_limit_x64 = PRICE_ONE_X64 - (PRICE_ONE_X64 / 1000);
    let amount_out = t.router.exact_input_single(&t.trader, &0, &params);

    let spent = 1_000_000 - t.balance(&t.tokens[0], &t.trader);
    assert!(spent > 0 && spent < 1_000_000);
    assert!(amount_out > 0 && amount_out < spent);
    // The swap event reports what the pool took, not what was offered
    let (_, _, _, reported_in, reported_out, hops) = t.swap_events().pop().unwrap();
    assert_eq!((reported_in, reported_out, hops), (spent, amount_out, 1));
    t.assert_router_empty();
}

#[test]
fn test_exact_input_two_hops() {
    let t = setup_router();
    t.fund(&t.tokens[0], &t.trader, 100);

    let params = ExactInputParams {
        path: t.path(&[&t.tokens[0], &t.tokens[1], &t.tokens[2]]),
        recipient: t.trader.clone(),
        deadline: DEADLINE,
        amount_in: 5,
        amount_out_minimum: 1,
    };
    let amount_out = t.router.exact_input(&t.trader, &0, &params);

    assert_eq!(amount_out, 1);
    assert_eq!(t.balance(&t.tokens[0], &t.trader), 95);
    assert_eq!(t.balance(&t.tokens[2], &t.trader), 1);
    // The middle token never reaches the trader
    assert_eq!(t.balance(&t.tokens[1], &t.trader), 0);
    t.assert_router_empty();
}

#[test]
fn test_exact_input_two_hops_transfer_events() {
    let t = setup_router();
    t.fund(&t.tokens[0], &t.trader, 100);

    let params = ExactInputParams {
        path: t.path(&[&t.tokens[0], &t.tokens[1], &t.tokens[2]]),
        recipient: t.trader.clone(),
        deadline: DEADLINE,
        amount_in: 5,
        amount_out_minimum: 1,
    };
    t.router.exact_input(&t.trader, &0, &params);

    let transfers = t.transfers(&[&t.tokens[0], &t.tokens[1], &t.tokens[2]]);
    let (router, core, trader) = (&t.router.address, &t.core.address, &t.trader);
    let expected = [
        (&t.tokens[0], trader, router, 5),
        (&t.tokens[0], router, core, 5),
        (&t.tokens[1], core, router, 3),
        (&t.tokens[1], router, core, 3),
        (&t.tokens[2], core, trader, 1),
    ];
    assert!(transfers.len() >= expected.len());
    let swap_transfers = &transfers[transfers.len() - expected.len()..];
    for ((token, from, to, amount), (e_token, e_from, e_to, e_amount)) in swap_transfers.iter().zip(expected) {
        assert_eq!((token, from, to, *amount), (e_token, e_from, e_to, e_amount));
    }
}

#[test]
fn test_exact_input_two_hops_reverse_direction() {
    let t = setup_router();
    t.fund(&t.tokens[2], &t.trader, 100);

    let params = ExactInputParams {
        path: t.path(&[&t.tokens[2], &t.tokens[1], &t.tokens[0]]),
        recipient: t.trader.clone(),
        deadline: DEADLINE,
        amount_in: 5,
        amount_out_minimum: 1,
    };
    assert_eq!(t.router.exact_input(&t.trader, &0, &params), 1);
    assert_eq!(t.balance(&t.tokens[0], &t.trader), 1);
    t.assert_router_empty();
}

#[test]
fn test_exact_input_minimum_output() {
    let t = setup_router();
    t.fund(&t.tokens[0], &t.trader, 100);

    let params = ExactInputParams {
        path: t.path(&[&t.tokens[0], &t.tokens[1], &t.tokens[2]]),
        recipient: t.trader.clone(),
        deadline: DEADLINE,
        amount_in: 5,
        amount_out_minimum: 2,
    };
    assert_eq!(
        t.router.try_exact_input(&t.trader, &0, &params),
        Err(Ok(RouterError::InsufficientOutputAmount))
    );
}

#[test]
fn test_exact_input_rejects_malformed_path() {
    let t = setup_router();
    t.fund(&t.tokens[0], &t.trader, 100);

    let mut path = t.path(&[&t.tokens[0], &t.tokens[1]]);
    path.push_back(0);
    let params = ExactInputParams {
        path,
        recipient: t.trader.clone(),
        deadline: DEADLINE,
        amount_in: 5,
        amount_out_minimum: 0,
    };
    assert_eq!(
        t.router.try_exact_input(&t.trader, &0, &params),
        Err(Ok(RouterError::InvalidPath))
    );
}

#[test]
fn test_expired_deadline() {
    let t = setup_router();
    t.fund(&t.tokens[0], &t.trader, 100);
    t.env.ledger().set_timestamp(DEADLINE + 1);

    assert_eq!(
        t.router.try_exact_input_single(&t.trader, &0, &single_params(&t, 3, 0)),
        Err(Ok(RouterError::Expired))
    );
}

#[test]
fn test_zero_amount_rejected() {
    let t = setup_router();
    assert_eq!(
        t.router.try_exact_input_single(&t.trader, &0, &single_params(&t, 0, 0)),
        Err(Ok(RouterError::InvalidAmount))
    );
}

#[test]
fn test_recipient_other_than_sender() {
    let t = setup_router();
    let friend = Address::generate(&t.env);
    t.fund(&t.tokens[0], &t.trader, 100);

    let mut params = single_params(&t, 3, 1);
    params.recipient = friend.clone();
    t.router.exact_input_single(&t.trader, &0, &params);

    assert_eq!(t.balance(&t.tokens[1], &friend), 1);
    assert_eq!(t.balance(&t.tokens[1], &t.trader), 0);
}
