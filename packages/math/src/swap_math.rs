// SPDX-License-Identifier: MIT
// Single swap step within one initialized tick range

use soroban_sdk::Env;
use crate::constants::FEE_DENOMINATOR;
use crate::liquidity::{get_amount_0_delta, get_amount_1_delta};
use crate::q64::{mul_div, mul_div_rounding_up};
use crate::sqrt_price::{get_next_sqrt_price_from_input, get_next_sqrt_price_from_output};

/// Result of one swap step
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwapStep {
    /// Price reached by the step
    pub sqrt_price_next: u128,
    /// Input consumed, excluding the fee
    pub amount_in: u128,
    /// Output produced
    pub amount_out: u128,
    /// Fee charged on the input
    pub fee_amount: u128,
}

/// Compute how far a swap moves between `sqrt_price_current` and
/// `sqrt_price_target` given the remaining amount.
///
/// `amount_remaining > 0` is exact input, `< 0` exact output.
/// `fee_pips` is in hundredths of a basis point.
pub fn compute_swap_step(
    env: &Env,
    sqrt_price_current: u128,
    sqrt_price_target: u128,
    liquidity: u128,
    amount_remaining: i128,
    fee_pips: u32,
) -> SwapStep {
    let zero_for_one = sqrt_price_current >= sqrt_price_target;
    let exact_in = amount_remaining >= 0;
    let fee_complement = (FEE_DENOMINATOR - fee_pips) as u128;

    let mut amount_in: u128 = 0;
    let mut amount_out: u128 = 0;

    let sqrt_price_next = if exact_in {
        let remaining_less_fee = mul_div(env, amount_remaining as u128, fee_complement, FEE_DENOMINATOR as u128);
        amount_in = if zero_for_one {
            get_amount_0_delta(env, sqrt_price_target, sqrt_price_current, liquidity, true)
        } else {
            get_amount_1_delta(env, sqrt_price_current, sqrt_price_target, liquidity, true)
        };
        if remaining_less_fee >= amount_in {
            sqrt_price_target
        } else {
            get_next_sqrt_price_from_input(env, sqrt_price_current, liquidity, remaining_less_fee, zero_for_one)
        }
    } else {
        amount_out = if zero_for_one {
            get_amount_1_delta(env, sqrt_price_target, sqrt_price_current, liquidity, false)
        } else {
            get_amount_0_delta(env, sqrt_price_current, sqrt_price_target, liquidity, false)
        };
        if amount_remaining.unsigned_abs() >= amount_out {
            sqrt_price_target
        } else {
            get_next_sqrt_price_from_output(
                env,
                sqrt_price_current,
                liquidity,
                amount_remaining.unsigned_abs(),
                zero_for_one,
            )
        }
    };

    let max = sqrt_price_target == sqrt_price_next;

    if zero_for_one {
        if !(max && exact_in) {
            amount_in = get_amount_0_delta(env, sqrt_price_next, sqrt_price_current, liquidity, true);
        }
        if !(max && !exact_in) {
            amount_out = get_amount_1_delta(env, sqrt_price_next, sqrt_price_current, liquidity, false);
        }
    } else {
        if !(max && exact_in) {
            amount_in = get_amount_1_delta(env, sqrt_price_current, sqrt_price_next, liquidity, true);
        }
        if !(max && !exact_in) {
            amount_out = get_amount_0_delta(env, sqrt_price_current, sqrt_price_next, liquidity, false);
        }
    }

    // Never hand out more than requested on exact output
    if !exact_in && amount_out > amount_remaining.unsigned_abs() {
        amount_out = amount_remaining.unsigned_abs();
    }

    let fee_amount = if exact_in && sqrt_price_next != sqrt_price_target {
        // Target not reached: the whole remainder is consumed, the rest is fee
        (amount_remaining as u128) - amount_in
    } else {
        mul_div_rounding_up(env, amount_in, fee_pips as u128, fee_complement)
    };

    SwapStep {
        sqrt_price_next,
        amount_in,
        amount_out,
        fee_amount,
    }
}
