// SPDX-License-Identifier: MIT
// Full-precision multiply/divide helpers backed by U256

use soroban_sdk::{Env, U256};

pub const ONE_X64: u128 = crate::constants::Q64;

/// Largest value representable by a U256
pub fn u256_max(env: &Env) -> U256 {
    U256::from_parts(env, u64::MAX, u64::MAX, u64::MAX, u64::MAX)
}

#[inline]
pub fn u256(env: &Env, x: u128) -> U256 {
    U256::from_u128(env, x)
}

/// Narrow a U256 back to u128, panicking if the value does not fit
pub fn to_u128(x: &U256) -> u128 {
    match x.to_u128() {
        Some(v) => v,
        None => panic!("u128 overflow"),
    }
}

/// floor(a * b / d) or ceil(a * b / d) over U256 operands.
///
/// When `a * b` does not fit in 256 bits the numerator is split as
/// `a = q * d + r`, which is exact as long as `r * b` fits.
pub fn mul_div_u256(env: &Env, a: &U256, b: &U256, d: &U256, round_up: bool) -> U256 {
    let zero = U256::from_u32(env, 0);
    if *d == zero {
        panic!("mul_div: divide by zero");
    }
    if *a == zero || *b == zero {
        return zero;
    }

    let one = U256::from_u32(env, 1);
    let fits = *a <= u256_max(env).div(b);

    let (quotient, has_remainder) = if fits {
        let product = a.mul(b);
        let rem = product.rem_euclid(d);
        (product.div(d), rem != zero)
    } else {
        let q = a.div(d);
        let r = a.rem_euclid(d);
        let rb = r.mul(b);
        let rem = rb.rem_euclid(d);
        (q.mul(b).add(&rb.div(d)), rem != zero)
    };

    if round_up && has_remainder {
        quotient.add(&one)
    } else {
        quotient
    }
}

/// floor(a * b / denominator)
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    let result = mul_div_u256(env, &u256(env, a), &u256(env, b), &u256(env, denominator), false);
    to_u128(&result)
}

/// ceil(a * b / denominator)
pub fn mul_div_rounding_up(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    let result = mul_div_u256(env, &u256(env, a), &u256(env, b), &u256(env, denominator), true);
    to_u128(&result)
}

/// Divide with rounding up
#[inline]
pub fn div_round_up(numerator: u128, denominator: u128) -> u128 {
    if denominator == 0 {
        panic!("div_round_up: divide by zero");
    }
    let result = numerator / denominator;
    if numerator % denominator != 0 {
        result + 1
    } else {
        result
    }
}

/// ceil(numerator / denominator) over U256
pub fn div_round_up_u256(env: &Env, numerator: &U256, denominator: &U256) -> U256 {
    let zero = U256::from_u32(env, 0);
    if *denominator == zero {
        panic!("div_round_up: divide by zero");
    }
    let q = numerator.div(denominator);
    if numerator.rem_euclid(denominator) != zero {
        q.add(&U256::from_u32(env, 1))
    } else {
        q
    }
}

/// Integer square root of a U256 whose root fits in a u128
pub fn sqrt_u256(env: &Env, value: &U256) -> u128 {
    let mut result: u128 = 0;
    let mut bit: u32 = 128;
    while bit > 0 {
        bit -= 1;
        let candidate = result | (1u128 << bit);
        let square = u256(env, candidate).mul(&u256(env, candidate));
        if square <= *value {
            result = candidate;
        }
    }
    result
}
