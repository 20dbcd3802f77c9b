// Sorted list of initialized ticks
//
// Each pool keeps its initialized ticks in ascending order so the swap loop
// can find the next boundary with a binary search instead of walking the
// spacing grid.

use soroban_sdk::Vec;
use belugaswap_math::constants::{MAX_TICK, MIN_TICK};

/// Insert `tick` keeping the list sorted; no-op if already present
pub fn insert_tick(ticks: &mut Vec<i32>, tick: i32) {
    if let Err(index) = ticks.binary_search(tick) {
        ticks.insert(index, tick);
    }
}

/// Remove `tick` from the list; no-op if absent
pub fn remove_tick(ticks: &mut Vec<i32>, tick: i32) {
    if let Ok(index) = ticks.binary_search(tick) {
        ticks.remove(index);
    }
}

/// Next initialized tick in the swap direction.
///
/// Moving down (`zero_for_one`) returns the greatest tick `<= tick`,
/// moving up returns the smallest tick `> tick`. When the list has no such
/// tick the price bound is returned with `initialized = false`.
pub fn next_initialized_tick(ticks: &Vec<i32>, tick: i32, zero_for_one: bool) -> (i32, bool) {
    let len = ticks.len();

    if zero_for_one {
        let index = match ticks.binary_search(tick) {
            Ok(i) => Some(i),
            Err(0) => None,
            Err(i) => Some(i - 1),
        };
        match index.and_then(|i| ticks.get(i)) {
            Some(t) => (t, true),
            None => (MIN_TICK, false),
        }
    } else {
        let index = match ticks.binary_search(tick) {
            Ok(i) => i + 1,
            Err(i) => i,
        };
        if index < len {
            match ticks.get(index) {
                Some(t) => (t, true),
                None => (MAX_TICK, false),
            }
        } else {
            (MAX_TICK, false)
        }
    }
}
