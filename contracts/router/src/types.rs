//! Router type definitions

use soroban_sdk::{contracttype, Address, Bytes};

// ============================================================
// ROUTER CONFIG
// ============================================================

#[contracttype]
#[derive(Clone, Debug)]
pub struct RouterConfig {
    /// Core contract hosting the pools; pool ids are derived from it
    pub factory: Address,
    /// Wrapped-native token contract
    pub wrapped_native: Address,
    /// Native asset backing `wrapped_native`
    pub native_asset: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
}

// ============================================================
// SWAP PARAMS
// ============================================================

/// Parameters for a single-pool exact input swap
#[contracttype]
#[derive(Clone, Debug)]
pub struct ExactInputSingleParams {
    pub token_in: Address,
    pub token_out: Address,
    pub fee: u32,
    pub recipient: Address,
    /// Ledger timestamp
    pub deadline: u64,
    pub amount_in: i128,
    pub amount_out_minimum: i128,
    /// 0 for no limit
    pub sqrt_price_limit_x64: u128,
}

/// Parameters for a multi-hop exact input swap along an encoded path
#[contracttype]
#[derive(Clone, Debug)]
pub struct ExactInputParams {
    pub path: Bytes,
    pub recipient: Address,
    pub deadline: u64,
    pub amount_in: i128,
    pub amount_out_minimum: i128,
}

/// Parameters for a single-pool exact output swap
#[contracttype]
#[derive(Clone, Debug)]
pub struct ExactOutputSingleParams {
    pub token_in: Address,
    pub token_out: Address,
    pub fee: u32,
    pub recipient: Address,
    pub deadline: u64,
    pub amount_out: i128,
    pub amount_in_maximum: i128,
    /// 0 for no limit
    pub sqrt_price_limit_x64: u128,
}

/// Parameters for a multi-hop exact output swap.
/// The path is given in trade order, token in first.
#[contracttype]
#[derive(Clone, Debug)]
pub struct ExactOutputParams {
    pub path: Bytes,
    pub recipient: Address,
    pub deadline: u64,
    pub amount_out: i128,
    pub amount_in_maximum: i128,
}

// ============================================================
// MULTICALL
// ============================================================

/// One step of a `multicall` batch
#[contracttype]
#[derive(Clone, Debug)]
pub enum RouterCall {
    ExactInputSingle(ExactInputSingleParams),
    ExactInput(ExactInputParams),
    ExactOutputSingle(ExactOutputSingleParams),
    ExactOutput(ExactOutputParams),
    /// (amount_minimum, recipient)
    UnwrapNativeAsset(i128, Address),
    /// (amount_minimum, recipient, fee_bips, fee_recipient)
    UnwrapNativeAssetWithFee(i128, Address, u32, Address),
    /// (token, amount_minimum, recipient)
    SweepToken(Address, i128, Address),
    /// (token, amount_minimum, recipient, fee_bips, fee_recipient)
    SweepTokenWithFee(Address, i128, Address, u32, Address),
    RefundNativeAsset,
}
