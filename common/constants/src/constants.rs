#![no_std]

/// Decimal precision of the native token; every reserve valuation is expressed in it
pub const NATIVE_DECIMALS: usize = 9;

/// Fixed point one, used for prices, control variables, debt ratios and the base value
pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_PRECISION: usize = 18;

pub const BPS: usize = 10_000; // 100%

/// Debt buffers are expressed with five decimals, 100_000 = 100%
pub const DEBT_BUFFER_PRECISION: u64 = 100_000;

/// Referral and DAO rewards are expressed in basis points of the payout
pub const MAX_REWARD_BPS: u64 = 1_000; // 10%

/// Disabling the timelock has to be armed this many delays in advance
pub const TIMELOCK_DISABLE_MULTIPLIER: u64 = 7;

/// Manager categories wait twice as long in the permission queue
pub const MANAGER_DELAY_MULTIPLIER: u64 = 2;
