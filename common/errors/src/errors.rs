#![no_std]

// Authorization

pub static ERROR_UNAUTHORIZED: &[u8] = b"UNAUTHORIZED";

pub static ERROR_NOT_APPROVED: &[u8] = b"Treasury: not approved";

pub static ERROR_NOT_TREASURY: &[u8] = b"Caller is not the treasury.";

pub static ERROR_NOT_PENDING_ROLE: &[u8] = b"Caller is not the pending role holder.";

// Validation

pub static ERROR_ZERO_ADDRESS: &[u8] = b"Address can not be zero.";

pub static ERROR_ZERO_AMOUNT: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_ASSET_NOT_REGISTERED: &[u8] = b"Asset not registered.";

pub static ERROR_ASSET_ALREADY_REGISTERED: &[u8] = b"Asset already registered.";

pub static ERROR_ASSET_KIND_MISMATCH: &[u8] = b"Asset kind does not match the category.";

pub static ERROR_INVALID_DECIMALS: &[u8] = b"Invalid decimals.";

pub static ERROR_INVALID_TOKEN: &[u8] = b"Treasury: invalid token";

pub static ERROR_TOKEN_NOT_ACCEPTED: &[u8] = b"Treasury: token not accepted";

pub static ERROR_INVALID_PRINCIPAL: &[u8] = b"Principal kind does not match the category.";

pub static ERROR_INVALID_BINDING: &[u8] = b"Binding is only allowed for liquidity tokens.";

pub static ERROR_INVALID_PAYMENT: &[u8] = b"Invalid payment.";

pub static ERROR_INSUFFICIENT_PAYMENT: &[u8] = b"Payment does not cover the valuation.";

pub static ERROR_NO_LP_SUPPLY: &[u8] = b"Liquidity pool has no supply.";

pub static ERROR_INVALID_PRICE: &[u8] = b"Price feed returned zero.";

pub static ERROR_INVALID_BASE_VALUE: &[u8] = b"Base value can not be zero.";

pub static ERROR_INVALID_QUEUE_INDEX: &[u8] = b"Invalid queue index.";

pub static ERROR_INVALID_REGISTRY_INDEX: &[u8] = b"Invalid registry index.";

pub static ERROR_INVALID_TIMELOCK: &[u8] = b"Timelock delay can not be zero.";

pub static ERROR_EXCEEDS_DEBT_LIMIT: &[u8] = b"Treasury: exceeds limit";

pub static ERROR_DEBT_UNDERFLOW: &[u8] = b"Repayment exceeds outstanding debt.";

pub static ERROR_INVALID_MARKET_PARAMS: &[u8] = b"Depository: invalid market parameters";

pub static ERROR_INVALID_QUOTE_KIND: &[u8] = b"Depository: quote can not be reserve and liquidity";

pub static ERROR_INVALID_CONCLUSION: &[u8] = b"Depository: conclusion must be in the future";

pub static ERROR_INVALID_INTERVALS: &[u8] = b"Depository: invalid intervals";

pub static ERROR_MARKET_NOT_FOUND: &[u8] = b"Depository: market not found";

pub static ERROR_MAX_PRICE: &[u8] = b"Depository: more than max price";

pub static ERROR_MAX_SIZE: &[u8] = b"Depository: max size exceeded";

pub static ERROR_CAPACITY_EXCEEDED: &[u8] = b"Depository: capacity exceeded";

pub static ERROR_WRONG_QUOTE_TOKEN: &[u8] = b"Depository: wrong quote token";

pub static ERROR_NOTE_NOT_FOUND: &[u8] = b"Depository: note not found";

pub static ERROR_NOTE_TRANSFER_NOT_APPROVED: &[u8] = b"Depository: transfer not found";

pub static ERROR_INVALID_REWARDS: &[u8] = b"Depository: reward too high";

pub static ERROR_ZERO_REFERENCE_SUPPLY: &[u8] = b"Depository: reference supply is zero";

pub static ERROR_INVALID_LOSS_RATIO: &[u8] = b"Loss ratio can not be more than 100%.";

pub static ERROR_INVALID_BANDS: &[u8] = b"Control bands must stay within 0 and 100%.";

pub static ERROR_INVALID_SAMPLING_INTERVAL: &[u8] = b"Sampling interval can not be zero.";

pub static ERROR_INVALID_KP: &[u8] = b"Proportional coefficient cannot be more than 1";

pub static ERROR_NATIVE_NOT_IN_PAIR: &[u8] = b"Native token is not part of the pair.";

pub static ERROR_INVALID_PAIR_TOKENS: &[u8] = b"Pair tokens must differ.";

pub static ERROR_INVALID_LIQUIDITY_PAYMENTS: &[u8] = b"Expected one payment of each pair token.";

pub static ERROR_INSUFFICIENT_LIQUIDITY: &[u8] = b"Insufficient liquidity minted.";

// State

pub static ERROR_ALREADY_INITIALIZED: &[u8] = b"Already initialized";

pub static ERROR_TIMELOCK_NOT_COMPLETE: &[u8] = b"Timelock not complete";

pub static ERROR_TIMELOCK_ENABLED: &[u8] = b"Use queueTimelock";

pub static ERROR_TIMELOCK_DISABLED: &[u8] = b"Timelock is disabled, use enable";

pub static ERROR_TIMELOCK_ALREADY_ENABLED: &[u8] = b"Timelock already enabled";

pub static ERROR_QUEUE_EXECUTED: &[u8] = b"Action has already been executed";

pub static ERROR_QUEUE_NULLIFIED: &[u8] = b"Action has been nullified";

pub static ERROR_MARKET_CONCLUDED: &[u8] = b"Depository: market concluded";

pub static ERROR_MARKET_CLOSED: &[u8] = b"Depository: market closed";

pub static ERROR_PARAMS_NOT_SET: &[u8] = b"Supply control params not set";

pub static ERROR_CONTROL_IN_PROGRESS: &[u8] = b"Control already in progress";

pub static ERROR_NO_CONTROL_IN_PROGRESS: &[u8] = b"No control in progress";

pub static ERROR_NO_PENDING_ROLE: &[u8] = b"No pending role change.";

// Arithmetic

pub static ERROR_INSUFFICIENT_RESERVES: &[u8] = b"Insufficient reserves";
