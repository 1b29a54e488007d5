//! The consensus parameter table
//!
//! Every economic and timing constant the validation, mining and wallet
//! layers depend on, populated from frozen literals and checked against its
//! cross-field invariants exactly once. Downstream consumers read accessors
//! and may rely on the invariants without re-checking them.

use num_bigint::BigUint;
use num_traits::One;
use thiserror::Error;

use super::{Target, UnlockHash};
use crate::constants::{
    BLOCK_FREQUENCY, BLOCK_SIZE_LIMIT, FUND_TOKEN_SUPPLY, FUTURE_THRESHOLD, GENESIS_TIMESTAMP,
    MATURITY_DELAY, MEDIAN_TIMESTAMP_WINDOW, TARGET_WINDOW,
};
use crate::currency::{Currency, Ratio};

/// Consensus parameter construction errors
///
/// Raised only while building the table; a parameter set that violates its
/// own invariants must never be allowed to run, so callers should treat this
/// as fatal to startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamsError {
    #[error("consensus parameter invariant violated: {field}: {reason}")]
    InvariantViolation {
        field: &'static str,
        reason: &'static str,
    },
}

impl ParamsError {
    fn violation(field: &'static str, reason: &'static str) -> Self {
        ParamsError::InvariantViolation { field, reason }
    }
}

/// Unvalidated parameter values, as fed to [`ConsensusParameters::from_raw`]
#[derive(Debug, Clone)]
pub struct RawParameters {
    pub block_size_limit: u64,
    pub block_frequency: u64,
    pub target_window: u64,
    pub median_timestamp_window: u64,
    pub future_threshold: u64,
    pub fund_token_supply: u64,
    pub maturity_delay: u64,
    pub fund_payout_fraction: Ratio,
    pub initial_subsidy: Currency,
    pub minimum_subsidy: Currency,
    pub max_adjustment_up: Ratio,
    pub max_adjustment_down: Ratio,
    pub root_target: Target,
    pub root_depth: Target,
    pub genesis_timestamp: u64,
    pub genesis_fund_unlock_hash: UnlockHash,
    pub genesis_claim_unlock_hash: UnlockHash,
    pub coinbase_augment: Currency,
}

impl RawParameters {
    /// The frozen HX mainnet values
    pub fn standard() -> Self {
        // genesis target: a small, near-minimal magnitude (2^224)
        let mut root_target = [0u8; 32];
        root_target[3] = 1;

        RawParameters {
            block_size_limit: BLOCK_SIZE_LIMIT,
            block_frequency: BLOCK_FREQUENCY,
            target_window: TARGET_WINDOW,
            median_timestamp_window: MEDIAN_TIMESTAMP_WINDOW,
            future_threshold: FUTURE_THRESHOLD,
            fund_token_supply: FUND_TOKEN_SUPPLY,
            maturity_delay: MATURITY_DELAY,
            fund_payout_fraction: Ratio::new(39, 1000),
            initial_subsidy: Currency::from_coins(300_000),
            minimum_subsidy: Currency::from_coins(30_000),
            max_adjustment_up: Ratio::new(1001, 1000),
            max_adjustment_down: Ratio::new(999, 1000),
            root_target: Target::from_bytes(root_target),
            root_depth: Target::saturated(),
            genesis_timestamp: GENESIS_TIMESTAMP,
            genesis_fund_unlock_hash: UnlockHash::ZERO,
            genesis_claim_unlock_hash: UnlockHash::ZERO,
            coinbase_augment: Currency::from_biguint(BigUint::one() << 80usize),
        }
    }
}

/// Immutable, validated snapshot of the protocol's consensus parameters
#[derive(Debug, Clone)]
pub struct ConsensusParameters {
    block_size_limit: u64,
    block_frequency: u64,
    target_window: u64,
    median_timestamp_window: u64,
    future_threshold: u64,
    fund_token_supply: u64,
    maturity_delay: u64,
    fund_payout_fraction: Ratio,
    initial_subsidy: Currency,
    minimum_subsidy: Currency,
    max_adjustment_up: Ratio,
    max_adjustment_down: Ratio,
    root_target: Target,
    root_depth: Target,
    genesis_timestamp: u64,
    genesis_fund_unlock_hash: UnlockHash,
    genesis_claim_unlock_hash: UnlockHash,
    coinbase_augment: Currency,
}

impl ConsensusParameters {
    /// Build the frozen mainnet parameter table
    pub fn standard() -> Result<Self, ParamsError> {
        Self::from_raw(RawParameters::standard())
    }

    /// Validate a raw parameter set and freeze it into a snapshot
    ///
    /// This is the only constructor; every invariant below holds for the
    /// lifetime of the returned value.
    pub fn from_raw(raw: RawParameters) -> Result<Self, ParamsError> {
        if raw.minimum_subsidy > raw.initial_subsidy {
            return Err(ParamsError::violation(
                "minimum_subsidy",
                "exceeds initial_subsidy",
            ));
        }
        if raw.fund_payout_fraction <= Ratio::ZERO || raw.fund_payout_fraction >= Ratio::ONE {
            return Err(ParamsError::violation(
                "fund_payout_fraction",
                "must lie strictly between 0 and 1",
            ));
        }
        if raw.median_timestamp_window < 1 || raw.median_timestamp_window % 2 == 0 {
            return Err(ParamsError::violation(
                "median_timestamp_window",
                "must be odd and at least 1",
            ));
        }
        if raw.max_adjustment_up <= Ratio::ONE {
            return Err(ParamsError::violation(
                "max_adjustment_up",
                "must be greater than 1",
            ));
        }
        if raw.max_adjustment_down >= Ratio::ONE {
            return Err(ParamsError::violation(
                "max_adjustment_down",
                "must be less than 1",
            ));
        }
        if raw.root_target >= raw.root_depth {
            return Err(ParamsError::violation(
                "root_target",
                "must be strictly less than root_depth",
            ));
        }

        Ok(ConsensusParameters {
            block_size_limit: raw.block_size_limit,
            block_frequency: raw.block_frequency,
            target_window: raw.target_window,
            median_timestamp_window: raw.median_timestamp_window,
            future_threshold: raw.future_threshold,
            fund_token_supply: raw.fund_token_supply,
            maturity_delay: raw.maturity_delay,
            fund_payout_fraction: raw.fund_payout_fraction,
            initial_subsidy: raw.initial_subsidy,
            minimum_subsidy: raw.minimum_subsidy,
            max_adjustment_up: raw.max_adjustment_up,
            max_adjustment_down: raw.max_adjustment_down,
            root_target: raw.root_target,
            root_depth: raw.root_depth,
            genesis_timestamp: raw.genesis_timestamp,
            genesis_fund_unlock_hash: raw.genesis_fund_unlock_hash,
            genesis_claim_unlock_hash: raw.genesis_claim_unlock_hash,
            coinbase_augment: raw.coinbase_augment,
        })
    }

    /// Maximum serialized block size in bytes
    pub fn block_size_limit(&self) -> u64 {
        self.block_size_limit
    }

    /// Target seconds between blocks
    pub fn block_frequency(&self) -> u64 {
        self.block_frequency
    }

    /// Trailing blocks used when recalculating the difficulty target
    pub fn target_window(&self) -> u64 {
        self.target_window
    }

    /// Blocks sampled when validating a timestamp; always odd
    pub fn median_timestamp_window(&self) -> u64 {
        self.median_timestamp_window
    }

    /// Seconds a block timestamp may run ahead of the wall clock
    pub fn future_threshold(&self) -> u64 {
        self.future_threshold
    }

    /// Total (static, non-inflationary) supply of fund tokens
    pub fn fund_token_supply(&self) -> u64 {
        self.fund_token_supply
    }

    /// Confirmations before subsidy and fund-claim outputs mature
    pub fn maturity_delay(&self) -> u64 {
        self.maturity_delay
    }

    /// Fraction of every contract payout diverted to the fund pool
    pub fn fund_payout_fraction(&self) -> Ratio {
        self.fund_payout_fraction
    }

    /// Per-block coinbase at genesis; the upper subsidy bound
    pub fn initial_subsidy(&self) -> &Currency {
        &self.initial_subsidy
    }

    /// Floor the per-block coinbase never drops below
    pub fn minimum_subsidy(&self) -> &Currency {
        &self.minimum_subsidy
    }

    /// Upper clamp on the per-window multiplicative difficulty change
    pub fn max_adjustment_up(&self) -> Ratio {
        self.max_adjustment_up
    }

    /// Lower clamp on the per-window multiplicative difficulty change
    pub fn max_adjustment_down(&self) -> Ratio {
        self.max_adjustment_down
    }

    /// Genesis difficulty target
    pub fn root_target(&self) -> Target {
        self.root_target
    }

    /// Cumulative depth of the genesis block; the maximum magnitude
    pub fn root_depth(&self) -> Target {
        self.root_depth
    }

    /// Genesis block creation time (Unix seconds)
    pub fn genesis_timestamp(&self) -> u64 {
        self.genesis_timestamp
    }

    /// Recipient of the genesis fund-token allocation
    pub fn genesis_fund_unlock_hash(&self) -> UnlockHash {
        self.genesis_fund_unlock_hash
    }

    /// Recipient of the genesis fund-claim allocation
    pub fn genesis_claim_unlock_hash(&self) -> UnlockHash {
        self.genesis_claim_unlock_hash
    }

    /// Big-integer augment applied to coinbase depth accounting
    pub fn coinbase_augment(&self) -> &Currency {
        &self.coinbase_augment
    }
}
