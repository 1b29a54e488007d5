//! HELIX (HX) Chain Core Library
//!
//! The economic parameter and monetary-unit substrate of the HX protocol:
//! a frozen, validated table of consensus-critical constants, and a lossless
//! conversion layer between the indivisible base unit and the human-readable
//! denominations used by operator tooling.
//!
//! HX is the short form used in identifiers. All ledger amounts are integers
//! of the base unit "H"; one display coin "C" is 10^24 H. Everything here is
//! pure and stateless after construction, so any number of threads may call
//! into it without coordination.

pub mod currency;
pub mod params;

/// Frozen protocol constants - consensus-critical, never configurable
pub mod constants {
    /// Maximum serialized block size in bytes
    pub const BLOCK_SIZE_LIMIT: u64 = 1_000_000;

    /// Target seconds between blocks
    pub const BLOCK_FREQUENCY: u64 = 600;

    /// Trailing blocks used when recalculating the difficulty target
    pub const TARGET_WINDOW: u64 = 1_000;

    /// Blocks sampled when validating a block timestamp - must be odd
    pub const MEDIAN_TIMESTAMP_WINDOW: u64 = 11;

    /// Seconds into the future a block timestamp may run ahead of the clock
    pub const FUTURE_THRESHOLD: u64 = 3 * 60 * 60;

    /// Total (static) supply of fund tokens
    pub const FUND_TOKEN_SUPPLY: u64 = 10_000;

    /// Confirmations before subsidy and fund-claim outputs mature
    pub const MATURITY_DELAY: u64 = 50;

    /// Genesis block creation time (Unix seconds)
    pub const GENESIS_TIMESTAMP: u64 = 1_706_745_600;

    /// Power of ten relating base units to the display coin: 1 C = 10^24 H
    pub const COIN_EXPONENT: u32 = 24;

    /// Blocks in one calendar week at the target block frequency
    pub const BLOCKS_PER_WEEK: u64 = 7 * 24 * 60 * 60 / BLOCK_FREQUENCY;

    /// Chain name (short form used in identifiers)
    pub const CHAIN_NAME: &str = "HX";

    /// Full chain name
    pub const CHAIN_FULL_NAME: &str = "HELIX";
}

pub use currency::{
    format_amount, parse_amount, parse_period, period_to_weeks, AmountError, Currency, Ratio,
};
pub use params::{ConsensusParameters, ParamsError, RawParameters, Target, UnlockHash};
