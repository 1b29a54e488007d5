//! Consensus parameters - the frozen economic and timing constants
//!
//! Built once at startup, validated against their cross-field invariants,
//! then shared read-only with every consumer.

mod params;
mod target;
mod unlock;

pub use params::*;
pub use target::*;
pub use unlock::*;
