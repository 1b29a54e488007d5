//! 256-bit difficulty magnitudes
//!
//! A `Target` is a fixed-width big-endian magnitude. Smaller targets are
//! harder to hit; the saturated value doubles as the unit of cumulative
//! chain depth.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A 256-bit big-endian magnitude (difficulty target or cumulative depth)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Target(pub [u8; 32]);

impl Target {
    /// The all-zero magnitude
    pub const fn zero() -> Self {
        Target([0u8; 32])
    }

    /// The maximum representable magnitude, every byte saturated
    pub const fn saturated() -> Self {
        Target([0xFFu8; 32])
    }

    /// Create a target from raw big-endian bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Target(bytes)
    }

    /// Create a target from a hex string
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(hex)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Target(arr))
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Get as bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// Big-endian magnitude ordering; byte-wise lexicographic comparison is
/// exactly numeric comparison for big-endian fixed-width values
impl Ord for Target {
    fn cmp(&self, other: &Target) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for Target {
    fn partial_cmp(&self, other: &Target) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Target({})", self.to_hex())
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
