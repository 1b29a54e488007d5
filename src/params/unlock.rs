//! Unlock-hash identifiers
//!
//! An unlock hash names the recipient of an output. The zero value is the
//! designated null/burn identifier used for unclaimable genesis allocations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier naming the recipient of a pre-allocated output
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnlockHash(pub [u8; 32]);

impl UnlockHash {
    /// The designated null/burn identifier
    pub const ZERO: UnlockHash = UnlockHash([0u8; 32]);

    /// Create an unlock hash from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        UnlockHash(bytes)
    }

    /// Create an unlock hash from a hex string
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(hex)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(UnlockHash(arr))
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Whether this is the null/burn identifier
    pub fn is_burn(&self) -> bool {
        *self == UnlockHash::ZERO
    }
}

impl Default for UnlockHash {
    fn default() -> Self {
        UnlockHash::ZERO
    }
}

impl fmt::Debug for UnlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnlockHash({})", self.to_hex())
    }
}

impl fmt::Display for UnlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
