//! Exact rational helper
//!
//! The protocol's fractional constants (fund payout fraction, difficulty
//! adjustment clamps) must compare exactly, so they are carried as integer
//! ratios. No floats on this path.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// An exact non-negative rational number
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ratio {
    numerator: u64,
    denominator: u64,
}

impl Ratio {
    /// The rational zero (0/1)
    pub const ZERO: Ratio = Ratio::new(0, 1);

    /// The rational one (1/1)
    pub const ONE: Ratio = Ratio::new(1, 1);

    /// Create a ratio; the denominator must be non-zero
    pub const fn new(numerator: u64, denominator: u64) -> Self {
        assert!(denominator != 0, "ratio denominator must be non-zero");
        Ratio {
            numerator,
            denominator,
        }
    }

    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    pub fn denominator(&self) -> u64 {
        self.denominator
    }
}

/// Equality on the represented value, not the representation
impl PartialEq for Ratio {
    fn eq(&self, other: &Ratio) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ratio {}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Ratio) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ratio {
    fn cmp(&self, other: &Ratio) -> Ordering {
        // cross-multiplication in u128 cannot overflow for u64 operands
        let lhs = self.numerator as u128 * other.denominator as u128;
        let rhs = other.numerator as u128 * self.denominator as u128;
        lhs.cmp(&rhs)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
