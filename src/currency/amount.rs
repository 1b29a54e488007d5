//! Arbitrary-precision currency amounts
//!
//! Every ledger amount is an integer count of the indivisible base unit "H".
//! One HX coin is 10^24 H, so realistic amounts overflow machine integers and
//! are held as `BigUint`. Amounts are never negative; subtraction reports
//! underflow instead of wrapping.

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use crate::constants::COIN_EXPONENT;
use crate::currency::AmountError;

/// A non-negative currency amount, denominated in base units
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Currency(BigUint);

impl Currency {
    /// The zero amount
    pub fn zero() -> Self {
        Currency(BigUint::zero())
    }

    /// Create an amount from a base-unit count
    pub fn from_base_units(units: u128) -> Self {
        Currency(BigUint::from(units))
    }

    /// Create an amount from a whole number of HX coins (1 C = 10^24 H)
    pub fn from_coins(coins: u64) -> Self {
        Currency(BigUint::from(coins) * BigUint::from(10u32).pow(COIN_EXPONENT))
    }

    /// Create an amount from an already-computed base-unit magnitude
    pub fn from_biguint(units: BigUint) -> Self {
        Currency(units)
    }

    /// Borrow the underlying magnitude
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Consume into the underlying magnitude
    pub fn into_biguint(self) -> BigUint {
        self.0
    }

    /// Whether the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Subtract another amount, reporting underflow as `None`
    pub fn checked_sub(&self, other: &Currency) -> Option<Currency> {
        if self.0 >= other.0 {
            Some(Currency(&self.0 - &other.0))
        } else {
            None
        }
    }

    /// Multiply by a small integer
    pub fn mul_u64(&self, factor: u64) -> Currency {
        Currency(&self.0 * factor)
    }

    /// Divide by a small integer, truncating toward zero
    ///
    /// Panics if `divisor` is zero, like any integer division.
    pub fn div_u64(&self, divisor: u64) -> Currency {
        Currency(&self.0 / divisor)
    }
}

impl Add for Currency {
    type Output = Currency;

    fn add(self, rhs: Currency) -> Currency {
        Currency(self.0 + rhs.0)
    }
}

impl Add<&Currency> for &Currency {
    type Output = Currency;

    fn add(self, rhs: &Currency) -> Currency {
        Currency(&self.0 + &rhs.0)
    }
}

impl AddAssign for Currency {
    fn add_assign(&mut self, rhs: Currency) {
        self.0 += rhs.0;
    }
}

impl From<u64> for Currency {
    fn from(units: u64) -> Self {
        Currency(BigUint::from(units))
    }
}

/// Renders the exact base-unit integer, with no unit suffix
impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Accepts only the exact base-unit integer form
impl FromStr for Currency {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let units = s
            .parse::<BigUint>()
            .map_err(|_| AmountError::Malformed(s.to_string()))?;
        Ok(Currency(units))
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_zero() {
        assert!(Currency::zero().is_zero());
        assert_eq!(Currency::zero(), Currency::from_base_units(0));
    }

    #[test]
    fn test_from_coins_magnitude() {
        let one_coin = Currency::from_coins(1);
        assert_eq!(one_coin.to_string(), "1000000000000000000000000");
    }

    #[test]
    fn test_addition() {
        let a = Currency::from_base_units(700);
        let b = Currency::from_base_units(42);
        assert_eq!(&a + &b, Currency::from_base_units(742));

        let mut sum = Currency::zero();
        sum += a;
        sum += b;
        assert_eq!(sum, Currency::from_base_units(742));
    }

    #[test]
    fn test_checked_sub_underflow() {
        let small = Currency::from_base_units(5);
        let big = Currency::from_base_units(6);
        assert_eq!(small.checked_sub(&big), None);
        assert_eq!(big.checked_sub(&small), Some(Currency::from_base_units(1)));
    }

    #[test]
    fn test_mul_div_small_integers() {
        let a = Currency::from_base_units(1_000);
        assert_eq!(a.mul_u64(3), Currency::from_base_units(3_000));
        assert_eq!(a.div_u64(3), Currency::from_base_units(333));
    }

    #[test]
    fn test_ordering_is_magnitude() {
        let a = Currency::from_coins(1);
        let b = Currency::from_coins(2);
        assert!(a < b);
        assert!(b > a);
        assert_eq!(a, Currency::from_coins(1));
    }

    #[test]
    fn test_display_fromstr_roundtrip() {
        let a = Currency::from_coins(123);
        let parsed: Currency = a.to_string().parse().unwrap();
        assert_eq!(parsed, a);
    }

    #[test]
    fn test_fromstr_rejects_non_integer() {
        assert!("1.5".parse::<Currency>().is_err());
        assert!("-1".parse::<Currency>().is_err());
        assert!("".parse::<Currency>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let a = Currency::from_coins(7);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "\"7000000000000000000000000\"");
        let back: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }
}
