//! Currency amounts and unit conversion
//!
//! The `Currency` value type, exact rational helpers, and the conversion
//! layer between base units and human-readable denominations.

mod amount;
mod ratio;
mod units;

pub use amount::*;
pub use ratio::*;
pub use units::*;
