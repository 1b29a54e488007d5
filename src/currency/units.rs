//! Human-readable currency and period units
//!
//! Conversion between base-unit amounts and the SI-style denominations used
//! by operator tooling, plus week/block period helpers. Parsing is exact and
//! never silently drops sub-base-unit precision; formatting rounds to four
//! significant digits and does not round-trip.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use thiserror::Error;

use crate::constants::{BLOCKS_PER_WEEK, COIN_EXPONENT};
use crate::currency::Currency;

/// Amount and period parsing errors
///
/// All variants are recoverable and displayable verbatim to an operator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("malformed amount: \"{0}\" is not a valid number")]
    Malformed(String),
    #[error("amount is missing units")]
    MissingUnits,
    #[error("non-integer number of base units")]
    NonInteger,
}

/// Suffix of the raw base unit
pub const BASE_UNIT_SUFFIX: &str = "H";

/// One denomination of the display ladder
#[derive(Debug, Clone, Copy)]
pub struct Denomination {
    /// Unit suffix, case-sensitive
    pub suffix: &'static str,
    /// Power of 1000 relative to the coin denomination
    pub relative: i32,
    /// Whether this is the reference coin denomination
    pub coin: bool,
}

/// The display ladder, each denomination exactly 1000x the previous
pub const LADDER: [Denomination; 9] = [
    Denomination { suffix: "p", relative: -4, coin: false },
    Denomination { suffix: "n", relative: -3, coin: false },
    Denomination { suffix: "u", relative: -2, coin: false },
    Denomination { suffix: "m", relative: -1, coin: false },
    Denomination { suffix: "C", relative: 0, coin: true },
    Denomination { suffix: "K", relative: 1, coin: false },
    Denomination { suffix: "M", relative: 2, coin: false },
    Denomination { suffix: "G", relative: 3, coin: false },
    Denomination { suffix: "T", relative: 4, coin: false },
];

/// Render an amount with the largest denomination whose integer part is >= 1
///
/// Amounts below the pico magnitude (zero included) fall through to the exact
/// raw form, e.g. `"42 H"`. Everything else is rounded to 4 significant
/// digits; re-parsing such output through [`parse_amount`] can drift.
pub fn format_amount(amount: &Currency) -> String {
    let units = amount.as_biguint();
    let pico = BigUint::from(10u32).pow(COIN_EXPONENT - 12);
    if units < &pico {
        return format!("{} {}", units, BASE_UNIT_SUFFIX);
    }

    // walk the ladder until the next denomination would exceed the amount
    let thousand = BigUint::from(1000u32);
    let mut mag = pico;
    let mut suffix = LADDER[0].suffix;
    for (i, denom) in LADDER.iter().enumerate() {
        suffix = denom.suffix;
        if *units < &mag * &thousand {
            break;
        }
        if i + 1 < LADDER.len() {
            // never advance past the ladder ceiling
            mag *= &thousand;
        }
    }

    // exact ratio units / mag with six guard digits, then lossy rounding
    let scaled = units * BigUint::from(1_000_000u32) / &mag;
    let value = scaled.to_f64().unwrap_or(f64::INFINITY) / 1e6;
    format!("{} {}", format_significant(value, 4), suffix)
}

/// Parse an operator-supplied amount into an exact base-unit count
///
/// Accepts a decimal number followed by a ladder suffix, or a bare integer
/// followed by the raw suffix `"H"`. Inputs that do not correspond to an
/// exact integer number of base units are rejected rather than truncated.
pub fn parse_amount(input: &str) -> Result<Currency, AmountError> {
    for denom in LADDER.iter() {
        if let Some(number) = input.strip_suffix(denom.suffix) {
            let exponent = COIN_EXPONENT as i32 + 3 * denom.relative;
            return scale_decimal(number, exponent);
        }
    }
    if let Some(number) = input.strip_suffix(BASE_UNIT_SUFFIX) {
        let units = number
            .parse::<BigUint>()
            .map_err(|_| AmountError::Malformed(number.to_string()))?;
        return Ok(Currency::from_biguint(units));
    }
    Err(AmountError::MissingUnits)
}

/// Convert a block-count duration to whole weeks (1008 blocks per week)
pub fn period_to_weeks(blocks: u64) -> String {
    (blocks / BLOCKS_PER_WEEK).to_string()
}

/// Convert a week count (fractions allowed) to blocks, flooring
pub fn parse_period(period: &str) -> Result<u64, AmountError> {
    let weeks: f64 = period
        .parse()
        .map_err(|_| AmountError::Malformed(period.to_string()))?;
    if !weeks.is_finite() || weeks < 0.0 {
        return Err(AmountError::Malformed(period.to_string()));
    }
    Ok((weeks * BLOCKS_PER_WEEK as f64).floor() as u64)
}

/// Scale an exact decimal literal by 10^exponent into an integer base-unit
/// count
fn scale_decimal(number: &str, exponent: i32) -> Result<Currency, AmountError> {
    let malformed = || AmountError::Malformed(number.to_string());

    let (negative, digits) = match number.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, number.strip_prefix('+').unwrap_or(number)),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (digits, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(malformed());
    }
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return Err(malformed());
    }

    let mantissa: BigUint = format!("{int_part}{frac_part}")
        .parse()
        .map_err(|_| malformed())?;

    // value = mantissa * 10^(exponent - fraction length), exactly
    let shift = exponent - frac_part.len() as i32;
    let units = if shift >= 0 {
        mantissa * BigUint::from(10u32).pow(shift as u32)
    } else {
        let divisor = BigUint::from(10u32).pow((-shift) as u32);
        let remainder = &mantissa % &divisor;
        if !remainder.is_zero() {
            return Err(AmountError::NonInteger);
        }
        mantissa / divisor
    };

    // Currency is unsigned; "-0" is still zero
    if negative && !units.is_zero() {
        return Err(malformed());
    }
    Ok(Currency::from_biguint(units))
}

/// Round to `sig` significant digits, trimming trailing zeros
///
/// Ladder-selected values are always >= 1, so no negative-exponent handling
/// is needed.
fn format_significant(value: f64, sig: u32) -> String {
    if !value.is_finite() || value == 0.0 {
        return format!("{}", value);
    }
    let exp = value.abs().log10().floor() as i32;
    if exp >= sig as i32 {
        // the integer part alone carries the significant digits
        let scale = 10f64.powi(exp - sig as i32 + 1);
        return format!("{}", (value / scale).round() * scale);
    }
    let decimals = (sig as i32 - 1 - exp).max(0) as usize;
    let rendered = format!("{:.*}", decimals, value);
    if rendered.contains('.') {
        rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(n: u128) -> Currency {
        Currency::from_base_units(n)
    }

    #[test]
    fn test_ladder_shape() {
        // exactly one coin denomination, at relative power zero
        let coins: Vec<_> = LADDER.iter().filter(|d| d.coin).collect();
        assert_eq!(coins.len(), 1);
        assert_eq!(coins[0].suffix, "C");
        assert_eq!(coins[0].relative, 0);
        // strictly ascending, one power of 1000 apart
        for pair in LADDER.windows(2) {
            assert_eq!(pair[1].relative, pair[0].relative + 1);
        }
    }

    #[test]
    fn test_parse_raw_units() {
        assert_eq!(parse_amount("1000H"), Ok(base(1000)));
        assert_eq!(parse_amount("0H"), Ok(Currency::zero()));
    }

    #[test]
    fn test_parse_one_coin_is_reference_scale() {
        assert_eq!(parse_amount("1C"), Ok(Currency::from_coins(1)));
    }

    #[test]
    fn test_parse_fractional_coin_exact() {
        // 1.5 C = 15 * 10^23 H, an exact integer
        let expected = Currency::from_biguint(
            num_bigint::BigUint::from(15u32) * num_bigint::BigUint::from(10u32).pow(23),
        );
        assert_eq!(parse_amount("1.5C"), Ok(expected));
    }

    #[test]
    fn test_parse_sub_base_unit_rejected() {
        // 5 * 10^-25 C is half a base unit
        assert_eq!(
            parse_amount("0.0000000000000000000000005C"),
            Err(AmountError::NonInteger)
        );
        // the pico denomination only reaches 10^12 H, so 13 decimals is too fine
        assert_eq!(parse_amount("0.1234567890123p"), Err(AmountError::NonInteger));
    }

    #[test]
    fn test_parse_unknown_suffix() {
        assert_eq!(parse_amount("10Q"), Err(AmountError::MissingUnits));
        assert_eq!(parse_amount("10"), Err(AmountError::MissingUnits));
        assert_eq!(parse_amount(""), Err(AmountError::MissingUnits));
    }

    #[test]
    fn test_parse_malformed_number() {
        assert!(matches!(parse_amount("abcC"), Err(AmountError::Malformed(_))));
        assert!(matches!(parse_amount("1.2.3C"), Err(AmountError::Malformed(_))));
        assert!(matches!(parse_amount(".C"), Err(AmountError::Malformed(_))));
        assert!(matches!(parse_amount("C"), Err(AmountError::Malformed(_))));
        assert!(matches!(parse_amount("1.5H"), Err(AmountError::Malformed(_))));
    }

    #[test]
    fn test_parse_negative_rejected_but_negative_zero_ok() {
        assert!(matches!(parse_amount("-1C"), Err(AmountError::Malformed(_))));
        assert_eq!(parse_amount("-0C"), Ok(Currency::zero()));
        assert_eq!(parse_amount("+2C"), Ok(Currency::from_coins(2)));
    }

    #[test]
    fn test_parse_leading_dot_and_trailing_dot() {
        assert_eq!(parse_amount(".5C"), parse_amount("0.5C"));
        assert_eq!(parse_amount("5.C"), Ok(Currency::from_coins(5)));
    }

    #[test]
    fn test_format_zero_uses_raw_units() {
        assert_eq!(format_amount(&Currency::zero()), "0 H");
    }

    #[test]
    fn test_format_below_pico_is_exact() {
        assert_eq!(format_amount(&base(999_999_999_999)), "999999999999 H");
        assert_eq!(format_amount(&base(1)), "1 H");
    }

    #[test]
    fn test_format_ladder_selection() {
        assert_eq!(format_amount(&base(1_000_000_000_000)), "1 p");
        assert_eq!(format_amount(&Currency::from_coins(1)), "1 C");
        assert_eq!(format_amount(&Currency::from_coins(1234)), "1.234 K");
        assert_eq!(format_amount(&Currency::from_coins(1_000_000)), "1 M");
    }

    #[test]
    fn test_format_four_significant_digits() {
        // 123.456 m rounds to 123.5 m
        let amount = Currency::from_biguint(
            num_bigint::BigUint::from(123_456u32) * num_bigint::BigUint::from(10u32).pow(18),
        );
        assert_eq!(format_amount(&amount), "123.5 m");
        // 1.5 C keeps its trailing digit, zeros trimmed
        let amount = parse_amount("1.5C").unwrap();
        assert_eq!(format_amount(&amount), "1.5 C");
    }

    #[test]
    fn test_format_tera_is_the_ceiling() {
        // 1235 T coins stay in tera rather than advancing past the ladder
        let amount = Currency::from_biguint(
            num_bigint::BigUint::from(1235u32) * num_bigint::BigUint::from(10u32).pow(36),
        );
        assert_eq!(format_amount(&amount), "1235 T");
    }

    #[test]
    fn test_format_is_lossy_but_parse_of_raw_is_not() {
        let amount = base(1_234_567_890_123_456);
        let raw = format!("{}{}", amount, BASE_UNIT_SUFFIX);
        assert_eq!(parse_amount(&raw), Ok(amount));
    }

    #[test]
    fn test_period_round_trip() {
        assert_eq!(period_to_weeks(1008), "1");
        assert_eq!(period_to_weeks(2015), "1");
        assert_eq!(period_to_weeks(0), "0");
        assert_eq!(parse_period("1"), Ok(1008));
        assert_eq!(parse_period("0.5"), Ok(504));
    }

    #[test]
    fn test_parse_period_malformed() {
        assert!(matches!(parse_period("abc"), Err(AmountError::Malformed(_))));
        assert!(matches!(parse_period("-1"), Err(AmountError::Malformed(_))));
        assert!(matches!(parse_period("inf"), Err(AmountError::Malformed(_))));
        assert!(matches!(parse_period(""), Err(AmountError::Malformed(_))));
    }

    #[test]
    fn test_error_messages_are_operator_friendly() {
        let err = parse_amount("10Q").unwrap_err();
        assert_eq!(err.to_string(), "amount is missing units");
        let err = parse_amount("xC").unwrap_err();
        assert_eq!(err.to_string(), "malformed amount: \"x\" is not a valid number");
        let err = parse_amount("0.0000000000000000000000005C").unwrap_err();
        assert_eq!(err.to_string(), "non-integer number of base units");
    }
}
