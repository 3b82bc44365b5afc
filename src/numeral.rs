use std::ops::RangeInclusive;

use rug::Integer;
use thiserror::Error;

/// Supported radices, digits above 9 are the letters `a` to `z`
pub const BASES: RangeInclusive<u32> = 2..=36;

#[derive(Error, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumeralError {
    #[error("Base {0} is outside the supported range 2 to 36")]
    InvalidBase(u32),
    #[error("Invalid digit '{digit}' at position {pos} for base {base}")]
    InvalidDigit { digit: char, pos: usize, base: u32 },
}

/// Convert a numeral in the given base to an integer
///
/// Letters denote the digits 10 to 35 regardless of case. The digits
/// are accumulated left to right with Horner's scheme, so numerals of
/// any length are converted exactly. The empty numeral is zero.
///
/// # Example
///
/// ```
/// use ratinterp::numeral::parse;
///
/// assert_eq!(parse("ff", 16).unwrap(), 255);
/// assert_eq!(parse("Z", 36).unwrap(), 35);
/// assert!(parse("g", 16).is_err());
/// ```
pub fn parse(digits: &str, base: u32) -> Result<Integer, NumeralError> {
    if !BASES.contains(&base) {
        return Err(NumeralError::InvalidBase(base));
    }
    let mut res = Integer::new();
    for (pos, digit) in digits.chars().enumerate() {
        let Some(d) = digit.to_digit(base) else {
            return Err(NumeralError::InvalidDigit { digit, pos, base });
        };
        res *= base;
        res += d;
    }
    Ok(res)
}
