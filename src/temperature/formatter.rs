use crate::temperature::unit::Unit;
use serde::Serialize;
use std::fmt;

/// Message shown when the temperature field does not hold a number
pub const INVALID_INPUT_MESSAGE: &str = "Please enter a valid temperature.";

/// Digits after the decimal point in the display text
pub const DEFAULT_DECIMALS: usize = 2;

/// Text written to the output surface after a conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DisplayText(String);

impl DisplayText {
    pub fn converted(value: f64, unit: Unit, decimals: usize) -> Self {
        Self(format!(
            "Converted Temperature: {} {}",
            format_fixed(value, decimals),
            unit.label()
        ))
    }

    pub fn invalid_input() -> Self {
        Self(INVALID_INPUT_MESSAGE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DisplayText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DisplayText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<DisplayText> for String {
    fn from(text: DisplayText) -> Self {
        text.0
    }
}

/// Upper bound on digits after the decimal point
pub const MAX_DECIMALS: usize = 20;

/// Format `value` with exactly `decimals` digits after the point.
///
/// Rounds to nearest, with exact halfway values going away from zero
/// (33.125 -> "33.13", -5.125 -> "-5.13"). An exact zero always prints
/// unsigned; small negatives that round to zero keep their sign ("-0.00").
/// Infinities print as "Infinity" / "-Infinity".
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // -0.0 + 0.0 == +0.0
    let value = value + 0.0;

    if is_halfway(value, decimals) {
        // A halfway value has exactly `decimals + 1` digits, the last a '5'
        round_away_from_zero(&format!("{:.*}", decimals + 1, value))
    } else {
        format!("{:.*}", decimals, value)
    }
}

/// Whether `value` lies exactly between two `decimals`-digit numbers.
///
/// With `value = m * 2^e` and `m` odd, doubling and scaling by `10^decimals`
/// gives `m * 5^decimals * 2^(e + decimals + 1)`, which is an odd integer
/// exactly when `e == -(decimals + 1)`.
fn is_halfway(value: f64, decimals: usize) -> bool {
    if !value.is_finite() || value == 0.0 {
        return false;
    }

    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };

    exponent + mantissa.trailing_zeros() as i64 == -(decimals as i64 + 1)
}

/// Drop the trailing '5' of an exact halfway expansion and bump the last
/// remaining digit, carrying as needed ("9.5" -> "10", "-0.125" -> "-0.13")
fn round_away_from_zero(exact: &str) -> String {
    let mut digits: Vec<u8> = exact.as_bytes()[..exact.len() - 1].to_vec();

    let mut i = digits.len();
    loop {
        if i == 0 {
            digits.insert(0, b'1');
            break;
        }
        i -= 1;
        match digits[i] {
            b'.' => {}
            b'9' => digits[i] = b'0',
            b'-' => {
                digits.insert(i + 1, b'1');
                break;
            }
            d => {
                digits[i] = d + 1;
                break;
            }
        }
    }

    // Zero decimals leave a bare point behind
    if digits.last() == Some(&b'.') {
        digits.pop();
    }

    digits.into_iter().map(char::from).collect()
}
