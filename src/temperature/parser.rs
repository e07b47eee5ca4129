use crate::temperature::error::ConvertError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Longest number at the start of the field
    /// Matches: optional sign + ("Infinity" | digits with optional fraction and exponent)
    /// Examples: "12", "-40", ".5", "1.", "1e3", "+Infinity"
    static ref LEADING_NUMBER: Regex = Regex::new(
        r"^(?P<sign>[+-]?)(?:(?P<inf>Infinity)|(?P<num>(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?))"
    )
    .unwrap();
}

/// Parse the raw text of the temperature field.
///
/// Leading whitespace is skipped and the longest leading number is taken;
/// whatever follows it is ignored, so "12 degrees" reads as 12. Text with no
/// leading number is invalid. "Infinity" is the only spelled-out value
/// accepted; "NaN", "inf" and friends are not numbers here.
pub fn parse_temperature(raw: &str) -> Result<f64, ConvertError> {
    let invalid = || ConvertError::InvalidNumericInput(raw.to_string());

    let caps = LEADING_NUMBER
        .captures(raw.trim_start())
        .ok_or_else(invalid)?;

    let magnitude = if caps.name("inf").is_some() {
        f64::INFINITY
    } else {
        // Out-of-range exponents come back as infinity, not as an error
        caps["num"].parse::<f64>().map_err(|_| invalid())?
    };

    let value = if &caps["sign"] == "-" {
        -magnitude
    } else {
        magnitude
    };

    if value.is_nan() {
        return Err(invalid());
    }

    Ok(value)
}
