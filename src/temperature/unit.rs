use crate::temperature::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Temperature scale a value is entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl Unit {
    /// Selector value used by the web form
    pub fn selector_value(self) -> &'static str {
        match self {
            Unit::Celsius => "celsius",
            Unit::Fahrenheit => "fahrenheit",
        }
    }

    /// Human-readable label used in the display text
    pub fn label(self) -> &'static str {
        match self {
            Unit::Celsius => "Celsius",
            Unit::Fahrenheit => "Fahrenheit",
        }
    }

    /// The scale a value in this unit is converted into
    pub fn target(self) -> Unit {
        match self {
            Unit::Celsius => Unit::Fahrenheit,
            Unit::Fahrenheit => Unit::Celsius,
        }
    }

    /// Convert `value` (expressed in `self`) into `self.target()`
    pub fn convert_value(self, value: f64) -> f64 {
        match self {
            Unit::Celsius => value * 9.0 / 5.0 + 32.0,
            Unit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        }
    }

    /// Map a raw selector value onto a unit.
    ///
    /// Only `"celsius"` selects Celsius; anything else is read as Fahrenheit,
    /// which is what the page has always done with its two-option selector.
    pub fn from_selector(value: &str) -> Unit {
        match value {
            "celsius" => Unit::Celsius,
            "fahrenheit" => Unit::Fahrenheit,
            other => {
                log::warn!(
                    "Unrecognized unit selector '{}', treating it as fahrenheit",
                    other
                );
                Unit::Fahrenheit
            }
        }
    }
}

impl FromStr for Unit {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "celsius" | "c" | "°c" => Ok(Unit::Celsius),
            "fahrenheit" | "f" | "°f" => Ok(Unit::Fahrenheit),
            _ => Err(ConvertError::UnknownUnit(s.to_string())),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
