use crate::config::Config;
use crate::temperature::error::ConvertError;
use crate::temperature::formatter::{DisplayText, DEFAULT_DECIMALS, MAX_DECIMALS};
use crate::temperature::parser::parse_temperature;
use crate::temperature::unit::Unit;
use serde::Serialize;

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    /// Parsed input value
    pub value: f64,
    pub from: Unit,
    pub to: Unit,
    /// Unrounded result in `to`
    pub converted: f64,
}

/// Converts a raw temperature field into display text
#[derive(Debug, Clone)]
pub struct Converter {
    decimals: usize,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(DEFAULT_DECIMALS)
    }
}

impl Converter {
    /// `decimals` is capped at `MAX_DECIMALS`
    pub fn new(decimals: usize) -> Self {
        Self {
            decimals: decimals.min(MAX_DECIMALS),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.decimals)
    }

    /// Parse and convert, reporting why the input was rejected
    pub fn try_convert(&self, raw_value: &str, unit: Unit) -> Result<Conversion, ConvertError> {
        let value = parse_temperature(raw_value)?;
        let converted = unit.convert_value(value);

        Ok(Conversion {
            value,
            from: unit,
            to: unit.target(),
            converted,
        })
    }

    /// Produce the text for the output area. Invalid input yields the fixed
    /// message rather than an error.
    pub fn convert(&self, raw_value: &str, unit: Unit) -> DisplayText {
        match self.try_convert(raw_value, unit) {
            Ok(conversion) => {
                log::debug!(
                    "Converted {} {} to {} {}",
                    conversion.value,
                    conversion.from,
                    conversion.converted,
                    conversion.to
                );
                self.display(&conversion)
            }
            Err(e) => {
                log::warn!("{}", e);
                DisplayText::invalid_input()
            }
        }
    }

    pub fn display(&self, conversion: &Conversion) -> DisplayText {
        DisplayText::converted(conversion.converted, conversion.to, self.decimals)
    }
}

/// Convert with the default two-decimal formatting
pub fn convert(raw_value: &str, unit: Unit) -> DisplayText {
    Converter::default().convert(raw_value, unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenarios() {
        assert_eq!(
            convert("100", Unit::Celsius).as_str(),
            "Converted Temperature: 212.00 Fahrenheit"
        );
        assert_eq!(
            convert("32", Unit::Fahrenheit).as_str(),
            "Converted Temperature: 0.00 Celsius"
        );
        assert_eq!(
            convert("abc", Unit::Celsius).as_str(),
            "Please enter a valid temperature."
        );
        assert_eq!(
            convert("-40", Unit::Celsius).as_str(),
            "Converted Temperature: -40.00 Fahrenheit"
        );
        assert_eq!(
            convert("0", Unit::Fahrenheit).as_str(),
            "Converted Temperature: -17.78 Celsius"
        );
    }

    #[test]
    fn test_invalid_inputs_yield_message() {
        for input in ["", "--", "abc", "NaN"] {
            assert_eq!(
                convert(input, Unit::Fahrenheit),
                DisplayText::invalid_input()
            );
        }
    }

    #[test]
    fn test_below_absolute_zero_is_accepted() {
        assert_eq!(
            convert("-500", Unit::Celsius).as_str(),
            "Converted Temperature: -868.00 Fahrenheit"
        );
    }

    #[test]
    fn test_try_convert() {
        let conversion = Converter::default()
            .try_convert(" 212 ", Unit::Fahrenheit)
            .unwrap();
        assert_eq!(conversion.value, 212.0);
        assert_eq!(conversion.from, Unit::Fahrenheit);
        assert_eq!(conversion.to, Unit::Celsius);
        assert_eq!(conversion.converted, 100.0);

        assert_eq!(
            Converter::default().try_convert("x", Unit::Celsius),
            Err(ConvertError::InvalidNumericInput("x".to_string()))
        );
    }

    #[test]
    fn test_halfway_results_round_away_from_zero() {
        // 0.625 C is exactly 33.125 F
        assert_eq!(
            convert("0.625", Unit::Celsius).as_str(),
            "Converted Temperature: 33.13 Fahrenheit"
        );
        // -20.625 C is exactly -5.125 F
        assert_eq!(
            convert("-20.625", Unit::Celsius).as_str(),
            "Converted Temperature: -5.13 Fahrenheit"
        );
    }

    #[test]
    fn test_trailing_text_is_ignored() {
        assert_eq!(
            convert("12abc", Unit::Fahrenheit),
            convert("12", Unit::Fahrenheit)
        );
        assert_eq!(
            convert("100 degrees", Unit::Celsius).as_str(),
            "Converted Temperature: 212.00 Fahrenheit"
        );
    }

    #[test]
    fn test_overflow_shows_infinity() {
        assert_eq!(
            convert("1e308", Unit::Celsius).as_str(),
            "Converted Temperature: Infinity Fahrenheit"
        );
        assert_eq!(
            convert("-Infinity", Unit::Fahrenheit).as_str(),
            "Converted Temperature: -Infinity Celsius"
        );
        assert_eq!(
            convert("inf", Unit::Celsius).as_str(),
            "Please enter a valid temperature."
        );
    }

    #[test]
    fn test_decimals_are_capped() {
        let converter = Converter::new(4_000_000_000);
        let text = converter.convert("0", Unit::Celsius);
        assert_eq!(
            text.as_str(),
            format!("Converted Temperature: 32.{} Fahrenheit", "0".repeat(MAX_DECIMALS))
        );
    }

    #[test]
    fn test_custom_decimals() {
        let converter = Converter::new(1);
        assert_eq!(
            converter.convert("37", Unit::Celsius).as_str(),
            "Converted Temperature: 98.6 Fahrenheit"
        );
    }
}
