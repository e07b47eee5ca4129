// Celsius/Fahrenheit conversion and the text shown for it

pub mod converter;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod unit;

pub use converter::{convert, Conversion, Converter};
pub use error::ConvertError;
pub use formatter::{
    format_fixed, DisplayText, DEFAULT_DECIMALS, INVALID_INPUT_MESSAGE, MAX_DECIMALS,
};
pub use parser::parse_temperature;
pub use unit::Unit;
