use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The temperature field did not hold a finite number
    #[error("Invalid numeric input: '{0}'")]
    InvalidNumericInput(String),
    #[error("Unknown unit: '{0}' (expected celsius or fahrenheit)")]
    UnknownUnit(String),
}
