pub mod cli;
pub mod config;
pub mod form;
pub mod temperature;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use temperature::{convert, DisplayText, Unit};
