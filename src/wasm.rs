// WebAssembly bindings used by the converter page (web/app.js)
use crate::config::Config;
use crate::form::{handle_submit, FormSubmission, TextArea};
use crate::temperature::{Converter, Unit};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct ConverterWasm {
    converter: Converter,
}

impl Default for ConverterWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl ConverterWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            converter: Converter::default(),
        }
    }

    /// Build a converter from TOML config contents
    #[wasm_bindgen]
    pub fn with_config(config_content: &str) -> Result<ConverterWasm, JsValue> {
        let config = Config::load_from_str(config_content)
            .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?;

        Ok(Self {
            converter: Converter::from_config(&config),
        })
    }

    /// Convert a raw field value; `unit` is the selector value
    #[wasm_bindgen]
    pub fn convert(&self, value: &str, unit: &str) -> String {
        self.converter
            .convert(value, Unit::from_selector(unit))
            .into_string()
    }

    /// Handle a form submission and return the text for the result element
    #[wasm_bindgen]
    pub fn submit(&self, value: &str, unit: &str) -> String {
        let mut area = TextArea::new();
        handle_submit(
            &self.converter,
            &FormSubmission::new(value, unit),
            &mut area,
        );
        area.text().to_string()
    }

    /// Structured result as JSON: {"value", "from", "to", "converted"}
    #[wasm_bindgen]
    pub fn convert_json(&self, value: &str, unit: &str) -> Result<String, JsValue> {
        let conversion = self
            .converter
            .try_convert(value, Unit::from_selector(unit))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_json::to_string(&conversion)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
    }
}
