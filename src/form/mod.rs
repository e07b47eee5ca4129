// Form submission handling: field values come in as arguments, the result
// goes to whatever surface the caller passes.

use crate::temperature::{Converter, DisplayText, Unit};

/// Current values of the form's fields at submit time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    /// Raw text of the temperature field
    pub value: String,
    /// Raw value of the unit selector
    pub unit: String,
}

impl FormSubmission {
    pub fn new(value: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            unit: unit.into(),
        }
    }
}

/// Somewhere the result text is shown
pub trait OutputSurface {
    fn set_text(&mut self, text: &str);
}

/// In-memory output area holding the last text written to it
#[derive(Debug, Clone, Default)]
pub struct TextArea {
    text: String,
    writes: usize,
}

impl TextArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of times the text was set
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl OutputSurface for TextArea {
    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.writes += 1;
    }
}

/// Run one trigger: convert the submitted fields and overwrite the surface
pub fn handle_submit<S: OutputSurface + ?Sized>(
    converter: &Converter,
    submission: &FormSubmission,
    surface: &mut S,
) -> DisplayText {
    let unit = Unit::from_selector(&submission.unit);
    let text = converter.convert(&submission.value, unit);
    surface.set_text(text.as_str());
    text
}
