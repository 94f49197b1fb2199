//! Text style table entry

use super::TableEntry;
use crate::types::Handle;

/// A text style table entry
///
/// Dimension text takes its height from the style when the style has a
/// fixed height, otherwise from DIMTXT.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Unique handle
    pub handle: Handle,
    /// Style name
    pub name: String,
    /// Fixed text height (0 = variable)
    pub height: f64,
    /// Width factor
    pub width_factor: f64,
    /// Primary font file name
    pub font_file: String,
}

impl TextStyle {
    /// Create a new text style
    pub fn new(name: impl Into<String>) -> Self {
        TextStyle {
            handle: Handle::NULL,
            name: name.into(),
            height: 0.0,
            width_factor: 1.0,
            font_file: "txt".to_string(),
        }
    }

    /// Create the standard "Standard" text style
    pub fn standard() -> Self {
        Self::new("Standard")
    }

    /// Builder: Set a fixed text height
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Builder: Set the width factor
    pub fn with_width_factor(mut self, width_factor: f64) -> Self {
        self.width_factor = width_factor;
        self
    }

    /// True if the style does not fix the text height
    pub fn has_variable_height(&self) -> bool {
        self.height == 0.0
    }
}

impl TableEntry for TextStyle {
    fn handle(&self) -> Handle {
        self.handle
    }

    fn set_handle(&mut self, handle: Handle) {
        self.handle = handle;
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn is_standard(&self) -> bool {
        self.name.eq_ignore_ascii_case("Standard")
    }
}
