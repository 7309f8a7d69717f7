//! Extraction output and its human-readable forms.

use serde::Serialize;

/// Final values of one run plus their count.
///
/// `count` always equals `values.len()`; the fields are private so the two
/// cannot drift apart. The result owns its strings and holds no reference to
/// the scanned text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    values: Vec<String>,
    count: usize,
}

impl ExtractionResult {
    pub fn new(values: Vec<String>) -> Self {
        let count = values.len();
        ExtractionResult { values, count }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Values joined by `\n`, without a trailing newline.
    pub fn render_values(&self) -> String {
        self.values.join("\n")
    }

    /// `"No names found."` or `"Found N name(s)."`.
    pub fn summary(&self) -> String {
        match self.count {
            0 => "No names found.".to_string(),
            1 => "Found 1 name.".to_string(),
            n => format!("Found {} names.", n),
        }
    }
}
