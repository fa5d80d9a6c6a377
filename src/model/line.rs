//! Visual lines rebuilt from ordered fragments.

use serde::{Deserialize, Serialize};

/// One visual row of text.
///
/// `y` and `height` come from the first fragment assigned to the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Merged text of the row
    pub text: String,
    /// Y position of the first fragment
    pub y: f32,
    /// Height of the first fragment
    pub height: f32,
}

impl Line {
    /// Create a line.
    pub fn new(text: impl Into<String>, y: f32, height: f32) -> Self {
        Self {
            text: text.into(),
            y,
            height,
        }
    }

    /// Create a line with no position, for text that did not come from fragments.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(text, 0.0, 0.0)
    }

    /// Number of characters after trimming surrounding whitespace.
    pub fn trimmed_len(&self) -> usize {
        self.text.trim().chars().count()
    }

    /// Whether the line has no visible text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
