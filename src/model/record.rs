//! The neutral paragraph records handed to serializers.

use serde::{Deserialize, Serialize};

/// One output paragraph.
///
/// Serializers map each record to a paragraph block; a record with
/// `page_break_before` set starts a new page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphRecord {
    /// Paragraph text (empty for spacers and page-break markers)
    pub text: String,

    /// Whether a hard page break precedes this paragraph
    #[serde(default)]
    pub page_break_before: bool,
}

impl ParagraphRecord {
    /// Create a regular paragraph record.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            page_break_before: false,
        }
    }

    /// Create the empty record that marks a page transition.
    pub fn page_break() -> Self {
        Self {
            text: String::new(),
            page_break_before: true,
        }
    }

    /// Whether this record marks a page transition.
    pub fn is_page_break(&self) -> bool {
        self.page_break_before
    }
}
