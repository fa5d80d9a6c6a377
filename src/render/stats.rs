//! Extraction statistics.

use serde::{Deserialize, Serialize};

use crate::model::{Document, ParagraphRecord};

/// Statistics collected while reconstructing and rendering content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Total number of pages processed
    pub page_count: u32,

    /// Number of text fragments consumed
    pub fragment_count: u32,

    /// Number of visual lines found
    pub line_count: u32,

    /// Number of non-empty paragraphs
    pub paragraph_count: u32,

    /// Number of blank-line spacers
    pub spacer_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics from a reconstructed document.
    pub fn from_document(doc: &Document) -> Self {
        let mut stats = Self::new();
        for page in &doc.pages {
            stats.add_page();
            stats.fragment_count += page.fragment_count as u32;
            stats.line_count += page.line_count as u32;
            for paragraph in &page.paragraphs {
                stats.add_paragraph(paragraph);
            }
        }
        stats
    }

    /// Collect statistics from assembled records.
    ///
    /// Page count is one more than the number of page breaks; fragment
    /// and line counts are unknown at this point and stay zero.
    pub fn from_records(records: &[ParagraphRecord]) -> Self {
        let mut stats = Self::new();
        if records.is_empty() {
            return stats;
        }

        stats.add_page();
        for record in records {
            if record.is_page_break() {
                stats.add_page();
                if record.text.is_empty() {
                    continue;
                }
            }
            stats.add_paragraph(&record.text);
        }
        stats
    }

    /// Increment page count.
    pub fn add_page(&mut self) {
        self.page_count += 1;
    }

    /// Count a paragraph, or a spacer when it is blank.
    pub fn add_paragraph(&mut self, text: &str) {
        if text.trim().is_empty() {
            self.spacer_count += 1;
        } else {
            self.paragraph_count += 1;
            self.count_text(text);
        }
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }
}
