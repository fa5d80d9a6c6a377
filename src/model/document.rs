//! Document-level types.

use serde::{Deserialize, Serialize};

/// A reconstructed document: pages of paragraphs in reading order.
///
/// Page order and paragraph order are final once the layout stage has
/// produced them; nothing downstream reorders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Pages in source order
    pub pages: Vec<PageText>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self { pages: Vec::new() }
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by its source page number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&PageText> {
        self.pages.iter().find(|p| p.number == page_num)
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: PageText) {
        self.pages.push(page);
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Total number of paragraphs, spacers included.
    pub fn paragraph_count(&self) -> usize {
        self.pages.iter().map(|p| p.paragraphs.len()).sum()
    }

    /// Flatten into a single string.
    ///
    /// Paragraphs are joined with `\n` and pages with a blank line, which
    /// is the shape the normalizer expects for paginated input.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl FromIterator<PageText> for Document {
    fn from_iter<I: IntoIterator<Item = PageText>>(iter: I) -> Self {
        Self {
            pages: iter.into_iter().collect(),
        }
    }
}

/// The paragraphs reconstructed for one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageText {
    /// Page number (1-indexed, in source order)
    pub number: u32,

    /// Paragraphs in reading order; an empty string is a blank-line spacer
    pub paragraphs: Vec<String>,

    /// Number of fragments the page was built from
    #[serde(default)]
    pub fragment_count: usize,

    /// Number of visual lines found on the page
    #[serde(default)]
    pub line_count: usize,
}

impl PageText {
    /// Create a page from its paragraphs.
    pub fn new(number: u32, paragraphs: Vec<String>) -> Self {
        Self {
            number,
            paragraphs,
            fragment_count: 0,
            line_count: 0,
        }
    }

    /// Paragraphs joined with `\n`.
    pub fn plain_text(&self) -> String {
        self.paragraphs.join("\n")
    }

    /// Number of blank-line spacer paragraphs.
    pub fn spacer_count(&self) -> usize {
        self.paragraphs.iter().filter(|p| p.is_empty()).count()
    }

    /// Check if the page produced no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}
