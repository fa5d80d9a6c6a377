//! # pagetidy
//!
//! Reading-order text reconstruction and cleanup for extracted documents.
//!
//! Glyph extractors deliver positioned text fragments in content-stream
//! order. This library rebuilds approximate reading order, joins
//! fragments into lines with inferred word spaces, groups lines into
//! paragraphs, optionally normalizes the text, and assembles paragraph
//! records with explicit page breaks for serializers.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pagetidy::{read_pages_file, reconstruct, LayoutOptions};
//!
//! fn main() -> pagetidy::Result<()> {
//!     let pages = read_pages_file("fragments.json")?;
//!     let doc = reconstruct(&pages, &LayoutOptions::default());
//!
//!     for page in &doc.pages {
//!         println!("--- page {} ---", page.number);
//!         println!("{}", page.plain_text());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Reading order**: row-aware ordering of fragments with a stable merge sort
//! - **Line and paragraph reconstruction**: gap-based spacing, short-line breaks
//! - **Normalization**: reference truncation, parenthetical and markup removal
//! - **Parallel processing**: pages are reconstructed with Rayon
//! - **Pluggable extractors**: hosts register PDF or DOCX decoders

pub mod convert;
pub mod detect;
pub mod error;
pub mod layout;
pub mod model;
pub mod normalize;
pub mod render;

// Re-export commonly used types
pub use convert::{
    ConvertOptions, ConvertResult, Extracted, Extractor, ExtractorRegistry, OutputFormat,
};
pub use detect::{detect_input_from_bytes, detect_input_from_path, InputKind};
pub use error::{Error, Result};
pub use layout::{reconstruct, LayoutAnalyzer, LayoutOptions, PageSelection};
pub use model::{Document, Line, Page, PageText, ParagraphRecord, TextFragment};
pub use normalize::{normalize, NormalizeOptions, NormalizePreset, Normalizer, Stage};
pub use render::{
    assemble_document, assemble_text, ExtractionStats, JsonFormat, RenderOptions,
};

use std::io::Read;
use std::path::Path;

/// Read pages of fragments from a JSON file.
///
/// # Example
///
/// ```no_run
/// use pagetidy::read_pages_file;
///
/// let pages = read_pages_file("fragments.json").unwrap();
/// println!("Pages: {}", pages.len());
/// ```
pub fn read_pages_file<P: AsRef<Path>>(path: P) -> Result<Vec<Page>> {
    let data = std::fs::read(path)?;
    read_pages_bytes(&data)
}

/// Read pages of fragments from JSON bytes.
pub fn read_pages_bytes(data: &[u8]) -> Result<Vec<Page>> {
    convert::parse_fragments(data)
}

/// Read pages of fragments from a reader.
pub fn read_pages_reader<R: Read>(mut reader: R) -> Result<Vec<Page>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    read_pages_bytes(&data)
}

/// Render a reconstructed document as plain text.
///
/// Pages are separated according to `options`.
///
/// # Example
///
/// ```no_run
/// use pagetidy::{read_pages_file, reconstruct, to_text, LayoutOptions, RenderOptions};
///
/// let pages = read_pages_file("fragments.json").unwrap();
/// let doc = reconstruct(&pages, &LayoutOptions::default());
/// std::fs::write("extract.txt", to_text(&doc, &RenderOptions::default())).unwrap();
/// ```
pub fn to_text(doc: &Document, options: &RenderOptions) -> String {
    render::to_text(&assemble_document(doc), options)
}

/// Render a reconstructed document's records as JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    render::to_json(&assemble_document(doc), format)
}

/// Builder for reconstructing and cleaning documents.
///
/// # Example
///
/// ```no_run
/// use pagetidy::{NormalizePreset, PageSelection, PageTidy};
///
/// let text = PageTidy::new()
///     .with_pages(PageSelection::Range(1..=5))
///     .with_normalize(NormalizePreset::Standard)
///     .parse("fragments.json")?
///     .to_text();
/// # Ok::<(), pagetidy::Error>(())
/// ```
pub struct PageTidy {
    layout_options: LayoutOptions,
    normalize_options: Option<NormalizeOptions>,
    render_options: RenderOptions,
}

impl PageTidy {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            layout_options: LayoutOptions::default(),
            normalize_options: None,
            render_options: RenderOptions::default(),
        }
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.layout_options = self.layout_options.sequential();
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.layout_options = self.layout_options.with_pages(pages);
        self
    }

    /// Replace the layout options.
    pub fn with_layout(mut self, options: LayoutOptions) -> Self {
        self.layout_options = options;
        self
    }

    /// Normalize text with a preset.
    pub fn with_normalize(mut self, preset: NormalizePreset) -> Self {
        self.normalize_options = Some(NormalizeOptions::from_preset(preset));
        self
    }

    /// Normalize text with explicit options.
    pub fn with_normalize_options(mut self, options: NormalizeOptions) -> Self {
        self.normalize_options = Some(options);
        self
    }

    /// Set the separator placed between pages in text output.
    pub fn with_page_separator(mut self, separator: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_page_separator(separator);
        self
    }

    /// Reconstruct a fragment JSON file.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<PageTidyResult> {
        let pages = read_pages_file(path)?;
        Ok(self.reconstruct(&pages))
    }

    /// Reconstruct fragment JSON bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<PageTidyResult> {
        let pages = read_pages_bytes(data)?;
        Ok(self.reconstruct(&pages))
    }

    /// Reconstruct pages already in memory.
    pub fn reconstruct(self, pages: &[Page]) -> PageTidyResult {
        let document = reconstruct(pages, &self.layout_options);
        PageTidyResult {
            document,
            normalizer: self.normalize_options.map(Normalizer::new),
            render_options: self.render_options,
        }
    }
}

impl Default for PageTidy {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of reconstructing a document.
pub struct PageTidyResult {
    /// The reconstructed document
    pub document: Document,
    normalizer: Option<Normalizer>,
    render_options: RenderOptions,
}

impl PageTidyResult {
    /// Assemble paragraph records.
    ///
    /// With normalization enabled the document is flattened first, so the
    /// records carry no page breaks.
    pub fn records(&self) -> Vec<ParagraphRecord> {
        match &self.normalizer {
            Some(normalizer) => assemble_text(&normalizer.normalize(&self.document.plain_text())),
            None => assemble_document(&self.document),
        }
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.records(), &self.render_options)
    }

    /// Convert the records to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.records(), format)
    }

    /// Get plain text without normalization.
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }

    /// Statistics for the reconstructed document.
    pub fn stats(&self) -> ExtractionStats {
        ExtractionStats::from_document(&self.document)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
