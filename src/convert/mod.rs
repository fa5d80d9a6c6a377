//! Conversion pipeline with pluggable extractors.
//!
//! An [`Extractor`] turns source bytes into either pages of positioned
//! fragments or a plain string. Conversion then runs layout analysis
//! (for pages), optional normalization, record assembly and
//! serialization.
//!
//! PDF and DOCX decoding is not part of this crate; a host registers
//! its own extractor for those extensions.
//!
//! # Example
//!
//! ```no_run
//! use pagetidy::convert::{ConvertOptions, ExtractorRegistry};
//! use std::path::Path;
//!
//! fn main() -> pagetidy::Result<()> {
//!     let registry = ExtractorRegistry::with_defaults();
//!     let result = registry.convert(Path::new("fragments.json"), &ConvertOptions::default())?;
//!     println!("{}", result.content);
//!     Ok(())
//! }
//! ```

mod fragments;
mod text;

pub use fragments::{parse_fragments, FragmentJsonExtractor};
pub use text::PlainTextExtractor;

use crate::detect::{detect_input_from_bytes, InputKind};
use crate::error::{Error, Result};
use crate::layout::{LayoutAnalyzer, LayoutOptions};
use crate::model::{Page, ParagraphRecord};
use crate::normalize::{NormalizeOptions, Normalizer};
use crate::render::{
    assemble_document, assemble_text, to_json, to_text, ExtractionStats, JsonFormat,
    RenderOptions,
};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Options for conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Layout reconstruction options
    pub layout: LayoutOptions,

    /// Normalization to apply after layout; `None` leaves text as is
    pub normalize: Option<NormalizeOptions>,

    /// Rendering options
    pub render: RenderOptions,

    /// Whether to collect statistics during conversion
    pub collect_stats: bool,

    /// Output format
    pub output_format: OutputFormat,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set layout options.
    pub fn with_layout_options(mut self, options: LayoutOptions) -> Self {
        self.layout = options;
        self
    }

    /// Enable normalization with the given options.
    pub fn with_normalize(mut self, options: NormalizeOptions) -> Self {
        self.normalize = Some(options);
        self
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Enable statistics collection.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }
}

/// Output format for conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text
    #[default]
    Text,

    /// JSON array of paragraph records
    Json,
}

impl OutputFormat {
    /// MIME type of content in this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text/plain",
            OutputFormat::Json => "application/json",
        }
    }
}

/// Result of a conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Serialized content
    pub content: String,

    /// The assembled records the content was rendered from
    pub records: Vec<ParagraphRecord>,

    /// Extraction statistics (if collected)
    pub stats: Option<ExtractionStats>,

    /// MIME type of the output
    pub mime_type: &'static str,
}

impl ConvertResult {
    /// Create a new conversion result.
    pub fn new(content: String, records: Vec<ParagraphRecord>) -> Self {
        Self {
            content,
            records,
            stats: None,
            mime_type: "text/plain",
        }
    }

    /// Set extraction statistics.
    pub fn with_stats(mut self, stats: ExtractionStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Set MIME type.
    pub fn with_mime_type(mut self, mime_type: &'static str) -> Self {
        self.mime_type = mime_type;
        self
    }

    /// Get content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// What an extractor produces.
#[derive(Debug, Clone, PartialEq)]
pub enum Extracted {
    /// Positioned fragments, one entry per page in source order
    Pages(Vec<Page>),

    /// Unpaginated text
    Text(String),
}

/// Trait for source extractors.
///
/// Implement this trait to plug in a decoder for a new format.
pub trait Extractor: Send + Sync {
    /// Get the supported file extensions for this extractor.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["pdf"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this extractor.
    fn name(&self) -> &str;

    /// Decode source bytes.
    fn extract(&self, bytes: &[u8]) -> Result<Extracted>;

    /// Check if this extractor supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry for extractors.
///
/// The registry maps file extensions to extractors and runs the
/// conversion pipeline on what they produce.
pub struct ExtractorRegistry {
    extractors: HashMap<String, Arc<dyn Extractor>>,
    by_name: HashMap<String, Arc<dyn Extractor>>,
}

impl ExtractorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            extractors: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the built-in extractors (fragment JSON, text).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(FragmentJsonExtractor::new()));
        registry.register(Arc::new(PlainTextExtractor::new()));
        registry
    }

    /// Register an extractor.
    ///
    /// The extractor will be registered for all its supported extensions,
    /// replacing any earlier registration.
    pub fn register(&mut self, extractor: Arc<dyn Extractor>) {
        for ext in extractor.supported_extensions() {
            self.extractors.insert(ext.to_lowercase(), extractor.clone());
        }
        self.by_name
            .insert(extractor.name().to_lowercase(), extractor);
    }

    /// Get an extractor by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn Extractor>> {
        self.extractors.get(&ext.to_lowercase()).cloned()
    }

    /// Get an extractor by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn Extractor>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.extractors.contains_key(&ext.to_lowercase())
    }

    /// Get all supported extensions.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut extensions: Vec<&str> = self.extractors.keys().map(|s| s.as_str()).collect();
        extensions.sort_unstable();
        extensions
    }

    /// Convert a file, choosing the extractor by extension.
    ///
    /// Files without a registered extension are classified by content.
    pub fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
        let bytes = std::fs::read(path)?;
        let ext = path.extension().and_then(|e| e.to_str());

        match ext {
            Some(ext) if self.supports(ext) => self.convert_bytes(&bytes, ext, options),
            _ => self.convert_detected(&bytes, options),
        }
    }

    /// Convert bytes using the extractor registered for `ext`.
    pub fn convert_bytes(
        &self,
        bytes: &[u8],
        ext: &str,
        options: &ConvertOptions,
    ) -> Result<ConvertResult> {
        let extractor = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::NoExtractor(ext.to_string()))?;

        log::debug!("extracting with '{}'", extractor.name());
        let extracted = extractor.extract(bytes)?;
        process(extracted, options)
    }

    /// Convert bytes after classifying them with [`detect_input_from_bytes`].
    pub fn convert_detected(&self, bytes: &[u8], options: &ConvertOptions) -> Result<ConvertResult> {
        let kind = detect_input_from_bytes(bytes)?;
        let ext = kind.extension();

        if !self.supports(ext) {
            return Err(match kind {
                InputKind::Pdf | InputKind::Docx => Error::UnsupportedInput(kind.to_string()),
                _ => Error::NoExtractor(ext.to_string()),
            });
        }
        self.convert_bytes(bytes, ext, options)
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Run layout, normalization, assembly and serialization on extracted content.
pub fn process(extracted: Extracted, options: &ConvertOptions) -> Result<ConvertResult> {
    let normalizer = options.normalize.clone().map(Normalizer::new);

    let (records, stats) = match extracted {
        Extracted::Pages(pages) => {
            let doc = LayoutAnalyzer::new(options.layout.clone()).analyze(&pages);
            let stats = options
                .collect_stats
                .then(|| ExtractionStats::from_document(&doc));

            // Normalization works on one string, so page breaks are lost.
            let records = match &normalizer {
                Some(normalizer) => assemble_text(&normalizer.normalize(&doc.plain_text())),
                None => assemble_document(&doc),
            };
            (records, stats)
        }
        Extracted::Text(text) => {
            let records = match &normalizer {
                Some(normalizer) => assemble_text(&normalizer.normalize(&text)),
                None => assemble_text(&text),
            };
            let stats = options
                .collect_stats
                .then(|| ExtractionStats::from_records(&records));
            (records, stats)
        }
    };

    let content = match options.output_format {
        OutputFormat::Text => to_text(&records, &options.render),
        OutputFormat::Json => to_json(&records, JsonFormat::Pretty)?,
    };

    let mut result =
        ConvertResult::new(content, records).with_mime_type(options.output_format.mime_type());
    if let Some(stats) = stats {
        result = result.with_stats(stats);
    }
    Ok(result)
}

/// Convert bytes with the built-in extractors, classifying them by content.
pub fn convert_bytes(bytes: &[u8], options: &ConvertOptions) -> Result<ConvertResult> {
    ExtractorRegistry::with_defaults().convert_detected(bytes, options)
}

/// Convert a file with the built-in extractors.
pub fn convert_file<P: AsRef<Path>>(path: P, options: &ConvertOptions) -> Result<ConvertResult> {
    ExtractorRegistry::with_defaults().convert(path.as_ref(), options)
}
