//! Fragment JSON extractor.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::Page;

use super::{Extracted, Extractor};

/// `{ "pages": [...] }` wrapper accepted alongside a bare page array.
#[derive(Deserialize)]
struct PagesEnvelope {
    pages: Vec<Page>,
}

/// Parse fragment JSON into pages.
///
/// Accepts either an array of pages (each an array of fragments) or an
/// object with a `pages` field holding that array.
pub fn parse_fragments(bytes: &[u8]) -> Result<Vec<Page>> {
    let bytes = bytes.strip_prefix(b"\xef\xbb\xbf").unwrap_or(bytes);
    let first = bytes.iter().find(|b| !b.is_ascii_whitespace());

    let pages = match first {
        Some(b'{') => serde_json::from_slice::<PagesEnvelope>(bytes)?.pages,
        _ => serde_json::from_slice::<Vec<Page>>(bytes)?,
    };

    log::debug!(
        "parsed {} pages, {} fragments",
        pages.len(),
        pages.iter().map(Page::len).sum::<usize>()
    );
    Ok(pages)
}

/// Reads pages of positioned fragments from JSON.
#[derive(Debug, Clone, Default)]
pub struct FragmentJsonExtractor {
    _private: (),
}

impl FragmentJsonExtractor {
    /// Create a new fragment JSON extractor.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Extractor for FragmentJsonExtractor {
    fn supported_extensions(&self) -> &[&str] {
        &["json", "fragments"]
    }

    fn name(&self) -> &str {
        "fragments"
    }

    fn extract(&self, bytes: &[u8]) -> Result<Extracted> {
        parse_fragments(bytes)
            .map(Extracted::Pages)
            .map_err(|e| Error::extraction(self.name(), e))
    }
}
