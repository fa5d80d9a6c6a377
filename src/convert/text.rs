//! Plain text extractor.

use crate::error::{Error, Result};

use super::{Extracted, Extractor};

/// Passes UTF-8 text through as unpaginated input.
#[derive(Debug, Clone, Default)]
pub struct PlainTextExtractor {
    _private: (),
}

impl PlainTextExtractor {
    /// Create a new plain text extractor.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Extractor for PlainTextExtractor {
    fn supported_extensions(&self) -> &[&str] {
        &["txt", "text"]
    }

    fn name(&self) -> &str {
        "text"
    }

    fn extract(&self, bytes: &[u8]) -> Result<Extracted> {
        let text = std::str::from_utf8(bytes).map_err(|e| Error::extraction(self.name(), e))?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        Ok(Extracted::Text(text.to_string()))
    }
}
