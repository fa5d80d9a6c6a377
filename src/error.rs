//! Error types for pagetidy library.

use std::io;
use thiserror::Error;

/// Result type alias for pagetidy operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading input or producing output.
///
/// Layout reconstruction and text normalization never fail; everything
/// here belongs to the surfaces around them.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed fragment JSON, or a JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input format is not recognized.
    #[error("Unknown input format")]
    UnknownFormat,

    /// The input is a recognized binary format that needs an external decoder.
    #[error("Unsupported input: {0} must be decoded by an external extractor")]
    UnsupportedInput(String),

    /// An extractor failed to decode its source document.
    #[error("Extraction failed ({extractor}): {message}")]
    Extraction {
        /// Name of the failing extractor
        extractor: String,
        /// The extractor's own error message
        message: String,
    },

    /// No extractor is registered for the given extension.
    #[error("No extractor for extension: {0}")]
    NoExtractor(String),

    /// Malformed page range.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),

    /// Error while serializing the output model.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Wrap a collaborator failure without altering its message.
    pub fn extraction(extractor: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Error::Extraction {
            extractor: extractor.into(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedInput("PDF".into());
        assert_eq!(
            err.to_string(),
            "Unsupported input: PDF must be decoded by an external extractor"
        );

        let err = Error::extraction("docx", "zip archive is truncated");
        assert_eq!(
            err.to_string(),
            "Extraction failed (docx): zip archive is truncated"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u32>>("[1,").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
