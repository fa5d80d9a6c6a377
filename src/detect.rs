//! Input format detection.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// The kind of input a byte stream holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// A PDF file, decoded by an external extractor
    Pdf,
    /// A DOCX (ZIP) container, decoded by an external extractor
    Docx,
    /// Positioned text fragments serialized as JSON
    Fragments,
    /// Unpaginated UTF-8 text
    PlainText,
}

impl InputKind {
    /// Canonical file extension for this kind.
    pub fn extension(&self) -> &'static str {
        match self {
            InputKind::Pdf => "pdf",
            InputKind::Docx => "docx",
            InputKind::Fragments => "json",
            InputKind::PlainText => "txt",
        }
    }

    /// Whether the core can read this kind without an external extractor.
    pub fn is_builtin(&self) -> bool {
        matches!(self, InputKind::Fragments | InputKind::PlainText)
    }
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            InputKind::Pdf => "PDF",
            InputKind::Docx => "DOCX",
            InputKind::Fragments => "fragment JSON",
            InputKind::PlainText => "plain text",
        };
        f.write_str(name)
    }
}

const PDF_MAGIC: &[u8] = b"%PDF-";
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Bytes read from a file for detection. Plain text is validated on this
/// prefix only, so a truncated multi-byte sequence at the end is allowed.
const SNIFF_LEN: usize = 4096;

/// Detect the input kind of a file.
///
/// # Example
/// ```no_run
/// use pagetidy::detect::detect_input_from_path;
///
/// let kind = detect_input_from_path("page-fragments.json").unwrap();
/// println!("{}", kind);
/// ```
pub fn detect_input_from_path<P: AsRef<Path>>(path: P) -> Result<InputKind> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file).take(SNIFF_LEN as u64);
    let mut header = Vec::with_capacity(SNIFF_LEN);
    reader.read_to_end(&mut header)?;
    detect_input_from_bytes(&header)
}

/// Detect the input kind of a byte slice.
///
/// Empty input is treated as (empty) plain text.
pub fn detect_input_from_bytes(data: &[u8]) -> Result<InputKind> {
    if data.starts_with(PDF_MAGIC) {
        return Ok(InputKind::Pdf);
    }
    if data.starts_with(ZIP_MAGIC) {
        return Ok(InputKind::Docx);
    }

    let text = match std::str::from_utf8(data) {
        Ok(text) => text,
        // A prefix may cut a multi-byte char in half.
        Err(e) if e.error_len().is_none() => {
            std::str::from_utf8(&data[..e.valid_up_to()]).map_err(|_| Error::UnknownFormat)?
        }
        Err(_) => return Err(Error::UnknownFormat),
    };

    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    match text.trim_start().as_bytes().first() {
        Some(b'[') | Some(b'{') => Ok(InputKind::Fragments),
        _ => Ok(InputKind::PlainText),
    }
}

/// Check if a file holds fragment JSON.
pub fn is_fragments<P: AsRef<Path>>(path: P) -> bool {
    matches!(detect_input_from_path(path), Ok(InputKind::Fragments))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_pdf() {
        let data = b"%PDF-1.7\n%\xe2\xe3\xcf\xd3";
        assert_eq!(detect_input_from_bytes(data).unwrap(), InputKind::Pdf);
    }

    #[test]
    fn test_detect_docx() {
        let data = b"PK\x03\x04\x14\x00\x06\x00";
        assert_eq!(detect_input_from_bytes(data).unwrap(), InputKind::Docx);
    }

    #[test]
    fn test_detect_fragments() {
        assert_eq!(
            detect_input_from_bytes(b"  \n[[{\"text\":\"a\"}]]").unwrap(),
            InputKind::Fragments
        );
        assert_eq!(
            detect_input_from_bytes(b"{\"pages\": []}").unwrap(),
            InputKind::Fragments
        );
    }

    #[test]
    fn test_detect_plain_text() {
        assert_eq!(
            detect_input_from_bytes("Título\n\nTexto".as_bytes()).unwrap(),
            InputKind::PlainText
        );
        assert_eq!(detect_input_from_bytes(b"").unwrap(), InputKind::PlainText);
    }

    #[test]
    fn test_detect_truncated_utf8_prefix() {
        let bytes = "abc é".as_bytes();
        let cut = &bytes[..bytes.len() - 1];
        assert_eq!(detect_input_from_bytes(cut).unwrap(), InputKind::PlainText);
    }

    #[test]
    fn test_detect_binary() {
        let result = detect_input_from_bytes(b"\xff\xfe\x00binary\xc0");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_input_kind_helpers() {
        assert_eq!(InputKind::Fragments.extension(), "json");
        assert!(InputKind::PlainText.is_builtin());
        assert!(!InputKind::Pdf.is_builtin());
        assert_eq!(InputKind::Docx.to_string(), "DOCX");
    }
}
