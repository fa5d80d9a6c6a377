//! Turning reconstructed content into output.
//!
//! The assembler maps a [`Document`](crate::model::Document) or cleaned
//! text onto [`ParagraphRecord`](crate::model::ParagraphRecord)s; the
//! serializers render those records.

mod assemble;
mod json;
mod options;
mod stats;
mod text;

pub use assemble::{assemble_document, assemble_text};
pub use json::{to_json, JsonFormat};
pub use options::{RenderOptions, DEFAULT_PAGE_SEPARATOR};
pub use stats::ExtractionStats;
pub use text::to_text;
