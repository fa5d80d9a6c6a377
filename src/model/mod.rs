//! Data model for positioned text and reconstructed documents.
//!
//! Fragments flow in from an extractor, lines are transient, and the
//! [`Document`] plus [`ParagraphRecord`] list are what renderers consume.

mod document;
mod fragment;
mod line;
mod record;

pub use document::{Document, PageText};
pub use fragment::{Page, TextFragment};
pub use line::Line;
pub use record::ParagraphRecord;
