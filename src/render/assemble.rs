//! Mapping documents and cleaned text onto paragraph records.

use crate::model::{Document, ParagraphRecord};

/// Flatten a paginated document into paragraph records.
///
/// Every paragraph (spacers included) becomes one record. Between two
/// consecutive pages an empty record flagged `page_break_before` is
/// inserted; there is none after the last page.
pub fn assemble_document(doc: &Document) -> Vec<ParagraphRecord> {
    let mut records = Vec::with_capacity(doc.paragraph_count() + doc.pages.len());

    for (index, page) in doc.pages.iter().enumerate() {
        if index > 0 {
            records.push(ParagraphRecord::page_break());
        }
        records.extend(page.paragraphs.iter().map(ParagraphRecord::new));
    }

    records
}

/// Split unpaginated text into one record per line, with no page breaks.
pub fn assemble_text(text: &str) -> Vec<ParagraphRecord> {
    text.split('\n').map(ParagraphRecord::new).collect()
}
