//! Plain text rendering of paragraph records.

use crate::model::ParagraphRecord;

use super::RenderOptions;

/// Render records as plain text.
///
/// Paragraphs are joined with `\n`; each page-break record starts a new
/// page, and pages are joined with the configured separator. The
/// page-break record's own text is only emitted when it is non-empty.
pub fn to_text(records: &[ParagraphRecord], options: &RenderOptions) -> String {
    let mut pages: Vec<Vec<&str>> = vec![Vec::new()];

    for record in records {
        if record.page_break_before {
            pages.push(Vec::new());
            if record.text.is_empty() {
                continue;
            }
        }
        if let Some(page) = pages.last_mut() {
            page.push(&record.text);
        }
    }

    pages
        .iter()
        .map(|page| page.join("\n"))
        .collect::<Vec<_>>()
        .join(&options.page_separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_text_pages() {
        let records = vec![
            ParagraphRecord::new("Title"),
            ParagraphRecord::new(""),
            ParagraphRecord::new("Body"),
            ParagraphRecord::page_break(),
            ParagraphRecord::new("Next page"),
        ];
        let text = to_text(&records, &RenderOptions::default());
        assert_eq!(text, "Title\n\nBody\n\n\n\nNext page");
    }

    #[test]
    fn test_to_text_custom_separator() {
        let records = vec![
            ParagraphRecord::new("a"),
            ParagraphRecord::page_break(),
            ParagraphRecord::new("b"),
        ];
        let options = RenderOptions::new().with_page_separator("\n\x0c\n");
        assert_eq!(to_text(&records, &options), "a\n\x0c\nb");
    }

    #[test]
    fn test_to_text_unpaginated() {
        let records = vec![ParagraphRecord::new("one"), ParagraphRecord::new("two")];
        assert_eq!(to_text(&records, &RenderOptions::default()), "one\ntwo");
        assert_eq!(to_text(&[], &RenderOptions::default()), "");
    }
}
