//! Grouping lines into paragraphs.
//!
//! Without font sizes or styles, the only signals are blank lines and line
//! length: a blank line becomes an explicit spacer paragraph, a short line
//! (heading, caption, list label) stands alone, and consecutive long lines
//! are joined into one paragraph. This recovers structure only
//! approximately; wrapped paragraphs whose last line happens to be short
//! are split, for instance.

use crate::model::Line;

use super::LayoutOptions;

#[derive(Debug, Default)]
struct ParagraphFold {
    paragraphs: Vec<String>,
    open: Option<String>,
}

impl ParagraphFold {
    fn flush(&mut self) {
        if let Some(paragraph) = self.open.take() {
            self.paragraphs.push(paragraph);
        }
    }

    fn push(mut self, line: &Line, short_line_chars: usize) -> Self {
        if line.is_blank() {
            self.flush();
            self.paragraphs.push(String::new());
        } else if line.trimmed_len() < short_line_chars {
            self.flush();
            self.paragraphs.push(line.text.clone());
        } else if let Some(paragraph) = self.open.as_mut() {
            paragraph.push(' ');
            paragraph.push_str(&line.text);
        } else {
            self.open = Some(line.text.clone());
        }
        self
    }

    fn finish(mut self) -> Vec<String> {
        self.flush();
        self.paragraphs
    }
}

/// Group lines into paragraphs; empty strings are blank-line spacers.
pub fn segment_paragraphs<'a, I>(lines: I, options: &LayoutOptions) -> Vec<String>
where
    I: IntoIterator<Item = &'a Line>,
{
    lines
        .into_iter()
        .fold(ParagraphFold::default(), |fold, line| {
            fold.push(line, options.short_line_chars)
        })
        .finish()
}
