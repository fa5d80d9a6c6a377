//! Merging ordered fragments into visual lines.

use crate::model::{Line, TextFragment};

use super::LayoutOptions;

/// Running state of the line fold.
#[derive(Debug, Default)]
struct LineFold {
    lines: Vec<Line>,
    current: Option<Line>,
    last_y: Option<f32>,
    last_right: f32,
}

impl LineFold {
    fn push(mut self, fragment: &TextFragment, options: &LayoutOptions) -> Self {
        if fragment.is_blank() {
            return self;
        }

        let starts_line = match self.last_y {
            None => true,
            Some(last_y) => (fragment.y - last_y).abs() > fragment.height * options.row_tolerance,
        };

        if starts_line || self.current.is_none() {
            let line = Line::new(fragment.text.clone(), fragment.y, fragment.height);
            if let Some(done) = self.current.replace(line) {
                self.lines.push(done);
            }
        } else if let Some(line) = self.current.as_mut() {
            let gap = fragment.x - self.last_right;
            let needs_space = gap > fragment.width * options.word_gap_ratio
                && !line.text.ends_with(char::is_whitespace)
                && !fragment.text.starts_with(char::is_whitespace);
            if needs_space {
                line.text.push(' ');
            }
            line.text.push_str(&fragment.text);
        }

        self.last_y = Some(fragment.y);
        self.last_right = fragment.right();
        self
    }

    fn finish(mut self) -> Vec<Line> {
        self.lines.extend(self.current);
        self.lines
    }
}

/// Group fragments, already in reading order, into lines.
///
/// A fragment opens a new line when its baseline is more than
/// `row_tolerance` of its own height away from the previous fragment's.
/// Inside a line, one space is inserted when the gap from the previous
/// fragment's right edge exceeds `word_gap_ratio` of the fragment's width,
/// unless whitespace is already present on either side. Fragments with
/// only whitespace are ignored and do not move the running position.
pub fn merge_lines<'a, I>(ordered: I, options: &LayoutOptions) -> Vec<Line>
where
    I: IntoIterator<Item = &'a TextFragment>,
{
    ordered
        .into_iter()
        .fold(LineFold::default(), |fold, fragment| fold.push(fragment, options))
        .finish()
}
