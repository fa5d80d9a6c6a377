//! Layout reconstruction options.

use std::ops::RangeInclusive;

use crate::error::{Error, Result};

/// Options for rebuilding lines and paragraphs from fragments.
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    /// Fraction of the taller fragment's height within which two
    /// fragments share a row (ordering) or continue a line (merging)
    pub row_tolerance: f32,

    /// Fraction of a fragment's width that a horizontal gap must exceed
    /// before a word-boundary space is inserted
    pub word_gap_ratio: f32,

    /// Lines shorter than this (in characters, after trimming) stand
    /// alone as headings or captions
    pub short_line_chars: usize,

    /// Whether to process pages in parallel
    pub parallel: bool,

    /// Which pages to reconstruct
    pub pages: PageSelection,
}

impl LayoutOptions {
    /// Create new layout options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the row tolerance.
    pub fn with_row_tolerance(mut self, tolerance: f32) -> Self {
        self.row_tolerance = tolerance;
        self
    }

    /// Set the word gap ratio.
    pub fn with_word_gap_ratio(mut self, ratio: f32) -> Self {
        self.word_gap_ratio = ratio;
        self
    }

    /// Set the short-line threshold.
    pub fn with_short_line_chars(mut self, chars: usize) -> Self {
        self.short_line_chars = chars;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.pages = pages;
        self
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            row_tolerance: 0.5,
            word_gap_ratio: 0.5,
            short_line_chars: 30,
            parallel: true,
            pages: PageSelection::All,
        }
    }
}

/// Page selection (1-indexed, in source order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageSelection {
    /// All pages
    #[default]
    All,
    /// A range of pages (inclusive)
    Range(RangeInclusive<u32>),
    /// Specific pages
    Pages(Vec<u32>),
    /// Several inclusive ranges, sorted by start and non-overlapping
    Ranges(Vec<RangeInclusive<u32>>),
}

impl PageSelection {
    /// Check if a page number should be included.
    pub fn includes(&self, page: u32) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Range(range) => range.contains(&page),
            PageSelection::Pages(pages) => pages.contains(&page),
            PageSelection::Ranges(ranges) => ranges.iter().any(|r| r.contains(&page)),
        }
    }

    /// Parse a page selection string (e.g., "1-10", "1,3,5,7-10").
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(PageSelection::All);
        }

        let number = |part: &str| -> Result<u32> {
            part.trim()
                .parse()
                .map_err(|_| Error::InvalidPageRange(format!("invalid page number '{}'", part.trim())))
        };

        let range = |part: &str| -> Result<RangeInclusive<u32>> {
            let (start, end) = match part.split_once('-') {
                Some((start, end)) => (number(start)?, number(end)?),
                None => {
                    let page = number(part)?;
                    (page, page)
                }
            };
            if start > end {
                return Err(Error::InvalidPageRange(format!("{} is after {}", start, end)));
            }
            Ok(start..=end)
        };

        // Simple range (e.g., "1-10")
        if !s.contains(',') && s.contains('-') {
            return range(s).map(PageSelection::Range);
        }

        // Comma-separated list with possible ranges, kept as ranges
        let mut parts = s.split(',').map(range).collect::<Result<Vec<_>>>()?;
        parts.sort_unstable_by_key(|r| *r.start());

        let mut ranges: Vec<RangeInclusive<u32>> = Vec::with_capacity(parts.len());
        for next in parts {
            match ranges.last_mut() {
                Some(last) if next.start().saturating_sub(1) <= *last.end() => {
                    if next.end() > last.end() {
                        *last = *last.start()..=*next.end();
                    }
                }
                _ => ranges.push(next),
            }
        }

        Ok(PageSelection::Ranges(ranges))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_options_builder() {
        let options = LayoutOptions::new()
            .with_short_line_chars(40)
            .with_word_gap_ratio(0.3)
            .sequential();

        assert_eq!(options.short_line_chars, 40);
        assert_eq!(options.word_gap_ratio, 0.3);
        assert_eq!(options.row_tolerance, 0.5);
        assert!(!options.parallel);
    }

    #[test]
    fn test_page_selection_includes() {
        let all = PageSelection::All;
        assert!(all.includes(1));
        assert!(all.includes(100));

        let range = PageSelection::Range(5..=10);
        assert!(!range.includes(4));
        assert!(range.includes(5));
        assert!(range.includes(10));
        assert!(!range.includes(11));

        let pages = PageSelection::Pages(vec![1, 3, 5, 7]);
        assert!(pages.includes(1));
        assert!(!pages.includes(2));
        assert!(pages.includes(3));

        let ranges = PageSelection::Ranges(vec![1..=2, 8..=9]);
        assert!(ranges.includes(2));
        assert!(!ranges.includes(5));
        assert!(ranges.includes(9));
    }

    #[test]
    fn test_page_selection_parse() {
        assert_eq!(PageSelection::parse("all").unwrap(), PageSelection::All);
        assert_eq!(PageSelection::parse("").unwrap(), PageSelection::All);
        assert_eq!(PageSelection::parse("1-10").unwrap(), PageSelection::Range(1..=10));
        assert_eq!(
            PageSelection::parse("1,3,5-7,10").unwrap(),
            PageSelection::Ranges(vec![1..=1, 3..=3, 5..=7, 10..=10])
        );
        assert_eq!(
            PageSelection::parse("7-9, 2, 3-4, 8").unwrap(),
            PageSelection::Ranges(vec![2..=4, 7..=9])
        );
    }

    #[test]
    fn test_page_selection_huge_list_range_is_not_expanded() {
        let selection = PageSelection::parse("1,1-4294967295").unwrap();
        assert_eq!(selection, PageSelection::Ranges(vec![1..=u32::MAX]));
        assert!(selection.includes(1));
        assert!(selection.includes(u32::MAX));
    }

    #[test]
    fn test_page_selection_parse_errors() {
        assert!(matches!(
            PageSelection::parse("x-3"),
            Err(Error::InvalidPageRange(_))
        ));
        assert!(matches!(
            PageSelection::parse("9-2"),
            Err(Error::InvalidPageRange(_))
        ));
        assert!(PageSelection::parse("1,two").is_err());
        assert!(matches!(
            PageSelection::parse("5-1,3"),
            Err(Error::InvalidPageRange(_))
        ));
    }
}
