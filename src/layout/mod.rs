//! Layout reconstruction: fragments to lines to paragraphs.
//!
//! Each page runs through three independent stages:
//!
//! 1. [`order_fragments`] sorts fragments into approximate reading order.
//! 2. [`merge_lines`] folds them into visual lines with inferred spaces.
//! 3. [`segment_paragraphs`] groups lines into paragraphs and spacers.
//!
//! No stage looks across page boundaries, so pages are processed in
//! parallel with Rayon and collected back in source order.

mod lines;
mod options;
mod order;
mod paragraphs;

pub use lines::merge_lines;
pub use options::{LayoutOptions, PageSelection};
pub use order::{order_fragments, reading_order};
pub use paragraphs::segment_paragraphs;

use rayon::prelude::*;

use crate::model::{Document, Page, PageText};

/// Rebuilds reading-ordered paragraphs from positioned fragments.
#[derive(Debug, Clone, Default)]
pub struct LayoutAnalyzer {
    options: LayoutOptions,
}

impl LayoutAnalyzer {
    /// Create an analyzer with the given options.
    pub fn new(options: LayoutOptions) -> Self {
        Self { options }
    }

    /// The options in use.
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Reconstruct the paragraphs of a single page.
    pub fn analyze_page(&self, number: u32, page: &Page) -> PageText {
        let ordered = order_fragments(page, self.options.row_tolerance);
        let lines = merge_lines(ordered.iter().copied(), &self.options);
        let paragraphs = segment_paragraphs(&lines, &self.options);

        log::debug!(
            "Page {}: {} fragments, {} lines, {} paragraphs",
            number,
            page.len(),
            lines.len(),
            paragraphs.len()
        );

        PageText {
            number,
            paragraphs,
            fragment_count: page.len(),
            line_count: lines.len(),
        }
    }

    /// Reconstruct every selected page, preserving page order.
    pub fn analyze(&self, pages: &[Page]) -> Document {
        let selected: Vec<(u32, &Page)> = pages
            .iter()
            .enumerate()
            .map(|(i, page)| ((i + 1) as u32, page))
            .filter(|(number, _)| self.options.pages.includes(*number))
            .collect();

        if selected.is_empty() && !pages.is_empty() {
            log::warn!(
                "Page selection {:?} matches none of the {} pages",
                self.options.pages,
                pages.len()
            );
        }

        let pages: Vec<PageText> = if self.options.parallel && selected.len() > 1 {
            selected
                .par_iter()
                .map(|(number, page)| self.analyze_page(*number, page))
                .collect()
        } else {
            selected
                .iter()
                .map(|(number, page)| self.analyze_page(*number, page))
                .collect()
        };

        Document { pages }
    }
}

/// Reconstruct a document from its pages of fragments.
pub fn reconstruct(pages: &[Page], options: &LayoutOptions) -> Document {
    LayoutAnalyzer::new(options.clone()).analyze(pages)
}
