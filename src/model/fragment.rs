//! Positioned text fragments as delivered by a glyph extractor.

use serde::{Deserialize, Serialize};

/// A run of characters with its position on the page.
///
/// Coordinates use a bottom-up y axis (PDF user space): a larger `y` is
/// closer to the top of the page. Zero `width` or `height` is valid.
///
/// When deserialized, a missing `x` or `y` is taken from the translation
/// part of a pdf.js `transform` matrix (`[a, b, c, d, e, f]`, so `e` and
/// `f`) and defaults to `0.0` when neither is present. The pdf.js field
/// names `str` and `fontName` are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawFragment")]
pub struct TextFragment {
    /// The text content
    pub text: String,

    /// X position (left edge)
    pub x: f32,

    /// Y position (baseline)
    pub y: f32,

    /// Advance width of the run
    pub width: f32,

    /// Height of the run (roughly the font size)
    pub height: f32,

    /// Font identifier assigned by the extractor
    #[serde(rename = "fontId", skip_serializing_if = "Option::is_none")]
    pub font_id: Option<String>,
}

/// Wire shape accepted on input, before the position is resolved.
#[derive(Deserialize)]
struct RawFragment {
    #[serde(default, alias = "str")]
    text: String,
    #[serde(default)]
    x: Option<f32>,
    #[serde(default)]
    y: Option<f32>,
    #[serde(default)]
    width: f32,
    #[serde(default)]
    height: f32,
    #[serde(default)]
    transform: Option<Vec<f32>>,
    #[serde(default, rename = "fontId", alias = "font_id", alias = "fontName")]
    font_id: Option<String>,
}

impl From<RawFragment> for TextFragment {
    fn from(raw: RawFragment) -> Self {
        let translation = |index: usize| {
            raw.transform
                .as_ref()
                .and_then(|m| m.get(index).copied())
        };

        Self {
            x: raw.x.or_else(|| translation(4)).unwrap_or(0.0),
            y: raw.y.or_else(|| translation(5)).unwrap_or(0.0),
            text: raw.text,
            width: raw.width,
            height: raw.height,
            font_id: raw.font_id,
        }
    }
}

impl TextFragment {
    /// Create a new fragment without font information.
    pub fn new(text: impl Into<String>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            width,
            height,
            font_id: None,
        }
    }

    /// Right edge of the fragment (`x + width`).
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Whether the fragment carries no visible text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Whether all coordinates are finite numbers.
    pub fn has_finite_geometry(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// The fragments of one page, in extraction order (not visual order).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Page {
    /// Fragments as produced by the extractor
    pub fragments: Vec<TextFragment>,
}

impl Page {
    /// Create an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fragment to the page.
    pub fn push(&mut self, fragment: TextFragment) {
        self.fragments.push(fragment);
    }

    /// Number of fragments on the page.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Check if the page has no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl From<Vec<TextFragment>> for Page {
    fn from(fragments: Vec<TextFragment>) -> Self {
        Self { fragments }
    }
}

impl FromIterator<TextFragment> for Page {
    fn from_iter<I: IntoIterator<Item = TextFragment>>(iter: I) -> Self {
        Self {
            fragments: iter.into_iter().collect(),
        }
    }
}
