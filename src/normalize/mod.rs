//! Text normalization pipeline.
//!
//! Normalization is an ordered list of named [`Stage`]s, each a pure
//! rewrite of the previous stage's output:
//!
//! 1. truncate the trailing reference section (`referencias` by default)
//! 2. remove parenthesized spans
//! 3. drop hyphens that do not join two word characters
//! 4. drop `#` and `*`
//! 5. drop stray parentheses
//! 6. collapse whitespace
//!
//! Stages can be switched off, but enabled stages always run in this
//! order. The pipeline is total: any string, including an empty one,
//! yields a result.

mod stages;

pub use stages::{
    collapse_whitespace, normalize_hyphens, reference_matcher, remove_markup,
    remove_parentheticals, remove_stray_parens, truncate_references, Stage,
};

use once_cell::sync::Lazy;
use regex::Regex;

/// Reference-section heading recognized by default.
pub const DEFAULT_REFERENCE_MARKER: &str = "referencias";

static DEFAULT_NORMALIZER: Lazy<Normalizer> = Lazy::new(Normalizer::default);

/// Normalization preset levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizePreset {
    /// Whitespace collapse only
    Minimal,
    /// The full pipeline
    #[default]
    Standard,
}

/// Options for text normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Enabled stages (run in pipeline order regardless of listing order)
    pub stages: Vec<Stage>,

    /// Words that open a reference section, matched case-insensitively
    pub reference_markers: Vec<String>,
}

impl NormalizeOptions {
    /// Create options from a preset.
    pub fn from_preset(preset: NormalizePreset) -> Self {
        match preset {
            NormalizePreset::Minimal => Self::minimal(),
            NormalizePreset::Standard => Self::standard(),
        }
    }

    /// Only collapse whitespace.
    pub fn minimal() -> Self {
        Self {
            stages: vec![Stage::CollapseWhitespace],
            reference_markers: vec![DEFAULT_REFERENCE_MARKER.to_string()],
        }
    }

    /// Every stage enabled.
    pub fn standard() -> Self {
        Self {
            stages: Stage::ALL.to_vec(),
            reference_markers: vec![DEFAULT_REFERENCE_MARKER.to_string()],
        }
    }

    /// Enable a stage.
    pub fn with_stage(mut self, stage: Stage) -> Self {
        if !self.stages.contains(&stage) {
            self.stages.push(stage);
        }
        self
    }

    /// Disable a stage.
    pub fn without_stage(mut self, stage: Stage) -> Self {
        self.stages.retain(|s| *s != stage);
        self
    }

    /// Keep reference sections instead of truncating them.
    pub fn keep_references(self) -> Self {
        self.without_stage(Stage::TruncateReferences)
    }

    /// Replace the reference-section markers.
    pub fn with_reference_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reference_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Whether a stage is enabled.
    pub fn is_enabled(&self, stage: Stage) -> bool {
        self.stages.contains(&stage)
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Compiled normalization pipeline.
#[derive(Debug, Clone)]
pub struct Normalizer {
    options: NormalizeOptions,
    reference_matcher: Option<Regex>,
}

impl Normalizer {
    /// Create a new pipeline with the given options.
    pub fn new(options: NormalizeOptions) -> Self {
        let reference_matcher = if options.is_enabled(Stage::TruncateReferences) {
            reference_matcher(&options.reference_markers)
        } else {
            None
        };

        Self {
            options,
            reference_matcher,
        }
    }

    /// Create a pipeline from a preset.
    pub fn from_preset(preset: NormalizePreset) -> Self {
        Self::new(NormalizeOptions::from_preset(preset))
    }

    /// The options in use.
    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// The enabled stages, in the order they run.
    pub fn stages(&self) -> impl Iterator<Item = Stage> + '_ {
        Stage::ALL
            .into_iter()
            .filter(move |stage| self.options.is_enabled(*stage))
    }

    /// Run the text through every enabled stage.
    pub fn normalize(&self, text: &str) -> String {
        self.stages()
            .fold(text.to_string(), |current, stage| self.apply(stage, &current))
    }

    /// Run a single stage.
    pub fn apply(&self, stage: Stage, text: &str) -> String {
        let output = match stage {
            Stage::TruncateReferences => match &self.reference_matcher {
                Some(matcher) => truncate_references(text, matcher),
                None => text.to_string(),
            },
            Stage::RemoveParentheticals => remove_parentheticals(text),
            Stage::NormalizeHyphens => normalize_hyphens(text),
            Stage::RemoveMarkup => remove_markup(text),
            Stage::RemoveStrayParens => remove_stray_parens(text),
            Stage::CollapseWhitespace => collapse_whitespace(text),
        };

        if output.len() != text.len() {
            log::debug!(
                "{}: {} -> {} bytes",
                stage,
                text.len(),
                output.len()
            );
        }

        output
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(NormalizeOptions::default())
    }
}

/// Normalize text with the standard pipeline.
pub fn normalize(text: &str) -> String {
    DEFAULT_NORMALIZER.normalize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_reference_truncation() {
        assert_eq!(
            normalize("Body text.\n\nReferencias:\n[1] Foo."),
            "Body text."
        );
    }

    #[test]
    fn test_parenthetical_removal() {
        assert_eq!(
            normalize("This is a (hidden link) sentence."),
            "This is a sentence."
        );
    }

    #[test]
    fn test_hyphen_preservation() {
        let result = normalize("A well-known compound - and a loose dash.");
        assert_eq!(result, "A well-known compound and a loose dash.");
    }

    #[test]
    fn test_nested_parentheses_limitation() {
        assert_eq!(normalize("a (b (c) d) e"), "a b d e");
    }

    #[test]
    fn test_markup_and_blank_lines() {
        let text = "# Título\n\n\n\n**Texto** con   espacios.  \n\tSegunda línea";
        assert_eq!(
            normalize(text),
            "Título\n\nTexto con espacios.\nSegunda línea"
        );
    }

    #[test]
    fn test_stages_run_in_pipeline_order() {
        let options = NormalizeOptions {
            stages: vec![Stage::CollapseWhitespace, Stage::RemoveParentheticals],
            reference_markers: vec![],
        };
        let normalizer = Normalizer::new(options);
        let stages: Vec<Stage> = normalizer.stages().collect();
        assert_eq!(
            stages,
            [Stage::RemoveParentheticals, Stage::CollapseWhitespace]
        );
        assert_eq!(normalizer.normalize("a (b) c"), "a c");
    }

    #[test]
    fn test_keep_references() {
        let normalizer = Normalizer::new(NormalizeOptions::standard().keep_references());
        assert_eq!(
            normalizer.normalize("Body.\nReferencias\n[1] Foo."),
            "Body.\nReferencias\n[1] Foo."
        );
    }

    #[test]
    fn test_custom_markers() {
        let options = NormalizeOptions::standard().with_reference_markers(["Bibliography"]);
        let normalizer = Normalizer::new(options);
        assert_eq!(
            normalizer.normalize("Body.\nReferencias kept\nBIBLIOGRAPHY\nx"),
            "Body.\nReferencias kept"
        );
    }

    #[test]
    fn test_minimal_preset() {
        let normalizer = Normalizer::from_preset(NormalizePreset::Minimal);
        assert_eq!(
            normalizer.normalize("  keep (this) - and #that  "),
            "keep (this) - and #that"
        );
    }
}
