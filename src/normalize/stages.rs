//! The individual rewrite stages of the normalization pipeline.
//!
//! Each stage is a pure `&str -> String` function. Their order matters:
//! parenthetical removal must see balanced pairs before stray parentheses
//! are dropped, and whitespace collapse cleans up after every deletion.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// An innermost parenthesized span on a single line.
static PARENTHETICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\([^()\n]*\)").expect("parenthetical pattern is valid"));

/// Runs of spaces and tabs.
static SPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]+").expect("space run pattern is valid"));

/// Three or more consecutive newlines.
static NEWLINE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("newline run pattern is valid"));

/// A named normalization stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Drop everything from the last reference-section marker onwards
    TruncateReferences,
    /// Delete innermost `( ... )` spans
    RemoveParentheticals,
    /// Delete hyphens that do not join two word characters
    NormalizeHyphens,
    /// Delete `#` and `*`
    RemoveMarkup,
    /// Delete any `(` or `)` left over
    RemoveStrayParens,
    /// Collapse spaces and blank lines, trim every line
    CollapseWhitespace,
}

impl Stage {
    /// All stages in pipeline order.
    pub const ALL: [Stage; 6] = [
        Stage::TruncateReferences,
        Stage::RemoveParentheticals,
        Stage::NormalizeHyphens,
        Stage::RemoveMarkup,
        Stage::RemoveStrayParens,
        Stage::CollapseWhitespace,
    ];

    /// Short stable name, used in logs and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Stage::TruncateReferences => "truncate-references",
            Stage::RemoveParentheticals => "remove-parentheticals",
            Stage::NormalizeHyphens => "normalize-hyphens",
            Stage::RemoveMarkup => "remove-markup",
            Stage::RemoveStrayParens => "remove-stray-parens",
            Stage::CollapseWhitespace => "collapse-whitespace",
        }
    }

    /// Look a stage up by its name.
    pub fn from_name(name: &str) -> Option<Stage> {
        Stage::ALL.into_iter().find(|stage| stage.name() == name)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Build the case-insensitive, whole-word matcher for reference markers.
///
/// Returns `None` when no usable marker is given.
pub fn reference_matcher<S: AsRef<str>>(markers: &[S]) -> Option<Regex> {
    let words: Vec<String> = markers
        .iter()
        .map(|m| m.as_ref().trim())
        .filter(|m| !m.is_empty())
        .map(regex::escape)
        .collect();

    if words.is_empty() {
        return None;
    }

    let pattern = format!(r"(?i)\b(?:{})\b", words.join("|"));
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            log::warn!("Reference markers ignored: {}", e);
            None
        }
    }
}

/// Cut the text at the start of the last marker match.
///
/// Text before the marker on the same line is kept.
pub fn truncate_references(text: &str, matcher: &Regex) -> String {
    match matcher.find_iter(text).last() {
        Some(m) => text[..m.start()].to_string(),
        None => text.to_string(),
    }
}

/// Delete every parenthesized span that contains no other parenthesis.
///
/// Nested groups are not stripped recursively: in `a (b (c) d) e` only
/// `(c)` goes, and the outer parentheses are left for
/// [`remove_stray_parens`]. Spans never cross a newline.
pub fn remove_parentheticals(text: &str) -> String {
    PARENTHETICAL.replace_all(text, "").into_owned()
}

/// Keep hyphens between two word characters, delete all others.
///
/// Neighbours are judged on the original text, so `a-b-c` keeps both
/// hyphens. No other character is touched.
pub fn normalize_hyphens(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let joins_word = |i: usize| {
        i > 0
            && is_word_char(chars[i - 1])
            && chars.get(i + 1).copied().is_some_and(is_word_char)
    };

    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| c != '-' || joins_word(i))
        .map(|(_, &c)| c)
        .collect()
}

/// Delete `#` and `*` characters.
pub fn remove_markup(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '#' | '*')).collect()
}

/// Delete every remaining `(` and `)`.
pub fn remove_stray_parens(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '(' | ')')).collect()
}

/// Collapse whitespace noise while keeping paragraph structure.
///
/// Line endings become `\n`, runs of spaces/tabs become one space, every
/// line is trimmed of spaces/tabs, more than one blank line in a row
/// becomes one, and leading/trailing newlines are removed.
pub fn collapse_whitespace(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    let spaced = SPACE_RUN.replace_all(&unified, " ");

    let trimmed = spaced
        .split('\n')
        .map(|line| line.trim_matches(|c: char| c == ' ' || c == '\t'))
        .collect::<Vec<_>>()
        .join("\n");

    NEWLINE_RUN
        .replace_all(&trimmed, "\n\n")
        .trim_matches('\n')
        .to_string()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_names_round_trip() {
        for stage in Stage::ALL {
            assert_eq!(Stage::from_name(stage.name()), Some(stage));
        }
        assert_eq!(Stage::from_name("unknown"), None);
        assert_eq!(Stage::RemoveMarkup.to_string(), "remove-markup");
    }

    #[test]
    fn test_truncate_references_uses_last_match() {
        let matcher = reference_matcher(&["referencias"]).unwrap();
        let text = "Ver referencias abajo.\nCuerpo.\nREFERENCIAS\n[1] Autor.";
        assert_eq!(
            truncate_references(text, &matcher),
            "Ver referencias abajo.\nCuerpo.\n"
        );
    }

    #[test]
    fn test_truncate_references_keeps_text_before_marker_on_line() {
        let matcher = reference_matcher(&["referencias"]).unwrap();
        assert_eq!(truncate_references("Fin. Referencias: x", &matcher), "Fin. ");
    }

    #[test]
    fn test_truncate_references_whole_word_only() {
        let matcher = reference_matcher(&["referencias"]).unwrap();
        let text = "Mis preferencias son claras.";
        assert_eq!(truncate_references(text, &matcher), text);
    }

    #[test]
    fn test_reference_matcher_multiple_and_empty() {
        let matcher = reference_matcher(&["referencias", "References", "  "]).unwrap();
        assert_eq!(
            truncate_references("Body.\nReferences\n[1]", &matcher),
            "Body.\n"
        );
        assert!(reference_matcher(&["", " "]).is_none());
        assert!(reference_matcher::<&str>(&[]).is_none());
    }

    #[test]
    fn test_reference_marker_is_escaped() {
        let matcher = reference_matcher(&["refs."]).unwrap();
        assert_eq!(truncate_references("a refsX b", &matcher), "a refsX b");
    }

    #[test]
    fn test_remove_parentheticals() {
        assert_eq!(
            remove_parentheticals("This is a (hidden link) sentence."),
            "This is a  sentence."
        );
        assert_eq!(remove_parentheticals("a (b) c (d)"), "a  c ");
    }

    #[test]
    fn test_remove_parentheticals_nested_and_multiline() {
        assert_eq!(remove_parentheticals("a (b (c) d) e"), "a (b  d) e");
        assert_eq!(remove_parentheticals("open (\nclose)"), "open (\nclose)");
    }

    #[test]
    fn test_normalize_hyphens() {
        assert_eq!(
            normalize_hyphens("A well-known compound - and a loose dash."),
            "A well-known compound  and a loose dash."
        );
        assert_eq!(normalize_hyphens("a-b-c"), "a-b-c");
        assert_eq!(normalize_hyphens("-start end- mid--dle"), "start end middle");
        assert_eq!(normalize_hyphens("año-nuevo"), "año-nuevo");
    }

    #[test]
    fn test_normalize_hyphens_leaves_control_sequences_alone() {
        let text = "keep \u{0000}HY\u{0000} as is";
        assert_eq!(normalize_hyphens(text), text);
        assert_eq!(normalize_hyphens("x\u{0000}-\u{0000}y"), "x\u{0000}\u{0000}y");
    }

    #[test]
    fn test_remove_markup_and_parens() {
        assert_eq!(remove_markup("## Title **bold**"), " Title bold");
        assert_eq!(remove_stray_parens("left( right)"), "left right");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(
            collapse_whitespace("  a \t b  \r\n\n\n\n  c  \n"),
            "a b\n\nc"
        );
        assert_eq!(collapse_whitespace("one\ntwo"), "one\ntwo");
        assert_eq!(collapse_whitespace("\n\n  \n"), "");
    }
}
