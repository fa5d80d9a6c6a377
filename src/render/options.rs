//! Rendering options and configuration.

/// Separator placed between pages in plain-text output.
pub const DEFAULT_PAGE_SEPARATOR: &str = "\n\n\n\n";

/// Options for rendering paragraph records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Text placed between pages in plain-text output
    pub page_separator: String,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page separator.
    pub fn with_page_separator(mut self, separator: impl Into<String>) -> Self {
        self.page_separator = separator.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_separator: DEFAULT_PAGE_SEPARATOR.to_string(),
        }
    }
}
