//! Report options and configuration.

use crate::model::{ABSTRACT_KEYWORD, REFERENCES_KEYWORD};

/// Default number of leading pages sampled.
pub const DEFAULT_MAX_PAGES: u32 = 3;

/// Default number of leading lines considered for the preview.
pub const DEFAULT_PREVIEW_LINES: usize = 30;

/// Default preview width in characters.
pub const DEFAULT_LINE_WIDTH: usize = 70;

/// Options controlling what goes into a report.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Maximum number of leading pages to sample
    pub max_pages: u32,

    /// Number of leading text lines considered for the preview
    pub preview_lines: usize,

    /// Maximum characters shown per preview line
    pub line_width: usize,

    /// Keywords checked for each sampled page
    pub keywords: Vec<String>,

    /// Error handling mode for text extraction
    pub error_mode: ErrorMode,
}

impl ReportOptions {
    /// Create new report options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of sampled pages.
    pub fn with_max_pages(mut self, pages: u32) -> Self {
        self.max_pages = pages;
        self
    }

    /// Set the number of lines considered for the preview.
    pub fn with_preview_lines(mut self, lines: usize) -> Self {
        self.preview_lines = lines;
        self
    }

    /// Set the preview width.
    pub fn with_line_width(mut self, width: usize) -> Self {
        self.line_width = width;
        self
    }

    /// Replace the keyword list.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (text extraction failures yield empty pages).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            preview_lines: DEFAULT_PREVIEW_LINES,
            line_width: DEFAULT_LINE_WIDTH,
            keywords: vec![ABSTRACT_KEYWORD.to_string(), REFERENCES_KEYWORD.to_string()],
            error_mode: ErrorMode::Strict,
        }
    }
}

/// Error handling mode for per-page text extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on any error
    #[default]
    Strict,
    /// Treat unextractable page text as empty and continue
    Lenient,
}
