//! Report types.

use super::{Metadata, PageSize};
use serde::{Deserialize, Serialize};

/// Keyword flagging an abstract section.
pub const ABSTRACT_KEYWORD: &str = "ABSTRACT";

/// Keyword flagging a references section.
pub const REFERENCES_KEYWORD: &str = "REFERENCES";

/// A complete structural preview report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Document-level summary
    pub summary: DocumentSummary,

    /// Sections for the sampled pages, in page order
    pub pages: Vec<PageReport>,
}

impl Report {
    /// Number of pages that were sampled.
    pub fn sampled_page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Document-level part of the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Path the document was opened from
    pub path: String,

    /// PDF version from the header, if known
    pub pdf_version: Option<String>,

    /// Total number of pages
    pub page_count: u32,

    /// `/Info` fields; `None` when the document has no `/Info` dictionary
    pub metadata: Option<Metadata>,
}

/// Report section for one sampled page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageReport {
    /// Page number (1-indexed)
    pub number: u32,

    /// Page dimensions
    pub size: PageSize,

    /// Number of newline-delimited segments in the page text
    pub total_lines: usize,

    /// Non-blank lines from the head of the page
    pub preview: Vec<PreviewLine>,

    /// Keyword presence flags
    pub indicators: Vec<StructureIndicator>,
}

impl PageReport {
    /// Presence flag for `keyword`, if it was checked.
    pub fn indicator(&self, keyword: &str) -> Option<bool> {
        self.indicators
            .iter()
            .find(|i| i.keyword.eq_ignore_ascii_case(keyword))
            .map(|i| i.present)
    }

    /// Whether the page text mentions "ABSTRACT".
    pub fn has_abstract(&self) -> bool {
        self.indicator(ABSTRACT_KEYWORD).unwrap_or(false)
    }

    /// Whether the page text mentions "REFERENCES".
    pub fn has_references(&self) -> bool {
        self.indicator(REFERENCES_KEYWORD).unwrap_or(false)
    }
}

/// A numbered line in the page preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewLine {
    /// Line number within the page text (1-indexed, counting blank lines)
    pub number: usize,

    /// Untrimmed line content, truncated to the preview width
    pub text: String,
}

/// Presence of a fixed keyword in the page text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureIndicator {
    /// Keyword as configured, e.g. `ABSTRACT`
    pub keyword: String,
    /// Whether the page text contains the keyword, ignoring case
    pub present: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with(indicators: Vec<StructureIndicator>) -> PageReport {
        PageReport {
            number: 1,
            size: PageSize::letter(),
            total_lines: 0,
            preview: Vec::new(),
            indicators,
        }
    }

    #[test]
    fn test_indicator_lookup() {
        let page = page_with(vec![
            StructureIndicator {
                keyword: ABSTRACT_KEYWORD.to_string(),
                present: true,
            },
            StructureIndicator {
                keyword: REFERENCES_KEYWORD.to_string(),
                present: false,
            },
        ]);

        assert!(page.has_abstract());
        assert!(!page.has_references());
        assert_eq!(page.indicator("abstract"), Some(true));
        assert_eq!(page.indicator("METHODS"), None);
    }

    #[test]
    fn test_unchecked_keyword_reads_false() {
        let page = page_with(Vec::new());
        assert!(!page.has_abstract());
        assert!(!page.has_references());
    }
}
