//! Report generation over a [`PdfBackend`].

use std::path::Path;

use crate::backend::PdfBackend;
use crate::error::Result;
use crate::model::{DocumentSummary, PageReport, Report};

use super::options::{ErrorMode, ReportOptions};
use super::text::{preview_lines, split_lines, structure_indicators};

/// Builds report sections from an open document.
///
/// The generator borrows the backend; the caller owns the document and
/// decides when it is released.
pub struct ReportGenerator<'a, B: PdfBackend + ?Sized> {
    backend: &'a B,
    options: &'a ReportOptions,
}

impl<'a, B: PdfBackend + ?Sized> ReportGenerator<'a, B> {
    /// Create a generator for `backend`.
    pub fn new(backend: &'a B, options: &'a ReportOptions) -> Self {
        Self { backend, options }
    }

    /// Number of leading pages that will be sampled.
    pub fn pages_to_check(&self) -> u32 {
        self.options.max_pages.min(self.backend.page_count())
    }

    /// Document-level summary.
    pub fn summary(&self, path: &Path) -> DocumentSummary {
        DocumentSummary {
            path: path.display().to_string(),
            pdf_version: self.backend.version(),
            page_count: self.backend.page_count(),
            metadata: self.backend.metadata(),
        }
    }

    /// Report section for the page at zero-based `index`.
    pub fn page(&self, index: u32) -> Result<PageReport> {
        let text = match self.backend.extract_text(index) {
            Ok(text) => text,
            Err(e) if self.options.error_mode == ErrorMode::Lenient => {
                log::warn!("Failed to extract text from page {}: {}", index + 1, e);
                String::new()
            }
            Err(e) => return Err(e),
        };
        let size = self.backend.page_size(index)?;

        let lines = split_lines(&text);
        log::debug!(
            "Page {}: {} bytes of text in {} lines",
            index + 1,
            text.len(),
            lines.len()
        );

        Ok(PageReport {
            number: index + 1,
            size,
            total_lines: lines.len(),
            preview: preview_lines(&lines, self.options.preview_lines, self.options.line_width),
            indicators: structure_indicators(&text, &self.options.keywords),
        })
    }

    /// Iterate over the sampled page sections, computing each on demand.
    pub fn pages(&self) -> impl Iterator<Item = Result<PageReport>> + '_ {
        (0..self.pages_to_check()).map(move |index| self.page(index))
    }

    /// Build the whole report, stopping at the first page error.
    pub fn generate(&self, path: &Path) -> Result<Report> {
        let summary = self.summary(path);
        let pages = self.pages().collect::<Result<Vec<_>>>()?;
        Ok(Report { summary, pages })
    }
}
