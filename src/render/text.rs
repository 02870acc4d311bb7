//! Plain text report rendering.
//!
//! [`ReportWriter`] emits the report one section at a time, so callers can
//! stream sections as they are computed and anything already written stays
//! visible if a later page fails.

use std::io::Write;
use std::path::Path;

use crate::analyze::ReportOptions;
use crate::error::Result;
use crate::model::{DocumentSummary, PageReport, Report};

const SEPARATOR_WIDTH: usize = 60;

/// Writes report sections in the text format.
pub struct ReportWriter<W: Write> {
    out: W,
    preview_lines: usize,
}

impl<W: Write> ReportWriter<W> {
    /// Create a writer for `out`.
    pub fn new(out: W, options: &ReportOptions) -> Self {
        Self {
            out,
            preview_lines: options.preview_lines,
        }
    }

    /// `Analyzing PDF: <path>` and the opening rule.
    pub fn write_header(&mut self, path: &Path) -> Result<()> {
        writeln!(self.out, "Analyzing PDF: {}\n", path.display())?;
        writeln!(self.out, "{}", "=".repeat(SEPARATOR_WIDTH))?;
        Ok(())
    }

    /// Page count and metadata fields.
    pub fn write_summary(&mut self, summary: &DocumentSummary) -> Result<()> {
        writeln!(self.out, "Total Pages: {}", summary.page_count)?;
        writeln!(self.out, "PDF Metadata:")?;
        if let Some(ref metadata) = summary.metadata {
            for entry in metadata.iter() {
                writeln!(self.out, "  /{}: {}", entry.key, entry.value)?;
            }
        }
        writeln!(self.out, "\n{}", "=".repeat(SEPARATOR_WIDTH))?;
        Ok(())
    }

    /// One sampled page section.
    pub fn write_page(&mut self, page: &PageReport) -> Result<()> {
        writeln!(self.out, "\n📄 PAGE {}:", page.number)?;
        writeln!(self.out, "{}", "-".repeat(SEPARATOR_WIDTH))?;

        writeln!(
            self.out,
            "Page Size: {:.2} x {:.2} points",
            page.size.width, page.size.height
        )?;
        writeln!(
            self.out,
            "Page Size (mm): {:.2} x {:.2}",
            page.size.width_mm(),
            page.size.height_mm()
        )?;
        writeln!(self.out, "Total Lines: {}", page.total_lines)?;

        writeln!(
            self.out,
            "\n📝 Content Preview (first {} lines):",
            self.preview_lines
        )?;
        writeln!(self.out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        for line in &page.preview {
            writeln!(self.out, "{:2}: {}", line.number, line.text)?;
        }

        writeln!(self.out, "\n🔍 Structure Indicators:")?;
        for indicator in &page.indicators {
            writeln!(
                self.out,
                "  Contains '{}': {}",
                indicator.keyword,
                if indicator.present { "True" } else { "False" }
            )?;
        }
        Ok(())
    }

    /// Closing rule and completion message.
    pub fn write_footer(&mut self) -> Result<()> {
        writeln!(self.out, "\n{}", "=".repeat(SEPARATOR_WIDTH))?;
        writeln!(self.out, "✅ Analysis Complete!")?;
        self.out.flush()?;
        Ok(())
    }

    /// Write a complete report.
    pub fn write_report(&mut self, report: &Report) -> Result<()> {
        self.write_header(Path::new(&report.summary.path))?;
        self.write_summary(&report.summary)?;
        for page in &report.pages {
            self.write_page(page)?;
        }
        self.write_footer()
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Render a complete report as text.
pub fn to_text(report: &Report, options: &ReportOptions) -> Result<String> {
    let mut writer = ReportWriter::new(Vec::new(), options);
    writer.write_report(report)?;
    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Metadata, PageSize, PreviewLine, StructureIndicator};

    fn sample_page() -> PageReport {
        PageReport {
            number: 1,
            size: PageSize::letter(),
            total_lines: 5,
            preview: vec![
                PreviewLine {
                    number: 1,
                    text: "A Study of Things".to_string(),
                },
                PreviewLine {
                    number: 12,
                    text: "Abstract".to_string(),
                },
            ],
            indicators: vec![
                StructureIndicator {
                    keyword: "ABSTRACT".to_string(),
                    present: true,
                },
                StructureIndicator {
                    keyword: "REFERENCES".to_string(),
                    present: false,
                },
            ],
        }
    }

    #[test]
    fn test_to_text() {
        let report = Report {
            summary: DocumentSummary {
                path: "paper.pdf".to_string(),
                pdf_version: Some("1.7".to_string()),
                page_count: 1,
                metadata: Some(Metadata::new().with("Title", "A Study")),
            },
            pages: vec![sample_page()],
        };

        let text = to_text(&report, &ReportOptions::default()).unwrap();
        let rule = "=".repeat(60);
        let dash = "-".repeat(60);
        let expected = format!(
            "Analyzing PDF: paper.pdf\n\n{rule}\nTotal Pages: 1\nPDF Metadata:\n  /Title: A Study\n\n{rule}\n\
             \n📄 PAGE 1:\n{dash}\nPage Size: 612.00 x 792.00 points\nPage Size (mm): 215.90 x 279.40\n\
             Total Lines: 5\n\n📝 Content Preview (first 30 lines):\n{dash}\n 1: A Study of Things\n\
             12: Abstract\n\n🔍 Structure Indicators:\n  Contains 'ABSTRACT': True\n\
             \x20 Contains 'REFERENCES': False\n\n{rule}\n✅ Analysis Complete!\n"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_summary_without_metadata() {
        let summary = DocumentSummary {
            path: "empty.pdf".to_string(),
            pdf_version: None,
            page_count: 0,
            metadata: None,
        };

        let mut writer = ReportWriter::new(Vec::new(), &ReportOptions::default());
        writer.write_summary(&summary).unwrap();
        let out = String::from_utf8(writer.into_inner()).unwrap();

        assert_eq!(out, format!("Total Pages: 0\nPDF Metadata:\n\n{}\n", "=".repeat(60)));
    }

    #[test]
    fn test_preview_header_follows_options() {
        let options = ReportOptions::new().with_preview_lines(10);
        let mut writer = ReportWriter::new(Vec::new(), &options);
        writer.write_page(&sample_page()).unwrap();
        let out = String::from_utf8(writer.into_inner()).unwrap();

        assert!(out.contains("Content Preview (first 10 lines):"));
    }
}
