//! # pdfscope
//!
//! Structural preview reports for PDF documents.
//!
//! A report lists the page count and document metadata, then for the first
//! few pages the page size, a numbered preview of the extracted text and
//! whether the text mentions a fixed set of keywords ("ABSTRACT",
//! "REFERENCES"). PDF parsing itself is delegated to a [`PdfBackend`].
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> pdfscope::Result<()> {
//!     let stdout = std::io::stdout();
//!     pdfscope::generate_report("paper.pdf", &mut stdout.lock())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Structured output
//!
//! ```no_run
//! use pdfscope::{analyze_file, render};
//!
//! let report = analyze_file("paper.pdf").unwrap();
//! for page in &report.pages {
//!     println!("page {}: abstract={}", page.number, page.has_abstract());
//! }
//! println!("{}", render::to_json(&report, render::JsonFormat::Pretty).unwrap());
//! ```

pub mod analyze;
pub mod backend;
pub mod detect;
pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use analyze::{ErrorMode, ReportGenerator, ReportOptions};
pub use backend::{LopdfBackend, PdfBackend};
pub use detect::{detect_format_from_bytes, is_pdf_bytes, PdfFormat};
pub use error::{Error, Result};
pub use model::{
    DocumentSummary, Metadata, MetadataEntry, PageReport, PageSize, PreviewLine, Report,
    StructureIndicator,
};
pub use render::{JsonFormat, ReportWriter};

use std::io::Write;
use std::path::Path;

/// Write the text report for the PDF at `path` to `out`.
///
/// The header is written before the document is opened, and each page
/// section is written as soon as it is ready. On error, whatever was
/// written so far stays written.
///
/// # Errors
///
/// [`Error::FileNotFound`] if `path` does not exist; any other variant for
/// unreadable or malformed documents and for write failures.
pub fn generate_report<P: AsRef<Path>, W: Write>(path: P, out: W) -> Result<()> {
    generate_report_with_options(path, &ReportOptions::default(), out)
}

/// Write the text report for the PDF at `path` with custom options.
///
/// # Example
///
/// ```no_run
/// use pdfscope::{generate_report_with_options, ReportOptions};
///
/// let options = ReportOptions::new().with_max_pages(5).lenient();
/// generate_report_with_options("paper.pdf", &options, std::io::stdout()).unwrap();
/// ```
pub fn generate_report_with_options<P: AsRef<Path>, W: Write>(
    path: P,
    options: &ReportOptions,
    out: W,
) -> Result<()> {
    let path = path.as_ref();
    let mut writer = ReportWriter::new(out, options);
    writer.write_header(path)?;

    let backend = LopdfBackend::load_file(path)?;
    stream_sections(&backend, path, options, &mut writer)
}

/// Write the text report for an already opened document.
///
/// `path` is only used for the header line.
pub fn generate_report_from_backend<B, W>(
    backend: &B,
    path: &Path,
    options: &ReportOptions,
    out: W,
) -> Result<()>
where
    B: PdfBackend + ?Sized,
    W: Write,
{
    let mut writer = ReportWriter::new(out, options);
    writer.write_header(path)?;
    stream_sections(backend, path, options, &mut writer)
}

fn stream_sections<B, W>(
    backend: &B,
    path: &Path,
    options: &ReportOptions,
    writer: &mut ReportWriter<W>,
) -> Result<()>
where
    B: PdfBackend + ?Sized,
    W: Write,
{
    let generator = ReportGenerator::new(backend, options);
    writer.write_summary(&generator.summary(path))?;

    log::debug!(
        "Sampling {} of {} pages",
        generator.pages_to_check(),
        backend.page_count()
    );
    for page in generator.pages() {
        writer.write_page(&page?)?;
    }

    writer.write_footer()
}

/// Build the report for the PDF at `path` without writing it.
///
/// # Example
///
/// ```no_run
/// let report = pdfscope::analyze_file("paper.pdf").unwrap();
/// println!("Pages: {}", report.summary.page_count);
/// ```
pub fn analyze_file<P: AsRef<Path>>(path: P) -> Result<Report> {
    analyze_file_with_options(path, &ReportOptions::default())
}

/// Build the report for the PDF at `path` with custom options.
pub fn analyze_file_with_options<P: AsRef<Path>>(
    path: P,
    options: &ReportOptions,
) -> Result<Report> {
    let path = path.as_ref();
    let backend = LopdfBackend::load_file(path)?;
    ReportGenerator::new(&backend, options).generate(path)
}

/// Build the report for a PDF held in memory.
///
/// `name` stands in for the path in the summary.
pub fn analyze_bytes(data: &[u8], name: &str, options: &ReportOptions) -> Result<Report> {
    let backend = LopdfBackend::load_bytes(data)?;
    ReportGenerator::new(&backend, options).generate(Path::new(name))
}
