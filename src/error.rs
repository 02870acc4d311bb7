//! Error types for pdfscope.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pdfscope operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while producing a report.
///
/// [`Error::FileNotFound`] is the only "missing input" signal; every other
/// variant describes a problem with the document itself or with writing
/// the report.
#[derive(Error, Debug)]
pub enum Error {
    /// The input path does not resolve to a file.
    #[error("File not found - {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O error when reading the document or writing the report.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF header carries a version we cannot read.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// Error extracting text content.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// Page index is out of range.
    #[error("Page index {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// Error serializing the report.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Whether this error means the input file is missing.
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, Error::FileNotFound(_))
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}
