//! Report model types.
//!
//! These types sit between the PDF backend and the renderers: the report
//! generator fills them in, and the text and JSON renderers read them.

mod metadata;
mod page;
mod report;

pub use metadata::{Metadata, MetadataEntry};
pub use page::{PageSize, POINTS_TO_MM};
pub use report::{
    DocumentSummary, PageReport, PreviewLine, Report, StructureIndicator, ABSTRACT_KEYWORD,
    REFERENCES_KEYWORD,
};
