//! Report generation.

mod generator;
mod options;
mod text;

pub use generator::ReportGenerator;
pub use options::{
    ErrorMode, ReportOptions, DEFAULT_LINE_WIDTH, DEFAULT_MAX_PAGES, DEFAULT_PREVIEW_LINES,
};
pub use text::{preview_lines, split_lines, structure_indicators, truncate_chars};
