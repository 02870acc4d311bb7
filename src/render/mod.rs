//! Rendering module for writing reports in text and JSON form.

mod json;
mod text;

pub use json::{to_json, JsonFormat};
pub use text::{to_text, ReportWriter};
