//! Line splitting, preview selection and keyword checks on page text.

use crate::model::{PreviewLine, StructureIndicator};

/// Split page text on `'\n'`.
///
/// Every segment counts, including blank and trailing ones, so empty text
/// yields a single empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Select the preview: the non-blank lines among the first `max_lines`,
/// each cut to `width` characters, keeping their 1-based line numbers.
pub fn preview_lines(lines: &[&str], max_lines: usize, width: usize) -> Vec<PreviewLine> {
    lines
        .iter()
        .take(max_lines)
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| PreviewLine {
            number: idx + 1,
            text: truncate_chars(line, width).to_string(),
        })
        .collect()
}

/// First `width` characters of `line`, never splitting a code point.
pub fn truncate_chars(line: &str, width: usize) -> &str {
    match line.char_indices().nth(width) {
        Some((end, _)) => &line[..end],
        None => line,
    }
}

/// Case-insensitive substring check for each keyword.
///
/// No word-boundary handling: "PARABSTRACT" counts as "ABSTRACT".
pub fn structure_indicators(text: &str, keywords: &[String]) -> Vec<StructureIndicator> {
    let upper = text.to_uppercase();
    keywords
        .iter()
        .map(|keyword| StructureIndicator {
            keyword: keyword.clone(),
            present: upper.contains(&keyword.to_uppercase()),
        })
        .collect()
}
