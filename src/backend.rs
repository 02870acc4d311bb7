//! PDF backend abstraction layer.
//!
//! Provides a trait-based interface for the handful of PDF operations a
//! report needs, isolating the concrete PDF library (lopdf) from the
//! report generator.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document as LopdfDocument, Object, ObjectId};

use crate::detect::detect_format_from_bytes;
use crate::error::{Error, Result};
use crate::model::{Metadata, PageSize};

/// Abstract interface for PDF document access.
///
/// Pages are addressed by zero-based index.
pub trait PdfBackend {
    /// Total number of pages.
    fn page_count(&self) -> u32;

    /// Document metadata, or `None` when the document carries none.
    fn metadata(&self) -> Option<Metadata>;

    /// Physical size of a page in points.
    fn page_size(&self, index: u32) -> Result<PageSize>;

    /// Plain text of a page. May be empty (e.g. scanned pages).
    fn extract_text(&self, index: u32) -> Result<String>;

    /// PDF version, if known.
    fn version(&self) -> Option<String> {
        None
    }
}

/// Decode a PDF text string: UTF-16BE with BOM, else UTF-8, else Latin-1.
pub fn decode_pdf_string(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks(2)
            .filter_map(|c| {
                if c.len() == 2 {
                    Some(u16::from_be_bytes([c[0], c[1]]))
                } else {
                    None
                }
            })
            .collect();
        return String::from_utf16_lossy(&utf16);
    }

    if let Ok(s) = std::str::from_utf8(bytes) {
        return s.to_string();
    }

    bytes.iter().map(|&b| b as char).collect()
}

// ---------------------------------------------------------------------------
// LopdfBackend: concrete implementation backed by lopdf
// ---------------------------------------------------------------------------

/// Concrete [`PdfBackend`] backed by `lopdf::Document`.
///
/// The file is read fully during loading and closed before this value is
/// returned; the parsed document is released when the backend is dropped.
pub struct LopdfBackend {
    doc: LopdfDocument,
    pages: BTreeMap<u32, ObjectId>,
    version: String,
}

impl LopdfBackend {
    /// Load from a file path.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
            _ => Error::Io(e),
        })?;

        let mut data = Vec::new();
        BufReader::new(file).read_to_end(&mut data)?;
        log::debug!("Read {} bytes from {}", data.len(), path.display());

        Self::load_bytes(&data)
    }

    /// Load from an in-memory byte slice.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        let format = detect_format_from_bytes(data)?;

        let doc = LopdfDocument::load_mem(data).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;

        let pages = doc.get_pages();
        log::debug!("Loaded {} with {} pages", format, pages.len());

        Ok(Self {
            doc,
            pages,
            version: format.version,
        })
    }

    fn page_id(&self, index: u32) -> Result<ObjectId> {
        // lopdf numbers pages from 1
        index
            .checked_add(1)
            .and_then(|number| self.pages.get(&number))
            .copied()
            .ok_or(Error::PageOutOfRange(index, self.page_count()))
    }

    /// Follow an indirect reference to the object it names.
    fn resolve<'a>(&'a self, obj: &'a Object) -> Option<&'a Object> {
        match obj {
            Object::Reference(id) => self.doc.get_object(*id).ok(),
            other => Some(other),
        }
    }

    /// Look up `key` on the page, walking up `/Parent` links for inherited attributes.
    fn inherited_attribute(&self, page_id: ObjectId, key: &[u8]) -> Option<&Object> {
        let mut current = self.doc.get_dictionary(page_id).ok()?;
        // Bounded walk so a cyclic /Parent chain cannot loop forever.
        for _ in 0..64 {
            if let Ok(value) = current.get(key) {
                return self.resolve(value);
            }
            let parent = current.get(b"Parent").ok()?.as_reference().ok()?;
            current = self.doc.get_dictionary(parent).ok()?;
        }
        None
    }

    /// Decode the page content and collect its text, one line per text line.
    fn page_text(&self, page_id: ObjectId) -> Result<String> {
        let fonts = self
            .doc
            .get_page_fonts(page_id)
            .map_err(|e| Error::TextExtract(e.to_string()))?;
        let data = self
            .doc
            .get_page_content(page_id)
            .map_err(|e| Error::TextExtract(e.to_string()))?;
        let content = Content::decode(&data).map_err(|e| Error::TextExtract(e.to_string()))?;

        Ok(collect_text(&content.operations, |font_name, bytes| {
            fonts
                .get(font_name)
                .and_then(|font| font.get_font_encoding(&self.doc).ok())
                .and_then(|enc| LopdfDocument::decode_text(&enc, bytes).ok())
                .unwrap_or_else(|| decode_pdf_string(bytes))
        }))
    }

    fn info_dictionary(&self) -> Option<&Dictionary> {
        let info = self.doc.trailer.get(b"Info").ok()?;
        self.resolve(info)?.as_dict().ok()
    }
}

impl PdfBackend for LopdfBackend {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn metadata(&self) -> Option<Metadata> {
        let info = self.info_dictionary()?;

        let mut metadata = Metadata::new();
        for (key, value) in info.iter() {
            let Some(value) = self.resolve(value).and_then(object_to_text) else {
                log::debug!(
                    "Skipping non-text metadata field /{}",
                    String::from_utf8_lossy(key)
                );
                continue;
            };
            metadata.push(String::from_utf8_lossy(key).into_owned(), value);
        }
        Some(metadata)
    }

    fn page_size(&self, index: u32) -> Result<PageSize> {
        let page_id = self.page_id(index)?;

        let rect = self
            .inherited_attribute(page_id, b"MediaBox")
            .and_then(|obj| obj.as_array().ok())
            .and_then(|array| rect_from_array(array));

        match rect {
            Some(size) => Ok(size),
            None => {
                log::warn!(
                    "Page {} has no usable MediaBox, assuming Letter size",
                    index + 1
                );
                Ok(PageSize::letter())
            }
        }
    }

    fn extract_text(&self, index: u32) -> Result<String> {
        let page_id = self.page_id(index)?;
        self.page_text(page_id).map_err(|e| match e {
            Error::TextExtract(msg) => Error::TextExtract(format!("Page {}: {}", index + 1, msg)),
            other => other,
        })
    }

    fn version(&self) -> Option<String> {
        Some(self.version.clone())
    }
}

/// Kerning adjustment (thousandths of text space) wide enough to read as a word gap.
const TJ_SPACE_THRESHOLD: f64 = 200.0;

/// Walk content stream operations and collect shown text.
///
/// A line break is emitted when the text position moves to a new line
/// (`T*`, `'`, `"`, `Td`/`TD` with a vertical offset, `Tm` with a new
/// vertical position) and at the end of each text object. Breaks never
/// stack, so text objects do not produce blank lines between them.
/// `decode` turns a shown string into text for the current font resource.
fn collect_text<F>(operations: &[Operation], mut decode: F) -> String
where
    F: FnMut(&[u8], &[u8]) -> String,
{
    fn break_line(text: &mut String) {
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
    }

    let mut text = String::new();
    let mut font: Vec<u8> = Vec::new();
    let mut line_y: Option<f64> = None;

    for op in operations {
        let operands = &op.operands;
        match op.operator.as_str() {
            "BT" => line_y = None,
            "ET" => break_line(&mut text),
            "Tf" => {
                if let Some(Object::Name(name)) = operands.first() {
                    font = name.clone();
                }
            }
            "Td" | "TD" => {
                let ty = operands.get(1).and_then(object_to_f64).unwrap_or(0.0);
                if ty != 0.0 {
                    break_line(&mut text);
                }
            }
            "Tm" => {
                let y = operands.get(5).and_then(object_to_f64);
                if line_y.is_some() && y != line_y {
                    break_line(&mut text);
                }
                line_y = y;
            }
            "T*" => break_line(&mut text),
            "Tj" => {
                if let Some(Object::String(bytes, _)) = operands.first() {
                    text.push_str(&decode(&font[..], &bytes[..]));
                }
            }
            "'" => {
                break_line(&mut text);
                if let Some(Object::String(bytes, _)) = operands.first() {
                    text.push_str(&decode(&font[..], &bytes[..]));
                }
            }
            "\"" => {
                break_line(&mut text);
                if let Some(Object::String(bytes, _)) = operands.get(2) {
                    text.push_str(&decode(&font[..], &bytes[..]));
                }
            }
            "TJ" => {
                let Some(Object::Array(items)) = operands.first() else {
                    continue;
                };
                for item in items {
                    match item {
                        Object::String(bytes, _) => text.push_str(&decode(&font[..], &bytes[..])),
                        other => {
                            let gap = object_to_f64(other).map_or(0.0, |n| -n);
                            if gap > TJ_SPACE_THRESHOLD
                                && !text.is_empty()
                                && !text.ends_with(char::is_whitespace)
                            {
                                text.push(' ');
                            }
                        }
                    }
                }
            }
            _ => {}
        }
    }

    text
}

/// Read a `[x0 y0 x1 y1]` rectangle.
fn rect_from_array(array: &[Object]) -> Option<PageSize> {
    if array.len() != 4 {
        return None;
    }
    let mut coords = [0.0f64; 4];
    for (slot, obj) in coords.iter_mut().zip(array) {
        *slot = object_to_f64(obj)?;
    }
    Some(PageSize::from_rect(coords[0], coords[1], coords[2], coords[3]))
}

fn object_to_f64(obj: &Object) -> Option<f64> {
    match obj {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(r) => Some(*r as f64),
        _ => None,
    }
}

/// Render a metadata value as text.
fn object_to_text(obj: &Object) -> Option<String> {
    match obj {
        Object::String(bytes, _) => Some(decode_pdf_string(bytes)),
        Object::Name(name) => Some(format!("/{}", String::from_utf8_lossy(name))),
        Object::Integer(i) => Some(i.to_string()),
        Object::Real(r) => Some(r.to_string()),
        Object::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_pdf_string_utf8() {
        assert_eq!(decode_pdf_string(b"Hello"), "Hello");
    }

    #[test]
    fn test_decode_pdf_string_latin1() {
        // 0xE9 = 'é' in Latin-1
        let bytes = vec![0x48, 0x65, 0x6C, 0x6C, 0xE9];
        assert_eq!(decode_pdf_string(&bytes), "Hellé");
    }

    #[test]
    fn test_decode_pdf_string_utf16be() {
        // UTF-16BE BOM + "Hi"
        let bytes = vec![0xFE, 0xFF, 0x00, 0x48, 0x00, 0x69];
        assert_eq!(decode_pdf_string(&bytes), "Hi");
    }

    fn show(text: &str) -> Object {
        Object::string_literal(text)
    }

    fn collect_plain(operations: &[Operation]) -> String {
        collect_text(operations, |_, bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    #[test]
    fn test_collect_text_breaks_on_next_line_operator() {
        let ops = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Tj", vec![show("Line one")]),
            Operation::new("T*", vec![]),
            Operation::new("Tj", vec![show("Line two")]),
            Operation::new("ET", vec![]),
        ];
        assert_eq!(collect_plain(&ops), "Line one\nLine two\n");
    }

    #[test]
    fn test_collect_text_vertical_td_only() {
        let ops = vec![
            Operation::new("BT", vec![]),
            Operation::new("Td", vec![72.into(), 700.into()]),
            Operation::new("Tj", vec![show("Title")]),
            Operation::new("Td", vec![0.into(), (-14).into()]),
            Operation::new("Tj", vec![show("Body")]),
            Operation::new("Td", vec![40.into(), 0.into()]),
            Operation::new("Tj", vec![show(" text")]),
            Operation::new("TD", vec![0.into(), Object::Real(-14.5)]),
            Operation::new("Tj", vec![show("Last")]),
            Operation::new("ET", vec![]),
        ];
        assert_eq!(collect_plain(&ops), "Title\nBody text\nLast\n");
    }

    #[test]
    fn test_collect_text_quote_operators() {
        let ops = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tj", vec![show("first")]),
            Operation::new("'", vec![show("second")]),
            Operation::new("\"", vec![0.into(), 0.into(), show("third")]),
            Operation::new("ET", vec![]),
        ];
        assert_eq!(collect_plain(&ops), "first\nsecond\nthird\n");
    }

    #[test]
    fn test_collect_text_tm_and_text_objects() {
        let tm = |y: i64| {
            Operation::new(
                "Tm",
                vec![1.into(), 0.into(), 0.into(), 1.into(), 72.into(), y.into()],
            )
        };
        let ops = vec![
            Operation::new("BT", vec![]),
            tm(700),
            Operation::new("Tj", vec![show("A")]),
            tm(700),
            Operation::new("Tj", vec![show("B")]),
            tm(686),
            Operation::new("Tj", vec![show("C")]),
            Operation::new("ET", vec![]),
            Operation::new("BT", vec![]),
            Operation::new("Td", vec![72.into(), 600.into()]),
            Operation::new("Tj", vec![show("D")]),
            Operation::new("ET", vec![]),
        ];
        assert_eq!(collect_plain(&ops), "AB\nC\nD\n");
    }

    #[test]
    fn test_collect_text_tj_array_gaps() {
        let ops = vec![
            Operation::new("BT", vec![]),
            Operation::new(
                "TJ",
                vec![Object::Array(vec![
                    show("Ke"),
                    Object::Integer(-30),
                    show("rning"),
                    Object::Integer(-300),
                    show("gap"),
                ])],
            ),
            Operation::new("ET", vec![]),
        ];
        assert_eq!(collect_plain(&ops), "Kerning gap\n");
    }

    #[test]
    fn test_collect_text_empty_page() {
        assert_eq!(collect_plain(&[]), "");
        let ops = vec![Operation::new("BT", vec![]), Operation::new("ET", vec![])];
        assert_eq!(collect_plain(&ops), "");
    }

    #[test]
    fn test_rect_from_array() {
        let array = vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(595.5),
            Object::Integer(842),
        ];
        assert_eq!(rect_from_array(&array), Some(PageSize::new(595.5, 842.0)));

        let short = vec![Object::Integer(0), Object::Integer(0)];
        assert_eq!(rect_from_array(&short), None);

        let bad = vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Name(b"Wide".to_vec()),
            Object::Integer(842),
        ];
        assert_eq!(rect_from_array(&bad), None);
    }

    #[test]
    fn test_object_to_text() {
        assert_eq!(
            object_to_text(&Object::Name(b"Adobe".to_vec())),
            Some("/Adobe".to_string())
        );
        assert_eq!(object_to_text(&Object::Integer(3)), Some("3".to_string()));
        assert_eq!(object_to_text(&Object::Boolean(true)), Some("true".to_string()));
        assert_eq!(object_to_text(&Object::Null), None);
    }

    #[test]
    fn test_load_bytes_rejects_non_pdf() {
        let result = LopdfBackend::load_bytes(b"plain text, not a pdf");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_load_file_missing() {
        let result = LopdfBackend::load_file("definitely/not/here.pdf");
        assert!(matches!(result, Err(Error::FileNotFound(p)) if p.ends_with("here.pdf")));
    }
}
