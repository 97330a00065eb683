//! PDF document-info dictionary reading.

use lopdf::{Dictionary, Document, Object};
use std::fs::File;
use std::path::Path;

use crate::config::ReportConfig;
use crate::error::DecodeError;
use crate::report::Report;
use crate::value::MetaValue;

/// Returned in place of a report when a PDF has no info dictionary.
pub const NO_PDF_METADATA_MESSAGE: &str = "No metadata found in this PDF.";

/// References are followed at most this deep when rendering values.
const MAX_DEPTH: usize = 4;

/// The entries of a PDF's `/Info` dictionary, in file order.
///
/// Keys are kept in PDF name syntax (`/Title`, `/Author`); [`clean_key`]
/// removes the marker for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentInfo {
    entries: Vec<(String, MetaValue)>,
}

impl DocumentInfo {
    pub fn new(entries: Vec<(String, MetaValue)>) -> Self {
        Self { entries }
    }

    fn from_dictionary(dict: &Dictionary, document: &Document) -> Self {
        let entries = dict
            .iter()
            .map(|(key, value)| {
                (
                    format!("/{}", String::from_utf8_lossy(key)),
                    object_value(value, document, 0),
                )
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, MetaValue)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Strip the leading `/` name marker from an info-dictionary key.
pub fn clean_key(key: &str) -> &str {
    key.strip_prefix('/').unwrap_or(key)
}

/// Read the `/Info` dictionary of the PDF at `path`.
///
/// Returns `Ok(None)` when the trailer has no info dictionary or it is empty.
pub fn read_info(path: &Path) -> Result<Option<DocumentInfo>, DecodeError> {
    let file = File::open(path)?;
    let document = Document::load_from(file)?;

    let dict = match document.trailer.get(b"Info") {
        Ok(Object::Reference(id)) => document.get_dictionary(*id)?,
        Ok(Object::Dictionary(dict)) => dict,
        Ok(_) => {
            log::debug!("Ignoring non-dictionary /Info in {}", path.display());
            return Ok(None);
        }
        Err(_) => {
            log::debug!("No /Info in trailer of {}", path.display());
            return Ok(None);
        }
    };

    let info = DocumentInfo::from_dictionary(dict, &document);
    log::debug!("Read {} info entries from {}", info.entries().len(), path.display());
    Ok((!info.is_empty()).then_some(info))
}

/// Format document info as a report.
pub fn render_report(path: &Path, info: &DocumentInfo, config: &ReportConfig) -> Report {
    if info.is_empty() {
        return Report::message(NO_PDF_METADATA_MESSAGE);
    }

    let mut report = Report::new(
        format!("✅ Found Metadata for: {}", path.display()),
        config.label_width,
    );
    for (key, value) in info.entries() {
        report.push_field(clean_key(key), value);
    }
    report
}

/// Read `path` and format its document info.
pub fn read_pdf_report(path: &Path, config: &ReportConfig) -> Result<Report, DecodeError> {
    Ok(match read_info(path)? {
        Some(info) => render_report(path, &info, config),
        None => Report::message(NO_PDF_METADATA_MESSAGE),
    })
}

fn object_value(object: &Object, document: &Document, depth: usize) -> MetaValue {
    match object {
        Object::String(bytes, _) => match lopdf::decode_text_string(object) {
            Ok(text) => MetaValue::Text(text),
            Err(e) => {
                log::debug!("Undecodable text string ({e}), showing raw bytes");
                MetaValue::Bytes(bytes.clone())
            }
        },
        Object::Name(name) => MetaValue::Text(format!("/{}", String::from_utf8_lossy(name))),
        Object::Integer(n) => MetaValue::Integer(*n),
        Object::Real(r) => MetaValue::Float(f64::from(*r)),
        Object::Boolean(b) => MetaValue::Text(b.to_string()),
        Object::Null => MetaValue::Text("null".to_string()),
        Object::Array(items) if depth < MAX_DEPTH => MetaValue::Tuple(
            items
                .iter()
                .map(|item| object_value(item, document, depth + 1))
                .collect(),
        ),
        Object::Reference(id) if depth < MAX_DEPTH => match document.get_object(*id) {
            Ok(target) => object_value(target, document, depth + 1),
            Err(_) => MetaValue::Text(format!("{} {} R", id.0, id.1)),
        },
        Object::Reference(id) => MetaValue::Text(format!("{} {} R", id.0, id.1)),
        Object::Array(items) => MetaValue::Text(format!("[{} item(s)]", items.len())),
        Object::Dictionary(dict) => MetaValue::Text(format!("<<{} key(s)>>", dict.len())),
        Object::Stream(_) => MetaValue::Text("<<stream>>".to_string()),
    }
}
