use std::fmt;
use std::path::Path;

/// Width of the label column when no configuration overrides it.
pub const DEFAULT_LABEL_WIDTH: usize = 25;

/// A human-readable metadata report: an ordered list of lines.
///
/// Reports are built by the image and PDF readers and rendered by joining
/// their lines with `\n`. Labelled rows are padded to a fixed column width:
///
/// ```rust
/// use metaprobe::report::Report;
///
/// let mut report = Report::new("Found Metadata for: doc.pdf", 8);
/// report.push_field("Title", "Minutes");
/// assert_eq!(report.to_string(), "Found Metadata for: doc.pdf\n\nTitle   : Minutes");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
    label_width: usize,
}

impl Report {
    /// Start a report with a header line followed by a blank line.
    pub fn new(header: impl Into<String>, label_width: usize) -> Self {
        Self {
            lines: vec![header.into(), String::new()],
            label_width,
        }
    }

    /// A report consisting of a single message and nothing else.
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
            label_width: DEFAULT_LABEL_WIDTH,
        }
    }

    /// A report describing why `path` could not be read.
    ///
    /// `what` names the kind of file, e.g. `"image"` or `"PDF"`.
    pub fn failure(what: &str, path: &Path, error: &dyn std::error::Error) -> Self {
        Self::message(format!(
            "❌ Could not read {what} file '{}': {error}",
            path.display()
        ))
    }

    pub fn push_field(&mut self, label: &str, value: impl fmt::Display) {
        let width = self.label_width;
        self.lines.push(format!("{label:<width$}: {value}"));
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn push_blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}
