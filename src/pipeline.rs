use std::fmt;
use std::path::Path;

use crate::config::ReportConfig;
use crate::error::DecodeError;
use crate::report::Report;

/// Extensions read as images.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "tiff", "png"];

/// Extensions read as PDF documents.
const DOCUMENT_EXTENSIONS: &[&str] = &["pdf"];

/// The kind of file being inspected, determined by its extension.
///
/// # Example
///
/// ```rust
/// use metaprobe::pipeline::FileKind;
/// use std::path::Path;
///
/// assert_eq!(FileKind::from_path(Path::new("IMG_0001.JPG")), Some(FileKind::Image));
/// assert_eq!(FileKind::from_path(Path::new("minutes.pdf")), Some(FileKind::Pdf));
/// assert_eq!(FileKind::from_path(Path::new("notes.txt")), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// JPEG, TIFF or PNG — Exif tags and GPS
    Image,
    /// PDF — document-info dictionary
    Pdf,
}

impl FileKind {
    /// Determine the file kind from a path's lower-cased extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Image)
        } else if DOCUMENT_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Pdf)
        } else {
            None
        }
    }

    /// Short name used in messages ("image", "PDF").
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Pdf => "PDF",
        }
    }

    /// The decoder this kind of file needs.
    pub fn capability(self) -> Capability {
        match self {
            Self::Image => Capability::ExifDecoder,
            Self::Pdf => Capability::PdfDecoder,
        }
    }
}

/// A decoder that may or may not be compiled into this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    ExifDecoder,
    PdfDecoder,
}

impl Capability {
    pub fn is_available(self) -> bool {
        match self {
            Self::ExifDecoder => cfg!(feature = "image"),
            Self::PdfDecoder => cfg!(feature = "pdf"),
        }
    }

    /// Cargo feature that enables this capability.
    pub fn feature(self) -> &'static str {
        match self {
            Self::ExifDecoder => "image",
            Self::PdfDecoder => "pdf",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExifDecoder => f.write_str("EXIF decoding"),
            Self::PdfDecoder => f.write_str("PDF decoding"),
        }
    }
}

/// Human-readable description of the accepted extensions, for error messages.
pub fn supported_extensions() -> String {
    IMAGE_EXTENSIONS
        .iter()
        .chain(DOCUMENT_EXTENSIONS)
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Read the metadata of `path` as a file of the given kind.
///
/// Decode problems come back as `Err`; turning them into report text is the
/// caller's job.
///
/// ```rust,no_run
/// use metaprobe::config::ReportConfig;
/// use metaprobe::pipeline::{analyze, FileKind};
/// use std::path::Path;
///
/// let path = Path::new("holiday.jpg");
/// let kind = FileKind::from_path(path).unwrap();
/// match analyze(path, kind, &ReportConfig::default()) {
///     Ok(report) => println!("{report}"),
///     Err(e) => eprintln!("cannot read {}: {e}", path.display()),
/// }
/// ```
pub fn analyze(path: &Path, kind: FileKind, config: &ReportConfig) -> Result<Report, DecodeError> {
    log::debug!("Reading {} as {}", path.display(), kind.label());
    match kind {
        FileKind::Image => analyze_image(path, config),
        FileKind::Pdf => analyze_pdf(path, config),
    }
}

#[cfg(feature = "image")]
fn analyze_image(path: &Path, config: &ReportConfig) -> Result<Report, DecodeError> {
    crate::exif::read_image_report(path, config)
}

#[cfg(not(feature = "image"))]
fn analyze_image(_path: &Path, _config: &ReportConfig) -> Result<Report, DecodeError> {
    Err(DecodeError::Unavailable(Capability::ExifDecoder))
}

#[cfg(feature = "pdf")]
fn analyze_pdf(path: &Path, config: &ReportConfig) -> Result<Report, DecodeError> {
    crate::pdf::read_pdf_report(path, config)
}

#[cfg(not(feature = "pdf"))]
fn analyze_pdf(_path: &Path, _config: &ReportConfig) -> Result<Report, DecodeError> {
    Err(DecodeError::Unavailable(Capability::PdfDecoder))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    // ── FileKind::from_path ──────────────────────────────────────────

    #[test]
    fn file_kind_images() {
        for name in ["a.jpg", "a.jpeg", "a.tiff", "a.png", "A.JPG", "b.Png"] {
            assert_eq!(FileKind::from_path(Path::new(name)), Some(FileKind::Image), "{name}");
        }
    }

    #[test]
    fn file_kind_pdf() {
        assert_eq!(FileKind::from_path(Path::new("report.pdf")), Some(FileKind::Pdf));
        assert_eq!(FileKind::from_path(Path::new("REPORT.PDF")), Some(FileKind::Pdf));
    }

    #[test]
    fn file_kind_unsupported() {
        assert_eq!(FileKind::from_path(Path::new("notes.txt")), None);
        assert_eq!(FileKind::from_path(Path::new("scan.tif")), None);
        assert_eq!(FileKind::from_path(Path::new("photo.webp")), None);
        assert_eq!(FileKind::from_path(Path::new("noext")), None);
    }

    // ── Capability ───────────────────────────────────────────────────

    #[test]
    fn each_kind_needs_its_own_decoder() {
        assert_eq!(FileKind::Image.capability(), Capability::ExifDecoder);
        assert_eq!(FileKind::Pdf.capability(), Capability::PdfDecoder);
    }

    #[test]
    fn capabilities_follow_features() {
        assert_eq!(Capability::ExifDecoder.is_available(), cfg!(feature = "image"));
        assert_eq!(Capability::PdfDecoder.is_available(), cfg!(feature = "pdf"));
    }

    #[test]
    fn supported_extensions_lists_all() {
        assert_eq!(supported_extensions(), ".jpg, .jpeg, .tiff, .png, .pdf");
    }

    // ── analyze ──────────────────────────────────────────────────────

    #[cfg(feature = "image")]
    #[test]
    fn analyze_corrupt_image_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.jpg");
        fs::write(&path, b"definitely not an image").unwrap();

        let err = analyze(&path, FileKind::Image, &ReportConfig::default()).unwrap_err();
        assert!(matches!(err, DecodeError::Exif(_)), "{err:?}");
    }

    #[cfg(feature = "pdf")]
    #[test]
    fn analyze_corrupt_pdf_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.pdf");
        fs::write(&path, b"this is not a pdf").unwrap();

        let err = analyze(&path, FileKind::Pdf, &ReportConfig::default()).unwrap_err();
        assert!(matches!(err, DecodeError::Pdf(_)), "{err:?}");
    }

    #[test]
    fn analyze_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.png");
        assert!(analyze(&path, FileKind::Image, &ReportConfig::default()).is_err());
    }
}
