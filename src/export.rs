use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Appended to the input's file name to name the exported report.
pub const EXPORT_SUFFIX: &str = "_metadata.txt";

/// Where the report for `input` is exported: `<file name><suffix>`, inside
/// `output_dir` when given, else relative to the current directory.
///
/// ```rust
/// use metaprobe::export::export_path;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(
///     export_path(Path::new("/photos/IMG_1.jpg"), None),
///     PathBuf::from("IMG_1.jpg_metadata.txt")
/// );
/// ```
pub fn export_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let base_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = format!("{base_name}{EXPORT_SUFFIX}");

    match output_dir {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Write `text` to the export file for `input`, replacing any previous one.
///
/// Returns the path written.
pub fn export_report(text: &str, input: &Path, output_dir: Option<&Path>) -> Result<PathBuf> {
    let path = export_path(input, output_dir);
    std::fs::write(&path, text)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    log::info!("Report exported to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn path_keeps_original_extension() {
        assert_eq!(
            export_path(Path::new("scan.pdf"), None),
            PathBuf::from("scan.pdf_metadata.txt")
        );
    }

    #[test]
    fn path_uses_only_the_base_name() {
        let dir = Path::new("/out");
        assert_eq!(
            export_path(Path::new("a/b/c.png"), Some(dir)),
            PathBuf::from("/out/c.png_metadata.txt")
        );
    }

    #[test]
    fn writes_exact_text_as_utf8() {
        let dir = TempDir::new().unwrap();
        let text = "✅ Found Metadata for: x.pdf\n\nTitle: Café";

        let written = export_report(text, Path::new("x.pdf"), Some(dir.path())).unwrap();
        assert_eq!(written, dir.path().join("x.pdf_metadata.txt"));
        assert_eq!(std::fs::read(&written).unwrap(), text.as_bytes());
    }

    #[test]
    fn overwrites_previous_export() {
        let dir = TempDir::new().unwrap();
        export_report("first", Path::new("x.pdf"), Some(dir.path())).unwrap();
        let written = export_report("second", Path::new("x.pdf"), Some(dir.path())).unwrap();
        assert_eq!(std::fs::read_to_string(written).unwrap(), "second");
    }

    #[test]
    fn unwritable_destination_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("no-such-dir");
        let err = export_report("text", Path::new("x.pdf"), Some(&missing)).unwrap_err();
        assert!(err.to_string().starts_with("Failed to write report"));
    }
}
