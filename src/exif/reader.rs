use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::config::ReportConfig;
use crate::error::DecodeError;
use crate::report::Report;

use super::tags::TagDictionary;

/// Returned in place of a report when an image carries no Exif data.
pub const NO_EXIF_MESSAGE: &str = "No EXIF metadata found in this image.";

/// Read the primary image's tags from `path`.
///
/// Returns `Ok(None)` when the container holds no Exif block, or one with no
/// usable tags.
pub fn read_tags(path: &Path) -> Result<Option<TagDictionary>, DecodeError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let exif = match kamadak_exif::Reader::new().read_from_container(&mut reader) {
        Ok(exif) => exif,
        Err(kamadak_exif::Error::NotFound(container)) => {
            log::debug!("No Exif block in {} ({container})", path.display());
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let tags = TagDictionary::from_fields(exif.fields());
    log::debug!(
        "Decoded {} tag(s) from {} (GPS: {})",
        tags.entries().len(),
        path.display(),
        tags.gps().is_some()
    );

    Ok((!tags.is_empty()).then_some(tags))
}

/// Format a tag dictionary as a report.
///
/// Tags are listed in dictionary order. The GPS section is appended only
/// when the position can be fully resolved.
pub fn render_report(path: &Path, tags: &TagDictionary, config: &ReportConfig) -> Report {
    if tags.is_empty() {
        return Report::message(NO_EXIF_MESSAGE);
    }

    let mut report = Report::new(
        format!("✅ Found EXIF Metadata for: {}", path.display()),
        config.label_width,
    );

    for entry in tags.entries() {
        report.push_field(&entry.label(), &entry.value);
    }

    if let Some((latitude, longitude)) = tags.gps().and_then(|gps| gps.position()) {
        report.push_blank();
        report.push_line("--- GPS Information ---");
        report.push_field("Latitude", latitude);
        report.push_field("Longitude", longitude);
        report.push_field("Google Maps Link", config.map_link(latitude, longitude));
    }

    report
}

/// Read `path` and format its Exif metadata.
pub fn read_image_report(path: &Path, config: &ReportConfig) -> Result<Report, DecodeError> {
    Ok(match read_tags(path)? {
        Some(tags) => render_report(path, &tags, config),
        None => Report::message(NO_EXIF_MESSAGE),
    })
}
