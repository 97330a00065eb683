use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::report::DEFAULT_LABEL_WIDTH;

/// File name looked up next to the executable when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "metaprobe.json";

const DEFAULT_MAP_LINK_TEMPLATE: &str = "https://www.google.com/maps?q={lat},{lon}";

/// Top-level configuration.
///
/// Every section and field is optional in the JSON file; missing values take
/// their defaults, so an empty object `{}` is a valid config.
///
/// ```rust
/// use metaprobe::config::Config;
///
/// let config: Config = serde_json::from_str(r#"{ "report": { "label_width": 30 } }"#).unwrap();
/// assert_eq!(config.report.label_width, 30);
/// assert!(config.export.output_dir.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How reports are laid out.
    pub report: ReportConfig,
    /// Where `--export` writes its file.
    pub export: ExportConfig,
}

/// Report layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Width of the label column.
    pub label_width: usize,
    /// Map URL for the GPS section; `{lat}` and `{lon}` are replaced by the
    /// decimal coordinates.
    pub map_link_template: String,
}

/// Export destination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory for exported reports. `None` means the current directory.
    pub output_dir: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            label_width: DEFAULT_LABEL_WIDTH,
            map_link_template: DEFAULT_MAP_LINK_TEMPLATE.to_string(),
        }
    }
}

impl ReportConfig {
    /// Fill the map link template with a position.
    pub fn map_link(&self, latitude: f64, longitude: f64) -> String {
        self.map_link_template
            .replace("{lat}", &latitude.to_string())
            .replace("{lon}", &longitude.to_string())
    }
}

impl Config {
    /// Resolve the default config file path — same directory as the executable.
    pub fn config_path() -> Result<PathBuf> {
        let exe_path = std::env::current_exe().context("Failed to get executable path")?;
        let exe_dir = exe_path
            .parent()
            .context("Failed to get executable directory")?;
        Ok(exe_dir.join(CONFIG_FILE_NAME))
    }

    /// Load config from the given path, or from the default location.
    ///
    /// A missing file is not an error: defaults are used instead. An explicit
    /// path that does not exist is reported with a warning.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        if !config_path.exists() {
            if path.is_some() {
                log::warn!(
                    "Config file not found at {}. Using defaults.",
                    config_path.display()
                );
            } else {
                log::debug!("No config at {}, using defaults", config_path.display());
            }
            return Ok(Self::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).context("Failed to read config file")?;
        let config: Config =
            serde_json::from_str(&contents).context("Failed to parse config file")?;
        log::debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_report_conventions() {
        let config = Config::default();
        assert_eq!(config.report.label_width, 25);
        assert_eq!(
            config.report.map_link_template,
            "https://www.google.com/maps?q={lat},{lon}"
        );
        assert_eq!(config.export.output_dir, None);
    }

    #[test]
    fn map_link_substitutes_both_placeholders() {
        let report = ReportConfig::default();
        assert_eq!(
            report.map_link(40.5, -79.25),
            "https://www.google.com/maps?q=40.5,-79.25"
        );
    }

    #[test]
    fn custom_template_is_honored() {
        let report = ReportConfig {
            map_link_template: "https://osm.org/?mlat={lat}&mlon={lon}".into(),
            ..Default::default()
        };
        assert_eq!(report.map_link(1.0, 2.0), "https://osm.org/?mlat=1&mlon=2");
    }

    #[test]
    fn load_missing_explicit_path_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(Some(&dir.path().join("absent.json"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("metaprobe.json");
        std::fs::write(&path, r#"{ "export": { "output_dir": "/tmp/reports" } }"#).unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.export.output_dir, Some(PathBuf::from("/tmp/reports")));
        assert_eq!(config.report, ReportConfig::default());
    }

    #[test]
    fn load_rejects_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("metaprobe.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
