//! # metaprobe
//!
//! Inspect the embedded metadata of a single file — EXIF tags and GPS
//! position for images, document properties for PDFs — as a human-readable
//! report, optionally exported to a text file.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use metaprobe::config::Config;
//! use metaprobe::pipeline::{analyze, FileKind};
//! use metaprobe::report::Report;
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load(None)?;
//!     let path = Path::new("holiday.jpg");
//!
//!     let kind = FileKind::from_path(path).expect("unsupported extension");
//!     let report = analyze(path, kind, &config.report)
//!         .unwrap_or_else(|e| Report::failure(kind.label(), path, &e));
//!     println!("{report}");
//!
//!     // Same text, saved as holiday.jpg_metadata.txt
//!     metaprobe::export::export_report(&report.to_string(), path, None)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Supported Formats
//!
//! | Format | Extensions | Metadata |
//! |--------|------------|----------|
//! | Image | `.jpg`, `.jpeg`, `.tiff`, `.png` | EXIF tags, GPS position and map link |
//! | PDF | `.pdf` | Document-info dictionary (title, author, producer, ...) |
//!
//! ## Modules
//!
//! - [`pipeline`] — file-kind detection, decoder capabilities and dispatch
//! - [`exif`] — image tag reading and reporting (feature `image`)
//! - [`pdf`] — PDF info reading and reporting (feature `pdf`)
//! - [`gps`] — degrees-minutes-seconds conversion
//! - [`report`] — the report type shared by both readers
//! - [`export`] — writing a report next to the working directory
//! - [`config`] — optional JSON configuration

pub mod config;
pub mod error;
#[cfg(feature = "image")]
pub mod exif;
pub mod export;
pub mod gps;
#[cfg(feature = "pdf")]
pub mod pdf;
pub mod pipeline;
pub mod report;
pub mod value;

pub use error::DecodeError;
pub use report::Report;
pub use value::MetaValue;
