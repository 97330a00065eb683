//! Exif tag reading for images.
//!
//! This module provides:
//!
//! - [`read_tags`] — decode the primary image's tags into a [`TagDictionary`]
//! - [`render_report`] — format a dictionary, including its GPS section
//! - [`read_image_report`] — both of the above in one call
//!
//! Decoding is delegated to the `kamadak-exif` crate, which understands
//! JPEG, TIFF, PNG, WebP and HEIF containers and supplies the tag-name tables
//! for both the general and GPS namespaces.

mod reader;
mod tags;

pub use reader::{NO_EXIF_MESSAGE, read_image_report, read_tags, render_report};
pub use tags::{ExifEntry, GpsRecord, TagDictionary};
