use thiserror::Error;

use crate::pipeline::Capability;

/// Why a file's metadata could not be decoded.
///
/// Readers return this instead of printing; the caller decides how to
/// surface it.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image container or its Exif block is malformed or unsupported.
    #[cfg(feature = "image")]
    #[error("EXIF decode error: {0}")]
    Exif(#[from] kamadak_exif::Error),

    /// The PDF could not be parsed.
    #[cfg(feature = "pdf")]
    #[error("PDF parse error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// The decoder for this kind of file was not compiled in.
    #[error("{0} is not available in this build")]
    Unavailable(Capability),
}
