//! Error types for pdfdiff library.

use std::io;
use thiserror::Error;

/// Result type alias for pdfdiff operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while comparing PDF documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading inputs or writing diff images.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF version in the header is not recognized.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// The rendering backend could not be initialized.
    #[error("PDF backend unavailable: {0}")]
    Backend(String),

    /// A document could not be loaded or one of its pages failed to render.
    #[error("Rasterization error: {0}")]
    Rasterize(String),

    /// Error decoding, encoding or saving an image.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Two images passed to the pixel diff have different dimensions.
    #[error("Image dimensions differ: {0}x{1} vs {2}x{3}")]
    DimensionMismatch(u32, u32, u32, u32),

    /// Error rendering the comparison report.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownFormat;
        assert_eq!(err.to_string(), "Unknown file format: not a valid PDF");

        let err = Error::DimensionMismatch(850, 1100, 827, 1169);
        assert_eq!(err.to_string(), "Image dimensions differ: 850x1100 vs 827x1169");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
