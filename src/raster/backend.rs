//! Rasterization backend abstraction.
//!
//! The comparison loop only needs "PDF path in, ordered page images out";
//! this trait isolates the concrete renderer (pdfium) from that loop.

use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::error::Result;

/// PDF points per inch.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Renders every page of a PDF to a raster image.
pub trait Rasterizer {
    /// Short backend name for logging.
    fn name(&self) -> &str;

    /// Render all pages of the PDF at `path` at `dpi`, in page order.
    ///
    /// A document without pages yields an empty vector.
    fn rasterize(&self, path: &Path, dpi: f32) -> Result<Vec<DynamicImage>>;
}

impl<R: Rasterizer + ?Sized> Rasterizer for &R {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn rasterize(&self, path: &Path, dpi: f32) -> Result<Vec<DynamicImage>> {
        (**self).rasterize(path, dpi)
    }
}

impl<R: Rasterizer + ?Sized> Rasterizer for Box<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn rasterize(&self, path: &Path, dpi: f32) -> Result<Vec<DynamicImage>> {
        (**self).rasterize(path, dpi)
    }
}

/// Pixel length of `points` rendered at `dpi`, never less than one pixel.
pub fn points_to_pixels(points: f32, dpi: f32) -> u32 {
    (points * dpi / POINTS_PER_INCH).round().max(1.0) as u32
}

/// Options for the pdfium backend.
#[derive(Debug, Clone)]
pub struct RasterOptions {
    /// Explicit path to the pdfium shared library
    pub library_path: Option<PathBuf>,

    /// Render annotations (comments, stamps, highlights)
    pub render_annotations: bool,

    /// Render interactive form field contents
    pub render_form_data: bool,
}

impl RasterOptions {
    /// Create new raster options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load pdfium from an explicit library path.
    pub fn with_library_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.library_path = Some(path.into());
        self
    }

    /// Enable or disable annotation rendering.
    pub fn with_annotations(mut self, render: bool) -> Self {
        self.render_annotations = render;
        self
    }

    /// Enable or disable form data rendering.
    pub fn with_form_data(mut self, render: bool) -> Self {
        self.render_form_data = render;
        self
    }
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            library_path: None,
            render_annotations: true,
            render_form_data: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_to_pixels() {
        // US Letter at 100 dpi
        assert_eq!(points_to_pixels(612.0, 100.0), 850);
        assert_eq!(points_to_pixels(792.0, 100.0), 1100);
        // A4 width rounds to nearest
        assert_eq!(points_to_pixels(595.0, 100.0), 826);
        assert_eq!(points_to_pixels(0.0, 100.0), 1);
    }

    #[test]
    fn test_raster_options_builder() {
        let options = RasterOptions::new()
            .with_library_path("/opt/pdfium/lib/libpdfium.so")
            .with_annotations(false);

        assert_eq!(
            options.library_path,
            Some(PathBuf::from("/opt/pdfium/lib/libpdfium.so"))
        );
        assert!(!options.render_annotations);
        assert!(options.render_form_data);
    }
}
