//! Rasterized document type.

use image::DynamicImage;
use std::path::{Path, PathBuf};

/// A PDF rendered to an ordered sequence of page images.
///
/// Held in memory only for the duration of a comparison run.
#[derive(Debug, Clone)]
pub struct RasterDocument {
    source: PathBuf,
    dpi: f32,
    pages: Vec<DynamicImage>,
}

impl RasterDocument {
    /// Create a document from already rendered pages.
    pub fn new(source: impl Into<PathBuf>, dpi: f32, pages: Vec<DynamicImage>) -> Self {
        Self {
            source: source.into(),
            dpi,
            pages,
        }
    }

    /// Path of the PDF this document was rendered from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Resolution the pages were rendered at.
    pub fn dpi(&self) -> f32 {
        self.dpi
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Get a page by index (0-indexed).
    pub fn page(&self, index: usize) -> Option<&DynamicImage> {
        self.pages.get(index)
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
