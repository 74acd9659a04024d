//! Comparison options and configuration.

use std::path::PathBuf;

use crate::diff::PixelmatchOptions;

/// Default render resolution.
pub const DEFAULT_DPI: f32 = 100.0;

/// Default directory for diff images.
pub const DEFAULT_OUTPUT_DIR: &str = "diff_results";

/// Options for comparing two PDF documents.
#[derive(Debug, Clone)]
pub struct CompareOptions {
    /// Render resolution in dots per inch
    pub dpi: f32,

    /// Directory diff images are written to (created if missing)
    pub output_dir: PathBuf,

    /// Pixel diff settings
    pub pixelmatch: PixelmatchOptions,
}

impl CompareOptions {
    /// Create new compare options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the render resolution.
    pub fn with_dpi(mut self, dpi: f32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Set the pixel diff threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.pixelmatch = self.pixelmatch.with_threshold(threshold);
        self
    }

    /// Replace the pixel diff settings.
    pub fn with_pixelmatch(mut self, options: PixelmatchOptions) -> Self {
        self.pixelmatch = options;
        self
    }

    /// Current pixel diff threshold.
    pub fn threshold(&self) -> f64 {
        self.pixelmatch.threshold
    }
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            pixelmatch: PixelmatchOptions::default(),
        }
    }
}
