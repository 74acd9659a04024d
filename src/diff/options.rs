//! Pixel diff options.

/// Default sensitivity threshold, from 0 (strict) to 1 (lenient).
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Options for [`pixelmatch`](super::pixelmatch()).
#[derive(Debug, Clone, PartialEq)]
pub struct PixelmatchOptions {
    /// Matching threshold (0.0 to 1.0); smaller is more sensitive
    pub threshold: f64,

    /// Count anti-aliased pixels as differences
    pub include_aa: bool,

    /// Opacity of the faded original drawn under unchanged pixels
    pub alpha: f64,

    /// Color of anti-aliased pixels in the diff output
    pub aa_color: [u8; 3],

    /// Color of differing pixels in the diff output
    pub diff_color: [u8; 3],

    /// Draw only the differing pixels on a transparent background
    pub diff_mask: bool,
}

impl PixelmatchOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the matching threshold, clamped to 0.0..=1.0.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Count anti-aliased pixels as differences.
    pub fn include_aa(mut self, include: bool) -> Self {
        self.include_aa = include;
        self
    }

    /// Set the opacity of unchanged pixels in the output.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Set the color of differing pixels.
    pub fn with_diff_color(mut self, color: [u8; 3]) -> Self {
        self.diff_color = color;
        self
    }

    /// Draw only differing pixels.
    pub fn diff_mask(mut self, mask: bool) -> Self {
        self.diff_mask = mask;
        self
    }
}

impl Default for PixelmatchOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            include_aa: false,
            alpha: 0.1,
            aa_color: [255, 255, 0],
            diff_color: [255, 0, 0],
            diff_mask: false,
        }
    }
}
