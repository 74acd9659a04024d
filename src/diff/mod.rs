//! Pixel-level image comparison.

mod normalize;
mod options;
mod pixelmatch;

pub use normalize::{highlight, match_dimensions, to_rgba, RESIZE_FILTER};
pub use options::{PixelmatchOptions, DEFAULT_THRESHOLD};
pub use pixelmatch::pixelmatch;
