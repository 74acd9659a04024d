//! Image normalization before and after the pixel diff.

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};

/// Filter used when a page has to be resized to its counterpart's size.
pub const RESIZE_FILTER: FilterType = FilterType::Lanczos3;

/// Convert any page image to 8-bit RGBA.
pub fn to_rgba(img: &DynamicImage) -> RgbaImage {
    img.to_rgba8()
}

/// Resize `img` to the dimensions of `reference` if they differ.
///
/// Returns the (possibly resized) image and whether a resize happened.
/// Resizing is lossy: the diff then compares a scaled rendering, which can
/// hide or introduce differences.
pub fn match_dimensions(reference: &RgbaImage, img: RgbaImage) -> (RgbaImage, bool) {
    let (width, height) = reference.dimensions();
    if img.dimensions() == (width, height) {
        return (img, false);
    }
    (imageops::resize(&img, width, height, RESIZE_FILTER), true)
}

/// Alpha-composite the diff `overlay` on top of `base`.
pub fn highlight(base: &RgbaImage, overlay: &RgbaImage) -> RgbaImage {
    let mut out = base.clone();
    imageops::overlay(&mut out, overlay, 0, 0);
    out
}
