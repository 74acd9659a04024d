//! Perceptual per-pixel image comparison.
//!
//! Colors are compared in YIQ space, which weighs luminance differences
//! above chroma. Pixels that look like anti-aliasing in either image are
//! reported separately and not counted.

use super::PixelmatchOptions;
use crate::error::{Error, Result};
use image::RgbaImage;

/// Largest possible value of the YIQ delta between two colors.
const MAX_YIQ_DELTA: f64 = 35215.0;

/// Compare two RGBA images of equal size.
///
/// Returns the number of differing pixels. When `output` is given it
/// receives the diff visualization: differing pixels in `diff_color`,
/// anti-aliasing in `aa_color`, everything else as a faded grayscale copy
/// of `img1` (left untouched when `diff_mask` is set).
pub fn pixelmatch(
    img1: &RgbaImage,
    img2: &RgbaImage,
    output: Option<&mut RgbaImage>,
    options: &PixelmatchOptions,
) -> Result<u64> {
    ensure_same_size(img1, img2)?;
    let (width, height) = img1.dimensions();

    let mut output: Option<&mut [u8]> = match output {
        Some(out) => {
            ensure_same_size(img1, out)?;
            Some(&mut **out)
        }
        None => None,
    };

    let a: &[u8] = img1.as_raw();
    let b: &[u8] = img2.as_raw();

    if a == b {
        if let Some(out) = output.as_deref_mut() {
            if !options.diff_mask {
                for pos in (0..a.len()).step_by(4) {
                    draw_gray_pixel(a, pos, options.alpha, out);
                }
            }
        }
        return Ok(0);
    }

    let max_delta = MAX_YIQ_DELTA * options.threshold * options.threshold;
    let mut diff = 0u64;

    for y in 0..height {
        for x in 0..width {
            let pos = offset(x, y, width);
            let delta = color_delta(a, b, pos, pos, false);

            if delta.abs() > max_delta {
                let is_aa = !options.include_aa
                    && (antialiased(a, x, y, width, height, b)
                        || antialiased(b, x, y, width, height, a));

                if is_aa {
                    if let Some(out) = output.as_deref_mut() {
                        if !options.diff_mask {
                            draw_pixel(out, pos, options.aa_color);
                        }
                    }
                } else {
                    if let Some(out) = output.as_deref_mut() {
                        draw_pixel(out, pos, options.diff_color);
                    }
                    diff += 1;
                }
            } else if let Some(out) = output.as_deref_mut() {
                if !options.diff_mask {
                    draw_gray_pixel(a, pos, options.alpha, out);
                }
            }
        }
    }

    Ok(diff)
}

fn ensure_same_size(a: &RgbaImage, b: &RgbaImage) -> Result<()> {
    if a.dimensions() != b.dimensions() {
        let (w1, h1) = a.dimensions();
        let (w2, h2) = b.dimensions();
        return Err(Error::DimensionMismatch(w1, h1, w2, h2));
    }
    Ok(())
}

#[inline]
fn offset(x: u32, y: u32, width: u32) -> usize {
    (y as usize * width as usize + x as usize) * 4
}

/// Check if the pixel at (x1, y1) is likely part of an anti-aliased edge.
///
/// A pixel qualifies when it has at most two identical neighbours and its
/// darkest or brightest neighbour sits in a flat region in both images.
fn antialiased(img: &[u8], x1: u32, y1: u32, width: u32, height: u32, img2: &[u8]) -> bool {
    let x0 = x1.saturating_sub(1);
    let y0 = y1.saturating_sub(1);
    let x2 = (x1 + 1).min(width - 1);
    let y2 = (y1 + 1).min(height - 1);
    let pos = offset(x1, y1, width);

    let mut zeroes = if x1 == x0 || x1 == x2 || y1 == y0 || y1 == y2 {
        1
    } else {
        0
    };
    let mut min = 0.0;
    let mut max = 0.0;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (0, 0, 0, 0);

    for x in x0..=x2 {
        for y in y0..=y2 {
            if x == x1 && y == y1 {
                continue;
            }

            let delta = color_delta(img, img, pos, offset(x, y, width), true);
            if delta == 0.0 {
                zeroes += 1;
                if zeroes > 2 {
                    return false;
                }
            } else if delta < min {
                min = delta;
                min_x = x;
                min_y = y;
            } else if delta > max {
                max = delta;
                max_x = x;
                max_y = y;
            }
        }
    }

    // no darker or no brighter neighbour: not an edge
    if min == 0.0 || max == 0.0 {
        return false;
    }

    (has_many_siblings(img, min_x, min_y, width, height)
        && has_many_siblings(img2, min_x, min_y, width, height))
        || (has_many_siblings(img, max_x, max_y, width, height)
            && has_many_siblings(img2, max_x, max_y, width, height))
}

/// Check if the pixel at (x1, y1) has more than two identical neighbours.
fn has_many_siblings(img: &[u8], x1: u32, y1: u32, width: u32, height: u32) -> bool {
    let x0 = x1.saturating_sub(1);
    let y0 = y1.saturating_sub(1);
    let x2 = (x1 + 1).min(width - 1);
    let y2 = (y1 + 1).min(height - 1);
    let pos = offset(x1, y1, width);
    let pixel = &img[pos..pos + 4];

    let mut zeroes = if x1 == x0 || x1 == x2 || y1 == y0 || y1 == y2 {
        1
    } else {
        0
    };

    for x in x0..=x2 {
        for y in y0..=y2 {
            if x == x1 && y == y1 {
                continue;
            }
            let pos2 = offset(x, y, width);
            if pixel == &img[pos2..pos2 + 4] {
                zeroes += 1;
            }
            if zeroes > 2 {
                return true;
            }
        }
    }

    false
}

/// Squared YIQ distance between pixel `k` of `img1` and pixel `m` of `img2`.
///
/// The sign is negative when the first pixel is brighter. With `y_only`
/// only the signed luminance difference is returned.
fn color_delta(img1: &[u8], img2: &[u8], k: usize, m: usize, y_only: bool) -> f64 {
    let p1 = &img1[k..k + 4];
    let p2 = &img2[m..m + 4];
    if p1 == p2 {
        return 0.0;
    }

    let (r1, g1, b1) = blend_white(p1);
    let (r2, g2, b2) = blend_white(p2);

    let y1 = rgb2y(r1, g1, b1);
    let y2 = rgb2y(r2, g2, b2);
    let y = y1 - y2;

    if y_only {
        return y;
    }

    let i = rgb2i(r1, g1, b1) - rgb2i(r2, g2, b2);
    let q = rgb2q(r1, g1, b1) - rgb2q(r2, g2, b2);
    let delta = 0.5053 * y * y + 0.299 * i * i + 0.1957 * q * q;

    if y1 > y2 {
        -delta
    } else {
        delta
    }
}

/// Composite a possibly translucent pixel over white.
fn blend_white(px: &[u8]) -> (f64, f64, f64) {
    let (r, g, b, a) = (px[0] as f64, px[1] as f64, px[2] as f64, px[3]);
    if a < 255 {
        let a = a as f64 / 255.0;
        (blend(r, a), blend(g, a), blend(b, a))
    } else {
        (r, g, b)
    }
}

#[inline]
fn rgb2y(r: f64, g: f64, b: f64) -> f64 {
    r * 0.29889531 + g * 0.58662247 + b * 0.11448223
}

#[inline]
fn rgb2i(r: f64, g: f64, b: f64) -> f64 {
    r * 0.59597799 - g * 0.27417610 - b * 0.32180189
}

#[inline]
fn rgb2q(r: f64, g: f64, b: f64) -> f64 {
    r * 0.21147017 - g * 0.52261711 + b * 0.31114694
}

#[inline]
fn blend(c: f64, a: f64) -> f64 {
    255.0 + (c - 255.0) * a
}

fn draw_pixel(out: &mut [u8], pos: usize, [r, g, b]: [u8; 3]) {
    out[pos..pos + 4].copy_from_slice(&[r, g, b, 255]);
}

fn draw_gray_pixel(img: &[u8], pos: usize, alpha: f64, out: &mut [u8]) {
    let (r, g, b) = (img[pos] as f64, img[pos + 1] as f64, img[pos + 2] as f64);
    let val = blend(rgb2y(r, g, b), alpha * img[pos + 3] as f64 / 255.0);
    let val = val.round().clamp(0.0, 255.0) as u8;
    draw_pixel(out, pos, [val, val, val]);
}
