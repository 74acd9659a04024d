//! # pdfdiff
//!
//! Pixel-level visual comparison of PDF documents.
//!
//! Both documents are rendered page by page at a fixed resolution, pages are
//! paired by index, and each pair is compared with a perceptual pixel diff.
//! Every page that differs (or exists in only one document) gets a
//! `diff_page_{N}.png` in the output directory.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> pdfdiff::Result<()> {
//!     let differs = pdfdiff::compare_pdf_pages("before.pdf", "after.pdf", "diff_results")?;
//!     if differs {
//!         println!("Differences found.");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Caveat: pages of different sizes
//!
//! When two paired pages render to different pixel dimensions, the second
//! page is resized (Lanczos3) to the first page's dimensions before the
//! diff. The comparison is then made against a scaled rendering, which can
//! hide real differences or report resampling artifacts as differences.
//! Such pages carry `resized_from` in the [`ComparisonReport`].
//!
//! ## Rendering backend
//!
//! Rendering uses pdfium through `pdfium-render`; the pdfium shared library
//! must be available at runtime (see [`RasterOptions::with_library_path`]).
//! Other backends can be plugged in through the [`Rasterizer`] trait.

pub mod compare;
pub mod detect;
pub mod diff;
pub mod error;
pub mod model;
pub mod raster;
pub mod report;

// Re-export commonly used types
pub use compare::{diff_file_name, CompareOptions, PdfComparator, DEFAULT_DPI, DEFAULT_OUTPUT_DIR};
pub use detect::{ensure_pdf, is_pdf_bytes};
pub use diff::{pixelmatch, PixelmatchOptions, DEFAULT_THRESHOLD};
pub use error::{Error, Result};
pub use model::{
    ComparisonReport, DocumentSide, DocumentSummary, PageOutcome, PageResult, RasterDocument,
};
pub use raster::{PdfiumRasterizer, RasterOptions, Rasterizer};
pub use report::{to_json, JsonFormat};

use std::path::Path;

/// Compare two PDF files page by page.
///
/// Renders both files at 100 dpi with pdfium, writes a diff image for every
/// differing or unmatched page into `output_dir` (created if missing), and
/// returns `true` if any difference was found, including a page count
/// mismatch.
///
/// # Example
///
/// ```no_run
/// use pdfdiff::compare_pdf_pages;
///
/// let differs = compare_pdf_pages("a.pdf", "b.pdf", "diff_results").unwrap();
/// std::process::exit(if differs { 1 } else { 0 });
/// ```
pub fn compare_pdf_pages<P, Q, O>(first: P, second: Q, output_dir: O) -> Result<bool>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    O: AsRef<Path>,
{
    let options = CompareOptions::new().with_output_dir(output_dir.as_ref());
    let report = compare_pdf_pages_with_options(first, second, options)?;
    Ok(report.differences_found())
}

/// Compare two PDF files with custom options and return the full report.
///
/// # Example
///
/// ```no_run
/// use pdfdiff::{compare_pdf_pages_with_options, CompareOptions};
///
/// let options = CompareOptions::new()
///     .with_output_dir("out")
///     .with_dpi(150.0);
/// let report = compare_pdf_pages_with_options("a.pdf", "b.pdf", options).unwrap();
/// for page in report.differing_pages() {
///     println!("page {}: {:?}", page.number, page.outcome);
/// }
/// ```
pub fn compare_pdf_pages_with_options<P, Q>(
    first: P,
    second: Q,
    options: CompareOptions,
) -> Result<ComparisonReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let comparator = PdfComparator::new(PdfiumRasterizer::new()?, options);
    comparator.compare(first, second)
}
