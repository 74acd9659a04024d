//! Page-by-page comparison of two rendered PDFs.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use image::RgbaImage;

use super::CompareOptions;
use crate::diff::{highlight, match_dimensions, pixelmatch, to_rgba};
use crate::error::Result;
use crate::model::{
    pair_pages, ComparisonReport, DocumentSummary, PageOutcome, PagePair, PageResult,
    PairedPages, RasterDocument,
};
use crate::raster::Rasterizer;

/// File name of the diff image for a page (1-indexed).
pub fn diff_file_name(page_number: u32) -> String {
    format!("diff_page_{}.png", page_number)
}

/// Compares two PDFs page by page and writes diff images.
///
/// # Example
///
/// ```no_run
/// use pdfdiff::{CompareOptions, PdfComparator, PdfiumRasterizer};
///
/// let comparator = PdfComparator::new(
///     PdfiumRasterizer::new()?,
///     CompareOptions::new().with_output_dir("diff_results"),
/// );
/// let report = comparator.compare("before.pdf", "after.pdf")?;
/// if report.differences_found() {
///     println!("{} pages differ", report.differing_pages().count());
/// }
/// # Ok::<(), pdfdiff::Error>(())
/// ```
pub struct PdfComparator<R> {
    rasterizer: R,
    options: CompareOptions,
}

impl<R: Rasterizer> PdfComparator<R> {
    /// Create a comparator over the given backend.
    pub fn new(rasterizer: R, options: CompareOptions) -> Self {
        Self {
            rasterizer,
            options,
        }
    }

    /// Get the options.
    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    /// Render every page of a PDF at the configured resolution.
    pub fn rasterize<P: AsRef<Path>>(&self, path: P) -> Result<RasterDocument> {
        let path = path.as_ref();
        let pages = self.rasterizer.rasterize(path, self.options.dpi)?;
        log::debug!(
            "{}: rendered {} pages with {}",
            path.display(),
            pages.len(),
            self.rasterizer.name()
        );
        Ok(RasterDocument::new(path, self.options.dpi, pages))
    }

    /// Render both PDFs and compare them.
    pub fn compare<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        first: P,
        second: Q,
    ) -> Result<ComparisonReport> {
        let first = self.rasterize(first)?;
        let second = self.rasterize(second)?;
        self.compare_documents(&first, &second)
    }

    /// Compare two rendered documents, writing a diff image for every page
    /// that is missing on one side or has differing pixels.
    pub fn compare_documents(
        &self,
        first: &RasterDocument,
        second: &RasterDocument,
    ) -> Result<ComparisonReport> {
        let output_dir = &self.options.output_dir;
        fs::create_dir_all(output_dir)?;

        if first.page_count() != second.page_count() {
            log::warn!(
                "Page count mismatch! ({} vs {})",
                first.page_count(),
                second.page_count()
            );
        }

        let pages = pair_pages(first, second)
            .map(|pair| self.compare_pair(&pair, output_dir))
            .collect::<Result<Vec<_>>>()?;

        Ok(ComparisonReport {
            first: summary(first),
            second: summary(second),
            dpi: first.dpi(),
            threshold: self.options.threshold(),
            output_dir: output_dir.clone(),
            pages,
            generated_at: Utc::now(),
        })
    }

    fn compare_pair(&self, pair: &PagePair<'_>, output_dir: &Path) -> Result<PageResult> {
        let number = pair.number();
        let diff_path = output_dir.join(diff_file_name(number));

        let (first, second) = match pair.pages {
            PairedPages::Both(first, second) => (first, second),
            PairedPages::Lone(page, present_in) => {
                page.to_rgb8().save(&diff_path)?;
                log::info!("Page {}: Missing in one of the PDFs.", number);
                return Ok(PageResult::new(number, PageOutcome::Missing { present_in })
                    .with_diff_image(diff_path));
            }
        };

        let first = to_rgba(first);
        let second = to_rgba(second);
        let original_size = second.dimensions();
        let (second, resized) = match_dimensions(&first, second);
        if resized {
            log::info!(
                "Page {}: Size mismatch {:?} vs {:?}. Resizing img2.",
                number,
                first.dimensions(),
                original_size
            );
        }

        let mut overlay = RgbaImage::new(first.width(), first.height());
        let mismatch = pixelmatch(&first, &second, Some(&mut overlay), &self.options.pixelmatch)?;

        let mut result = if mismatch > 0 {
            highlight(&first, &overlay).save(&diff_path)?;
            log::info!("Page {}: Found {} pixels of difference.", number, mismatch);
            PageResult::new(number, PageOutcome::Mismatch { pixels: mismatch })
                .with_diff_image(diff_path)
        } else {
            PageResult::new(number, PageOutcome::Identical)
        };

        if resized {
            result = result.with_resized_from(original_size);
        }
        Ok(result)
    }
}

fn summary(doc: &RasterDocument) -> DocumentSummary {
    DocumentSummary {
        path: PathBuf::from(doc.source()),
        page_count: doc.page_count(),
    }
}
