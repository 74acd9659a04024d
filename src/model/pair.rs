//! Positional pairing of pages across two documents.

use super::{DocumentSide, RasterDocument};
use image::DynamicImage;

/// The pages found at one index.
#[derive(Debug, Clone, Copy)]
pub enum PairedPages<'a> {
    /// Both documents have this page.
    Both(&'a DynamicImage, &'a DynamicImage),
    /// Only one document has this page.
    Lone(&'a DynamicImage, DocumentSide),
}

/// Page `index` of both documents.
#[derive(Debug, Clone, Copy)]
pub struct PagePair<'a> {
    /// Page index (0-indexed)
    pub index: usize,
    pub pages: PairedPages<'a>,
}

impl PagePair<'_> {
    /// Page number (1-indexed), as used in diff file names and log lines.
    pub fn number(&self) -> u32 {
        self.index as u32 + 1
    }
}

/// Pair pages by index over the length of the longer document.
pub fn pair_pages<'a>(
    first: &'a RasterDocument,
    second: &'a RasterDocument,
) -> impl Iterator<Item = PagePair<'a>> + 'a {
    let len = first.page_count().max(second.page_count());
    (0..len).filter_map(move |index| {
        let pages = match (first.page(index), second.page(index)) {
            (Some(a), Some(b)) => PairedPages::Both(a, b),
            (Some(a), None) => PairedPages::Lone(a, DocumentSide::First),
            (None, Some(b)) => PairedPages::Lone(b, DocumentSide::Second),
            (None, None) => return None,
        };
        Some(PagePair { index, pages })
    })
}
