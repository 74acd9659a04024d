//! PDF to raster image conversion.

mod backend;
mod pdfium;

pub use backend::{points_to_pixels, RasterOptions, Rasterizer, POINTS_PER_INCH};
pub use pdfium::PdfiumRasterizer;
