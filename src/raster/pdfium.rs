//! Rasterizer backed by pdfium-render.

use std::path::Path;

use image::{DynamicImage, RgbaImage};
use pdfium_render::prelude::*;

use super::backend::{points_to_pixels, RasterOptions, Rasterizer};
use crate::detect::ensure_pdf;
use crate::error::{Error, Result};

/// Concrete [`Rasterizer`] using the pdfium library.
pub struct PdfiumRasterizer {
    pdfium: Pdfium,
    options: RasterOptions,
}

impl PdfiumRasterizer {
    /// Bind to pdfium with default options.
    pub fn new() -> Result<Self> {
        Self::with_options(RasterOptions::default())
    }

    /// Bind to pdfium.
    ///
    /// Tries the explicit library path first, then the platform library
    /// name in the working directory, then the system library.
    pub fn with_options(options: RasterOptions) -> Result<Self> {
        let bindings = bind(&options)?;
        Ok(Self {
            pdfium: Pdfium::new(bindings),
            options,
        })
    }

    fn render_config(&self, width: u32, height: u32) -> PdfRenderConfig {
        PdfRenderConfig::new()
            .set_target_width(width as i32)
            .set_target_height(height as i32)
            .render_annotations(self.options.render_annotations)
            .render_form_data(self.options.render_form_data)
    }
}

fn bind(options: &RasterOptions) -> Result<Box<dyn PdfiumLibraryBindings>> {
    if let Some(path) = &options.library_path {
        return Pdfium::bind_to_library(path).map_err(|e| {
            Error::Backend(format!("cannot load {}: {}", path.display(), e))
        });
    }

    let local = Pdfium::pdfium_platform_library_name_at_path("./");
    match Pdfium::bind_to_library(&local) {
        Ok(bindings) => {
            log::debug!("Loaded pdfium from {}", local.display());
            Ok(bindings)
        }
        Err(_) => Pdfium::bind_to_system_library().map_err(|e| {
            Error::Backend(format!(
                "pdfium library not found in working directory or system paths: {}",
                e
            ))
        }),
    }
}

impl Rasterizer for PdfiumRasterizer {
    fn name(&self) -> &str {
        "pdfium"
    }

    fn rasterize(&self, path: &Path, dpi: f32) -> Result<Vec<DynamicImage>> {
        ensure_pdf(path)?;

        let document = self
            .pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| Error::Rasterize(format!("{}: {}", path.display(), e)))?;

        let mut images = Vec::with_capacity(document.pages().len() as usize);
        for (index, page) in document.pages().iter().enumerate() {
            let width = points_to_pixels(page.width().value, dpi);
            let height = points_to_pixels(page.height().value, dpi);

            let bitmap = page
                .render_with_config(&self.render_config(width, height))
                .map_err(|e| Error::Rasterize(format!("page {}: {}", index + 1, e)))?;

            let (bw, bh) = (bitmap.width() as u32, bitmap.height() as u32);
            let rgba = RgbaImage::from_raw(bw, bh, bitmap.as_rgba_bytes()).ok_or_else(|| {
                Error::Rasterize(format!("page {}: bitmap buffer size mismatch", index + 1))
            })?;

            log::debug!(
                "Rendered {} page {} at {} dpi: {}x{}",
                path.display(),
                index + 1,
                dpi,
                bw,
                bh
            );
            images.push(DynamicImage::ImageRgba8(rgba));
        }

        Ok(images)
    }
}
