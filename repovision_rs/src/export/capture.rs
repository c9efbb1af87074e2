//! Capture-based export: rasterize a surface and tile it across pages.

use tracing::debug;

use super::pagination::{PageGeometry, PaginationMode, paginate};
use super::pdf::PdfBuilder;
use super::surface::{CaptureOptions, RenderSurface};
use crate::error::CaptureError;

/// Encoded capture document.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedDocument {
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

pub struct CaptureExporter {
    options: CaptureOptions,
    geometry: PageGeometry,
    mode: PaginationMode,
}

impl Default for CaptureExporter {
    fn default() -> Self {
        Self::new(
            CaptureOptions::default(),
            PageGeometry::A4_PORTRAIT,
            PaginationMode::default(),
        )
    }
}

impl CaptureExporter {
    pub fn new(options: CaptureOptions, geometry: PageGeometry, mode: PaginationMode) -> Self {
        Self {
            options,
            geometry,
            mode,
        }
    }

    /// Rasterize `surface` and lay the raster out page by page.
    ///
    /// The raster is embedded once; every page draws it shifted up by one
    /// more page height, so the last page may end in blank space but nothing
    /// is cropped.
    pub async fn export(
        &self,
        surface: &dyn RenderSurface,
    ) -> Result<CapturedDocument, CaptureError> {
        let raster = surface.rasterize(&self.options).await?;
        let (width, height) = raster.dimensions();
        if width == 0 || height == 0 {
            return Err(CaptureError::EmptySurface { width, height });
        }

        let pagination = paginate(f64::from(width), f64::from(height), self.geometry, self.mode)?;
        debug!(
            surface = surface.id(),
            raster_width = width,
            raster_height = height,
            image_height_mm = pagination.image_height,
            pages = pagination.page_count(),
            "capture paginated"
        );

        let mut pdf = PdfBuilder::new(self.geometry);
        let resources = pdf.image_resources(&raster);
        for offset in &pagination.offsets {
            let ops = pdf.place_image(&pagination, *offset);
            pdf.push_page(ops, &resources)?;
        }

        let bytes = pdf.finish()?;
        Ok(CapturedDocument {
            bytes,
            page_count: pagination.page_count(),
        })
    }
}
