//! Renderable surfaces for the capture path.
//!
//! The exporter never talks to a display directly. It asks a [`Viewport`]
//! for a surface and rasterizes that surface through [`RenderSurface`], so
//! pagination and the fallback decision can be exercised with in-memory
//! images.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::error::CaptureError;

/// Largest raster a capture may allocate (512 MiB of RGBA).
pub const MAX_RASTER_PIXELS: u64 = 1 << 27;

/// Rasterization settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureOptions {
    /// Resolution scale factor.
    pub scale: f64,
    /// Reference capture width in logical units; wider content is clipped.
    pub window_width: u32,
    /// Colour composited under transparent pixels.
    pub background: [u8; 3],
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            scale: 1.5,
            window_width: 1280,
            background: [5, 8, 22],
        }
    }
}

/// Something that can be rasterized into a single opaque image.
pub trait RenderSurface: Send + Sync {
    fn id(&self) -> &str;

    /// Rasterize the surface. The returned image has no transparency left.
    fn rasterize<'a>(
        &'a self,
        options: &'a CaptureOptions,
    ) -> BoxFuture<'a, Result<RgbaImage, CaptureError>>;
}

/// The visible surface plus any designated sub-surfaces.
#[derive(Clone, Default)]
pub struct Viewport {
    root: Option<Arc<dyn RenderSurface>>,
    surfaces: HashMap<String, Arc<dyn RenderSurface>>,
}

impl Viewport {
    /// Viewport with nothing to capture.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Viewport whose whole visible area is `root`.
    pub fn new(root: impl RenderSurface + 'static) -> Self {
        Self {
            root: Some(Arc::new(root)),
            surfaces: HashMap::new(),
        }
    }

    /// Register a designated surface under its own id.
    pub fn with_surface(mut self, surface: impl RenderSurface + 'static) -> Self {
        self.surfaces
            .insert(surface.id().to_string(), Arc::new(surface));
        self
    }

    /// The designated surface, or the whole visible surface when it is absent.
    pub fn acquire(&self, id: Option<&str>) -> Result<&dyn RenderSurface, CaptureError> {
        if let Some(surface) = id.and_then(|id| self.surfaces.get(id)) {
            return Ok(surface.as_ref());
        }
        match &self.root {
            Some(root) => {
                if let Some(id) = id {
                    debug!(
                        requested = id,
                        using = root.id(),
                        "designated surface absent, capturing whole viewport"
                    );
                }
                Ok(root.as_ref())
            }
            None => Err(CaptureError::SurfaceUnavailable(
                id.unwrap_or("viewport").to_string(),
            )),
        }
    }
}

/// A surface backed by a pre-rendered snapshot of the report.
pub struct ImageSurface {
    id: String,
    snapshot: RgbaImage,
}

impl ImageSurface {
    pub fn new(id: impl Into<String>, snapshot: RgbaImage) -> Self {
        Self {
            id: id.into(),
            snapshot,
        }
    }

    /// Load a PNG snapshot from disk.
    pub fn open(id: impl Into<String>, path: &Path) -> Result<Self, CaptureError> {
        let id = id.into();
        let snapshot = image::open(path)
            .map_err(|e| {
                CaptureError::SurfaceUnavailable(format!("{id} ({}): {e}", path.display()))
            })?
            .to_rgba8();
        Ok(Self::new(id, snapshot))
    }
}

impl RenderSurface for ImageSurface {
    fn id(&self) -> &str {
        &self.id
    }

    fn rasterize<'a>(
        &'a self,
        options: &'a CaptureOptions,
    ) -> BoxFuture<'a, Result<RgbaImage, CaptureError>> {
        async move { rasterize_snapshot(&self.snapshot, options) }.boxed()
    }
}

fn rasterize_snapshot(
    snapshot: &RgbaImage,
    options: &CaptureOptions,
) -> Result<RgbaImage, CaptureError> {
    let (width, height) = snapshot.dimensions();
    if width == 0 || height == 0 {
        return Err(CaptureError::EmptySurface { width, height });
    }
    if !(options.scale.is_finite() && options.scale > 0.0) {
        return Err(CaptureError::InvalidGeometry(format!(
            "capture scale must be positive, got {}",
            options.scale
        )));
    }

    let clipped_width = width.min(options.window_width);
    let scaled_width = (f64::from(clipped_width) * options.scale).round();
    let scaled_height = (f64::from(height) * options.scale).round();
    if scaled_width * scaled_height > MAX_RASTER_PIXELS as f64 {
        return Err(CaptureError::InvalidGeometry(format!(
            "capture would be {scaled_width}x{scaled_height} pixels, \
             above the {MAX_RASTER_PIXELS} pixel limit"
        )));
    }

    // Both sides are below the pixel limit, so they fit in u32
    let target_width = scaled_width as u32;
    let target_height = scaled_height as u32;
    if target_width == 0 || target_height == 0 {
        return Err(CaptureError::EmptySurface {
            width: target_width,
            height: target_height,
        });
    }

    let clipped = imageops::crop_imm(snapshot, 0, 0, clipped_width, height).to_image();

    let mut scaled = if (target_width, target_height) == (clipped_width, height) {
        clipped
    } else {
        imageops::resize(&clipped, target_width, target_height, FilterType::Triangle)
    };

    let [br, bg, bb] = options.background;
    for pixel in scaled.pixels_mut() {
        let Rgba([r, g, b, a]) = *pixel;
        let blend = |fg: u8, back: u8| -> u8 {
            let a = u16::from(a);
            ((u16::from(fg) * a + u16::from(back) * (255 - a) + 127) / 255) as u8
        };
        *pixel = Rgba([blend(r, br), blend(g, bg), blend(b, bb), 255]);
    }

    Ok(scaled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(width: u32, height: u32, pixel: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(pixel))
    }

    #[tokio::test]
    async fn scales_and_composites_over_background() {
        let surface = ImageSurface::new("results-content", snapshot(100, 40, [255, 255, 255, 0]));
        let raster = surface
            .rasterize(&CaptureOptions::default())
            .await
            .expect("rasterizes");

        assert_eq!(raster.dimensions(), (150, 60));
        assert_eq!(raster.get_pixel(10, 10), &Rgba([5, 8, 22, 255]));
    }

    #[tokio::test]
    async fn clips_to_window_width() {
        let surface = ImageSurface::new("root", snapshot(2000, 10, [200, 200, 200, 255]));
        let options = CaptureOptions {
            scale: 1.0,
            ..CaptureOptions::default()
        };
        let raster = surface.rasterize(&options).await.expect("rasterizes");

        assert_eq!(raster.dimensions(), (1280, 10));
        assert_eq!(raster.get_pixel(0, 0), &Rgba([200, 200, 200, 255]));
    }

    #[tokio::test]
    async fn zero_size_surface_is_an_error() {
        let surface = ImageSurface::new("results-content", RgbaImage::new(0, 0));
        let err = surface
            .rasterize(&CaptureOptions::default())
            .await
            .expect_err("empty surface");
        assert_eq!(err, CaptureError::EmptySurface { width: 0, height: 0 });
    }

    #[tokio::test]
    async fn oversized_scale_is_rejected_before_allocating() {
        let surface = ImageSurface::new("viewport", snapshot(10, 10, [0, 0, 0, 255]));
        let options = CaptureOptions {
            scale: 1e12,
            ..CaptureOptions::default()
        };
        let err = surface.rasterize(&options).await.expect_err("too large");
        assert!(matches!(err, CaptureError::InvalidGeometry(_)));
    }

    #[test]
    fn acquire_prefers_designated_surface() {
        let viewport = Viewport::new(ImageSurface::new("viewport", snapshot(4, 4, [0; 4])))
            .with_surface(ImageSurface::new("results-content", snapshot(2, 2, [0; 4])));

        let chosen = viewport.acquire(Some("results-content")).expect("designated");
        assert_eq!(chosen.id(), "results-content");

        let fallback = viewport.acquire(Some("missing")).expect("root");
        assert_eq!(fallback.id(), "viewport");
        assert_eq!(viewport.acquire(None).expect("root").id(), "viewport");
    }

    #[test]
    fn empty_viewport_has_nothing_to_capture() {
        assert!(matches!(
            Viewport::empty().acquire(Some("results-content")),
            Err(CaptureError::SurfaceUnavailable(_))
        ));
    }

    #[test]
    fn missing_snapshot_file_is_unavailable() {
        let result = ImageSurface::open("viewport", Path::new("/nonexistent/snapshot.png"));
        assert!(matches!(result, Err(CaptureError::SurfaceUnavailable(_))));
    }
}
