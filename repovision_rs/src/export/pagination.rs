//! Page geometry and vertical tiling of a captured raster.
//!
//! The raster is scaled to the full page width and drawn once per page,
//! each page shifting it up by one page height. All lengths are millimetres.

use serde::{Deserialize, Serialize};

use crate::error::CaptureError;

/// Millimetres to PDF points.
pub const MM_TO_PT: f64 = 72.0 / 25.4;

// Absorbs float noise from the width-ratio scaling at exact page multiples
const EPSILON: f64 = 1e-9;

/// Fixed document page size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl PageGeometry {
    pub const A4_PORTRAIT: Self = Self {
        width_mm: 210.0,
        height_mm: 297.0,
    };

    pub fn validate(&self) -> Result<(), CaptureError> {
        for (name, value) in [("width_mm", self.width_mm), ("height_mm", self.height_mm)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(CaptureError::InvalidGeometry(format!(
                    "page {name} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }

    pub fn width_pt(&self) -> f64 {
        self.width_mm * MM_TO_PT
    }

    pub fn height_pt(&self) -> f64 {
        self.height_mm * MM_TO_PT
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::A4_PORTRAIT
    }
}

/// How many pages a raster of height `h` occupies on pages of height `p`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaginationMode {
    /// `max(1, ceil(h / p))` pages; no trailing blank page.
    #[default]
    Exact,
    /// Keep adding pages while the remaining height is `>= 0`, which adds a
    /// blank trailing page when `h` is an exact multiple of `p`.
    Literal,
}

/// Placement of the scaled raster on every page.
#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    pub image_width: f64,
    pub image_height: f64,
    /// Vertical offset of the raster's top edge on page `k`: `-k * page_height`.
    pub offsets: Vec<f64>,
}

impl Pagination {
    pub fn page_count(&self) -> usize {
        self.offsets.len()
    }
}

/// Tile a `raster_width` x `raster_height` image across pages of `geometry`.
pub fn paginate(
    raster_width: f64,
    raster_height: f64,
    geometry: PageGeometry,
    mode: PaginationMode,
) -> Result<Pagination, CaptureError> {
    geometry.validate()?;
    if !(raster_width.is_finite() && raster_width > 0.0)
        || !(raster_height.is_finite() && raster_height > 0.0)
    {
        return Err(CaptureError::InvalidGeometry(format!(
            "raster must have positive dimensions, got {raster_width}x{raster_height}"
        )));
    }

    let image_width = geometry.width_mm;
    let image_height = raster_height * geometry.width_mm / raster_width;
    let ratio = image_height / geometry.height_mm;

    let pages = match mode {
        PaginationMode::Exact => ((ratio - EPSILON).ceil() as usize).max(1),
        PaginationMode::Literal => (ratio + EPSILON).floor() as usize + 1,
    };

    let offsets = (0..pages)
        .map(|k| -(k as f64) * geometry.height_mm)
        .collect();

    Ok(Pagination {
        image_width,
        image_height,
        offsets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const A4: PageGeometry = PageGeometry::A4_PORTRAIT;

    #[test]
    fn short_image_fits_on_one_page() {
        let p = paginate(1920.0, 900.0, A4, PaginationMode::Exact).expect("valid raster");
        assert_eq!(p.page_count(), 1);
        assert_eq!(p.offsets, vec![0.0]);
        assert_eq!(p.image_width, 210.0);
        assert!((p.image_height - 98.4375).abs() < 1e-9);
    }

    #[test]
    fn exact_multiple_has_no_blank_page_in_exact_mode() {
        let p = paginate(210.0, 594.0, A4, PaginationMode::Exact).expect("valid raster");
        assert_eq!(p.page_count(), 2);
        assert_eq!(p.offsets, vec![0.0, -297.0]);
    }

    #[test]
    fn literal_mode_keeps_trailing_blank_page() {
        let p = paginate(210.0, 594.0, A4, PaginationMode::Literal).expect("valid raster");
        assert_eq!(p.page_count(), 3);
        assert_eq!(p.offsets, vec![0.0, -297.0, -594.0]);

        let p = paginate(210.0, 400.0, A4, PaginationMode::Literal).expect("valid raster");
        assert_eq!(p.page_count(), 2);
    }

    #[test]
    fn degenerate_rasters_are_rejected() {
        let cases = [
            (0.0, 100.0),
            (100.0, 0.0),
            (-5.0, 10.0),
            (f64::NAN, 10.0),
            (10.0, f64::INFINITY),
        ];
        for (w, h) in cases {
            assert!(matches!(
                paginate(w, h, A4, PaginationMode::Exact),
                Err(CaptureError::InvalidGeometry(_))
            ));
        }
    }

    #[test]
    fn degenerate_pages_are_rejected() {
        let flat = PageGeometry {
            width_mm: 210.0,
            height_mm: 0.0,
        };
        assert!(paginate(100.0, 100.0, flat, PaginationMode::Exact).is_err());
        assert!(flat.validate().is_err());
        assert!(A4.validate().is_ok());
    }

    proptest! {
        #[test]
        fn page_count_is_ceiling(w in 1u32..4000, h in 1u32..60_000) {
            let p = paginate(w as f64, h as f64, A4, PaginationMode::Exact).unwrap();
            let n = p.page_count();
            prop_assert!(n >= 1);
            // Content fits in n pages but not in n - 1
            prop_assert!(p.image_height <= n as f64 * A4.height_mm + 1e-6);
            if n > 1 {
                prop_assert!(p.image_height > (n - 1) as f64 * A4.height_mm - 1e-6);
            }
        }

        #[test]
        fn last_offset_is_minus_n_minus_one_pages(w in 1u32..4000, h in 1u32..60_000) {
            let p = paginate(w as f64, h as f64, A4, PaginationMode::Exact).unwrap();
            let n = p.page_count();
            prop_assert_eq!(p.offsets[n - 1], -((n - 1) as f64) * A4.height_mm);
            for (k, offset) in p.offsets.iter().enumerate() {
                prop_assert_eq!(*offset, -(k as f64) * A4.height_mm);
            }
        }

        #[test]
        fn exact_division_gives_exactly_h_over_p(pages in 1usize..40) {
            let h = pages as f64 * A4.height_mm;
            let p = paginate(A4.width_mm, h, A4, PaginationMode::Exact).unwrap();
            prop_assert_eq!(p.page_count(), pages);

            let literal = paginate(A4.width_mm, h, A4, PaginationMode::Literal).unwrap();
            prop_assert_eq!(literal.page_count(), pages + 1);
        }

        #[test]
        fn modes_agree_off_the_boundary(w in 1u32..4000, h in 1u32..60_000) {
            let exact = paginate(w as f64, h as f64, A4, PaginationMode::Exact).unwrap();
            let literal = paginate(w as f64, h as f64, A4, PaginationMode::Literal).unwrap();
            let ratio = exact.image_height / A4.height_mm;
            if (ratio - ratio.round()).abs() > 1e-6 {
                prop_assert_eq!(exact.page_count(), literal.page_count());
            }
        }
    }
}
