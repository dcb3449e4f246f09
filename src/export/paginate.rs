//! Page planning for tall raster images.
//!
//! The rendered proposal is one continuous image. Printing slices it into
//! A4 windows: the image is scaled uniformly to the usable page width, and
//! page `n` shows the band starting `n` usable-heights down the image.

use super::ExportError;

/// Physical page dimensions in millimeters.
#[derive(Debug, Clone, Copy)]
pub struct PageGeometry {
    pub page_width_mm: f64,
    pub page_height_mm: f64,
    pub margin_mm: f64,
}

impl PageGeometry {
    /// Portrait A4 with a uniform 10mm margin.
    pub const fn a4() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 10.0,
        }
    }

    pub fn usable_width_mm(&self) -> f64 {
        self.page_width_mm - 2.0 * self.margin_mm
    }

    pub fn usable_height_mm(&self) -> f64 {
        self.page_height_mm - 2.0 * self.margin_mm
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

/// One printed page: which band of the scaled image it shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagePlacement {
    pub index: usize,
    /// Distance from the top of the scaled image to the top of this band.
    pub offset_mm: f64,
}

/// Full slicing plan for one exported document.
#[derive(Debug, Clone)]
pub struct PaginationPlan {
    pub geometry: PageGeometry,
    /// Image width after scaling, equal to the usable page width.
    pub scaled_width_mm: f64,
    /// Image height after the same uniform scale.
    pub scaled_height_mm: f64,
    pub pages: Vec<PagePlacement>,
}

impl PaginationPlan {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Plan how a rendered image of `width_px` x `height_px` spreads across pages.
///
/// The page count is the scaled height divided by the usable page height,
/// rounded up. A document whose scaled height lands exactly on a page
/// boundary gets no trailing blank page.
pub fn plan_pages(
    width_px: u32,
    height_px: u32,
    geometry: PageGeometry,
) -> Result<PaginationPlan, ExportError> {
    if width_px == 0 || height_px == 0 {
        return Err(ExportError::EmptyDocument);
    }

    let usable_width = geometry.usable_width_mm();
    let usable_height = geometry.usable_height_mm();
    let scaled_height = height_px as f64 * usable_width / width_px as f64;

    let page_count = (scaled_height / usable_height).ceil().max(1.0) as usize;
    let pages = (0..page_count)
        .map(|index| PagePlacement {
            index,
            offset_mm: index as f64 * usable_height,
        })
        .collect();

    Ok(PaginationPlan {
        geometry,
        scaled_width_mm: usable_width,
        scaled_height_mm: scaled_height,
        pages,
    })
}
