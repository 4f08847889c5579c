//! Pixel <-> physical screen coordinates.
//!
//! The observation screen always spans a fixed physical width, whatever the
//! canvas size, so fringe spacing per millimetre stays the same across
//! window sizes. Pixels are square: the vertical scale equals the horizontal
//! one, and the origin sits at the canvas centre.

use crate::ViewportSize;

/// Physical width of the visualised screen in millimetres.
pub const DEFAULT_PHYSICAL_WIDTH_MM: f64 = 200.0;

/// Mapping from a pixel grid onto the physical screen plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenMapping {
    mm_per_pixel: f64,
    half_width: f64,
    half_height: f64,
}

impl ScreenMapping {
    /// Build the mapping for a viewport. `size.width` must be non-zero.
    pub fn new(size: ViewportSize, physical_width_mm: f64) -> Self {
        Self {
            mm_per_pixel: physical_width_mm / size.width as f64,
            half_width: size.width as f64 / 2.0,
            half_height: size.height as f64 / 2.0,
        }
    }

    pub fn mm_per_pixel(&self) -> f64 {
        self.mm_per_pixel
    }

    /// Physical x (mm) of pixel column `px`.
    #[inline]
    pub fn x_mm(&self, px: u32) -> f64 {
        (px as f64 - self.half_width) * self.mm_per_pixel
    }

    /// Physical y (mm) of pixel row `py`.
    #[inline]
    pub fn y_mm(&self, py: u32) -> f64 {
        (py as f64 - self.half_height) * self.mm_per_pixel
    }

    /// Physical coordinate of pixel (px, py).
    pub fn pixel_to_physical(&self, px: u32, py: u32) -> (f64, f64) {
        (self.x_mm(px), self.y_mm(py))
    }

    /// Fractional pixel position of a physical coordinate.
    pub fn physical_to_pixel(&self, x_mm: f64, y_mm: f64) -> (f64, f64) {
        (
            x_mm / self.mm_per_pixel + self.half_width,
            y_mm / self.mm_per_pixel + self.half_height,
        )
    }

    /// Visible physical height in millimetres.
    pub fn physical_height_mm(&self) -> f64 {
        self.half_height * 2.0 * self.mm_per_pixel
    }
}
