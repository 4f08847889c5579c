//! Full-frame interference renderer.
//!
//! One pass sweeps every pixel of the viewport: map the pixel to physical
//! screen coordinates, evaluate the field there, and shade the wavelength
//! tint by the resulting intensity. The tint, the pixel mapping and the
//! field constants are computed once per frame in `FramePlan`.

use crate::cancellation::{CancellationChecker, NeverCancel};
use crate::field::FieldGeometry;
use crate::render_config::RenderConfig;
use doubleslit_core::{
    wavelength_to_tint, ColorTint, OpticalParameters, PixelBuffer, ScreenMapping, ViewportSize,
    BYTES_PER_PIXEL,
};
use std::ops::Range;

/// Rows rendered between cancellation checks.
const ROWS_PER_CHECK: u32 = 16;

/// Result of a cancellable pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Every pixel was written; the buffer may be displayed.
    Complete,
    /// Stopped early. The buffer holds a partial frame and must not be shown.
    Cancelled { completed_rows: u32 },
}

impl RenderOutcome {
    pub fn is_complete(&self) -> bool {
        matches!(self, RenderOutcome::Complete)
    }
}

/// Per-frame constants shared by every pixel of one pass.
#[derive(Clone, Copy, Debug)]
pub struct FramePlan {
    pub size: ViewportSize,
    pub mapping: ScreenMapping,
    pub geometry: FieldGeometry,
    pub tint: ColorTint,
}

impl FramePlan {
    /// None for a zero-area viewport.
    pub fn new(
        params: &OpticalParameters,
        size: ViewportSize,
        config: &RenderConfig,
    ) -> Option<Self> {
        if size.is_empty() {
            return None;
        }
        Some(Self {
            size,
            mapping: ScreenMapping::new(size, config.physical_width_mm),
            geometry: FieldGeometry::new(params).with_falloff(config.falloff),
            tint: wavelength_to_tint(params.wavelength_nm),
        })
    }

    /// Render `rows` into `out`, which holds exactly those rows (RGBA8).
    pub fn render_rows(&self, rows: Range<u32>, out: &mut [u8]) {
        let stride = self.size.width as usize * BYTES_PER_PIXEL;
        debug_assert_eq!(
            out.len(),
            rows.len() * stride,
            "Row buffer size doesn't match row range"
        );

        for (py, row) in rows.zip(out.chunks_exact_mut(stride)) {
            self.render_row(py, row);
        }
    }

    #[inline]
    fn render_row(&self, py: u32, row: &mut [u8]) {
        let row_term = self.geometry.row_term(self.mapping.y_mm(py));
        for (px, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
            let intensity = self
                .geometry
                .intensity_in_row(self.mapping.x_mm(px as u32), row_term);
            pixel.copy_from_slice(&self.tint.shade(intensity));
        }
    }
}

/// Renders interference frames into owned pixel buffers.
#[derive(Clone, Debug, Default)]
pub struct FrameRenderer {
    config: RenderConfig,
}

impl FrameRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RenderConfig) {
        self.config = config;
    }

    /// Allocate and fill a new frame.
    pub fn render(&self, params: &OpticalParameters, size: ViewportSize) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(size);
        self.render_into(params, size, &mut buffer);
        buffer
    }

    /// Fill `buffer`, resizing it to `size` first. Every byte is overwritten.
    pub fn render_into(
        &self,
        params: &OpticalParameters,
        size: ViewportSize,
        buffer: &mut PixelBuffer,
    ) {
        let outcome = self.render_cancellable(params, size, buffer, &NeverCancel);
        debug_assert!(outcome.is_complete());
    }

    /// Fill `buffer`, checking `checker` every few rows.
    pub fn render_cancellable(
        &self,
        params: &OpticalParameters,
        size: ViewportSize,
        buffer: &mut PixelBuffer,
        checker: &impl CancellationChecker,
    ) -> RenderOutcome {
        buffer.resize(size);

        let Some(plan) = FramePlan::new(params, size, &self.config) else {
            return RenderOutcome::Complete;
        };

        let stride = size.width as usize * BYTES_PER_PIXEL;
        let bytes = buffer.as_bytes_mut();

        let mut row = 0;
        while row < size.height {
            if checker.is_cancelled() {
                log::debug!("Render cancelled after {row} of {} rows", size.height);
                return RenderOutcome::Cancelled {
                    completed_rows: row,
                };
            }
            let end = (row + ROWS_PER_CHECK).min(size.height);
            let band = &mut bytes[row as usize * stride..end as usize * stride];
            plan.render_rows(row..end, band);
            row = end;
        }

        RenderOutcome::Complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CancelAfter {
        checks_left: Cell<u32>,
    }

    impl CancellationChecker for CancelAfter {
        fn is_cancelled(&self) -> bool {
            let left = self.checks_left.get();
            if left == 0 {
                return true;
            }
            self.checks_left.set(left - 1);
            false
        }
    }

    #[test]
    fn render_fills_whole_buffer_opaque() {
        let renderer = FrameRenderer::default();
        let buffer = renderer.render(&OpticalParameters::default(), ViewportSize::new(64, 48));

        assert_eq!(buffer.size(), ViewportSize::new(64, 48));
        assert_eq!(buffer.as_bytes().len(), 64 * 48 * 4);
        assert!(buffer.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn zero_area_viewport_yields_empty_buffer() {
        let renderer = FrameRenderer::default();
        let buffer = renderer.render(&OpticalParameters::default(), ViewportSize::new(0, 100));
        assert!(buffer.is_empty());
    }

    #[test]
    fn centre_pixel_has_full_tint() {
        let renderer = FrameRenderer::default();
        let params = OpticalParameters::default();
        let buffer = renderer.render(&params, ViewportSize::new(200, 100));

        let tint = wavelength_to_tint(params.wavelength_nm);
        assert_eq!(buffer.pixel(100, 50), Some([tint.r, tint.g, tint.b, 255]));
    }

    #[test]
    fn render_into_reuses_and_resizes_buffer() {
        let renderer = FrameRenderer::default();
        let params = OpticalParameters::default();
        let mut buffer = PixelBuffer::new(ViewportSize::new(10, 10));

        renderer.render_into(&params, ViewportSize::new(30, 20), &mut buffer);

        assert_eq!(buffer, renderer.render(&params, ViewportSize::new(30, 20)));
    }

    #[test]
    fn cancellation_stops_between_row_bands() {
        let renderer = FrameRenderer::default();
        let checker = CancelAfter {
            checks_left: Cell::new(2),
        };
        let mut buffer = PixelBuffer::default();

        let outcome = renderer.render_cancellable(
            &OpticalParameters::default(),
            ViewportSize::new(8, 100),
            &mut buffer,
            &checker,
        );

        assert_eq!(
            outcome,
            RenderOutcome::Cancelled {
                completed_rows: 2 * ROWS_PER_CHECK
            }
        );
    }

    #[test]
    fn frame_plan_rows_match_full_render() {
        let params = OpticalParameters::new(610.0, 0.7, 40.0).unwrap();
        let size = ViewportSize::new(12, 9);
        let config = RenderConfig::default();
        let plan = FramePlan::new(&params, size, &config).unwrap();

        let mut band = vec![0u8; 3 * 12 * 4];
        plan.render_rows(4..7, &mut band);

        let full = FrameRenderer::new(config).render(&params, size);
        let stride = 12 * 4;
        assert_eq!(&band[..], &full.as_bytes()[4 * stride..7 * stride]);
    }
}
