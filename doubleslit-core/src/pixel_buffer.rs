//! Owned RGBA8 frame buffer.
//!
//! The renderer owns one of these for the duration of a pass and hands the
//! finished buffer to the display surface. Layout is row-major, four bytes
//! per pixel, matching what `ImageData` expects.

use crate::ViewportSize;

/// Bytes per pixel (R, G, B, A).
pub const BYTES_PER_PIXEL: usize = 4;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelBuffer {
    size: ViewportSize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a zeroed buffer for the given size.
    pub fn new(size: ViewportSize) -> Self {
        Self {
            size,
            data: vec![0; size.rgba_len()],
        }
    }

    pub fn size(&self) -> ViewportSize {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Resize to `size`, keeping the allocation when the size is unchanged.
    ///
    /// Contents are unspecified after a resize; callers overwrite every pixel.
    pub fn resize(&mut self, size: ViewportSize) {
        if self.size == size {
            return;
        }
        self.size = size;
        self.data.resize(size.rgba_len(), 0);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Byte range covering a single row.
    pub fn row_mut(&mut self, y: u32) -> Option<&mut [u8]> {
        if y >= self.size.height {
            return None;
        }
        let stride = self.size.width as usize * BYTES_PER_PIXEL;
        let start = y as usize * stride;
        Some(&mut self.data[start..start + stride])
    }

    /// RGBA at (x, y), or None if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if !self.size.contains(x, y) {
            return None;
        }
        let idx = (y as usize * self.size.width as usize + x as usize) * BYTES_PER_PIXEL;
        Some([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }

    /// Write RGBA at (x, y). Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if !self.size.contains(x, y) {
            return;
        }
        let idx = (y as usize * self.size.width as usize + x as usize) * BYTES_PER_PIXEL;
        self.data[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&rgba);
    }

    /// Iterate over pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.data
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|p| [p[0], p[1], p[2], p[3]])
    }

    /// Exchange contents with another buffer (used to hand a finished frame off).
    pub fn swap(&mut self, other: &mut PixelBuffer) {
        std::mem::swap(self, other);
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}
