use serde::{Deserialize, Serialize};

/// Canvas size in pixels, as reported by the host on layout or resize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Area in square pixels.
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Number of pixels (widened so large canvases cannot overflow).
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Length in bytes of an RGBA8 buffer of this size.
    pub fn rgba_len(&self) -> usize {
        self.pixel_count() * 4
    }

    /// Check if pixel is inside the viewport
    pub fn contains(&self, px: u32, py: u32) -> bool {
        px < self.width && py < self.height
    }
}

impl From<(u32, u32)> for ViewportSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_size_creation() {
        let size = ViewportSize::new(640, 480);
        assert_eq!(size.width, 640);
        assert_eq!(size.height, 480);
        assert!(!size.is_empty());
    }

    #[test]
    fn test_zero_dimension_is_empty() {
        assert!(ViewportSize::new(0, 480).is_empty());
        assert!(ViewportSize::new(640, 0).is_empty());
        assert!(ViewportSize::default().is_empty());
    }

    #[test]
    fn test_pixel_count_and_rgba_len() {
        let size = ViewportSize::new(1920, 1080);
        assert_eq!(size.pixel_count(), 1920 * 1080);
        assert_eq!(size.rgba_len(), 1920 * 1080 * 4);
    }

    #[test]
    fn test_area() {
        assert_eq!(ViewportSize::new(1920, 1080).area(), 1920 * 1080);
        assert_eq!(ViewportSize::new(0, 1080).area(), 0);
        assert_eq!(ViewportSize::new(u32::MAX, 2).area(), u32::MAX as u64 * 2);
    }

    #[test]
    fn test_contains_point() {
        let size = ViewportSize::new(100, 50);
        assert!(size.contains(0, 0));
        assert!(size.contains(99, 49)); // Bottom-right corner
        assert!(!size.contains(100, 49)); // Just right
        assert!(!size.contains(99, 50)); // Just below
    }

    #[test]
    fn test_from_tuple() {
        let size: ViewportSize = (320, 200).into();
        assert_eq!(size, ViewportSize::new(320, 200));
    }
}
