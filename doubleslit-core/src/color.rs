//! Wavelength to display colour.
//!
//! The visible range [380, 780] nm is split into six bands. Within each band
//! the red/green/blue weights interpolate linearly between fixed endpoint
//! colours (violet, blue, cyan, green, yellow, red). A separate falloff
//! dims the ends of the spectrum where the eye is less sensitive.

use serde::{Deserialize, Serialize};

/// Shortest wavelength with a colour.
pub const VISIBLE_MIN_NM: f64 = 380.0;
/// Longest wavelength with a colour.
pub const VISIBLE_MAX_NM: f64 = 780.0;

/// Falloff at the very ends of the visible range.
const EDGE_FALLOFF: f64 = 0.3;

/// RGB tint for one wavelength. Computed once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorTint {
    pub const BLACK: ColorTint = ColorTint { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale by an intensity in [0, 1] and return opaque RGBA.
    ///
    /// Channels round to nearest with ties to even, as a `Uint8ClampedArray`
    /// stores them.
    #[inline]
    pub fn shade(&self, intensity: f64) -> [u8; 4] {
        [
            scale_channel(self.r, intensity),
            scale_channel(self.g, intensity),
            scale_channel(self.b, intensity),
            255,
        ]
    }

    /// CSS `rgb()` string, used for the wavelength swatch.
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[inline]
fn scale_channel(channel: u8, intensity: f64) -> u8 {
    (channel as f64 * intensity).round_ties_even().clamp(0.0, 255.0) as u8
}

/// Normalised (r, g, b) weights in [0, 1] before falloff.
pub fn band_weights(wavelength_nm: f64) -> (f64, f64, f64) {
    let wl = wavelength_nm;
    if (380.0..440.0).contains(&wl) {
        (-(wl - 440.0) / (440.0 - 380.0), 0.0, 1.0)
    } else if (440.0..490.0).contains(&wl) {
        (0.0, (wl - 440.0) / (490.0 - 440.0), 1.0)
    } else if (490.0..510.0).contains(&wl) {
        (0.0, 1.0, -(wl - 510.0) / (510.0 - 490.0))
    } else if (510.0..580.0).contains(&wl) {
        ((wl - 510.0) / (580.0 - 510.0), 1.0, 0.0)
    } else if (580.0..645.0).contains(&wl) {
        (1.0, -(wl - 645.0) / (645.0 - 580.0), 0.0)
    } else if (645.0..=780.0).contains(&wl) {
        (1.0, 0.0, 0.0)
    } else {
        (0.0, 0.0, 0.0)
    }
}

/// Brightness multiplier near the edges of the visible range.
///
/// 1.0 on [420, 701), ramps 0.3 -> 1.0 across [380, 420), ramps back down to
/// 0.3 across [701, 780], and is 0 outside the visible range.
pub fn intensity_falloff(wavelength_nm: f64) -> f64 {
    let wl = wavelength_nm;
    if (380.0..420.0).contains(&wl) {
        EDGE_FALLOFF + (1.0 - EDGE_FALLOFF) * (wl - 380.0) / (420.0 - 380.0)
    } else if (420.0..701.0).contains(&wl) {
        1.0
    } else if (701.0..=780.0).contains(&wl) {
        // The ramp is normalised over 80 nm, so it starts just under 1.0 at 701.
        EDGE_FALLOFF + (1.0 - EDGE_FALLOFF) * (780.0 - wl) / (780.0 - 700.0)
    } else {
        0.0
    }
}

/// Map a wavelength to its display tint. Total over all inputs; anything
/// outside [380, 780] (including NaN) is black.
pub fn wavelength_to_tint(wavelength_nm: f64) -> ColorTint {
    let (r, g, b) = band_weights(wavelength_nm);
    let factor = intensity_falloff(wavelength_nm);
    ColorTint {
        r: to_channel(r * factor),
        g: to_channel(g * factor),
        b: to_channel(b * factor),
    }
}

fn to_channel(weight: f64) -> u8 {
    (weight * 255.0).round().clamp(0.0, 255.0) as u8
}
