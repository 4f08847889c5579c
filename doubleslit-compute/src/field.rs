//! Two-source coherent interference.
//!
//! Sources sit at (-d/2, 0, 0) and (d/2, 0, 0); the screen is the plane z = L.
//! Path lengths are exact (no paraxial approximation):
//!
//! ```text
//! r1 = sqrt((x + d/2)² + y² + L²)
//! r2 = sqrt((x - d/2)² + y² + L²)
//! φ  = (2π / λ) (r2 - r1)
//! I  = ½ (1 + cos φ)
//! ```
//!
//! Everything is in millimetres. Very small λ makes φ oscillate faster than
//! the pixel grid can sample; the resulting aliasing is expected.

use doubleslit_core::OpticalParameters;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Optional geometric attenuation. Off by default so fringes stay legible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum RadialFalloff {
    #[default]
    None,
    /// Scale by min(1, reference² / r1²).
    InverseSquare { reference_mm: f64 },
}

impl RadialFalloff {
    #[inline]
    fn factor(&self, r1_sq: f64) -> f64 {
        match *self {
            RadialFalloff::None => 1.0,
            RadialFalloff::InverseSquare { reference_mm } => {
                (reference_mm * reference_mm / r1_sq).min(1.0)
            }
        }
    }
}

/// Per-frame constants for evaluating the field at many points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldGeometry {
    half_separation: f64,
    distance_sq: f64,
    wavenumber: f64,
    falloff: RadialFalloff,
}

impl FieldGeometry {
    /// Precompute for `params`. Separation and distance must be positive.
    pub fn new(params: &OpticalParameters) -> Self {
        let distance = params.distance_mm();
        Self {
            half_separation: params.separation_mm / 2.0,
            distance_sq: distance * distance,
            wavenumber: TAU / params.wavelength_mm(),
            falloff: RadialFalloff::None,
        }
    }

    pub fn with_falloff(mut self, falloff: RadialFalloff) -> Self {
        self.falloff = falloff;
        self
    }

    /// Squared distances (r1², r2²) from both sources to screen point (x, y).
    #[inline]
    fn squared_paths(&self, x_mm: f64, y_sq_plus_l_sq: f64) -> (f64, f64) {
        let dx1 = x_mm + self.half_separation;
        let dx2 = x_mm - self.half_separation;
        (dx1 * dx1 + y_sq_plus_l_sq, dx2 * dx2 + y_sq_plus_l_sq)
    }

    /// Phase difference φ at (x, y) in radians.
    pub fn phase_at(&self, x_mm: f64, y_mm: f64) -> f64 {
        let (r1_sq, r2_sq) = self.squared_paths(x_mm, y_mm * y_mm + self.distance_sq);
        self.wavenumber * (r2_sq.sqrt() - r1_sq.sqrt())
    }

    /// Normalised intensity in [0, 1] at (x, y).
    #[inline]
    pub fn intensity_at(&self, x_mm: f64, y_mm: f64) -> f64 {
        self.intensity_in_row(x_mm, y_mm * y_mm + self.distance_sq)
    }

    /// Row-constant term `y² + L²`, hoisted out of the inner pixel loop.
    #[inline]
    pub fn row_term(&self, y_mm: f64) -> f64 {
        y_mm * y_mm + self.distance_sq
    }

    /// Intensity for a point whose row term was precomputed by `row_term`.
    #[inline]
    pub fn intensity_in_row(&self, x_mm: f64, row_term: f64) -> f64 {
        let (r1_sq, r2_sq) = self.squared_paths(x_mm, row_term);
        let phase = self.wavenumber * (r2_sq.sqrt() - r1_sq.sqrt());
        let intensity = 0.5 * (1.0 + phase.cos());
        intensity * self.falloff.factor(r1_sq)
    }
}

/// Intensity at one screen point. Convenience for single evaluations;
/// frame rendering goes through `FieldGeometry` to reuse the constants.
pub fn field_intensity(x_mm: f64, y_mm: f64, params: &OpticalParameters) -> f64 {
    FieldGeometry::new(params).intensity_at(x_mm, y_mm)
}

/// Small-angle fringe spacing λL/d in millimetres.
pub fn fringe_spacing_mm(params: &OpticalParameters) -> f64 {
    params.wavelength_mm() * params.distance_mm() / params.separation_mm
}
