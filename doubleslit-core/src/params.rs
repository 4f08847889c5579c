//! Physical parameters of the double-slit setup.
//!
//! Units follow the controls: wavelength in nanometres, slit separation in
//! millimetres, screen distance in centimetres. All optics is computed in
//! millimetres, so the helpers below convert on the way in.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Millimetres per nanometre.
pub const MM_PER_NM: f64 = 1e-6;
/// Millimetres per centimetre.
pub const MM_PER_CM: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParameterError {
    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("{name} must be greater than zero, got {value}")]
    NotPositive { name: &'static str, value: f64 },
}

/// Wavelength, slit separation and screen distance for one render pass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpticalParameters {
    pub wavelength_nm: f64,
    pub separation_mm: f64,
    pub distance_cm: f64,
}

impl OpticalParameters {
    pub const DEFAULT_WAVELENGTH_NM: f64 = 500.0;
    pub const DEFAULT_SEPARATION_MM: f64 = 0.5;
    pub const DEFAULT_DISTANCE_CM: f64 = 100.0;

    /// Create validated parameters.
    pub fn new(
        wavelength_nm: f64,
        separation_mm: f64,
        distance_cm: f64,
    ) -> Result<Self, ParameterError> {
        let params = Self {
            wavelength_nm,
            separation_mm,
            distance_cm,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check that every value is finite and strictly positive.
    pub fn validate(&self) -> Result<(), ParameterError> {
        check_positive("wavelength", self.wavelength_nm)?;
        check_positive("separation", self.separation_mm)?;
        check_positive("distance", self.distance_cm)
    }

    pub fn wavelength_mm(&self) -> f64 {
        self.wavelength_nm * MM_PER_NM
    }

    pub fn distance_mm(&self) -> f64 {
        self.distance_cm * MM_PER_CM
    }

    /// Return a copy with the wavelength replaced.
    pub fn with_wavelength(self, wavelength_nm: f64) -> Self {
        Self {
            wavelength_nm,
            ..self
        }
    }

    pub fn with_separation(self, separation_mm: f64) -> Self {
        Self {
            separation_mm,
            ..self
        }
    }

    pub fn with_distance(self, distance_cm: f64) -> Self {
        Self {
            distance_cm,
            ..self
        }
    }
}

impl Default for OpticalParameters {
    fn default() -> Self {
        Self {
            wavelength_nm: Self::DEFAULT_WAVELENGTH_NM,
            separation_mm: Self::DEFAULT_SEPARATION_MM,
            distance_cm: Self::DEFAULT_DISTANCE_CM,
        }
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if !value.is_finite() {
        return Err(ParameterError::NotFinite { name, value });
    }
    if value <= 0.0 {
        return Err(ParameterError::NotPositive { name, value });
    }
    Ok(())
}

/// Slider bounds for one parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParameterRange {
    pub const WAVELENGTH_NM: ParameterRange = ParameterRange {
        min: 380.0,
        max: 750.0,
        step: 1.0,
    };
    pub const SEPARATION_MM: ParameterRange = ParameterRange {
        min: 0.05,
        max: 5.0,
        step: 0.01,
    };
    pub const DISTANCE_CM: ParameterRange = ParameterRange {
        min: 10.0,
        max: 200.0,
        step: 1.0,
    };

    /// Clamp a value into the slider range.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_setup() {
        let params = OpticalParameters::default();
        assert_eq!(params.wavelength_nm, 500.0);
        assert_eq!(params.separation_mm, 0.5);
        assert_eq!(params.distance_cm, 100.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn unit_conversion_to_millimetres() {
        let params = OpticalParameters::new(500.0, 0.5, 100.0).unwrap();
        assert!((params.wavelength_mm() - 5e-4).abs() < 1e-15);
        assert!((params.distance_mm() - 1000.0).abs() < 1e-12);
    }

    #[test]
    fn zero_separation_is_rejected() {
        let err = OpticalParameters::new(500.0, 0.0, 100.0).unwrap_err();
        assert_eq!(
            err,
            ParameterError::NotPositive {
                name: "separation",
                value: 0.0
            }
        );
    }

    #[test]
    fn negative_distance_is_rejected() {
        assert!(OpticalParameters::new(500.0, 0.5, -1.0).is_err());
    }

    #[test]
    fn nan_wavelength_is_rejected() {
        let err = OpticalParameters::new(f64::NAN, 0.5, 100.0).unwrap_err();
        assert!(matches!(
            err,
            ParameterError::NotFinite {
                name: "wavelength",
                ..
            }
        ));
    }

    #[test]
    fn wavelength_outside_visible_range_is_still_valid() {
        // Colour mapping handles it; the optics accept any positive wavelength.
        assert!(OpticalParameters::new(1200.0, 0.5, 100.0).is_ok());
    }

    #[test]
    fn builders_replace_single_field() {
        let params = OpticalParameters::default()
            .with_wavelength(650.0)
            .with_separation(1.0)
            .with_distance(50.0);
        assert_eq!(params, OpticalParameters::new(650.0, 1.0, 50.0).unwrap());
    }

    #[test]
    fn slider_range_clamps() {
        let range = ParameterRange::WAVELENGTH_NM;
        assert_eq!(range.clamp(300.0), 380.0);
        assert_eq!(range.clamp(800.0), 750.0);
        assert!(range.contains(500.0));
        assert!(!range.contains(751.0));
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_string(&OpticalParameters::default()).unwrap();
        assert!(json.contains("\"wavelengthNm\":500.0"));
        assert!(json.contains("\"separationMm\":0.5"));
        assert!(json.contains("\"distanceCm\":100.0"));
    }
}
