//! Saved experiment setups.
//!
//! Records carry the three slider values plus a name, a store-assigned id
//! and a creation timestamp. On the wire the fields are camelCase
//! (`createdAt`), matching the JSON the configuration API has always served.

use crate::{OpticalParameters, StoreError};
use serde::{Deserialize, Serialize};

/// A named parameter set as stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedConfiguration {
    pub id: u32,
    pub name: String,
    /// Nanometres
    pub wavelength: f64,
    /// Millimetres
    pub separation: f64,
    /// Centimetres
    pub distance: f64,
    /// Milliseconds since the Unix epoch
    #[serde(rename = "createdAt")]
    pub created_at_ms: f64,
}

impl SavedConfiguration {
    pub fn parameters(&self) -> OpticalParameters {
        OpticalParameters {
            wavelength_nm: self.wavelength,
            separation_mm: self.separation,
            distance_cm: self.distance,
        }
    }

    /// One-line summary for list entries.
    pub fn summary(&self) -> String {
        format!(
            "λ={}nm d={}mm L={}cm",
            self.wavelength, self.separation, self.distance
        )
    }
}

/// Payload for creating a configuration; the store fills in id and timestamp.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewConfiguration {
    pub name: String,
    pub wavelength: f64,
    pub separation: f64,
    pub distance: f64,
}

impl NewConfiguration {
    pub fn from_parameters(name: impl Into<String>, params: &OpticalParameters) -> Self {
        Self {
            name: name.into(),
            wavelength: params.wavelength_nm,
            separation: params.separation_mm,
            distance: params.distance_cm,
        }
    }

    /// Reject blank names and non-positive parameters.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.name.trim().is_empty() {
            return Err(StoreError::validation("name", "Name is required"));
        }
        for (field, value) in [
            ("wavelength", self.wavelength),
            ("separation", self.separation),
            ("distance", self.distance),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(StoreError::validation(
                    field,
                    format!("{field} must be a positive number"),
                ));
            }
        }
        Ok(())
    }
}
