use crate::field::RadialFalloff;
use doubleslit_core::DEFAULT_PHYSICAL_WIDTH_MM;
use serde::{Deserialize, Serialize};

/// Frame renderer settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Physical width of the screen shown across the canvas, in mm.
    pub physical_width_mm: f64,
    /// Geometric attenuation applied on top of the interference term.
    pub falloff: RadialFalloff,
}

impl RenderConfig {
    /// Inverse-square reference distance used when the toggle is on:
    /// points at the screen distance keep full brightness.
    pub fn with_inverse_square(mut self, enabled: bool, distance_mm: f64) -> Self {
        self.falloff = if enabled {
            RadialFalloff::InverseSquare {
                reference_mm: distance_mm,
            }
        } else {
            RadialFalloff::None
        };
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            physical_width_mm: DEFAULT_PHYSICAL_WIDTH_MM,
            falloff: RadialFalloff::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_200mm_without_falloff() {
        let config = RenderConfig::default();
        assert_eq!(config.physical_width_mm, 200.0);
        assert_eq!(config.falloff, RadialFalloff::None);
    }

    #[test]
    fn inverse_square_toggle() {
        let on = RenderConfig::default().with_inverse_square(true, 1000.0);
        assert_eq!(
            on.falloff,
            RadialFalloff::InverseSquare {
                reference_mm: 1000.0
            }
        );
        let off = on.with_inverse_square(false, 1000.0);
        assert_eq!(off.falloff, RadialFalloff::None);
    }
}
