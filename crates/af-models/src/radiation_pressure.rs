//! Cannon-ball radiation pressure.
//!
//! The body is treated as a sphere of constant reflectivity pushed directly
//! away from the radiation source:
//!
//! a = P₁ᴬᵁ · (AU/d)² · Cr · A / m · d̂

use crate::error::{ModelError, ModelResult};
use crate::state::BodyState;
use crate::third_body::BodyPositionFn;
use crate::traits::AccelerationModel;
use af_core::units::constants::{AU_M, SOLAR_PRESSURE_1AU_PA};
use af_core::units::Area;
use core::any::Any;
use nalgebra::Vector3;

/// Radiation pressure on a cannon-ball body.
pub struct CannonBallRadiationPressure {
    /// Radiation pressure coefficient Cr (1 = perfect absorber, 2 = perfect
    /// reflector).
    pub radiation_pressure_coefficient: f64,
    /// Illuminated cross-sectional area.
    pub reference_area: Area,
    source_position: BodyPositionFn,
}

impl CannonBallRadiationPressure {
    pub fn new(
        radiation_pressure_coefficient: f64,
        reference_area: Area,
        source_position: BodyPositionFn,
    ) -> Self {
        Self {
            radiation_pressure_coefficient,
            reference_area,
            source_position,
        }
    }
}

impl AccelerationModel for CannonBallRadiationPressure {
    fn name(&self) -> &str {
        "cannon-ball radiation pressure"
    }

    fn acceleration(&self, state: &BodyState) -> ModelResult<Vector3<f64>> {
        let mass = state.mass_kg()?;

        let from_source = state.position - (self.source_position)();
        let distance = from_source.norm();
        if distance <= 0.0 || !distance.is_finite() {
            return Err(ModelError::NonPhysical {
                what: "radiation pressure evaluated at the source position",
            });
        }

        let au_ratio = AU_M / distance;
        let pressure = SOLAR_PRESSURE_1AU_PA * au_ratio * au_ratio;
        let magnitude =
            pressure * self.radiation_pressure_coefficient * self.reference_area.value / mass;

        Ok(magnitude / distance * from_source)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
