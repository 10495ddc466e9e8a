//! Aerodynamic drag with an exponential atmosphere.
//!
//! a = -½ ρ(h) |v| (Cd · A / m) v
//!
//! where ρ(h) = ρ₀ · exp(-h/H) and v is the velocity relative to an
//! atmosphere assumed static in the central-body frame.

use crate::error::{ModelError, ModelResult};
use crate::state::BodyState;
use crate::traits::AccelerationModel;
use af_core::numeric::ensure_finite_vec3;
use af_core::units::{Area, Density, Length};
use core::any::Any;
use nalgebra::Vector3;

/// Exponentially decaying density profile.
#[derive(Debug, Clone)]
pub struct ExponentialAtmosphere {
    /// Density at the body surface (kg/m³).
    pub surface_density: Density,
    /// e-folding altitude of the density profile (m).
    pub scale_height: Length,
    /// Radius of the body carrying the atmosphere (m).
    pub body_radius: Length,
}

impl ExponentialAtmosphere {
    pub fn new(surface_density: Density, scale_height: Length, body_radius: Length) -> Self {
        Self {
            surface_density,
            scale_height,
            body_radius,
        }
    }

    /// Density (kg/m³) at a radial distance from the body center.
    ///
    /// Rejects radii below the body surface; the body has re-entered.
    pub fn density_at(&self, radius_m: f64) -> ModelResult<f64> {
        let altitude = radius_m - self.body_radius.value;
        if altitude < 0.0 {
            return Err(ModelError::NonPhysical {
                what: "drag evaluated below the body surface",
            });
        }
        Ok(self.surface_density.value * (-altitude / self.scale_height.value).exp())
    }
}

/// Drag on a cannon-ball body.
pub struct AerodynamicAcceleration {
    /// Drag coefficient Cd.
    pub drag_coefficient: f64,
    /// Cross-sectional reference area.
    pub reference_area: Area,
    atmosphere: ExponentialAtmosphere,
}

impl AerodynamicAcceleration {
    pub fn new(drag_coefficient: f64, reference_area: Area, atmosphere: ExponentialAtmosphere) -> Self {
        Self {
            drag_coefficient,
            reference_area,
            atmosphere,
        }
    }

    pub fn atmosphere(&self) -> &ExponentialAtmosphere {
        &self.atmosphere
    }
}

impl AccelerationModel for AerodynamicAcceleration {
    fn name(&self) -> &str {
        "aerodynamic drag"
    }

    fn acceleration(&self, state: &BodyState) -> ModelResult<Vector3<f64>> {
        ensure_finite_vec3(&state.velocity, "drag evaluation velocity").map_err(|_| {
            ModelError::InvalidArg {
                what: "drag evaluation velocity must be finite",
            }
        })?;

        let mass = state.mass_kg()?;
        let rho = self.atmosphere.density_at(state.position.norm())?;

        let speed = state.velocity.norm();
        let ballistic = self.drag_coefficient * self.reference_area.value / mass;

        Ok(-0.5 * rho * speed * ballistic * state.velocity)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
