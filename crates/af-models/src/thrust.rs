//! Engine thrust acceleration.

use crate::error::{ModelError, ModelResult};
use crate::state::BodyState;
use crate::traits::AccelerationModel;
use af_core::units::constants::G0_MPS2;
use af_core::units::{Force, Time};
use core::any::Any;
use nalgebra::Vector3;

/// Engine parameterization shared by thrust and thrust-driven mass rate.
#[derive(Debug, Clone)]
pub struct EngineModel {
    /// Thrust magnitude.
    pub thrust: Force,
    /// Specific impulse.
    pub specific_impulse: Time,
}

impl EngineModel {
    pub fn new(thrust: Force, specific_impulse: Time) -> Self {
        Self {
            thrust,
            specific_impulse,
        }
    }

    /// Propellant consumption rate (kg/s, positive): T / (Isp · g₀).
    pub fn propellant_flow_kgps(&self) -> ModelResult<f64> {
        let isp = self.specific_impulse.value;
        if !isp.is_finite() || isp <= 0.0 {
            return Err(ModelError::NonPhysical {
                what: "specific impulse must be positive and finite",
            });
        }
        Ok(self.thrust.value / (isp * G0_MPS2))
    }
}

/// Constant-direction engine thrust.
pub struct ThrustAcceleration {
    engine: EngineModel,
    direction: Vector3<f64>,
}

impl ThrustAcceleration {
    /// Create a thrust model firing along `direction` (normalized here).
    pub fn new(engine: EngineModel, direction: Vector3<f64>) -> ModelResult<Self> {
        let norm = direction.norm();
        if !norm.is_finite() || norm <= 0.0 {
            return Err(ModelError::InvalidArg {
                what: "thrust direction must be a non-zero finite vector",
            });
        }
        Ok(Self {
            engine,
            direction: direction / norm,
        })
    }

    pub fn engine(&self) -> &EngineModel {
        &self.engine
    }
}

impl AccelerationModel for ThrustAcceleration {
    fn name(&self) -> &str {
        "thrust"
    }

    fn acceleration(&self, state: &BodyState) -> ModelResult<Vector3<f64>> {
        let mass = state.mass_kg()?;
        Ok(self.engine.thrust.value / mass * self.direction)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
