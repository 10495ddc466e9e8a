//! Transient evaluation input shared by all models.

use crate::error::{ModelError, ModelResult};
use af_core::units::Mass;
use nalgebra::Vector3;

/// Instantaneous state of the body a contribution is evaluated for.
///
/// Positions are metres relative to the central body, velocities m/s in the
/// same frame. Constructed fresh by the caller per evaluation; models never
/// retain or mutate it.
#[derive(Debug, Clone)]
pub struct BodyState {
    /// Position relative to the central body (m).
    pub position: Vector3<f64>,
    /// Velocity in the central-body frame (m/s).
    pub velocity: Vector3<f64>,
    /// Current body mass.
    pub mass: Mass,
}

impl BodyState {
    pub fn new(position: Vector3<f64>, velocity: Vector3<f64>, mass: Mass) -> Self {
        Self {
            position,
            velocity,
            mass,
        }
    }

    /// Body mass in kg, validated positive and finite.
    ///
    /// Models dividing a force by mass use this instead of reading the raw
    /// field, so a zero or negative mass surfaces as an error rather than an
    /// infinite acceleration.
    pub fn mass_kg(&self) -> ModelResult<f64> {
        let mass = self.mass.value;
        if !mass.is_finite() || mass <= 0.0 {
            return Err(ModelError::NonPhysical {
                what: "body mass must be positive and finite",
            });
        }
        Ok(mass)
    }
}
