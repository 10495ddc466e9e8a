//! Gravitational acceleration models.
//!
//! Three variants with increasing field fidelity:
//! - `CentralGravity`: point mass, a = -μ/r³ · r
//! - `SphericalHarmonicGravity`: point mass plus zonal (J2-J4) corrections
//! - `MutualSphericalHarmonicGravity`: figure-figure interaction of two
//!   extended bodies, truncated to both bodies' zonal fields

use crate::error::{ModelError, ModelResult};
use crate::state::BodyState;
use crate::traits::AccelerationModel;
use af_core::numeric::ensure_finite_vec3;
use core::any::Any;
use nalgebra::Vector3;

/// Radius guard below which a field evaluation is rejected (m).
const MIN_RADIUS_M: f64 = 1.0;

/// Zonal-truncated gravity field of a single attracting body.
///
/// `reference_radius` is the equatorial radius the J coefficients are
/// normalized against; it is unused when all coefficients are zero.
#[derive(Debug, Clone)]
pub struct GravityFieldParams {
    /// Gravitational parameter μ (m³/s²).
    pub mu: f64,
    /// Equatorial reference radius (m).
    pub reference_radius: f64,
    /// Oblateness coefficient J2.
    pub j2: f64,
    /// Pear-shape coefficient J3.
    pub j3: f64,
    /// Zonal coefficient J4.
    pub j4: f64,
}

impl GravityFieldParams {
    /// Field with no zonal terms.
    pub fn point_mass(mu: f64) -> Self {
        Self {
            mu,
            reference_radius: 0.0,
            j2: 0.0,
            j3: 0.0,
            j4: 0.0,
        }
    }

    pub fn new(mu: f64, reference_radius: f64) -> Self {
        Self {
            mu,
            reference_radius,
            j2: 0.0,
            j3: 0.0,
            j4: 0.0,
        }
    }

    pub fn with_j2(mut self, j2: f64) -> Self {
        self.j2 = j2;
        self
    }

    pub fn with_j3(mut self, j3: f64) -> Self {
        self.j3 = j3;
        self
    }

    pub fn with_j4(mut self, j4: f64) -> Self {
        self.j4 = j4;
        self
    }

    /// Evaluate the field acceleration (m/s²) at a position relative to the
    /// attracting body's center.
    pub fn acceleration_at(&self, position: &Vector3<f64>) -> ModelResult<Vector3<f64>> {
        ensure_finite_vec3(position, "field evaluation position").map_err(|_| {
            ModelError::InvalidArg {
                what: "field evaluation position must be finite",
            }
        })?;

        let r = position.norm();
        if r < MIN_RADIUS_M {
            return Err(ModelError::NonPhysical {
                what: "field evaluated at the attracting body's center",
            });
        }

        let mut accel = -self.mu / (r * r * r) * position;

        if self.j2 != 0.0 {
            accel += self.j2_accel(position, r);
        }
        if self.j3 != 0.0 {
            accel += self.j3_accel(position, r);
        }
        if self.j4 != 0.0 {
            accel += self.j4_accel(position, r);
        }

        Ok(accel)
    }

    fn j2_accel(&self, position: &Vector3<f64>, r: f64) -> Vector3<f64> {
        let (x, y, z) = (position.x, position.y, position.z);
        let r2 = r * r;
        let r5 = r2 * r2 * r;
        let re2 = self.reference_radius * self.reference_radius;

        let factor = 1.5 * self.j2 * self.mu * re2 / r5;
        let z2_r2 = (z * z) / r2;

        Vector3::new(
            factor * x * (5.0 * z2_r2 - 1.0),
            factor * y * (5.0 * z2_r2 - 1.0),
            factor * z * (5.0 * z2_r2 - 3.0),
        )
    }

    fn j3_accel(&self, position: &Vector3<f64>, r: f64) -> Vector3<f64> {
        let (x, y, z) = (position.x, position.y, position.z);
        let r2 = r * r;
        let r7 = r2 * r2 * r2 * r;
        let re3 = self.reference_radius.powi(3);

        let factor = 2.5 * self.j3 * self.mu * re3 / r7;
        let z2_r2 = (z * z) / r2;

        Vector3::new(
            factor * x * z * (7.0 * z2_r2 - 3.0),
            factor * y * z * (7.0 * z2_r2 - 3.0),
            factor * (z * z * (7.0 * z2_r2 - 6.0) + 0.6 * r2),
        )
    }

    fn j4_accel(&self, position: &Vector3<f64>, r: f64) -> Vector3<f64> {
        let (x, y, z) = (position.x, position.y, position.z);
        let r2 = r * r;
        let r9 = r2 * r2 * r2 * r2 * r;
        let re4 = self.reference_radius.powi(4);

        let factor = 0.625 * self.j4 * self.mu * re4 / r9;
        let z2_r2 = (z * z) / r2;
        let z4_r4 = z2_r2 * z2_r2;

        Vector3::new(
            factor * x * (63.0 * z4_r4 - 42.0 * z2_r2 + 3.0),
            factor * y * (63.0 * z4_r4 - 42.0 * z2_r2 + 3.0),
            factor * z * (63.0 * z4_r4 - 70.0 * z2_r2 + 15.0),
        )
    }
}

/// Point-mass gravity of the central body.
#[derive(Debug, Clone)]
pub struct CentralGravity {
    /// Gravitational parameter μ (m³/s²).
    pub mu: f64,
}

impl CentralGravity {
    pub fn new(mu: f64) -> Self {
        Self { mu }
    }
}

impl AccelerationModel for CentralGravity {
    fn name(&self) -> &str {
        "central gravity"
    }

    fn acceleration(&self, state: &BodyState) -> ModelResult<Vector3<f64>> {
        GravityFieldParams::point_mass(self.mu).acceleration_at(&state.position)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Zonal spherical-harmonic gravity of the central body.
#[derive(Debug, Clone)]
pub struct SphericalHarmonicGravity {
    pub field: GravityFieldParams,
}

impl SphericalHarmonicGravity {
    pub fn new(field: GravityFieldParams) -> Self {
        Self { field }
    }
}

impl AccelerationModel for SphericalHarmonicGravity {
    fn name(&self) -> &str {
        "spherical-harmonic gravity"
    }

    fn acceleration(&self, state: &BodyState) -> ModelResult<Vector3<f64>> {
        self.field.acceleration_at(&state.position)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Figure-figure gravitational interaction between two extended bodies.
///
/// The acceleration in the relative frame sums the exerting body's field at
/// the body position and the undergoing body's field mirrored through the
/// origin; for two point-mass fields this reduces to -(μ₁+μ₂)/r³ · r.
#[derive(Debug, Clone)]
pub struct MutualSphericalHarmonicGravity {
    pub exerting: GravityFieldParams,
    pub undergoing: GravityFieldParams,
}

impl MutualSphericalHarmonicGravity {
    pub fn new(exerting: GravityFieldParams, undergoing: GravityFieldParams) -> Self {
        Self {
            exerting,
            undergoing,
        }
    }
}

impl AccelerationModel for MutualSphericalHarmonicGravity {
    fn name(&self) -> &str {
        "mutual spherical-harmonic gravity"
    }

    fn acceleration(&self, state: &BodyState) -> ModelResult<Vector3<f64>> {
        let direct = self.exerting.acceleration_at(&state.position)?;
        let mirrored = self.undergoing.acceleration_at(&-state.position)?;
        Ok(direct - mirrored)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
