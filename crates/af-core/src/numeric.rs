use crate::AfError;
use nalgebra::Vector3;

/// Floating point type used throughout the workspace
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, AfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(AfError::NonFinite { what, value: v })
    }
}

/// Componentwise finiteness check for 3-vectors (positions, velocities,
/// accelerations).
pub fn ensure_finite_vec3(v: &Vector3<Real>, what: &'static str) -> Result<(), AfError> {
    for &c in v.iter() {
        if !c.is_finite() {
            return Err(AfError::NonFinite { what, value: c });
        }
    }
    Ok(())
}
