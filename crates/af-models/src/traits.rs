//! Core traits for force and mass-rate models.

use crate::error::ModelResult;
use crate::state::BodyState;
use af_core::units::MassRate;
use core::any::Any;
use nalgebra::Vector3;
use std::sync::Arc;

/// Trait for models contributing to a body's total acceleration.
///
/// Implementations must be thread-safe (Send + Sync) and deterministic
/// functions of the supplied state and their own parameters. Concrete model
/// kinds are recognized by the setup layer through `as_any`, so models carry
/// no intrusive type tag.
pub trait AccelerationModel: Send + Sync {
    /// Model name for debugging and logging.
    fn name(&self) -> &str;

    /// Compute this model's acceleration contribution (m/s²) at the given
    /// state, in the central-body frame.
    fn acceleration(&self, state: &BodyState) -> ModelResult<Vector3<f64>>;

    /// Introspection hook for downcast-based identification.
    ///
    /// Implementations return `self`.
    fn as_any(&self) -> &dyn Any;
}

/// Shared-ownership handle to an acceleration model.
///
/// Handles are held jointly by the setup layer that constructed the model
/// and by every collection referencing it; consumers only ever inspect and
/// evaluate through the handle.
pub type AccelerationModelBox = Arc<dyn AccelerationModel>;

/// Trait for models of a body's instantaneous mass rate of change.
///
/// Negative rates mean depletion (the common case: propellant consumption).
pub trait MassRateModel: Send + Sync {
    /// Model name for debugging and logging.
    fn name(&self) -> &str;

    /// Compute the mass rate contribution (kg/s) at the given state.
    fn mass_rate(&self, state: &BodyState) -> ModelResult<MassRate>;

    /// Introspection hook for downcast-based identification.
    fn as_any(&self) -> &dyn Any;
}

/// Shared-ownership handle to a mass-rate model.
pub type MassRateModelBox = Arc<dyn MassRateModel>;
