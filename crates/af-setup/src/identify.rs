//! Per-instance classification and category filtering.
//!
//! Classification is capability-based: each known concrete model shape is
//! tried by safe downcast, compound shapes before the plain shapes they
//! contain. No model carries a stored tag, so user-defined models remain
//! first-class citizens of a collection; they classify as `Undefined` and
//! are simply excluded from category queries.

use crate::types::{AccelerationModelType, MassRateModelType};
use af_models::{
    AccelerationModel, AccelerationModelBox, AerodynamicAcceleration, CannonBallRadiationPressure,
    CentralGravity, FromThrustMassRate, MassRateModel, MutualSphericalHarmonicGravity,
    SphericalHarmonicGravity, ThirdBodyGravity, ThrustAcceleration,
};

/// Identify the category of an acceleration model instance.
///
/// Total over every possible model: unrecognized types yield
/// [`AccelerationModelType::Undefined`], never an error.
pub fn acceleration_model_type(model: &dyn AccelerationModel) -> AccelerationModelType {
    let any = model.as_any();

    // The third-body wrapper is checked before the plain gravity shapes it
    // composes; its category is derived from the wrapped inner model.
    if let Some(third_body) = any.downcast_ref::<ThirdBodyGravity>() {
        let inner = third_body.inner().as_any();
        return if inner.downcast_ref::<SphericalHarmonicGravity>().is_some() {
            AccelerationModelType::ThirdBodySphericalHarmonicGravity
        } else if inner
            .downcast_ref::<MutualSphericalHarmonicGravity>()
            .is_some()
        {
            AccelerationModelType::ThirdBodyMutualSphericalHarmonicGravity
        } else {
            AccelerationModelType::ThirdBodyCentralGravity
        };
    }

    if any.downcast_ref::<SphericalHarmonicGravity>().is_some() {
        AccelerationModelType::SphericalHarmonicGravity
    } else if any.downcast_ref::<MutualSphericalHarmonicGravity>().is_some() {
        AccelerationModelType::MutualSphericalHarmonicGravity
    } else if any.downcast_ref::<CentralGravity>().is_some() {
        AccelerationModelType::CentralGravity
    } else if any.downcast_ref::<AerodynamicAcceleration>().is_some() {
        AccelerationModelType::Aerodynamic
    } else if any.downcast_ref::<CannonBallRadiationPressure>().is_some() {
        AccelerationModelType::CannonBallRadiationPressure
    } else if any.downcast_ref::<ThrustAcceleration>().is_some() {
        AccelerationModelType::ThrustAcceleration
    } else {
        AccelerationModelType::Undefined
    }
}

/// Identify the category of a mass-rate model.
///
/// `None` marks an absent model and maps to `Undefined`; any present model
/// that is not the thrust-driven kind falls back to `Custom`.
pub fn mass_rate_model_type(model: Option<&dyn MassRateModel>) -> MassRateModelType {
    match model {
        None => MassRateModelType::Undefined,
        Some(model) => {
            if model.as_any().downcast_ref::<FromThrustMassRate>().is_some() {
                MassRateModelType::FromThrust
            } else {
                MassRateModelType::Custom
            }
        }
    }
}

/// Select, in original order, the models of a collection matching a category.
///
/// A read-only projection: every element is classified exactly once per
/// call, handles are cloned, and a non-matching collection yields an empty
/// vector rather than an error.
pub fn acceleration_models_of_type(
    models: &[AccelerationModelBox],
    kind: AccelerationModelType,
) -> Vec<AccelerationModelBox> {
    let selected: Vec<AccelerationModelBox> = models
        .iter()
        .filter(|model| acceleration_model_type(model.as_ref()) == kind)
        .cloned()
        .collect();

    tracing::debug!(
        category = kind.name(),
        total = models.len(),
        matched = selected.len(),
        "selected acceleration models by category"
    );

    selected
}
