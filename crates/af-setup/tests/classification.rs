//! Classification tests over every concrete model kind.

use af_core::units::constants::{EARTH_RADIUS_M, MU_EARTH, MU_MOON, MU_SUN};
use af_core::units::{kgpm3, m, m2, newton, s};
use af_models::{
    AccelerationModel, AccelerationModelBox, AerodynamicAcceleration, BodyPositionFn, BodyState,
    CannonBallRadiationPressure, CentralGravity, EngineModel, ExponentialAtmosphere,
    GravityFieldParams, ModelResult, MutualSphericalHarmonicGravity, SphericalHarmonicGravity,
    ThirdBodyGravity, ThrustAcceleration,
};
use af_setup::{acceleration_model_type, AccelerationModelType};
use core::any::Any;
use nalgebra::Vector3;
use std::sync::Arc;

fn moon_position() -> BodyPositionFn {
    Arc::new(|| Vector3::new(384_400_000.0, 0.0, 0.0))
}

fn central_gravity() -> AccelerationModelBox {
    Arc::new(CentralGravity::new(MU_EARTH))
}

fn spherical_harmonic_gravity() -> AccelerationModelBox {
    Arc::new(SphericalHarmonicGravity::new(
        GravityFieldParams::new(MU_EARTH, EARTH_RADIUS_M).with_j2(1.08263e-3),
    ))
}

fn mutual_spherical_harmonic_gravity() -> AccelerationModelBox {
    Arc::new(MutualSphericalHarmonicGravity::new(
        GravityFieldParams::new(MU_EARTH, EARTH_RADIUS_M).with_j2(1.08263e-3),
        GravityFieldParams::point_mass(MU_MOON),
    ))
}

fn aerodynamic() -> AccelerationModelBox {
    Arc::new(AerodynamicAcceleration::new(
        2.2,
        m2(4.0),
        ExponentialAtmosphere::new(kgpm3(1.225), m(8_500.0), m(EARTH_RADIUS_M)),
    ))
}

fn radiation_pressure() -> AccelerationModelBox {
    Arc::new(CannonBallRadiationPressure::new(
        1.3,
        m2(4.0),
        Arc::new(|| Vector3::new(1.496e11, 0.0, 0.0)),
    ))
}

fn thrust() -> AccelerationModelBox {
    Arc::new(
        ThrustAcceleration::new(
            EngineModel::new(newton(450.0), s(310.0)),
            Vector3::new(0.0, 1.0, 0.0),
        )
        .unwrap(),
    )
}

fn third_body_of(inner: AccelerationModelBox) -> AccelerationModelBox {
    Arc::new(ThirdBodyGravity::new(inner, moon_position()).unwrap())
}

// A user-defined model the classifier has never heard of.
struct SolarSailStub;

impl AccelerationModel for SolarSailStub {
    fn name(&self) -> &str {
        "solar sail stub"
    }

    fn acceleration(&self, _state: &BodyState) -> ModelResult<Vector3<f64>> {
        Ok(Vector3::new(0.0, 0.0, 1e-7))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn every_concrete_kind_maps_to_its_category() {
    let cases: Vec<(AccelerationModelBox, AccelerationModelType)> = vec![
        (central_gravity(), AccelerationModelType::CentralGravity),
        (
            spherical_harmonic_gravity(),
            AccelerationModelType::SphericalHarmonicGravity,
        ),
        (
            mutual_spherical_harmonic_gravity(),
            AccelerationModelType::MutualSphericalHarmonicGravity,
        ),
        (aerodynamic(), AccelerationModelType::Aerodynamic),
        (
            radiation_pressure(),
            AccelerationModelType::CannonBallRadiationPressure,
        ),
        (thrust(), AccelerationModelType::ThrustAcceleration),
        (
            third_body_of(central_gravity()),
            AccelerationModelType::ThirdBodyCentralGravity,
        ),
        (
            third_body_of(spherical_harmonic_gravity()),
            AccelerationModelType::ThirdBodySphericalHarmonicGravity,
        ),
        (
            third_body_of(mutual_spherical_harmonic_gravity()),
            AccelerationModelType::ThirdBodyMutualSphericalHarmonicGravity,
        ),
    ];

    for (model, expected) in &cases {
        assert_eq!(
            acceleration_model_type(model.as_ref()),
            *expected,
            "model `{}` misclassified",
            model.name()
        );
    }
}

#[test]
fn unrecognized_model_is_undefined() {
    let stub = SolarSailStub;
    assert_eq!(
        acceleration_model_type(&stub),
        AccelerationModelType::Undefined
    );
}

#[test]
fn third_body_of_spherical_harmonic_is_not_plain() {
    // A wrapper around a spherical-harmonic field must classify as the
    // third-body-of variant, never as the inner field itself and never as
    // the point-mass third-body fallback.
    let wrapper = third_body_of(spherical_harmonic_gravity());
    let kind = acceleration_model_type(wrapper.as_ref());

    assert_eq!(kind, AccelerationModelType::ThirdBodySphericalHarmonicGravity);
    assert_ne!(kind, AccelerationModelType::SphericalHarmonicGravity);
    assert_ne!(kind, AccelerationModelType::ThirdBodyCentralGravity);
}

#[test]
fn classification_is_idempotent() {
    let models = [
        central_gravity(),
        third_body_of(mutual_spherical_harmonic_gravity()),
        Arc::new(SolarSailStub) as AccelerationModelBox,
    ];

    for model in &models {
        let first = acceleration_model_type(model.as_ref());
        let second = acceleration_model_type(model.as_ref());
        assert_eq!(first, second);
    }
}

#[test]
fn classification_does_not_consume_the_model() {
    // Classifying is a read-only inspection: the handle still evaluates.
    let model = third_body_of(central_gravity());
    let _ = acceleration_model_type(model.as_ref());

    let state = BodyState::new(
        Vector3::new(EARTH_RADIUS_M + 400_000.0, 0.0, 0.0),
        Vector3::new(0.0, (MU_EARTH / (EARTH_RADIUS_M + 400_000.0)).sqrt(), 0.0),
        af_core::units::kg(500.0),
    );
    assert!(model.acceleration(&state).is_ok());
}

#[test]
fn sun_and_moon_third_bodies_share_a_category() {
    let sun_inner: AccelerationModelBox = Arc::new(CentralGravity::new(MU_SUN));
    let sun: BodyPositionFn = Arc::new(|| Vector3::new(1.496e11, 0.0, 0.0));

    let sun_wrapper = ThirdBodyGravity::new(sun_inner, sun).unwrap();
    let moon_wrapper = third_body_of(central_gravity());

    assert_eq!(
        acceleration_model_type(&sun_wrapper),
        acceleration_model_type(moon_wrapper.as_ref())
    );
}
