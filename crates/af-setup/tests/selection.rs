//! Category filtering over model collections.

use af_core::units::constants::{EARTH_RADIUS_M, MU_EARTH, MU_MOON};
use af_core::units::{kgpm3, m, m2, newton, s};
use af_models::{
    AccelerationModel, AccelerationModelBox, AerodynamicAcceleration, BodyState, CentralGravity,
    EngineModel, ExponentialAtmosphere, GravityFieldParams, ModelResult,
    MutualSphericalHarmonicGravity, SphericalHarmonicGravity, ThirdBodyGravity,
    ThrustAcceleration,
};
use af_setup::{acceleration_model_type, acceleration_models_of_type, AccelerationModelType};
use core::any::Any;
use nalgebra::Vector3;
use std::sync::Arc;

fn central_gravity() -> AccelerationModelBox {
    Arc::new(CentralGravity::new(MU_EARTH))
}

fn aerodynamic() -> AccelerationModelBox {
    Arc::new(AerodynamicAcceleration::new(
        2.2,
        m2(4.0),
        ExponentialAtmosphere::new(kgpm3(1.225), m(8_500.0), m(EARTH_RADIUS_M)),
    ))
}

fn thrust() -> AccelerationModelBox {
    Arc::new(
        ThrustAcceleration::new(
            EngineModel::new(newton(450.0), s(310.0)),
            Vector3::new(1.0, 0.0, 0.0),
        )
        .unwrap(),
    )
}

struct DampingStub;

impl AccelerationModel for DampingStub {
    fn name(&self) -> &str {
        "damping stub"
    }

    fn acceleration(&self, _state: &BodyState) -> ModelResult<Vector3<f64>> {
        Ok(Vector3::zeros())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn filter_preserves_relative_order() {
    let models = vec![
        central_gravity(),
        aerodynamic(),
        central_gravity(),
        thrust(),
        central_gravity(),
    ];

    let selected =
        acceleration_models_of_type(&models, AccelerationModelType::CentralGravity);

    assert_eq!(selected.len(), 3);
    assert!(Arc::ptr_eq(&selected[0], &models[0]));
    assert!(Arc::ptr_eq(&selected[1], &models[2]));
    assert!(Arc::ptr_eq(&selected[2], &models[4]));
}

#[test]
fn filter_of_empty_collection_is_empty() {
    let models: Vec<AccelerationModelBox> = Vec::new();
    for kind in AccelerationModelType::ALL {
        assert!(acceleration_models_of_type(&models, kind).is_empty());
    }
}

#[test]
fn filter_without_matches_is_empty_not_an_error() {
    let models = vec![central_gravity(), thrust()];
    let selected = acceleration_models_of_type(&models, AccelerationModelType::Aerodynamic);
    assert!(selected.is_empty());
}

#[test]
fn undefined_selects_exactly_the_unrecognized_models() {
    let stub: AccelerationModelBox = Arc::new(DampingStub);
    let models = vec![central_gravity(), stub.clone(), thrust(), aerodynamic()];

    let selected = acceleration_models_of_type(&models, AccelerationModelType::Undefined);

    assert_eq!(selected.len(), 1);
    assert!(Arc::ptr_eq(&selected[0], &stub));
}

#[test]
fn filter_does_not_mutate_the_input() {
    let models = vec![central_gravity(), aerodynamic()];
    let before: Vec<_> = models.iter().map(Arc::clone).collect();

    let _ = acceleration_models_of_type(&models, AccelerationModelType::CentralGravity);

    assert_eq!(models.len(), before.len());
    for (kept, original) in models.iter().zip(&before) {
        assert!(Arc::ptr_eq(kept, original));
    }
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn model_of(kind_index: usize) -> AccelerationModelBox {
        let moon: af_models::BodyPositionFn =
            Arc::new(|| Vector3::new(384_400_000.0, 0.0, 0.0));
        match kind_index {
            0 => central_gravity(),
            1 => Arc::new(SphericalHarmonicGravity::new(
                GravityFieldParams::new(MU_EARTH, EARTH_RADIUS_M).with_j2(1.08263e-3),
            )),
            2 => Arc::new(MutualSphericalHarmonicGravity::new(
                GravityFieldParams::point_mass(MU_EARTH),
                GravityFieldParams::point_mass(MU_MOON),
            )),
            3 => aerodynamic(),
            4 => thrust(),
            5 => Arc::new(ThirdBodyGravity::new(central_gravity(), moon).unwrap()),
            _ => Arc::new(DampingStub),
        }
    }

    proptest! {
        #[test]
        fn filter_agrees_with_per_element_classification(
            kinds in prop::collection::vec(0usize..7, 0..24)
        ) {
            let models: Vec<AccelerationModelBox> =
                kinds.iter().map(|&k| model_of(k)).collect();

            for kind in AccelerationModelType::ALL {
                let expected: Vec<&AccelerationModelBox> = models
                    .iter()
                    .filter(|m| acceleration_model_type(m.as_ref()) == kind)
                    .collect();

                let selected = acceleration_models_of_type(&models, kind);

                prop_assert_eq!(selected.len(), expected.len());
                for (got, want) in selected.iter().zip(expected) {
                    prop_assert!(Arc::ptr_eq(got, want));
                }
            }
        }
    }
}
