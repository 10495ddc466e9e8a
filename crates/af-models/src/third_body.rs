//! Third-body gravitational perturbation.
//!
//! A third-body contribution wraps an inner gravity model centered on the
//! perturbing body and evaluates the classic differential form: the direct
//! attraction on the propagated body minus the attraction on the central
//! body. The wrapper composes the inner model; it is not itself a gravity
//! variant.

use crate::error::{ModelError, ModelResult};
use crate::state::BodyState;
use crate::traits::{AccelerationModel, AccelerationModelBox};
use core::any::Any;
use nalgebra::Vector3;
use std::sync::Arc;

/// Current position of a perturbing body relative to the central body (m).
///
/// Bound by the setup layer to whatever ephemeris source it uses.
pub type BodyPositionFn = Arc<dyn Fn() -> Vector3<f64> + Send + Sync>;

/// Perturbation by a body other than the central one.
pub struct ThirdBodyGravity {
    inner: AccelerationModelBox,
    body_position: BodyPositionFn,
}

impl ThirdBodyGravity {
    /// Wrap a gravity model centered on the perturbing body.
    ///
    /// Rejects an inner model that is itself a third-body wrapper; nesting
    /// perturbations has no physical meaning in the differential form.
    pub fn new(inner: AccelerationModelBox, body_position: BodyPositionFn) -> ModelResult<Self> {
        if inner.as_any().downcast_ref::<ThirdBodyGravity>().is_some() {
            return Err(ModelError::InvalidArg {
                what: "third-body wrapper cannot wrap another third-body wrapper",
            });
        }
        Ok(Self {
            inner,
            body_position,
        })
    }

    /// The wrapped gravity model, centered on the perturbing body.
    pub fn inner(&self) -> &AccelerationModelBox {
        &self.inner
    }
}

impl AccelerationModel for ThirdBodyGravity {
    fn name(&self) -> &str {
        "third-body gravity"
    }

    fn acceleration(&self, state: &BodyState) -> ModelResult<Vector3<f64>> {
        let body_pos = (self.body_position)();

        // Direct term: inner field at the propagated body, relative to the
        // perturbing body.
        let direct_state = BodyState::new(state.position - body_pos, state.velocity, state.mass);
        let direct = self.inner.acceleration(&direct_state)?;

        // Indirect term: inner field at the central body's origin.
        let indirect_state = BodyState::new(-body_pos, Vector3::zeros(), state.mass);
        let indirect = self.inner.acceleration(&indirect_state)?;

        Ok(direct - indirect)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
