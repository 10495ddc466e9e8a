//! Mass-rate models.
//!
//! Two kinds: a closure-backed custom rate supplied by the caller, and the
//! rate implied by a set of firing engines.

use crate::error::{ModelError, ModelResult};
use crate::state::BodyState;
use crate::thrust::EngineModel;
use crate::traits::MassRateModel;
use af_core::units::{kgps, MassRate};
use core::any::Any;
use std::sync::Arc;

/// Caller-supplied mass rate as a function of body state (kg/s).
pub type MassRateFn = Arc<dyn Fn(&BodyState) -> f64 + Send + Sync>;

/// Mass rate computed by an arbitrary caller-supplied function.
pub struct CustomMassRate {
    rate: MassRateFn,
}

impl CustomMassRate {
    pub fn new(rate: MassRateFn) -> Self {
        Self { rate }
    }
}

impl MassRateModel for CustomMassRate {
    fn name(&self) -> &str {
        "custom mass rate"
    }

    fn mass_rate(&self, state: &BodyState) -> ModelResult<MassRate> {
        let rate = (self.rate)(state);
        if !rate.is_finite() {
            return Err(ModelError::NonPhysical {
                what: "custom mass rate must be finite",
            });
        }
        Ok(kgps(rate))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Mass depletion implied by firing engines: ṁ = -Σ T / (Isp · g₀).
pub struct FromThrustMassRate {
    engines: Vec<EngineModel>,
}

impl FromThrustMassRate {
    pub fn new(engines: Vec<EngineModel>) -> Self {
        Self { engines }
    }

    pub fn engines(&self) -> &[EngineModel] {
        &self.engines
    }
}

impl MassRateModel for FromThrustMassRate {
    fn name(&self) -> &str {
        "from-thrust mass rate"
    }

    fn mass_rate(&self, _state: &BodyState) -> ModelResult<MassRate> {
        let mut total = 0.0;
        for engine in &self.engines {
            total += engine.propellant_flow_kgps()?;
        }
        Ok(kgps(-total))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
