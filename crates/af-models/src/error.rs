//! Error types for model evaluation.

use af_core::error::AfError;
use thiserror::Error;

/// Errors that can occur while evaluating a force or mass-rate model.
#[derive(Error, Debug, Clone)]
pub enum ModelError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type ModelResult<T> = Result<T, ModelError>;

impl From<ModelError> for AfError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::NonPhysical { what } => AfError::Invariant { what },
            ModelError::InvalidArg { what } => AfError::InvalidArg { what },
        }
    }
}
