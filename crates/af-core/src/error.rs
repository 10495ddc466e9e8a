use thiserror::Error;

pub type AfResult<T> = Result<T, AfError>;

#[derive(Error, Debug)]
pub enum AfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Physical invariant violated: {what}")]
    Invariant { what: &'static str },
}
