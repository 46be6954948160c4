//! Sweep configuration errors.

use thiserror::Error;

pub type SweepConfigResult<T> = Result<T, SweepError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Parameter {parameter} has no values")]
    EmptyParameter { parameter: &'static str },

    #[error("Non-finite value {value} for {parameter} at index {index}")]
    NonFiniteValue {
        parameter: &'static str,
        index: usize,
        value: f64,
    },
}
