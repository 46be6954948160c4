//! Error types for model construction and checked evaluation.

use ml_core::error::MlError;
use thiserror::Error;

/// Errors raised by the geometry/gas model and the validating wrapper.
///
/// The unchecked evaluator never returns any of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Invalid geometry: {what} ({value})")]
    InvalidGeometry { what: &'static str, value: f64 },

    #[error("Invalid gas properties: {what} ({value})")]
    InvalidGasProperties { what: &'static str, value: f64 },

    #[error("Invalid operating point: {what} ({value})")]
    InvalidOperatingPoint { what: &'static str, value: f64 },

    #[error("Invalid empirical factor: {what} ({value})")]
    InvalidFactors { what: &'static str, value: f64 },

    #[error("Domain arithmetic: {what} ({value})")]
    DomainArithmetic { what: &'static str, value: f64 },
}

pub type ModelResult<T> = Result<T, ModelError>;

impl ModelError {
    /// Map a core numeric check failure onto a geometry error.
    pub(crate) fn geometry(e: MlError) -> Self {
        let (what, value) = what_and_value(e);
        ModelError::InvalidGeometry { what, value }
    }

    pub(crate) fn gas(e: MlError) -> Self {
        let (what, value) = what_and_value(e);
        ModelError::InvalidGasProperties { what, value }
    }
}

fn what_and_value(e: MlError) -> (&'static str, f64) {
    match e {
        MlError::NonFinite { what, value } | MlError::OutOfRange { what, value } => (what, value),
    }
}
