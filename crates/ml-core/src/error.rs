use thiserror::Error;

pub type MlResult<T> = Result<T, MlError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MlError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Out of range: {what} = {value}")]
    OutOfRange { what: &'static str, value: f64 },
}
